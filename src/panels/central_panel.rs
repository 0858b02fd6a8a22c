use egui::{Color32, Rect, Sense, pos2};

use crate::KaleidoApp;
use crate::command::Command;
use crate::input;

/// Drawing surface filling the rest of the window
pub fn central_panel(app: &mut KaleidoApp, ctx: &egui::Context, mut commands: Vec<Command>) {
    let frame = egui::Frame::none().fill(app.config().background_color32());

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;
        let pixels_per_point = ctx.pixels_per_point();

        let width = (rect.width() * pixels_per_point).round() as u32;
        let height = (rect.height() * pixels_per_point).round() as u32;
        // Minimised windows report an empty rect; keep the old canvas then
        if width > 0 && height > 0 && (width, height) != app.canvas_dimensions() {
            commands.insert(0, Command::Resize { width, height });
        }

        let pointer = ctx
            .input(|i| i.pointer.latest_pos())
            .map(|pos| input::to_canvas_pixels(pos, rect.min, pixels_per_point));
        let pressed = response.is_pointer_button_down_on();

        app.step(commands, pointer, pressed);

        let texture_id = app.sync_texture(ctx);
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture_id, rect, uv, Color32::WHITE);
    });

    // Frame-driven: keep drawing even without new input
    ctx.request_repaint();
}
