use egui::Slider;

use crate::command::Command;
use crate::renderer::FrameSettings;
use crate::symmetry::{MAX_SECTORS, MIN_SECTORS};

/// Top bar with save/clear buttons, the symmetry slider and the trail toggle.
///
/// Edits `settings` in place and returns the commands the user triggered.
pub fn controls_panel(ctx: &egui::Context, settings: &mut FrameSettings, status: Option<&str>) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Save").on_hover_text("Ctrl+S").clicked() {
                log::info!("Save requested from UI");
                commands.push(Command::Save);
            }
            if ui.button("Clear").on_hover_text("Delete").clicked() {
                log::info!("Clear requested from UI");
                commands.push(Command::Clear);
            }

            ui.separator();

            let before = settings.sector_count;
            ui.add(
                Slider::new(&mut settings.sector_count, MIN_SECTORS..=MAX_SECTORS)
                    .step_by(1.0)
                    .text("Symmetry"),
            );
            if settings.sector_count != before {
                log::debug!("Symmetry changed: {} -> {}", before, settings.sector_count);
            }

            if ui.checkbox(&mut settings.trail_enabled, "Trail mode").changed() {
                log::info!("Trail mode {}", if settings.trail_enabled { "on" } else { "off" });
            }

            if let Some(status) = status {
                ui.separator();
                ui.label(status);
            }
        });
    });

    commands
}
