use egui::{Pos2, TextureId};

use crate::canvas::CanvasSurface;
use crate::command::{Command, CommandContext};
use crate::config::KaleidoConfig;
use crate::input::PointerTracker;
use crate::panels;
use crate::renderer::{FrameReport, FrameSettings, Renderer};
use crate::texture_manager::CanvasTexture;

/// The kaleidoscope window: controls on top, canvas below
#[derive(Debug)]
pub struct KaleidoApp {
    config: KaleidoConfig,
    settings: FrameSettings,
    renderer: Renderer,
    canvas: CanvasSurface,
    pointer: PointerTracker,
    texture: CanvasTexture,
    status: Option<String>,
}

impl Default for KaleidoApp {
    fn default() -> Self {
        Self::with_config(KaleidoConfig::default())
    }
}

impl KaleidoApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: KaleidoConfig) -> Self {
        let mut app = Self::with_config(config);

        // Restore the last symmetry/trail settings if we have them
        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<FrameSettings>(storage, eframe::APP_KEY) {
                log::info!("Restored settings: {:?}", settings);
                app.settings = settings;
            }
        }

        app
    }

    /// Build an app without a window. The canvas starts at 1x1 and is
    /// resized by the first frame.
    pub fn with_config(config: KaleidoConfig) -> Self {
        let settings = FrameSettings::new(config.default_sectors, false);
        Self {
            renderer: Renderer::from_config(&config),
            canvas: CanvasSurface::new(1, 1, config.background_rgba()),
            settings,
            config,
            pointer: PointerTracker::new(),
            texture: CanvasTexture::new(),
            status: None,
        }
    }

    pub fn config(&self) -> &KaleidoConfig {
        &self.config
    }

    pub fn settings(&self) -> FrameSettings {
        self.settings
    }

    pub fn settings_mut(&mut self) -> &mut FrameSettings {
        &mut self.settings
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn canvas_dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Last save/error message shown next to the controls
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Run a command against the canvas, recording the outcome in `status`
    pub fn execute_command(&mut self, command: &Command) {
        let export_path = self.config.export_path();
        let mut ctx = CommandContext {
            canvas: &mut self.canvas,
            export_path: &export_path,
        };
        match command.execute(&mut ctx) {
            Ok(()) => {
                if let Command::Resize { .. } = command {
                    // The old position belongs to a different canvas size
                    self.pointer.reset();
                }
                if let Command::Save = command {
                    self.status = Some(format!("Saved {}", export_path.display()));
                }
            }
            Err(err) => {
                log::error!("{} failed: {}", command.name(), err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// One frame: apply commands, then draw from a snapshot of the settings.
    ///
    /// `pointer` is in canvas pixels; `pressed` is whether the primary button
    /// is held on the canvas.
    pub fn step(&mut self, commands: Vec<Command>, pointer: Option<Pos2>, pressed: bool) -> FrameReport {
        for command in &commands {
            self.execute_command(command);
        }

        let settings = self.settings;
        let segment = self.pointer.update(pointer, pressed, self.canvas.size());
        self.renderer.render_frame(&settings, segment.as_ref(), &mut self.canvas)
    }

    /// Upload the canvas if needed and return its texture
    pub fn sync_texture(&mut self, ctx: &egui::Context) -> TextureId {
        self.texture.sync(ctx, &self.canvas)
    }
}

impl eframe::App for KaleidoApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = crate::input::shortcut_commands(ctx);
        let status = self.status.clone();
        commands.extend(panels::controls_panel(ctx, &mut self.settings, status.as_deref()));
        panels::central_panel(self, ctx, commands);
    }
}
