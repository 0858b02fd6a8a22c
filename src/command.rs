use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canvas::CanvasSurface;
use crate::error::KaleidoError;

/// Imperative actions coming from the control panel, shortcuts, or the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Repaint the whole canvas with the background colour
    Clear,
    /// Export the canvas as PNG
    Save,
    /// Reallocate the canvas to the new pixel dimensions (clears it)
    Resize { width: u32, height: u32 },
}

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to save canvas to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: KaleidoError,
    },
}

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// What a command needs to run
pub struct CommandContext<'a> {
    pub canvas: &'a mut CanvasSurface,
    pub export_path: &'a Path,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::Save => "Save",
            Command::Resize { .. } => "Resize",
        }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::Clear => {
                ctx.canvas.clear();
                log::info!("Canvas cleared");
                Ok(())
            }
            Command::Save => ctx
                .canvas
                .save_png(ctx.export_path)
                .map_err(|source| CommandError::SaveFailed {
                    path: ctx.export_path.to_path_buf(),
                    source,
                }),
            Command::Resize { width, height } => {
                ctx.canvas.resize(*width, *height);
                log::info!("Canvas resized to {}x{}", ctx.canvas.width(), ctx.canvas.height());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_names() {
        assert_eq!(Command::Clear.name(), "Clear");
        assert_eq!(Command::Save.name(), "Save");
        assert_eq!(Command::Resize { width: 1, height: 1 }.name(), "Resize");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let mut canvas = CanvasSurface::new(4, 4, Rgba([0, 0, 0, 255]));
        let path = std::env::temp_dir()
            .join(format!("kaleido_missing_dir_{}", std::process::id()))
            .join("nested")
            .join("out.png");
        let mut ctx = CommandContext {
            canvas: &mut canvas,
            export_path: &path,
        };
        let err = Command::Save.execute(&mut ctx).unwrap_err();
        assert!(matches!(err, CommandError::SaveFailed { .. }));
    }
}
