use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::CanvasSurface;

/// Keeps the GPU copy of the canvas in sync with its pixel buffer.
///
/// Uploads only when the canvas version moved since the last upload.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    upload_count: u64,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("has_handle", &self.handle.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .field("upload_count", &self.upload_count)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload the canvas if it changed and return the texture to paint
    pub fn sync(&mut self, ctx: &Context, canvas: &CanvasSurface) -> TextureId {
        let stale = self.uploaded_version != Some(canvas.version());
        if self.handle.is_none() {
            let handle = ctx.load_texture("kaleido_canvas", canvas.to_color_image(), TextureOptions::LINEAR);
            self.handle = Some(handle);
            self.upload_count += 1;
        } else if stale {
            if let Some(handle) = self.handle.as_mut() {
                handle.set(canvas.to_color_image(), TextureOptions::LINEAR);
            }
            self.upload_count += 1;
        }
        self.uploaded_version = Some(canvas.version());

        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }

    /// Number of uploads so far
    pub fn upload_count(&self) -> u64 {
        self.upload_count
    }

    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded_version
    }
}
