use std::io::Cursor;
use std::path::Path;

use egui::{ColorImage, Pos2, Vec2, pos2, vec2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::KaleidoResult;
use crate::geometry;
use crate::mirror::LineSink;
use crate::stroke::{LineSegment, StrokeStyle};

/// The pixel buffer strokes accumulate on.
///
/// Always fully opaque. Every mutation bumps `version` so the GPU copy is only
/// refreshed when something actually changed.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    image: RgbaImage,
    background: Rgba<u8>,
    version: u64,
}

impl CanvasSurface {
    /// Create a canvas filled with `background`. Zero dimensions become 1.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let background = opaque(background);
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), background),
            background,
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width() as f32, self.height() as f32)
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Repaint the whole canvas with the background colour
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
        self.touch();
    }

    /// Reallocate to new dimensions. Prior strokes are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::from_pixel(width.max(1), height.max(1), self.background);
        self.touch();
    }

    /// True when every pixel equals `color`
    pub fn is_uniform(&self, color: Rgba<u8>) -> bool {
        self.image.pixels().all(|p| *p == color)
    }

    /// Paint a translucent background-coloured rectangle over everything.
    ///
    /// A channel that still differs from the background after blending always
    /// moves at least one step, so repeated overlays converge on it.
    pub fn fade(&mut self, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let a = alpha as f32 / 255.0;
        let target = self.background;
        for pixel in self.image.pixels_mut() {
            for c in 0..3 {
                pixel.0[c] = fade_channel(pixel.0[c], target.0[c], a);
            }
        }
        self.touch();
    }

    /// Canvas pixel position of a centre-relative point
    pub fn to_pixel_space(&self, point: Pos2) -> Pos2 {
        point + self.size() / 2.0
    }

    /// Copy the buffer into an egui image for upload
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }

    /// Encode the canvas as PNG bytes
    pub fn encode_png(&self) -> KaleidoResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.image.write_to(&mut cursor, ImageFormat::Png)?;
        Ok(cursor.into_inner())
    }

    /// Write the canvas to `path` as PNG
    pub fn save_png(&self, path: &Path) -> KaleidoResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        log::info!("Saved {}x{} canvas to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
        let a = (color.0[3] as f32 / 255.0) * coverage;
        if a <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        for c in 0..3 {
            let blended = color.0[c] as f32 * a + dst.0[c] as f32 * (1.0 - a);
            dst.0[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
        let dst_a = dst.0[3] as f32 / 255.0;
        dst.0[3] = ((a + dst_a * (1.0 - a)) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

impl LineSink for CanvasSurface {
    /// Rasterise an anti-aliased line with round caps
    fn draw_line(&mut self, line: &LineSegment, style: &StrokeStyle) {
        let from = self.to_pixel_space(line.from);
        let to = self.to_pixel_space(line.to);
        let half = style.thickness() / 2.0;
        let bounds = geometry::calculate_bounds(&[from, to], half + 1.0);

        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;
        if bounds.max.x < 0.0 || bounds.max.y < 0.0 || bounds.min.x > max_x || bounds.min.y > max_y {
            return;
        }
        let y0 = bounds.min.y.floor().max(0.0) as u32;
        let y1 = bounds.max.y.ceil().min(max_y) as u32;
        // Any pixel centre closer than this gets some coverage
        let reach = half + 0.5;

        for y in y0..=y1 {
            let centre_y = y as f32 + 0.5;
            let Some((left, right)) = geometry::capsule_row_span(from, to, centre_y, reach) else {
                continue;
            };
            let x0 = (left - 0.5).ceil().max(0.0);
            let x1 = (right - 0.5).floor().min(max_x);
            if x1 < x0 {
                continue;
            }
            for x in x0 as u32..=x1 as u32 {
                let centre = pos2(x as f32 + 0.5, centre_y);
                let distance = geometry::distance_to_line_segment(centre, from, to);
                let coverage = (reach - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, style.color(), coverage);
                }
            }
        }
        self.touch();
    }
}

fn opaque(color: Rgba<u8>) -> Rgba<u8> {
    Rgba([color.0[0], color.0[1], color.0[2], 255])
}

fn fade_channel(value: u8, target: u8, alpha: f32) -> u8 {
    if value == target {
        return value;
    }
    let blended = (target as f32 * alpha + value as f32 * (1.0 - alpha)).round() as u8;
    if blended != value {
        blended
    } else if value > target {
        value - 1
    } else {
        value + 1
    }
}
