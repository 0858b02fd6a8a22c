use egui::ecolor::{linear_u8_from_linear_f32, rgb_from_hsv};
use egui::{Pos2, Rect};
use image::Rgba;

use crate::geometry;

/// A single straight line in centre-relative canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Pos2,
    pub to: Pos2,
}

impl LineSegment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }

    /// Bounding box padded by half the stroke thickness
    pub fn bounds(&self, thickness: f32) -> Rect {
        geometry::calculate_bounds(&[self.from, self.to], thickness / 2.0)
    }
}

/// Paint used for every symmetry copy within one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Straight (non-premultiplied) RGBA
    color: Rgba<u8>,
    thickness: f32,
}

impl StrokeStyle {
    pub fn new(color: Rgba<u8>, thickness: f32) -> Self {
        Self { color, thickness }
    }

    /// Fully saturated, fully bright colour whose hue follows the pointer's
    /// horizontal position across the canvas.
    ///
    /// The HSV conversion runs on the sRGB channels directly, without gamma
    /// decoding, so halfway hues land on half-intensity channels (orange is
    /// `(255, 128, 0)`).
    ///
    /// `pointer_x` is in raw canvas pixels, `0.0..=canvas_width`. Positions
    /// outside the canvas clamp to the ends of the hue range.
    pub fn from_pointer_x(pointer_x: f32, canvas_width: f32, alpha: u8, thickness: f32) -> Self {
        let hue = if canvas_width > 0.0 {
            (pointer_x / canvas_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let [r, g, b] = rgb_from_hsv((hue, 1.0, 1.0)).map(linear_u8_from_linear_f32);
        Self::new(Rgba([r, g, b, alpha]), thickness)
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_hue_follows_pointer_x() {
        let left = StrokeStyle::from_pointer_x(0.0, 800.0, 100, 4.0);
        let third = StrokeStyle::from_pointer_x(800.0 / 3.0, 800.0, 100, 4.0);

        // Hue 0 is pure red, hue 1/3 is pure green
        assert_eq!(left.color(), Rgba([255, 0, 0, 100]));
        let [r, g, b, a] = third.color().0;
        assert!(r < 5 && g > 250 && b < 5, "{:?}", third.color());
        assert_eq!(a, 100);
    }

    fn assert_rgb_near(style: StrokeStyle, expected: [u8; 3]) {
        let [r, g, b, _] = style.color().0;
        for (got, want) in [r, g, b].into_iter().zip(expected) {
            assert!(got.abs_diff(want) <= 1, "{:?} != {:?}", style.color(), expected);
        }
    }

    #[test]
    fn test_intermediate_hues_are_not_gamma_shifted() {
        // 30 degrees: orange
        assert_rgb_near(StrokeStyle::from_pointer_x(800.0 / 12.0, 800.0, 100, 4.0), [255, 128, 0]);
        // 60 degrees: yellow
        assert_rgb_near(StrokeStyle::from_pointer_x(800.0 / 6.0, 800.0, 100, 4.0), [255, 255, 0]);
        // 90 degrees: chartreuse
        assert_rgb_near(StrokeStyle::from_pointer_x(200.0, 800.0, 100, 4.0), [128, 255, 0]);
        // 210 degrees: azure
        assert_rgb_near(StrokeStyle::from_pointer_x(800.0 * 7.0 / 12.0, 800.0, 100, 4.0), [0, 128, 255]);
    }

    #[test]
    fn test_hue_clamps_outside_canvas() {
        let before = StrokeStyle::from_pointer_x(-50.0, 800.0, 100, 4.0);
        let start = StrokeStyle::from_pointer_x(0.0, 800.0, 100, 4.0);
        assert_eq!(before, start);

        let zero_width = StrokeStyle::from_pointer_x(10.0, 0.0, 100, 4.0);
        assert_eq!(zero_width.color(), Rgba([255, 0, 0, 100]));
    }

    #[test]
    fn test_segment_bounds() {
        let segment = LineSegment::new(pos2(-10.0, 0.0), pos2(10.0, 5.0));
        let rect = segment.bounds(4.0);
        assert_eq!(rect.min, pos2(-12.0, -2.0));
        assert_eq!(rect.max, pos2(12.0, 7.0));
        assert!((LineSegment::new(pos2(0.0, 0.0), pos2(3.0, 4.0)).length() - 5.0).abs() < 1e-6);
    }
}
