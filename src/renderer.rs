use serde::{Deserialize, Serialize};

use crate::canvas::CanvasSurface;
use crate::config::KaleidoConfig;
use crate::input::PointerSegment;
use crate::mirror;
use crate::stroke::StrokeStyle;
use crate::symmetry::{DEFAULT_SECTORS, SymmetryState};

/// Control values read once at the start of a frame.
///
/// The controls own the mutable copy; each frame renders from a snapshot so
/// a change made mid-frame only shows up on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    pub sector_count: u32,
    pub trail_enabled: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            sector_count: DEFAULT_SECTORS,
            trail_enabled: false,
        }
    }
}

impl FrameSettings {
    pub fn new(sector_count: u32, trail_enabled: bool) -> Self {
        Self {
            sector_count,
            trail_enabled,
        }
    }

    pub fn symmetry(&self) -> SymmetryState {
        SymmetryState::new(self.sector_count as i64)
    }
}

/// What a single frame did to the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub faded: bool,
    pub lines_drawn: usize,
}

/// Turns a settings snapshot and an optional pointer segment into pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    stroke_weight: f32,
    stroke_alpha: u8,
    trail_alpha: u8,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&KaleidoConfig::default())
    }
}

impl Renderer {
    pub fn from_config(config: &KaleidoConfig) -> Self {
        Self {
            stroke_weight: config.stroke_weight,
            stroke_alpha: config.stroke_alpha,
            trail_alpha: config.trail_alpha,
        }
    }

    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    pub fn trail_alpha(&self) -> u8 {
        self.trail_alpha
    }

    /// Style shared by every copy drawn for `segment` this frame
    pub fn style_for(&self, segment: &PointerSegment, canvas_width: f32) -> StrokeStyle {
        let size = egui::vec2(canvas_width, 0.0);
        StrokeStyle::from_pointer_x(
            segment.raw_current_x(size),
            canvas_width,
            self.stroke_alpha,
            self.stroke_weight,
        )
    }

    /// Run one draw pass in place.
    ///
    /// Trail fade happens before any pointer input is drawn.
    pub fn render_frame(
        &self,
        settings: &FrameSettings,
        segment: Option<&PointerSegment>,
        canvas: &mut CanvasSurface,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        if settings.trail_enabled {
            canvas.fade(self.trail_alpha);
            report.faded = true;
        }

        if let Some(segment) = segment {
            let symmetry = settings.symmetry();
            let style = self.style_for(segment, canvas.size().x);
            report.lines_drawn = mirror::draw_symmetric(canvas, segment, &symmetry, &style);
            log::debug!(
                "Drew {} lines for {} sectors ({:?} -> {:?})",
                report.lines_drawn,
                symmetry.sector_count(),
                segment.previous,
                segment.current
            );
        }

        report
    }

    /// Value-style wrapper around [`Self::render_frame`]
    pub fn render_frame_owned(
        &self,
        settings: &FrameSettings,
        segment: Option<&PointerSegment>,
        mut canvas: CanvasSurface,
    ) -> CanvasSurface {
        self.render_frame(settings, segment, &mut canvas);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use image::Rgba;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn segment() -> PointerSegment {
        PointerSegment {
            current: pos2(40.0, 10.0),
            previous: pos2(30.0, 5.0),
        }
    }

    #[test]
    fn test_renderer_defaults_follow_config() {
        let renderer = Renderer::default();
        assert_eq!(renderer.stroke_weight(), 4.0);
        assert_eq!(renderer.trail_alpha(), 10);
    }

    #[test]
    fn test_idle_frame_without_trail_touches_nothing() {
        let renderer = Renderer::default();
        let mut canvas = CanvasSurface::new(100, 100, BLACK);
        let report = renderer.render_frame(&FrameSettings::new(6, false), None, &mut canvas);
        assert_eq!(report, FrameReport::default());
        assert_eq!(canvas.version(), 0);
    }

    #[test]
    fn test_active_frame_draws_two_lines_per_sector() {
        let renderer = Renderer::default();
        let mut canvas = CanvasSurface::new(100, 100, BLACK);
        let report = renderer.render_frame(&FrameSettings::new(5, true), Some(&segment()), &mut canvas);
        assert!(report.faded);
        assert_eq!(report.lines_drawn, 10);
        assert!(!canvas.is_uniform(BLACK));
    }

    #[test]
    fn test_out_of_range_settings_are_clamped() {
        let renderer = Renderer::default();
        let mut canvas = CanvasSurface::new(100, 100, BLACK);
        let report = renderer.render_frame(&FrameSettings::new(0, false), Some(&segment()), &mut canvas);
        assert_eq!(report.lines_drawn, 4);
    }

    #[test]
    fn test_style_uses_raw_pointer_x() {
        let renderer = Renderer::default();
        // Current x of -50 on a 100px canvas is the left edge: hue 0 (red)
        let at_left = PointerSegment {
            current: pos2(-50.0, 0.0),
            previous: pos2(-50.0, 0.0),
        };
        let style = renderer.style_for(&at_left, 100.0);
        assert_eq!(style.color(), Rgba([255, 0, 0, 100]));
        assert_eq!(style.thickness(), 4.0);
    }

    #[test]
    fn test_owned_render_matches_in_place() {
        let renderer = Renderer::default();
        let settings = FrameSettings::new(8, false);
        let mut in_place = CanvasSurface::new(80, 60, BLACK);
        renderer.render_frame(&settings, Some(&segment()), &mut in_place);
        let owned = renderer.render_frame_owned(&settings, Some(&segment()), CanvasSurface::new(80, 60, BLACK));
        assert_eq!(in_place.pixels(), owned.pixels());
    }
}
