//! Rotational and reflective copies of a pointer segment.
//!
//! Every sector's transform is computed from its absolute angle
//! (`i * sector_angle`), so sectors do not depend on each other and can be
//! inspected one at a time through [`sector_transforms`].

use crate::geometry::SectorTransform;
use crate::input::PointerSegment;
use crate::stroke::{LineSegment, StrokeStyle};
use crate::symmetry::SymmetryState;

/// Anything that can receive line draws in centre-relative coordinates
pub trait LineSink {
    fn draw_line(&mut self, line: &LineSegment, style: &StrokeStyle);
}

/// Records lines instead of rasterising them
#[derive(Debug, Default)]
pub struct LineRecorder {
    pub lines: Vec<LineSegment>,
}

impl LineSink for LineRecorder {
    fn draw_line(&mut self, line: &LineSegment, _style: &StrokeStyle) {
        self.lines.push(*line);
    }
}

/// All `2 * sector_count` transforms: for each sector the plain rotation
/// followed by its mirrored twin.
pub fn sector_transforms(symmetry: &SymmetryState) -> Vec<SectorTransform> {
    (0..symmetry.sector_count())
        .flat_map(|i| {
            let angle = symmetry.angle_for_sector(i);
            [SectorTransform::new(angle, false), SectorTransform::new(angle, true)]
        })
        .collect()
}

/// Apply every sector transform to the pointer segment
pub fn mirrored_segments(segment: &PointerSegment, symmetry: &SymmetryState) -> Vec<LineSegment> {
    sector_transforms(symmetry)
        .iter()
        .map(|t| LineSegment::new(t.apply(segment.previous), t.apply(segment.current)))
        .collect()
}

/// Draw every symmetry copy of `segment` into `sink` with one shared style.
///
/// Returns the number of lines issued.
pub fn draw_symmetric<S: LineSink + ?Sized>(
    sink: &mut S,
    segment: &PointerSegment,
    symmetry: &SymmetryState,
    style: &StrokeStyle,
) -> usize {
    let lines = mirrored_segments(segment, symmetry);
    for line in &lines {
        sink.draw_line(line, style);
    }
    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, pos2};
    use image::Rgba;

    fn style() -> StrokeStyle {
        StrokeStyle::new(Rgba([255, 0, 0, 100]), 4.0)
    }

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_transform_count_and_angles() {
        let symmetry = SymmetryState::new(3);
        let transforms = sector_transforms(&symmetry);
        assert_eq!(transforms.len(), 6);
        assert_eq!(transforms[0], SectorTransform::new(0.0, false));
        assert_eq!(transforms[1], SectorTransform::new(0.0, true));
        assert_eq!(transforms[2], SectorTransform::new(120.0, false));
        assert_eq!(transforms[5], SectorTransform::new(240.0, true));
    }

    #[test]
    fn test_first_sector_is_untouched_segment() {
        let segment = PointerSegment {
            current: pos2(30.0, 10.0),
            previous: pos2(20.0, 5.0),
        };
        let lines = mirrored_segments(&segment, &SymmetryState::new(6));
        assert!(close(lines[0].from, segment.previous));
        assert!(close(lines[0].to, segment.current));
        // Mirrored twin flips Y
        assert!(close(lines[1].from, pos2(20.0, -5.0)));
        assert!(close(lines[1].to, pos2(30.0, -10.0)));
    }

    #[test]
    fn test_draw_symmetric_issues_two_lines_per_sector() {
        let segment = PointerSegment {
            current: pos2(1.0, 2.0),
            previous: pos2(3.0, 4.0),
        };
        for n in 2..=20 {
            let mut recorder = LineRecorder::default();
            let issued = draw_symmetric(&mut recorder, &segment, &SymmetryState::new(n), &style());
            assert_eq!(issued, 2 * n as usize);
            assert_eq!(recorder.lines.len(), 2 * n as usize);
        }
    }

    #[test]
    fn test_copies_keep_distance_from_centre() {
        let segment = PointerSegment {
            current: pos2(50.0, -20.0),
            previous: pos2(40.0, -25.0),
        };
        let radius = segment.current.to_vec2().length();
        for line in mirrored_segments(&segment, &SymmetryState::new(7)) {
            assert!((line.to.to_vec2().length() - radius).abs() < 1e-3);
        }
    }
}
