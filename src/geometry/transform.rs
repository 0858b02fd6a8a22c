use egui::emath::Rot2;
use egui::{Pos2, Vec2};

/// The placement of one symmetry copy relative to the canvas centre.
///
/// Mirroring flips the Y axis first, then the rotation is applied, so a
/// mirrored copy sits inside the same sector as its unmirrored twin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTransform {
    pub angle_degrees: f32,
    pub mirrored: bool,
}

impl SectorTransform {
    pub fn new(angle_degrees: f32, mirrored: bool) -> Self {
        Self {
            angle_degrees,
            mirrored,
        }
    }

    /// Map a centre-relative point into this sector
    pub fn apply(&self, point: Pos2) -> Pos2 {
        let mut v = point.to_vec2();
        if self.mirrored {
            v.y = -v.y;
        }
        let rotated: Vec2 = Rot2::from_angle(self.angle_degrees.to_radians()) * v;
        rotated.to_pos2()
    }
}
