/// Smallest number of sectors the pattern can have
pub const MIN_SECTORS: u32 = 2;
/// Largest number of sectors the pattern can have
pub const MAX_SECTORS: u32 = 20;
/// Sector count used on first launch
pub const DEFAULT_SECTORS: u32 = 6;

/// Number of rotational slices in the pattern.
///
/// Only the count is stored. The per-sector angle is derived on every call so
/// a slider change is picked up on the very next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryState {
    sector_count: u32,
}

impl Default for SymmetryState {
    fn default() -> Self {
        Self::new(DEFAULT_SECTORS as i64)
    }
}

impl SymmetryState {
    /// Create a symmetry state, clamping the count into `[MIN_SECTORS, MAX_SECTORS]`.
    ///
    /// Takes a signed value so zero or negative counts coming from outside
    /// the slider are clamped instead of producing a degenerate angle.
    pub fn new(sector_count: i64) -> Self {
        let clamped = sector_count.clamp(MIN_SECTORS as i64, MAX_SECTORS as i64);
        if clamped != sector_count {
            log::warn!("Sector count {} out of range, clamped to {}", sector_count, clamped);
        }
        Self {
            sector_count: clamped as u32,
        }
    }

    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Rotation between neighbouring sectors, in degrees
    pub fn sector_angle_degrees(&self) -> f32 {
        360.0 / self.sector_count as f32
    }

    /// Absolute rotation of sector `index`, in degrees
    pub fn angle_for_sector(&self, index: u32) -> f32 {
        index as f32 * self.sector_angle_degrees()
    }
}
