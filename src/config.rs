use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KaleidoResult;
use crate::symmetry::DEFAULT_SECTORS;

/// Config file looked up in the working directory at startup
pub const CONFIG_FILE_NAME: &str = "kaleido.json";

/// Tunables for drawing and export.
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only needs the values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaleidoConfig {
    /// Canvas background as RGB
    pub background: [u8; 3],
    /// Line width in canvas pixels
    pub stroke_weight: f32,
    /// Opacity of every stroke copy
    pub stroke_alpha: u8,
    /// Opacity of the per-frame overlay in trail mode
    pub trail_alpha: u8,
    /// Sector count used when no saved settings exist
    pub default_sectors: u32,
    /// Base name of the exported image, without extension
    pub export_name: String,
    /// Directory the exported image is written to
    pub export_dir: PathBuf,
}

impl Default for KaleidoConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            stroke_weight: 4.0,
            stroke_alpha: 100,
            trail_alpha: 10,
            default_sectors: DEFAULT_SECTORS,
            export_name: "kaleido-doodle".to_string(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl KaleidoConfig {
    pub fn background_rgba(&self) -> image::Rgba<u8> {
        let [r, g, b] = self.background;
        image::Rgba([r, g, b, 255])
    }

    pub fn background_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.background;
        egui::Color32::from_rgb(r, g, b)
    }

    /// Full path of the PNG written by the save action
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(format!("{}.png", self.export_name))
    }

    /// Load a config from a JSON file
    pub fn load(path: &Path) -> KaleidoResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but cannot be parsed is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> KaleidoResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
