//! Tool styling loaded from `config/meshprobe.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/meshprobe.toml";

/// Root of the configuration file. Missing sections and fields take defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Measurement artifact styling.
    pub measure: MeasureStyle,
    /// Volume panel text.
    pub volume: VolumeStyle,
}

/// How the measure tool draws its markers and line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MeasureStyle {
    /// Marker color (RGBA, 0.0 to 1.0).
    pub marker_color: [f32; 4],
    /// Marker radius as a fraction of the content bounding-box diagonal.
    pub marker_radius_fraction: f32,
    /// Sphere tessellation.
    pub marker_segments: u32,
    /// Line color (RGBA, 0.0 to 1.0).
    pub line_color: [f32; 4],
    /// Render order for markers and line; both always draw on top.
    pub render_order: i32,
}

impl Default for MeasureStyle {
    fn default() -> Self {
        // #00b4d8
        let accent = [0.0, 0.706, 0.847, 1.0];
        Self {
            marker_color: accent,
            marker_radius_fraction: 0.005,
            marker_segments: 16,
            line_color: accent,
            render_order: 999,
        }
    }
}

/// Text used by the volume panel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VolumeStyle {
    /// Panel heading.
    pub title: String,
    /// Shown instead of figures when no model is loaded.
    pub empty_message: String,
    /// Caveat under the mesh volume row.
    pub watertight_note: String,
}

impl Default for VolumeStyle {
    fn default() -> Self {
        Self {
            title: "Volume Analysis".to_string(),
            empty_message: "Load a model to calculate volume.".to_string(),
            watertight_note: "Accurate for closed (watertight) meshes".to_string(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ProbeConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ProbeConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Probe config not found at {}. Using defaults",
                        path.display()
                    );
                }
                ProbeConfig::default()
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
