//! Runtime settings of the editor, read from a TOML file.
//!
//! Missing keys fall back to the defaults below, so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default hit test tolerance in model units.
pub const POINT_RADIUS: f64 = 0.08;

/// Default half width of the square model space.
pub const MODEL_EXTENT: f64 = 2.0;

/// Tunable values for [`Editor`](crate::Editor) and the input/output layers around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// A press within this distance of a control point grabs it instead of adding a new one.
    pub point_radius: f64,

    /// Make the other curve active once the active one received its last control point.
    pub advance_on_complete: bool,

    /// Model space spans `[-model_extent, model_extent]` on both axes.
    pub model_extent: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            point_radius: POINT_RADIUS,
            advance_on_complete: false,
            model_extent: MODEL_EXTENT,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serializes settings as TOML text.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads settings from a TOML file. Falls back to the defaults on any error.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(settings) => {
                    log::info!("settings loaded from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("malformed settings in {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("cannot read {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
