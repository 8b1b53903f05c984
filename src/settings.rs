//! Game settings and preferences
//!
//! Read from `cube_dash.json` in the working directory when present.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_PAN_STEP, LIGHT_DIRECTION, TARGET_FPS};
use crate::error::{Error, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate requested from the backend clock
    pub target_fps: u32,
    /// Camera offset change per tick while an arrow key is held
    pub camera_pan_step: f32,
    /// Light direction for shadows (normalized on use)
    pub light_direction: Vec3,
    /// Fixed run seed; random when unset
    pub seed: Option<u64>,

    // === HUD ===
    /// Draw score text
    pub show_hud: bool,

    // === Demo ===
    /// Autopilot jumps over obstacles
    pub idle_mode: bool,
    /// Frames the headless binary runs before quitting
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            camera_pan_step: CAMERA_PAN_STEP,
            light_direction: LIGHT_DIRECTION,
            seed: None,

            show_hud: true,

            idle_mode: true,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    /// Settings file looked up by `load`
    pub const FILE_NAME: &'static str = "cube_dash.json";

    /// Normalized light direction
    pub fn light(&self) -> Vec3 {
        self.light_direction.normalize_or_zero()
    }

    /// Reject values the game loop can't run with
    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(Error::InvalidSettings {
                message: "target_fps must be at least 1".to_string(),
            });
        }
        if self.light_direction.length_squared() == 0.0 || !self.light_direction.is_finite() {
            return Err(Error::InvalidSettings {
                message: format!("light_direction {} has no direction", self.light_direction),
            });
        }
        if !self.camera_pan_step.is_finite() {
            return Err(Error::InvalidSettings {
                message: "camera_pan_step must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load `cube_dash.json` if present, otherwise defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cube_dash_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.light().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "target_fps": 30, "seed": 5 }"#).unwrap();
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.camera_pan_step, CAMERA_PAN_STEP);
        assert!(settings.show_hud);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            target_fps: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(Error::InvalidSettings { .. })));

        let settings = Settings {
            light_direction: Vec3::ZERO,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_then_load_file() {
        let path = temp_path("save");
        let settings = Settings {
            target_fps: 144,
            idle_mode: false,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            Settings::load_from(temp_path("missing")),
            Err(Error::Io(_))
        ));

        let path = temp_path("garbage");
        std::fs::write(&path, "not json").unwrap();
        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
