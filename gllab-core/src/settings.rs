//! Runtime settings, read from a JSON file.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{camera::MoveSpeed, shader::ShaderPolicy};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SettingsError {
    /// Whether the file simply does not exist, which is not worth a warning.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Every field is optional in the file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    pub mouse_sensitivity: f32,
    /// Distance the camera moves per frame while a movement key is held.
    pub camera_speed_per_frame: f32,
    /// Distance per second, used by exercises that scale movement by frame time.
    pub camera_speed_per_second: f32,
    pub shader_policy: ShaderPolicy,
    /// Directory the texture images are read from.
    pub asset_dir: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 1000,
            vsync: true,
            mouse_sensitivity: 0.075,
            camera_speed_per_frame: 0.05,
            camera_speed_per_second: 2.5,
            shader_policy: ShaderPolicy::Fallback,
            asset_dir: PathBuf::from("assets"),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The configured log level. Unknown names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn per_frame_speed(&self) -> MoveSpeed {
        MoveSpeed::PerFrame(self.camera_speed_per_frame)
    }

    pub fn per_second_speed(&self) -> MoveSpeed {
        MoveSpeed::PerSecond(self.camera_speed_per_second)
    }

    /// Width divided by height of the initial window.
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{ "vsync": false, "shader_policy": "strict" }"#)
            .unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.shader_policy, ShaderPolicy::Strict);
        assert_eq!(settings.window_width, 1000);
        assert_eq!(settings.mouse_sensitivity, 0.075);
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            window_width: 640,
            log_level: "debug".to_string(),
            log_file: Some(PathBuf::from("gllab.log")),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ window_width: }"),
            Err(SettingsError::Json(_))
        ));
        assert!(Settings::from_json(r#"{ "window_width": "wide" }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("gllab-settings-that-does-not-exist.json");
        let err = Settings::load(&path).unwrap_err();
        assert!(err.is_not_found());
        assert!(!Settings::from_json("[").unwrap_err().is_not_found());
    }

    #[test]
    fn test_level_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
        settings.log_level = "TRACE".to_string();
        assert_eq!(settings.level_filter(), log::LevelFilter::Trace);
        settings.log_level = "loud".to_string();
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_speeds() {
        let settings = Settings::default();
        assert_eq!(settings.per_frame_speed(), MoveSpeed::PerFrame(0.05));
        assert_eq!(settings.per_second_speed(), MoveSpeed::PerSecond(2.5));
        assert_eq!(settings.aspect_ratio(), 1.0);
    }
}
