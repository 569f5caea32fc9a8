//! Runtime configuration.
//!
//! Loaded from an optional JSON file; every field has a default so a
//! partial file (or none at all) is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, TransitionConfig};
use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 350,
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationConfig {
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig {
            duration: Duration::from_millis(self.duration_ms),
            easing: self.easing,
        }
    }
}

/// Logical window size; the width is also the expanded banner width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// First bio line
    pub name: String,
    /// Second bio line
    pub title: String,
    pub animation: AnimationConfig,
    pub window: WindowConfig,
    /// Picked pictures are downscaled to fit this many pixels per side
    pub max_picture_dimension: u32,
    /// Tween sampling interval
    pub frame_interval_ms: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Zelyna Farrell".to_string(),
            title: "iOS Developer".to_string(),
            animation: AnimationConfig::default(),
            window: WindowConfig::default(),
            max_picture_dimension: 1024,
            frame_interval_ms: 16,
        }
    }
}

impl ProfileConfig {
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        let config: ProfileConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> ProfileResult<()> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ProfileError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.max_picture_dimension == 0 {
            return Err(ProfileError::InvalidConfig(
                "max_picture_dimension must be at least 1".to_string(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ProfileError::InvalidConfig(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ProfileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation.transition(), TransitionConfig::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ProfileConfig::from_json(r#"{ "name": "Ada", "animation": { "easing": "linear" } }"#)
            .unwrap();
        assert_eq!(config.name, "Ada");
        assert_eq!(config.title, "iOS Developer");
        assert_eq!(config.animation.easing, Easing::Linear);
        assert_eq!(config.animation.duration_ms, 350);
    }

    #[test]
    fn rejects_zero_window() {
        let err = ProfileConfig::from_json(r#"{ "window": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_frame_interval() {
        let err = ProfileConfig::from_json(r#"{ "frame_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_easing() {
        let err = ProfileConfig::from_json(r#"{ "animation": { "easing": "bounce" } }"#).unwrap_err();
        assert!(matches!(err, ProfileError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{ "title": "Rust Developer", "max_picture_dimension": 512 }"#)
            .unwrap();

        let config = ProfileConfig::from_json_file(&path).unwrap();
        assert_eq!(config.title, "Rust Developer");
        assert_eq!(config.max_picture_dimension, 512);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProfileConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}
