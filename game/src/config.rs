//! Game settings. Defaults reproduce the classic setup; a TOML file can
//! override any subset of them.

use crate::error::ConfigError;
use crate::rocket::{BoundaryCheck, DEFAULT_SPEED};
use backend::math::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// RGB
    pub background: [u8; 3],
    pub image: PathBuf,
    /// Pixels per tick
    pub speed: f32,
    /// Frames per second, 0 for no cap
    pub fps_cap: u32,
    pub boundary: BoundaryCheck,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Rocket Control".to_string(),
            background: [230, 230, 230],
            image: PathBuf::from("images/ship.bmp"),
            speed: DEFAULT_SPEED,
            fps_cap: 60,
            boundary: BoundaryCheck::default(),
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        log::info!("settings loaded from {path:?}");
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {} x {} must not be empty",
                self.width, self.height
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "speed must be a positive number, got {}",
                self.speed
            )));
        }
        if self.image.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("image path is empty".to_string()));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color {
        Color::from(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_classic_setup() {
        let s = Settings::default();
        assert_eq!((s.width, s.height), (1200, 800));
        assert_eq!(s.background_color(), Color::rgb(230, 230, 230));
        assert_eq!(s.image, PathBuf::from("images/ship.bmp"));
        assert_relative_eq!(s.speed, 1.5);
        assert_eq!(s.boundary, BoundaryCheck::Projected);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = Settings::from_toml_str(
            r#"
            speed = 3.0
            background = [0, 0, 40]
            boundary = "last_frame"
            "#,
        )
        .unwrap();
        assert_relative_eq!(s.speed, 3.0);
        assert_eq!(s.background_color(), Color::rgb(0, 0, 40));
        assert_eq!(s.boundary, BoundaryCheck::LastFrame);
        assert_eq!(s.width, 1200);
        assert_eq!(s.title, "Rocket Control");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Settings::from_toml_str("width = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("speed = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("image = \"\""),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_syntax() {
        assert!(matches!(
            Settings::from_toml_str("sped = 2.0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("speed = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = 640\nheight = 480\nfps_cap = 0").unwrap();
        let s = Settings::from_file(file.path()).unwrap();
        assert_eq!((s.width, s.height, s.fps_cap), (640, 480, 0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
