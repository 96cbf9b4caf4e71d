//! Settings files for seeding a session
//!
//! A settings file is TOML with kebab-case keys, all optional:
//!
//! ```toml
//! text = "Signed"
//! font-family = "Georgia"
//! stroke-width = 2
//! duration = 8
//! timing = "ease-in-out"
//! preset = "strokeWave"
//! ```
//!
//! Values pass through the same setters as interactive input. A relative
//! `font-file` is taken relative to the settings file itself.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::Configuration;
use crate::error::{ConfigError, FontError};
use crate::font::CustomFont;
use crate::session::Session;

/// Errors that can occur when loading or applying settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid font file: {0}")]
    Font(#[from] FontError),
}

/// Parsed settings; `None` fields keep the session's current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub text: Option<String>,
    pub font_family: Option<String>,
    pub font_file: Option<PathBuf>,
    pub stroke_width: Option<u32>,
    pub font_size: Option<u32>,
    pub stroke_color: Option<String>,
    pub duration: Option<u32>,
    pub timing: Option<String>,
    pub fill_mode: Option<String>,
    pub preset: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Self::from_str(&content)?;
        if let (Some(font_file), Some(dir)) = (settings.font_file.as_mut(), path.parent()) {
            if font_file.is_relative() {
                *font_file = dir.join(&*font_file);
            }
        }
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply every present value to `session` as a single edit.
    ///
    /// The first invalid value aborts the whole edit and the session keeps its
    /// previous configuration.
    pub fn apply(&self, session: &mut Session) -> Result<(), SettingsError> {
        session.update(|config| self.apply_to(config))
    }

    fn apply_to(&self, config: &mut Configuration) -> Result<(), SettingsError> {
        if let Some(text) = &self.text {
            config.set_text(text.as_str())?;
        }
        if let Some(family) = &self.font_family {
            config.set_font_family(family.as_str())?;
        }
        if let Some(path) = &self.font_file {
            config.set_custom_font(CustomFont::load(path)?);
        }
        if let Some(width) = self.stroke_width {
            config.set_stroke_width(width)?;
        }
        if let Some(size) = self.font_size {
            config.set_font_size(size)?;
        }
        if let Some(color) = &self.stroke_color {
            config.set_stroke_color(color.as_str())?;
        }
        if let Some(seconds) = self.duration {
            config.set_duration(seconds)?;
        }
        if let Some(timing) = &self.timing {
            config.set_timing(timing.parse()?);
        }
        if let Some(fill_mode) = &self.fill_mode {
            config.set_fill_mode(fill_mode.parse()?);
        }
        if let Some(preset) = &self.preset {
            config.set_preset(preset.parse()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationTiming, FillMode};
    use crate::preset::AnimationPreset;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r##"
text = "Hello"
font-family = "Georgia"
stroke-width = 3
font-size = 60
stroke-color = "#336699"
duration = 8
timing = "bounce"
fill-mode = "both"
preset = "ripple"
"##;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        let mut session = Session::default();
        settings.apply(&mut session).expect("Should apply");

        let config = session.config();
        assert_eq!(config.text(), "Hello");
        assert_eq!(config.font_family(), "Georgia");
        assert_eq!(config.stroke_width(), 3);
        assert_eq!(config.font_size(), 60);
        assert_eq!(config.stroke_color(), "#336699");
        assert_eq!(config.duration(), 8);
        assert_eq!(config.timing(), AnimationTiming::Bounce);
        assert_eq!(config.fill_mode(), FillMode::Both);
        assert_eq!(config.preset(), AnimationPreset::Ripple);
    }

    #[test]
    fn test_empty_settings_change_nothing() {
        let settings = Settings::from_str("").expect("Should parse");
        assert_eq!(settings, Settings::default());

        let mut session = Session::default();
        settings.apply(&mut session).unwrap();
        assert_eq!(session.config(), &Configuration::default());
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let settings = Settings::from_str("stroke-width = 11").unwrap();
        let err = settings.apply(&mut Session::default()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let settings = Settings::from_str(r#"preset = "spin""#).unwrap();
        let err = settings.apply(&mut Session::default()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_invalid_value_rolls_back_whole_file() {
        let settings = Settings::from_str(
            r##"
text = "Kept?"
stroke-color = "#112233"
font-size = 500
"##,
        )
        .unwrap();
        let mut session = Session::default();
        let renders = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&renders);
        session.subscribe(move |_, _| counter.set(counter.get() + 1));

        assert!(settings.apply(&mut session).is_err());
        assert_eq!(renders.get(), 0);
        assert_eq!(session.config(), &Configuration::default());

        let valid = Settings::from_str("text = \"Once\"\nduration = 9").unwrap();
        valid.apply(&mut session).unwrap();
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn test_font_file_relative_to_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Quill.woff"), b"woff-bytes").unwrap();
        let settings_path = dir.path().join("signature.toml");
        std::fs::write(&settings_path, "font-file = \"Quill.woff\"\n").unwrap();

        let settings = Settings::from_file(&settings_path).unwrap();
        assert_eq!(settings.font_file, Some(dir.path().join("Quill.woff")));

        let mut session = Session::default();
        settings.apply(&mut session).unwrap();
        assert_eq!(session.config().active_font_family(), "Quill");
    }

    #[test]
    fn test_absolute_font_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("Abs.ttf");
        let settings_path = dir.path().join("nested.toml");
        std::fs::write(
            &settings_path,
            format!("font-file = {:?}\n", font_path.display().to_string()),
        )
        .unwrap();

        let settings = Settings::from_file(&settings_path).unwrap();
        assert_eq!(settings.font_file, Some(font_path));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        assert!(matches!(
            Settings::from_str("colour = \"#000\""),
            Err(SettingsError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Settings::from_str(invalid).is_err());
    }
}
