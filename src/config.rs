//! User-adjustable configuration for one animated text
//!
//! Every field has a setter that validates its input before committing it, so a
//! `Configuration` value is always within the ranges the renderer expects.

use std::ops::RangeInclusive;

use crate::animation::{AnimationTiming, FillMode};
use crate::error::ConfigError;
use crate::font::{CustomFont, DEFAULT_FONT};
use crate::preset::AnimationPreset;

/// Maximum number of characters in the text
pub const MAX_TEXT_CHARS: usize = 25;
pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 1..=10;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 10..=100;
pub const DURATION_RANGE: RangeInclusive<u32> = 1..=20;

/// All parameters that determine the rendered markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    text: String,
    font_family: String,
    custom_font: Option<CustomFont>,
    stroke_width: u32,
    font_size: u32,
    stroke_color: String,
    duration: u32,
    timing: AnimationTiming,
    fill_mode: FillMode,
    preset: AnimationPreset,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_family: DEFAULT_FONT.to_string(),
            custom_font: None,
            stroke_width: 1,
            font_size: 40,
            stroke_color: "#000000".to_string(),
            duration: 5,
            timing: AnimationTiming::default(),
            fill_mode: FillMode::default(),
            preset: AnimationPreset::default(),
        }
    }
}

impl Configuration {
    /// Create a configuration with the session defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The built-in family selection (ignored while a custom font is set)
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn custom_font(&self) -> Option<&CustomFont> {
        self.custom_font.as_ref()
    }

    /// The family the text is drawn with: the custom font when present
    pub fn active_font_family(&self) -> &str {
        match &self.custom_font {
            Some(font) => &font.name,
            None => &self.font_family,
        }
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Animation duration in whole seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn preset(&self) -> AnimationPreset {
        self.preset
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ConfigError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(ConfigError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }
        self.text = text;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> Result<(), ConfigError> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        self.font_family = family;
        Ok(())
    }

    /// Replace the custom font; it takes precedence over the built-in family
    pub fn set_custom_font(&mut self, font: CustomFont) {
        self.custom_font = Some(font);
    }

    /// Drop the custom font and fall back to the built-in family.
    ///
    /// Returns whether a custom font was set.
    pub fn clear_custom_font(&mut self) -> bool {
        self.custom_font.take().is_some()
    }

    pub fn set_stroke_width(&mut self, px: u32) -> Result<(), ConfigError> {
        self.stroke_width = check_range("stroke width", px, STROKE_WIDTH_RANGE)?;
        Ok(())
    }

    pub fn set_font_size(&mut self, px: u32) -> Result<(), ConfigError> {
        self.font_size = check_range("font size", px, FONT_SIZE_RANGE)?;
        Ok(())
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) -> Result<(), ConfigError> {
        let color = color.into();
        if !is_hex_color(&color) {
            return Err(ConfigError::InvalidColor(color));
        }
        self.stroke_color = color;
        Ok(())
    }

    pub fn set_duration(&mut self, seconds: u32) -> Result<(), ConfigError> {
        self.duration = check_range("animation duration", seconds, DURATION_RANGE)?;
        Ok(())
    }

    pub fn set_timing(&mut self, timing: AnimationTiming) {
        self.timing = timing;
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.fill_mode = fill_mode;
    }

    pub fn set_preset(&mut self, preset: AnimationPreset) {
        self.preset = preset;
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<u32, ConfigError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: i64::from(value),
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// `#rgb` or `#rrggbb`
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
