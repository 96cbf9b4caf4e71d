//! SignMotion - animated handwriting text as SVG
//!
//! This library turns a text configuration (font, size, stroke and animation
//! settings) into an SVG snippet whose outline draws itself using CSS
//! `stroke-dasharray` / `stroke-dashoffset` keyframes.
//!
//! # Example
//!
//! ```rust
//! use signmotion::{render, AnimationPreset, Configuration};
//!
//! let mut config = Configuration::new();
//! config.set_text("Hi").unwrap();
//! config.set_preset(AnimationPreset::Wave);
//!
//! let svg = render(&config);
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("animation: wave 5s linear forwards;"));
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod preset;
pub mod renderer;
pub mod session;
pub mod settings;

pub use animation::{AnimationTiming, FillMode};
pub use config::Configuration;
pub use error::{ConfigError, ExportError, FontError};
pub use export::{copy, download, prepare_download, Clipboard, Download};
pub use font::CustomFont;
pub use preset::AnimationPreset;
pub use renderer::{render_svg, SvgConfig};
pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Render a configuration to SVG with default output options
///
/// # Example
///
/// ```rust
/// use signmotion::{render, Configuration};
///
/// let config = Configuration::default();
/// assert_eq!(render(&config), render(&config));
/// ```
pub fn render(config: &Configuration) -> String {
    render_svg(config, &SvgConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_one_text_and_style() {
        let mut config = Configuration::new();
        config.set_text("Signature").unwrap();
        let svg = render(&config);
        assert_eq!(svg.matches("<text ").count(), 1);
        assert_eq!(svg.matches("<style>").count(), 1);
        assert!(svg.contains(">Signature</text>"));
    }

    #[test]
    fn test_render_empty_text() {
        let svg = render(&Configuration::default());
        assert!(svg.contains(r#"text-anchor="middle"></text>"#));
    }

    #[test]
    fn test_render_with_custom_font() {
        let mut config = Configuration::new();
        config.set_custom_font(CustomFont::from_bytes("Hand.woff", b"font").unwrap());
        let svg = render(&config);
        assert!(svg.contains("@font-face {"));
        assert!(svg.contains("font-family: 'Hand';"));
        assert!(!svg.contains("Courier New"));
    }
}
