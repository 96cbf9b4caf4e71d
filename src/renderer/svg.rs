//! SVG generation from a configuration

use std::fmt;

use crate::animation::{AnimationTiming, FillMode};
use crate::config::Configuration;
use crate::font::CustomFont;
use crate::preset::keyframe_lines_for;

use super::SvgConfig;

pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 100;

/// Initial dash array and offset; the whole outline starts hidden
const DASH_LENGTH: u32 = 300;

/// The `animation` shorthand: name, duration, timing function, fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationShorthand<'a> {
    pub name: &'a str,
    pub duration: u32,
    pub timing: AnimationTiming,
    pub fill_mode: FillMode,
}

impl fmt::Display for AnimationShorthand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {} {}",
            self.name, self.duration, self.timing, self.fill_mode
        )
    }
}

/// Style rule applied to the text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule<'a> {
    pub font_family: &'a str,
    pub font_size: u32,
    pub stroke_color: &'a str,
    pub stroke_width: u32,
    pub animation: AnimationShorthand<'a>,
}

impl<'a> TextRule<'a> {
    pub fn from_config(config: &'a Configuration) -> Self {
        Self {
            font_family: config.active_font_family(),
            font_size: config.font_size(),
            stroke_color: config.stroke_color(),
            stroke_width: config.stroke_width(),
            animation: AnimationShorthand {
                name: config.preset().name(),
                duration: config.duration(),
                timing: config.timing(),
                fill_mode: config.fill_mode(),
            },
        }
    }

    fn lines(&self) -> Vec<String> {
        vec![
            "text {".to_string(),
            format!("  font-family: '{}';", self.font_family),
            format!("  font-size: {}px;", self.font_size),
            "  fill: none;".to_string(),
            format!("  stroke: {};", self.stroke_color),
            format!("  stroke-width: {};", self.stroke_width),
            format!("  stroke-dasharray: {};", DASH_LENGTH),
            format!("  stroke-dashoffset: {};", DASH_LENGTH),
            format!("  animation: {};", self.animation),
            "}".to_string(),
        ]
    }
}

/// Build the SVG document piece by piece
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    text: String,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            text: String::new(),
        }
    }

    fn indent_str(&self, level: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(level)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an `@font-face` rule binding the font's name to its data
    pub fn add_font_face(&mut self, font: &CustomFont) {
        self.styles.extend(font.font_face_lines());
    }

    pub fn add_text_rule(&mut self, rule: &TextRule<'_>) {
        self.styles.extend(rule.lines());
    }

    /// Add the keyframes for `name`; unknown names add nothing
    pub fn add_keyframes(&mut self, name: &str) {
        self.styles.extend(keyframe_lines_for(name));
    }

    /// Set the content of the text node
    pub fn set_text(&mut self, text: &str) {
        self.text = if self.config.escape_text {
            escape_xml(text)
        } else {
            text.to_string()
        };
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        ));
        svg.push_str(nl);

        svg.push_str(&self.indent_str(1));
        svg.push_str("<style>");
        svg.push_str(nl);
        let style_indent = self.indent_str(2);
        for line in &self.styles {
            if self.config.pretty_print {
                svg.push_str(&style_indent);
                svg.push_str(line);
            } else {
                svg.push_str(line.trim());
            }
            svg.push_str(nl);
        }
        svg.push_str(&self.indent_str(1));
        svg.push_str("</style>");
        svg.push_str(nl);

        svg.push_str(&self.indent_str(1));
        svg.push_str(&format!(
            r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle">{}</text>"#,
            self.text
        ));
        svg.push_str(nl);

        svg.push_str("</svg>");
        svg
    }
}

/// Render a configuration to an SVG string.
///
/// Total over every valid `Configuration`; the result depends on nothing else.
pub fn render_svg(config: &Configuration, svg_config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(svg_config.clone());

    if let Some(font) = config.custom_font() {
        builder.add_font_face(font);
    }

    let rule = TextRule::from_config(config);
    builder.add_text_rule(&rule);
    builder.add_keyframes(rule.animation.name);
    builder.set_text(config.text());

    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
