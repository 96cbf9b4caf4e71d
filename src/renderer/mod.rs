//! SVG renderer for animated text
//!
//! This module turns a `Configuration` into a self-contained SVG document:
//! a fixed 500x100 canvas with an inline style block and one centered text node.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, AnimationShorthand, SvgBuilder, TextRule, CANVAS_HEIGHT, CANVAS_WIDTH};
