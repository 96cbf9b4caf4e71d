//! Animation preset table
//!
//! Ten named keyframe sequences driving `stroke-dasharray` / `stroke-dashoffset`
//! (and, for `sweep`, a scale transform). The stop values are consumed by
//! downstream users of the exported markup and must stay exactly as listed.
//! Presets carry no parameters; duration, timing and fill mode are applied
//! globally through the `animation` shorthand.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// One keyframe stop: a selector (`0%`, `to`, `0%, 100%`) and its declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeStop {
    pub selector: &'static str,
    pub declarations: &'static [(&'static str, &'static str)],
}

impl KeyframeStop {
    const fn new(
        selector: &'static str,
        declarations: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            selector,
            declarations,
        }
    }

    fn to_css(self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {{ {} }}", self.selector, body)
    }
}

/// A named animation preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationPreset {
    #[default]
    Dash,
    StrokeDashPulse,
    Wave,
    DashSlide,
    DashBounce,
    ZigzagStroke,
    StrokeWave,
    Morph,
    Ripple,
    Sweep,
}

const DASH: &[KeyframeStop] = &[KeyframeStop::new("to", &[("stroke-dashoffset", "0")])];

const STROKE_DASH_PULSE: &[KeyframeStop] = &[
    KeyframeStop::new("0%, 100%", &[("stroke-dashoffset", "300")]),
    KeyframeStop::new("50%", &[("stroke-dashoffset", "0")]),
];

const WAVE: &[KeyframeStop] = &[
    KeyframeStop::new("0%", &[("stroke-dasharray", "5, 5"), ("stroke-dashoffset", "0")]),
    KeyframeStop::new("50%", &[("stroke-dasharray", "15, 5"), ("stroke-dashoffset", "10")]),
    KeyframeStop::new("100%", &[("stroke-dasharray", "5, 5"), ("stroke-dashoffset", "0")]),
];

const DASH_SLIDE: &[KeyframeStop] = &[
    KeyframeStop::new("from", &[("stroke-dashoffset", "300")]),
    KeyframeStop::new("to", &[("stroke-dashoffset", "-300")]),
];

const DASH_BOUNCE: &[KeyframeStop] = &[
    KeyframeStop::new("0%, 100%", &[("stroke-dashoffset", "300")]),
    KeyframeStop::new("50%", &[("stroke-dashoffset", "150")]),
];

// The trailing 100% stop overrides the shared `0%, 100%` one.
const ZIGZAG_STROKE: &[KeyframeStop] = &[
    KeyframeStop::new("0%, 100%", &[("stroke-dasharray", "10, 5"), ("stroke-dashoffset", "0")]),
    KeyframeStop::new("50%", &[("stroke-dasharray", "5, 10"), ("stroke-dashoffset", "15")]),
    KeyframeStop::new("100%", &[("stroke-dasharray", "0, 0"), ("stroke-dashoffset", "0")]),
];

const STROKE_WAVE: &[KeyframeStop] = &[
    KeyframeStop::new("0%", &[("stroke-dasharray", "5, 10"), ("stroke-dashoffset", "0")]),
    KeyframeStop::new("50%", &[("stroke-dasharray", "10, 5"), ("stroke-dashoffset", "10")]),
    KeyframeStop::new("100%", &[("stroke-dasharray", "0, 0"), ("stroke-dashoffset", "10")]),
];

// `stroke: 'red'` is not valid CSS and browsers drop it; kept as published.
const MORPH: &[KeyframeStop] = &[
    KeyframeStop::new("0%", &[("stroke-dasharray", "10, 10"), ("stroke-dashoffset", "0")]),
    KeyframeStop::new(
        "50%",
        &[
            ("stroke-dasharray", "30, 5"),
            ("stroke-dashoffset", "15"),
            ("stroke", "'red'"),
        ],
    ),
    KeyframeStop::new("100%", &[("stroke-dasharray", "10, 10"), ("stroke-dashoffset", "0")]),
];

const RIPPLE: &[KeyframeStop] = &[
    KeyframeStop::new("0%", &[("stroke-dasharray", "5, 10"), ("stroke-dashoffset", "0")]),
    KeyframeStop::new("50%", &[("stroke-dasharray", "10, 15"), ("stroke-dashoffset", "10")]),
    KeyframeStop::new("100%", &[("stroke-dasharray", "0, 0"), ("stroke-dashoffset", "0")]),
];

const SWEEP: &[KeyframeStop] = &[
    KeyframeStop::new("0%", &[("stroke-dasharray", "10, 15"), ("transform", "scale(1.1)")]),
    KeyframeStop::new("100%", &[("stroke-dasharray", "5, 0"), ("transform", "scale(1.0)")]),
];

impl AnimationPreset {
    pub const ALL: [AnimationPreset; 10] = [
        AnimationPreset::Dash,
        AnimationPreset::StrokeDashPulse,
        AnimationPreset::Wave,
        AnimationPreset::DashSlide,
        AnimationPreset::DashBounce,
        AnimationPreset::ZigzagStroke,
        AnimationPreset::StrokeWave,
        AnimationPreset::Morph,
        AnimationPreset::Ripple,
        AnimationPreset::Sweep,
    ];

    /// Keyframes name, also used as the `animation-name` token
    pub fn name(self) -> &'static str {
        match self {
            AnimationPreset::Dash => "dash",
            AnimationPreset::StrokeDashPulse => "strokeDashPulse",
            AnimationPreset::Wave => "wave",
            AnimationPreset::DashSlide => "dashSlide",
            AnimationPreset::DashBounce => "dashBounce",
            AnimationPreset::ZigzagStroke => "zigzagStroke",
            AnimationPreset::StrokeWave => "strokeWave",
            AnimationPreset::Morph => "morph",
            AnimationPreset::Ripple => "ripple",
            AnimationPreset::Sweep => "sweep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationPreset::Dash => "Dash",
            AnimationPreset::StrokeDashPulse => "Stroke Dash Pulse",
            AnimationPreset::Wave => "Wave",
            AnimationPreset::DashSlide => "Dash Slide",
            AnimationPreset::DashBounce => "Dash Bounce",
            AnimationPreset::ZigzagStroke => "Zigzag Stroke",
            AnimationPreset::StrokeWave => "Stroke Wave",
            AnimationPreset::Morph => "Morph",
            AnimationPreset::Ripple => "Ripple",
            AnimationPreset::Sweep => "Sweep",
        }
    }

    pub fn stops(self) -> &'static [KeyframeStop] {
        match self {
            AnimationPreset::Dash => DASH,
            AnimationPreset::StrokeDashPulse => STROKE_DASH_PULSE,
            AnimationPreset::Wave => WAVE,
            AnimationPreset::DashSlide => DASH_SLIDE,
            AnimationPreset::DashBounce => DASH_BOUNCE,
            AnimationPreset::ZigzagStroke => ZIGZAG_STROKE,
            AnimationPreset::StrokeWave => STROKE_WAVE,
            AnimationPreset::Morph => MORPH,
            AnimationPreset::Ripple => RIPPLE,
            AnimationPreset::Sweep => SWEEP,
        }
    }

    /// The `@keyframes` rule as CSS lines, without indentation
    pub fn keyframe_lines(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.stops().len() + 2);
        lines.push(format!("@keyframes {} {{", self.name()));
        lines.extend(self.stops().iter().map(|stop| format!("  {}", stop.to_css())));
        lines.push("}".to_string());
        lines
    }

    /// The `@keyframes` rule as a single newline-separated block
    pub fn keyframes(self) -> String {
        self.keyframe_lines().join("\n")
    }

    /// Look up a preset by its keyframes name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Keyframe lines for an arbitrary animation name
///
/// Names outside the table resolve to an empty block rather than an error.
pub fn keyframe_lines_for(name: &str) -> Vec<String> {
    AnimationPreset::from_name(name)
        .map(AnimationPreset::keyframe_lines)
        .unwrap_or_default()
}

impl FromStr for AnimationPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for AnimationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
