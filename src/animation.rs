//! Easing and fill-mode options for the animation shorthand
//!
//! Each option maps to a fixed CSS token. The tokens are what the selector
//! controls emit and what ends up verbatim in the `animation:` declaration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Easing function applied to the stroke animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationTiming {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshooting cubic-bezier curve
    Bounce,
}

impl AnimationTiming {
    pub const ALL: [AnimationTiming; 6] = [
        AnimationTiming::Linear,
        AnimationTiming::Ease,
        AnimationTiming::EaseIn,
        AnimationTiming::EaseOut,
        AnimationTiming::EaseInOut,
        AnimationTiming::Bounce,
    ];

    /// The CSS timing-function token
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationTiming::Linear => "linear",
            AnimationTiming::Ease => "ease",
            AnimationTiming::EaseIn => "ease-in",
            AnimationTiming::EaseOut => "ease-out",
            AnimationTiming::EaseInOut => "ease-in-out",
            AnimationTiming::Bounce => "cubic-bezier(0.68, -0.55, 0.27, 1.55)",
        }
    }

    /// Human-readable label for option lists
    pub fn label(self) -> &'static str {
        match self {
            AnimationTiming::Linear => "Linear",
            AnimationTiming::Ease => "Ease",
            AnimationTiming::EaseIn => "Ease In",
            AnimationTiming::EaseOut => "Ease Out",
            AnimationTiming::EaseInOut => "Ease In-Out",
            AnimationTiming::Bounce => "Bounce",
        }
    }
}

impl FromStr for AnimationTiming {
    type Err = ConfigError;

    /// Accepts the CSS token, plus `bounce` as a shorthand for the bezier curve
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bounce") {
            return Ok(AnimationTiming::Bounce);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownTiming(s.to_string()))
    }
}

impl fmt::Display for AnimationTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `animation-fill-mode` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    None,
    #[default]
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [
        FillMode::None,
        FillMode::Forwards,
        FillMode::Backwards,
        FillMode::Both,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FillMode::None => "None",
            FillMode::Forwards => "Forwards",
            FillMode::Backwards => "Backwards",
            FillMode::Both => "Both",
        }
    }
}

impl FromStr for FillMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFillMode(s.to_string()))
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
