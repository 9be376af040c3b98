//! Easing curves for transition timing
//!
//! Curves are handed to the host engine as CSS timing functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS-compatible timing function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// CSS `ease-out`, equivalent to `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// CSS `ease-in-out`, equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    /// Custom cubic bezier curve with control points (x1, y1) and (x2, y2)
    CubicBezier {
        /// First control point x, in [0, 1]
        x1: f32,
        /// First control point y
        y1: f32,
        /// Second control point x, in [0, 1]
        x2: f32,
        /// Second control point y
        y2: f32,
    },
}

impl Easing {
    /// Create a custom cubic bezier curve
    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}
