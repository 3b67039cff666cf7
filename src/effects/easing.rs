//! Easing functions for the effect tracks.
//!
//! The named variants cover the common curves; `Bezier` is the CSS-style
//! cubic bezier with control points `(x1, y1)` and `(x2, y2)`, solved
//! numerically per sample.

use serde::{Deserialize, Serialize};

/// Easing applied to a track's progress value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,

    /// Slow start, fast end.
    EaseIn,

    /// Fast start, slow end.
    EaseOut,

    /// Slow start and end.
    EaseInOut,

    /// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    Bezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// The curve the particle bursts use: a steep launch that settles
    /// gently.
    pub const BURST: Easing = Easing::Bezier {
        x1: 0.1,
        y1: 1.0,
        x2: 0.3,
        y2: 1.0,
    };

    /// Apply the easing to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Bezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One-dimensional cubic bezier polynomial with endpoints 0 and 1.
fn bezier_axis(c1: f32, c2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
}

fn bezier_axis_derivative(c1: f32, c2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * c1 + 6.0 * inv * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
}

/// Evaluate a CSS-style cubic bezier at progress `x`.
///
/// Newton iteration on the x axis to find the curve parameter, with a
/// bisection fallback when the derivative is too flat to trust.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, u) - x;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, u);
        }
        let d = bezier_axis_derivative(x1, x2, u);
        if d.abs() < 1e-6 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..24 {
        u = (lo + hi) / 2.0;
        if bezier_axis(x1, x2, u) < x {
            lo = u;
        } else {
            hi = u;
        }
    }
    bezier_axis(y1, y2, u)
}
