//! Timing functions (easing curves) for wheel transitions.
//!
//! A timing function maps the raw progress of a transition (elapsed time over
//! duration) onto the fraction of the digit delta that the wheels have covered.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow
//! - [`TimingFunction::EaseInOut`] - Quadratic slow start and end
//! - [`TimingFunction::EaseInOutCubic`] - Cubic slow start and end (default)
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```
//! use numflip::animation::TimingFunction;
//!
//! let bounce = TimingFunction::custom(|t| 1.0 - (1.0 - t).powi(4));
//! assert_eq!(bounce.evaluate(1.0), 1.0);
//! ```

use std::sync::Arc;

/// Timing function that controls the progress curve of a transition
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down (quadratic)
    EaseInOut,
    /// Starts slow, speeds up, then slows down (cubic)
    #[default]
    EaseInOutCubic,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f64, f64, f64, f64),
    /// Custom timing function
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at progress `t`.
    ///
    /// `t` is normally in `[0, 1]` but is passed through unclamped; the
    /// built-in curves return exactly `1.0` at `t == 1.0`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::EaseInOutCubic => ease_in_out_cubic(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::EaseInOutCubic => write!(f, "EaseInOutCubic"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f64) -> f64 {
    t * t
}

fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t.powi(3)
    } else {
        0.5 * ((t - 2.0).powi(3) + 2.0)
    }
}

/// Cubic bezier curve evaluation
/// Simplified implementation assuming x1, x2 are in [0, 1]
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    // Newton-Raphson: find the curve parameter whose x equals t
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = bezier_component(current_t, x1, x2);
        let current_slope = bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-9 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
    }
    bezier_component(current_t, y1, y2)
}

fn bezier_component(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_cubic_default_endpoints() {
        let timing = TimingFunction::default();
        assert_eq!(timing.evaluate(0.0), 0.0);
        assert_eq!(timing.evaluate(0.5), 0.5);
        assert_eq!(timing.evaluate(1.0), 1.0);
        assert_eq!(timing.evaluate(0.25), 0.0625);
        assert!(timing.evaluate(0.75) > 0.9);
    }

    #[test]
    fn test_cubic_bezier_linear_control_points() {
        let timing = TimingFunction::CubicBezier(0.0, 0.0, 1.0, 1.0);
        assert!((timing.evaluate(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_custom() {
        let timing = TimingFunction::custom(|t| t * 0.5);
        assert_eq!(timing.evaluate(1.0), 0.5);
        assert_eq!(format!("{:?}", timing), "Custom");
    }
}
