mod timing;

use std::time::Duration;

pub use timing::TimingFunction;

/// Default length of a wheel transition
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Configuration for how the display animates between two values
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before the initial transition starts
    pub delay: Duration,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            timing,
            delay: Duration::ZERO,
        }
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Raw progress of a transition `elapsed` into its run.
    ///
    /// A zero duration is complete immediately.
    pub fn progress(duration: Duration, elapsed: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        elapsed.as_secs_f64() / duration.as_secs_f64()
    }
}

impl Default for Transition {
    /// Half a second of cubic ease-in-out
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, TimingFunction::EaseInOutCubic)
    }
}
