//! Construction options for a [`Flipper`](crate::Flipper).
//!
//! ```
//! use std::time::Duration;
//! use numflip::FlipperConfig;
//!
//! let config = FlipperConfig::new()
//!     .from(42)
//!     .to(9999)
//!     .duration(Duration::from_millis(800))
//!     .separator(",");
//! assert_eq!(config.to, Some(9999));
//! ```

use std::time::Duration;

use crate::animation::{TimingFunction, Transition};
use crate::error::{FlipError, Result};

/// Content inserted between digit groups.
#[derive(Clone, Debug, PartialEq)]
pub enum Separator {
    /// The same symbol in every gap
    Single(String),
    /// One symbol per gap, consumed left to right; gaps past the end stay empty
    Sequence(Vec<String>),
}

impl Separator {
    pub fn single(symbol: impl Into<String>) -> Self {
        Separator::Single(symbol.into())
    }

    pub fn sequence<I>(symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Separator::Sequence(symbols.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Separator {
    fn from(symbol: &str) -> Self {
        Separator::single(symbol)
    }
}

impl From<String> for Separator {
    fn from(symbol: String) -> Self {
        Separator::Single(symbol)
    }
}

impl From<Vec<String>> for Separator {
    fn from(symbols: Vec<String>) -> Self {
        Separator::Sequence(symbols)
    }
}

impl From<Vec<&str>> for Separator {
    fn from(symbols: Vec<&str>) -> Self {
        Separator::sequence(symbols)
    }
}

/// Style class names handed to the surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    /// Class of each wheel; wheels also get `{container}{index}`
    pub container: String,
    /// Class of each symbol slot
    pub digit: String,
    pub separator: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "digit-container".to_string(),
            digit: "digit".to_string(),
            separator: "separator".to_string(),
        }
    }
}

/// Configuration for a flip display.
///
/// Fixed once the display is constructed; per-transition overrides go
/// through [`TransitionRequest`](crate::TransitionRequest).
#[derive(Clone, Debug)]
pub struct FlipperConfig {
    /// Initially displayed value
    pub from: u64,
    /// If set, the display animates to this value right after construction
    pub to: Option<u64>,
    /// Default duration and timing; `delay` only applies to the initial `to`
    pub transition: Transition,
    /// Symbols a wheel can show, in digit order
    pub alphabet: Vec<String>,
    /// Animate every wheel by its own delta instead of odometer-style carries
    pub direct_animation: bool,
    pub separator: Option<Separator>,
    /// Place a single separator this many digits from the right
    pub separate_only: usize,
    /// Place a separator every this many digits from the right
    pub separate_every: usize,
    pub class_names: ClassNames,
}

impl Default for FlipperConfig {
    fn default() -> Self {
        Self {
            from: 0,
            to: None,
            transition: Transition::default(),
            alphabet: (0..10).map(|d| d.to_string()).collect(),
            direct_animation: true,
            separator: None,
            separate_only: 0,
            separate_every: 3,
            class_names: ClassNames::default(),
        }
    }
}

impl FlipperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, value: u64) -> Self {
        self.from = value;
        self
    }

    pub fn to(mut self, value: u64) -> Self {
        self.to = Some(value);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.transition = self.transition.duration(duration);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.transition = self.transition.delay(delay);
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.transition = self.transition.timing(timing);
        self
    }

    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.alphabet = symbols.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn direct_animation(mut self, direct: bool) -> Self {
        self.direct_animation = direct;
        self
    }

    pub fn separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn separate_only(mut self, digits: usize) -> Self {
        self.separate_only = digits;
        self
    }

    pub fn separate_every(mut self, digits: usize) -> Self {
        self.separate_every = digits;
        self
    }

    pub fn class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    /// Repeating separator interval; disabled while `separate_only` is set
    pub fn effective_separate_every(&self) -> usize {
        if self.separate_only != 0 {
            0
        } else {
            self.separate_every
        }
    }

    /// Base the displayed values are written in: one digit per symbol
    pub fn radix(&self) -> u32 {
        self.alphabet.len() as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.alphabet.len() < 2 {
            return Err(FlipError::InvalidArgument(format!(
                "alphabet needs at least two symbols, got {}",
                self.alphabet.len()
            )));
        }
        if u32::try_from(self.alphabet.len()).is_err() {
            return Err(FlipError::InvalidArgument(
                "alphabet is too large".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlipperConfig::default();
        assert_eq!(config.from, 0);
        assert_eq!(config.to, None);
        assert_eq!(config.transition.duration, Duration::from_millis(500));
        assert_eq!(config.radix(), 10);
        assert_eq!(config.alphabet[9], "9");
        assert!(config.direct_animation);
        assert_eq!(config.effective_separate_every(), 3);
        assert_eq!(config.class_names.container, "digit-container");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_transition_builders() {
        let config = FlipperConfig::new()
            .duration(Duration::from_secs(2))
            .delay(Duration::from_millis(250))
            .timing(TimingFunction::Linear);
        assert_eq!(config.transition.duration, Duration::from_secs(2));
        assert_eq!(config.transition.delay, Duration::from_millis(250));
        assert!(matches!(config.transition.timing, TimingFunction::Linear));
    }

    #[test]
    fn test_separate_only_disables_every() {
        let config = FlipperConfig::new().separate_every(2).separate_only(4);
        assert_eq!(config.effective_separate_every(), 0);
        assert_eq!(config.separate_only, 4);
    }

    #[test]
    fn test_separator_variants() {
        assert_eq!(
            FlipperConfig::new().separator(",").separator,
            Some(Separator::Single(",".into()))
        );
        assert_eq!(
            FlipperConfig::new().separator(vec![":", "."]).separator,
            Some(Separator::Sequence(vec![":".into(), ".".into()]))
        );
    }

    #[test]
    fn test_alphabet_validation() {
        let config = FlipperConfig::new().alphabet(["x"]);
        assert!(matches!(config.validate(), Err(FlipError::InvalidArgument(_))));

        let config = FlipperConfig::new().alphabet(["🍒", "🍏", "7"]);
        assert_eq!(config.radix(), 3);
        assert!(config.validate().is_ok());
    }
}
