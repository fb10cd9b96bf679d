//! Flip-style animated number display.
//!
//! A [`Flipper`] renders a non-negative integer as a row of digit wheels and
//! rolls the wheels to a new value with an eased, time-based animation. It
//! draws through the [`Surface`](surface::Surface) trait, so any backend able
//! to create, move and measure elements can host it; [`MemorySurface`] is a
//! headless backend for tests and terminal output.

pub mod animation;
pub mod config;
pub mod digits;
pub mod error;
pub mod flipper;
pub mod jobs;
pub mod layout;
pub mod surface;
pub mod transform;
pub mod tree;

pub use config::{ClassNames, FlipperConfig, Separator};
pub use error::{FlipError, Result};
pub use flipper::{EngineState, Flipper, TransitionRequest};
pub use surface::MemorySurface;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::config::{ClassNames, FlipperConfig, Separator};
    pub use crate::error::{FlipError, Result};
    pub use crate::flipper::{EngineState, Flipper, TransitionRequest};
    pub use crate::surface::{ElementKind, MemorySurface, Surface};
    pub use crate::transform::Transform;
    pub use crate::tree::ElementId;
}
