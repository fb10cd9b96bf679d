//! Rendering backends for the flip display.
//!
//! The engine never talks to a concrete toolkit. It needs a handful of
//! capabilities from whatever hosts the display: create and remove child
//! elements, label and style them, move them, and measure them. [`Surface`]
//! captures exactly that set; [`MemorySurface`] is a headless implementation
//! used by the demos and tests.

mod memory;

pub use memory::{ChangeFlags, ElementData, ElementFlags, MemorySurface};

use crate::transform::Transform;

/// Role of an element created by the layout builder.
///
/// Backends can use it to pick positioning rules: slots stack vertically
/// inside a wheel, wheels and separators flow left to right inside the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Render target holding the whole display
    Root,
    /// Vertical strip of symbols for one digit position
    Wheel,
    /// One symbol inside a wheel
    Slot,
    /// Static symbol between digit groups
    Separator,
}

/// Visual capability set the engine renders through.
pub trait Surface {
    /// Handle to an element owned by the surface
    type Element: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Whether `element` is still part of the surface
    fn contains(&self, element: Self::Element) -> bool;

    /// Create a new element appended as the last child of `parent`
    fn create_child(&mut self, parent: Self::Element, kind: ElementKind) -> Self::Element;

    /// Remove an element together with its descendants
    fn remove(&mut self, element: Self::Element);

    /// Replace the element's style class list (space separated)
    fn set_class(&mut self, element: Self::Element, class: &str);

    fn set_text(&mut self, element: Self::Element, text: &str);

    /// Hide content that overflows the element's box
    fn set_clip(&mut self, element: Self::Element, clip: bool);

    /// Fix the element's height in pixels
    fn set_height(&mut self, element: Self::Element, height: f32);

    fn set_transform(&mut self, element: Self::Element, transform: Transform);

    /// Allow or forbid text selection on the element
    fn set_selectable(&mut self, element: Self::Element, selectable: bool);

    /// Laid-out height of the element in pixels; 0.0 when not yet laid out
    fn measure_height(&self, element: Self::Element) -> f32;
}
