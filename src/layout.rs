//! Digit layout: one wheel per digit position plus separators between groups.
//!
//! Wheels are created most-significant first, so they appear left to right
//! on the surface, but are stored least-significant first to line up with
//! digit sequences from [`crate::digits`].

use crate::config::{FlipperConfig, Separator};
use crate::surface::{ElementKind, Surface};
use crate::transform::Transform;

/// Class added to the render target
pub const ROOT_CLASS: &str = "number-flip";

/// One digit position: a strip of `alphabet.len() + 1` stacked symbols.
///
/// The last slot repeats the first symbol so wrapping from the last symbol
/// back to the first scrolls without a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct Wheel<E> {
    pub element: E,
    pub slots: Vec<E>,
}

/// Wheels and separators currently attached to the render target.
#[derive(Clone, Debug, PartialEq)]
pub struct DigitLayout<E> {
    /// Least-significant wheel first
    wheels: Vec<Wheel<E>>,
    separators: Vec<E>,
    /// Height of one symbol slot in pixels
    height: f32,
}

/// Whether a separator follows the wheel created at `index` (0 = leftmost).
pub fn needs_separator(index: usize, digit_count: usize, every: usize, only: usize) -> bool {
    if index + 1 >= digit_count {
        return false;
    }
    // Digits to the right of this wheel, plus one
    let from_right = digit_count - index;
    (every != 0 && from_right % every == 1) || (only != 0 && from_right == only + 1)
}

/// Apply the root class and clipping to the render target
pub fn prepare_root<S: Surface>(surface: &mut S, root: S::Element) {
    surface.set_class(root, ROOT_CLASS);
    surface.set_clip(root, true);
}

impl<E: Copy + std::fmt::Debug> DigitLayout<E> {
    /// Create `digit_count` wheels (at least one) under `root`.
    pub fn build<S>(surface: &mut S, root: E, digit_count: usize, config: &FlipperConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let digit_count = digit_count.max(1);
        let every = config.effective_separate_every();
        let only = config.separate_only;
        let classes = &config.class_names;
        let mut sequence = match &config.separator {
            Some(Separator::Sequence(symbols)) => Some(symbols.iter()),
            _ => None,
        };

        let mut wheels = Vec::with_capacity(digit_count);
        let mut separators = Vec::new();

        for index in 0..digit_count {
            let element = surface.create_child(root, ElementKind::Wheel);
            surface.set_class(
                element,
                &format!("{} {}{}", classes.container, classes.container, index),
            );
            let slots = config
                .alphabet
                .iter()
                .chain(config.alphabet.first())
                .map(|symbol| {
                    let slot = surface.create_child(element, ElementKind::Slot);
                    surface.set_class(slot, &classes.digit);
                    surface.set_text(slot, symbol);
                    slot
                })
                .collect();
            wheels.push(Wheel { element, slots });

            let Some(separator) = &config.separator else {
                continue;
            };
            if !needs_separator(index, digit_count, every, only) {
                continue;
            }
            let text = match separator {
                Separator::Single(symbol) => symbol.as_str(),
                Separator::Sequence(_) => match sequence.as_mut().and_then(|s| s.next()) {
                    Some(symbol) => symbol.as_str(),
                    None => {
                        log::warn!("separator sequence exhausted at wheel {}", index);
                        ""
                    }
                },
            };
            let element = surface.create_child(root, ElementKind::Separator);
            surface.set_class(element, &classes.separator);
            surface.set_text(element, text);
            separators.push(element);
        }

        wheels.reverse();
        log::debug!(
            "built {} wheels and {} separators",
            wheels.len(),
            separators.len()
        );

        let mut layout = Self {
            wheels,
            separators,
            height: 0.0,
        };
        layout.update_dimensions(surface, root, config.alphabet.len());
        layout
    }

    /// Remove every wheel and separator from the surface
    pub fn teardown<S>(&mut self, surface: &mut S)
    where
        S: Surface<Element = E>,
    {
        for wheel in self.wheels.drain(..) {
            surface.remove(wheel.element);
        }
        for separator in self.separators.drain(..) {
            surface.remove(separator);
        }
    }

    /// Re-measure the slot height and fit the root window to one slot
    pub fn update_dimensions<S>(&mut self, surface: &mut S, root: E, alphabet_len: usize)
    where
        S: Surface<Element = E>,
    {
        self.height = self.measure_slot(surface, alphabet_len);
        surface.set_height(root, self.height);
    }

    /// Adopt a changed, non-zero slot measurement.
    ///
    /// Returns whether the cached height changed.
    pub fn refresh_height<S>(&mut self, surface: &S, alphabet_len: usize) -> bool
    where
        S: Surface<Element = E>,
    {
        let height = self.measure_slot(surface, alphabet_len);
        if height > 0.0 && height != self.height {
            self.height = height;
            return true;
        }
        false
    }

    fn measure_slot<S>(&self, surface: &S, alphabet_len: usize) -> f32
    where
        S: Surface<Element = E>,
    {
        self.wheels
            .first()
            .map(|wheel| surface.measure_height(wheel.element) / (alphabet_len + 1) as f32)
            .unwrap_or(0.0)
    }

    /// Scroll wheel `index` so that `offset` slots are above the window
    pub fn place_wheel<S>(&self, surface: &mut S, index: usize, offset: f64)
    where
        S: Surface<Element = E>,
    {
        if let Some(wheel) = self.wheels.get(index) {
            let displacement = -(offset as f32) * self.height;
            surface.set_transform(wheel.element, Transform::translate_y(displacement));
        }
    }

    /// Make exactly the slot showing `digits[i]` selectable on wheel `i`
    pub fn mark_selected<S>(&self, surface: &mut S, digits: &[u32])
    where
        S: Surface<Element = E>,
    {
        for (wheel, &digit) in self.wheels.iter().zip(digits) {
            for (i, &slot) in wheel.slots.iter().enumerate() {
                surface.set_selectable(slot, i == digit as usize);
            }
        }
    }

    pub fn wheels(&self) -> &[Wheel<E>] {
        &self.wheels
    }

    pub fn separators(&self) -> &[E] {
        &self.separators
    }

    pub fn len(&self) -> usize {
        self.wheels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ElementFlags, MemorySurface};
    use crate::tree::ElementId;

    fn build(
        digits: usize,
        config: &FlipperConfig,
    ) -> (MemorySurface, ElementId, DigitLayout<ElementId>) {
        let mut surface = MemorySurface::new(10.0);
        let root = surface.create_root();
        let layout = DigitLayout::build(&mut surface, root, digits, config);
        (surface, root, layout)
    }

    #[test]
    fn test_needs_separator_every_three() {
        let gaps: Vec<usize> = (0..6).filter(|&i| needs_separator(i, 6, 3, 0)).collect();
        assert_eq!(gaps, vec![2]);

        let gaps: Vec<usize> = (0..7).filter(|&i| needs_separator(i, 7, 3, 0)).collect();
        assert_eq!(gaps, vec![0, 3]);
    }

    #[test]
    fn test_needs_separator_only() {
        let gaps: Vec<usize> = (0..5).filter(|&i| needs_separator(i, 5, 0, 2)).collect();
        assert_eq!(gaps, vec![2]);

        // Cut point beyond the width never fires
        assert!(!(0..3).any(|i| needs_separator(i, 3, 0, 5)));
        // Interval of one never yields a remainder of one
        assert!(!(0..4).any(|i| needs_separator(i, 4, 1, 0)));
    }

    #[test]
    fn test_build_wheels_and_slots() {
        let config = FlipperConfig::default();
        let (surface, root, layout) = build(3, &config);

        assert_eq!(layout.len(), 3);
        assert!(layout.separators().is_empty());
        for wheel in layout.wheels() {
            assert_eq!(wheel.slots.len(), 11);
            let last = surface.element(wheel.slots[10]).map(|d| d.text.clone());
            assert_eq!(last.as_deref(), Some("0"));
        }

        // Leftmost element on the surface is the most significant wheel
        let children = surface.children(root);
        assert_eq!(children[0], layout.wheels()[2].element);
        assert!(surface
            .element(children[0])
            .is_some_and(|d| d.has_class("digit-container0")));

        assert_eq!(layout.height(), 10.0);
        assert_eq!(surface.element(root).and_then(|d| d.height), Some(10.0));
    }

    #[test]
    fn test_build_separator_sequence() {
        let config = FlipperConfig::new().separate_every(2).separator(vec![":"]);
        let (surface, root, layout) = build(6, &config);

        assert_eq!(layout.separators().len(), 2);
        let texts: Vec<String> = layout
            .separators()
            .iter()
            .filter_map(|&s| surface.element(s).map(|d| d.text.clone()))
            .collect();
        assert_eq!(texts, vec![":".to_string(), String::new()]);
        assert_eq!(surface.visible_text(root), "00:0000");
    }

    #[test]
    fn test_teardown_and_zero_width() {
        let config = FlipperConfig::new().separator(",");
        let (mut surface, root, mut layout) = build(0, &config);
        assert_eq!(layout.len(), 1);

        layout.teardown(&mut surface);
        assert!(layout.is_empty());
        assert!(surface.children(root).is_empty());
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_place_and_select() {
        let config = FlipperConfig::default();
        let (mut surface, root, layout) = build(2, &config);

        layout.place_wheel(&mut surface, 0, 7.0);
        layout.place_wheel(&mut surface, 1, 3.0);
        assert_eq!(surface.visible_text(root), "37");

        layout.mark_selected(&mut surface, &[7, 3]);
        let ones = &layout.wheels()[0];
        let selectable: Vec<usize> = ones
            .slots
            .iter()
            .enumerate()
            .filter(|&(_, &slot)| {
                surface
                    .element(slot)
                    .is_some_and(|d| d.flags.contains(ElementFlags::SELECTABLE))
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selectable, vec![7]);
    }

    #[test]
    fn test_refresh_height() {
        let config = FlipperConfig::default();
        let (mut surface, _, mut layout) = build(1, &config);
        assert!(!layout.refresh_height(&surface, 10));

        surface.set_line_height(20.0);
        assert!(layout.refresh_height(&surface, 10));
        assert_eq!(layout.height(), 20.0);
    }
}
