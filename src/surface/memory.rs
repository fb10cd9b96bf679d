use bitflags::bitflags;

use super::{ElementKind, Surface};
use crate::transform::Transform;
use crate::tree::{ElementId, Tree};

/// Line height used when none is given
pub const DEFAULT_LINE_HEIGHT: f32 = 24.0;

bitflags! {
    /// Boolean style state of an element
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ElementFlags: u8 {
        /// Text inside the element can be selected
        const SELECTABLE = 0b01;
        /// Overflowing content is hidden
        const CLIP       = 0b10;
    }
}

bitflags! {
    /// Flags indicating what aspects of the surface changed since last taken
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Elements were added/removed or geometry changed
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed (text, transform, selection)
        const NEEDS_PAINT  = 0b10;
    }
}

/// State of one element on a [`MemorySurface`]
#[derive(Clone, Debug, PartialEq)]
pub struct ElementData {
    pub kind: ElementKind,
    pub class: String,
    pub text: String,
    pub transform: Transform,
    /// Explicit height; `None` means sized by content
    pub height: Option<f32>,
    pub flags: ElementFlags,
}

impl ElementData {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            class: String::new(),
            text: String::new(),
            transform: Transform::IDENTITY,
            height: None,
            flags: ElementFlags::SELECTABLE,
        }
    }

    /// Whether `class` appears in the element's class list
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

/// Headless surface keeping every element in an in-memory arena.
///
/// Every symbol line is `line_height` pixels tall, so a wheel measures
/// `line_height * slot_count`. Changing the line height simulates a font or
/// zoom change that requires the display to be resized.
pub struct MemorySurface {
    tree: Tree<ElementData>,
    line_height: f32,
    change_flags: ChangeFlags,
}

impl MemorySurface {
    pub fn new(line_height: f32) -> Self {
        Self {
            tree: Tree::new(),
            line_height,
            change_flags: ChangeFlags::empty(),
        }
    }

    /// Create a detached element to serve as a render target
    pub fn create_root(&mut self) -> ElementId {
        self.change_flags |= ChangeFlags::NEEDS_LAYOUT;
        self.tree.register(ElementData::new(ElementKind::Root))
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementData> {
        self.tree.get(id)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.tree.get_children(id)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn set_line_height(&mut self, line_height: f32) {
        if self.line_height != line_height {
            self.line_height = line_height;
            self.change_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
    }

    /// Return and clear the accumulated change flags
    pub fn take_change_flags(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.change_flags)
    }

    /// Text currently visible through the window of `root`.
    ///
    /// Each wheel contributes the slot its translation brings into view,
    /// rounded to the nearest slot; separators contribute their text.
    pub fn visible_text(&self, root: ElementId) -> String {
        let mut out = String::new();
        for &child in self.tree.get_children(root) {
            let Some(data) = self.tree.get(child) else {
                continue;
            };
            match data.kind {
                ElementKind::Wheel => out.push_str(self.visible_slot(child, data)),
                _ => out.push_str(&data.text),
            }
        }
        out
    }

    fn visible_slot(&self, wheel: ElementId, data: &ElementData) -> &str {
        let slots = self.tree.get_children(wheel);
        if slots.is_empty() {
            return "";
        }
        let slot_height = self.measure_height(wheel) / slots.len() as f32;
        if slot_height <= 0.0 {
            return "";
        }
        let (_, ty) = data.transform.translation();
        let index = (-ty / slot_height).round() as i64;
        let index = index.rem_euclid(slots.len() as i64) as usize;
        self.tree
            .get(slots[index])
            .map(|slot| slot.text.as_str())
            .unwrap_or("")
    }

    fn with_element(
        &mut self,
        id: ElementId,
        change: ChangeFlags,
        f: impl FnOnce(&mut ElementData),
    ) {
        match self.tree.get_mut(id) {
            Some(data) => {
                f(data);
                self.change_flags |= change;
            }
            None => log::trace!("ignoring update of stale element {:#x}", id.as_u64()),
        }
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_HEIGHT)
    }
}

impl Surface for MemorySurface {
    type Element = ElementId;

    fn contains(&self, element: ElementId) -> bool {
        self.tree.contains(element)
    }

    fn create_child(&mut self, parent: ElementId, kind: ElementKind) -> ElementId {
        let id = self.tree.register(ElementData::new(kind));
        self.tree.set_parent(id, parent);
        self.change_flags |= ChangeFlags::NEEDS_LAYOUT;
        id
    }

    fn remove(&mut self, element: ElementId) {
        if self.tree.contains(element) {
            self.tree.unregister(element);
            self.change_flags |= ChangeFlags::NEEDS_LAYOUT;
        }
    }

    fn set_class(&mut self, element: ElementId, class: &str) {
        self.with_element(element, ChangeFlags::NEEDS_PAINT, |data| {
            data.class = class.to_string();
        });
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.with_element(element, ChangeFlags::NEEDS_LAYOUT, |data| {
            data.text = text.to_string();
        });
    }

    fn set_clip(&mut self, element: ElementId, clip: bool) {
        self.with_element(element, ChangeFlags::NEEDS_PAINT, |data| {
            data.flags.set(ElementFlags::CLIP, clip);
        });
    }

    fn set_height(&mut self, element: ElementId, height: f32) {
        self.with_element(element, ChangeFlags::NEEDS_LAYOUT, |data| {
            data.height = Some(height);
        });
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        self.with_element(element, ChangeFlags::NEEDS_PAINT, |data| {
            data.transform = transform;
        });
    }

    fn set_selectable(&mut self, element: ElementId, selectable: bool) {
        self.with_element(element, ChangeFlags::NEEDS_PAINT, |data| {
            data.flags.set(ElementFlags::SELECTABLE, selectable);
        });
    }

    fn measure_height(&self, element: ElementId) -> f32 {
        let Some(data) = self.tree.get(element) else {
            return 0.0;
        };
        if let Some(height) = data.height {
            return height;
        }
        let children = self.tree.get_children(element);
        match data.kind {
            ElementKind::Slot | ElementKind::Separator => self.line_height,
            ElementKind::Wheel => children.iter().map(|&c| self.measure_height(c)).sum(),
            ElementKind::Root => children
                .iter()
                .map(|&c| self.measure_height(c))
                .fold(0.0, f32::max),
        }
    }
}
