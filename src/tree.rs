//! Arena-based element storage for the in-memory surface.
//!
//! Elements live in a sparse-set arena with generational indices so that a
//! handle to a removed element can never alias a newer one.
//!
//! ## Key Features
//!
//! - **Generational Indices**: ElementId contains index + generation to prevent
//!   ABA problems (detecting stale references to reallocated slots).
//!
//! - **Dense Storage**: Nodes stored contiguously for cache-friendly iteration.
//!
//! - **Sparse Map**: O(1) lookup from stable ElementId to dense array index.
//!
//! - **Swap-Remove**: O(1) removal without creating holes in dense storage.
//!
//! - **Subtree Removal**: Unregistering a node removes all of its descendants.

/// Unique identifier for an element in the tree.
///
/// Uses a generational index design:
/// - `index`: Position in the sparse array (reusable after removal)
/// - `generation`: Version counter that increments when a slot is reused
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl ElementId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Convert to a u64 for external use (e.g. logging).
    /// Combines generation (high bits) with index (low bits).
    pub fn as_u64(self) -> u64 {
        ((self.generation as u64) << 32) | (self.index as u64)
    }
}

/// Entry in the sparse map, pointing to a dense array slot.
struct SparseEntry {
    dense_index: usize,
    generation: u32,
}

/// A node in the tree, containing a value and its links.
struct Node<T> {
    value: T,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Back-pointer to sparse array index (for swap-remove fixup)
    sparse_index: u32,
}

/// Arena of values linked into parent/child relationships.
pub struct Tree<T> {
    dense: Vec<Node<T>>,
    sparse: Vec<Option<SparseEntry>>,
    free_indices: Vec<u32>,
    /// Generation to hand out next for each freed sparse slot
    next_generation: Vec<u32>,
}

impl<T> Tree<T> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            sparse: Vec::new(),
            free_indices: Vec::new(),
            next_generation: Vec::new(),
        }
    }

    /// Store a value and return its unique ID.
    pub fn register(&mut self, value: T) -> ElementId {
        let (sparse_index, generation) = if let Some(idx) = self.free_indices.pop() {
            (idx, self.next_generation[idx as usize])
        } else {
            let idx = self.sparse.len() as u32;
            self.sparse.push(None);
            self.next_generation.push(0);
            (idx, 0)
        };

        let dense_index = self.dense.len();
        self.dense.push(Node {
            value,
            parent: None,
            children: Vec::new(),
            sparse_index,
        });
        self.sparse[sparse_index as usize] = Some(SparseEntry {
            dense_index,
            generation,
        });

        ElementId::new(sparse_index, generation)
    }

    /// Remove a node and all of its descendants.
    ///
    /// Also detaches the node from its parent's children list. Stale IDs are
    /// ignored.
    pub fn unregister(&mut self, id: ElementId) {
        let Some(dense_index) = self.get_dense_index(id) else {
            return;
        };

        let parent_dense = self.dense[dense_index]
            .parent
            .and_then(|parent_id| self.get_dense_index(parent_id));
        if let Some(parent_dense) = parent_dense {
            self.dense[parent_dense].children.retain(|&c| c != id);
        }

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(idx) = self.get_dense_index(current) {
                pending.extend(self.dense[idx].children.iter().copied());
                self.remove_slot(current, idx);
            }
        }
    }

    fn remove_slot(&mut self, id: ElementId, dense_index: usize) {
        let last_dense_index = self.dense.len() - 1;
        self.dense.swap_remove(dense_index);

        // Fix up the moved node's sparse entry (if we didn't remove the last element)
        if dense_index != last_dense_index {
            let moved_sparse_idx = self.dense[dense_index].sparse_index;
            if let Some(ref mut entry) = self.sparse[moved_sparse_idx as usize] {
                entry.dense_index = dense_index;
            }
        }

        self.sparse[id.index as usize] = None;
        self.next_generation[id.index as usize] = id.generation.wrapping_add(1);
        self.free_indices.push(id.index);
    }

    /// Get the dense array index for an ElementId, validating generation.
    fn get_dense_index(&self, id: ElementId) -> Option<usize> {
        self.sparse
            .get(id.index as usize)
            .and_then(|e| e.as_ref())
            .filter(|e| e.generation == id.generation)
            .map(|e| e.dense_index)
    }

    /// Borrow a stored value.
    pub fn get(&self, id: ElementId) -> Option<&T> {
        self.get_dense_index(id).map(|idx| &self.dense[idx].value)
    }

    /// Mutably borrow a stored value.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.get_dense_index(id)
            .map(move |idx| &mut self.dense[idx].value)
    }

    /// Check if an element is registered.
    pub fn contains(&self, id: ElementId) -> bool {
        self.get_dense_index(id).is_some()
    }

    /// Set the parent of a node, appending it to the parent's children list.
    pub fn set_parent(&mut self, child_id: ElementId, parent_id: ElementId) {
        if let Some(child_dense) = self.get_dense_index(child_id) {
            self.dense[child_dense].parent = Some(parent_id);
        }

        if let Some(parent_dense) = self.get_dense_index(parent_id) {
            let children = &mut self.dense[parent_dense].children;
            if !children.contains(&child_id) {
                children.push(child_id);
            }
        }
    }

    /// Get the children of a node, in insertion order.
    pub fn get_children(&self, id: ElementId) -> &[ElementId] {
        self.get_dense_index(id)
            .map(|idx| self.dense[idx].children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}
