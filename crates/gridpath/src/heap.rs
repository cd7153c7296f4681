//! Fixed-capacity binary max-heap over arena indices.
//!
//! The heap stores `usize` handles into a caller-owned slice of
//! [`HeapItem`]s. Every mutation re-stamps the moved items with their new
//! slot, so [`IndexedHeap::contains`] is O(1) and
//! [`IndexedHeap::update_item`] can find an item without a scan.
//!
//! Layout is the usual flat array: the parent of slot `i` is `(i - 1) / 2`,
//! its children `2i + 1` and `2i + 2`.

use std::cmp::Ordering;

use crate::traits::HeapItem;

/// Indexed binary max-heap. The item with the greatest
/// [`HeapItem::compare_priority`] is always at slot 0.
#[derive(Debug, Clone)]
pub struct IndexedHeap {
    slots: Vec<usize>,
    capacity: usize,
}

impl IndexedHeap {
    /// Create an empty heap able to hold `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of items the heap will accept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop all items without touching their stamps. Stale stamps are
    /// harmless: [`contains`](Self::contains) checks the slot contents.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Handle of the highest-priority item, if any.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Handles in backing-array order (not priority order).
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// Insert `id` and sift it up to its place.
    ///
    /// # Panics
    ///
    /// Panics if the heap is already at capacity. Callers size the heap to
    /// the number of distinct items they can ever insert.
    pub fn insert<T: HeapItem>(&mut self, items: &mut [T], id: usize) {
        assert!(
            self.slots.len() < self.capacity,
            "indexed heap capacity of {} exceeded",
            self.capacity
        );
        let slot = self.slots.len();
        self.slots.push(id);
        items[id].set_heap_index(Some(slot));
        self.sift_up(items, slot);
    }

    /// Remove and return the highest-priority item.
    ///
    /// The last item takes the vacated root and sifts down. The removed
    /// item's stamp is cleared.
    pub fn extract_best<T: HeapItem>(&mut self, items: &mut [T]) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let best = self.slots.swap_remove(0);
        items[best].set_heap_index(None);
        if let Some(&moved) = self.slots.first() {
            items[moved].set_heap_index(Some(0));
            self.sift_down(items, 0);
        }
        Some(best)
    }

    /// Whether `id` is currently held. O(1).
    #[inline]
    pub fn contains<T: HeapItem>(&self, items: &[T], id: usize) -> bool {
        match items[id].heap_index() {
            Some(slot) => self.slots.get(slot) == Some(&id),
            None => false,
        }
    }

    /// Restore heap order after the priority of `id` changed in either
    /// direction. Does nothing if `id` is not held.
    pub fn update_item<T: HeapItem>(&mut self, items: &mut [T], id: usize) {
        if !self.contains(items, id) {
            return;
        }
        let Some(slot) = items[id].heap_index() else {
            return;
        };
        let slot = self.sift_up(items, slot);
        self.sift_down(items, slot);
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    #[inline]
    fn outranks<T: HeapItem>(&self, items: &[T], a: usize, b: usize) -> bool {
        items[self.slots[a]].compare_priority(&items[self.slots[b]]) == Ordering::Greater
    }

    fn swap<T: HeapItem>(&mut self, items: &mut [T], a: usize, b: usize) {
        self.slots.swap(a, b);
        items[self.slots[a]].set_heap_index(Some(a));
        items[self.slots[b]].set_heap_index(Some(b));
    }

    /// Returns the final slot.
    fn sift_up<T: HeapItem>(&mut self, items: &mut [T], mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.outranks(items, slot, parent) {
                break;
            }
            self.swap(items, slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down<T: HeapItem>(&mut self, items: &mut [T], mut slot: usize) {
        let len = self.slots.len();
        loop {
            let left = slot * 2 + 1;
            let right = left + 1;
            if left >= len {
                return;
            }
            // Left wins ties.
            let mut child = left;
            if right < len && self.outranks(items, right, left) {
                child = right;
            }
            if !self.outranks(items, child, slot) {
                return;
            }
            self.swap(items, slot, child);
            slot = child;
        }
    }
}
