use std::cmp::Ordering;

use gridpath_core::Vec2;

/// An item that can live in an [`IndexedHeap`](crate::IndexedHeap).
///
/// The heap stamps each item with its current slot so membership tests and
/// re-prioritisation run without scanning the backing array.
pub trait HeapItem {
    /// Three-way priority comparison. `Greater` means `self` should be
    /// extracted before `other`.
    fn compare_priority(&self, other: &Self) -> Ordering;

    /// Slot last stamped by the heap, if any.
    fn heap_index(&self) -> Option<usize>;

    /// Called by the heap whenever the item moves, enters or leaves.
    fn set_heap_index(&mut self, index: Option<usize>);
}

/// Answers whether a disk in world space overlaps any obstruction.
///
/// Consulted once per cell while a [`GridMap`](crate::GridMap) is built and
/// never afterwards.
pub trait ObstructionOracle {
    /// `true` if a disk of `radius` centred on `center` touches an obstacle.
    fn is_blocked(&self, center: Vec2, radius: f32) -> bool;
}

impl<F> ObstructionOracle for F
where
    F: Fn(Vec2, f32) -> bool,
{
    #[inline]
    fn is_blocked(&self, center: Vec2, radius: f32) -> bool {
        self(center, radius)
    }
}
