use std::cmp::Ordering;

use gridpath_core::{Point, Vec2};

use crate::traits::HeapItem;

/// Sentinel g-cost for nodes the current search has not reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// A lattice cell: its world-space centre, grid coordinate and walkability.
///
/// Nodes are created only by [`GridMap`](crate::GridMap) and never change
/// after the grid is built, so they can be shared freely between searches
/// and threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    position: Vec2,
    coord: Point,
    walkable: bool,
}

impl Node {
    pub(crate) fn new(walkable: bool, position: Vec2, coord: Point) -> Self {
        Self {
            position,
            coord,
            walkable,
        }
    }

    /// World-space centre of the cell.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Column and row of the cell.
    #[inline]
    pub fn coord(&self) -> Point {
        self.coord
    }

    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }
}

// ---------------------------------------------------------------------------
// Per-search state
// ---------------------------------------------------------------------------

/// Mutable A* bookkeeping for one node, owned by a
/// [`Pathfinder`](crate::Pathfinder) rather than by the grid.
///
/// Entries whose `generation` differs from the pathfinder's current one
/// belong to an earlier search and are reset on first touch.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<usize>,
    pub(crate) heap_index: Option<usize>,
    pub(crate) closed: bool,
    pub(crate) generation: u32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            parent: None,
            heap_index: None,
            closed: false,
            generation: 0,
        }
    }
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }

    /// Reset to the untouched state if this entry is from another search.
    #[inline]
    pub(crate) fn refresh(&mut self, generation: u32) {
        if self.generation != generation {
            *self = Self {
                generation,
                ..Self::default()
            };
        }
    }
}

impl HeapItem for SearchNode {
    /// Lower f wins, then lower h: the natural order on `(f, h)`, negated
    /// so the max-heap yields the cheapest node first.
    fn compare_priority(&self, other: &Self) -> Ordering {
        let natural = match self.f().cmp(&other.f()) {
            Ordering::Equal => self.h.cmp(&other.h),
            ord => ord,
        };
        natural.reverse()
    }

    #[inline]
    fn heap_index(&self) -> Option<usize> {
        self.heap_index
    }

    #[inline]
    fn set_heap_index(&mut self, index: Option<usize>) {
        self.heap_index = index;
    }
}
