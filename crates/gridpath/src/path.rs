use std::time::Duration;

use gridpath_core::{Point, Vec2};

use crate::grid_map::GridMap;

/// A route through the lattice, start first and target last.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: i32) -> Self {
        Self { steps, cost }
    }

    /// Cells visited, including both endpoints.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Sum of octile edge costs along the path.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    pub fn target(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// World-space centres of the cells along the path.
    pub fn positions(&self, grid: &GridMap) -> Vec<Vec2> {
        self.steps
            .iter()
            .filter_map(|&p| grid.node(p).map(|n| n.position()))
            .collect()
    }

    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Diagnostics for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Wall-clock time spent in the search, including reconstruction.
    pub elapsed: Duration,
    /// Nodes taken off the open set.
    pub expanded: usize,
    pub found: bool,
}
