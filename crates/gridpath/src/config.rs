//! Grid geometry and search budget configuration.

use std::time::Duration;

use gridpath_core::{Point, Vec2};

use crate::error::{PathError, PathResult};

/// World-space placement and resolution of a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// World position of the grid's centre.
    pub origin: Vec2,
    /// Width (x) and depth (y) covered by the grid.
    pub world_size: Vec2,
    /// Half the side length of one cell.
    pub node_radius: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            world_size: Vec2::splat(30.0),
            node_radius: 0.5,
        }
    }
}

impl GridConfig {
    pub fn new(origin: Vec2, world_size: Vec2, node_radius: f32) -> Self {
        Self {
            origin,
            world_size,
            node_radius,
        }
    }

    /// Config for a `width × height` lattice of `cell_size` cells centred on
    /// the world origin.
    pub fn cells(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            world_size: Vec2::new(width as f32 * cell_size, height as f32 * cell_size),
            node_radius: cell_size / 2.0,
        }
    }

    #[inline]
    pub fn node_diameter(&self) -> f32 {
        self.node_radius * 2.0
    }

    /// World position of the grid's bottom-left corner.
    #[inline]
    pub fn bottom_left(&self) -> Vec2 {
        self.origin - self.world_size / 2.0
    }

    /// Check that the geometry is finite and positive.
    pub fn validate(&self) -> PathResult<()> {
        if !self.origin.is_finite() {
            return Err(PathError::invalid_geometry(format!(
                "origin {} is not finite",
                self.origin
            )));
        }
        if !(self.node_radius.is_finite() && self.node_radius > 0.0) {
            return Err(PathError::invalid_geometry(format!(
                "node radius must be positive and finite, got {}",
                self.node_radius
            )));
        }
        let size = self.world_size;
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(PathError::invalid_geometry(format!(
                "world size must be positive and finite, got {size}"
            )));
        }
        Ok(())
    }

    /// Lattice dimensions: world size over cell diameter, rounded to the
    /// nearest integer (ties to even) on each axis.
    pub fn grid_size(&self) -> PathResult<Point> {
        self.validate()?;
        let d = self.node_diameter();
        let cols = (self.world_size.x / d).round_ties_even();
        let rows = (self.world_size.y / d).round_ties_even();
        if cols < 1.0 || rows < 1.0 {
            return Err(PathError::invalid_geometry(format!(
                "world size {} holds no whole cell of diameter {d}",
                self.world_size
            )));
        }
        if cols * rows > i32::MAX as f32 {
            return Err(PathError::invalid_geometry(format!(
                "{cols} x {rows} cells is too many"
            )));
        }
        Ok(Point::new(cols as i32, rows as i32))
    }
}

/// Budgets checked inside the search loop. Unlimited by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Abort after this many nodes have been expanded.
    pub max_expansions: Option<usize>,
    /// Abort once the search has run this long.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
