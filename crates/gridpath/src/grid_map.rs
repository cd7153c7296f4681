//! The lattice of [`Node`]s sampled from an obstruction oracle.

use gridpath_core::{Point, Range, Vec2};

use crate::config::GridConfig;
use crate::error::{PathError, PathResult};
use crate::neighbors::Neighbors;
use crate::node::Node;
use crate::traits::ObstructionOracle;

/// A fixed-size 2D lattice covering a rectangle of world space.
///
/// Built once from a [`GridConfig`] and an [`ObstructionOracle`]; the
/// geometry and walkability of every node are immutable afterwards. Search
/// state lives in a [`Pathfinder`](crate::Pathfinder), so a `GridMap` can be
/// shared by any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct GridMap {
    config: GridConfig,
    bounds: Range,
    nodes: Vec<Node>,
}

impl GridMap {
    /// Sample `oracle` at the centre of every cell.
    ///
    /// Cell `(x, y)` is centred at
    /// `bottom_left + (x * d + r, y * d + r)` and is walkable unless the
    /// oracle reports that a disk of radius `r` there is blocked.
    pub fn build<O: ObstructionOracle + ?Sized>(config: GridConfig, oracle: &O) -> PathResult<Self> {
        let size = config.grid_size()?;
        let bounds = Range::with_size(size.x, size.y);
        let r = config.node_radius;
        let d = config.node_diameter();
        let bottom_left = config.bottom_left();

        let mut nodes = Vec::with_capacity(bounds.len());
        for p in bounds {
            let center = bottom_left + Vec2::new(p.x as f32 * d + r, p.y as f32 * d + r);
            let walkable = !oracle.is_blocked(center, r);
            nodes.push(Node::new(walkable, center, p));
        }

        let grid = Self {
            config,
            bounds,
            nodes,
        };
        log::debug!(
            "built {}x{} grid over {} at {}: {} of {} cells walkable",
            size.x,
            size.y,
            config.world_size,
            config.origin,
            grid.walkable_count(),
            grid.max_node_count(),
        );
        Ok(grid)
    }

    /// A grid with no obstructions.
    pub fn open(config: GridConfig) -> PathResult<Self> {
        Self::build(config, &|_: Vec2, _: f32| false)
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of columns (x) and rows (y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// `[0, columns) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn world_size(&self) -> Vec2 {
        self.config.world_size
    }

    #[inline]
    pub fn node_diameter(&self) -> f32 {
        self.config.node_diameter()
    }

    /// Total number of cells. Open sets are sized to this.
    #[inline]
    pub fn max_node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn walkable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.walkable()).count()
    }

    /// Node at lattice coordinate `p`, or `None` outside the grid.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order, bottom row first.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Lattice coordinate of the cell nearest to a world position.
    ///
    /// The position is normalised over the grid's extent and clamped to
    /// `[0, 1]` on each axis, so queries outside the grid snap to the nearest
    /// edge cell instead of failing. NaN coordinates map to column or row 0.
    pub fn cell_at(&self, world: Vec2) -> Point {
        let extent = self.config.world_size;
        let rel = world - self.config.bottom_left();
        let px = (rel.x / extent.x).clamp(0.0, 1.0);
        let py = (rel.y / extent.y).clamp(0.0, 1.0);
        let size = self.size();
        let x = ((size.x - 1) as f32 * px).round_ties_even() as i32;
        let y = ((size.y - 1) as f32 * py).round_ties_even() as i32;
        Point::new(x.clamp(0, size.x - 1), y.clamp(0, size.y - 1))
    }

    /// Node nearest to a world position. See [`cell_at`](Self::cell_at) for
    /// the clamping policy.
    pub fn node_at(&self, world: Vec2) -> &Node {
        &self.nodes[self.index_unchecked(self.cell_at(world))]
    }

    /// In-bounds lattice neighbours of `p` (up to 8), regardless of
    /// walkability.
    #[inline]
    pub fn neighbor_cells(&self, p: Point) -> Neighbors {
        Neighbors::within(p, self.bounds)
    }

    /// Nodes adjacent to `node` in its 8-connected neighbourhood.
    pub fn neighbors<'a>(&'a self, node: &Node) -> impl Iterator<Item = &'a Node> + use<'a> {
        self.neighbor_cells(node.coord())
            .into_iter()
            .map(move |p| &self.nodes[self.index_unchecked(p)])
    }

    /// Bounds-checked variant of [`node`](Self::node) for cell-based APIs.
    pub fn checked_node(&self, p: Point) -> PathResult<&Node> {
        self.node(p).ok_or(PathError::OutOfBounds {
            cell: p,
            bounds: self.bounds,
        })
    }

    // -----------------------------------------------------------------------
    // Index helpers
    // -----------------------------------------------------------------------

    /// Flat row-major index of `p`, or `None` if out of range.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.index_unchecked(p))
    }

    #[inline]
    pub(crate) fn index_unchecked(&self, p: Point) -> usize {
        p.y as usize * self.bounds.width() as usize + p.x as usize
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.nodes[idx].coord()
    }

    #[inline]
    pub(crate) fn node_by_index(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}
