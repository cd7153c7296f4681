use crate::config::SearchConfig;
use crate::grid_map::GridMap;
use crate::heap::IndexedHeap;
use crate::node::SearchNode;
use crate::path::SearchStats;

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Owns the mutable state of A* searches over one grid size.
///
/// The open set and one [`SearchNode`] per grid cell are allocated once and
/// reused, so repeated queries incur no allocations beyond the returned
/// path. Each search bumps a generation counter; scratch entries stamped
/// with an older generation are treated as untouched, which keeps costs and
/// parents from one query out of the next.
///
/// A `Pathfinder` borrows the grid only for the duration of a search. Run
/// concurrent searches with one `Pathfinder` per thread over a shared
/// `&GridMap`.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    pub(crate) scratch: Vec<SearchNode>,
    pub(crate) open: IndexedHeap,
    pub(crate) generation: u32,
    pub(crate) config: SearchConfig,
    pub(crate) last_stats: Option<SearchStats>,
}

impl Pathfinder {
    /// Create a pathfinder sized for `grid` with no search budget.
    ///
    /// It can search any grid with the same node count; the scratch space is
    /// indexed by node and does not depend on the grid's shape.
    pub fn new(grid: &GridMap) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    pub fn with_config(grid: &GridMap, config: SearchConfig) -> Self {
        let len = grid.max_node_count();
        Self {
            scratch: vec![SearchNode::default(); len],
            open: IndexedHeap::with_capacity(len),
            generation: 0,
            config,
            last_stats: None,
        }
    }

    /// Number of grid cells this pathfinder can search.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.scratch.len()
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Statistics of the most recent search, whatever its outcome.
    #[inline]
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// Start a new search: empty the open set and invalidate all scratch
    /// entries. Returns the new generation.
    pub(crate) fn begin_search(&mut self) -> u32 {
        self.open.clear();
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: entries stamped long ago could now look current.
            for n in &mut self.scratch {
                *n = SearchNode::default();
            }
            self.generation = 1;
        }
        self.generation
    }
}
