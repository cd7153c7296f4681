//! A* pathfinding over a 2D lattice sampled from world space.
//!
//! A [`GridMap`] divides a rectangle of world space into square cells and
//! asks an [`ObstructionOracle`] once per cell whether it is blocked. A
//! [`Pathfinder`] then answers lowest-cost route queries between world
//! positions (or lattice cells) with A* over 8-connected movement, using
//! [`octile`] distance both as the step cost and as the heuristic.
//!
//! - **Grid** — [`GridMap::build`], [`GridMap::node_at`], [`GridMap::neighbors`]
//! - **Open set** — [`IndexedHeap`], a fixed-capacity binary heap whose items
//!   carry their own slot index ([`HeapItem`]) for O(1) membership tests
//! - **Search** — [`Pathfinder::find_path`], returning a [`Path`] or `None`
//!
//! Grid geometry is immutable once built and can be shared across threads;
//! all per-query state lives in the `Pathfinder`, which is reused between
//! queries without carrying costs or parents from one search into the next.
//!
//! ```
//! use gridpath::{GridConfig, GridMap, Obstacles, Pathfinder, Shape};
//! use gridpath_core::Vec2;
//!
//! let config = GridConfig::cells(10, 10, 1.0);
//! let wall = Shape::Rect { min: Vec2::new(-1.0, -5.0), max: Vec2::new(0.0, 3.0) };
//! let grid = GridMap::build(config, &Obstacles::new().with(wall)).unwrap();
//!
//! let mut finder = Pathfinder::new(&grid);
//! let path = finder
//!     .find_path(&grid, Vec2::new(-4.5, -4.5), Vec2::new(4.5, -4.5))
//!     .unwrap()
//!     .expect("the wall leaves a gap at the top");
//! assert!(path.cost() > 90);
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod grid_map;
mod heap;
mod neighbors;
mod node;
mod oracle;
mod path;
mod pathfinder;
mod traits;

pub use config::{GridConfig, SearchConfig};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use error::{PathError, PathResult};
pub use grid_map::GridMap;
pub use heap::IndexedHeap;
pub use neighbors::Neighbors;
pub use node::{Node, UNREACHABLE};
pub use oracle::{Obstacles, Shape};
pub use path::{Path, SearchStats};
pub use pathfinder::Pathfinder;
pub use traits::{HeapItem, ObstructionOracle};
