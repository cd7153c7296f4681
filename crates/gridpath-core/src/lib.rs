//! **gridpath-core** — geometry primitives shared by the *gridpath* crates.
//!
//! Lattice cells are addressed by integer [`Point`]s inside a half-open
//! [`Range`]; continuous world positions are [`Vec2`] values.

pub mod geom;
pub mod world;

pub use geom::{Point, Range, RangeIter};
pub use world::Vec2;
