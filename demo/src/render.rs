//! Plain-text picture of a grid and a route through it.

use std::collections::HashSet;

use gridpath::{GridMap, Path};
use gridpath_core::Point;

pub const OPEN: char = '.';
pub const BLOCKED: char = '#';
pub const ROUTE: char = '*';
pub const START: char = 'S';
pub const TARGET: char = 'T';

/// One line per row, top row first.
pub fn render(grid: &GridMap, path: Option<&Path>) -> String {
    let size = grid.size();
    let route: HashSet<Point> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let start = path.and_then(Path::start);
    let target = path.and_then(Path::target);

    let mut out = String::with_capacity(((size.x + 1) * size.y) as usize);
    for y in (0..size.y).rev() {
        for x in 0..size.x {
            let p = Point::new(x, y);
            let ch = if Some(p) == start {
                START
            } else if Some(p) == target {
                TARGET
            } else if route.contains(&p) {
                ROUTE
            } else if grid.node(p).is_some_and(|n| n.walkable()) {
                OPEN
            } else {
                BLOCKED
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
