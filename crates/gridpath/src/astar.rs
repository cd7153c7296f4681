use std::time::Instant;

use gridpath_core::{Point, Vec2};

use crate::Pathfinder;
use crate::distance::octile;
use crate::error::{PathError, PathResult};
use crate::grid_map::GridMap;
use crate::path::{Path, SearchStats};

impl Pathfinder {
    /// Compute a lowest-cost path between two world positions using A*.
    ///
    /// Both positions are resolved with [`GridMap::node_at`], so positions
    /// outside the grid snap to the nearest edge cell. Returns the full path
    /// (including both endpoints) or `None` if the target is unreachable.
    pub fn find_path(
        &mut self,
        grid: &GridMap,
        start: Vec2,
        target: Vec2,
    ) -> PathResult<Option<Path>> {
        let from = grid.cell_at(start);
        let to = grid.cell_at(target);
        self.find_path_cells(grid, from, to)
    }

    /// Like [`find_path`](Self::find_path) but between lattice coordinates,
    /// which must lie inside the grid.
    pub fn find_path_cells(
        &mut self,
        grid: &GridMap,
        from: Point,
        to: Point,
    ) -> PathResult<Option<Path>> {
        if grid.max_node_count() != self.node_count() {
            return Err(PathError::GridMismatch {
                expected: self.node_count(),
                found: grid.max_node_count(),
            });
        }
        let start_idx = grid.index(from).ok_or(PathError::OutOfBounds {
            cell: from,
            bounds: grid.bounds(),
        })?;
        let goal_idx = grid.index(to).ok_or(PathError::OutOfBounds {
            cell: to,
            bounds: grid.bounds(),
        })?;

        let started = Instant::now();
        let mut expanded = 0;
        let result = match self.search(grid, start_idx, goal_idx, started, &mut expanded) {
            Ok(true) => self.retrace(grid, start_idx, goal_idx).map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(e),
        };

        let stats = SearchStats {
            elapsed: started.elapsed(),
            expanded,
            found: matches!(result, Ok(Some(_))),
        };
        self.last_stats = Some(stats);

        match &result {
            Ok(Some(path)) => log::info!(
                "path found: {} ms ({} -> {}, {} steps, cost {}, {} nodes expanded)",
                stats.elapsed.as_millis(),
                from,
                to,
                path.len(),
                path.cost(),
                expanded,
            ),
            Ok(None) => log::debug!("no path from {from} to {to} ({expanded} nodes expanded)"),
            Err(e) => log::warn!("search from {from} to {to} aborted: {e}"),
        }
        result
    }

    /// Run A* until the goal is expanded (`true`) or the open set is
    /// exhausted (`false`).
    fn search(
        &mut self,
        grid: &GridMap,
        start: usize,
        goal: usize,
        started: Instant,
        expanded: &mut usize,
    ) -> PathResult<bool> {
        let generation = self.begin_search();
        let target = grid.point(goal);

        if start != goal && !grid.node_by_index(goal).walkable() {
            log::warn!("target cell {target} is not walkable");
            return Ok(false);
        }

        {
            let node = &mut self.scratch[start];
            node.refresh(generation);
            node.g = 0;
            node.h = octile(grid.point(start), target);
            node.parent = None;
        }
        self.open.insert(&mut self.scratch, start);

        while let Some(ci) = self.open.extract_best(&mut self.scratch) {
            self.scratch[ci].closed = true;
            *expanded += 1;

            if ci == goal {
                return Ok(true);
            }
            self.check_budget(*expanded, started)?;

            let current = grid.point(ci);
            let current_g = self.scratch[ci].g;
            log::trace!("expand {current} g={current_g} h={}", self.scratch[ci].h);

            for np in grid.neighbor_cells(current) {
                let ni = grid.index_unchecked(np);
                if !grid.node_by_index(ni).walkable() {
                    continue;
                }
                let n = &mut self.scratch[ni];
                n.refresh(generation);
                if n.closed {
                    continue;
                }

                let tentative_g = current_g + octile(current, np);
                let queued = self.open.contains(&self.scratch, ni);
                if queued && tentative_g >= self.scratch[ni].g {
                    continue;
                }

                let n = &mut self.scratch[ni];
                n.g = tentative_g;
                n.h = octile(np, target);
                n.parent = Some(ci);

                if queued {
                    self.open.update_item(&mut self.scratch, ni);
                } else {
                    self.open.insert(&mut self.scratch, ni);
                }
            }
        }

        Ok(false)
    }

    fn check_budget(&self, expanded: usize, started: Instant) -> PathResult<()> {
        if let Some(limit) = self.config.max_expansions {
            if expanded >= limit {
                return Err(PathError::ExpansionLimit { limit, expanded });
            }
        }
        if let Some(timeout) = self.config.timeout {
            let elapsed = started.elapsed();
            if elapsed >= timeout {
                return Err(PathError::Timeout { elapsed, expanded });
            }
        }
        Ok(())
    }

    /// Follow parent links from `goal` back to `start`.
    ///
    /// A path can visit each cell at most once, so a chain longer than the
    /// grid or one that leaves the current search is reported as malformed.
    fn retrace(&self, grid: &GridMap, start: usize, goal: usize) -> PathResult<Path> {
        let limit = self.scratch.len();
        let malformed = |hops| PathError::MalformedPath {
            start: grid.point(start),
            target: grid.point(goal),
            hops,
        };

        let mut steps = Vec::new();
        let mut ci = goal;
        loop {
            let node = &self.scratch[ci];
            if node.generation != self.generation {
                return Err(malformed(steps.len()));
            }
            steps.push(grid.point(ci));
            if ci == start {
                break;
            }
            match node.parent {
                Some(p) if steps.len() < limit => ci = p,
                _ => return Err(malformed(steps.len())),
            }
        }
        steps.reverse();
        Ok(Path::new(steps, self.scratch[goal].g))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{GridConfig, SearchConfig};
    use crate::oracle::Obstacles;

    /// Unit cells; the first line of `map` is the top row.
    fn grid_from(map: &str) -> GridMap {
        let lines: Vec<&str> = map.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let cfg = GridConfig::cells(lines[0].len() as i32, lines.len() as i32, 1.0);
        GridMap::build(cfg, &Obstacles::from_ascii(map, &cfg)).unwrap()
    }

    fn open_grid(w: i32, h: i32) -> GridMap {
        GridMap::open(GridConfig::cells(w, h, 1.0)).unwrap()
    }

    fn assert_well_formed(grid: &GridMap, path: &Path) {
        let mut cost = 0;
        for pair in path.steps().windows(2) {
            let (dx, dy) = pair[0].abs_delta(pair[1]);
            assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0), "{pair:?}");
            assert!(grid.node(pair[1]).unwrap().walkable());
            cost += octile(pair[0], pair[1]);
        }
        assert_eq!(cost, path.cost());
    }

    #[test]
    fn open_grid_corner_to_corner_is_diagonal() {
        let grid = open_grid(10, 10);
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(9, 9))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 14 * 9);
        assert_eq!(path.len(), 10);
        for (i, p) in path.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, i as i32));
        }
        let stats = pf.last_stats().unwrap();
        assert!(stats.found);
        assert_eq!(stats.expanded, 10);
    }

    #[test]
    fn straight_line_costs_ten_per_step() {
        let grid = open_grid(8, 3);
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(0, 1), Point::new(7, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 70);
        assert_eq!(path.len(), 8);
        assert_well_formed(&grid, &path);
    }

    #[test]
    fn start_equal_to_target() {
        let grid = open_grid(4, 4);
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(2, 1), Point::new(2, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.steps(), &[Point::new(2, 1)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn detours_through_single_gap() {
        let grid = grid_from(
            "
            .....
            ..#..
            ..#..
            ",
        );
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(4, 0))
            .unwrap()
            .unwrap();
        assert_eq!(
            path.steps(),
            &[
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 1),
                Point::new(4, 0),
            ]
        );
        assert_eq!(path.cost(), 56);
    }

    #[test]
    fn routes_around_obstacle() {
        let grid = grid_from(
            "
            ..........
            ..........
            ...######.
            ........#.
            ........#.
            ..........
            ",
        );
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(5, 1), Point::new(5, 5))
            .unwrap()
            .unwrap();
        assert_eq!(path.start(), Some(Point::new(5, 1)));
        assert_eq!(path.target(), Some(Point::new(5, 5)));
        assert_well_formed(&grid, &path);
        // Row 3 is only open at x = 0..=2 and x = 9; the cheapest crossing
        // is (2, 3), octile 38 from each endpoint.
        assert!(path.steps().contains(&Point::new(2, 3)));
        assert_eq!(path.cost(), 76);
    }

    #[test]
    fn diagonal_squeeze_between_blocked_cells_is_allowed() {
        let grid = grid_from(
            "
            .#
            #.
            ",
        );
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path_cells(&grid, Point::new(0, 1), Point::new(1, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(), 14);
    }

    #[test]
    fn wall_means_no_path() {
        let row = ".....#....\n";
        let grid = grid_from(&row.repeat(10));
        let mut pf = Pathfinder::new(&grid);
        let result = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(9, 9))
            .unwrap();
        assert_eq!(result, None);
        let stats = pf.last_stats().unwrap();
        assert!(!stats.found);
        // Every reachable cell left of the wall was expanded once.
        assert_eq!(stats.expanded, 50);
    }

    #[test]
    fn unwalkable_target_short_circuits() {
        let grid = grid_from(
            "
            ...
            .#.
            ...
            ",
        );
        let mut pf = Pathfinder::new(&grid);
        let result = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(pf.last_stats().unwrap().expanded, 0);
    }

    #[test]
    fn world_positions_are_clamped() {
        let grid = open_grid(10, 10);
        let mut pf = Pathfinder::new(&grid);
        let path = pf
            .find_path(&grid, Vec2::new(-500.0, -500.0), Vec2::new(500.0, 500.0))
            .unwrap()
            .unwrap();
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.target(), Some(Point::new(9, 9)));
        assert_eq!(path.positions(&grid)[0], Vec2::new(-4.5, -4.5));
    }

    #[test]
    fn repeated_searches_do_not_leak_state() {
        let grid = grid_from(
            "
            ........
            .######.
            .#....#.
            .#.##.#.
            ........
            ",
        );
        let mut pf = Pathfinder::new(&grid);
        let a = pf.find_path_cells(&grid, Point::new(0, 0), Point::new(7, 4)).unwrap();
        let b = pf.find_path_cells(&grid, Point::new(7, 4), Point::new(3, 2)).unwrap();
        let a2 = pf.find_path_cells(&grid, Point::new(0, 0), Point::new(7, 4)).unwrap();
        assert_eq!(a, a2);
        assert!(b.is_some());

        let mut fresh = Pathfinder::new(&grid);
        let b2 = fresh.find_path_cells(&grid, Point::new(7, 4), Point::new(3, 2)).unwrap();
        assert_eq!(b, b2);
    }

    #[test]
    fn expansion_limit_aborts() {
        let grid = open_grid(20, 20);
        let mut pf = Pathfinder::with_config(&grid, SearchConfig::unlimited().with_max_expansions(3));
        let err = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(19, 19))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::ExpansionLimit {
                limit: 3,
                expanded: 3
            }
        );
        assert!(!pf.last_stats().unwrap().found);

        // A budget that covers the search does not interfere.
        pf.set_config(SearchConfig::unlimited().with_max_expansions(100));
        assert!(pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(19, 19))
            .unwrap()
            .is_some());
    }

    #[test]
    fn zero_timeout_aborts() {
        let grid = open_grid(6, 6);
        let mut pf = Pathfinder::with_config(&grid, SearchConfig::unlimited().with_timeout(Duration::ZERO));
        let err = pf
            .find_path_cells(&grid, Point::new(0, 0), Point::new(5, 5))
            .unwrap_err();
        assert!(matches!(err, PathError::Timeout { expanded: 1, .. }));
        assert!(err.is_limit());
    }

    #[test]
    fn rejects_foreign_grid_and_bad_cells() {
        let small = open_grid(3, 3);
        let big = open_grid(4, 4);
        let mut pf = Pathfinder::new(&small);
        assert_eq!(
            pf.find_path_cells(&big, Point::ZERO, Point::ZERO),
            Err(PathError::GridMismatch {
                expected: 9,
                found: 16
            })
        );
        assert!(matches!(
            pf.find_path_cells(&small, Point::new(0, 0), Point::new(3, 0)),
            Err(PathError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn reuses_scratch_for_grid_with_same_node_count() {
        let tall = open_grid(2, 3);
        let wide = open_grid(3, 2);
        let mut pf = Pathfinder::new(&tall);
        let path = pf
            .find_path_cells(&wide, Point::new(0, 0), Point::new(2, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 24);
        assert_eq!(path.len(), 3);
        assert_eq!(path.target(), Some(Point::new(2, 1)));
    }

    #[test]
    fn retrace_detects_parent_cycle() {
        let grid = open_grid(3, 1);
        let mut pf = Pathfinder::new(&grid);
        let generation = pf.begin_search();
        for n in &mut pf.scratch {
            n.refresh(generation);
        }
        pf.scratch[2].parent = Some(1);
        pf.scratch[1].parent = Some(2);
        assert!(matches!(
            pf.retrace(&grid, 0, 2),
            Err(PathError::MalformedPath { hops: 3, .. })
        ));
    }

    #[test]
    fn retrace_detects_stale_parent() {
        let grid = open_grid(3, 1);
        let mut pf = Pathfinder::new(&grid);
        let generation = pf.begin_search();
        pf.scratch[2].refresh(generation);
        pf.scratch[2].parent = Some(1);
        assert!(matches!(
            pf.retrace(&grid, 0, 2),
            Err(PathError::MalformedPath { hops: 1, .. })
        ));
    }
}
