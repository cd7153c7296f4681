//! Search scenarios: a grid, its obstacles and the two endpoints.

use std::error::Error;
use std::fs;
use std::path::Path;

use gridpath::{GridConfig, GridMap, Obstacles, PathResult, SearchConfig, Shape};
use gridpath_core::Vec2;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub grid: GridConfig,
    #[serde(default)]
    pub obstacles: Obstacles,
    pub start: Vec2,
    pub target: Vec2,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Scenario {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_json(&text)?;
        log::debug!(
            "loaded scenario from {} with {} obstacles",
            path.display(),
            scenario.obstacles.len()
        );
        Ok(scenario)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Scatter circles and boxes over `grid` until roughly `density` percent
    /// of its area is covered, keeping the bottom-left start and top-right
    /// target cells clear. Fails if `grid` does not describe a usable area.
    pub fn random(grid: GridConfig, density: u32, rng: &mut impl Rng) -> PathResult<Self> {
        grid.validate()?;
        let d = grid.node_diameter();
        let r = grid.node_radius;
        let min = grid.bottom_left();
        let max = min + grid.world_size;
        let start = min + Vec2::splat(r);
        let target = max - Vec2::splat(r);

        let goal_area = grid.world_size.x * grid.world_size.y * density.min(100) as f32 / 100.0;
        let mut covered = 0.0;
        let mut obstacles = Obstacles::new();
        let mut attempts = 0;
        while covered < goal_area && attempts < 10_000 {
            attempts += 1;
            let center = Vec2::new(
                rng.random_range(min.x..max.x),
                rng.random_range(min.y..max.y),
            );
            let (shape, area) = if rng.random_range(0..2) == 0 {
                let radius = rng.random_range(r..=3.0 * r);
                let area = std::f32::consts::PI * radius * radius;
                (Shape::Circle { center, radius }, area)
            } else {
                let half = Vec2::new(rng.random_range(r..=2.0 * d), rng.random_range(r..=2.0 * d));
                let area = 4.0 * half.x * half.y;
                (
                    Shape::Rect {
                        min: center - half,
                        max: center + half,
                    },
                    area,
                )
            };
            if shape.overlaps_disk(start, r) || shape.overlaps_disk(target, r) {
                continue;
            }
            obstacles.push(shape);
            covered += area;
        }

        Ok(Self {
            grid,
            obstacles,
            start,
            target,
            search: SearchConfig::default(),
        })
    }

    pub fn build_grid(&self) -> PathResult<GridMap> {
        GridMap::build(self.grid, &self.obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::{ObstructionOracle, PathError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_minimal_json() {
        let json = r#"{
            "grid": {"origin": {"x": 0, "y": 0}, "world_size": {"x": 8, "y": 4}, "node_radius": 0.5},
            "start": {"x": -3.5, "y": -1.5},
            "target": {"x": 3.5, "y": 1.5}
        }"#;
        let s = Scenario::from_json(json).unwrap();
        assert!(s.obstacles.is_empty());
        assert_eq!(s.search, SearchConfig::default());
        let grid = s.build_grid().unwrap();
        assert_eq!(grid.max_node_count(), 32);
    }

    #[test]
    fn json_round_trip() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = Scenario::random(GridConfig::cells(12, 12, 1.0), 30, &mut rng).unwrap();
        let back = Scenario::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn random_keeps_endpoints_clear() {
        let mut rng = StdRng::seed_from_u64(11);
        let cfg = GridConfig::cells(20, 10, 1.0);
        let s = Scenario::random(cfg, 60, &mut rng).unwrap();
        assert!(!s.obstacles.is_empty());
        assert!(!s.obstacles.is_blocked(s.start, cfg.node_radius));
        assert!(!s.obstacles.is_blocked(s.target, cfg.node_radius));

        let grid = s.build_grid().unwrap();
        assert!(grid.node_at(s.start).walkable());
        assert!(grid.node_at(s.target).walkable());
    }

    #[test]
    fn zero_density_has_no_obstacles() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = Scenario::random(GridConfig::cells(5, 5, 1.0), 0, &mut rng).unwrap();
        assert!(s.obstacles.is_empty());
    }

    #[test]
    fn random_rejects_degenerate_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        for cfg in [
            GridConfig::cells(0, 5, 1.0),
            GridConfig::cells(-4, 5, 1.0),
            GridConfig::cells(5, 5, 0.0),
        ] {
            assert!(matches!(
                Scenario::random(cfg, 30, &mut rng),
                Err(PathError::InvalidGeometry(_))
            ));
        }
    }
}
