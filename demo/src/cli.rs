use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridpath::{GridConfig, SearchConfig};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::scenario::Scenario;

/// Find a lowest-cost route across an obstructed grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the grid, obstacles and endpoints from a JSON scenario file
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Columns of a generated grid
    #[arg(long, default_value_t = 30)]
    pub width: i32,

    /// Rows of a generated grid
    #[arg(long, default_value_t = 30)]
    pub height: i32,

    /// Side length of one cell in world units
    #[arg(long, default_value_t = 1.0)]
    pub cell_size: f32,

    /// Percentage of a generated grid's area covered by obstacles
    #[arg(short, long, default_value_t = 25)]
    pub density: u32,

    /// Seed for obstacle generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after expanding this many nodes
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print only the route, not the map
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the scenario that was searched to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

impl Cli {
    /// Search budget from the command line; unset flags leave `base` alone.
    pub fn search_config(&self, base: SearchConfig) -> SearchConfig {
        SearchConfig {
            max_expansions: self.max_expansions.or(base.max_expansions),
            timeout: self
                .timeout_ms
                .map(Duration::from_millis)
                .or(base.timeout),
        }
    }

    /// Load the scenario file if one was given, otherwise generate one.
    pub fn scenario(&self) -> Result<Scenario, Box<dyn Error>> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::load(path)?,
            None => {
                let seed = self.seed.unwrap_or_else(|| rand::rng().random());
                log::info!("generating {}x{} grid with seed {seed}", self.width, self.height);
                let mut rng = StdRng::seed_from_u64(seed);
                let grid = GridConfig::cells(self.width, self.height, self.cell_size);
                Scenario::random(grid, self.density, &mut rng)?
            }
        };
        scenario.search = self.search_config(scenario.search);
        Ok(scenario)
    }
}
