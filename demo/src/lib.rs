//! Command-line driver for *gridpath*: builds a grid from a scenario, runs
//! one search and prints the outcome.

pub mod cli;
pub mod render;
pub mod scenario;

pub use cli::Cli;
pub use scenario::Scenario;
