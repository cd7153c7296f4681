use clap::Parser;
use env_logger::Env;
use gridpath::Pathfinder;
use gridpath_demo::{Cli, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let scenario = cli.scenario()?;
    if let Some(path) = &cli.save {
        scenario.save(path)?;
    }

    let grid = scenario.build_grid()?;
    let mut finder = Pathfinder::with_config(&grid, scenario.search);
    let path = finder.find_path(&grid, scenario.start, scenario.target)?;

    if !cli.quiet {
        print!("{}", render::render(&grid, path.as_ref()));
    }
    match &path {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("route ({} steps, cost {}): {}", path.len(), path.cost(), steps.join(" "));
        }
        None => println!("no route from {} to {}", scenario.start, scenario.target),
    }
    if let Some(stats) = finder.last_stats() {
        println!(
            "expanded {} nodes in {:.3} ms",
            stats.expanded,
            stats.elapsed.as_secs_f64() * 1000.0
        );
    }
    Ok(())
}
