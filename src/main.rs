use std::time::Instant;

use cspace_astar::{Cell, Planner};

fn main() {
    let planner = Planner::configure(Cell::new(20, 20), Cell::new(180, 280), 5, 5, 1)
        .expect("Invalid configuration");
    if let Err(err) = planner.validate() {
        println!("{}", err);
        return;
    }

    println!("Searching...");
    let num_runs = 20;
    loop {
        let start = Instant::now();
        let mut result = planner.search();
        for _ in 1..num_runs {
            result = planner.search();
        }
        let run = start.elapsed() / num_runs;
        println!(
            "Avg. search: {:?} --> {} explored, {} peak frontier, {} path cells, cost {:.2} ({:.0} expansions/s)",
            run,
            result.explored.len(),
            result.stats.peak_frontier,
            result.path.len(),
            result.cost,
            result.explored.len() as f64 / run.as_secs_f64(),
        );
    }
}
