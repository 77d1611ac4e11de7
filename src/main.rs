//! Main solver executable: DSATUR branch-and-bound with a greedy fallback

use std::time::Instant;

use clap::{load_yaml, App};
use serde_json::json;

use bnb_color::color::Coloring;
use bnb_color::solver::{solve, Method};
use bnb_color::util::{export_results, read_params};

/** reads an instance, solves it within the time limit, prints the coloring */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    println!("=========================================================");
    let (inst_filename, graph, time_limit, sol_file, perf_file) = read_params(&main_args);
    println!("time limit: {}", time_limit);

    // solve it
    let t_start = Instant::now();
    let report = solve(&graph, time_limit);
    let duration = t_start.elapsed();

    // display the result
    match report.method {
        Method::Greedy => {
            println!("time limit exceeded: using the greedy coloring instead");
            println!("greedy coloring:");
        }
        Method::BranchAndBound => {
            println!("best solution found (DSATUR branch-and-bound):");
        }
    }
    for (v, c) in report.colors.iter().enumerate() {
        println!("vertex {}: color {}", v + 1, c);
    }
    println!("number of colors used: {}", report.nb_colors);
    println!("total solving time: {} ms", duration.as_millis());

    // export results
    let stats = json!({
        "primal_list": vec![report.nb_colors],
        "time_searched": duration.as_secs_f32(),
        "inst_name": inst_filename,
        "timeout": report.timeout,
        "method": report.method,
    });
    let coloring = Coloring { colors: report.colors.clone(), nb_colors: report.nb_colors };
    export_results(&graph, &coloring, &stats, perf_file, sol_file, true);
}
