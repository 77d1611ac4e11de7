//! Greedy-coloring executable (decreasing-degree heuristic only)

use std::time::Instant;

use clap::{load_yaml, App};
use serde_json::json;

use bnb_color::search::greedy::greedy_coloring;
use bnb_color::util::{export_results, read_params};

/** solves a coloring instance using the decreasing-degree greedy */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("greedy.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, graph, _, sol_file, perf_file) = read_params(&main_args);

    // solve it
    let t_start = Instant::now();
    let coloring = greedy_coloring(&graph);
    let duration = t_start.elapsed().as_secs_f32();
    println!("greedy took {:.3} seconds. Nb colors: {}", duration, coloring.nb_colors);
    let stats = json!({
        "primal_list": vec![coloring.nb_colors],
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(&graph, &coloring, &stats, perf_file, sol_file, true);
}
