use clap::ArgMatches;
use serde_json::Value;

use crate::color::{checker, CheckerResult, Coloring, Solution};
use crate::edgelist::read_from_file;
use crate::graph::Graph;
use crate::solver::DEFAULT_TIME_LIMIT;

/** reads command line input and returns the instance name, the graph, the
time limit, the solution filename and the stats filename */
pub fn read_params(main_args: &ArgMatches) -> (String, Graph, f32, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance")
        .expect("no instance file given").to_string();
    let t: f32 = match main_args.value_of("time") {
        None => DEFAULT_TIME_LIMIT,
        Some(v) => match v.parse() {
            Ok(t) if t >= 0. => t,
            _ => {
                eprintln!("unable to parse the time given: {}", v);
                std::process::exit(1);
            }
        },
    };
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read the instance file
    let graph = match read_from_file(&inst_filename) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    graph.display_statistics();
    println!("=======================");
    (inst_filename, graph, t, sol_file, perf_file)
}

/** writes a string encoding the solution (each line lists the vertices of one color) */
pub fn solution_to_string(solution: &[Vec<usize>]) -> String {
    let mut res = String::default();
    for color in solution {
        for v in color {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/// exports search results to files
pub fn export_results(
    graph: &Graph,
    coloring: &Coloring,
    stats: &Value,
    perf_file: Option<String>,
    sol_file: Option<String>,
    check_result: bool,
) {
    // export statistics
    if let Some(filename) = perf_file {
        let serialized = serde_json::to_string(stats)
            .expect("export_results: unable to serialize the stats");
        if let Err(why) = std::fs::write(&filename, serialized) {
            eprintln!("couldn't write {}: {}", filename, why);
        }
    }
    // export solution
    if let Some(filename) = sol_file {
        if check_result {
            match checker(graph, &coloring.colors) {
                CheckerResult::Ok(_) => {},
                reason => println!("invalid solution (reason: {:?})", reason),
            }
        }
        let partition: Solution = coloring.to_partition();
        if let Err(why) = std::fs::write(&filename, solution_to_string(&partition)) {
            eprintln!("couldn't write {}: {}", filename, why);
        }
    }
}
