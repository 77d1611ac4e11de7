//! Clique-approximation executable (prints the lower bound only)

use std::time::Instant;

use clap::{load_yaml, App};

use bnb_color::search::clique::approximate_max_clique;
use bnb_color::util::read_params;

/** approximates the maximum clique of an instance (lower bound on its
chromatic number) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("clique.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (_, graph, _, _, _) = read_params(&main_args);

    // approximate the clique
    let t_start = Instant::now();
    let size = approximate_max_clique(&graph);
    let duration = t_start.elapsed().as_secs_f32();
    println!("clique approximation took {:.3} seconds. Size: {}", duration, size);
}
