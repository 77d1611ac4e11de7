//! Exact graph coloring: DSATUR branch-and-bound with a greedy fallback

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph data structure (adjacency lists + optional adjacency matrix)
pub mod graph;

/// coloring types and solution checker
pub mod color;

/// read raw edge-list and DIMACS instance files
pub mod edgelist;

/// search algorithms for the graph coloring problem
pub mod search;

/// exact search with greedy fallback on timeout
pub mod solver;

/// helper and utility methods for executables
pub mod util;
