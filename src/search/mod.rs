//! Search algorithms for the graph coloring problem.

/// greedy coloring by decreasing static degree
pub mod greedy;

/// greedy clique approximation (search lower bound)
pub mod clique;

/// DSATUR branch-and-bound (exact within a time budget)
pub mod dsatur_bnb;

/// stopping criteria for the searches
pub mod stopping;
