use serde::Serialize;

use crate::graph::Graph;
use crate::search::dsatur_bnb::dsatur_branch_and_bound;
use crate::search::greedy::greedy_coloring;
use crate::search::stopping::TimeStoppingCriterion;

/// default time budget of the exact search, in seconds
pub const DEFAULT_TIME_LIMIT: f32 = 30.;

/// algorithm that produced the final coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// DSATUR branch-and-bound finished within the budget: provably optimal
    BranchAndBound,
    /// the exact search timed out: greedy heuristic result
    Greedy,
}

/** final outcome of a solve */
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// colors[v]: color assigned to vertex v
    pub colors: Vec<usize>,
    /// number of colors used
    pub nb_colors: usize,
    /// true if the exact search hit its deadline
    pub timeout: bool,
    /// algorithm that produced this coloring
    pub method: Method,
}

/** colors a graph, preferring the exact search.
Runs the DSATUR branch-and-bound under a wall-clock budget of `time_limit`
seconds; if the deadline fires, the greedy coloring is used instead (the
exact search may then have explored too little to beat it). */
pub fn solve(graph: &Graph, time_limit: f32) -> SolveReport {
    let stop = TimeStoppingCriterion::new(time_limit);
    let result = dsatur_branch_and_bound(graph, &stop);
    if result.timeout {
        let fallback = greedy_coloring(graph);
        return SolveReport {
            colors: fallback.colors,
            nb_colors: fallback.nb_colors,
            timeout: true,
            method: Method::Greedy,
        };
    }
    SolveReport {
        colors: result.colors,
        nb_colors: result.nb_colors,
        timeout: false,
        method: Method::BranchAndBound,
    }
}
