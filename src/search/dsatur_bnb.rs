use bit_set::BitSet;

use crate::color::VertexId;
use crate::graph::Graph;
use crate::search::clique::approximate_max_clique;
use crate::search::stopping::StoppingCriterion;

/** result of the branch-and-bound search */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbResult {
    /// best complete coloring found (colors[v]: color of vertex v)
    pub colors: Vec<usize>,
    /// number of colors of the best coloring (the achieved upper bound)
    pub nb_colors: usize,
    /// true if the deadline fired; the result is then not proven optimal
    pub timeout: bool,
}

/** search state of the DSATUR branch-and-bound.
Owned by the top-level call and threaded through the recursion; `assign` and
`unassign` are symmetric so every stack frame leaves the state exactly as it
found it, including when unwinding on timeout. */
struct BnbContext<'a, Stop> {
    /// instance being colored
    graph: &'a Graph,
    /// polled at the top of every recursive call
    stop: &'a Stop,
    /// clique-derived lower bound, static for the whole search
    clique_bound: usize,
    /// static degrees (tie-breaker)
    degrees: Vec<usize>,
    /// colors[v]: color assigned to vertex v (None: unassigned)
    colors: Vec<Option<usize>>,
    /// set of vertices not colored yet
    uncolored: BitSet,
    /// dsat[v]: nb distinct colors among the colored neighbors of v
    dsat: Vec<usize>,
    /// nb_adj_colored[v][c]: nb neighbors of v colored with c
    nb_adj_colored: Vec<Vec<usize>>,
    /// best number of colors found so far (starts at n, only decreases)
    upper_bound: usize,
    /// assignment achieving upper_bound
    best: Vec<usize>,
    /// set once; every active frame unwinds as soon as it observes it
    timeout: bool,
}

impl<'a, Stop: StoppingCriterion> BnbContext<'a, Stop> {
    fn new(graph: &'a Graph, stop: &'a Stop, clique_bound: usize) -> Self {
        let n = graph.nb_vertices();
        let mut uncolored = BitSet::default();
        for v in 0..n { uncolored.insert(v); }
        Self {
            graph,
            stop,
            clique_bound,
            degrees: (0..n).map(|v| graph.degree(v)).collect(),
            colors: vec![None; n],
            uncolored,
            dsat: vec![0; n],
            nb_adj_colored: vec![vec![0; n]; n],
            // worst case: every vertex its own color
            upper_bound: n,
            best: (0..n).collect(),
            timeout: false,
        }
    }

    /// uncolored vertex with maximum saturation; ties by degree, then lowest index
    fn select_vertex(&self) -> Option<VertexId> {
        self.uncolored.iter().max_by(|a, b| {
            self.dsat[*a].cmp(&self.dsat[*b])
                .then_with(|| self.degrees[*a].cmp(&self.degrees[*b]))
                .then_with(|| b.cmp(a))
        })
    }

    /// colors v with c and updates the saturation of its neighbors
    fn assign(&mut self, v: VertexId, c: usize) {
        debug_assert!(self.colors[v].is_none());
        self.colors[v] = Some(c);
        self.uncolored.remove(v);
        for &u in self.graph.neighbors(v) {
            self.nb_adj_colored[u][c] += 1;
            if self.nb_adj_colored[u][c] == 1 {
                self.dsat[u] += 1;
            }
        }
    }

    /// exact inverse of `assign`
    fn unassign(&mut self, v: VertexId, c: usize) {
        debug_assert_eq!(self.colors[v], Some(c));
        self.colors[v] = None;
        self.uncolored.insert(v);
        for &u in self.graph.neighbors(v) {
            self.nb_adj_colored[u][c] -= 1;
            if self.nb_adj_colored[u][c] == 0 {
                self.dsat[u] -= 1;
            }
        }
    }

    /// recursive branch-and-bound over the number of colored vertices
    fn search(&mut self, step: usize, used_colors: usize) {
        // deadline first, before any other work
        if self.stop.is_finished() {
            self.timeout = true;
            return;
        }
        // prune: this state cannot beat the best known solution
        let lower_bound = std::cmp::max(self.clique_bound, used_colors);
        if lower_bound >= self.upper_bound {
            return;
        }
        // complete coloring: strict improvement by construction (colors tried < upper_bound)
        if step == self.graph.nb_vertices() {
            self.upper_bound = used_colors;
            self.best = self.colors.iter().map(|c| c.unwrap_or(0)).collect();
            return;
        }
        let vertex = match self.select_vertex() {
            Some(v) => v,
            None => return, // unreachable: step < n implies an uncolored vertex
        };
        // colors forbidden by the already-colored neighbors
        let mut forbidden: BitSet = BitSet::default();
        for &u in self.graph.neighbors(vertex) {
            if let Some(c) = self.colors[u] {
                forbidden.insert(c);
            }
        }
        // ascending colors, re-reading upper_bound: it may shrink under us
        let mut c = 0;
        while c < self.upper_bound {
            if !forbidden.contains(c) {
                self.assign(vertex, c);
                self.search(step + 1, std::cmp::max(used_colors, c + 1));
                self.unassign(vertex, c);
                if self.timeout {
                    return; // no further colors tried at this level
                }
            }
            c += 1;
        }
    }
}

/** colors a graph with a DSATUR-ordered branch-and-bound.

The search selects at each step the uncolored vertex with maximum saturation
degree (ties by static degree, then lowest index), prunes subtrees whose
lower bound `max(clique_bound, used_colors)` cannot beat the best solution
found, and polls the stopping criterion at the top of every recursive call.

If `timeout` is false in the result, `nb_colors` is the chromatic number of
the graph and `colors` a proper coloring achieving it. On timeout the result
holds the best complete coloring found before the cutoff (at worst the
trivial one-color-per-vertex assignment); callers typically substitute the
greedy heuristic instead (see [`crate::solver::solve`]).
*/
pub fn dsatur_branch_and_bound<Stop: StoppingCriterion>(graph: &Graph, stop: &Stop) -> BnbResult {
    let clique_bound = approximate_max_clique(graph);
    let mut context = BnbContext::new(graph, stop, clique_bound);
    context.search(0, 0);
    BnbResult {
        colors: context.best,
        nb_colors: context.upper_bound,
        timeout: context.timeout,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::search::clique::approximate_max_clique;
    use crate::search::greedy::greedy_coloring;
    use crate::search::stopping::{NeverStoppingCriterion, TimeStoppingCriterion};

    /// brute-force chromatic number (k-colorability for increasing k)
    fn chromatic_number(graph: &Graph) -> usize {
        fn colorable(graph: &Graph, k: usize, v: usize, colors: &mut Vec<Option<usize>>) -> bool {
            if v == graph.nb_vertices() { return true; }
            for c in 0..k {
                if graph.neighbors(v).iter().all(|&u| colors[u] != Some(c)) {
                    colors[v] = Some(c);
                    if colorable(graph, k, v + 1, colors) { return true; }
                    colors[v] = None;
                }
            }
            false
        }
        let n = graph.nb_vertices();
        if n == 0 { return 0; }
        (1..=n)
            .find(|&k| colorable(graph, k, 0, &mut vec![None; n]))
            .unwrap_or(n)
    }

    fn assert_optimal(graph: &Graph) {
        let result = dsatur_branch_and_bound(graph, &NeverStoppingCriterion);
        assert!(!result.timeout);
        assert_eq!(result.nb_colors, chromatic_number(graph));
        assert_eq!(checker(graph, &result.colors), CheckerResult::Ok(result.nb_colors));
    }

    #[test]
    fn test_cycle5_needs_three_colors() {
        let g = Graph::with_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0)]);
        let result = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        assert!(!result.timeout);
        assert_eq!(result.nb_colors, 3);
        assert_eq!(checker(&g, &result.colors), CheckerResult::Ok(3));
    }

    #[test]
    fn test_complete_graph_k4() {
        let g = Graph::with_edges(4, &[(0,1),(0,2),(0,3),(1,2),(1,3),(2,3)]);
        let result = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        assert!(!result.timeout);
        assert_eq!(result.nb_colors, 4);
        assert_eq!(checker(&g, &result.colors), CheckerResult::Ok(4));
    }

    #[test]
    fn test_bipartite_k33() {
        let g = Graph::with_edges(6, &[(0,3),(0,4),(0,5),(1,3),(1,4),(1,5),(2,3),(2,4),(2,5)]);
        assert_optimal(&g); // chromatic number 2
        let result = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        assert_eq!(result.nb_colors, 2);
    }

    #[test]
    fn test_petersen_graph() {
        let mut g = Graph::new(10);
        for i in 0..5 {
            g.add_edge(i, (i + 1) % 5).unwrap(); // outer cycle
            g.add_edge(i, i + 5).unwrap(); // spokes
            g.add_edge(i + 5, (i + 2) % 5 + 5).unwrap(); // inner pentagram
        }
        let result = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        assert!(!result.timeout);
        assert_eq!(result.nb_colors, 3);
        assert_eq!(checker(&g, &result.colors), CheckerResult::Ok(3));
    }

    #[test]
    fn test_empty_graph() {
        let result = dsatur_branch_and_bound(&Graph::new(0), &NeverStoppingCriterion);
        assert!(!result.timeout);
        assert_eq!(result.nb_colors, 0);
        assert!(result.colors.is_empty());
    }

    #[test]
    fn test_zero_budget_reports_timeout() {
        let g = Graph::with_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0)]);
        let stop = TimeStoppingCriterion::new(0.);
        let result = dsatur_branch_and_bound(&g, &stop);
        assert!(result.timeout);
        // the trivial witness is still a proper coloring
        assert!(matches!(checker(&g, &result.colors), CheckerResult::Ok(_)));
    }

    #[test]
    fn test_never_beaten_by_greedy() {
        let g = Graph::with_edges(8, &[
            (0,1),(1,2),(2,3),(3,0),(4,5),(5,6),(6,7),(7,4),(0,4),(1,5),(2,6),(3,7)
        ]);
        let exact = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        let greedy = greedy_coloring(&g);
        assert!(!exact.timeout);
        assert!(exact.nb_colors <= greedy.nb_colors);
    }

    #[test]
    fn test_optimal_on_random_small_graphs() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for trial in 0..20 {
            let n = 4 + (trial % 5);
            let mut g = Graph::new(n);
            for u in 0..n {
                for v in (u+1)..n {
                    if rng.gen_bool(0.5) {
                        g.add_edge(u, v).unwrap();
                    }
                }
            }
            assert_optimal(&g);
        }
    }

    #[test]
    fn test_clique_bound_is_sound() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(13);
        for _ in 0..20 {
            let n = 5 + rng.gen_range(0..4);
            let mut g = Graph::new(n);
            for u in 0..n {
                for v in (u+1)..n {
                    if rng.gen_bool(0.5) {
                        g.add_edge(u, v).unwrap();
                    }
                }
            }
            assert!(approximate_max_clique(&g) <= chromatic_number(&g));
        }
    }

    #[test]
    fn test_reinvocation_is_deterministic() {
        // no state leaks between two solves of the same graph
        let g = Graph::with_edges(6, &[(0,1),(1,2),(2,0),(3,4),(4,5),(5,3),(0,3)]);
        let first = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        let second = dsatur_branch_and_bound(&g, &NeverStoppingCriterion);
        assert_eq!(first, second);
    }
}
