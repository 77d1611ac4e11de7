use bit_set::BitSet;

use crate::color::{Coloring, VertexId};
use crate::graph::Graph;

/** implements a greedy coloring by decreasing static degree.
    1. sort the vertices by decreasing degree (ties by original index)
    2. give each vertex, in that fixed order, the smallest color not used by
       an already-colored neighbor

Single deterministic pass, no backtracking, no optimality claim. Used both as
the fallback when the exact search times out and as a quick upper bound.
*/
pub fn greedy_coloring(graph: &Graph) -> Coloring {
    let n = graph.nb_vertices();
    let mut order: Vec<VertexId> = (0..n).collect();
    order.sort_by(|a, b| graph.degree(*b).cmp(&graph.degree(*a))); // stable: ties keep index order
    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut nb_colors = 0;
    for &v in &order {
        // colors already taken around v
        let mut adj_colors: BitSet = BitSet::default();
        for &u in graph.neighbors(v) {
            if let Some(c) = colors[u] {
                adj_colors.insert(c);
            }
        }
        // first color not taken
        let mut c = 0;
        while adj_colors.contains(c) { c += 1; }
        colors[v] = Some(c);
        nb_colors = std::cmp::max(nb_colors, c + 1);
    }
    Coloring {
        colors: colors.into_iter().flatten().collect(),
        nb_colors,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};

    #[test]
    fn test_cycle5() {
        let g = Graph::with_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0)]);
        let coloring = greedy_coloring(&g);
        assert!(matches!(checker(&g, &coloring.colors), CheckerResult::Ok(_)));
        assert!(coloring.nb_colors >= 3); // odd cycle
        assert!(coloring.nb_colors <= 3); // max degree + 1
    }

    #[test]
    fn test_complete_graph_k4() {
        let g = Graph::with_edges(4, &[(0,1),(0,2),(0,3),(1,2),(1,3),(2,3)]);
        let coloring = greedy_coloring(&g);
        assert_eq!(coloring.nb_colors, 4);
        assert_eq!(checker(&g, &coloring.colors), CheckerResult::Ok(4));
    }

    #[test]
    fn test_star_takes_two_colors() {
        // the center has the largest degree, so it is colored first
        let g = Graph::with_edges(5, &[(0,1),(0,2),(0,3),(0,4)]);
        let coloring = greedy_coloring(&g);
        assert_eq!(coloring.nb_colors, 2);
        assert_eq!(coloring.colors[0], 0);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0);
        let coloring = greedy_coloring(&g);
        assert_eq!(coloring.nb_colors, 0);
        assert!(coloring.colors.is_empty());
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::new(4);
        let coloring = greedy_coloring(&g);
        assert_eq!(coloring.nb_colors, 1);
        assert_eq!(coloring.colors, vec![0,0,0,0]);
    }

    #[test]
    fn test_random_graphs_are_properly_colored() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        for n in [5, 10, 20, 40] {
            let mut g = Graph::new(n);
            for u in 0..n {
                for v in (u+1)..n {
                    if rng.gen_bool(0.3) {
                        g.add_edge(u, v).unwrap();
                    }
                }
            }
            let coloring = greedy_coloring(&g);
            assert!(matches!(checker(&g, &coloring.colors), CheckerResult::Ok(_)));
        }
    }
}
