use crate::color::VertexId;
use crate::graph::Graph;

/** implements a greedy algorithm that finds a "large" clique.
Every vertex is tried as a starting point in index order; its neighbors are
scanned in adjacency-list order and added when adjacent to every vertex
already in the candidate clique. The largest candidate found is returned.

The result is a valid lower bound on the chromatic number, but it is a
heuristic: depending on the visitation order it can miss the true maximum
clique, so callers must not treat it as a certified value.
*/
pub fn approximate_max_clique(graph: &Graph) -> usize {
    let n = graph.nb_vertices();
    let mut max_clique_size = 0;
    for start in 0..n {
        let mut clique: Vec<VertexId> = vec![start];
        for &neighbor in graph.neighbors(start) {
            if clique.iter().all(|&member| graph.are_adjacent(member, neighbor)) {
                clique.push(neighbor);
            }
        }
        max_clique_size = std::cmp::max(max_clique_size, clique.len());
    }
    max_clique_size
}
