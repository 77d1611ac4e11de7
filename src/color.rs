use bit_set::BitSet;

use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition: sol[c] lists the vertices colored c).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** a proper coloring: one color per vertex plus the number of colors used */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// colors[v]: color assigned to vertex v
    pub colors: Vec<usize>,
    /// number of distinct colors used (1 + maximum color index, 0 if no vertex)
    pub nb_colors: usize,
}

impl Coloring {
    /** builds the partition view of the coloring (res[c]: vertices colored c) */
    pub fn to_partition(&self) -> Solution {
        let mut res = vec![Vec::new(); self.nb_colors];
        for (v, c) in self.colors.iter().enumerate() {
            res[*c].push(v);
        }
        res
    }
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper; stores the number of colors used
    Ok(usize),
    /// the assignment does not cover every vertex
    WrongLength {
        /// number of entries in the assignment
        found: usize,
        /// number of vertices of the graph
        expected: usize,
    },
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
checks that an assignment is a proper coloring of the graph.
returns the number of colors used if it is, the reason otherwise.
*/
pub fn checker(graph: &Graph, colors: &[usize]) -> CheckerResult {
    if colors.len() != graph.nb_vertices() {
        return CheckerResult::WrongLength {
            found: colors.len(),
            expected: graph.nb_vertices(),
        };
    }
    let mut used: BitSet = BitSet::default();
    for (u, cu) in colors.iter().enumerate() {
        used.insert(*cu);
        for &v in graph.neighbors(u) {
            if u < v && colors[v] == *cu {
                return CheckerResult::Conflict(u, v);
            }
        }
    }
    CheckerResult::Ok(used.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_accepts_proper_coloring() {
        let g = Graph::with_edges(4, &[(0,1),(1,2),(2,3),(3,0)]);
        assert_eq!(checker(&g, &[0,1,0,1]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_detects_conflict() {
        let g = Graph::with_edges(3, &[(0,1),(1,2),(2,0)]);
        assert_eq!(checker(&g, &[0,1,0]), CheckerResult::Conflict(0, 2));
    }

    #[test]
    fn test_checker_detects_wrong_length() {
        let g = Graph::new(3);
        assert_eq!(
            checker(&g, &[0,1]),
            CheckerResult::WrongLength { found:2, expected:3 }
        );
    }

    #[test]
    fn test_empty_assignment_on_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(checker(&g, &[]), CheckerResult::Ok(0));
    }

    #[test]
    fn test_partition_view() {
        let coloring = Coloring { colors: vec![0,1,0,2], nb_colors: 3 };
        assert_eq!(coloring.to_partition(), vec![vec![0,2], vec![1], vec![3]]);
    }
}
