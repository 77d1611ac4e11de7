use bit_set::BitSet;
use thiserror::Error;

use crate::color::VertexId;

/// non-fatal errors reported while building a graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// an edge endpoint does not belong to `0..n`
    #[error("edge ({u},{v}) out of range for a graph with {n} vertices")]
    EdgeOutOfRange {
        /// first endpoint
        u: usize,
        /// second endpoint
        v: usize,
        /// number of vertices of the graph
        n: usize,
    },
    /// both endpoints are the same vertex
    #[error("self-loop on vertex {0} rejected")]
    SelfLoop(VertexId),
}

/** models an undirected graph to color.
Adjacency lists are kept symmetric and without duplicates; the optional
adjacency matrix accelerates `are_adjacent` queries. */
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl Graph {

    /** creates an empty graph with n vertices */
    pub fn new(n: usize) -> Self {
        Self { n, m: 0, adj_list: vec![Vec::new(); n], adj_matrix: None }
    }

    /** creates a graph from an edge list (1 edge = 1 pair of 0-based vertex ids).
    Edges that cannot be added are silently skipped. */
    pub fn with_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
        let mut res = Self::new(n);
        for &(u, v) in edges {
            let _ = res.add_edge(u, v);
        }
        res
    }

    /** adds the undirected edge (u,v).
    Out-of-range endpoints and self-loops are reported and not added; the graph
    stays usable. Duplicate edges are ignored. */
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if u >= self.n || v >= self.n {
            return Err(GraphError::EdgeOutOfRange { u, v, n: self.n });
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.are_adjacent(u, v) { // deduplicate
            return Ok(());
        }
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.m += 1;
        if let Some(matrix) = &mut self.adj_matrix {
            matrix[u].insert(v);
            matrix[v].insert(u);
        }
        Ok(())
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex u
    pub fn neighbors(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of vertex u
    pub fn degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a, resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /** returns if u and v are adjacent
    if the adjacency matrix is defined: O(1)
    otherwise: O(Δ(G))
    */
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        match &self.adj_matrix {
            None => self.adj_list[u].iter().any(|c| &v == c),
            Some(matrix) => matrix[u].contains(v),
        }
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees: Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
        println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
        match self.adj_matrix {
            None => {},
            Some(_) => println!("\tadj matrix computed")
        }
    }
}
