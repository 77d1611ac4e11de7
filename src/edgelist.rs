use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, line_ending, multispace0, not_line_ending, space1};
use nom::combinator::map_res;
use nom::multi::many0;
use nom::sequence::{pair, preceded, separated_pair, terminated};
use thiserror::Error;

use crate::graph::Graph;

/// errors reported while loading an instance file
#[derive(Debug, Error)]
pub enum LoadError {
    /// the file cannot be read
    #[error("unable to read {filename}: {source}")]
    Io {
        /// file that failed to open
        filename: String,
        /// underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// the content does not match any supported format
    #[error("invalid instance format: {0}")]
    Format(String),
    /// the DIMACS header edge count does not match the edge lines
    #[error("edge count mismatch: header says {expected}, found {found} edge lines")]
    EdgeCount {
        /// edge count announced by the header
        expected: usize,
        /// edge lines actually read
        found: usize,
    },
}

/// reads a non-negative integer
fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |d: &str| d.parse::<usize>())(s)
}

/// skips a single comment line ("c ...")
fn skip_comment(s: &str) -> IResult<&str, &str> {
    preceded(char('c'), terminated(not_line_ending, line_ending))(s)
}

/// skips all leading comment lines
pub fn skip_comments(s: &str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads a DIMACS header containing (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        alt((tag("p edge "), tag("p col "))),
        separated_pair(integer, space1, integer),
    )(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        pair(multispace0, tag("e ")),
        separated_pair(integer, space1, integer),
    )(s)
}

/// reads a raw "u v" pair (indices start at 1)
fn read_pair(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(multispace0, separated_pair(integer, space1, integer))(s)
}

/// adds a 1-based edge; bad endpoints are reported and skipped
fn add_edge_1based(graph: &mut Graph, a: usize, b: usize) -> Result<(), LoadError> {
    if a == 0 || b == 0 {
        return Err(LoadError::Format(
            format!("vertex ids must be >= 1 (got {} {})", a, b)
        ));
    }
    if let Err(e) = graph.add_edge(a - 1, b - 1) {
        eprintln!("warning: skipping edge: {}", e);
    }
    Ok(())
}

/** reads an instance from a string.
Accepts DIMACS content ("c" comments, "p edge n m" header, "e u v" lines) or a
raw edge list (one "u v" pair per line, vertex count = largest id). Both use
1-based vertex numbers, converted to 0-based. */
pub fn read_from_str(content: &str) -> Result<Graph, LoadError> {
    let input = content.replace('\r', "");
    let (rest, _) = skip_comments(&input)
        .map_err(|e| LoadError::Format(e.to_string()))?;
    let mut graph = match read_header(rest) {
        Ok((mut s, (n, m))) => { // DIMACS content
            let mut g = Graph::new(n);
            let mut nb_edge_lines = 0;
            while let Ok((tail, (a, b))) = read_edge(s) {
                s = tail;
                nb_edge_lines += 1;
                add_edge_1based(&mut g, a, b)?;
            }
            if nb_edge_lines != m && 2 * nb_edge_lines != m {
                return Err(LoadError::EdgeCount { expected: m, found: nb_edge_lines });
            }
            g
        }
        Err(_) => { // raw pair list
            let mut s = rest;
            let mut edges = Vec::new();
            let mut max_vertex = 0;
            while let Ok((tail, (a, b))) = read_pair(s) {
                s = tail;
                if a == 0 || b == 0 {
                    return Err(LoadError::Format(
                        format!("vertex ids must be >= 1 (got {} {})", a, b)
                    ));
                }
                max_vertex = max_vertex.max(a).max(b);
                edges.push((a, b));
            }
            if !s.trim_start().is_empty() {
                return Err(LoadError::Format(
                    format!("unexpected content: {:?}", s.trim_start().lines().next().unwrap_or(""))
                ));
            }
            let mut g = Graph::new(max_vertex);
            for (a, b) in edges {
                add_edge_1based(&mut g, a, b)?;
            }
            g
        }
    };
    graph.populate_adj_matrix();
    Ok(graph)
}

/// reads an instance from a file
pub fn read_from_file(filename: &str) -> Result<Graph, LoadError> {
    let content = fs::read_to_string(filename)
        .map_err(|source| LoadError::Io { filename: filename.to_string(), source })?;
    read_from_str(&content)
}
