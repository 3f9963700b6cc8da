use crate::arena::vertex::Vertex;

/// Failure conditions surfaced to callers.
/// The search itself is deterministic and pure; every variant here is a
/// caller-input problem or an exhausted resource budget, never a transient
/// condition to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed edge-list specification, rejected before any search.
    Input(String),
    /// A cop or robber start vertex absent from the graph.
    InvalidVertex(Vertex),
    /// A graph with zero vertices has no damage number.
    EmptyGraph,
    /// The search outgrew its node budget.
    Exhausted(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(edge) => write!(f, "malformed edge: {}", edge),
            Error::InvalidVertex(v) => write!(f, "vertex {} is not in the graph", v),
            Error::EmptyGraph => write!(f, "graph has no vertices"),
            Error::Exhausted(n) => write!(f, "search exceeded its budget of {} nodes", n),
        }
    }
}

impl std::error::Error for Error {}
