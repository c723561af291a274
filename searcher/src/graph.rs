//! Weighted directed graphs and heuristic tables.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use log::warn;

use crate::errors::{Result, SearchError};

mod path;

pub use path::GraphPath;

/// Node identifiers are opaque labels compared by exact equality.
pub type Node = String;

/// Edge weights and heuristic estimates.
pub type Weight = usize;

type Neighbors = IndexMap<Node, Weight>;

/// Incrementally assemble a [Graph].
///
/// Every endpoint of an inserted edge becomes a node, so the
/// finished graph never refers to a node it doesn't contain.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: IndexMap<Node, Neighbors>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, which may have no edges at all.
    pub fn node<N: Into<Node>>(&mut self, node: N) -> &mut Self {
        self.nodes.entry(node.into()).or_insert_with(IndexMap::new);
        self
    }

    /// Add a directed edge. Returns false when the edge already
    /// existed, in which case its weight is replaced but its
    /// position among the neighbors is kept.
    pub fn insert<N: Into<Node>>(&mut self, edge: (N, Weight, N)) -> bool {
        let (origin, weight, destination) = edge;
        let origin = origin.into();
        let destination = destination.into();

        self.nodes
            .entry(destination.clone())
            .or_insert_with(IndexMap::new);

        self.nodes
            .entry(origin)
            .or_insert_with(IndexMap::new)
            .insert(destination, weight)
            .is_none()
    }

    /// Chainable form of [GraphBuilder::insert]
    pub fn edge<N: Into<Node>>(&mut self, origin: N, destination: N, weight: Weight) -> &mut Self {
        self.insert((origin, weight, destination));
        self
    }

    pub fn build(&mut self) -> Graph {
        Graph {
            nodes: std::mem::take(&mut self.nodes),
        }
    }
}

/// A weighted, directed graph.
///
/// Neighbors are kept in the order their edges were inserted,
/// which is the order searches use to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: IndexMap<Node, Neighbors>,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.keys()
    }

    /// Iterate through the outgoing edges of this node, in insertion order.
    ///
    /// Nodes which aren't in the graph have no edges.
    pub fn edges<'g>(&'g self, node: &str) -> impl Iterator<Item = (&'g Node, Weight)> + 'g {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    pub fn weight(&self, origin: &str, destination: &str) -> Option<Weight> {
        self.nodes
            .get(origin)
            .and_then(|neighbors| neighbors.get(destination))
            .copied()
    }

    /// Ensure a node is part of this graph.
    pub fn check_node(&self, node: &str) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(SearchError::UnknownNode(node.to_string()))
        }
    }

    /// Total weight along a sequence of nodes.
    ///
    /// Sequences with fewer than two nodes cost nothing.
    pub fn path_cost<N: AsRef<str>>(&self, path: &[N]) -> Result<Weight> {
        path.windows(2).try_fold(0, |total: Weight, pair| {
            let (origin, destination) = (pair[0].as_ref(), pair[1].as_ref());
            let weight = self.weight(origin, destination).ok_or_else(|| {
                SearchError::MissingEdge(origin.to_string(), destination.to_string())
            })?;
            total
                .checked_add(weight)
                .ok_or_else(|| SearchError::CostOverflow(destination.to_string()))
        })
    }

    /// Check that every node has a heuristic estimate, returning
    /// the nodes which are missing one.
    pub fn uncovered<'g>(&'g self, heuristic: &Heuristic) -> Vec<&'g Node> {
        let missing: Vec<&Node> = self
            .nodes()
            .filter(|n| !heuristic.contains_node(n))
            .collect();
        if !missing.is_empty() {
            warn!("No heuristic value for nodes {:?}", missing);
        }
        missing
    }
}

/// Estimates of the remaining cost from each node to the goal.
///
/// Estimates are only used to order choices, they are never
/// checked for admissibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heuristic {
    values: HashMap<Node, Weight>,
}

impl Heuristic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate for a node, returning the previous one.
    pub fn insert<N: Into<Node>>(&mut self, node: N, value: Weight) -> Option<Weight> {
        self.values.insert(node.into(), value)
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.values.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a node's estimate. Missing estimates are fatal for a search.
    pub fn get(&self, node: &str) -> Result<Weight> {
        self.values
            .get(node)
            .copied()
            .ok_or_else(|| SearchError::MissingHeuristic(node.to_string()))
    }
}

impl<N: Into<Node>> std::iter::FromIterator<(N, Weight)> for Heuristic {
    fn from_iter<I: IntoIterator<Item = (N, Weight)>>(iter: I) -> Self {
        Heuristic {
            values: iter.into_iter().map(|(n, w)| (n.into(), w)).collect(),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.nodes {
            write!(f, "{} ->", node)?;
            for (n, w) in neighbors {
                write!(f, " {}({})", n, w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
