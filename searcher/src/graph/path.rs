use std::fmt;

use super::{Node, Weight};
use crate::errors::{Result, SearchError};

/// A walk through a graph, along with the weight of the edges
/// traversed to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath {
    pub(crate) nodes: Vec<Node>,
    weight: Weight,
}

impl GraphPath {
    pub fn new<N: Into<Node>>(origin: N) -> Self {
        Self {
            nodes: vec![origin.into()],
            weight: 0,
        }
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extend a copy of this path along one more edge.
    pub fn step_one(&self, node: &str, weight: Weight) -> Result<Self> {
        let mut nextpath = self.clone();
        nextpath.push(node, weight)?;
        Ok(nextpath)
    }

    pub(crate) fn push(&mut self, node: &str, weight: Weight) -> Result<()> {
        self.weight = self
            .weight
            .checked_add(weight)
            .ok_or_else(|| SearchError::CostOverflow(node.to_string()))?;
        self.nodes.push(node.to_string());
        Ok(())
    }

    pub fn origin(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Sum of the edge weights accumulated along the path.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl fmt::Display for GraphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.nodes.join(", "))
    }
}
