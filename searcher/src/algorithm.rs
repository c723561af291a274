//! Provides the building blocks for search algorithms

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::errors::{Result, UnknownStrategy};
use crate::graph::{Graph, GraphPath, Heuristic, Node, Weight};

pub(crate) mod best_first;
pub(crate) mod branch_bound;
pub mod frontier;
pub(crate) mod hill_climbing;
mod trace;

pub use frontier::OrderedFrontier;
pub use trace::Trace;

/// A path waiting on a frontier, ordered by `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    key: Weight,
    path: GraphPath,
}

impl FrontierEntry {
    fn new(key: Weight, path: GraphPath) -> Self {
        Self { key, path }
    }

    fn node(&self) -> &Node {
        self.path.destination()
    }
}

/// The four informed search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BestFirst,
    SimpleHillClimbing,
    SteepestAscentHillClimbing,
    BranchAndBound,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BestFirst,
        Strategy::SimpleHillClimbing,
        Strategy::SteepestAscentHillClimbing,
        Strategy::BranchAndBound,
    ];

    /// Short name, as accepted by [Strategy::from_str].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BestFirst => "best-first",
            Strategy::SimpleHillClimbing => "simple-hill-climbing",
            Strategy::SteepestAscentHillClimbing => "steepest-ascent-hill-climbing",
            Strategy::BranchAndBound => "branch-and-bound",
        }
    }

    /// Search from `start` to `goal` using this strategy.
    ///
    /// Both endpoints must be nodes of `graph`. Failing to reach the goal
    /// is reported through the [Outcome], errors are reserved for
    /// malformed inputs such as a missing heuristic estimate.
    pub fn search(
        &self,
        graph: &Graph,
        heuristic: &Heuristic,
        start: &str,
        goal: &str,
    ) -> Result<Outcome> {
        info!("{}: searching from {} to {}", self, start, goal);
        let outcome = match self {
            Strategy::BestFirst => best_first::best_first(graph, heuristic, start, goal),
            Strategy::SimpleHillClimbing => {
                hill_climbing::simple_hill_climbing(graph, heuristic, start, goal)
            }
            Strategy::SteepestAscentHillClimbing => {
                hill_climbing::steepest_ascent_hill_climbing(graph, heuristic, start, goal)
            }
            Strategy::BranchAndBound => branch_bound::branch_and_bound(graph, start, goal),
        }?;

        match outcome.cost() {
            Some(cost) => info!(
                "{}: reached {} in {} steps, cost {}",
                self,
                goal,
                outcome.trace().len(),
                cost
            ),
            None => info!(
                "{}: no path to {} after {} steps",
                self,
                goal,
                outcome.trace().len()
            ),
        }
        Ok(outcome)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Strategy::BestFirst => "Best-First Search",
            Strategy::SimpleHillClimbing => "Simple Hill Climbing",
            Strategy::SteepestAscentHillClimbing => "Steepest-Ascent Hill Climbing",
            Strategy::BranchAndBound => "Branch and Bound Search",
        };
        write!(f, "{}", title)
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == name)
            .or_else(|| match name.as_str() {
                "bfs" | "greedy" => Some(Strategy::BestFirst),
                "simple" | "hill-climbing" => Some(Strategy::SimpleHillClimbing),
                "steepest" | "steepest-ascent" => Some(Strategy::SteepestAscentHillClimbing),
                "bnb" | "branch-bound" | "uniform-cost" => Some(Strategy::BranchAndBound),
                _ => None,
            })
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Result of running a strategy to completion.
///
/// A search which stops without reaching the goal has no path,
/// and the last trace step explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    strategy: Strategy,
    trace: Trace,
    path: Option<GraphPath>,
}

impl Outcome {
    pub(crate) fn found(strategy: Strategy, trace: Trace, path: GraphPath) -> Self {
        Self {
            strategy,
            trace,
            path: Some(path),
        }
    }

    pub(crate) fn not_found(strategy: Strategy, trace: Trace) -> Self {
        Self {
            strategy,
            trace,
            path: None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&GraphPath> {
        self.path.as_ref()
    }

    /// Nodes along the path found, empty if the search failed.
    pub fn nodes(&self) -> &[Node] {
        self.path.as_ref().map(|p| p.nodes()).unwrap_or(&[])
    }

    /// Cost accumulated by the search along its path.
    pub fn cost(&self) -> Option<Weight> {
        self.path.as_ref().map(|p| p.weight())
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn steps(&self) -> &[String] {
        self.trace.steps()
    }

    /// Split into trace steps and the path, which is empty when
    /// no path was found.
    pub fn into_parts(self) -> (Vec<String>, Vec<Node>) {
        (
            self.trace.into_steps(),
            self.path.map(|p| p.into_nodes()).unwrap_or_default(),
        )
    }
}
