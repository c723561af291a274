//! Branch and bound, ordered by the cost accumulated so far.

use std::collections::HashSet;

use super::frontier::by_key;
use super::{FrontierEntry, Outcome, Strategy, Trace};
use crate::errors::Result;
use crate::graph::{Graph, GraphPath};

/// Always expands the cheapest path found so far, so the first
/// path to reach the goal is a cheapest one. Heuristic estimates
/// play no part.
pub fn branch_and_bound(graph: &Graph, start: &str, goal: &str) -> Result<Outcome> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let mut trace = Trace::new();
    let mut visited = HashSet::new();
    let mut frontier = by_key(|e: &FrontierEntry| e.key);
    frontier.insert(FrontierEntry::new(0, GraphPath::new(start)));

    while !frontier.is_empty() {
        let entry = frontier.remove_min()?;
        let current = entry.node();
        trace.record(format!(
            "Examine node {}, current cost: {}, path: {}",
            current, entry.key, entry.path
        ));

        if current == goal {
            trace.record(format!(
                "Found goal {}. Path: {}, cost: {}",
                goal, entry.path, entry.key
            ));
            return Ok(Outcome::found(Strategy::BranchAndBound, trace, entry.path));
        }

        if visited.insert(current.clone()) {
            for (neighbor, weight) in graph.edges(current) {
                if visited.contains(neighbor) {
                    continue;
                }
                let next = entry.path.step_one(neighbor, weight)?;
                trace.record(format!(
                    "Add {} to the queue, cost: {}",
                    neighbor,
                    next.weight()
                ));
                frontier.insert(FrontierEntry::new(next.weight(), next));
            }
        }
    }

    trace.record("No path to the goal was found.");
    Ok(Outcome::not_found(Strategy::BranchAndBound, trace))
}
