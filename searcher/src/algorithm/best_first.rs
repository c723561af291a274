//! Greedy best-first search

use std::collections::HashSet;

use super::frontier::by_key;
use super::{FrontierEntry, Outcome, Strategy, Trace};
use crate::errors::Result;
use crate::graph::{Graph, GraphPath, Heuristic};

/// Greedy search which always expands the frontier node
/// with the lowest heuristic estimate.
///
/// Ordering ignores the cost of reaching a node, so the path found
/// need not be the cheapest one.
pub fn best_first(graph: &Graph, heuristic: &Heuristic, start: &str, goal: &str) -> Result<Outcome> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let mut trace = Trace::new();
    let mut visited = HashSet::new();
    let mut frontier = by_key(|e: &FrontierEntry| e.key);
    frontier.insert(FrontierEntry::new(heuristic.get(start)?, GraphPath::new(start)));

    while !frontier.is_empty() {
        let entry = frontier.remove_min()?;
        let current = entry.node();
        trace.record(format!(
            "Examine node {} (h={}), current path: {}",
            current, entry.key, entry.path
        ));

        if current == goal {
            trace.record(format!(
                "Found goal {}. Path: {}, cost: {}",
                goal,
                entry.path,
                entry.path.weight()
            ));
            return Ok(Outcome::found(Strategy::BestFirst, trace, entry.path));
        }

        if visited.insert(current.clone()) {
            for (neighbor, weight) in graph.edges(current) {
                if visited.contains(neighbor) {
                    continue;
                }
                let h = heuristic.get(neighbor)?;
                trace.record(format!("Add {} to the frontier (h={})", neighbor, h));
                frontier.insert(FrontierEntry::new(h, entry.path.step_one(neighbor, weight)?));
            }
        }
    }

    trace.record("No path to the goal was found.");
    Ok(Outcome::not_found(Strategy::BestFirst, trace))
}
