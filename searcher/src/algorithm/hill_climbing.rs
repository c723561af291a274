//! Local search by hill climbing.
//!
//! Both variants walk a single path from the start, only ever moving to a
//! neighbor with a strictly lower heuristic estimate. Neither backtracks,
//! so both stop for good at the first local optimum.

use super::{Outcome, Strategy, Trace};
use crate::errors::Result;
use crate::graph::{Graph, GraphPath, Heuristic, Node, Weight};

/// A neighbor the climber could move to.
#[derive(Debug)]
struct Move<'g> {
    node: &'g Node,
    weight: Weight,
    estimate: Weight,
}

/// Move to the first neighbor, in insertion order, which improves on
/// the current estimate.
fn first_improvement<'g>(
    graph: &'g Graph,
    heuristic: &Heuristic,
    current: &str,
    estimate: Weight,
) -> Result<Option<Move<'g>>> {
    for (node, weight) in graph.edges(current) {
        let h = heuristic.get(node)?;
        if h < estimate {
            return Ok(Some(Move {
                node,
                weight,
                estimate: h,
            }));
        }
    }
    Ok(None)
}

/// Move to the neighbor with the lowest estimate, if it improves on
/// the current one. Ties go to the earliest neighbor.
fn best_improvement<'g>(
    graph: &'g Graph,
    heuristic: &Heuristic,
    current: &str,
    estimate: Weight,
) -> Result<Option<Move<'g>>> {
    let mut best: Option<Move<'g>> = None;
    for (node, weight) in graph.edges(current) {
        let h = heuristic.get(node)?;
        if best.as_ref().map_or(true, |b| h < b.estimate) {
            best = Some(Move {
                node,
                weight,
                estimate: h,
            });
        }
    }
    Ok(best.filter(|b| b.estimate < estimate))
}

fn climb<'g, C>(
    graph: &'g Graph,
    heuristic: &Heuristic,
    start: &str,
    goal: &str,
    strategy: Strategy,
    choose: C,
) -> Result<Outcome>
where
    C: Fn(&'g Graph, &Heuristic, &str, Weight) -> Result<Option<Move<'g>>>,
{
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let mut trace = Trace::new();
    let mut path = GraphPath::new(start);
    let mut estimate = heuristic.get(start)?;
    trace.record(format!("Start at {} (h={})", start, estimate));

    while path.destination() != goal {
        let current = path.destination().clone();

        if graph.edges(&current).next().is_none() {
            trace.record(format!("{} has no neighbors, the search stops.", current));
            return Ok(Outcome::not_found(strategy, trace));
        }

        match choose(graph, heuristic, current.as_str(), estimate)? {
            Some(step) => {
                trace.record(format!("Move to {} (h={})", step.node, step.estimate));
                path.push(step.node, step.weight)?;
                estimate = step.estimate;
            }
            None => {
                trace.record(format!(
                    "No better neighbor found at {}, the search stops.",
                    current
                ));
                return Ok(Outcome::not_found(strategy, trace));
            }
        }
    }

    trace.record(format!(
        "Found goal {}. Path: {}, cost: {}",
        goal,
        path,
        path.weight()
    ));
    Ok(Outcome::found(strategy, trace, path))
}

/// Hill climbing which takes the first improving neighbor.
pub fn simple_hill_climbing(
    graph: &Graph,
    heuristic: &Heuristic,
    start: &str,
    goal: &str,
) -> Result<Outcome> {
    climb(
        graph,
        heuristic,
        start,
        goal,
        Strategy::SimpleHillClimbing,
        first_improvement,
    )
}

/// Hill climbing which takes the best of all neighbors.
pub fn steepest_ascent_hill_climbing(
    graph: &Graph,
    heuristic: &Heuristic,
    start: &str,
    goal: &str,
) -> Result<Outcome> {
    climb(
        graph,
        heuristic,
        start,
        goal,
        Strategy::SteepestAscentHillClimbing,
        best_improvement,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::SearchError;

    fn example() -> (Graph, Heuristic) {
        let graph = Graph::builder()
            .edge("A", "B", 1)
            .edge("A", "C", 4)
            .edge("B", "D", 2)
            .edge("C", "D", 1)
            .build();
        let heuristic = vec![("A", 3), ("B", 2), ("C", 2), ("D", 0)]
            .into_iter()
            .collect();
        (graph, heuristic)
    }

    /// First neighbor improves a little, a later one improves a lot.
    fn fork() -> (Graph, Heuristic) {
        let graph = Graph::builder()
            .edge("S", "X", 1)
            .edge("S", "Y", 5)
            .edge("S", "Z", 1)
            .edge("X", "G", 1)
            .edge("Y", "G", 1)
            .edge("Z", "G", 1)
            .build();
        let heuristic = vec![("S", 9), ("X", 6), ("Y", 1), ("Z", 1), ("G", 0)]
            .into_iter()
            .collect();
        (graph, heuristic)
    }

    #[test]
    fn example_graph() {
        let (graph, heuristic) = example();

        let simple = simple_hill_climbing(&graph, &heuristic, "A", "D").unwrap();
        assert_eq!(simple.nodes(), &["A", "B", "D"]);
        assert_eq!(simple.cost(), Some(3));
        assert_eq!(
            simple.steps(),
            &[
                "Start at A (h=3)",
                "Move to B (h=2)",
                "Move to D (h=0)",
                "Found goal D. Path: [A, B, D], cost: 3",
            ]
        );

        let steepest = steepest_ascent_hill_climbing(&graph, &heuristic, "A", "D").unwrap();
        assert_eq!(steepest.nodes(), &["A", "B", "D"]);
        assert_eq!(steepest.cost(), Some(3));
    }

    #[test]
    fn first_versus_best_improvement() {
        let (graph, heuristic) = fork();

        let simple = simple_hill_climbing(&graph, &heuristic, "S", "G").unwrap();
        assert_eq!(simple.nodes(), &["S", "X", "G"]);
        assert_eq!(simple.cost(), Some(2));

        // Y and Z tie, so the earlier edge wins.
        let steepest = steepest_ascent_hill_climbing(&graph, &heuristic, "S", "G").unwrap();
        assert_eq!(steepest.nodes(), &["S", "Y", "G"]);
        assert_eq!(steepest.cost(), Some(6));
        assert_eq!(graph.path_cost(steepest.nodes()), Ok(6));
    }

    #[test]
    fn stuck_at_local_optimum() {
        // The goal is reachable, but only through a worse-looking node.
        let graph = Graph::builder()
            .edge("S", "A", 1)
            .edge("A", "G", 1)
            .build();
        let heuristic = vec![("S", 1), ("A", 2), ("G", 0)].into_iter().collect();

        for outcome in &[
            simple_hill_climbing(&graph, &heuristic, "S", "G").unwrap(),
            steepest_ascent_hill_climbing(&graph, &heuristic, "S", "G").unwrap(),
        ] {
            assert!(!outcome.is_found());
            assert_eq!(outcome.cost(), None);
            assert_eq!(
                outcome.trace().last(),
                Some("No better neighbor found at S, the search stops.")
            );
        }
    }

    #[test]
    fn equal_estimate_is_not_an_improvement() {
        let graph = Graph::builder()
            .edge("S", "A", 1)
            .edge("A", "G", 1)
            .build();
        let heuristic = vec![("S", 2), ("A", 2), ("G", 0)].into_iter().collect();

        assert!(!simple_hill_climbing(&graph, &heuristic, "S", "G")
            .unwrap()
            .is_found());
        assert!(!steepest_ascent_hill_climbing(&graph, &heuristic, "S", "G")
            .unwrap()
            .is_found());
    }

    #[test]
    fn dead_end() {
        let (graph, heuristic) = example();
        let outcome = simple_hill_climbing(&graph, &heuristic, "D", "A").unwrap();
        assert!(outcome.nodes().is_empty());
        assert_eq!(
            outcome.steps(),
            &["Start at D (h=0)", "D has no neighbors, the search stops."]
        );

        let outcome = steepest_ascent_hill_climbing(&graph, &heuristic, "D", "A").unwrap();
        assert!(!outcome.is_found());
    }

    #[test]
    fn start_is_goal() {
        let (graph, heuristic) = example();
        let outcome = steepest_ascent_hill_climbing(&graph, &heuristic, "B", "B").unwrap();
        assert_eq!(outcome.nodes(), &["B"]);
        assert_eq!(outcome.cost(), Some(0));
    }

    #[test]
    fn missing_heuristic_is_fatal() {
        let (graph, _) = example();
        let heuristic: Heuristic = vec![("A", 3), ("B", 2), ("D", 0)].into_iter().collect();

        // Simple climbing never looks past B.
        assert!(simple_hill_climbing(&graph, &heuristic, "A", "D").is_ok());
        assert_eq!(
            steepest_ascent_hill_climbing(&graph, &heuristic, "A", "D"),
            Err(SearchError::MissingHeuristic("C".to_string()))
        );
    }
}
