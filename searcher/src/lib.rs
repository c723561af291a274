//! Informed search over weighted, directed graphs.
//!
//! Build a [Graph] and a [Heuristic] table once, then run any of the
//! strategies against them as often as needed:
//!
//! * [best_first] greedily follows the lowest heuristic estimate.
//! * [simple_hill_climbing] and [steepest_ascent_hill_climbing] walk a
//!   single path downhill and give up at the first local optimum.
//! * [branch_and_bound] expands the cheapest path so far and finds an
//!   optimal path whenever one exists.
//!
//! Each search returns an [Outcome] holding the path found, if any,
//! along with a [Trace] of the steps taken.

pub mod algorithm;
mod errors;
pub mod graph;

pub use errors::Result as SearchResult;
pub use errors::{SearchError, UnknownStrategy};

pub use algorithm::best_first::best_first;
pub use algorithm::branch_bound::branch_and_bound;
pub use algorithm::hill_climbing::{simple_hill_climbing, steepest_ascent_hill_climbing};
pub use algorithm::{OrderedFrontier, Outcome, Strategy, Trace};
pub use graph::{Graph, GraphBuilder, GraphPath, Heuristic, Node, Weight};
