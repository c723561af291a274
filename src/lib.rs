#![deny(clippy::all)]

use clap::{App, Arg};

use lazy_static::lazy_static;
use log::info;
use thiserror::Error;

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;

pub mod input;

use input::Problem;
use searcher::{Outcome, Strategy, UnknownStrategy};

type Error = anyhow::Error;

lazy_static! {
    /// Strategies by their number in the menu.
    static ref STRATEGIES: HashMap<u32, Strategy> = {
        let mut s = HashMap::new();
        for (n, strategy) in Strategy::ALL.iter().enumerate() {
            s.insert(n as u32 + 1, *strategy);
        }
        s
    };
}

pub fn driver() -> Result<(), Error> {
    let matches = App::new("hsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Informed search over weighted, directed graphs")
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Graph description, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .help("1: Best-First, 2: Simple Hill Climbing, 3: Steepest-Ascent Hill Climbing, 4: Branch and Bound, or all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for search steps"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let reader = get_input_reader(matches.value_of("input"))?;
    let mut problem = Problem::read(reader)?;
    if let Some(start) = matches.value_of("start") {
        problem.start = start.to_string();
    }
    if let Some(goal) = matches.value_of("goal") {
        problem.goal = goal.to_string();
    }

    let choice = matches
        .value_of("strategy")
        .or_else(|| problem.choice.as_deref())
        .ok_or(HSearchError::NoStrategy)?;
    let strategies = select(choice)?;

    info!(
        "Loaded {} nodes with {} heuristic values",
        problem.graph.len(),
        problem.heuristic.len()
    );
    problem.graph.uncovered(&problem.heuristic);

    for strategy in strategies {
        let outcome = strategy.search(
            &problem.graph,
            &problem.heuristic,
            &problem.start,
            &problem.goal,
        )?;
        print!("{}", Report(&outcome));
    }

    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| HSearchError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Pick strategies by menu number, by name, or all of them.
pub fn select(choice: &str) -> Result<Vec<Strategy>, HSearchError> {
    if choice.trim().eq_ignore_ascii_case("all") {
        return Ok(Strategy::ALL.to_vec());
    }

    match choice.trim().parse::<u32>() {
        Ok(n) => STRATEGIES
            .get(&n)
            .map(|s| vec![*s])
            .ok_or(HSearchError::StrategyNotFound(n)),
        Err(_) => Ok(vec![choice.parse::<Strategy>()?]),
    }
}

/// Displays a search the way it is shown to the user.
pub struct Report<'o>(pub &'o Outcome);

impl<'o> fmt::Display for Report<'o> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "\n=== {} ===", outcome.strategy())?;
        write!(f, "{}", outcome.trace())?;
        match (outcome.path(), outcome.cost()) {
            (Some(path), Some(cost)) => writeln!(f, "Path: {}, cost: {}", path, cost),
            _ => writeln!(f, "No path found."),
        }
    }
}

#[derive(Debug, Error)]
pub enum HSearchError {
    #[error("No strategy numbered {0}, choose 1-4")]
    StrategyNotFound(u32),

    #[error("No strategy chosen, pass --strategy or add one to the input")]
    NoStrategy,

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Problem {
        include_str!("../graphs/example.txt").parse().unwrap()
    }

    #[test]
    fn select_by_number() {
        assert_eq!(select("1").unwrap(), vec![Strategy::BestFirst]);
        assert_eq!(select(" 4 ").unwrap(), vec![Strategy::BranchAndBound]);
        match select("5") {
            Err(HSearchError::StrategyNotFound(5)) => {}
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn select_by_name() {
        assert_eq!(
            select("steepest-ascent-hill-climbing").unwrap(),
            vec![Strategy::SteepestAscentHillClimbing]
        );
        assert_eq!(select("ALL").unwrap(), Strategy::ALL.to_vec());
        assert!(matches!(
            select("random-walk"),
            Err(HSearchError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn report_found() {
        let problem = example();
        let outcome = Strategy::BranchAndBound
            .search(&problem.graph, &problem.heuristic, &problem.start, &problem.goal)
            .unwrap();

        let text = Report(&outcome).to_string();
        assert!(text.starts_with("\n=== Branch and Bound Search ===\n"));
        assert!(text.contains("Examine node B, current cost: 1, path: [A, B]\n"));
        assert!(text.ends_with("Path: [A, B, D], cost: 3\n"));
    }

    #[test]
    fn report_stuck() {
        let problem: Problem = include_str!("../graphs/local-optimum.txt").parse().unwrap();
        for strategy in &[
            Strategy::SimpleHillClimbing,
            Strategy::SteepestAscentHillClimbing,
        ] {
            let outcome = strategy
                .search(&problem.graph, &problem.heuristic, &problem.start, &problem.goal)
                .unwrap();
            let text = Report(&outcome).to_string();
            assert!(text.contains("No better neighbor found at S"));
            assert!(text.ends_with("No path found.\n"));
        }

        let outcome = Strategy::BranchAndBound
            .search(&problem.graph, &problem.heuristic, &problem.start, &problem.goal)
            .unwrap();
        assert_eq!(outcome.nodes(), &["S", "A", "G"]);
    }

    #[test]
    fn missing_input_file() {
        match get_input_reader(Some("graphs/does-not-exist.txt")) {
            Err(e) => assert_eq!(e.to_string(), "Input not found: graphs/does-not-exist.txt"),
            Ok(_) => panic!("Opened a file which doesn't exist"),
        }
    }
}
