//! Textual graph descriptions.
//!
//! A description lists, one item per line:
//!
//! ```text
//! <node count>
//! <edge count>
//! <from> <to> <weight>      (once per edge)
//! <node> <estimate>         (once per node)
//! <start>
//! <goal>
//! [<strategy>]
//! ```
//!
//! Blank lines are skipped, and `#` starts a comment.

use std::io::{self, Read};
use std::num::ParseIntError;
use std::str::FromStr;

use searcher::{Graph, Heuristic, Node, Weight};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {0}: expected {1}, found end of input")]
    Missing(usize, &'static str),

    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: {value:?} is not a non-negative integer")]
    InvalidNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {0}: unexpected trailing input {1:?}")]
    Trailing(usize, String),

    #[error("Unable to read input")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, InputError>;

/// Everything needed to run a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub graph: Graph,
    pub heuristic: Heuristic,
    pub start: Node,
    pub goal: Node,

    /// Strategy named by the description itself, if any.
    pub choice: Option<String>,
}

impl Problem {
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        buffer.parse()
    }
}

/// Walks the meaningful lines of a description, remembering
/// line numbers for error messages.
struct Lines<'s> {
    lines: std::iter::Enumerate<std::str::Lines<'s>>,
    last: usize,
}

impl<'s> Lines<'s> {
    fn new(text: &'s str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, Vec<&'s str>)> {
        for (i, line) in &mut self.lines {
            self.last = i + 1;
            let content = line.split('#').next().unwrap_or("");
            let tokens: Vec<&str> = content.split_whitespace().collect();
            if !tokens.is_empty() {
                return Some((i + 1, tokens));
            }
        }
        None
    }

    fn expect(&mut self, expected: &'static str, count: usize) -> Result<(usize, Vec<&'s str>)> {
        let (line, tokens) = self
            .next_line()
            .ok_or(InputError::Missing(self.last + 1, expected))?;

        if tokens.len() != count {
            return Err(InputError::Malformed {
                line,
                expected,
                found: tokens.join(" "),
            });
        }
        Ok((line, tokens))
    }
}

fn number(line: usize, value: &str) -> Result<Weight> {
    value.parse().map_err(|source| InputError::InvalidNumber {
        line,
        value: value.to_string(),
        source,
    })
}

impl FromStr for Problem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = Lines::new(s);

        let (line, tokens) = lines.expect("a node count", 1)?;
        let node_count = number(line, tokens[0])?;
        let (line, tokens) = lines.expect("an edge count", 1)?;
        let edge_count = number(line, tokens[0])?;

        let mut builder = Graph::builder();
        for _ in 0..edge_count {
            let (line, tokens) = lines.expect("an edge: <from> <to> <weight>", 3)?;
            builder.insert((tokens[0], number(line, tokens[2])?, tokens[1]));
        }

        let mut heuristic = Heuristic::new();
        for _ in 0..node_count {
            let (line, tokens) = lines.expect("a heuristic value: <node> <estimate>", 2)?;
            builder.node(tokens[0]);
            heuristic.insert(tokens[0], number(line, tokens[1])?);
        }

        let (_, start) = lines.expect("a start node", 1)?;
        let (_, goal) = lines.expect("a goal node", 1)?;

        let choice = match lines.next_line() {
            None => None,
            Some((_, tokens)) if tokens.len() == 1 => Some(tokens[0].to_string()),
            Some((line, tokens)) => {
                return Err(InputError::Malformed {
                    line,
                    expected: "a strategy",
                    found: tokens.join(" "),
                })
            }
        };

        if let Some((line, tokens)) = lines.next_line() {
            return Err(InputError::Trailing(line, tokens.join(" ")));
        }

        Ok(Problem {
            graph: builder.build(),
            heuristic,
            start: start[0].to_string(),
            goal: goal[0].to_string(),
            choice,
        })
    }
}
