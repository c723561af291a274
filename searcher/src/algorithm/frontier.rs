//! A sort-on-insert priority queue.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{Result, SearchError};

/// Holds entries in ascending order under a comparator.
///
/// The whole queue is re-sorted with a stable sort after every insertion,
/// so entries which compare equal come out in the order they went in.
pub struct OrderedFrontier<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    entries: Vec<T>,
    compare: F,
}

/// Build a frontier ordered by a key extracted from each entry.
pub fn by_key<T, K, G>(key: G) -> OrderedFrontier<T, impl Fn(&T, &T) -> Ordering>
where
    K: Ord,
    G: Fn(&T) -> K,
{
    OrderedFrontier::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}

impl<T, F> OrderedFrontier<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            entries: Vec::new(),
            compare,
        }
    }

    pub fn insert(&mut self, entry: T) {
        self.entries.push(entry);
        let compare = &self.compare;
        self.entries.sort_by(|a, b| compare(a, b));
    }

    /// Remove the smallest entry.
    ///
    /// Callers which treat an empty frontier as a normal outcome
    /// should check [OrderedFrontier::is_empty] first.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }
        Ok(self.entries.remove(0))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, F> fmt::Debug for OrderedFrontier<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedFrontier")
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascending_order() {
        let mut frontier = by_key(|e: &(usize, &'static str)| e.0);
        frontier.insert((5, "e"));
        frontier.insert((1, "a"));
        frontier.insert((3, "c"));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.remove_min(), Ok((1, "a")));
        assert_eq!(frontier.remove_min(), Ok((3, "c")));
        assert_eq!(frontier.remove_min(), Ok((5, "e")));
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut frontier = by_key(|e: &(usize, &'static str)| e.0);
        frontier.insert((1, "x"));
        frontier.insert((1, "y"));

        assert_eq!(frontier.remove_min(), Ok((1, "x")));
        assert_eq!(frontier.remove_min(), Ok((1, "y")));
    }

    #[test]
    fn ties_survive_later_inserts() {
        let mut frontier = by_key(|e: &(usize, &'static str)| e.0);
        frontier.insert((2, "p"));
        frontier.insert((2, "q"));
        frontier.insert((0, "first"));
        frontier.insert((2, "r"));
        frontier.insert((1, "s"));

        let mut order = Vec::new();
        while !frontier.is_empty() {
            order.push(frontier.remove_min().unwrap().1);
        }
        assert_eq!(order, vec!["first", "s", "p", "q", "r"]);
    }

    #[test]
    fn empty_frontier() {
        let mut frontier = OrderedFrontier::new(|a: &usize, b: &usize| a.cmp(b));
        assert_eq!(frontier.remove_min(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn custom_comparator() {
        let mut frontier = OrderedFrontier::new(|a: &usize, b: &usize| b.cmp(a));
        for n in &[3, 9, 1] {
            frontier.insert(*n);
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.remove_min(), Ok(9));
        assert_eq!(frontier.remove_min(), Ok(3));
        assert_eq!(frontier.remove_min(), Ok(1));
    }
}
