//! Symbol frequency counting.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can be coded: a discrete token compared by equality.
///
/// `Debug` is required so that unknown symbols can be reported in errors.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// Occurrence counts per distinct symbol.
///
/// Symbols are kept in first-occurrence order. That order becomes the creation
/// order of the leaves when a tree is built from the table, which in turn
/// decides ties between equal weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, usize)>,
    positions: HashMap<S, usize>,
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Count every symbol of `symbols`.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for symbol in symbols {
            table.insert(symbol);
        }
        table
    }

    /// Count one more occurrence of `symbol`.
    pub fn insert(&mut self, symbol: S) {
        match self.positions.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Occurrences of `symbol`, 0 if it never appeared.
    pub fn count(&self, symbol: &S) -> usize {
        self.positions
            .get(symbol)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
