//! Themes: named, ordered collections of distinct symbols.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Symbol;
use crate::core::error::{Error, Result};
use crate::core::GridSize;

/// A named, ordered collection of distinct symbols.
///
/// Duplicate symbols are dropped on construction (first occurrence wins),
/// so any prefix of a theme can be paired without ambiguity.
///
/// ```
/// use memory_match::cards::Theme;
///
/// let theme = Theme::new("fruit", ["🍎", "🍌", "🍎", "🍇"]);
/// assert_eq!(theme.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    symbols: Vec<Symbol>,
}

impl Theme {
    /// Create a theme from symbols in display order.
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut seen = FxHashSet::default();
        let symbols = symbols
            .into_iter()
            .map(Into::into)
            .filter(|symbol: &Symbol| seen.insert(symbol.clone()))
            .collect();

        Self {
            name: name.into(),
            symbols,
        }
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All symbols, in order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the theme has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Can this theme fill a board of the given size?
    #[must_use]
    pub fn supports(&self, grid: GridSize) -> bool {
        self.len() >= grid.pair_count()
    }

    /// The leading symbols used for a board of the given size.
    pub fn symbols_for(&self, grid: GridSize) -> Result<&[Symbol]> {
        let required = grid.pair_count();
        self.symbols
            .get(..required)
            .ok_or(Error::InsufficientSymbols {
                required,
                available: self.len(),
            })
    }
}
