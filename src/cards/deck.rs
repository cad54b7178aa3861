//! Deck construction.
//!
//! A deck is the ordered board: `N²` cards, two per symbol, uniformly
//! permuted. Card ids are assigned after shuffling, so `CardId(i)` is
//! always the card at position `i`.
//!
//! Backed by `im::Vector` so round snapshots clone in O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, FaceState, Symbol};
use super::theme::Theme;
use crate::core::error::Result;
use crate::core::{GameRng, GridSize};

/// The cards of one round, in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Deal a shuffled deck for a board of the given size.
    ///
    /// Takes the first `N²/2` symbols of the theme, duplicates them into
    /// pairs and shuffles the result.
    ///
    /// ```
    /// use memory_match::cards::{Deck, Theme};
    /// use memory_match::core::{GameRng, GridSize};
    ///
    /// let theme = Theme::new("letters", ["a", "b", "c", "d", "e", "f", "g", "h"]);
    /// let deck = Deck::deal(GridSize::EASY, &theme, &mut GameRng::new(1)).unwrap();
    /// assert_eq!(deck.len(), 16);
    /// assert!(deck.is_well_formed());
    /// ```
    pub fn deal(grid: GridSize, theme: &Theme, rng: &mut GameRng) -> Result<Self> {
        let symbols = theme.symbols_for(grid)?;

        let mut pairs: Vec<Symbol> = symbols
            .iter()
            .flat_map(|symbol| [symbol.clone(), symbol.clone()])
            .collect();
        rng.shuffle(&mut pairs);

        let cards = pairs
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card::new(CardId::new(position as u32), symbol))
            .collect();

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (`len / 2`).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Set a card's face. Returns false if the id is out of range.
    pub fn set_face(&mut self, id: CardId, face: FaceState) -> bool {
        match self.cards.get_mut(id.index()) {
            Some(card) => {
                card.face = face;
                true
            }
            None => false,
        }
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count cards in a given face state.
    #[must_use]
    pub fn count_face(&self, face: FaceState) -> usize {
        self.cards.iter().filter(|card| card.face == face).count()
    }

    /// Check the pairing invariant: even length, every symbol exactly twice,
    /// ids equal to positions.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.cards.len() % 2 != 0 {
            return false;
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for (position, card) in self.cards.iter().enumerate() {
            if card.id.index() != position {
                return false;
            }
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }

        counts.values().all(|&count| count == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    fn theme(count: usize) -> Theme {
        Theme::new("numbers", (0..count).map(|i| format!("s{}", i)))
    }

    #[test]
    fn test_deal_easy() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(GridSize::EASY, &theme(18), &mut rng).unwrap();

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.pair_count(), 8);
        assert!(deck.is_well_formed());
        assert_eq!(deck.count_face(FaceState::FaceDown), 16);
    }

    #[test]
    fn test_deal_uses_theme_prefix() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(GridSize::new(2).unwrap(), &theme(18), &mut rng).unwrap();

        let mut symbols: Vec<_> = deck.iter().map(|c| c.symbol.as_str().to_string()).collect();
        symbols.sort();
        assert_eq!(symbols, vec!["s0", "s0", "s1", "s1"]);
    }

    #[test]
    fn test_deal_insufficient() {
        let mut rng = GameRng::new(42);
        let result = Deck::deal(GridSize::EASY, &theme(3), &mut rng);
        assert!(matches!(
            result,
            Err(Error::InsufficientSymbols { required: 8, available: 3 })
        ));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Deck::deal(GridSize::HARD, &theme(18), &mut GameRng::new(9)).unwrap();
        let b = Deck::deal(GridSize::HARD, &theme(18), &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_face() {
        let mut deck = Deck::deal(GridSize::EASY, &theme(8), &mut GameRng::new(1)).unwrap();

        assert!(deck.set_face(CardId::new(5), FaceState::FaceUp));
        assert_eq!(deck.get(CardId::new(5)).map(|c| c.face), Some(FaceState::FaceUp));
        assert!(!deck.set_face(CardId::new(16), FaceState::FaceUp));
        assert!(deck.get(CardId::new(16)).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::deal(GridSize::EASY, &theme(8), &mut GameRng::new(1)).unwrap();
        let snapshot = deck.clone();

        deck.set_face(CardId::new(0), FaceState::Matched);

        assert_eq!(snapshot.get(CardId::new(0)).map(|c| c.face), Some(FaceState::FaceDown));
    }
}
