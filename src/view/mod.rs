//! Read-only projection of a round for the presentation layer.
//!
//! Symbols of face-down cards are hidden, so a renderer built on the view
//! cannot leak the board.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, FaceState, Symbol};
use crate::core::{GridSize, RoundState, RoundStatus};

/// One card as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` while the card is face down.
    pub symbol: Option<Symbol>,
    pub face: FaceState,
}

/// Everything a renderer needs to draw a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub grid: GridSize,
    /// Cards in board order (row-major).
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub score: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub status: RoundStatus,
    pub paused: bool,
}

impl RoundView {
    /// Project a round state.
    #[must_use]
    pub fn of(state: &RoundState) -> Self {
        let cards = state
            .deck()
            .iter()
            .map(|card| CardView {
                id: card.id,
                symbol: card.face.is_revealed().then(|| card.symbol.clone()),
                face: card.face,
            })
            .collect();

        Self {
            grid: state.grid(),
            cards,
            moves: state.moves(),
            elapsed_seconds: state.elapsed_seconds(),
            score: state.score(),
            matched_pairs: state.matched_pairs(),
            total_pairs: state.total_pairs(),
            status: state.status(),
            paused: state.is_paused(),
        }
    }

    /// Cards grouped into board rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(self.grid.side())
    }

    /// Completion banner text, once the round is won.
    #[must_use]
    pub fn completion_message(&self) -> Option<String> {
        (self.status == RoundStatus::Won)
            .then(|| format!("Congratulations! Your score: {}", self.score))
    }
}
