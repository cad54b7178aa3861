//! Cards and the symbols printed on them.
//!
//! A `Card` pairs an immutable `Symbol` with a mutable `FaceState`.
//! Its `CardId` is the card's stable position on the board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque symbol drawn from a theme (usually a single emoji).
///
/// Cloning is O(1): every card of a pair shares the same allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol.
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    /// Borrow the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a card on the board, `0..N²` in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the position as an index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Hidden; the only state a card can be flipped from.
    #[default]
    FaceDown,
    /// Revealed and waiting for its pair-attempt to resolve.
    FaceUp,
    /// Permanently revealed as half of a found pair.
    Matched,
}

impl FaceState {
    /// Does the player see the symbol in this state?
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, FaceState::FaceUp | FaceState::Matched)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable position on the board.
    pub id: CardId,

    /// Symbol on the hidden side.
    pub symbol: Symbol,

    /// Current face.
    pub face: FaceState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face: FaceState::FaceDown,
        }
    }

    /// Can this card be flipped?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.face == FaceState::FaceDown
    }

    /// Is this card half of a found pair?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == FaceState::Matched
    }
}
