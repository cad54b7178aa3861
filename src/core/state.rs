//! Round state.
//!
//! ## RoundState
//!
//! Everything one round of play needs, as a single owned value:
//! - The dealt deck and which cards are awaiting resolution
//! - Move, time and score bookkeeping
//! - Status and pause flag
//! - The token of the pending mismatch unflip, if any
//!
//! Engine operations in `crate::rules` take `&mut RoundState`; there is no
//! hidden shared state. Cloning is O(1) thanks to the persistent deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GridSize;
use crate::cards::{Card, CardId, Deck};

/// Identifier of one dealt round.
///
/// Drawn at random when the round is dealt, so a token issued in one round
/// never matches a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({:016x})", self.0)
    }
}

/// Whether the round is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
}

/// Handle for a scheduled flip-back of a mismatched pair.
///
/// Issued by `flip_card` on a mismatch and redeemed by `resolve_unflip`
/// once the mismatch delay has passed. A token only applies to the round
/// and the pair it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnflipToken {
    /// Round the mismatch happened in.
    pub round: RoundId,

    /// The two mismatched cards, in flip order.
    pub cards: [CardId; 2],
}

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) round_id: RoundId,
    pub(crate) grid: GridSize,
    pub(crate) deck: Deck,

    /// Face-up cards whose pair-attempt has not resolved (0..=2).
    pub(crate) flipped: SmallVec<[CardId; 2]>,

    pub(crate) matched_pairs: u32,
    pub(crate) moves: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) score: u32,
    pub(crate) status: RoundStatus,
    pub(crate) paused: bool,
    pub(crate) pending_unflip: Option<UnflipToken>,
}

impl RoundState {
    pub(crate) fn new(round_id: RoundId, grid: GridSize, deck: Deck, score: u32) -> Self {
        Self {
            round_id,
            grid,
            deck,
            flipped: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            elapsed_seconds: 0,
            score,
            status: RoundStatus::InProgress,
            paused: false,
            pending_unflip: None,
        }
    }

    #[must_use]
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// Cards currently face up and awaiting resolution, in flip order.
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Pairs needed to win.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.deck.pair_count() as u32
    }

    /// Completed pair-attempts.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Token of the mismatch waiting to be flipped back, if any.
    #[must_use]
    pub fn pending_unflip(&self) -> Option<UnflipToken> {
        self.pending_unflip
    }
}
