//! Signals emitted by `flip_card`.
//!
//! The engine never plays sounds or shows banners. It reports what
//! happened and the presentation layer reacts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::UnflipToken;

/// Something the presentation layer may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The two face-up cards matched.
    MatchFound,

    /// The two face-up cards differ. Redeem the token with
    /// `RoundEngine::resolve_unflip` after the mismatch delay.
    MismatchFound(UnflipToken),

    /// The last pair was found.
    RoundWon { score: u32 },
}

impl RoundEvent {
    /// Short lowercase name, for logs and bindings.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            RoundEvent::MatchFound => "match_found",
            RoundEvent::MismatchFound(_) => "mismatch_found",
            RoundEvent::RoundWon { .. } => "round_won",
        }
    }
}

/// Events from a single flip. Empty when nothing needs a reaction.
pub type FlipEvents = SmallVec<[RoundEvent; 2]>;
