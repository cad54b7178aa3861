//! Round rules: the flip state machine, scoring and events.
//!
//! `RoundEngine` defines:
//! - How a round is dealt
//! - How flips resolve into matches and mismatches
//! - How time and moves feed the score
//! - When a round is won
//!
//! It reports what happened through `RoundEvent`s and never touches
//! rendering or audio.

pub mod engine;
pub mod event;
pub mod score;

pub use engine::RoundEngine;
pub use event::{FlipEvents, RoundEvent};
pub use score::ScoreRules;
