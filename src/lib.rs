//! # memory-match
//!
//! A host-agnostic round engine for memory-matching (concentration) card games.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A round is a single `RoundState` value owned by the
//!    caller and passed to every engine operation. No globals.
//!
//! 2. **Presentation-Free**: The engine emits `RoundEvent`s and exposes a
//!    `RoundView` projection. Rendering, audio and timers belong to the host.
//!
//! 3. **Permissive Under Misuse**: Flipping a matched card, clicking while
//!    paused or ticking a finished round are silent no-ops. Only dealing a
//!    round can fail.
//!
//! ## Architecture
//!
//! - **Uniform Shuffle**: Decks are permuted with Fisher–Yates over a seeded
//!   ChaCha8 stream, so boards are fair and reproducible.
//!
//! - **Supersedable Unflips**: A mismatch hands out an `UnflipToken` tied to
//!   the round id. Dealing a new round makes every outstanding token inert.
//!
//! - **Persistent Data Structures**: The deck lives in an `im::Vector`, so
//!   round snapshots clone in O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, round state
//! - `cards`: Symbols, cards, themes, deck construction
//! - `rules`: The round engine, scoring and events
//! - `view`: Read-only projection for renderers
//! - `session`: Single-owner driver with a virtual clock

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, Error, GameRng, GridSize, Result, RoundConfig, RoundId, RoundState, RoundStatus,
    UnflipToken,
};

pub use crate::cards::{Card, CardId, Deck, FaceState, Symbol, Theme, ThemeRegistry};

pub use crate::rules::{FlipEvents, RoundEngine, RoundEvent, ScoreRules};

pub use crate::view::{CardView, RoundView};

pub use crate::session::{ClockReport, Session, SessionClock};
