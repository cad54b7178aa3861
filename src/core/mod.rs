//! Core engine types: RNG, configuration, errors and round state.
//!
//! These are the building blocks every other module works with. Nothing
//! here knows how cards are flipped; that lives in `crate::rules`.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{Difficulty, GridSize, RoundConfig};
pub use error::{Error, Result};
pub use rng::GameRng;
pub use state::{RoundId, RoundState, RoundStatus, UnflipToken};
