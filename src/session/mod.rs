//! Sessions: driving rounds through time.
//!
//! The round engine has no notion of wall-clock time. A `Session` owns
//! the current round together with a `SessionClock` that issues the
//! periodic tick and fires delayed unflips, and it handles the page-level
//! controls (new game, difficulty, theme, pause).
//!
//! ## Flow
//!
//! 1. `Session::new` deals the first round
//! 2. The host forwards card clicks to `flip`
//! 3. The host calls `advance` with real elapsed time
//! 4. The host renders `view()` and reacts to returned `RoundEvent`s

pub mod clock;
pub mod driver;

pub use clock::{Due, SessionClock};
pub use driver::{ClockReport, Session};
