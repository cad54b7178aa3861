//! Card system: symbols, cards, themes and deck construction.
//!
//! ## Key Types
//!
//! - `Symbol`: Opaque face value shared by the two cards of a pair
//! - `Card`: A board position with its symbol and `FaceState`
//! - `Deck`: The shuffled board for one round
//! - `Theme`: Ordered set of distinct symbols
//! - `ThemeRegistry`: Theme lookup by name, with built-in themes

pub mod card;
pub mod deck;
pub mod registry;
pub mod theme;

pub use card::{Card, CardId, FaceState, Symbol};
pub use deck::Deck;
pub use registry::ThemeRegistry;
pub use theme::Theme;
