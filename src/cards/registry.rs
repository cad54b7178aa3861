//! Theme registry for lookup by name.
//!
//! The `ThemeRegistry` stores every theme a session can offer.
//! `ThemeRegistry::builtin()` ships the three stock emoji themes, each
//! large enough for the 6×6 board.

use rustc_hash::FxHashMap;

use super::theme::Theme;

/// Animal faces.
pub const ANIMALS: [&str; 18] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐼", "🐻", "🐯", "🦁", "🐮", "🐷", "🐸", "🐨", "🐔",
    "🐤", "🦉", "🦄",
];

/// Food.
pub const FOOD: [&str; 18] = [
    "🍔", "🍟", "🍕", "🌭", "🥪", "🌮", "🌯", "🥙", "🧆", "🍗", "🍖", "🍤", "🥓", "🍳", "🥞",
    "🧇", "🍝", "🍜",
];

/// Smileys and friends.
pub const EMOJIS: [&str; 18] = [
    "😀", "😅", "😂", "😍", "😎", "🤔", "😴", "😭", "😡", "🤯", "🤡", "🥳", "😇", "😷", "🤖",
    "👻", "😜", "😬",
];

/// Registry of themes.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Theme, ThemeRegistry};
///
/// let mut registry = ThemeRegistry::builtin();
/// registry.register(Theme::new("shapes", ["▲", "■", "●", "◆"]));
///
/// assert_eq!(registry.get("shapes").unwrap().len(), 4);
/// assert!(registry.get("animals").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `animals`, `food` and `emojis`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Theme::new("animals", ANIMALS));
        registry.register(Theme::new("food", FOOD));
        registry.register(Theme::new("emojis", EMOJIS));
        registry
    }

    /// Register a theme, replacing any theme with the same name.
    ///
    /// Returns the replaced theme, if any.
    pub fn register(&mut self, theme: Theme) -> Option<Theme> {
        self.themes.insert(theme.name().to_string(), theme)
    }

    /// Get a theme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Check if a theme name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Get the number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all themes.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}
