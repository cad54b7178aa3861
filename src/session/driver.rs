//! Session driver: one player, one board, one clock.

use std::time::Duration;

use crate::cards::{CardId, ThemeRegistry};
use crate::core::error::{Error, Result};
use crate::core::{Difficulty, GameRng, RoundConfig, RoundState};
use crate::rules::{FlipEvents, RoundEngine, RoundEvent};
use crate::view::RoundView;

use super::clock::{Due, SessionClock};

/// What happened during `Session::advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockReport {
    /// Ticks that advanced the round clock (paused or won ticks excluded).
    pub ticks: u32,
    /// Mismatched pairs flipped back.
    pub unflips: u32,
}

/// Single owner of the current round.
///
/// Mirrors a game page: a difficulty and theme selection, a "new game"
/// button, pause/resume, card clicks and wall-clock time. All mutation goes
/// through `&mut self`; wrap a session in a `Mutex` to share it between
/// threads.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::ThemeRegistry;
/// use memory_match::core::{Difficulty, RoundConfig};
/// use memory_match::session::Session;
///
/// let mut session = Session::new(
///     RoundConfig::default(),
///     ThemeRegistry::builtin(),
///     42,
///     Difficulty::Easy,
///     "animals",
/// )
/// .unwrap();
///
/// session.advance(Duration::from_secs(3));
/// assert_eq!(session.state().elapsed_seconds(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    engine: RoundEngine,
    config: RoundConfig,
    themes: ThemeRegistry,
    rng: GameRng,
    clock: SessionClock,
    difficulty: Difficulty,
    theme: String,
    state: RoundState,
}

impl Session {
    /// Create a session and deal its first round.
    pub fn new(
        config: RoundConfig,
        themes: ThemeRegistry,
        seed: u64,
        difficulty: Difficulty,
        theme: &str,
    ) -> Result<Self> {
        let engine = RoundEngine::from_config(&config);
        let mut rng = GameRng::new(seed);
        let state = Self::deal(&engine, &themes, &mut rng, difficulty, theme)?;
        let clock = SessionClock::new(config.tick_interval);

        Ok(Self {
            engine,
            config,
            themes,
            rng,
            clock,
            difficulty,
            theme: theme.to_string(),
            state,
        })
    }

    fn deal(
        engine: &RoundEngine,
        themes: &ThemeRegistry,
        rng: &mut GameRng,
        difficulty: Difficulty,
        theme: &str,
    ) -> Result<RoundState> {
        let theme = themes
            .get(theme)
            .ok_or_else(|| Error::UnknownTheme(theme.to_string()))?;
        let mut round_rng = rng.fork();
        engine.new_round(difficulty.grid_size(), theme, &mut round_rng)
    }

    /// Replace the current round with a fresh one.
    ///
    /// Pending unflips are cancelled and the tick phase restarts. On error
    /// the current round is kept.
    pub fn start_round(&mut self, difficulty: Difficulty, theme: &str) -> Result<()> {
        let state = Self::deal(&self.engine, &self.themes, &mut self.rng, difficulty, theme)?;

        self.state = state;
        self.difficulty = difficulty;
        self.theme = theme.to_string();
        self.clock.reset();
        Ok(())
    }

    /// Deal a new round with the current selection.
    pub fn restart(&mut self) -> Result<()> {
        let theme = self.theme.clone();
        self.start_round(self.difficulty, &theme)
    }

    /// Change difficulty and deal a new round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        let theme = self.theme.clone();
        self.start_round(difficulty, &theme)
    }

    /// Change theme and deal a new round.
    pub fn set_theme(&mut self, theme: &str) -> Result<()> {
        self.start_round(self.difficulty, theme)
    }

    /// Flip a card. A mismatch schedules its unflip after the configured
    /// delay.
    pub fn flip(&mut self, card: CardId) -> FlipEvents {
        let events = self.engine.flip_card(&mut self.state, card);

        for event in &events {
            if let RoundEvent::MismatchFound(token) = event {
                self.clock.schedule_unflip(*token, self.config.mismatch_delay);
            }
        }

        events
    }

    /// Toggle pause. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.engine.toggle_pause(&mut self.state)
    }

    /// Let time pass, applying ticks and due unflips in order.
    ///
    /// Unflips fire whether or not the round is paused.
    pub fn advance(&mut self, dt: Duration) -> ClockReport {
        let mut report = ClockReport::default();

        for due in self.clock.advance(dt) {
            match due {
                Due::Ticks(count) => {
                    let applied = self.engine.tick_many(&mut self.state, count);
                    let applied = u32::try_from(applied).unwrap_or(u32::MAX);
                    report.ticks = report.ticks.saturating_add(applied);
                }
                Due::Unflip(token) => {
                    if self.engine.resolve_unflip(&mut self.state, token) {
                        report.unflips += 1;
                    }
                }
            }
        }

        report
    }

    /// Project the current round for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::of(&self.state)
    }

    /// The current round.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Time since the session was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            RoundConfig::default(),
            ThemeRegistry::builtin(),
            42,
            Difficulty::Easy,
            "animals",
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_theme() {
        let result = Session::new(
            RoundConfig::default(),
            ThemeRegistry::builtin(),
            1,
            Difficulty::Easy,
            "plants",
        );
        assert!(matches!(result, Err(Error::UnknownTheme(name)) if name == "plants"));
    }

    #[test]
    fn test_failed_start_keeps_round() {
        let mut session = session();
        let round = session.state().round_id();

        assert!(session.set_theme("plants").is_err());

        assert_eq!(session.state().round_id(), round);
        assert_eq!(session.theme_name(), "animals");
    }

    #[test]
    fn test_set_difficulty_redeals() {
        let mut session = session();
        session.set_difficulty(Difficulty::Hard).unwrap();

        assert_eq!(session.state().deck().len(), 36);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut session = session();
        session.advance(Duration::from_secs(5));
        let old = session.state().round_id();

        session.restart().unwrap();

        assert_ne!(session.state().round_id(), old);
        assert_eq!(session.state().elapsed_seconds(), 0);
        assert_eq!(session.state().score(), 1000);
    }

    #[test]
    fn test_paused_ticks_dropped() {
        let mut session = session();
        session.toggle_pause();

        let report = session.advance(Duration::from_secs(4));

        assert_eq!(report, ClockReport { ticks: 0, unflips: 0 });
        assert_eq!(session.state().elapsed_seconds(), 0);
    }

    #[test]
    fn test_long_advance_applies_every_tick() {
        let mut session = session();

        let report = session.advance(Duration::from_secs(20_000));

        assert_eq!(report, ClockReport { ticks: 20_000, unflips: 0 });
        assert_eq!(session.state().elapsed_seconds(), 20_000);
        assert_eq!(session.state().score(), 1000);
    }

    #[test]
    fn test_advance_to_max_duration_saturates() {
        let mut session = session();
        session.advance(Duration::from_secs(1));

        let report = session.advance(Duration::MAX);

        assert_eq!(report.ticks, u32::MAX);
        assert_eq!(session.state().elapsed_seconds(), u32::MAX);
        assert_eq!(session.now(), Duration::MAX);

        let deck = session.state().deck();
        let first = deck.iter().next().map(|c| (c.id, c.symbol.clone())).unwrap();
        let other = deck.iter().find(|c| c.symbol != first.1).map(|c| c.id).unwrap();
        session.flip(first.0);
        session.flip(other);

        let report = session.advance(Duration::from_secs(1));
        assert_eq!(report, ClockReport { ticks: 0, unflips: 1 });
        assert!(session.state().flipped().is_empty());
    }
}
