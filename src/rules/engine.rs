//! The round engine.
//!
//! Owns the rules of a round:
//! - Dealing a new round from a theme
//! - The flip/resolve state machine
//! - Move, time and score bookkeeping
//! - Win detection
//!
//! Every operation takes the `RoundState` explicitly. Misuse (flipping
//! while paused, flipping a face-up card, ticking a won round, ...) is a
//! silent no-op rather than an error.

use crate::cards::{CardId, Deck, FaceState, Theme};
use crate::core::error::Result;
use crate::core::{GameRng, GridSize, RoundConfig, RoundId, RoundState, RoundStatus, UnflipToken};

use super::event::{FlipEvents, RoundEvent};
use super::score::ScoreRules;

/// Stateless rules engine for memory rounds.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Theme;
/// use memory_match::core::{GameRng, GridSize};
/// use memory_match::rules::RoundEngine;
///
/// let engine = RoundEngine::default();
/// let theme = Theme::new("letters", ["a", "b", "c", "d", "e", "f", "g", "h"]);
/// let mut state = engine.new_round(GridSize::EASY, &theme, &mut GameRng::new(42)).unwrap();
///
/// assert_eq!(state.deck().len(), 16);
/// assert_eq!(state.score(), 1000);
///
/// engine.tick(&mut state);
/// assert_eq!(state.elapsed_seconds(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundEngine {
    rules: ScoreRules,
}

impl RoundEngine {
    /// Create an engine with the given score rules.
    #[must_use]
    pub fn new(rules: ScoreRules) -> Self {
        Self { rules }
    }

    /// Create an engine from a session configuration.
    #[must_use]
    pub fn from_config(config: &RoundConfig) -> Self {
        Self::new(config.score)
    }

    /// Score rules in use.
    #[must_use]
    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// Deal a fresh round.
    ///
    /// Fails with `Error::InsufficientSymbols` if the theme has fewer than
    /// `N²/2` symbols. The new round gets a fresh `RoundId`, so unflip
    /// tokens from any earlier round no longer apply.
    pub fn new_round(&self, grid: GridSize, theme: &Theme, rng: &mut GameRng) -> Result<RoundState> {
        let deck = Deck::deal(grid, theme, rng)?;
        let round_id = RoundId(rng.next_u64());

        log::debug!(
            "dealt {} with theme `{}` ({} pairs) as {}",
            grid,
            theme.name(),
            grid.pair_count(),
            round_id
        );

        Ok(RoundState::new(round_id, grid, deck, self.rules.score(0, 0)))
    }

    /// Flip a card face up.
    ///
    /// Ignored when the round is paused or won, when two cards are already
    /// waiting to resolve, or when the card is unknown or not face down.
    ///
    /// Flipping the second card resolves the pair-attempt immediately:
    /// `moves` and `score` update, and a match or mismatch is reported.
    /// A mismatched pair stays face up until its token is redeemed with
    /// `resolve_unflip`.
    pub fn flip_card(&self, state: &mut RoundState, card: CardId) -> FlipEvents {
        if let Some(reason) = Self::flip_blocker(state, card) {
            log::trace!("ignored flip of {}: {}", card, reason);
            return FlipEvents::new();
        }

        state.deck.set_face(card, FaceState::FaceUp);
        state.flipped.push(card);

        if state.flipped.len() < 2 {
            return FlipEvents::new();
        }

        self.resolve(state)
    }

    fn flip_blocker(state: &RoundState, card: CardId) -> Option<&'static str> {
        if state.paused {
            return Some("paused");
        }
        if state.status == RoundStatus::Won {
            return Some("round already won");
        }
        if state.flipped.len() >= 2 {
            return Some("two cards awaiting resolution");
        }
        match state.deck.get(card) {
            None => Some("no such card"),
            Some(c) if !c.is_face_down() => Some("card is not face down"),
            Some(_) => None,
        }
    }

    fn resolve(&self, state: &mut RoundState) -> FlipEvents {
        let mut events = FlipEvents::new();
        let (first, second) = (state.flipped[0], state.flipped[1]);

        state.moves += 1;
        state.score = self.rules.score(state.moves, state.elapsed_seconds);

        let same = match (state.deck.get(first), state.deck.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        if same {
            state.deck.set_face(first, FaceState::Matched);
            state.deck.set_face(second, FaceState::Matched);
            state.matched_pairs += 1;
            state.flipped.clear();
            events.push(RoundEvent::MatchFound);

            log::debug!(
                "{} and {} matched ({}/{} pairs, move {})",
                first,
                second,
                state.matched_pairs,
                state.total_pairs(),
                state.moves
            );

            if state.matched_pairs == state.total_pairs() {
                state.status = RoundStatus::Won;
                state.score = self.rules.score(state.moves, state.elapsed_seconds);
                events.push(RoundEvent::RoundWon { score: state.score });

                log::info!(
                    "{} won in {} moves and {}s with score {}",
                    state.round_id,
                    state.moves,
                    state.elapsed_seconds,
                    state.score
                );
            }
        } else {
            let token = UnflipToken {
                round: state.round_id,
                cards: [first, second],
            };
            state.pending_unflip = Some(token);
            events.push(RoundEvent::MismatchFound(token));

            log::debug!("{} and {} mismatched (move {})", first, second, state.moves);
        }

        events
    }

    /// Flip a mismatched pair back face down.
    ///
    /// Applies only if `token` is the round's pending unflip; a token from
    /// a superseded round or one already redeemed is a no-op. Not gated by
    /// pause. Returns whether the cards were flipped back.
    pub fn resolve_unflip(&self, state: &mut RoundState, token: UnflipToken) -> bool {
        if state.pending_unflip != Some(token) {
            log::trace!("dropped stale unflip of {:?} for {}", token.cards, token.round);
            return false;
        }

        for card in token.cards {
            state.deck.set_face(card, FaceState::FaceDown);
        }
        state.flipped.clear();
        state.pending_unflip = None;
        true
    }

    /// Advance the round clock by one second.
    ///
    /// No-op while paused or after the round is won; dropped ticks are not
    /// queued. Returns whether time advanced.
    pub fn tick(&self, state: &mut RoundState) -> bool {
        if state.paused || state.status != RoundStatus::InProgress {
            return false;
        }
        state.elapsed_seconds = state.elapsed_seconds.saturating_add(1);
        true
    }

    /// Apply `count` ticks at once. Returns how many advanced the clock:
    /// all of them, or none when the round is paused or won.
    ///
    /// The elapsed counter saturates at `u32::MAX`.
    pub fn tick_many(&self, state: &mut RoundState, count: u64) -> u64 {
        if count == 0 || state.paused || state.status != RoundStatus::InProgress {
            return 0;
        }
        let seconds = u32::try_from(count).unwrap_or(u32::MAX);
        state.elapsed_seconds = state.elapsed_seconds.saturating_add(seconds);
        count
    }

    /// Toggle the pause flag. Returns the new value.
    ///
    /// A pending unflip is not cancelled by pausing.
    pub fn toggle_pause(&self, state: &mut RoundState) -> bool {
        state.paused = !state.paused;
        log::debug!("{} {}", state.round_id, if state.paused { "paused" } else { "resumed" });
        state.paused
    }
}
