//! Round engine scenario tests.
//!
//! These tests play whole rounds through the public API the way a
//! presentation layer would: deal, flip, tick, pause, redeem unflips.

use memory_match::cards::{CardId, FaceState, Symbol, Theme, ThemeRegistry};
use memory_match::core::{Error, GameRng, GridSize, RoundState, RoundStatus};
use memory_match::rules::{RoundEngine, RoundEvent};
use memory_match::view::RoundView;

fn letters(count: usize) -> Theme {
    Theme::new("letters", ('a'..='z').take(count).map(String::from))
}

/// All card ids holding the given symbol.
fn pair_of(state: &RoundState, symbol: &Symbol) -> Vec<CardId> {
    state
        .deck()
        .iter()
        .filter(|c| &c.symbol == symbol)
        .map(|c| c.id)
        .collect()
}

/// Two face-down cards with different symbols.
fn mismatch(state: &RoundState) -> (CardId, CardId) {
    let first = state
        .deck()
        .iter()
        .find(|c| c.is_face_down())
        .expect("a face-down card");
    let second = state
        .deck()
        .iter()
        .find(|c| c.is_face_down() && c.symbol != first.symbol)
        .expect("a face-down card with another symbol");
    (first.id, second.id)
}

/// Symbols still face down, one per pair.
fn open_symbols(state: &RoundState) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = state
        .deck()
        .iter()
        .filter(|c| c.is_face_down())
        .map(|c| c.symbol.clone())
        .collect();
    symbols.sort();
    symbols.dedup();
    symbols
}

// =============================================================================
// Dealing
// =============================================================================

/// A 4x4 board from an 8+ symbol theme has 16 cards in 8 pairs.
#[test]
fn test_easy_board_has_eight_pairs() {
    let engine = RoundEngine::default();
    let state = engine
        .new_round(GridSize::EASY, &letters(10), &mut GameRng::new(42))
        .unwrap();

    assert_eq!(state.deck().len(), 16);
    assert_eq!(state.total_pairs(), 8);
    assert!(state.deck().is_well_formed());
    assert_eq!(open_symbols(&state).len(), 8);
}

/// Every built-in theme fills both board sizes.
#[test]
fn test_builtin_themes_deal_both_sizes() {
    let engine = RoundEngine::default();
    let registry = ThemeRegistry::builtin();
    let mut rng = GameRng::new(1);

    for theme in registry.iter() {
        for grid in [GridSize::EASY, GridSize::HARD] {
            let state = engine.new_round(grid, theme, &mut rng).unwrap();
            assert_eq!(state.deck().len(), grid.card_count());
            assert!(state.deck().is_well_formed());
        }
    }
}

/// A 3-symbol theme cannot fill a 4x4 board.
#[test]
fn test_three_symbols_insufficient_for_easy() {
    let engine = RoundEngine::default();
    let result = engine.new_round(GridSize::EASY, &letters(3), &mut GameRng::new(1));

    match result {
        Err(Error::InsufficientSymbols { required, available }) => {
            assert_eq!(required, 8);
            assert_eq!(available, 3);
        }
        other => panic!("expected InsufficientSymbols, got {:?}", other.map(|s| s.round_id())),
    }
}

// =============================================================================
// Pair-attempts
// =============================================================================

/// A mismatch counts one move, stays face up, then reverts when redeemed.
#[test]
fn test_mismatch_scenario() {
    let engine = RoundEngine::default();
    let mut state = engine
        .new_round(GridSize::EASY, &letters(8), &mut GameRng::new(7))
        .unwrap();

    for _ in 0..3 {
        engine.tick(&mut state);
    }

    let (a, b) = mismatch(&state);
    assert!(engine.flip_card(&mut state, a).is_empty());
    let events = engine.flip_card(&mut state, b);

    let token = match events.as_slice() {
        [RoundEvent::MismatchFound(token)] => *token,
        other => panic!("expected a mismatch, got {:?}", other),
    };
    assert_eq!(state.moves(), 1);
    assert_eq!(state.score(), 1000 - 5 - 2 * 3);
    assert_eq!(state.card(a).map(|c| c.face), Some(FaceState::FaceUp));
    assert_eq!(state.card(b).map(|c| c.face), Some(FaceState::FaceUp));

    assert!(engine.resolve_unflip(&mut state, token));

    assert_eq!(state.card(a).map(|c| c.face), Some(FaceState::FaceDown));
    assert_eq!(state.card(b).map(|c| c.face), Some(FaceState::FaceDown));
    assert!(state.flipped().is_empty());
    assert_eq!(state.moves(), 1);
}

/// Matching every pair wins exactly on the last pair.
#[test]
fn test_match_all_pairs_wins() {
    let engine = RoundEngine::default();
    let mut state = engine
        .new_round(GridSize::EASY, &letters(8), &mut GameRng::new(11))
        .unwrap();

    let symbols = open_symbols(&state);
    for (i, symbol) in symbols.iter().enumerate() {
        assert_eq!(state.status(), RoundStatus::InProgress);

        let pair = pair_of(&state, symbol);
        engine.flip_card(&mut state, pair[0]);
        let events = engine.flip_card(&mut state, pair[1]);

        assert_eq!(state.matched_pairs(), i as u32 + 1);
        if i + 1 < symbols.len() {
            assert_eq!(events.as_slice(), &[RoundEvent::MatchFound]);
        } else {
            assert_eq!(
                events.as_slice(),
                &[RoundEvent::MatchFound, RoundEvent::RoundWon { score: 960 }]
            );
        }
    }

    assert_eq!(state.status(), RoundStatus::Won);
    assert_eq!(state.matched_pairs(), 8);
    assert_eq!(state.deck().count_face(FaceState::Matched), 16);
}

/// Flipping a matched or face-up card changes nothing.
#[test]
fn test_blocked_flips_are_idempotent() {
    let engine = RoundEngine::default();
    let mut state = engine
        .new_round(GridSize::EASY, &letters(8), &mut GameRng::new(3))
        .unwrap();

    let symbol = state.card(CardId::new(0)).unwrap().symbol.clone();
    let pair = pair_of(&state, &symbol);
    engine.flip_card(&mut state, pair[0]);
    engine.flip_card(&mut state, pair[1]);

    let before = state.clone();
    assert!(engine.flip_card(&mut state, pair[0]).is_empty());
    assert!(engine.flip_card(&mut state, pair[1]).is_empty());
    assert_eq!(state, before);

    let (a, _) = mismatch(&state);
    engine.flip_card(&mut state, a);
    let moves = state.moves();
    let score = state.score();
    assert!(engine.flip_card(&mut state, a).is_empty());
    assert_eq!(state.moves(), moves);
    assert_eq!(state.score(), score);
}

/// Nothing but the pending unflip moves while paused.
#[test]
fn test_pause_gates_ticks_and_flips() {
    let engine = RoundEngine::default();
    let mut state = engine
        .new_round(GridSize::EASY, &letters(8), &mut GameRng::new(5))
        .unwrap();

    let (a, b) = mismatch(&state);
    engine.flip_card(&mut state, a);
    engine.flip_card(&mut state, b);
    let token = state.pending_unflip().unwrap();

    assert!(engine.toggle_pause(&mut state));
    let (moves, elapsed, score) = (state.moves(), state.elapsed_seconds(), state.score());

    for _ in 0..5 {
        assert!(!engine.tick(&mut state));
    }
    assert!(engine.resolve_unflip(&mut state, token));
    let (c, d) = mismatch(&state);
    assert!(engine.flip_card(&mut state, c).is_empty());
    assert!(engine.flip_card(&mut state, d).is_empty());

    assert_eq!(state.moves(), moves);
    assert_eq!(state.elapsed_seconds(), elapsed);
    assert_eq!(state.score(), score);
    assert!(state.card(a).unwrap().is_face_down());

    assert!(!engine.toggle_pause(&mut state));
    assert!(engine.tick(&mut state));
}

/// An unflip issued before a new deal does not touch the new round.
#[test]
fn test_new_round_supersedes_pending_unflip() {
    let engine = RoundEngine::default();
    let mut rng = GameRng::new(8);
    let mut state = engine.new_round(GridSize::EASY, &letters(8), &mut rng).unwrap();

    let (a, b) = mismatch(&state);
    engine.flip_card(&mut state, a);
    engine.flip_card(&mut state, b);
    let stale = state.pending_unflip().unwrap();

    state = engine.new_round(GridSize::EASY, &letters(8), &mut rng).unwrap();
    engine.flip_card(&mut state, a);
    let before = state.clone();

    assert!(!engine.resolve_unflip(&mut state, stale));
    assert_eq!(state, before);
}

// =============================================================================
// Projection
// =============================================================================

/// The view reveals symbols only for face-up and matched cards.
#[test]
fn test_view_tracks_round() {
    let engine = RoundEngine::default();
    let mut state = engine
        .new_round(GridSize::EASY, &letters(8), &mut GameRng::new(12))
        .unwrap();

    let symbol = state.card(CardId::new(5)).unwrap().symbol.clone();
    let pair = pair_of(&state, &symbol);
    engine.flip_card(&mut state, pair[0]);
    engine.flip_card(&mut state, pair[1]);
    engine.tick(&mut state);

    let view = RoundView::of(&state);

    assert_eq!(view.moves, 1);
    assert_eq!(view.elapsed_seconds, 1);
    assert_eq!(view.score, 995);
    assert_eq!(view.matched_pairs, 1);
    assert_eq!(view.status, RoundStatus::InProgress);
    assert!(!view.paused);
    for card in &view.cards {
        if pair.contains(&card.id) {
            assert_eq!(card.symbol.as_ref(), Some(&symbol));
            assert_eq!(card.face, FaceState::Matched);
        } else {
            assert!(card.symbol.is_none());
        }
    }
}
