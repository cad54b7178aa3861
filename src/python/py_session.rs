//! Session bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardId, FaceState, ThemeRegistry};
use crate::core::{Difficulty, RoundConfig, RoundStatus};
use crate::session::Session;

fn to_py_err(err: crate::core::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn face_name(face: FaceState) -> &'static str {
    match face {
        FaceState::FaceDown => "face_down",
        FaceState::FaceUp => "face_up",
        FaceState::Matched => "matched",
    }
}

/// Python wrapper for Session.
///
/// One memory game board with its own virtual clock.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Create a session and deal the first round.
    ///
    /// # Arguments
    /// - difficulty: "easy" (4x4) or "hard" (6x6)
    /// - theme: "animals", "food" or "emojis"
    /// - seed: RNG seed for deterministic decks
    /// - config_json: optional RoundConfig as JSON
    #[new]
    #[pyo3(signature = (difficulty = "easy", theme = "animals", seed = 42, config_json = None))]
    fn new(difficulty: &str, theme: &str, seed: u64, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => RoundConfig::from_json(json).map_err(to_py_err)?,
            None => RoundConfig::default(),
        };
        let inner = Session::new(
            config,
            ThemeRegistry::builtin(),
            seed,
            Difficulty::from_name(difficulty),
            theme,
        )
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Flip a card. Returns the names of the emitted events.
    fn flip(&mut self, card_id: u32) -> Vec<&'static str> {
        self.inner
            .flip(CardId::new(card_id))
            .iter()
            .map(|event| event.name())
            .collect()
    }

    /// Let `ms` milliseconds pass. Returns (ticks, unflips) applied.
    fn advance(&mut self, ms: u64) -> (u32, u32) {
        let report = self.inner.advance(Duration::from_millis(ms));
        (report.ticks, report.unflips)
    }

    /// Toggle pause. Returns the new paused flag.
    fn toggle_pause(&mut self) -> bool {
        self.inner.toggle_pause()
    }

    /// Deal a new round with the current selection.
    fn restart(&mut self) -> PyResult<()> {
        self.inner.restart().map_err(to_py_err)
    }

    /// Deal a new round with a new selection.
    fn start_round(&mut self, difficulty: &str, theme: &str) -> PyResult<()> {
        self.inner
            .start_round(Difficulty::from_name(difficulty), theme)
            .map_err(to_py_err)
    }

    /// Cards in board order as (id, symbol or None, face).
    fn cards(&self) -> Vec<(u32, Option<String>, &'static str)> {
        self.inner
            .view()
            .cards
            .into_iter()
            .map(|card| {
                (
                    card.id.0,
                    card.symbol.map(|s| s.to_string()),
                    face_name(card.face),
                )
            })
            .collect()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.state().moves()
    }

    #[getter]
    fn elapsed_seconds(&self) -> u32 {
        self.inner.state().elapsed_seconds()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.state().score()
    }

    #[getter]
    fn paused(&self) -> bool {
        self.inner.state().is_paused()
    }

    #[getter]
    fn won(&self) -> bool {
        self.inner.state().status() == RoundStatus::Won
    }

    #[getter]
    fn grid_size(&self) -> usize {
        self.inner.state().grid().side()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Session(grid={}, theme={}, moves={}, time={}s, score={})",
            state.grid(),
            self.inner.theme_name(),
            state.moves(),
            state.elapsed_seconds(),
            state.score()
        )
    }
}
