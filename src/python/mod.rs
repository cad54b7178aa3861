//! Python bindings for the memory-match round engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.Session(difficulty="easy", theme="food", seed=7)
//! game.flip(0)
//! game.flip(1)          # ["mismatch_found"] or ["match_found"]
//! game.advance(1000)    # one tick, flips a mismatch back
//! print(game.score, game.cards())
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// memory_match: a host-agnostic memory card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    Ok(())
}
