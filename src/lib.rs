//! Fretboard Interval WASM Module
//!
//! Pitch and interval arithmetic over the 12-tone chromatic space, plus a search
//! that finds every fretboard position sitting a given interval above a root
//! implied by a reference position.

pub mod error;
pub mod models;
pub mod transposition;
pub mod fretboard;
pub mod api;

// Re-export commonly used types
pub use error::{FretboardError, Result};
pub use models::*;
pub use transposition::{add_interval, note_interval, subtract_interval};
pub use fretboard::{
    all_intervals_from_root, fretboard_pitch, fretboard_positions, interval_at, interval_search,
    is_reachable,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_error("failed to initialize logger");
    }

    log::info!("Fretboard WASM module initialized");
}
