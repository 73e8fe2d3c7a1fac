//! Fretboard WASM API
//!
//! JavaScript-facing functions over the theory model and the fretboard search.
//! Values cross the boundary as plain JS data: pitches as names (`"F#"`),
//! intervals as semitone numbers, positions as `[string, fret]` arrays and
//! tunings as `{ strings: [...], frets }`.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error reporting shared by every export
//! - `theory`: pitch and interval arithmetic
//! - `fretboard`: tunings, grid and interval search

pub mod helpers;
pub mod types;
pub mod theory;
pub mod fretboard;

pub use theory::{add_interval, subtract_interval, note_interval, interval_name, parse_interval};
pub use fretboard::{
    tuning_preset, list_tuning_presets, string_pitch, fretboard_pitch, fretboard_positions,
    all_intervals_from_root, interval_search, is_reachable,
};
