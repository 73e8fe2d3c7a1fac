//! Fretboard grid generation and pitch resolution
//!
//! The fretboard for a tuning is every (string, fret) pair with strings in
//! `1..=string_count` and frets in `0..=frets`, listed string-major. Searches
//! walk this grid in order, so results come back in the same stable order.

pub mod search;

pub use search::{all_intervals_from_root, interval_at, interval_search, is_reachable};

use crate::error::Result;
use crate::models::pitch::Pitch;
use crate::models::position::{Fret, Fretboard, FretboardPosition};
use crate::models::tuning::Tuning;

/// All positions of `tuning`, lowest string number and lowest fret first
pub fn fretboard_positions(tuning: &Tuning) -> Fretboard {
    let frets = tuning.frets();
    tuning
        .string_positions()
        .flat_map(|string| {
            (0..=frets).map(move |fret: Fret| FretboardPosition::new(string, fret))
        })
        .collect()
}

/// Pitch sounding at `position`
///
/// The fret is not checked against the tuning's fret count.
pub fn fretboard_pitch(tuning: &Tuning, position: FretboardPosition) -> Result<Pitch> {
    let open = tuning.string_pitch(position.string)?;
    Ok(open.add_semitones(position.fret as i32))
}
