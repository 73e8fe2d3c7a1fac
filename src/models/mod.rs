//! Value types for the fretboard model
//!
//! Pitches, intervals, tunings and grid coordinates. All of them are immutable
//! values built fresh per query.

pub mod interval;
pub mod pitch;
pub mod position;
pub mod tuning;

// Re-export commonly used types
pub use interval::Interval;
pub use pitch::Pitch;
pub use position::{Fret, Fretboard, FretboardInterval, FretboardPosition, StringPosition};
pub use tuning::{Tuning, TuningPreset};
