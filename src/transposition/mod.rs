pub mod arithmetic;

pub use arithmetic::{add_interval, note_interval, subtract_interval};
