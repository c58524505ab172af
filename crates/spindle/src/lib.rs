//! Core logic for the prayer wheel: participant entries, wheel geometry,
//! the spin selector, verse picking and daily-occurrence arithmetic.
//!
//! Everything here is pure with respect to time and randomness: callers
//! inject a [`rand::Rng`] and pass the current instant in, so the whole
//! crate is deterministic under test.

pub mod entry;
pub mod geometry;
pub mod schedule;
pub mod selector;
pub mod verses;

mod macros;

pub use entry::{ColorToken, Entry, EntryName, Verse};
pub use schedule::{Hour, delay_until, next_occurrence};
pub use selector::{FULL_SPINS, SPIN_DURATION, SpinError, SpinOutcome, spin};
pub use verses::pick_two_distinct;
