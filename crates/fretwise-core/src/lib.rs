//! # Fretwise Core
//!
//! The note engine behind the fretwise trainer. Given a fixed standard
//! tuning and the 12-tone chromatic scale, this crate computes the note at
//! any string/fret position, renders ASCII fretboard diagrams with one
//! target cell marked for the player to identify, and normalizes free-text
//! answers (enharmonic respelling) for comparison.
//!
//! Everything here is a pure transform of its arguments: the only state a
//! quiz needs (current question, attempt counter, running statistics) lives
//! in a [`Session`] value owned and threaded through by the caller.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod answer;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod question;
mod render;
pub mod session;
pub mod tuning;

pub use answer::normalize;
pub use error::{Error, Result};
pub use fretboard::Fretboard;
pub use pitch::PitchClass;
pub use question::{Orientation, Question, RenderMode};
pub use session::{Answer, Session, SessionStats};
pub use tuning::{Tuning, FRET_OPTIONS, STRING_COUNT};
