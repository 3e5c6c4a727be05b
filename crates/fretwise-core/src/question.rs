use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::answer;
use crate::error::{Error, Result};
use crate::fretboard::Fretboard;
use crate::pitch::PitchClass;
use crate::render;
use crate::tuning::{Tuning, STRING_COUNT};

/// Diagram layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tabular grid: frets as rows, strings as columns.
    Vertical,
    /// One line per string, frets as columns.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            _ => Err(Error::UnknownOrientation(s.to_string())),
        }
    }
}

/// How much of the board the diagram gives away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// All non-target notes visible.
    Show,
    /// All non-target fretted notes replaced by the mask token.
    Hide,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Show => f.write_str("show"),
            RenderMode::Hide => f.write_str("hide"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "show" => Ok(RenderMode::Show),
            "hide" => Ok(RenderMode::Hide),
            _ => Err(Error::UnknownRenderMode(s.to_string())),
        }
    }
}

/// One note-identification question with its rendered diagram.
///
/// Ephemeral: callers hold it in their session state and drop it when the
/// next question is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub max_fret: u8,
    pub orientation: Orientation,
    pub mode: RenderMode,
    /// Target string, 1..=6.
    pub string: u8,
    /// Target fret, 0..=max_fret.
    pub fret: u8,
    /// The canonical answer.
    pub note: PitchClass,
    /// Multi-line text diagram with the target cell marked.
    pub diagram: String,
}

impl Question {
    /// Generate a question with a uniformly random target cell.
    ///
    /// Vertical diagrams may target the open string (fret 0, shown as the
    /// placeholder). Horizontal diagrams never do: their open-string column
    /// always draws the circle glyph, so a fret-0 target would leave the
    /// diagram unmarked. Horizontal therefore needs `max_fret >= 1` and
    /// samples frets from 1..=`max_fret`.
    pub fn generate<R: Rng>(
        max_fret: u8,
        orientation: Orientation,
        mode: RenderMode,
        rng: &mut R,
    ) -> Result<Self> {
        let min_fret = match orientation {
            Orientation::Vertical => 0,
            Orientation::Horizontal => {
                if max_fret == 0 {
                    return Err(Error::InvalidMaxFret(max_fret));
                }
                1
            }
        };
        let string = rng.gen_range(1..=STRING_COUNT);
        let fret = rng.gen_range(min_fret..=max_fret);
        Self::with_target(max_fret, orientation, mode, string, fret)
    }

    /// Build a question for a fixed target cell. Used by tests and by
    /// callers that want a specific position drilled.
    ///
    /// Rejects a fret-0 target on a horizontal diagram for the same reason
    /// `generate` never samples one: the open column always draws the
    /// circle glyph, so the diagram would carry no placeholder.
    pub fn with_target(
        max_fret: u8,
        orientation: Orientation,
        mode: RenderMode,
        string: u8,
        fret: u8,
    ) -> Result<Self> {
        let board = Fretboard::new(Tuning::STANDARD, max_fret);
        let note = board.note_at(string, fret).ok_or(Error::TargetOutOfRange {
            string,
            fret,
            max_fret,
        })?;
        if orientation == Orientation::Horizontal && fret == 0 {
            return Err(Error::OpenStringTarget { string });
        }
        let diagram = render::render(&board, string, fret, orientation, mode);
        log::debug!("question target: string {string}, fret {fret}, note {note}");
        Ok(Self {
            max_fret,
            orientation,
            mode,
            string,
            fret,
            note,
            diagram,
        })
    }

    /// Check a free-text answer against the canonical note.
    #[must_use]
    pub fn check(&self, raw: &str) -> bool {
        answer::normalize(raw) == self.note.name()
    }
}
