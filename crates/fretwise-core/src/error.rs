use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown pitch class: {0}")]
    UnknownPitchClass(String),

    #[error("unknown orientation: {0} (expected 'vertical' or 'horizontal')")]
    UnknownOrientation(String),

    #[error("unknown render mode: {0} (expected 'show' or 'hide')")]
    UnknownRenderMode(String),

    #[error("horizontal diagrams need at least one fret (got max fret {0})")]
    InvalidMaxFret(u8),

    #[error("horizontal diagrams cannot target the open string (string {string}, fret 0)")]
    OpenStringTarget { string: u8 },

    #[error("target out of range: string {string}, fret {fret} with max fret {max_fret}")]
    TargetOutOfRange { string: u8, fret: u8, max_fret: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
