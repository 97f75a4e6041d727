//! Error types for diagram construction, rendering and import.

use thiserror::Error;

/// Everything that can go wrong before a diagram reaches the drawing surface.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// An instrument needs between 1 and [`MAX_FRETS`](crate::model::MAX_FRETS) fret rows
    /// and between 1 and [`MAX_STRINGS`](crate::model::MAX_STRINGS) string columns.
    #[error("invalid instrument layout: {frets} frets, {strings} strings")]
    InvalidLayout { frets: u32, strings: usize },

    /// Fret numbering starts at 1.
    #[error("initial fret must be at least 1")]
    InvalidInitialFret,

    /// Fretted components cannot sit on fret 0; use an open string instead.
    #[error("fret must be at least 1 (string {string})")]
    InvalidFret { string: usize },

    #[error("string index {string} is out of range for an instrument with {strings} strings")]
    StringOutOfRange { string: usize, strings: usize },

    #[error("barre must span strings in ascending order, got {first}..{last}")]
    DescendingBarre { first: usize, last: usize },

    #[error("canvas {width}x{height} is too small to hold the grid")]
    CanvasTooSmall { width: f64, height: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    #[error("invalid value {value:?} in <{element}>")]
    InvalidValue { element: &'static str, value: String },
}
