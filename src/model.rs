//! Data model for chord diagrams.
//!
//! These structures describe *what* a diagram shows: the instrument's grid
//! and the ordered fingering components of one chord. They carry no drawing
//! behavior; the renderer dispatches on them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;

// ═══════════════════════════════════════════════════════════════════════
// Instrument layout
// ═══════════════════════════════════════════════════════════════════════

/// Fret rows and string columns of a fretted instrument.
///
/// Both counts are at least 1; construction goes through [`Instrument::new`]
/// (or deserialization, which applies the same check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstrumentFields")]
pub struct Instrument {
    frets: u32,
    strings: usize,
}

#[derive(Deserialize)]
struct InstrumentFields {
    frets: u32,
    strings: usize,
}

impl TryFrom<InstrumentFields> for Instrument {
    type Error = DiagramError;

    fn try_from(fields: InstrumentFields) -> Result<Self, Self::Error> {
        Instrument::new(fields.frets, fields.strings)
    }
}

/// Largest fret count a diagram will lay out.
pub const MAX_FRETS: u32 = 64;
/// Largest string count a diagram will lay out.
pub const MAX_STRINGS: usize = 64;

impl Instrument {
    pub fn new(frets: u32, strings: usize) -> Result<Self, DiagramError> {
        if !(1..=MAX_FRETS).contains(&frets) || !(1..=MAX_STRINGS).contains(&strings) {
            return Err(DiagramError::InvalidLayout { frets, strings });
        }
        Ok(Self { frets, strings })
    }

    /// Six strings, five visible frets.
    pub fn guitar() -> Self {
        Self { frets: 5, strings: 6 }
    }

    /// Four strings, four visible frets.
    pub fn ukulele() -> Self {
        Self { frets: 4, strings: 4 }
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn strings(&self) -> usize {
        self.strings
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::guitar()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Components
// ═══════════════════════════════════════════════════════════════════════

/// Finger used to fret a note; rendered as a short label on the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Conventional fingering label: `T` for the thumb, 1–4 for the fingers.
    pub fn label(self) -> &'static str {
        match self {
            Finger::Thumb => "T",
            Finger::Index => "1",
            Finger::Middle => "2",
            Finger::Ring => "3",
            Finger::Pinky => "4",
        }
    }

    /// Parse a fingering label as written in MusicXML (`1`–`4`, `T`/`t`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "T" | "t" => Some(Finger::Thumb),
            "1" => Some(Finger::Index),
            "2" => Some(Finger::Middle),
            "3" => Some(Finger::Ring),
            "4" => Some(Finger::Pinky),
            _ => None,
        }
    }
}

/// Inclusive, ascending range of string columns covered by a barre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct StringSpan {
    first: usize,
    last: usize,
}

impl StringSpan {
    pub fn new(first: usize, last: usize) -> Result<Self, DiagramError> {
        if first > last {
            return Err(DiagramError::DescendingBarre { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// A span always covers at least one string.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, string: usize) -> bool {
        (self.first..=self.last).contains(&string)
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

impl TryFrom<(usize, usize)> for StringSpan {
    type Error = DiagramError;

    fn try_from((first, last): (usize, usize)) -> Result<Self, Self::Error> {
        StringSpan::new(first, last)
    }
}

impl TryFrom<RangeInclusive<usize>> for StringSpan {
    type Error = DiagramError;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        StringSpan::new(*range.start(), *range.end())
    }
}

impl From<StringSpan> for (usize, usize) {
    fn from(span: StringSpan) -> Self {
        (span.first, span.last)
    }
}

/// A single fretted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Absolute fret number (1-based)
    pub fret: u32,
    /// String column, 0 = leftmost
    pub string: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger: Option<Finger>,
}

impl Position {
    pub fn new(fret: u32, string: usize) -> Self {
        Self { fret, string, finger: None }
    }

    pub fn with_finger(mut self, finger: Finger) -> Self {
        self.finger = Some(finger);
        self
    }
}

/// One finger pressing a contiguous run of strings at one fret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barre {
    pub fret: u32,
    pub strings: StringSpan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger: Option<Finger>,
}

impl Barre {
    pub fn new(fret: u32, strings: StringSpan) -> Self {
        Self { fret, strings, finger: None }
    }

    pub fn with_finger(mut self, finger: Finger) -> Self {
        self.finger = Some(finger);
        self
    }
}

/// A string deliberately played without fretting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenString {
    pub string: usize,
}

impl OpenString {
    pub fn new(string: usize) -> Self {
        Self { string }
    }
}

/// Drawable element of a chord diagram.
///
/// Serialized with a `type` tag: `{"type": "position", "fret": 3, "string": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Position(Position),
    Barre(Barre),
    OpenString(OpenString),
}

impl Component {
    /// Absolute fret of a fretted component; `None` for open strings.
    pub fn fret(&self) -> Option<u32> {
        match self {
            Component::Position(p) => Some(p.fret),
            Component::Barre(b) => Some(b.fret),
            Component::OpenString(_) => None,
        }
    }

    /// String columns this component addresses.
    pub fn strings(&self) -> RangeInclusive<usize> {
        match self {
            Component::Position(p) => p.string..=p.string,
            Component::Barre(b) => b.strings.iter(),
            Component::OpenString(o) => o.string..=o.string,
        }
    }

    /// Check the component against an instrument's grid.
    pub fn validate(&self, instrument: &Instrument) -> Result<(), DiagramError> {
        self.check(instrument.strings())
    }

    pub(crate) fn check(&self, string_count: usize) -> Result<(), DiagramError> {
        let strings = self.strings();
        let (first, last) = (*strings.start(), *strings.end());
        if last >= string_count {
            return Err(DiagramError::StringOutOfRange {
                string: last,
                strings: string_count,
            });
        }
        if self.fret() == Some(0) {
            return Err(DiagramError::InvalidFret { string: first });
        }
        Ok(())
    }
}

impl From<Position> for Component {
    fn from(position: Position) -> Self {
        Component::Position(position)
    }
}

impl From<Barre> for Component {
    fn from(barre: Barre) -> Self {
        Component::Barre(barre)
    }
}

impl From<OpenString> for Component {
    fn from(open: OpenString) -> Self {
        Component::OpenString(open)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Chord
// ═══════════════════════════════════════════════════════════════════════

/// A named fingering: the components of one diagram, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Chord name shown above the diagram (e.g. "Bm")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absolute fret number of the first visible row
    #[serde(default = "default_initial_fret")]
    pub initial_fret: u32,
    #[serde(default)]
    pub components: Vec<Component>,
}

fn default_initial_fret() -> u32 {
    1
}

impl Default for Chord {
    fn default() -> Self {
        Self::new()
    }
}

impl Chord {
    pub fn new() -> Self {
        Self {
            name: None,
            initial_fret: default_initial_fret(),
            components: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn starting_at(mut self, initial_fret: u32) -> Self {
        self.initial_fret = initial_fret;
        self
    }

    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Check the initial fret and every component against the instrument.
    pub fn validate(&self, instrument: &Instrument) -> Result<(), DiagramError> {
        if self.initial_fret == 0 {
            return Err(DiagramError::InvalidInitialFret);
        }
        self.components
            .iter()
            .try_for_each(|c| c.validate(instrument))
    }
}
