//! Shared constants for the diagram renderer (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(crate) const DEFAULT_WIDTH: f64 = 300.0;
pub(crate) const DEFAULT_HEIGHT: f64 = 360.0;

// ── Bands above the grid ────────────────────────────────────────────
pub(super) const INDICATOR_GAP: f64 = 8.0; // between string-usage indicators and the nut
pub(super) const NAME_BAND_SCALE: f64 = 1.6; // name band height per unit of name font size

// ── Side gutters ────────────────────────────────────────────────────
pub(super) const GUTTER_SCALE: f64 = 1.8; // first-fret gutter width per unit of font size
pub(super) const GUTTER_PADDING: f64 = 4.0; // gap between fret label and marker edge

// ── Indicators ──────────────────────────────────────────────────────
pub(super) const CLOSED_INDICATOR_INSET: f64 = 0.15; // fraction of the slot left empty around the cross
