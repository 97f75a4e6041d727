//! Diagram renderer — converts a chord into draw calls on a [`Surface`].
//!
//! Layout, top to bottom: optional chord-name band, string-usage indicator
//! band, nut, fret grid. A gutter on each side leaves room for the
//! first-fret label and keeps the grid centred.

mod constants;
mod geometry;
mod grid;
mod labels;
mod session;
mod surface;
mod svg_builder;

use crate::error::DiagramError;
use crate::model::{Chord, Instrument};
use crate::theme::Theme;
use constants::*;

pub(crate) use constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub use geometry::{Geometry, Point, Rect};
pub use session::{GridSession, StringIndicator, StringUsage};
pub use surface::{Anchor, DrawCall, RecordingSurface, Surface};
pub use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

struct DiagramLayout {
    grid: Rect,
    name_center: Point,
}

fn compute_layout(
    width: f64,
    height: f64,
    theme: &Theme,
    has_name: bool,
) -> Result<DiagramLayout, DiagramError> {
    let inset = theme.sizes.position / 2.0;
    let gutter = theme.typography.first_fret_indicator.font_size * GUTTER_SCALE;
    let name_band = if has_name {
        theme.typography.name.font_size * NAME_BAND_SCALE
    } else {
        0.0
    };

    let left = gutter + inset;
    let top = name_band + Geometry::header_height(theme.sizes.position);
    let grid = Rect::new(left, top, width - 2.0 * left, height - top - inset);

    if !(grid.width > 0.0 && grid.height > 0.0) {
        return Err(DiagramError::CanvasTooSmall { width, height });
    }

    Ok(DiagramLayout {
        grid,
        name_center: Point::new(width / 2.0, name_band / 2.0),
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a chord diagram onto any surface.
///
/// Everything is validated before the first draw call: on error the surface
/// is left untouched. Returns the string usage the indicators were drawn from.
pub fn render_diagram<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    instrument: &Instrument,
    chord: &Chord,
    theme: &Theme,
) -> Result<StringUsage, DiagramError> {
    chord.validate(instrument)?;
    let layout = compute_layout(width, height, theme, chord.name.is_some())?;

    let geometry = Geometry::new(
        layout.grid,
        theme.sizes.position,
        theme.sizes.stroke_width,
        instrument.frets(),
        instrument.strings(),
    );

    surface.rect(Rect::new(0.0, 0.0, width, height), &theme.colors.background);

    if let Some(ref name) = chord.name {
        labels::draw_name(surface, name, layout.name_center, theme);
    }

    grid::draw_grid(surface, &geometry, theme, chord.initial_fret);
    labels::draw_first_fret_indicator(surface, &geometry, theme, chord.initial_fret);

    let mut session = GridSession::new(surface, &geometry, theme, chord.initial_fret);
    session.draw_all(&chord.components)?;
    Ok(session.commit())
}

/// Render a chord into a complete SVG string.
///
/// `size` is `(width, height)` in SVG user units; `None` uses 300×360.
pub fn render_chord_to_svg(
    chord: &Chord,
    instrument: &Instrument,
    theme: &Theme,
    size: Option<(f64, f64)>,
) -> Result<String, DiagramError> {
    let (width, height) = canvas_size(size);
    let mut svg = SvgBuilder::new(width, height);
    render_diagram(&mut svg, width, height, instrument, chord, theme)?;
    Ok(svg.build())
}

/// Render a chord into the ordered list of primitive draw calls.
pub fn record_chord(
    chord: &Chord,
    instrument: &Instrument,
    theme: &Theme,
    size: Option<(f64, f64)>,
) -> Result<Vec<DrawCall>, DiagramError> {
    let (width, height) = canvas_size(size);
    let mut surface = RecordingSurface::new();
    render_diagram(&mut surface, width, height, instrument, chord, theme)?;
    Ok(surface.into_calls())
}

fn canvas_size(size: Option<(f64, f64)>) -> (f64, f64) {
    match size {
        Some((w, h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
    }
}
