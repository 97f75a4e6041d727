//! Text around the grid: chord name and first-fret indicator.

use super::constants::GUTTER_PADDING;
use super::geometry::{Geometry, Point};
use super::surface::{Anchor, Surface};
use crate::theme::Theme;

pub(super) fn draw_name<S: Surface + ?Sized>(
    surface: &mut S,
    name: &str,
    center: Point,
    theme: &Theme,
) {
    surface.text(center, name, &theme.typography.name, Anchor::Middle);
}

/// Fret number beside the first row; only drawn when the diagram does not
/// start at the nut.
pub(super) fn draw_first_fret_indicator<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &Geometry,
    theme: &Theme,
    initial_fret: u32,
) {
    if initial_fret <= 1 {
        return;
    }
    let x = geometry.grid().x - geometry.position_size() / 2.0 - GUTTER_PADDING;
    let at = Point::new(x, geometry.center_of_fret(1));
    surface.text(
        at,
        &initial_fret.to_string(),
        &theme.typography.first_fret_indicator,
        Anchor::End,
    );
}
