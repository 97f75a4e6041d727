//! Static fretboard: string verticals, fret horizontals and the nut.

use super::geometry::{Geometry, Point};
use super::surface::Surface;
use crate::theme::Theme;

/// Draw `strings` vertical lines and `frets + 1` horizontal lines.
///
/// The nut is only emphasised when the diagram starts at the first fret;
/// otherwise the top border stays a plain line.
pub(crate) fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &Geometry,
    theme: &Theme,
    initial_fret: u32,
) {
    let grid = geometry.grid();
    let color = theme.colors.grid.as_str();
    let width = theme.sizes.stroke_width;

    if initial_fret == 1 {
        surface.rect(geometry.nut(), color);
    }

    for string in 0..geometry.strings() {
        let x = geometry.center_of_string(string);
        surface.line(Point::new(x, grid.y), Point::new(x, grid.bottom()), color, width);
    }

    for line in 0..=geometry.frets() {
        let y = geometry.fret_line(line);
        surface.line(Point::new(grid.x, y), Point::new(grid.right(), y), color, width);
    }
}
