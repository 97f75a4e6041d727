//! Geometry calculator — turns an instrument grid and a drawing area into
//! coordinates for every diagram element.
//!
//! Strings are columns (index 0 on the left), frets are rows numbered from 1
//! directly below the nut. Above the nut sits a band of string-usage
//! indicator slots, one per column.

use serde::Serialize;

use super::constants::INDICATOR_GAP;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in SVG coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Derived measurements for one render.
///
/// Frets and strings must both be at least 1; that is checked when the
/// [`Instrument`](crate::Instrument) is built, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    grid: Rect,
    position_size: f64,
    stroke_width: f64,
    frets: u32,
    strings: usize,
    string_space_width: f64,
    fret_space_height: f64,
}

impl Geometry {
    /// `grid` is the area spanned by the fret and string lines, already
    /// inset from the canvas edges.
    pub fn new(
        grid: Rect,
        position_size: f64,
        stroke_width: f64,
        frets: u32,
        strings: usize,
    ) -> Self {
        // A single string has no spacing; it sits in the middle of the grid.
        let string_space_width = if strings > 1 {
            grid.width / (strings - 1) as f64
        } else {
            0.0
        };
        let fret_space_height = grid.height / frets as f64;

        log::debug!(
            "geometry: {strings} strings x {frets} frets, column {:.2}, row {:.2}",
            string_space_width,
            fret_space_height
        );

        Self {
            grid,
            position_size,
            stroke_width,
            frets,
            strings,
            string_space_width,
            fret_space_height,
        }
    }

    /// Vertical distance from the top of the indicator band to the grid's top line.
    pub fn header_height(position_size: f64) -> f64 {
        position_size + INDICATOR_GAP + position_size / 2.0
    }

    pub fn grid(&self) -> Rect {
        self.grid
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn strings(&self) -> usize {
        self.strings
    }

    pub fn position_size(&self) -> f64 {
        self.position_size
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn string_space_width(&self) -> f64 {
        self.string_space_width
    }

    pub fn fret_space_height(&self) -> f64 {
        self.fret_space_height
    }

    /// X coordinate of string column `index`.
    pub fn center_of_string(&self, index: usize) -> f64 {
        if self.strings == 1 {
            return self.grid.x + self.grid.width / 2.0;
        }
        self.grid.x + index as f64 * self.string_space_width
    }

    /// Y coordinate of the middle of row `row` (1 = first row under the nut).
    ///
    /// Rows outside `1..=frets` give off-grid coordinates; nothing is clamped.
    pub fn center_of_fret(&self, row: i64) -> f64 {
        self.grid.y + (row as f64 - 0.5) * self.fret_space_height
    }

    /// Y coordinate of horizontal line `line` (0 = top border, `frets` = bottom).
    pub fn fret_line(&self, line: u32) -> f64 {
        self.grid.y + line as f64 * self.fret_space_height
    }

    /// The nut bar: directly above the grid, half a marker tall, overhanging
    /// the outer strings by one stroke width on each side.
    pub fn nut(&self) -> Rect {
        let height = self.position_size / 2.0;
        Rect::new(
            self.grid.x - self.stroke_width,
            self.grid.y - height,
            self.grid.width + 2.0 * self.stroke_width,
            height,
        )
    }

    pub fn center_of_string_indicator(&self, index: usize) -> Point {
        let y = self.grid.y - self.position_size / 2.0 - INDICATOR_GAP - self.position_size / 2.0;
        Point::new(self.center_of_string(index), y)
    }

    pub fn top_left_of_string_indicator(&self, index: usize) -> Point {
        let center = self.center_of_string_indicator(index);
        let radius = self.position_size / 2.0;
        Point::new(center.x - radius, center.y - radius)
    }

    pub fn bottom_right_of_string_indicator(&self, index: usize) -> Point {
        let center = self.center_of_string_indicator(index);
        let radius = self.position_size / 2.0;
        Point::new(center.x + radius, center.y + radius)
    }
}
