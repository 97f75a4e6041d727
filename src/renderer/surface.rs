//! Drawing surface abstraction.
//!
//! The renderer only ever talks to a [`Surface`]. [`SvgBuilder`](super::SvgBuilder)
//! turns the calls into an SVG document; [`RecordingSurface`] keeps them as
//! data so a host canvas can replay them.

use serde::Serialize;

use super::geometry::{Point, Rect};
use crate::theme::TextStyle;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Primitive drawing operations a diagram needs.
pub trait Surface {
    fn line(&mut self, from: Point, to: Point, color: &str, width: f64);

    fn rect(&mut self, rect: Rect, fill: &str);

    fn circle(&mut self, center: Point, radius: f64, fill: &str);

    /// Outlined circle; the stroke is centred on `radius`.
    fn ring(&mut self, center: Point, radius: f64, color: &str, width: f64);

    /// Horizontal bar with round ends running from `from` to `to`.
    fn capsule(&mut self, from: Point, to: Point, thickness: f64, fill: &str);

    /// Text vertically centred on `at`.
    fn text(&mut self, at: Point, content: &str, style: &TextStyle, anchor: Anchor);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Line {
        from: Point,
        to: Point,
        color: String,
        width: f64,
    },
    Rect {
        rect: Rect,
        fill: String,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
    Ring {
        center: Point,
        radius: f64,
        color: String,
        width: f64,
    },
    Capsule {
        from: Point,
        to: Point,
        thickness: f64,
        fill: String,
    },
    Text {
        at: Point,
        content: String,
        font_size: f64,
        color: String,
        anchor: Anchor,
    },
}

/// Surface that stores every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Serialize the recorded calls for a host that paints them itself.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.calls)
    }
}

impl Surface for RecordingSurface {
    fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }

    fn rect(&mut self, rect: Rect, fill: &str) {
        self.calls.push(DrawCall::Rect {
            rect,
            fill: fill.to_string(),
        });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: &str) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            fill: fill.to_string(),
        });
    }

    fn ring(&mut self, center: Point, radius: f64, color: &str, width: f64) {
        self.calls.push(DrawCall::Ring {
            center,
            radius,
            color: color.to_string(),
            width,
        });
    }

    fn capsule(&mut self, from: Point, to: Point, thickness: f64, fill: &str) {
        self.calls.push(DrawCall::Capsule {
            from,
            to,
            thickness,
            fill: fill.to_string(),
        });
    }

    fn text(&mut self, at: Point, content: &str, style: &TextStyle, anchor: Anchor) {
        self.calls.push(DrawCall::Text {
            at,
            content: content.to_string(),
            font_size: style.font_size,
            color: style.color.clone(),
            anchor,
        });
    }
}
