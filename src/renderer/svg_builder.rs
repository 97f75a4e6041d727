//! SVG builder — accumulates SVG elements and produces the final string.

use super::geometry::{Point, Rect};
use super::surface::{Anchor, Surface};
use crate::theme::TextStyle;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Helvetica', 'Arial', sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgBuilder {
    fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="square"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape(color),
            width
        ));
    }

    fn rect(&mut self, rect: Rect, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(fill)
        ));
    }

    fn circle(&mut self, center: Point, radius: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            escape(fill)
        ));
    }

    fn ring(&mut self, center: Point, radius: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            center.x,
            center.y,
            radius,
            escape(color),
            width
        ));
    }

    fn capsule(&mut self, from: Point, to: Point, thickness: f64, fill: &str) {
        let half = thickness / 2.0;
        let left = from.x.min(to.x);
        let right = from.x.max(to.x);
        self.elements.push(format!(
            r#"<rect class="barre" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}"/>"#,
            left - half,
            from.y - half,
            right - left + thickness,
            thickness,
            half,
            escape(fill)
        ));
    }

    fn text(&mut self, at: Point, content: &str, style: &TextStyle, anchor: Anchor) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="central">{}</text>"#,
            at.x,
            at.y,
            style.font_size,
            escape(&style.font_weight),
            escape(&style.color),
            anchor.as_svg(),
            escape(content)
        ));
    }
}

/// Escape text for use in SVG content and double-quoted attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_closed_document() {
        let mut svg = SvgBuilder::new(100.0, 80.0);
        svg.circle(Point::new(10.0, 20.0), 5.0, "black");
        assert_eq!(svg.len(), 1);
        let out = svg.build();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"viewBox="0 0 100 80""#));
        assert!(out.contains(r#"<circle cx="10.0" cy="20.0" r="5.0" fill="black"/>"#));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn capsule_covers_both_end_markers() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.capsule(Point::new(20.0, 50.0), Point::new(70.0, 50.0), 10.0, "black");
        let out = svg.build();
        assert!(out.contains(r#"x="15.0" y="45.0" width="60.0" height="10.0" rx="5.0""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.text(Point::new(0.0, 0.0), "A<b>&", &TextStyle::default(), Anchor::Middle);
        let out = svg.build();
        assert!(out.contains("A&lt;b&gt;&amp;"));
        assert!(out.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.circle(Point::new(10.0, 10.0), 5.0, r#"red" onload="x"#);
        svg.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), "a&b", 1.0);
        let out = svg.build();
        assert!(out.contains(r#"fill="red&quot; onload=&quot;x""#));
        assert!(out.contains(r#"stroke="a&amp;b""#));
    }
}
