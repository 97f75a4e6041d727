//! Diagram drawing session — replays chord components onto a surface and
//! tracks which strings they address.
//!
//! A session is *accumulating* until [`GridSession::commit`] consumes it, so
//! drawing after the string-usage indicators are out is a compile error.

use super::constants::CLOSED_INDICATOR_INSET;
use super::geometry::{Geometry, Point};
use super::surface::{Anchor, Surface};
use crate::error::DiagramError;
use crate::model::{Barre, Component, Finger, OpenString, Position};
use crate::theme::Theme;

/// Indicator drawn above the nut for one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringIndicator {
    /// Ring: the string sounds (fretted or played open)
    Open,
    /// Cross: no component addressed the string
    Closed,
}

/// Final per-string usage, handed back by [`GridSession::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringUsage {
    used: Vec<bool>,
}

impl StringUsage {
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn is_used(&self, string: usize) -> bool {
        self.used.get(string).copied().unwrap_or(false)
    }

    pub fn indicator(&self, string: usize) -> StringIndicator {
        if self.is_used(string) {
            StringIndicator::Open
        } else {
            StringIndicator::Closed
        }
    }

    pub fn indicators(&self) -> Vec<StringIndicator> {
        (0..self.used.len()).map(|s| self.indicator(s)).collect()
    }

    pub fn open_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    pub fn closed_count(&self) -> usize {
        self.used.len() - self.open_count()
    }
}

/// Per-render coordinator between chord components and the drawing surface.
pub struct GridSession<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    geometry: &'a Geometry,
    theme: &'a Theme,
    string_usage: Vec<bool>,
    /// `initial_fret - 1`; subtracting it maps an absolute fret to a visible row
    fret_offset: i64,
}

impl<'a, S: Surface + ?Sized> GridSession<'a, S> {
    pub fn new(
        surface: &'a mut S,
        geometry: &'a Geometry,
        theme: &'a Theme,
        initial_fret: u32,
    ) -> Self {
        Self {
            surface,
            geometry,
            theme,
            string_usage: vec![false; geometry.strings()],
            fret_offset: i64::from(initial_fret) - 1,
        }
    }

    /// Draw one component and mark the strings it covers.
    ///
    /// Components are checked against the grid before anything is drawn.
    /// Frets outside the visible window are drawn off-grid, not clamped.
    pub fn draw(&mut self, component: &Component) -> Result<(), DiagramError> {
        component.check(self.geometry.strings())?;
        log::trace!("draw {component:?}");

        if let Some(fret) = component.fret() {
            let row = self.adjusted(fret);
            if row < 1 || row > i64::from(self.geometry.frets()) {
                log::warn!(
                    "fret {fret} is outside the visible window {}..={}",
                    self.fret_offset + 1,
                    self.fret_offset + i64::from(self.geometry.frets())
                );
            }
        }

        match component {
            Component::Position(position) => self.draw_position(position),
            Component::Barre(barre) => self.draw_barre(barre),
            Component::OpenString(open) => self.draw_open_string(open),
        }
        Ok(())
    }

    /// Draw every component in order, stopping at the first invalid one.
    pub fn draw_all<'c>(
        &mut self,
        components: impl IntoIterator<Item = &'c Component>,
    ) -> Result<(), DiagramError> {
        components.into_iter().try_for_each(|c| self.draw(c))
    }

    fn draw_position(&mut self, position: &Position) {
        let center = Point::new(
            self.geometry.center_of_string(position.string),
            self.geometry.center_of_fret(self.adjusted(position.fret)),
        );
        self.surface.circle(
            center,
            self.theme.sizes.position / 2.0,
            &self.theme.colors.position,
        );
        if let Some(finger) = position.finger {
            self.draw_finger(finger, center);
        }
        self.string_usage[position.string] = true;
    }

    fn draw_barre(&mut self, barre: &Barre) {
        let y = self.geometry.center_of_fret(self.adjusted(barre.fret));
        let first = Point::new(self.geometry.center_of_string(barre.strings.first()), y);
        let last = Point::new(self.geometry.center_of_string(barre.strings.last()), y);
        self.surface.capsule(
            first,
            last,
            self.theme.sizes.position,
            &self.theme.colors.position,
        );
        if let Some(finger) = barre.finger {
            self.draw_finger(finger, first);
        }
        for string in barre.strings.iter() {
            self.string_usage[string] = true;
        }
    }

    fn draw_open_string(&mut self, open: &OpenString) {
        self.string_usage[open.string] = true;
    }

    fn draw_finger(&mut self, finger: Finger, center: Point) {
        self.surface.text(
            center,
            finger.label(),
            &self.theme.typography.finger_indicator,
            Anchor::Middle,
        );
    }

    fn adjusted(&self, fret: u32) -> i64 {
        i64::from(fret) - self.fret_offset
    }

    /// Draw one string-usage indicator per string and end the session.
    pub fn commit(self) -> StringUsage {
        let color = self.theme.colors.string_usage_indicator.as_str();
        let width = self.theme.sizes.stroke_width;

        for (string, &used) in self.string_usage.iter().enumerate() {
            if used {
                let radius = (self.theme.sizes.position - width) / 2.0;
                self.surface.ring(
                    self.geometry.center_of_string_indicator(string),
                    radius,
                    color,
                    width,
                );
            } else {
                let top_left = self.geometry.top_left_of_string_indicator(string);
                let bottom_right = self.geometry.bottom_right_of_string_indicator(string);
                let inset = (bottom_right.x - top_left.x) * CLOSED_INDICATOR_INSET;
                let (left, right) = (top_left.x + inset, bottom_right.x - inset);
                let (top, bottom) = (top_left.y + inset, bottom_right.y - inset);
                self.surface
                    .line(Point::new(left, top), Point::new(right, bottom), color, width);
                self.surface
                    .line(Point::new(right, top), Point::new(left, bottom), color, width);
            }
        }

        let usage = StringUsage {
            used: self.string_usage,
        };
        log::debug!(
            "commit: {} open, {} closed",
            usage.open_count(),
            usage.closed_count()
        );
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StringSpan;
    use crate::renderer::geometry::Rect;
    use crate::renderer::surface::{DrawCall, RecordingSurface};

    fn geometry(frets: u32, strings: usize) -> Geometry {
        Geometry::new(Rect::new(20.0, 60.0, 200.0, 250.0), 20.0, 2.0, frets, strings)
    }

    #[test]
    fn open_string_draws_nothing_until_commit() {
        let geometry = geometry(5, 6);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut session = GridSession::new(&mut surface, &geometry, &theme, 1);
        session.draw(&OpenString::new(3).into()).unwrap();
        let usage = session.commit();
        assert!(usage.is_used(3));
        assert_eq!(usage.open_count(), 1);
        assert_eq!(usage.closed_count(), 5);
    }

    #[test]
    fn invalid_component_draws_nothing() {
        let geometry = geometry(5, 6);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut session = GridSession::new(&mut surface, &geometry, &theme, 1);
        let err = session.draw(&Position::new(2, 6).into()).unwrap_err();
        assert!(matches!(err, DiagramError::StringOutOfRange { string: 6, strings: 6 }));
        let err = session
            .draw(&Barre::new(2, StringSpan::new(3, 9).unwrap()).into())
            .unwrap_err();
        assert!(matches!(err, DiagramError::StringOutOfRange { string: 9, .. }));
        let usage = session.commit();
        assert_eq!(usage.open_count(), 0);
        // only the six closed crosses
        assert_eq!(surface.calls().len(), 12);
    }

    #[test]
    fn barre_finger_label_sits_on_first_string() {
        let geometry = geometry(5, 6);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut session = GridSession::new(&mut surface, &geometry, &theme, 1);
        let barre = Barre::new(2, StringSpan::new(2, 4).unwrap()).with_finger(Finger::Middle);
        session.draw(&barre.into()).unwrap();
        session.commit();

        let label = surface.calls().iter().find_map(|c| match c {
            DrawCall::Text { at, content, .. } => Some((*at, content.clone())),
            _ => None,
        });
        assert_eq!(label, Some((Point::new(100.0, 135.0), "2".to_string())));
    }

    #[test]
    fn off_window_fret_is_still_drawn() {
        let geometry = geometry(4, 4);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut session = GridSession::new(&mut surface, &geometry, &theme, 5);
        session.draw(&Position::new(3, 0).into()).unwrap();
        session.commit();
        let DrawCall::Circle { center, .. } = &surface.calls()[0] else {
            panic!("expected a position marker");
        };
        // row 3 - 4 = -1
        assert_eq!(center.y, geometry.center_of_fret(-1));
        assert!(center.y < geometry.grid().y);
    }

    #[test]
    fn usage_reports_indicators_in_string_order() {
        let geometry = geometry(4, 4);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut session = GridSession::new(&mut surface, &geometry, &theme, 1);
        let components: Vec<Component> =
            vec![Position::new(1, 1).into(), OpenString::new(3).into()];
        session.draw_all(&components).unwrap();
        let usage = session.commit();
        assert_eq!(
            usage.indicators(),
            vec![
                StringIndicator::Closed,
                StringIndicator::Open,
                StringIndicator::Closed,
                StringIndicator::Open,
            ]
        );
        assert!(!usage.is_used(17));
    }
}
