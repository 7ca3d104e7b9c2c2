//! Circular progress bar primitive
//!
//! A skinnable ratio-driven progress ring using iced's Canvas.
//!
//! # Design
//!
//! Implements the `canvas::Program` trait with a generic Message type. The
//! bar holds no state of its own: it is rebuilt from the caller's
//! `total`/`current` pair every render pass and derives all geometry from
//! the bounds the container grants, so it follows resizes for free.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::path::Arc;
use iced::widget::canvas::{Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke, Text};
use iced::{Color, Element, Fill, Font, Pixels, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::theme;

/// Fixed alpha scale for the background track; deliberately not configurable.
const TRACK_OPACITY: f32 = 0.3;

/// Label font size as a fraction of the smaller canvas dimension.
const LABEL_SCALE: f32 = 0.2;

/// Circular progress bar configuration
///
/// The ratio `current / total` is taken as-is: values outside `[0, total]`
/// over- or under-sweep the ring, and a zero `total` yields a non-finite
/// fraction that degrades to an empty sweep and a `NaN%`/`inf%` label.
/// Keeping the inputs meaningful is the caller's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct CircularProgressBar {
    total: f32,
    current: f32,
    percent_color: Color,
    line_width: f32,
    background_color: Color,
    foreground_color: Color,
    percent_visible: bool,
}

impl CircularProgressBar {
    pub fn new(total: f32, current: f32) -> Self {
        Self {
            total,
            current,
            percent_color: theme::PERCENT_TEXT,
            line_width: 10.0,
            background_color: theme::RING_TRACK,
            foreground_color: theme::RING_SWEEP,
            percent_visible: true,
        }
    }

    /// Color of the centered percentage label.
    pub fn percent_color(mut self, color: Color) -> Self {
        self.percent_color = color;
        self
    }

    /// Stroke width shared by the track and the sweep.
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Color of the background track.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Color of the progress sweep.
    pub fn foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    /// Show or hide the percentage label.
    pub fn percent_visible(mut self, visible: bool) -> Self {
        self.percent_visible = visible;
        self
    }

    /// Completed fraction, unclamped.
    pub fn fraction(&self) -> f32 {
        self.current / self.total
    }

    /// Swept angle in radians, where a fraction of 1.0 is a full turn.
    pub fn sweep_angle(&self) -> f32 {
        self.fraction() * TAU
    }

    /// Label text: the fraction as a rounded integer percentage.
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction() * 100.0)
    }
}

impl<Message> Program<Message> for CircularProgressBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) / 2.0) - (self.line_width / 2.0) - 1.0;

        // Background track
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(self.line_width)
                .with_color(self.background_color.scale_alpha(TRACK_OPACITY)),
        );

        // Progress sweep from 12 o'clock. A non-finite sweep (zero total)
        // falls through and leaves the ring empty.
        let sweep = self.sweep_angle();
        if sweep > 0.0 && sweep.is_finite() {
            let start_angle = -FRAC_PI_2;

            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start_angle),
                    end_angle: Radians(start_angle + sweep),
                });
            });

            frame.stroke(
                &arc,
                Stroke {
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                        .with_width(self.line_width)
                        .with_color(self.foreground_color)
                },
            );
        }

        // Label size tracks the canvas, so it recomputes on every layout pass
        if self.percent_visible {
            frame.fill_text(Text {
                content: self.percent_label(),
                position: center,
                color: self.percent_color,
                size: Pixels(bounds.width.min(bounds.height) * LABEL_SCALE),
                font: Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                },
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Create a progress bar element that fills whatever region it is given.
pub fn circular_progress<'a, Message: 'a>(bar: CircularProgressBar) -> Element<'a, Message> {
    Canvas::new(bar).width(Fill).height(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_matches_ratio() {
        let bar = CircularProgressBar::new(100.0, 30.0);
        assert!((bar.fraction() - 0.3).abs() < f32::EPSILON);
        assert!((bar.sweep_angle() - 0.3 * TAU).abs() < 1e-5);
    }

    #[test]
    fn label_rounds_to_integer_percent() {
        assert_eq!(CircularProgressBar::new(3.0, 1.0).percent_label(), "33%");
        assert_eq!(CircularProgressBar::new(3.0, 2.0).percent_label(), "67%");
        assert_eq!(CircularProgressBar::new(100.0, 30.0).percent_label(), "30%");
    }

    #[test]
    fn empty_sweep_at_zero_current() {
        let bar = CircularProgressBar::new(100.0, 0.0);
        assert_eq!(bar.sweep_angle(), 0.0);
        assert_eq!(bar.percent_label(), "0%");
    }

    #[test]
    fn full_sweep_when_current_reaches_total() {
        let bar = CircularProgressBar::new(100.0, 100.0);
        assert!((bar.sweep_angle() - TAU).abs() < 1e-5);
        assert_eq!(bar.percent_label(), "100%");
    }

    #[test]
    fn zero_total_degrades_without_panicking() {
        let bar = CircularProgressBar::new(0.0, 5.0);
        assert!(!bar.fraction().is_finite());
        assert_eq!(bar.percent_label(), "inf%");

        let stalled = CircularProgressBar::new(0.0, 0.0);
        assert!(stalled.fraction().is_nan());
        assert_eq!(stalled.percent_label(), "NaN%");
    }

    #[test]
    fn out_of_range_current_is_not_clamped() {
        let over = CircularProgressBar::new(100.0, 150.0);
        assert!(over.fraction() > 1.0);

        let under = CircularProgressBar::new(100.0, -10.0);
        assert!(under.sweep_angle() < 0.0);
    }

    #[test]
    fn builder_chaining_is_order_independent() {
        let a = CircularProgressBar::new(10.0, 5.0)
            .line_width(6.0)
            .foreground_color(Color::WHITE);
        let b = CircularProgressBar::new(10.0, 5.0)
            .foreground_color(Color::WHITE)
            .line_width(6.0);

        assert_eq!(a.line_width, b.line_width);
        assert_eq!(a.foreground_color, b.foreground_color);
        assert_eq!(a.percent_visible, b.percent_visible);
    }

    #[test]
    fn label_is_visible_by_default() {
        let bar = CircularProgressBar::new(10.0, 5.0);
        assert!(bar.percent_visible);
        assert!(!bar.percent_visible(false).percent_visible);
    }
}
