/// Loading spinner
/// Draws a rotating arc over a faint track; the caller advances `rotation`
use iced::widget::canvas::{self, path, Path, Stroke};
use iced::{Color, Point, Radians, Rectangle};
use std::f32::consts::PI;

/// Share of the circle covered by the arc
const ARC_SWEEP: f32 = 1.5 * PI;
const STROKE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Start angle of the arc in radians
    pub rotation: f32,
    pub color: Color,
}

impl Spinner {
    pub fn new(rotation: f32) -> Self {
        Self {
            rotation,
            color: Color::from_rgb(0.23, 0.51, 0.96),
        }
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let radius = bounds.width.min(bounds.height) / 2.0 - STROKE_WIDTH;
        if radius <= 0.0 {
            return vec![frame.into_geometry()];
        }
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(Color { a: 0.15, ..self.color })
                .with_width(STROKE_WIDTH),
        );

        let mut builder = path::Builder::new();
        builder.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(self.rotation),
            end_angle: Radians(self.rotation + ARC_SWEEP),
        });
        frame.stroke(
            &builder.build(),
            Stroke::default()
                .with_color(self.color)
                .with_width(STROKE_WIDTH)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
