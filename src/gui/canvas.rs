use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Event, Length, Rectangle, Renderer, Theme, mouse};
use uuid::Uuid;

use crate::core::db::{Point, Wall};

/// A press/release pair travelling less than this is a selection click,
/// not a wall.
const CLICK_SLOP: f32 = 4.0;
/// Maximum point-to-segment distance for a click to pick a wall.
const PICK_RADIUS: f32 = 8.0;
const STROKE_WIDTH: f32 = 5.0;

/// Gesture outcomes published by the sketch canvas.
#[derive(Debug, Clone, Copy)]
pub enum SketchEvent {
    /// A click landed on (or cleared) a wall.
    Picked(Option<Uuid>),
    /// A drag over empty space defined a new wall.
    Drawn { start: Point, end: Point },
    /// A drag while a wall was selected redefined its endpoints.
    Moved { wall: Uuid, start: Point, end: Point },
}

/// The wall a click at `at` picks: the nearest one within reach.
pub fn wall_at(walls: &[Wall], at: Point) -> Option<Uuid> {
    walls
        .iter()
        .map(|wall| (wall.id, at.distance_to_segment(wall.start, wall.end)))
        .filter(|(_, distance)| *distance <= PICK_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[derive(Debug, Clone, Copy)]
pub struct Drag {
    from: Point,
    to: Point,
}

pub struct SketchCanvas<'a> {
    walls: &'a [Wall],
    selected: Option<Uuid>,
}

impl<'a> SketchCanvas<'a> {
    pub fn new(walls: &'a [Wall], selected: Option<Uuid>) -> Self {
        Self { walls, selected }
    }

    pub fn view(self) -> Element<'a, SketchEvent> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl canvas::Program<SketchEvent> for SketchCanvas<'_> {
    // In-flight drag, if any. Coordinates are widget-local, one unit
    // per pixel.
    type State = Option<Drag>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<SketchEvent>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let at = Point::new(position.x, position.y);
                *state = Some(Drag { from: at, to: at });
                Some(canvas::Action::request_redraw().and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let drag = state.as_mut()?;
                // A cursor outside the bounds keeps the last observed
                // position; release then commits there.
                let position = cursor.position_in(bounds)?;
                drag.to = Point::new(position.x, position.y);
                Some(canvas::Action::request_redraw())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let drag = state.take()?;
                let outcome = if drag.from.distance(drag.to) < CLICK_SLOP {
                    SketchEvent::Picked(wall_at(self.walls, drag.from))
                } else if let Some(wall) = self.selected {
                    SketchEvent::Moved {
                        wall,
                        start: drag.from,
                        end: drag.to,
                    }
                } else {
                    SketchEvent::Drawn {
                        start: drag.from,
                        end: drag.to,
                    }
                };
                Some(canvas::Action::publish(outcome).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.palette();

        for wall in self.walls {
            let color = if Some(wall.id) == self.selected {
                palette.danger
            } else {
                palette.text
            };
            let segment = Path::line(
                iced::Point::new(wall.start.x, wall.start.y),
                iced::Point::new(wall.end.x, wall.end.y),
            );
            frame.stroke(
                &segment,
                Stroke::default().with_color(color).with_width(STROKE_WIDTH),
            );
        }

        if let Some(drag) = state {
            let preview = Path::line(
                iced::Point::new(drag.from.x, drag.from.y),
                iced::Point::new(drag.to.x, drag.to.y),
            );
            frame.stroke(
                &preview,
                Stroke::default()
                    .with_color(Color::from_rgb(0.5, 0.5, 0.5))
                    .with_width(STROKE_WIDTH),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
