use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text},
};
use uuid::Uuid;

use crate::core::db::{Point, RoomWithWalls};
use crate::gui::{
    AppState,
    canvas::{SketchCanvas, SketchEvent},
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct RoomDetailsScreen {
    details: RoomWithWalls,
    selected_wall: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub enum RoomDetailsMessage {
    Sketch(SketchEvent),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    AddWall {
        room_id: Uuid,
        start: Point,
        end: Point,
    },
    MoveWall {
        room_id: Uuid,
        wall_id: Uuid,
        start: Point,
        end: Point,
    },
    DeleteWall {
        room_id: Uuid,
        wall_id: Uuid,
    },
    DeleteRoom {
        room_id: Uuid,
        project_id: Uuid,
    },
    Back {
        project_id: Uuid,
    },
}

impl RoomDetailsScreen {
    pub fn new(details: RoomWithWalls) -> Self {
        Self {
            details,
            selected_wall: None,
        }
    }

    pub fn room_id(&self) -> Uuid {
        self.details.room.id
    }

    pub fn set_details(&mut self, details: RoomWithWalls) {
        if let Some(selected) = self.selected_wall {
            if !details.walls.iter().any(|wall| wall.id == selected) {
                self.selected_wall = None;
            }
        }
        self.details = details;
    }
}

impl Screen for RoomDetailsScreen {
    type Message = RoomDetailsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let room = &self.details.room;
        let header = row![
            text(format!(
                "Room: {} ({:.1} x {:.1} x {:.1} m)",
                room.name, room.width, room.length, room.height
            ))
            .size(24),
            button("Back").on_press(ScreenMessage::ParentMessage(ParentMessage::Back {
                project_id: room.project_id,
            })),
        ]
        .spacing(20)
        .align_y(Center);

        let sketch = SketchCanvas::new(&self.details.walls, self.selected_wall)
            .view()
            .map(|event| ScreenMessage::ScreenMessage(RoomDetailsMessage::Sketch(event)));

        let actions = row![
            button("Delete Selected Wall").on_press_maybe(self.selected_wall.map(|wall_id| {
                ScreenMessage::ParentMessage(ParentMessage::DeleteWall {
                    room_id: self.details.room.id,
                    wall_id,
                })
            })),
            button("Delete Room").on_press(ScreenMessage::ParentMessage(
                ParentMessage::DeleteRoom {
                    room_id: self.details.room.id,
                    project_id: self.details.room.project_id,
                },
            )),
        ]
        .spacing(10);

        column![
            header,
            container(sketch).width(Length::Fill).height(Length::Fill),
            actions,
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            RoomDetailsMessage::Sketch(SketchEvent::Picked(wall)) => {
                self.selected_wall = wall;
                Task::none()
            }
            RoomDetailsMessage::Sketch(SketchEvent::Drawn { start, end }) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::AddWall {
                    room_id: self.details.room.id,
                    start,
                    end,
                }))
            }
            RoomDetailsMessage::Sketch(SketchEvent::Moved { wall, start, end }) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::MoveWall {
                    room_id: self.details.room.id,
                    wall_id: wall,
                    start,
                    end,
                }))
            }
        }
    }
}
