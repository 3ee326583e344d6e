use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, row, scrollable, text, text_input},
};
use uuid::Uuid;

use crate::core::db::ProjectWithRooms;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct ProjectDetailsScreen {
    details: ProjectWithRooms,
    room_name: String,
    room_width: String,
    room_length: String,
    room_height: String,
    // Abort handle for an in-flight simulated scan.
    scan: Option<iced::task::Handle>,
}

#[derive(Debug, Clone)]
pub enum ProjectDetailsMessage {
    NameChanged(String),
    WidthChanged(String),
    LengthChanged(String),
    HeightChanged(String),
    AddPressed,
    ScanPressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    AddRoom {
        project_id: Uuid,
        name: String,
        width: f32,
        length: f32,
        height: f32,
    },
    ScanRoom(Uuid),
    OpenRoom(Uuid),
    DeleteRoom {
        room_id: Uuid,
        project_id: Uuid,
    },
    DeleteProject(Uuid),
    Back,
}

impl ProjectDetailsScreen {
    pub fn new(details: ProjectWithRooms) -> Self {
        Self {
            details,
            room_name: String::new(),
            room_width: String::new(),
            room_length: String::new(),
            room_height: String::new(),
            scan: None,
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.details.project.id
    }

    pub fn set_details(&mut self, details: ProjectWithRooms) {
        self.details = details;
        // Whatever settled the store also settled (or obsoleted) the
        // scan indicator.
        self.scan = None;
    }

    pub fn begin_scan(&mut self, handle: iced::task::Handle) {
        self.scan = Some(handle);
    }

    pub fn cancel_scan(&mut self) {
        if let Some(handle) = self.scan.take() {
            handle.abort();
        }
    }

    fn form_complete(&self) -> bool {
        !self.room_name.trim().is_empty()
            && !self.room_width.trim().is_empty()
            && !self.room_length.trim().is_empty()
            && !self.room_height.trim().is_empty()
    }
}

impl Screen for ProjectDetailsScreen {
    type Message = ProjectDetailsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = column![
            row![
                text_input("Room name", &self.room_name).on_input(|v| {
                    ScreenMessage::ScreenMessage(ProjectDetailsMessage::NameChanged(v))
                }),
                text_input("Width (m)", &self.room_width).on_input(|v| {
                    ScreenMessage::ScreenMessage(ProjectDetailsMessage::WidthChanged(v))
                }),
                text_input("Length (m)", &self.room_length).on_input(|v| {
                    ScreenMessage::ScreenMessage(ProjectDetailsMessage::LengthChanged(v))
                }),
                text_input("Height (m)", &self.room_height).on_input(|v| {
                    ScreenMessage::ScreenMessage(ProjectDetailsMessage::HeightChanged(v))
                }),
            ]
            .spacing(10),
            row![
                button("Add Room").on_press_maybe(
                    self.form_complete()
                        .then(|| ScreenMessage::ScreenMessage(ProjectDetailsMessage::AddPressed)),
                ),
                button(if self.scan.is_some() {
                    "Scanning..."
                } else {
                    "Scan Room"
                })
                .on_press_maybe(
                    self.scan
                        .is_none()
                        .then(|| ScreenMessage::ScreenMessage(ProjectDetailsMessage::ScanPressed)),
                ),
            ]
            .spacing(10),
        ]
        .spacing(10);

        let mut rooms = column![].spacing(10);
        if self.details.rooms.is_empty() {
            rooms = rooms.push(text("No rooms yet. Add or scan one."));
        }
        for room in &self.details.rooms {
            let label = format!(
                "{} ({:.1} x {:.1} x {:.1} m)",
                room.name, room.width, room.length, room.height
            );
            rooms = rooms.push(
                row![
                    button(text(label))
                        .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenRoom(
                            room.id,
                        )))
                        .width(Length::Fill),
                    button("Delete").on_press(ScreenMessage::ParentMessage(
                        ParentMessage::DeleteRoom {
                            room_id: room.id,
                            project_id: self.details.project.id,
                        },
                    )),
                ]
                .spacing(10)
                .align_y(Center),
            );
        }

        column![
            row![
                text(format!("Project: {}", self.details.project.name)).size(24),
                button("Back").on_press(ScreenMessage::ParentMessage(ParentMessage::Back)),
            ]
            .spacing(20)
            .align_y(Center),
            form,
            scrollable(rooms).height(Length::Fill),
            button("Delete Project").on_press(ScreenMessage::ParentMessage(
                ParentMessage::DeleteProject(self.details.project.id),
            )),
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
            ProjectDetailsMessage::NameChanged(value) => {
                self.room_name = value;
                Task::none()
            }
            ProjectDetailsMessage::WidthChanged(value) => {
                self.room_width = value;
                Task::none()
            }
            ProjectDetailsMessage::LengthChanged(value) => {
                self.room_length = value;
                Task::none()
            }
            ProjectDetailsMessage::HeightChanged(value) => {
                self.room_height = value;
                Task::none()
            }
            ProjectDetailsMessage::AddPressed => {
                if !self.form_complete() {
                    return Task::none();
                }
                // Unparsable numbers fall back to 0.0; dimensions are
                // stored as given, however implausible.
                let parent = ParentMessage::AddRoom {
                    project_id: self.details.project.id,
                    name: self.room_name.trim().to_string(),
                    width: self.room_width.trim().parse().unwrap_or(0.0),
                    length: self.room_length.trim().parse().unwrap_or(0.0),
                    height: self.room_height.trim().parse().unwrap_or(0.0),
                };
                self.room_name.clear();
                self.room_width.clear();
                self.room_length.clear();
                self.room_height.clear();
                Task::done(ScreenMessage::ParentMessage(parent))
            }
            ProjectDetailsMessage::ScanPressed => Task::done(ScreenMessage::ParentMessage(
                ParentMessage::ScanRoom(self.details.project.id),
            )),
        }
    }
}
