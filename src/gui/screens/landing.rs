use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, text},
};
use rfd::AsyncFileDialog;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct LandingScreen;

#[derive(Debug, Clone)]
pub enum LandingMessage {
    OpenPlan,
    CreatePlan,
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenedPlan(PathBuf),
}

impl Screen for LandingScreen {
    type Message = LandingMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("Floorsketch").size(32),
            text("Sketch floor plans room by room"),
            row![
                button("Open Plan")
                    .on_press(ScreenMessage::ScreenMessage(LandingMessage::OpenPlan)),
                button("Create Plan")
                    .on_press(ScreenMessage::ScreenMessage(LandingMessage::CreatePlan)),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingMessage::OpenPlan => Task::perform(
                AsyncFileDialog::new()
                    .add_filter("Floorsketch Plan", &["fsk"])
                    .pick_file(),
                |handle| match handle {
                    Some(data) => ScreenMessage::ParentMessage(ParentMessage::OpenedPlan(
                        data.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(LandingMessage::None),
                },
            ),
            LandingMessage::CreatePlan => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Create New Floorsketch Plan")
                    .add_filter("Floorsketch Plan", &["fsk"])
                    .save_file(),
                |handle| match handle {
                    Some(data) => ScreenMessage::ParentMessage(ParentMessage::OpenedPlan(
                        data.path().to_path_buf(),
                    )),
                    None => ScreenMessage::ScreenMessage(LandingMessage::None),
                },
            ),
            LandingMessage::None => Task::none(),
        }
    }
}
