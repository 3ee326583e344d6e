use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Full-window error notice. Dismissing it always reloads the project
/// list; the context the failure happened in is not resumed.
#[derive(Debug, Clone)]
pub struct ErrorScreen {
    message: String,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Dismiss,
}

impl ErrorScreen {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Screen for ErrorScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("Something went wrong").size(24),
            text(self.message.as_str()),
            button("OK").on_press(ScreenMessage::ParentMessage(ParentMessage::Dismiss)),
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
        _message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        Task::none()
    }
}
