use std::path::PathBuf;

use iced::{Element, Task, Theme};

use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, landing, loading, open_plan},
};

pub struct App {
    state: AppState,
    screen: ScreenData,
}

impl App {
    pub fn new(plan_file: Option<PathBuf>) -> (Self, Task<Message>) {
        match plan_file {
            Some(path) => (
                Self {
                    state: AppState::default(),
                    screen: ScreenData::Loading(loading::LoadingScreen),
                },
                Task::perform(open_plan(path), Message::PlanOpened),
            ),
            None => (
                Self {
                    state: AppState::default(),
                    screen: ScreenData::Landing(landing::LandingScreen),
                },
                Task::none(),
            ),
        }
    }

    pub fn title(&self) -> String {
        match &self.state.session {
            Some(session) => {
                let plan = session.flow.db().plan_file();
                let name = plan
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| plan.display().to_string());
                format!("Floorsketch - {name}")
            }
            None => "Floorsketch".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen_message)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
