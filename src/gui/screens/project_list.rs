use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, row, scrollable, text, text_input},
};
use uuid::Uuid;

use crate::core::db::Project;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct ProjectListScreen {
    projects: Vec<Project>,
    new_project_name: String,
}

#[derive(Debug, Clone)]
pub enum ProjectListMessage {
    NameChanged(String),
    CreatePressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    CreateProject(String),
    OpenProject(Uuid),
    DeleteProject(Uuid),
}

impl ProjectListScreen {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            new_project_name: String::new(),
        }
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }
}

impl Screen for ProjectListScreen {
    type Message = ProjectListMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = row![
            text_input("Project name", &self.new_project_name).on_input(|value| {
                ScreenMessage::ScreenMessage(ProjectListMessage::NameChanged(value))
            }),
            button("Create Project").on_press_maybe(
                (!self.new_project_name.trim().is_empty())
                    .then(|| ScreenMessage::ScreenMessage(ProjectListMessage::CreatePressed)),
            ),
        ]
        .spacing(10);

        let mut rows = column![].spacing(10);
        if self.projects.is_empty() {
            rows = rows.push(text("No projects yet. Create one above."));
        }
        for project in &self.projects {
            let created = project
                .created_at
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_default();
            rows = rows.push(
                row![
                    button(text(project.name.as_str()))
                        .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenProject(
                            project.id,
                        )))
                        .width(Length::Fill),
                    text(created).size(12),
                    button("Delete").on_press(ScreenMessage::ParentMessage(
                        ParentMessage::DeleteProject(project.id),
                    )),
                ]
                .spacing(10)
                .align_y(Center),
            );
        }

        column![
            text("Projects").size(32),
            form,
            scrollable(rows).height(Length::Fill),
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
            ProjectListMessage::NameChanged(value) => {
                self.new_project_name = value;
                Task::none()
            }
            ProjectListMessage::CreatePressed => {
                let name = self.new_project_name.trim().to_string();
                if name.is_empty() {
                    return Task::none();
                }
                self.new_project_name.clear();
                Task::done(ScreenMessage::ParentMessage(ParentMessage::CreateProject(
                    name,
                )))
            }
        }
    }
}
