pub mod error_notice;
pub mod landing;
pub mod loading;
pub mod project_details;
pub mod project_list;
pub mod room_details;

use std::convert::Infallible;
use std::path::PathBuf;

use iced::{Element, Task};

use crate::{
    core::{
        db::PlanDb,
        flow::{Flow, FlowUpdate, UiState, Watching},
    },
    gui::{AppState, Message, state::Session},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Landing(landing::LandingScreen),
    Loading(loading::LoadingScreen),
    ProjectList(project_list::ProjectListScreen),
    ProjectDetails(project_details::ProjectDetailsScreen),
    RoomDetails(room_details::RoomDetailsScreen),
    ErrorNotice(error_notice::ErrorScreen),
}

impl ScreenData {
    pub fn from_state(state: UiState) -> Self {
        match state {
            UiState::Loading => ScreenData::Loading(loading::LoadingScreen),
            UiState::ProjectList(projects) => {
                ScreenData::ProjectList(project_list::ProjectListScreen::new(projects))
            }
            UiState::ProjectDetails(details) => {
                ScreenData::ProjectDetails(project_details::ProjectDetailsScreen::new(details))
            }
            UiState::RoomDetails(details) => {
                ScreenData::RoomDetails(room_details::RoomDetailsScreen::new(details))
            }
            UiState::Error(message) => {
                ScreenData::ErrorNotice(error_notice::ErrorScreen::new(message))
            }
        }
    }

    /// Apply a published state, keeping transient inputs (text fields,
    /// selection) when the screen still shows the same subject.
    fn refresh(&mut self, state: UiState) {
        match (&mut *self, state) {
            (ScreenData::ProjectList(page), UiState::ProjectList(projects)) => {
                page.set_projects(projects);
            }
            (ScreenData::ProjectDetails(page), UiState::ProjectDetails(details))
                if page.project_id() == details.project.id =>
            {
                page.set_details(details);
            }
            (ScreenData::RoomDetails(page), UiState::RoomDetails(details))
                if page.room_id() == details.room.id =>
            {
                page.set_details(details);
            }
            (screen, state) => *screen = ScreenData::from_state(state),
        }
    }
}

pub(crate) async fn open_plan(path: PathBuf) -> anyhow::Result<(Flow, FlowUpdate)> {
    let db = PlanDb::open(&path).await?;
    tracing::info!(plan = %path.display(), "plan opened");
    let flow = Flow::new(db);
    let update = flow.load_projects().await;
    Ok((flow, update))
}

/// Run a flow action off the UI thread and settle its outcome back in.
fn flow_task<F, Fut>(state: &AppState, action: F) -> Task<ScreenMessage<ScreenData>>
where
    F: FnOnce(Flow) -> Fut,
    Fut: Future<Output = FlowUpdate> + Send + 'static,
{
    match &state.session {
        Some(session) => Task::perform(action(session.flow.clone()), Message::FlowSettled)
            .map(ScreenMessage::ScreenMessage),
        None => Task::none(),
    }
}

/// Arm a one-shot listener on the current subscription. It hands the
/// subscription back alongside whatever the store published so the
/// update loop can re-arm (or drop) it.
fn listen(watching: Watching, generation: u64) -> Task<ScreenMessage<ScreenData>> {
    Task::perform(
        async move {
            let mut watching = watching;
            let state = watching.next().await;
            (generation, watching, state)
        },
        |(generation, watching, state)| Message::StoreChanged {
            generation,
            watching,
            state,
        },
    )
    .map(ScreenMessage::ScreenMessage)
}

/// Swap the screen to a settled flow state and take over its
/// subscription, superseding any previous listener.
fn apply_update(
    screen: &mut ScreenData,
    state: &mut AppState,
    update: FlowUpdate,
) -> Task<ScreenMessage<ScreenData>> {
    screen.refresh(update.state);
    match (state.session.as_mut(), update.watch) {
        (Some(session), Some(watching)) => {
            session.watch_generation += 1;
            listen(watching, session.watch_generation)
        }
        _ => Task::none(),
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Landing(screen) => screen.view().map(Message::Landing),
            ScreenData::Loading(screen) => screen.view().map(Message::Loading),
            ScreenData::ProjectList(screen) => screen.view().map(Message::ProjectList),
            ScreenData::ProjectDetails(screen) => screen.view().map(Message::ProjectDetails),
            ScreenData::RoomDetails(screen) => screen.view().map(Message::RoomDetails),
            ScreenData::ErrorNotice(screen) => screen.view().map(Message::ErrorNotice),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::PlanOpened(result)) => match result {
                Ok((flow, update)) => {
                    state.session = Some(Session {
                        flow,
                        watch_generation: 0,
                    });
                    apply_update(screen, state, update)
                }
                Err(e) => {
                    *screen =
                        ScreenData::ErrorNotice(error_notice::ErrorScreen::new(format!("{e:#}")));
                    Task::none()
                }
            },
            (screen, Message::FlowSettled(update)) => apply_update(screen, state, update),
            (
                screen,
                Message::StoreChanged {
                    generation,
                    watching,
                    state: published,
                },
            ) => {
                let Some(session) = state.session.as_ref() else {
                    return Task::none();
                };
                // A superseded subscription's delivery: drop both.
                if generation != session.watch_generation {
                    return Task::none();
                }
                match published {
                    Some(published) => {
                        screen.refresh(published);
                        listen(watching, generation)
                    }
                    None => Task::none(),
                }
            }
            (
                screen,
                Message::Landing(ScreenMessage::ParentMessage(landing::ParentMessage::OpenedPlan(
                    path,
                ))),
            ) => {
                *screen = ScreenData::Loading(loading::LoadingScreen);
                Task::perform(open_plan(path), Message::PlanOpened)
                    .map(ScreenMessage::ScreenMessage)
            }
            (ScreenData::Landing(page), Message::Landing(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::Landing)
                    .map(ScreenMessage::ScreenMessage)
            }
            (_, Message::ProjectList(ScreenMessage::ParentMessage(msg))) => match msg {
                project_list::ParentMessage::CreateProject(name) => {
                    flow_task(state, move |flow| async move {
                        flow.create_project(name).await
                    })
                }
                project_list::ParentMessage::OpenProject(project_id) => {
                    flow_task(state, move |flow| async move {
                        flow.open_project(project_id).await
                    })
                }
                project_list::ParentMessage::DeleteProject(project_id) => {
                    flow_task(state, move |flow| async move {
                        flow.delete_project(project_id).await
                    })
                }
            },
            (
                ScreenData::ProjectList(page),
                Message::ProjectList(ScreenMessage::ScreenMessage(msg)),
            ) => page
                .update(msg, state)
                .map(Message::ProjectList)
                .map(ScreenMessage::ScreenMessage),
            (
                ScreenData::ProjectDetails(page),
                Message::ProjectDetails(ScreenMessage::ParentMessage(msg)),
            ) => match msg {
                project_details::ParentMessage::AddRoom {
                    project_id,
                    name,
                    width,
                    length,
                    height,
                } => flow_task(state, move |flow| async move {
                    flow.add_room(project_id, name, width, length, height).await
                }),
                project_details::ParentMessage::ScanRoom(project_id) => {
                    let Some(session) = &state.session else {
                        return Task::none();
                    };
                    let flow = session.flow.clone();
                    let (task, handle) = Task::perform(
                        async move { flow.scan_room(project_id).await },
                        Message::FlowSettled,
                    )
                    .abortable();
                    page.begin_scan(handle);
                    task.map(ScreenMessage::ScreenMessage)
                }
                project_details::ParentMessage::OpenRoom(room_id) => {
                    page.cancel_scan();
                    flow_task(state, move |flow| async move { flow.open_room(room_id).await })
                }
                project_details::ParentMessage::DeleteRoom {
                    room_id,
                    project_id,
                } => {
                    page.cancel_scan();
                    flow_task(state, move |flow| async move {
                        flow.delete_room(room_id, project_id).await
                    })
                }
                project_details::ParentMessage::DeleteProject(project_id) => {
                    page.cancel_scan();
                    flow_task(state, move |flow| async move {
                        flow.delete_project(project_id).await
                    })
                }
                project_details::ParentMessage::Back => {
                    page.cancel_scan();
                    flow_task(state, |flow| async move { flow.load_projects().await })
                }
            },
            (
                ScreenData::ProjectDetails(page),
                Message::ProjectDetails(ScreenMessage::ScreenMessage(msg)),
            ) => page
                .update(msg, state)
                .map(Message::ProjectDetails)
                .map(ScreenMessage::ScreenMessage),
            (_, Message::RoomDetails(ScreenMessage::ParentMessage(msg))) => match msg {
                room_details::ParentMessage::AddWall {
                    room_id,
                    start,
                    end,
                } => flow_task(state, move |flow| async move {
                    flow.add_wall(room_id, start, end).await
                }),
                room_details::ParentMessage::MoveWall {
                    room_id,
                    wall_id,
                    start,
                    end,
                } => flow_task(state, move |flow| async move {
                    flow.move_wall(room_id, wall_id, start, end).await
                }),
                room_details::ParentMessage::DeleteWall { room_id, wall_id } => {
                    flow_task(state, move |flow| async move {
                        flow.delete_wall(room_id, wall_id).await
                    })
                }
                room_details::ParentMessage::DeleteRoom {
                    room_id,
                    project_id,
                } => flow_task(state, move |flow| async move {
                    flow.delete_room(room_id, project_id).await
                }),
                room_details::ParentMessage::Back { project_id } => {
                    flow_task(state, move |flow| async move {
                        flow.open_project(project_id).await
                    })
                }
            },
            (
                ScreenData::RoomDetails(page),
                Message::RoomDetails(ScreenMessage::ScreenMessage(msg)),
            ) => page
                .update(msg, state)
                .map(Message::RoomDetails)
                .map(ScreenMessage::ScreenMessage),
            (
                screen,
                Message::ErrorNotice(ScreenMessage::ParentMessage(
                    error_notice::ParentMessage::Dismiss,
                )),
            ) => {
                if state.session.is_some() {
                    *screen = ScreenData::Loading(loading::LoadingScreen);
                    flow_task(state, |flow| async move { flow.dismiss_error().await })
                } else {
                    *screen = ScreenData::Landing(landing::LandingScreen);
                    Task::none()
                }
            }
            _ => Task::none(),
        }
    }
}
