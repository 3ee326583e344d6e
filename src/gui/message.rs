use crate::core::flow::{Flow, FlowUpdate, UiState, Watching};
use crate::gui::screens::{
    ScreenMessage, error_notice::ErrorScreen, landing::LandingScreen, loading::LoadingScreen,
    project_details::ProjectDetailsScreen, project_list::ProjectListScreen,
    room_details::RoomDetailsScreen,
};

#[derive(Debug)]
pub enum Message {
    Landing(ScreenMessage<LandingScreen>),
    Loading(ScreenMessage<LoadingScreen>),
    ProjectList(ScreenMessage<ProjectListScreen>),
    ProjectDetails(ScreenMessage<ProjectDetailsScreen>),
    RoomDetails(ScreenMessage<RoomDetailsScreen>),
    ErrorNotice(ScreenMessage<ErrorScreen>),
    /// A plan file finished opening (or failed to).
    PlanOpened(anyhow::Result<(Flow, FlowUpdate)>),
    /// A flow action settled into its next state.
    FlowSettled(FlowUpdate),
    /// The current live subscription published a fresh state, or ended
    /// (`None`). Tagged with the generation it was armed under.
    StoreChanged {
        generation: u64,
        watching: Watching,
        state: Option<UiState>,
    },
}
