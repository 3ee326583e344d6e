use uuid::Uuid;

use crate::core::{
    db::{
        Live, PlanDb, Point, Project, ProjectRepository, ProjectWithRooms, Room, RoomRepository,
        RoomWithWalls, Wall, WallRepository, WallUpdate,
    },
    scanner::RoomScanner,
};

/// The single current UI state. Every user action settles into exactly
/// one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Loading,
    ProjectList(Vec<Project>),
    ProjectDetails(ProjectWithRooms),
    RoomDetails(RoomWithWalls),
    Error(String),
}

/// The live read subscription backing the current state.
#[derive(Debug)]
pub enum Watching {
    Projects(Live<Vec<Project>>),
    ProjectRooms(Live<Option<ProjectWithRooms>>),
    RoomWalls(Live<Option<RoomWithWalls>>),
}

impl Watching {
    /// The next state published by the store. `None` ends the
    /// subscription: the store side is gone, or the watched row was
    /// deleted underneath it.
    pub async fn next(&mut self) -> Option<UiState> {
        match self {
            Watching::Projects(live) => live.changed().await.map(UiState::ProjectList),
            Watching::ProjectRooms(live) => live.changed().await?.map(UiState::ProjectDetails),
            Watching::RoomWalls(live) => live.changed().await?.map(UiState::RoomDetails),
        }
    }
}

/// Outcome of a flow action: the state to display plus, on success, the
/// re-subscribed read feeding later store changes. Failures carry no
/// subscription.
#[derive(Debug)]
pub struct FlowUpdate {
    pub state: UiState,
    pub watch: Option<Watching>,
}

impl FlowUpdate {
    /// Settle an action's outcome into the next state. Any failure,
    /// store or otherwise, collapses into the one undifferentiated
    /// error state carrying the message chain.
    pub fn settled(result: anyhow::Result<FlowUpdate>) -> FlowUpdate {
        result.unwrap_or_else(|e| FlowUpdate {
            state: UiState::Error(format!("{e:#}")),
            watch: None,
        })
    }
}

/// The application state controller: one async method per user action.
/// Every mutation performs its write and then re-subscribes to the
/// relevant read, handing back the state built from the subscription's
/// first value. Overlapping actions are not sequenced; the
/// later-completing re-subscription wins.
#[derive(Debug, Clone)]
pub struct Flow {
    db: PlanDb,
    scanner: RoomScanner,
}

impl Flow {
    pub fn new(db: PlanDb) -> Self {
        Self {
            db,
            scanner: RoomScanner::new(),
        }
    }

    pub fn db(&self) -> &PlanDb {
        &self.db
    }

    pub async fn load_projects(&self) -> FlowUpdate {
        FlowUpdate::settled(self.resubscribe_projects().await)
    }

    pub async fn open_project(&self, project_id: Uuid) -> FlowUpdate {
        FlowUpdate::settled(self.resubscribe_project(project_id).await)
    }

    pub async fn open_room(&self, room_id: Uuid) -> FlowUpdate {
        FlowUpdate::settled(self.resubscribe_room(room_id).await)
    }

    pub async fn create_project(&self, name: impl Into<String>) -> FlowUpdate {
        let project = Project::new(name);
        FlowUpdate::settled(
            async {
                self.db.insert_project(&project).await?;
                tracing::debug!(project = %project.id, "project created");
                self.resubscribe_projects().await
            }
            .await,
        )
    }

    pub async fn delete_project(&self, project_id: Uuid) -> FlowUpdate {
        FlowUpdate::settled(
            async {
                self.db.delete_project(project_id).await?;
                self.resubscribe_projects().await
            }
            .await,
        )
    }

    pub async fn add_room(
        &self,
        project_id: Uuid,
        name: impl Into<String>,
        width: f32,
        length: f32,
        height: f32,
    ) -> FlowUpdate {
        let room = Room::new(project_id, name, width, length, height);
        FlowUpdate::settled(
            async {
                self.db.insert_room(&room).await?;
                self.resubscribe_project(project_id).await
            }
            .await,
        )
    }

    /// Runs the simulated scanner, then adds the scanned room to the
    /// project. Dropping the returned future before the scan resolves
    /// cancels it without touching the store.
    pub async fn scan_room(&self, project_id: Uuid) -> FlowUpdate {
        tracing::info!(project = %project_id, "room scan started");
        let scanned = self.scanner.scan().await;
        self.add_room(
            project_id,
            scanned.name,
            scanned.width,
            scanned.length,
            scanned.height,
        )
        .await
    }

    pub async fn delete_room(&self, room_id: Uuid, project_id: Uuid) -> FlowUpdate {
        FlowUpdate::settled(
            async {
                self.db.delete_room(room_id).await?;
                self.resubscribe_project(project_id).await
            }
            .await,
        )
    }

    pub async fn add_wall(&self, room_id: Uuid, start: Point, end: Point) -> FlowUpdate {
        let wall = Wall::new(room_id, start, end);
        FlowUpdate::settled(
            async {
                self.db.insert_wall(&wall).await?;
                self.resubscribe_room(room_id).await
            }
            .await,
        )
    }

    pub async fn move_wall(
        &self,
        room_id: Uuid,
        wall_id: Uuid,
        start: Point,
        end: Point,
    ) -> FlowUpdate {
        let update = WallUpdate {
            start: Some(start),
            end: Some(end),
        };
        FlowUpdate::settled(
            async {
                self.db.update_wall(wall_id, &update).await?;
                self.resubscribe_room(room_id).await
            }
            .await,
        )
    }

    pub async fn delete_wall(&self, room_id: Uuid, wall_id: Uuid) -> FlowUpdate {
        FlowUpdate::settled(
            async {
                self.db.delete_wall(wall_id).await?;
                self.resubscribe_room(room_id).await
            }
            .await,
        )
    }

    /// The only recovery from the error state: back to the project
    /// list, discarding whatever detail context failed.
    pub async fn dismiss_error(&self) -> FlowUpdate {
        self.load_projects().await
    }

    async fn resubscribe_projects(&self) -> anyhow::Result<FlowUpdate> {
        let live = self.db.watch_projects().await?;
        Ok(FlowUpdate {
            state: UiState::ProjectList(live.current()),
            watch: Some(Watching::Projects(live)),
        })
    }

    async fn resubscribe_project(&self, project_id: Uuid) -> anyhow::Result<FlowUpdate> {
        let live = self.db.watch_project_with_rooms(project_id).await?;
        let Some(details) = live.current() else {
            anyhow::bail!("Project {project_id} no longer exists");
        };
        Ok(FlowUpdate {
            state: UiState::ProjectDetails(details),
            watch: Some(Watching::ProjectRooms(live)),
        })
    }

    async fn resubscribe_room(&self, room_id: Uuid) -> anyhow::Result<FlowUpdate> {
        let live = self.db.watch_room_with_walls(room_id).await?;
        let Some(details) = live.current() else {
            anyhow::bail!("Room {room_id} no longer exists");
        };
        Ok(FlowUpdate {
            state: UiState::RoomDetails(details),
            watch: Some(Watching::RoomWalls(live)),
        })
    }
}
