use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::db::{room::Room, util, watch::Live};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub created_at: OffsetDateTime,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: util::now_millis(),
        }
    }
}

/// A project together with the rooms that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectWithRooms {
    pub project: Project,
    pub rooms: Vec<Room>,
}

pub trait ProjectRepository {
    /// All projects, newest first.
    fn get_projects(&self) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
    fn get_project_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Option<Project>>>;
    /// Insert-or-replace keyed by id.
    fn insert_project(&self, project: &Project) -> impl Future<Output = anyhow::Result<()>>;
    /// Deletes the project row only; its rooms are left behind.
    fn delete_project(&self, id: Uuid) -> impl Future<Output = anyhow::Result<()>>;
    fn get_project_with_rooms(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Option<ProjectWithRooms>>>;
    fn watch_projects(&self) -> impl Future<Output = anyhow::Result<Live<Vec<Project>>>>;
    fn watch_project_with_rooms(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Live<Option<ProjectWithRooms>>>>;
}
