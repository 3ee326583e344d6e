use uuid::Uuid;

use crate::core::db::{wall::Wall, watch::Live};

/// Dimensions are user-supplied and deliberately unchecked: negative or
/// implausible values are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Room {
    pub fn new(
        project_id: Uuid,
        name: impl Into<String>,
        width: f32,
        length: f32,
        height: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name: name.into(),
            width,
            length,
            height,
        }
    }
}

/// A room together with the walls that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomWithWalls {
    pub room: Room,
    pub walls: Vec<Wall>,
}

pub trait RoomRepository {
    fn get_rooms(
        &self,
        project_id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Vec<Room>>>;
    fn get_room_by_id(&self, id: Uuid) -> impl Future<Output = anyhow::Result<Option<Room>>>;
    /// Insert-or-replace keyed by id.
    fn insert_room(&self, room: &Room) -> impl Future<Output = anyhow::Result<()>>;
    /// Deletes the room row only; its walls are left behind.
    fn delete_room(&self, id: Uuid) -> impl Future<Output = anyhow::Result<()>>;
    fn get_room_with_walls(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Option<RoomWithWalls>>>;
    fn watch_room_with_walls(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Live<Option<RoomWithWalls>>>>;
}
