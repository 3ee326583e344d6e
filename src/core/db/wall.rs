use uuid::Uuid;

use crate::core::db::model::Point;

/// A wall segment in canvas space. Zero-length and duplicate segments
/// are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub id: Uuid,
    pub room_id: Uuid,
    pub start: Point,
    pub end: Point,
}

impl Wall {
    pub fn new(room_id: Uuid, start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id,
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WallUpdate {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

pub trait WallRepository {
    fn get_walls(&self, room_id: Uuid) -> impl Future<Output = anyhow::Result<Vec<Wall>>>;
    fn get_wall_by_id(&self, id: Uuid) -> impl Future<Output = anyhow::Result<Option<Wall>>>;
    /// Insert-or-replace keyed by id.
    fn insert_wall(&self, wall: &Wall) -> impl Future<Output = anyhow::Result<()>>;
    /// Partial update; untouched fields keep their stored values and the
    /// id never changes.
    fn update_wall(
        &self,
        id: Uuid,
        update: &WallUpdate,
    ) -> impl Future<Output = anyhow::Result<Wall>>;
    fn delete_wall(&self, id: Uuid) -> impl Future<Output = anyhow::Result<()>>;
}
