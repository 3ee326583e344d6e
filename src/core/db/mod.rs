mod model;
mod project;
mod room;
mod state;
mod util;
mod wall;
mod watch;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use state::PlanState;
use uuid::Uuid;

pub use model::Point;
pub use project::{Project, ProjectRepository, ProjectWithRooms};
pub use room::{Room, RoomRepository, RoomWithWalls};
pub use util::{from_unix_millis, now_millis, to_unix_millis, truncate_to_millis};
pub use wall::{Wall, WallRepository, WallUpdate};
pub use watch::Live;

/// The persistence store. A plan file is a plain SQLite database;
/// opening one runs the embedded migrations. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PlanDb {
    state: Arc<PlanState>,
}

impl PlanDb {
    pub async fn open<P: AsRef<Path>>(plan_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(PlanState::new(plan_file).await?),
        })
    }

    pub fn plan_file(&self) -> &Path {
        self.state.plan_file()
    }
}

fn parse_id(raw: &str, what: &'static str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("invalid {what} id in store: {raw:?}"))
}

async fn fetch_projects(state: &PlanState) -> anyhow::Result<Vec<Project>> {
    sqlx::query_as::<_, (String, String, i64)>(
        "SELECT id, name, created_at FROM projects ORDER BY created_at DESC, id ASC",
    )
    .fetch_all(state.pool())
    .await?
    .into_iter()
    .map(|(id, name, created_at)| {
        Ok(Project {
            id: parse_id(&id, "project")?,
            name,
            created_at: util::from_unix_millis(created_at)?,
        })
    })
    .collect()
}

async fn fetch_rooms(state: &PlanState, project_id: Uuid) -> anyhow::Result<Vec<Room>> {
    sqlx::query_as::<_, (String, String, String, f64, f64, f64)>(
        "SELECT id, project_id, name, width, length, height FROM rooms
        WHERE project_id = $1
        ORDER BY name ASC, id ASC",
    )
    .bind(project_id.to_string())
    .fetch_all(state.pool())
    .await?
    .into_iter()
    .map(|(id, project_id, name, width, length, height)| {
        Ok(Room {
            id: parse_id(&id, "room")?,
            project_id: parse_id(&project_id, "project")?,
            name,
            width: width as f32,
            length: length as f32,
            height: height as f32,
        })
    })
    .collect()
}

async fn fetch_walls(state: &PlanState, room_id: Uuid) -> anyhow::Result<Vec<Wall>> {
    sqlx::query_as::<_, (String, String, f64, f64, f64, f64)>(
        "SELECT id, room_id, start_x, start_y, end_x, end_y FROM walls
        WHERE room_id = $1
        ORDER BY id ASC",
    )
    .bind(room_id.to_string())
    .fetch_all(state.pool())
    .await?
    .into_iter()
    .map(|(id, room_id, start_x, start_y, end_x, end_y)| {
        Ok(Wall {
            id: parse_id(&id, "wall")?,
            room_id: parse_id(&room_id, "room")?,
            start: Point::new(start_x as f32, start_y as f32),
            end: Point::new(end_x as f32, end_y as f32),
        })
    })
    .collect()
}

async fn fetch_project_with_rooms(
    state: &PlanState,
    id: Uuid,
) -> anyhow::Result<Option<ProjectWithRooms>> {
    let record = sqlx::query_as::<_, (String, String, i64)>(
        "SELECT id, name, created_at FROM projects WHERE id = $1",
    )
    .bind(id.to_string())
    .fetch_optional(state.pool())
    .await?;
    let Some((id, name, created_at)) = record else {
        return Ok(None);
    };
    let project = Project {
        id: parse_id(&id, "project")?,
        name,
        created_at: util::from_unix_millis(created_at)?,
    };
    let rooms = fetch_rooms(state, project.id).await?;
    Ok(Some(ProjectWithRooms { project, rooms }))
}

async fn fetch_room_with_walls(
    state: &PlanState,
    id: Uuid,
) -> anyhow::Result<Option<RoomWithWalls>> {
    let record = sqlx::query_as::<_, (String, String, String, f64, f64, f64)>(
        "SELECT id, project_id, name, width, length, height FROM rooms WHERE id = $1",
    )
    .bind(id.to_string())
    .fetch_optional(state.pool())
    .await?;
    let Some((id, project_id, name, width, length, height)) = record else {
        return Ok(None);
    };
    let room = Room {
        id: parse_id(&id, "room")?,
        project_id: parse_id(&project_id, "project")?,
        name,
        width: width as f32,
        length: length as f32,
        height: height as f32,
    };
    let walls = fetch_walls(state, room.id).await?;
    Ok(Some(RoomWithWalls { room, walls }))
}

impl ProjectRepository for PlanDb {
    async fn get_projects(&self) -> anyhow::Result<Vec<Project>> {
        fetch_projects(&self.state).await
    }

    async fn get_project_by_id(&self, id: Uuid) -> anyhow::Result<Option<Project>> {
        let record = sqlx::query_as::<_, (String, String, i64)>(
            "SELECT id, name, created_at FROM projects WHERE id = $1",
        )
        .bind(id.to_string())
        .fetch_optional(self.state.pool())
        .await?;
        record
            .map(|(id, name, created_at)| {
                Ok(Project {
                    id: parse_id(&id, "project")?,
                    name,
                    created_at: util::from_unix_millis(created_at)?,
                })
            })
            .transpose()
    }

    async fn insert_project(&self, project: &Project) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO projects (id, name, created_at) VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                created_at = excluded.created_at",
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(util::to_unix_millis(project.created_at))
        .execute(self.state.pool())
        .await?;
        self.state.notify_changed();
        Ok(())
    }

    async fn delete_project(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.to_string())
            .execute(self.state.pool())
            .await?;
        self.state.notify_changed();
        Ok(())
    }

    async fn get_project_with_rooms(&self, id: Uuid) -> anyhow::Result<Option<ProjectWithRooms>> {
        fetch_project_with_rooms(&self.state, id).await
    }

    async fn watch_projects(&self) -> anyhow::Result<Live<Vec<Project>>> {
        let state = self.state.clone();
        Live::spawn(self.state.subscribe(), move || {
            let state = state.clone();
            async move { fetch_projects(&state).await }
        })
        .await
    }

    async fn watch_project_with_rooms(
        &self,
        id: Uuid,
    ) -> anyhow::Result<Live<Option<ProjectWithRooms>>> {
        let state = self.state.clone();
        Live::spawn(self.state.subscribe(), move || {
            let state = state.clone();
            async move { fetch_project_with_rooms(&state, id).await }
        })
        .await
    }
}

impl RoomRepository for PlanDb {
    async fn get_rooms(&self, project_id: Uuid) -> anyhow::Result<Vec<Room>> {
        fetch_rooms(&self.state, project_id).await
    }

    async fn get_room_by_id(&self, id: Uuid) -> anyhow::Result<Option<Room>> {
        let record = sqlx::query_as::<_, (String, String, String, f64, f64, f64)>(
            "SELECT id, project_id, name, width, length, height FROM rooms WHERE id = $1",
        )
        .bind(id.to_string())
        .fetch_optional(self.state.pool())
        .await?;
        record
            .map(|(id, project_id, name, width, length, height)| {
                Ok(Room {
                    id: parse_id(&id, "room")?,
                    project_id: parse_id(&project_id, "project")?,
                    name,
                    width: width as f32,
                    length: length as f32,
                    height: height as f32,
                })
            })
            .transpose()
    }

    async fn insert_room(&self, room: &Room) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO rooms (id, project_id, name, width, length, height)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                project_id = excluded.project_id,
                name = excluded.name,
                width = excluded.width,
                length = excluded.length,
                height = excluded.height",
        )
        .bind(room.id.to_string())
        .bind(room.project_id.to_string())
        .bind(&room.name)
        .bind(f64::from(room.width))
        .bind(f64::from(room.length))
        .bind(f64::from(room.height))
        .execute(self.state.pool())
        .await?;
        self.state.notify_changed();
        Ok(())
    }

    async fn delete_room(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.to_string())
            .execute(self.state.pool())
            .await?;
        self.state.notify_changed();
        Ok(())
    }

    async fn get_room_with_walls(&self, id: Uuid) -> anyhow::Result<Option<RoomWithWalls>> {
        fetch_room_with_walls(&self.state, id).await
    }

    async fn watch_room_with_walls(&self, id: Uuid) -> anyhow::Result<Live<Option<RoomWithWalls>>> {
        let state = self.state.clone();
        Live::spawn(self.state.subscribe(), move || {
            let state = state.clone();
            async move { fetch_room_with_walls(&state, id).await }
        })
        .await
    }
}

impl WallRepository for PlanDb {
    async fn get_walls(&self, room_id: Uuid) -> anyhow::Result<Vec<Wall>> {
        fetch_walls(&self.state, room_id).await
    }

    async fn get_wall_by_id(&self, id: Uuid) -> anyhow::Result<Option<Wall>> {
        let record = sqlx::query_as::<_, (String, String, f64, f64, f64, f64)>(
            "SELECT id, room_id, start_x, start_y, end_x, end_y FROM walls WHERE id = $1",
        )
        .bind(id.to_string())
        .fetch_optional(self.state.pool())
        .await?;
        record
            .map(|(id, room_id, start_x, start_y, end_x, end_y)| {
                Ok(Wall {
                    id: parse_id(&id, "wall")?,
                    room_id: parse_id(&room_id, "room")?,
                    start: Point::new(start_x as f32, start_y as f32),
                    end: Point::new(end_x as f32, end_y as f32),
                })
            })
            .transpose()
    }

    async fn insert_wall(&self, wall: &Wall) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO walls (id, room_id, start_x, start_y, end_x, end_y)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                room_id = excluded.room_id,
                start_x = excluded.start_x,
                start_y = excluded.start_y,
                end_x = excluded.end_x,
                end_y = excluded.end_y",
        )
        .bind(wall.id.to_string())
        .bind(wall.room_id.to_string())
        .bind(f64::from(wall.start.x))
        .bind(f64::from(wall.start.y))
        .bind(f64::from(wall.end.x))
        .bind(f64::from(wall.end.y))
        .execute(self.state.pool())
        .await?;
        self.state.notify_changed();
        Ok(())
    }

    async fn update_wall(&self, id: Uuid, update: &WallUpdate) -> anyhow::Result<Wall> {
        let record = sqlx::query_as::<_, (String, String, f64, f64, f64, f64)>(
            "UPDATE walls SET
                start_x = COALESCE($1, start_x),
                start_y = COALESCE($2, start_y),
                end_x = COALESCE($3, end_x),
                end_y = COALESCE($4, end_y)
            WHERE id = $5
            RETURNING id, room_id, start_x, start_y, end_x, end_y",
        )
        .bind(update.start.map(|p| f64::from(p.x)))
        .bind(update.start.map(|p| f64::from(p.y)))
        .bind(update.end.map(|p| f64::from(p.x)))
        .bind(update.end.map(|p| f64::from(p.y)))
        .bind(id.to_string())
        .fetch_optional(self.state.pool())
        .await?;
        let Some((id, room_id, start_x, start_y, end_x, end_y)) = record else {
            anyhow::bail!("Wall with id {id} not found");
        };
        self.state.notify_changed();
        Ok(Wall {
            id: parse_id(&id, "wall")?,
            room_id: parse_id(&room_id, "room")?,
            start: Point::new(start_x as f32, start_y as f32),
            end: Point::new(end_x as f32, end_y as f32),
        })
    }

    async fn delete_wall(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM walls WHERE id = $1")
            .bind(id.to_string())
            .execute(self.state.pool())
            .await?;
        self.state.notify_changed();
        Ok(())
    }
}
