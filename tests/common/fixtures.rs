use floorsketch::core::db::{PlanDb, Point, Project, Room, Wall};
use uuid::Uuid;

/// Creates a PlanDb backed by a plan file in a fresh temp directory.
/// Returns both the store and the temp directory (which must be kept
/// alive for the duration of the test).
pub async fn create_test_plan() -> (PlanDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.fsk");
    let plan = PlanDb::open(&path)
        .await
        .expect("Failed to create test plan");
    (plan, dir)
}

/// A project whose creation time is shifted into the past, for
/// deterministic ordering tests.
pub fn make_project_created_ago(name: &str, minutes: i64) -> Project {
    let mut project = Project::new(name);
    project.created_at -= time::Duration::minutes(minutes);
    project
}

pub fn make_test_room(project_id: Uuid, name: &str) -> Room {
    Room::new(project_id, name, 3.0, 4.0, 2.5)
}

pub fn make_test_wall(room_id: Uuid, start: (f32, f32), end: (f32, f32)) -> Wall {
    Wall::new(
        room_id,
        Point::new(start.0, start.1),
        Point::new(end.0, end.1),
    )
}
