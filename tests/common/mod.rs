mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from floorsketch for tests
pub use floorsketch::core::db::{
    PlanDb, Point, Project, ProjectRepository, ProjectWithRooms, Room, RoomRepository,
    RoomWithWalls, Wall, WallRepository, WallUpdate,
};
