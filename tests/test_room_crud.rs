//! Integration tests for Room CRUD operations.
//!
//! Tests cover:
//! - Adding rooms and reading them back through project details
//! - Exact round-tripping of user-supplied dimensions, however odd
//! - Insert-or-replace semantics keyed by id
//! - Deleting rooms

mod common;

// Import traits to bring methods into scope
use floorsketch::core::db::{ProjectRepository, RoomRepository};

use common::*;

#[tokio::test]
async fn test_add_room_round_trips_dimensions() -> anyhow::Result<()> {
    // 1. Create a project with one room
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;
    let room = Room::new(project.id, "Kitchen", 3.0, 4.25, 2.5);
    plan.insert_room(&room).await?;

    // 2. Project details list the room with exactly those dimensions
    let details = plan
        .get_project_with_rooms(project.id)
        .await?
        .expect("project should exist");
    assert_eq!(details.project.id, project.id);
    assert_eq!(details.rooms.len(), 1);
    assert_eq!(details.rooms[0].name, "Kitchen");
    assert_eq!(details.rooms[0].width, 3.0);
    assert_eq!(details.rooms[0].length, 4.25);
    assert_eq!(details.rooms[0].height, 2.5);

    Ok(())
}

#[tokio::test]
async fn test_room_dimensions_are_unchecked() -> anyhow::Result<()> {
    // 1. Dimensions are user-supplied floats with no plausibility checks
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Weird");
    plan.insert_project(&project).await?;
    let room = Room::new(project.id, "Impossible", -2.5, 0.0, 10_000.0);
    plan.insert_room(&room).await?;

    // 2. Stored exactly as given
    let fetched = plan
        .get_room_by_id(room.id)
        .await?
        .expect("room should exist");
    assert_eq!(fetched.width, -2.5);
    assert_eq!(fetched.length, 0.0);
    assert_eq!(fetched.height, 10_000.0);

    Ok(())
}

#[tokio::test]
async fn test_insert_room_replaces_on_conflict() -> anyhow::Result<()> {
    // 1. Insert a room, then re-insert it renamed and resized
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;
    let mut room = make_test_room(project.id, "Kitchen");
    plan.insert_room(&room).await?;

    room.name = "Pantry".to_string();
    room.width = 1.5;
    plan.insert_room(&room).await?;

    // 2. Still one room, updated in place
    let rooms = plan.get_rooms(project.id).await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "Pantry");
    assert_eq!(rooms[0].width, 1.5);
    assert_eq!(rooms[0].id, room.id);

    Ok(())
}

#[tokio::test]
async fn test_delete_room() -> anyhow::Result<()> {
    // 1. A project with one room
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;
    let room = make_test_room(project.id, "Kitchen");
    plan.insert_room(&room).await?;

    // 2. Delete the room
    plan.delete_room(room.id).await?;

    // 3. Project details show zero rooms; lookup by id fails
    let details = plan
        .get_project_with_rooms(project.id)
        .await?
        .expect("project should exist");
    assert!(details.rooms.is_empty());
    assert_eq!(plan.get_room_by_id(room.id).await?, None);

    Ok(())
}
