//! Integration tests for orphan semantics.
//!
//! The schema deliberately declares no foreign keys and no cascades:
//! deleting a parent affects exactly one table, and children survive as
//! orphan rows that stay independently readable.

mod common;

// Import traits to bring methods into scope
use floorsketch::core::db::{ProjectRepository, RoomRepository, WallRepository};

use common::*;

#[tokio::test]
async fn test_delete_project_leaves_rooms_behind() -> anyhow::Result<()> {
    // 1. A project with two rooms
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Doomed");
    plan.insert_project(&project).await?;
    let kitchen = make_test_room(project.id, "Kitchen");
    let bedroom = make_test_room(project.id, "Bedroom");
    plan.insert_room(&kitchen).await?;
    plan.insert_room(&bedroom).await?;

    // 2. Delete the project
    plan.delete_project(project.id).await?;

    // 3. It is gone from the list and from detail reads
    assert!(plan.get_projects().await?.is_empty());
    assert!(plan.get_project_with_rooms(project.id).await?.is_none());

    // 4. The orphaned rooms are still independently readable
    let orphan = plan
        .get_room_by_id(kitchen.id)
        .await?
        .expect("orphaned room should still be readable");
    assert_eq!(orphan.project_id, project.id);
    assert_eq!(plan.get_rooms(project.id).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_delete_room_leaves_walls_behind() -> anyhow::Result<()> {
    // 1. A room with one wall
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;
    let room = make_test_room(project.id, "Kitchen");
    plan.insert_room(&room).await?;
    let wall = make_test_wall(room.id, (10.0, 10.0), (100.0, 10.0));
    plan.insert_wall(&wall).await?;

    // 2. Delete the room
    plan.delete_room(room.id).await?;

    // 3. The room is gone but its wall survives as an orphan
    assert!(plan.get_room_with_walls(room.id).await?.is_none());
    let orphan = plan
        .get_wall_by_id(wall.id)
        .await?
        .expect("orphaned wall should still be readable");
    assert_eq!(orphan.room_id, room.id);
    assert_eq!(plan.get_walls(room.id).await?.len(), 1);

    Ok(())
}
