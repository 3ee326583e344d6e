//! Integration tests for live read subscriptions.
//!
//! A subscription observes every committed write without an explicit
//! re-query, always sees the most recent projection, and delivers
//! nothing once dropped.

mod common;

// Import traits to bring methods into scope
use floorsketch::core::db::{ProjectRepository, RoomRepository, WallRepository};

use common::*;

#[tokio::test]
async fn test_watch_projects_observes_insert() -> anyhow::Result<()> {
    // 1. Subscribe to the (empty) project list
    let (plan, _temp_dir) = create_test_plan().await;
    let mut live = plan.watch_projects().await?;
    assert!(live.current().is_empty());

    // 2. A write lands without any re-query from the subscriber
    let project = Project::new("Home");
    plan.insert_project(&project).await?;

    // 3. The subscription delivers the fresh projection
    let projects = live.changed().await.expect("subscription should be live");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, project.id);

    Ok(())
}

#[tokio::test]
async fn test_watch_room_observes_wall_move() -> anyhow::Result<()> {
    // 1. A room with one wall, and a live room-details subscription
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;
    let room = make_test_room(project.id, "Kitchen");
    plan.insert_room(&room).await?;
    let wall = make_test_wall(room.id, (10.0, 10.0), (100.0, 10.0));
    plan.insert_wall(&wall).await?;

    let mut live = plan.watch_room_with_walls(room.id).await?;
    let initial = live.current().expect("room should exist");
    assert_eq!(initial.walls.len(), 1);

    // 2. Move the wall
    let update = WallUpdate {
        start: Some(Point::new(20.0, 20.0)),
        end: Some(Point::new(110.0, 20.0)),
    };
    plan.update_wall(wall.id, &update).await?;

    // 3. The subscription reflects the move, same wall id
    let details = live
        .changed()
        .await
        .expect("subscription should be live")
        .expect("room should still exist");
    assert_eq!(details.walls.len(), 1);
    assert_eq!(details.walls[0].id, wall.id);
    assert_eq!(details.walls[0].start, Point::new(20.0, 20.0));
    assert_eq!(details.walls[0].end, Point::new(110.0, 20.0));

    Ok(())
}

#[tokio::test]
async fn test_watch_sees_subject_deletion_as_none() -> anyhow::Result<()> {
    // 1. Subscribe to a project's details
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Short-lived");
    plan.insert_project(&project).await?;
    let mut live = plan.watch_project_with_rooms(project.id).await?;
    assert!(live.current().is_some());

    // 2. Delete it out from under the subscription
    plan.delete_project(project.id).await?;

    // 3. The projection goes to None
    let projection = live.changed().await.expect("subscription should be live");
    assert!(projection.is_none());

    Ok(())
}

#[tokio::test]
async fn test_dropped_subscription_does_not_block_writes() -> anyhow::Result<()> {
    // 1. Subscribe, then immediately tear down
    let (plan, _temp_dir) = create_test_plan().await;
    let live = plan.watch_projects().await?;
    drop(live);

    // 2. Writes keep working with no live subscribers
    plan.insert_project(&Project::new("After teardown")).await?;
    assert_eq!(plan.get_projects().await?.len(), 1);

    Ok(())
}
