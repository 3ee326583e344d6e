//! Integration tests for Project CRUD operations.
//!
//! Tests cover:
//! - Creating projects and listing them newest-first
//! - Insert-or-replace semantics keyed by id
//! - Deleting projects
//! - Persistence through a close/reopen cycle

mod common;

// Import traits to bring methods into scope
use floorsketch::core::db::ProjectRepository;

use common::*;

#[tokio::test]
async fn test_create_and_list_project() -> anyhow::Result<()> {
    // 1. Create test plan and a project
    let (plan, _temp_dir) = create_test_plan().await;
    let project = Project::new("Home");
    plan.insert_project(&project).await?;

    // 2. The list contains exactly one project with that name
    let projects = plan.get_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Home");
    assert_eq!(projects[0].id, project.id);

    // 3. Creation time round-trips exactly (millisecond precision)
    assert_eq!(projects[0].created_at, project.created_at);

    // 4. Lookup by id agrees
    let by_id = plan.get_project_by_id(project.id).await?;
    assert_eq!(by_id, Some(project));

    Ok(())
}

#[tokio::test]
async fn test_projects_listed_newest_first() -> anyhow::Result<()> {
    // 1. Insert three projects with staggered creation times, oldest
    //    inserted in the middle
    let (plan, _temp_dir) = create_test_plan().await;
    plan.insert_project(&make_project_created_ago("Middle", 10))
        .await?;
    plan.insert_project(&make_project_created_ago("Oldest", 20))
        .await?;
    plan.insert_project(&make_project_created_ago("Newest", 1))
        .await?;

    // 2. The list is ordered by creation time descending
    let projects = plan.get_projects().await?;
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);

    Ok(())
}

#[tokio::test]
async fn test_insert_project_replaces_on_conflict() -> anyhow::Result<()> {
    // 1. Insert a project
    let (plan, _temp_dir) = create_test_plan().await;
    let mut project = Project::new("Draft");
    plan.insert_project(&project).await?;

    // 2. Re-insert under the same id with a new name
    project.name = "Final".to_string();
    plan.insert_project(&project).await?;

    // 3. One row, updated in place
    let projects = plan.get_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Final");
    assert_eq!(projects[0].id, project.id);

    Ok(())
}

#[tokio::test]
async fn test_delete_project() -> anyhow::Result<()> {
    // 1. Insert two projects
    let (plan, _temp_dir) = create_test_plan().await;
    let keep = Project::new("Keep");
    let gone = Project::new("Gone");
    plan.insert_project(&keep).await?;
    plan.insert_project(&gone).await?;

    // 2. Delete one
    plan.delete_project(gone.id).await?;

    // 3. Only the other remains
    let projects = plan.get_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, keep.id);
    assert_eq!(plan.get_project_by_id(gone.id).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_plan_persists_after_reopen() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let plan_path = temp_dir.path().join("persist_test.fsk");
    let project = Project::new("Persistent");

    // 1. Create a plan, insert a project, and drop the store
    {
        let plan = PlanDb::open(&plan_path).await?;
        plan.insert_project(&project).await?;
    }

    // 2. Reopen the same plan file
    let plan = PlanDb::open(&plan_path).await?;

    // 3. The project is still there, unchanged
    let projects = plan.get_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0], project);

    Ok(())
}
