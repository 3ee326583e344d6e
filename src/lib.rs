pub mod core;

pub use crate::core::db::{PlanDb, Point, Project, Room, Wall};
pub use crate::core::flow::{Flow, UiState};

#[cfg(feature = "gui")]
pub mod gui;
