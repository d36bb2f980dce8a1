//! Lessons and the modules that group them.

use serde::{Deserialize, Serialize};

/// A single lesson inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit ordering inside its module (or inside the unassigned group).
    #[serde(default)]
    pub order: i64,
    /// Lessons without a module land in the residual "unassigned" group.
    #[serde(default)]
    pub module_id: Option<String>,
    /// Per-student completion flag, used for the progress percentage.
    #[serde(default)]
    pub completed: bool,
}

/// A grouping/display entity; carries no content of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: i64,
}
