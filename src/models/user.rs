//! Users, roles, and the capability checks that gate screens.

use serde::{Deserialize, Serialize};

use super::course::StudentCourse;

/// Closed set of roles served by the API.
///
/// Screen visibility and admin actions dispatch over these variants via
/// the capability methods below, never over raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Curator,
    Admin,
}

impl Role {
    /// Whether the students admin screen is available.
    pub fn can_manage_students(&self) -> bool {
        matches!(self, Role::Admin | Role::Curator | Role::Teacher)
    }

    /// Whether the curators admin screen is available.
    pub fn can_manage_curators(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether course access requests can be approved or rejected.
    pub fn can_review_access(&self) -> bool {
        matches!(self, Role::Admin | Role::Curator | Role::Teacher)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Curator => "curator",
            Role::Admin => "admin",
        }
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// A student row on the admin screen, with their access records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub courses: Vec<StudentCourse>,
}

/// A curator row on the admin screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curator {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
