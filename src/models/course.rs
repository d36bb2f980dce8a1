//! Course catalog entities and access records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a student's access request for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    Pending,
    Approved,
    Rejected,
}

impl AccessStatus {
    /// Human-readable label used by list badges and dialogs.
    pub fn label(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "pending",
            AccessStatus::Approved => "approved",
            AccessStatus::Rejected => "rejected",
        }
    }
}

/// Reference to the teacher owning a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRef {
    pub id: String,
    pub name: String,
}

/// A course as served by `GET /courses` and `GET /courses/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub teacher: Option<TeacherRef>,
    /// Whether the current user can open lessons in this course.
    #[serde(default)]
    pub has_access: bool,
    /// Status of the current user's access request, if any.
    #[serde(default)]
    pub student_course_status: Option<AccessStatus>,
    #[serde(default)]
    pub lesson_count: u32,
    #[serde(default)]
    pub module_count: u32,
    /// Lesson that is open to everyone as a preview.
    #[serde(default)]
    pub trial_lesson_id: Option<String>,
}

impl Course {
    /// Free courses skip the paid confirmation flow when requesting access.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Whether the request-access action should be offered at all.
    pub fn can_request_access(&self) -> bool {
        !self.has_access && self.student_course_status.is_none()
    }
}

/// A student's access record for one course.
///
/// Drives which admin actions (approve / reject / detach) are offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourse {
    pub course_id: String,
    pub status: AccessStatus,
    #[serde(default)]
    pub access_start: Option<NaiveDate>,
    #[serde(default)]
    pub access_end: Option<NaiveDate>,
}

/// A test attached to a course, from `GET /tests/courses/:id/tests`.
///
/// A 403 on that endpoint means "no tests available" and yields an
/// empty list rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub question_count: u32,
}
