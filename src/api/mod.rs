//! Learnist REST API client.
//!
//! All interaction with the backend uses a uniform JSON envelope:
//! `{ data: T | null, message?: string }` on success, with errors
//! surfaced as non-2xx responses carrying `{ message: string }`.
//!
//! The [`LmsBackend`] trait is the seam between the data service and the
//! transport; [`rest::LmsApi`] is the reqwest implementation and tests
//! substitute scripted stubs.

pub mod error;
pub mod rest;

pub use error::ApiError;
pub use rest::LmsApi;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AccessStatus, Banner, Course, CourseModule, CourseTest, Curator, Difficulty, Flashcard,
    FlashcardDeck, Lesson, Story, Student, StudentCourse, User,
};

/// The uniform response envelope used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Query parameters for `GET /courses`.
///
/// Search, status, and sorting are resolved server-side; the category
/// filter is intentionally absent here because it is applied client-side
/// after the fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseListQuery {
    pub search: String,
    pub status: Option<String>,
    pub sort_by: String,
    pub sort_order: String,
}

impl CourseListQuery {
    /// Render as query pairs, omitting empty values.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sortBy", self.sort_by.clone()));
        }
        if !self.sort_order.is_empty() {
            pairs.push(("sortOrder", self.sort_order.clone()));
        }
        pairs
    }
}

/// Arguments for creating a student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentArgs {
    pub name: String,
    pub email: String,
}

/// Arguments for creating a curator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCuratorArgs {
    pub name: String,
    pub email: String,
}

/// Arguments for updating a curator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCuratorArgs {
    pub name: String,
}

/// Arguments for updating a student's course access record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentCourseArgs {
    pub status: AccessStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_end: Option<NaiveDate>,
}

/// Transport-agnostic interface to the Learnist API.
#[async_trait]
pub trait LmsBackend: Send + Sync {
    /// The authenticated user; drives role-gated screens.
    async fn fetch_current_user(&self) -> Result<User, ApiError>;

    // Catalog
    async fn fetch_courses(&self, query: &CourseListQuery) -> Result<Vec<Course>, ApiError>;
    async fn fetch_course(&self, course_id: &str) -> Result<Course, ApiError>;
    async fn fetch_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError>;
    async fn fetch_modules(&self, course_id: &str) -> Result<Vec<CourseModule>, ApiError>;
    /// A 403 means the caller cannot see tests for this course; that is
    /// "no tests available", not an error.
    async fn fetch_tests(&self, course_id: &str) -> Result<Vec<CourseTest>, ApiError>;
    async fn request_access(&self, course_id: &str) -> Result<(), ApiError>;
    async fn extend_access(&self, course_id: &str) -> Result<(), ApiError>;

    // Catalog surfaces
    async fn fetch_banners(&self, position: &str) -> Result<Vec<Banner>, ApiError>;
    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError>;
    async fn mark_story_viewed(&self, story_id: &str) -> Result<(), ApiError>;

    // Flashcards
    async fn fetch_deck(&self, deck_id: &str) -> Result<FlashcardDeck, ApiError>;
    async fn fetch_review_cards(&self, deck_id: &str) -> Result<Vec<Flashcard>, ApiError>;
    async fn update_card_progress(
        &self,
        deck_id: &str,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<(), ApiError>;

    // Students
    async fn fetch_students(&self) -> Result<Vec<Student>, ApiError>;
    async fn create_student(&self, args: &CreateStudentArgs) -> Result<Student, ApiError>;
    async fn fetch_student_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<StudentCourse, ApiError>;
    async fn update_student_course(
        &self,
        student_id: &str,
        course_id: &str,
        args: &UpdateStudentCourseArgs,
    ) -> Result<StudentCourse, ApiError>;
    async fn detach_student_course(&self, student_id: &str, course_id: &str) -> Result<(), ApiError>;
    async fn reset_student_password(&self, student_id: &str) -> Result<(), ApiError>;

    // Curators
    async fn fetch_curators(&self) -> Result<Vec<Curator>, ApiError>;
    async fn create_curator(&self, args: &CreateCuratorArgs) -> Result<Curator, ApiError>;
    async fn update_curator(&self, curator_id: &str, args: &UpdateCuratorArgs) -> Result<Curator, ApiError>;
    async fn delete_curator(&self, curator_id: &str) -> Result<(), ApiError>;
    async fn reset_curator_password(&self, curator_id: &str) -> Result<(), ApiError>;
}
