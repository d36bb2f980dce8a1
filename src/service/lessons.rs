//! Lesson, module, and test queries for the course detail screen.

use super::DataService;
use crate::api::ApiError;
use crate::cache::QueryKey;
use crate::models::{CourseModule, CourseTest, Lesson};

impl DataService {
    pub async fn lessons(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        let key = QueryKey::new(["courses", course_id, "lessons"]);
        self.cached(key, || self.backend().fetch_lessons(course_id)).await
    }

    pub async fn modules(&self, course_id: &str) -> Result<Vec<CourseModule>, ApiError> {
        let key = QueryKey::new(["courses", course_id, "modules"]);
        self.cached(key, || self.backend().fetch_modules(course_id)).await
    }

    /// Tests attached to a course. The backend already maps 403 to an
    /// empty list; other failures bubble up and the detail screen renders
    /// its empty state.
    pub async fn tests(&self, course_id: &str) -> Result<Vec<CourseTest>, ApiError> {
        let key = QueryKey::new(["courses", course_id, "tests"]);
        self.cached(key, || self.backend().fetch_tests(course_id)).await
    }
}
