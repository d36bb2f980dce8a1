//! Course catalog queries and access mutations.

use super::DataService;
use crate::api::{ApiError, CourseListQuery};
use crate::cache::QueryKey;
use crate::models::{Banner, Course};

impl DataService {
    /// Catalog list for the given search/status/sort combination.
    ///
    /// The key folds in every server-side parameter, so a changed filter
    /// addresses a distinct entry and re-fetches naturally. The category
    /// filter is applied client-side by the catalog screen and is
    /// deliberately absent here.
    pub async fn courses(&self, query: &CourseListQuery) -> Result<Vec<Course>, ApiError> {
        let key = QueryKey::new([
            "courses".to_string(),
            "list".to_string(),
            query.search.clone(),
            query.status.clone().unwrap_or_default(),
            query.sort_by.clone(),
            query.sort_order.clone(),
        ]);
        self.cached(key, || self.backend().fetch_courses(query)).await
    }

    pub async fn course(&self, course_id: &str) -> Result<Course, ApiError> {
        let key = QueryKey::new(["courses", course_id]);
        self.cached(key, || self.backend().fetch_course(course_id)).await
    }

    /// Request access to a course; invalidates every course entry so the
    /// pending badge appears on the next read.
    pub async fn request_access(&self, course_id: &str) -> Result<(), ApiError> {
        self.backend().request_access(course_id).await?;
        self.log(format!("Courses: access requested for {course_id}"));
        self.invalidate(&["courses"]).await;
        Ok(())
    }

    pub async fn extend_access(&self, course_id: &str) -> Result<(), ApiError> {
        self.backend().extend_access(course_id).await?;
        self.log(format!("Courses: access extension requested for {course_id}"));
        self.invalidate(&["courses"]).await;
        Ok(())
    }

    pub async fn banners(&self, position: &str) -> Result<Vec<Banner>, ApiError> {
        let key = QueryKey::new(["banners", position]);
        self.cached(key, || self.backend().fetch_banners(position)).await
    }
}
