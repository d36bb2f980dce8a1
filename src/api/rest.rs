//! reqwest implementation of [`LmsBackend`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    ApiEnvelope, ApiError, CourseListQuery, CreateCuratorArgs, CreateStudentArgs, LmsBackend,
    UpdateCuratorArgs, UpdateStudentCourseArgs,
};
use crate::models::{
    Banner, Course, CourseModule, CourseTest, Curator, Difficulty, Flashcard, FlashcardDeck,
    Lesson, Story, Student, StudentCourse, User,
};

/// HTTP client for the Learnist API.
///
/// Holds the base URL and bearer token; every request is authenticated.
/// No retry policy is applied and timeouts are left at the transport
/// default.
#[derive(Debug, Clone)]
pub struct LmsApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressBody {
    difficulty: Difficulty,
}

impl LmsApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
    }

    /// Decode the envelope of a response, mapping non-2xx statuses to
    /// [`ApiError::Status`] with the server's message when present.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Like [`Self::decode`] but for endpoints whose success body is
    /// irrelevant (`data` may be null).
    async fn decode_empty(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        Ok(())
    }

    async fn status_error(status: StatusCode, response: Response) -> ApiError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::POST, path).send().await?;
        Self::decode_empty(response).await
    }
}

#[async_trait]
impl LmsBackend for LmsApi {
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.get_json("/users/me", &[]).await
    }

    async fn fetch_courses(&self, query: &CourseListQuery) -> Result<Vec<Course>, ApiError> {
        self.get_json("/courses", &query.to_pairs()).await
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, ApiError> {
        self.get_json(&format!("/courses/{course_id}"), &[]).await
    }

    async fn fetch_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        self.get_json(&format!("/courses/{course_id}/lessons"), &[]).await
    }

    async fn fetch_modules(&self, course_id: &str) -> Result<Vec<CourseModule>, ApiError> {
        self.get_json(&format!("/modules/courses/{course_id}/modules"), &[])
            .await
    }

    async fn fetch_tests(&self, course_id: &str) -> Result<Vec<CourseTest>, ApiError> {
        match self
            .get_json(&format!("/tests/courses/{course_id}/tests"), &[])
            .await
        {
            // Access-gated endpoint: 403 means "no tests available"
            Err(e) if e.is_forbidden() => Ok(Vec::new()),
            other => other,
        }
    }

    async fn request_access(&self, course_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/courses/{course_id}/request")).await
    }

    async fn extend_access(&self, course_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/courses/{course_id}/extend")).await
    }

    async fn fetch_banners(&self, position: &str) -> Result<Vec<Banner>, ApiError> {
        self.get_json("/banners", &[("position", position.to_string())]).await
    }

    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError> {
        self.get_json("/stories", &[]).await
    }

    async fn mark_story_viewed(&self, story_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/stories/{story_id}/view")).await
    }

    async fn fetch_deck(&self, deck_id: &str) -> Result<FlashcardDeck, ApiError> {
        self.get_json(&format!("/flashcards/{deck_id}"), &[]).await
    }

    async fn fetch_review_cards(&self, deck_id: &str) -> Result<Vec<Flashcard>, ApiError> {
        self.get_json(&format!("/flashcards/{deck_id}/review"), &[]).await
    }

    async fn update_card_progress(
        &self,
        deck_id: &str,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<(), ApiError> {
        let response = self
            .request(
                Method::PUT,
                &format!("/flashcards/{deck_id}/cards/{card_id}/progress"),
            )
            .json(&ProgressBody { difficulty })
            .send()
            .await?;
        Self::decode_empty(response).await
    }

    async fn fetch_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("/students", &[]).await
    }

    async fn create_student(&self, args: &CreateStudentArgs) -> Result<Student, ApiError> {
        let response = self.request(Method::POST, "/students").json(args).send().await?;
        Self::decode(response).await
    }

    async fn fetch_student_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<StudentCourse, ApiError> {
        self.get_json(&format!("/students/{student_id}/courses/{course_id}"), &[])
            .await
    }

    async fn update_student_course(
        &self,
        student_id: &str,
        course_id: &str,
        args: &UpdateStudentCourseArgs,
    ) -> Result<StudentCourse, ApiError> {
        let response = self
            .request(
                Method::PUT,
                &format!("/students/{student_id}/courses/{course_id}"),
            )
            .json(args)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn detach_student_course(&self, student_id: &str, course_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/students/{student_id}/courses/{course_id}"),
            )
            .send()
            .await?;
        Self::decode_empty(response).await
    }

    async fn reset_student_password(&self, student_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, &format!("/students/{student_id}/reset-password"))
            .send()
            .await?;
        Self::decode_empty(response).await
    }

    async fn fetch_curators(&self) -> Result<Vec<Curator>, ApiError> {
        self.get_json("/curators", &[]).await
    }

    async fn create_curator(&self, args: &CreateCuratorArgs) -> Result<Curator, ApiError> {
        let response = self.request(Method::POST, "/curators").json(args).send().await?;
        Self::decode(response).await
    }

    async fn update_curator(&self, curator_id: &str, args: &UpdateCuratorArgs) -> Result<Curator, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/curators/{curator_id}"))
            .json(args)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_curator(&self, curator_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/curators/{curator_id}"))
            .send()
            .await?;
        Self::decode_empty(response).await
    }

    async fn reset_curator_password(&self, curator_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, &format!("/curators/{curator_id}/reset-password"))
            .send()
            .await?;
        Self::decode_empty(response).await
    }
}
