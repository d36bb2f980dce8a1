//! Story queries and view tracking.

use super::DataService;
use crate::api::ApiError;
use crate::cache::QueryKey;
use crate::models::Story;

impl DataService {
    pub async fn stories(&self) -> Result<Vec<Story>, ApiError> {
        let key = QueryKey::new(["stories", "list"]);
        self.cached(key, || self.backend().fetch_stories()).await
    }

    /// Record that a story was viewed. Emitted once per viewer entry or
    /// manual navigation step, never from the passive auto-advance.
    pub async fn mark_story_viewed(&self, story_id: &str) -> Result<(), ApiError> {
        self.backend().mark_story_viewed(story_id).await?;
        self.log(format!("Stories: view recorded for {story_id}"));
        Ok(())
    }
}
