//! Flashcard deck queries and review progress updates.

use super::DataService;
use crate::api::ApiError;
use crate::cache::QueryKey;
use crate::models::{Difficulty, Flashcard, FlashcardDeck};

impl DataService {
    pub async fn deck(&self, deck_id: &str) -> Result<FlashcardDeck, ApiError> {
        let key = QueryKey::new(["flashcards", deck_id]);
        self.cached(key, || self.backend().fetch_deck(deck_id)).await
    }

    /// The review sequence for a deck.
    ///
    /// Never cached: a restart must reflect the server's spaced-repetition
    /// scheduling, not re-show the same local array.
    pub async fn review_cards(&self, deck_id: &str) -> Result<Vec<Flashcard>, ApiError> {
        self.backend().fetch_review_cards(deck_id).await
    }

    /// Record a grade for one card. Fire-and-forget from the session's
    /// point of view; the server owns scheduling, so nothing local needs
    /// invalidating.
    pub async fn update_card_progress(
        &self,
        deck_id: &str,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<(), ApiError> {
        self.backend().update_card_progress(deck_id, card_id, difficulty).await?;
        self.log(format!(
            "Flashcards: graded card {card_id} in deck {deck_id} as {}",
            difficulty.as_str()
        ));
        Ok(())
    }
}
