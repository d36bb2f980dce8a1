//! Flashcard decks and review grading.

use serde::{Deserialize, Serialize};

/// A front/back card pair reviewed in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
}

/// A deck as served by `GET /flashcards/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDeck {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub card_count: u32,
}

/// Grade chosen after flipping a card.
///
/// Sent to `PUT /flashcards/:id/cards/:cardId/progress`; the server owns
/// the spaced-repetition scheduling, the client never persists review
/// progress itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}
