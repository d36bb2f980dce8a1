//! Serde data models for entities served by the Learnist API.
//!
//! Every entity here is server-owned; the client holds read-mostly
//! projections that are re-fetched after each write (no optimistic
//! local mutation).

pub mod course;
pub mod flashcard;
pub mod lesson;
pub mod story;
pub mod user;

pub use course::{AccessStatus, Course, CourseTest, StudentCourse};
pub use flashcard::{Difficulty, Flashcard, FlashcardDeck};
pub use lesson::{CourseModule, Lesson};
pub use story::{Banner, Story};
pub use user::{Curator, Role, Student, User};
