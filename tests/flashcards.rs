use learnist::models::{Difficulty, Flashcard};
use learnist::ui::components::flashcards::ReviewSession;

fn cards(n: usize) -> Vec<Flashcard> {
    (1..=n)
        .map(|i| Flashcard {
            id: format!("card-{i}"),
            front: format!("front {i}"),
            back: format!("back {i}"),
        })
        .collect()
}

#[test]
fn test_grade_requires_flip() {
    let mut session = ReviewSession::new("deck", cards(2));
    // Grading the unflipped front does nothing
    assert_eq!(session.grade(Difficulty::Easy), None);
    assert_eq!(session.index(), 0);

    session.flip();
    assert!(session.grade(Difficulty::Easy).is_some());
    assert_eq!(session.index(), 1);
}

#[test]
fn test_flip_resets_on_advance() {
    let mut session = ReviewSession::new("deck", cards(2));
    session.flip();
    assert!(session.is_flipped());
    session.grade(Difficulty::Medium);
    // The next card starts on its front
    assert!(!session.is_flipped());
}

#[test]
fn test_every_card_graded_exactly_once() {
    let n = 5;
    let mut session = ReviewSession::new("deck", cards(n));
    let mut outcomes = Vec::new();

    while !session.is_finished() {
        session.flip();
        outcomes.push(session.grade(Difficulty::Hard).unwrap());
    }

    assert_eq!(outcomes.len(), n);
    let mut ids: Vec<&str> = outcomes.iter().map(|o| o.card_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
}

#[test]
fn test_exactly_one_finished_outcome() {
    let mut session = ReviewSession::new("deck", cards(3));
    let mut finished_count = 0;

    while !session.is_finished() {
        session.flip();
        if session.grade(Difficulty::Easy).unwrap().finished {
            finished_count += 1;
        }
    }

    // Only the final grade reports completion
    assert_eq!(finished_count, 1);
    assert!(session.is_finished());
    assert_eq!(session.current(), None);
}

#[test]
fn test_finished_session_rejects_input() {
    let mut session = ReviewSession::new("deck", cards(1));
    session.flip();
    assert!(session.grade(Difficulty::Easy).unwrap().finished);

    session.flip();
    assert!(!session.is_flipped());
    assert_eq!(session.grade(Difficulty::Easy), None);
}

#[test]
fn test_empty_deck() {
    let mut session = ReviewSession::new("deck", Vec::new());
    assert!(session.is_empty());
    assert_eq!(session.current(), None);
    session.flip();
    assert_eq!(session.grade(Difficulty::Easy), None);
}

#[test]
fn test_restart_is_a_new_session() {
    let mut session = ReviewSession::new("deck", cards(2));
    session.flip();
    session.grade(Difficulty::Easy);

    // Restart replaces the session wholesale, as the component does
    session = ReviewSession::new("deck", cards(2));
    assert_eq!(session.index(), 0);
    assert!(!session.is_finished());
    assert!(!session.is_flipped());
}
