use std::time::{Duration, Instant};

use learnist::models::Story;
use learnist::ui::components::StoryCarousel;

fn stories(n: usize) -> Vec<Story> {
    (1..=n)
        .map(|i| Story {
            id: format!("story-{i}"),
            title: format!("Story {i}"),
            body: None,
            image: None,
        })
        .collect()
}

#[test]
fn test_strip_advances_every_interval_and_wraps() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(3), start);
    assert_eq!(carousel.strip_index(), 0);

    // 15 seconds of 5-second steps: 0 → 1 → 2 → 0
    assert!(carousel.advance_strip(start + Duration::from_secs(5)));
    assert_eq!(carousel.strip_index(), 1);
    assert!(carousel.advance_strip(start + Duration::from_secs(10)));
    assert_eq!(carousel.strip_index(), 2);
    assert!(carousel.advance_strip(start + Duration::from_secs(15)));
    assert_eq!(carousel.strip_index(), 0);
}

#[test]
fn test_strip_does_not_advance_early() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(3), start);

    assert!(!carousel.advance_strip(start + Duration::from_secs(4)));
    assert_eq!(carousel.strip_index(), 0);
}

#[test]
fn test_passive_advance_records_nothing_viewer_records_once_per_step() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(3), start);

    // Passive advance returns no story ids to record
    carousel.advance_strip(start + Duration::from_secs(5));

    // Opening the viewer records the entry story
    let viewed = carousel.open_viewer();
    assert_eq!(viewed, Some("story-2".to_string()));

    // Each manual step records the newly shown story
    assert_eq!(carousel.viewer_next(), Some("story-3".to_string()));
    assert_eq!(carousel.viewer_previous(), Some("story-2".to_string()));
}

#[test]
fn test_viewer_navigation_is_bounded() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(2), start);

    carousel.open_viewer();
    assert_eq!(carousel.viewer_previous(), None);
    assert_eq!(carousel.viewer_next(), Some("story-2".to_string()));
    assert_eq!(carousel.viewer_next(), None);
    assert_eq!(carousel.viewer_index(), Some(1));
}

#[test]
fn test_empty_list_disables_carousel() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(Vec::new(), start);

    assert!(carousel.is_empty());
    assert!(!carousel.advance_strip(start + Duration::from_secs(60)));
    assert_eq!(carousel.open_viewer(), None);
}

#[test]
fn test_teardown_stops_advance() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(2), start);
    carousel.open_viewer();

    carousel.teardown();
    assert!(!carousel.is_viewer_open());
    assert!(!carousel.advance_strip(start + Duration::from_secs(60)));
    assert_eq!(carousel.strip_index(), 0);
}

#[test]
fn test_new_data_resets_strip() {
    let mut carousel = StoryCarousel::new();
    let start = Instant::now();
    carousel.update_data(stories(3), start);
    carousel.advance_strip(start + Duration::from_secs(5));
    assert_eq!(carousel.strip_index(), 1);

    carousel.update_data(stories(2), start + Duration::from_secs(6));
    assert_eq!(carousel.strip_index(), 0);
    assert!(!carousel.is_viewer_open());
}
