use std::time::{Duration, Instant};

use learnist::utils::Debouncer;

const DELAY: Duration = Duration::from_millis(500);

#[test]
fn test_settled_input_publishes_once() {
    let mut debouncer = Debouncer::new(DELAY);
    let start = Instant::now();

    debouncer.input("rust", start);
    assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(500)),
        Some("rust".to_string())
    );
    // Publishing drains the pending value
    assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn test_rapid_keystrokes_publish_only_final_text() {
    let mut debouncer = Debouncer::new(DELAY);
    let start = Instant::now();

    // A keystroke every 100ms; each restarts the settle window
    for (i, text) in ["r", "ru", "rus", "rust"].iter().enumerate() {
        let at = start + Duration::from_millis(100 * i as u64);
        debouncer.input(*text, at);
        assert_eq!(debouncer.poll(at), None);
    }

    let last_input = start + Duration::from_millis(300);
    assert_eq!(debouncer.poll(last_input + Duration::from_millis(499)), None);
    assert_eq!(
        debouncer.poll(last_input + Duration::from_millis(500)),
        Some("rust".to_string())
    );
}

#[test]
fn test_cancel_drops_pending_value() {
    let mut debouncer = Debouncer::new(DELAY);
    let start = Instant::now();

    debouncer.input("abandoned", start);
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
}

#[test]
fn test_new_input_supersedes_pending() {
    let mut debouncer = Debouncer::new(DELAY);
    let start = Instant::now();

    debouncer.input("old", start);
    // Well past the first deadline, but the new input replaced it before a poll
    debouncer.input("new", start + Duration::from_secs(2));

    assert_eq!(debouncer.poll(start + Duration::from_secs(2)), None);
    assert_eq!(
        debouncer.poll(start + Duration::from_secs(2) + DELAY),
        Some("new".to_string())
    );
}
