use std::time::{Duration, Instant};

use learnist::ui::components::ToastStack;
use learnist::ui::core::ToastSeverity;

#[test]
fn test_toast_expires_at_deadline_not_before() {
    let mut stack = ToastStack::new();
    let now = Instant::now();
    stack.push_with_duration("saved", ToastSeverity::Success, Duration::from_secs(4), now);

    stack.expire(now + Duration::from_millis(3999));
    assert_eq!(stack.toasts().len(), 1);

    stack.expire(now + Duration::from_secs(4));
    assert!(stack.is_empty());
}

#[test]
fn test_manual_dismiss_cancels_timer() {
    let mut stack = ToastStack::new();
    let now = Instant::now();
    let id = stack.push("be gone", ToastSeverity::Info, now);

    stack.dismiss(id);
    assert!(stack.is_empty());

    // A later expiry pass finds nothing to remove and does not panic
    stack.expire(now + Duration::from_secs(60));
    assert!(stack.is_empty());
}

#[test]
fn test_ids_are_monotonic_and_unique() {
    let mut stack = ToastStack::new();
    let now = Instant::now();

    let a = stack.push("one", ToastSeverity::Info, now);
    let b = stack.push("two", ToastSeverity::Info, now);
    stack.dismiss(a);
    let c = stack.push("three", ToastSeverity::Info, now);

    // Dismissal never recycles an id
    assert!(b > a);
    assert!(c > b);
}

#[test]
fn test_repeated_messages_are_not_coalesced() {
    let mut stack = ToastStack::new();
    let now = Instant::now();

    stack.push("✅ Saved", ToastSeverity::Success, now);
    stack.push("✅ Saved", ToastSeverity::Success, now);
    assert_eq!(stack.toasts().len(), 2);
}

#[test]
fn test_per_toast_deadlines_are_independent() {
    let mut stack = ToastStack::new();
    let now = Instant::now();
    stack.push_with_duration("short", ToastSeverity::Info, Duration::from_secs(1), now);
    stack.push_with_duration("long", ToastSeverity::Info, Duration::from_secs(10), now);

    stack.expire(now + Duration::from_secs(2));
    assert_eq!(stack.toasts().len(), 1);
    assert_eq!(stack.toasts()[0].message, "long");
}
