use chrono::NaiveDate;

use learnist::utils::datetime::{format_access_window, format_ymd, parse_date};
use learnist::utils::telegram;

#[test]
fn test_parse_and_format_roundtrip() {
    let date = parse_date("2026-08-29").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
    assert_eq!(format_ymd(date), "2026-08-29");

    assert!(parse_date("29.08.2026").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_access_window_rendering() {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();

    assert_eq!(
        format_access_window(Some(start), Some(end)),
        "2026-01-01 → 2026-06-30"
    );
    assert_eq!(format_access_window(Some(start), None), "from 2026-01-01");
    assert_eq!(format_access_window(None, Some(end)), "until 2026-06-30");
    assert_eq!(format_access_window(None, None), "unlimited");
}

#[test]
fn test_telegram_deep_link() {
    assert_eq!(
        telegram::deep_link("learnist_support_bot", None),
        "https://t.me/learnist_support_bot"
    );
    // Leading @ is tolerated
    assert_eq!(
        telegram::deep_link("@learnist_support_bot", None),
        "https://t.me/learnist_support_bot"
    );
    assert_eq!(
        telegram::deep_link("learnist_support_bot", Some("course_c1")),
        "https://t.me/learnist_support_bot?start=course_c1"
    );
}

#[test]
fn test_telegram_payload_sanitized() {
    // Characters outside [A-Za-z0-9_-] are dropped
    assert_eq!(
        telegram::deep_link("bot", Some("a b/c?d=e")),
        "https://t.me/bot?start=abcde"
    );
    // A payload that sanitizes to nothing is omitted entirely
    assert_eq!(telegram::deep_link("bot", Some("???")), "https://t.me/bot");
}
