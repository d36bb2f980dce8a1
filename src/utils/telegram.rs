//! Telegram deep-link construction for the support contact.

/// Build a `t.me` deep link for a bot, with an optional start payload.
///
/// Payload characters outside `[A-Za-z0-9_-]` are dropped, matching
/// Telegram's start-parameter restrictions.
pub fn deep_link(bot_username: &str, payload: Option<&str>) -> String {
    let bot = bot_username.trim_start_matches('@');
    match payload {
        Some(raw) => {
            let cleaned: String = raw
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            if cleaned.is_empty() {
                format!("https://t.me/{bot}")
            } else {
                format!("https://t.me/{bot}?start={cleaned}")
            }
        }
        None => format!("https://t.me/{bot}"),
    }
}
