//! Constants used throughout the application
//!
//! This module centralizes magic strings, durations, and storage keys
//! to improve maintainability and consistency.

// Timing
/// Search keystrokes settle for this long before a fetch is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
/// Passive story strip advances on this interval.
pub const STORY_ADVANCE_SECS: u64 = 5;
/// Toasts self-dismiss after this long unless given another duration.
pub const TOAST_DEFAULT_MS: u64 = 4000;
/// After finishing a review session, navigate back after this delay.
pub const REVIEW_FINISH_REDIRECT_SECS: u64 = 3;

// Cache
/// Entries younger than this are served without a re-fetch.
pub const CACHE_STALE_SECS: u64 = 30;

// Layout
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 28;
pub const SIDEBAR_MIN_WIDTH: u16 = 20;
pub const SIDEBAR_MAX_WIDTH: u16 = 50;

// Durable preference keys (shared with the web client)
pub const PREF_VIEW_MODE: &str = "courses_viewMode";
pub const PREF_STATUS_FILTER: &str = "courses_statusFilter";
pub const PREF_SORT_BY: &str = "courses_sortBy";
pub const PREF_SORT_ORDER: &str = "courses_sortOrder";
pub const PREF_CATEGORY_FILTER: &str = "courses_categoryFilter";
/// Auth token entry, read when building the export-download URL.
pub const PREF_AUTH_TOKEN: &str = "auth_token";

// Success messages
pub const SUCCESS_ACCESS_REQUESTED: &str = "✅ Access requested";
pub const SUCCESS_ACCESS_EXTENDED: &str = "✅ Access extension requested";
pub const SUCCESS_ACCESS_APPROVED: &str = "✅ Course access approved";
pub const SUCCESS_ACCESS_REJECTED: &str = "✅ Course access rejected";
pub const SUCCESS_COURSE_DETACHED: &str = "✅ Course detached from student";
pub const SUCCESS_PASSWORD_RESET: &str = "✅ Password reset";
pub const SUCCESS_STUDENT_CREATED: &str = "✅ Student created";
pub const SUCCESS_CURATOR_CREATED: &str = "✅ Curator created";
pub const SUCCESS_CURATOR_UPDATED: &str = "✅ Curator updated";
pub const SUCCESS_CURATOR_DELETED: &str = "✅ Curator deleted";
pub const SUCCESS_REVIEW_FINISHED: &str = "🎉 Review session complete";

// Error messages
pub const ERROR_MUTATION_FAILED: &str = "❌ Operation failed";

// Banners
/// Placement slot requested for the catalog banner strip.
pub const BANNER_POSITION_CATALOG: &str = "catalog_top";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default config";
