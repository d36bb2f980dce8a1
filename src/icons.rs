//! Icon definitions for visual representation in the TUI.

use crate::models::{AccessStatus, Role};
use crate::prefs::ViewMode;

/// Central place for the glyphs used across screens, so the rendering
/// code never hardcodes emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService;

impl IconService {
    pub fn course(&self) -> &'static str {
        "📚"
    }

    pub fn lesson_completed(&self) -> &'static str {
        "✅"
    }

    pub fn lesson_pending(&self) -> &'static str {
        "▫"
    }

    pub fn locked(&self) -> &'static str {
        "🔒"
    }

    pub fn trial(&self) -> &'static str {
        "🎁"
    }

    pub fn access_status(&self, status: AccessStatus) -> &'static str {
        match status {
            AccessStatus::Pending => "⏳",
            AccessStatus::Approved => "✅",
            AccessStatus::Rejected => "⛔",
        }
    }

    pub fn view_mode(&self, mode: ViewMode) -> &'static str {
        match mode {
            ViewMode::Grid => "▦",
            ViewMode::List => "☰",
        }
    }

    pub fn role(&self, role: Role) -> &'static str {
        match role {
            Role::Student => "🎓",
            Role::Teacher => "🧑‍🏫",
            Role::Curator => "🗂",
            Role::Admin => "🛠",
        }
    }

    pub fn search(&self) -> &'static str {
        "🔎"
    }

    pub fn sort_asc(&self) -> &'static str {
        "↑"
    }

    pub fn sort_desc(&self) -> &'static str {
        "↓"
    }
}
