//! Durable catalog preferences.
//!
//! The catalog screen persists its view mode, filters, and sort order so
//! they survive restarts, using the same storage keys as the web client.
//! The store is an explicit dependency handed to the screen at
//! construction; there is no global singleton. Writes go through to disk
//! immediately, last-writer-wins (single user, single instance).

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::{
    PREF_AUTH_TOKEN, PREF_CATEGORY_FILTER, PREF_SORT_BY, PREF_SORT_ORDER, PREF_STATUS_FILTER,
    PREF_VIEW_MODE,
};

/// Catalog rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Server-side status filter for the catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Approved,
    Pending,
    Rejected,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Approved => "approved",
            StatusFilter::Pending => "pending",
            StatusFilter::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StatusFilter::All),
            "approved" => Some(StatusFilter::Approved),
            "pending" => Some(StatusFilter::Pending),
            "rejected" => Some(StatusFilter::Rejected),
            _ => None,
        }
    }

    /// Value sent as the `status` query param; `All` sends nothing.
    pub fn query_param(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            other => Some(other.as_str()),
        }
    }

    /// Cycle through the closed set, used by the catalog's filter key.
    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Approved,
            StatusFilter::Approved => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Rejected,
            StatusFilter::Rejected => StatusFilter::All,
        }
    }
}

/// Server-side sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    CreatedAt,
    Title,
    Price,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::Title => "title",
            SortBy::Price => "price",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "createdAt" => Some(SortBy::CreatedAt),
            "title" => Some(SortBy::Title),
            "price" => Some(SortBy::Price),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortBy::CreatedAt => SortBy::Title,
            SortBy::Title => SortBy::Price,
            SortBy::Price => SortBy::CreatedAt,
        }
    }
}

/// Sort direction. The single sort control flips only this, never the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Flat key/value store backed by a TOML file in the XDG data directory.
///
/// `in_memory()` builds a store with no backing file for tests.
#[derive(Debug, Clone, Default)]
pub struct PrefsStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl PrefsStore {
    /// Load preferences from the default location, creating nothing yet.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from_file(path)
    }

    /// Load preferences from a specific file; a missing file yields defaults.
    pub fn load_from_file<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// Store without a backing file; writes stay in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Default preferences path under the XDG data directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("learnist").join("preferences.toml"))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Set a key and write the whole store back to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// Remove a key and write the store back to disk.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.persist()
    }

    /// The stored auth token, used for the export-download URL.
    pub fn auth_token(&self) -> Option<&str> {
        self.get(PREF_AUTH_TOKEN)
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let content = toml::to_string(&self.values).context("Failed to serialize preferences")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences file: {}", path.display()))?;
        Ok(())
    }
}

/// Catalog preference set, initialized from the store with fixed fallbacks
/// and written back field-by-field whenever something changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPrefs {
    pub view_mode: ViewMode,
    pub status_filter: StatusFilter,
    pub category_filter: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl CatalogPrefs {
    /// Read every field from the store, falling back to defaults for
    /// missing or unparseable entries.
    pub fn load(store: &PrefsStore) -> Self {
        Self {
            view_mode: store
                .get(PREF_VIEW_MODE)
                .and_then(ViewMode::parse)
                .unwrap_or_default(),
            status_filter: store
                .get(PREF_STATUS_FILTER)
                .and_then(StatusFilter::parse)
                .unwrap_or_default(),
            category_filter: store
                .get(PREF_CATEGORY_FILTER)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            sort_by: store.get(PREF_SORT_BY).and_then(SortBy::parse).unwrap_or_default(),
            sort_order: store
                .get(PREF_SORT_ORDER)
                .and_then(SortOrder::parse)
                .unwrap_or_default(),
        }
    }

    pub fn set_view_mode(&mut self, store: &mut PrefsStore, mode: ViewMode) -> Result<()> {
        self.view_mode = mode;
        store.set(PREF_VIEW_MODE, mode.as_str())
    }

    pub fn set_status_filter(&mut self, store: &mut PrefsStore, filter: StatusFilter) -> Result<()> {
        self.status_filter = filter;
        store.set(PREF_STATUS_FILTER, filter.as_str())
    }

    pub fn set_category_filter(&mut self, store: &mut PrefsStore, category: Option<String>) -> Result<()> {
        self.category_filter = category.clone();
        store.set(PREF_CATEGORY_FILTER, category.as_deref().unwrap_or(""))
    }

    pub fn set_sort_by(&mut self, store: &mut PrefsStore, sort_by: SortBy) -> Result<()> {
        self.sort_by = sort_by;
        store.set(PREF_SORT_BY, sort_by.as_str())
    }

    pub fn set_sort_order(&mut self, store: &mut PrefsStore, order: SortOrder) -> Result<()> {
        self.sort_order = order;
        store.set(PREF_SORT_ORDER, order.as_str())
    }

    /// Flip the sort direction, persisting the new value.
    pub fn toggle_sort_order(&mut self, store: &mut PrefsStore) -> Result<()> {
        self.set_sort_order(store, self.sort_order.toggled())
    }
}
