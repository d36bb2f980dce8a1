use learnist::prefs::{CatalogPrefs, PrefsStore, SortBy, SortOrder, StatusFilter, ViewMode};

#[test]
fn test_view_mode_roundtrip() {
    for mode in [ViewMode::Grid, ViewMode::List] {
        assert_eq!(ViewMode::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(ViewMode::parse("carousel"), None);
    assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
    assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
}

#[test]
fn test_status_filter_cycle() {
    let mut filter = StatusFilter::All;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(filter);
        filter = filter.next();
    }
    // Full cycle returns to the start and visits every variant
    assert_eq!(filter, StatusFilter::All);
    assert_eq!(seen.len(), 4);
    assert!(seen.contains(&StatusFilter::Approved));
    assert!(seen.contains(&StatusFilter::Pending));
    assert!(seen.contains(&StatusFilter::Rejected));
}

#[test]
fn test_status_filter_query_param() {
    // "all" is the absence of the parameter, not a value
    assert_eq!(StatusFilter::All.query_param(), None);
    assert_eq!(StatusFilter::Approved.query_param(), Some("approved"));
    assert_eq!(StatusFilter::Pending.query_param(), Some("pending"));
    assert_eq!(StatusFilter::Rejected.query_param(), Some("rejected"));
}

#[test]
fn test_sort_defaults() {
    // Newest-first is the out-of-the-box ordering
    assert_eq!(SortBy::default(), SortBy::CreatedAt);
    assert_eq!(SortOrder::default(), SortOrder::Desc);
}

#[test]
fn test_store_set_get() {
    let mut store = PrefsStore::in_memory();
    assert_eq!(store.get("courses_viewMode"), None);

    store.set("courses_viewMode", "list").unwrap();
    assert_eq!(store.get("courses_viewMode"), Some("list"));

    store.remove("courses_viewMode").unwrap();
    assert_eq!(store.get("courses_viewMode"), None);
}

#[test]
fn test_catalog_prefs_defaults_from_empty_store() {
    let store = PrefsStore::in_memory();
    let prefs = CatalogPrefs::load(&store);
    assert_eq!(prefs.view_mode, ViewMode::Grid);
    assert_eq!(prefs.status_filter, StatusFilter::All);
    assert_eq!(prefs.category_filter, None);
    assert_eq!(prefs.sort_by, SortBy::CreatedAt);
    assert_eq!(prefs.sort_order, SortOrder::Desc);
}

#[test]
fn test_catalog_prefs_load_from_store() {
    let mut store = PrefsStore::in_memory();
    store.set("courses_viewMode", "list").unwrap();
    store.set("courses_statusFilter", "approved").unwrap();
    store.set("courses_categoryFilter", "IT").unwrap();
    store.set("courses_sortBy", "title").unwrap();
    store.set("courses_sortOrder", "asc").unwrap();

    let prefs = CatalogPrefs::load(&store);
    assert_eq!(prefs.view_mode, ViewMode::List);
    assert_eq!(prefs.status_filter, StatusFilter::Approved);
    assert_eq!(prefs.category_filter, Some("IT".to_string()));
    assert_eq!(prefs.sort_by, SortBy::Title);
    assert_eq!(prefs.sort_order, SortOrder::Asc);
}

#[test]
fn test_catalog_prefs_unparseable_values_fall_back() {
    let mut store = PrefsStore::in_memory();
    store.set("courses_viewMode", "mosaic").unwrap();
    store.set("courses_sortOrder", "sideways").unwrap();
    // Empty category means "no filter", not Some("")
    store.set("courses_categoryFilter", "").unwrap();

    let prefs = CatalogPrefs::load(&store);
    assert_eq!(prefs.view_mode, ViewMode::Grid);
    assert_eq!(prefs.sort_order, SortOrder::Desc);
    assert_eq!(prefs.category_filter, None);
}

#[test]
fn test_catalog_prefs_write_through() {
    let mut store = PrefsStore::in_memory();
    let mut prefs = CatalogPrefs::load(&store);

    prefs.set_view_mode(&mut store, ViewMode::List).unwrap();
    prefs.set_status_filter(&mut store, StatusFilter::Pending).unwrap();
    prefs.toggle_sort_order(&mut store).unwrap();

    // Every change lands in the store immediately
    assert_eq!(store.get("courses_viewMode"), Some("list"));
    assert_eq!(store.get("courses_statusFilter"), Some("pending"));
    assert_eq!(store.get("courses_sortOrder"), Some("asc"));

    // A fresh load sees the same state
    let reloaded = CatalogPrefs::load(&store);
    assert_eq!(reloaded, prefs);
}

#[test]
fn test_store_persistence_roundtrip() {
    let path = std::env::temp_dir().join(format!("learnist_prefs_test_{}.toml", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut store = PrefsStore::load_from_file(&path).unwrap();
        store.set("courses_viewMode", "list").unwrap();
        store.set("auth_token", "tok_123").unwrap();
    }

    let store = PrefsStore::load_from_file(&path).unwrap();
    assert_eq!(store.get("courses_viewMode"), Some("list"));
    assert_eq!(store.auth_token(), Some("tok_123"));

    let _ = std::fs::remove_file(&path);
}
