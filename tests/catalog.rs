use learnist::api::CourseListQuery;
use learnist::models::{AccessStatus, Course};
use learnist::prefs::{PrefsStore, SortOrder, StatusFilter};
use learnist::ui::components::catalog::{filter_by_category, CatalogComponent};
use learnist::ui::core::{Action, Component};

fn course(id: &str, category: Option<&str>, status: Option<AccessStatus>) -> Course {
    Course {
        id: id.to_string(),
        title: format!("Course {id}"),
        description: None,
        price: 0.0,
        category: category.map(str::to_string),
        language: None,
        thumbnail: None,
        teacher: None,
        has_access: false,
        student_course_status: status,
        lesson_count: 0,
        module_count: 0,
        trial_lesson_id: None,
    }
}

#[test]
fn test_filter_by_category() {
    let courses = vec![
        course("a", Some("IT"), None),
        course("b", Some("Design"), None),
        course("c", None, None),
        course("d", Some("IT"), None),
    ];

    let it: Vec<String> = filter_by_category(&courses, Some("IT"))
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(it, vec!["a", "d"]);

    // No category filter passes everything through, including
    // uncategorized courses
    assert_eq!(filter_by_category(&courses, None).len(), 4);
    assert!(filter_by_category(&courses, Some("Music")).is_empty());
}

#[test]
fn test_default_query_has_no_status_param() {
    let catalog = CatalogComponent::new(PrefsStore::in_memory());
    let query = catalog.query();
    assert_eq!(query.search, "");
    assert_eq!(query.status, None);
    assert_eq!(query.sort_by, "createdAt");
    assert_eq!(query.sort_order, "desc");
}

#[test]
fn test_query_pairs_match_api_parameter_names() {
    let query = CourseListQuery {
        search: "rust".to_string(),
        status: Some("approved".to_string()),
        sort_by: "title".to_string(),
        sort_order: "asc".to_string(),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("search", "rust".to_string()),
            ("status", "approved".to_string()),
            ("sortBy", "title".to_string()),
            ("sortOrder", "asc".to_string()),
        ]
    );

    // Empty search is omitted, not sent as an empty param
    let blank = CourseListQuery {
        search: String::new(),
        status: None,
        sort_by: "createdAt".to_string(),
        sort_order: "desc".to_string(),
    };
    assert!(blank.to_pairs().iter().all(|(k, _)| *k != "search" && *k != "status"));
}

#[test]
fn test_committed_search_folds_into_query() {
    let mut catalog = CatalogComponent::new(PrefsStore::in_memory());

    let passed = catalog.update(Action::SearchCommitted("embedded".to_string()));
    // The action passes through so the app schedules the fetch
    assert!(matches!(passed, Action::SearchCommitted(_)));
    assert_eq!(catalog.query().search, "embedded");
}

#[test]
fn test_filter_changes_persist_and_refetch_courses_only() {
    let mut catalog = CatalogComponent::new(PrefsStore::in_memory());

    // A changed filter addresses a new query key; it must not request a
    // full cache wipe, only the course list
    let result = catalog.update(Action::CycleStatusFilter);
    assert!(matches!(result, Action::RefreshCourses));
    assert_eq!(catalog.prefs().status_filter, StatusFilter::Approved);
    assert_eq!(catalog.query().status, Some("approved".to_string()));

    let result = catalog.update(Action::ToggleSortOrder);
    assert!(matches!(result, Action::RefreshCourses));
    assert_eq!(catalog.prefs().sort_order, SortOrder::Asc);

    let result = catalog.update(Action::CycleSortBy);
    assert!(matches!(result, Action::RefreshCourses));
}

#[test]
fn test_view_mode_toggle_does_not_refetch() {
    let mut catalog = CatalogComponent::new(PrefsStore::in_memory());
    // A pure rendering change never hits the server
    let result = catalog.update(Action::ToggleViewMode);
    assert!(matches!(result, Action::None));
}

#[test]
fn test_status_and_category_filters_compose() {
    // statusFilter=approved comes back from the server already filtered;
    // the category filter then pares the list down client-side
    let fetched = vec![
        course("a", Some("IT"), Some(AccessStatus::Approved)),
        course("b", Some("Design"), Some(AccessStatus::Approved)),
    ];

    let mut catalog = CatalogComponent::new(PrefsStore::in_memory());
    catalog.update(Action::CoursesLoaded(fetched));

    let visible = filter_by_category(&catalog.visible_courses(), Some("IT"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "a");
}
