use learnist::models::{CourseModule, Lesson};
use learnist::outline::{build_outline, progress_percent, AccessContext};

fn lesson(id: &str, order: i64, module_id: Option<&str>) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: format!("Lesson {id}"),
        description: None,
        order,
        module_id: module_id.map(str::to_string),
        completed: false,
    }
}

fn module(id: &str, order: i64) -> CourseModule {
    CourseModule {
        id: id.to_string(),
        title: format!("Module {id}"),
        order,
    }
}

fn full_access() -> AccessContext {
    AccessContext {
        has_access: true,
        trial_lesson_id: None,
    }
}

#[test]
fn test_lessons_grouped_by_module_in_order() {
    let modules = vec![module("m2", 2), module("m1", 1)];
    let lessons = vec![
        lesson("b", 2, Some("m1")),
        lesson("d", 2, Some("m2")),
        lesson("a", 1, Some("m1")),
        lesson("c", 1, Some("m2")),
    ];

    let outline = build_outline(&modules, &lessons, &full_access());

    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].module.as_ref().unwrap().id, "m1");
    assert_eq!(outline[1].module.as_ref().unwrap().id, "m2");

    let ids: Vec<&str> = outline
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.lesson.id.as_str()))
        .collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_global_indices_form_permutation() {
    let modules = vec![module("m1", 1), module("m2", 2)];
    let lessons = vec![
        lesson("a", 5, Some("m2")),
        lesson("b", 1, None),
        lesson("c", 3, Some("m1")),
        lesson("d", 1, Some("m1")),
        lesson("e", 2, None),
    ];

    let outline = build_outline(&modules, &lessons, &full_access());
    let mut indices: Vec<usize> = outline
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.global_index))
        .collect();

    // No lesson dropped or duplicated; indices are exactly 1..=N
    assert_eq!(indices.len(), lessons.len());
    indices.sort_unstable();
    assert_eq!(indices, (1..=lessons.len()).collect::<Vec<_>>());
}

#[test]
fn test_empty_modules_are_skipped() {
    let modules = vec![module("m1", 1), module("empty", 2), module("m3", 3)];
    let lessons = vec![lesson("a", 1, Some("m1")), lesson("b", 1, Some("m3"))];

    let outline = build_outline(&modules, &lessons, &full_access());

    assert_eq!(outline.len(), 2);
    assert!(outline.iter().all(|g| !g.entries.is_empty()));
    assert!(outline
        .iter()
        .all(|g| g.module.as_ref().map(|m| m.id.as_str()) != Some("empty")));
}

#[test]
fn test_unassigned_lessons_form_residual_group() {
    let modules = vec![module("m1", 1)];
    let lessons = vec![
        lesson("a", 1, Some("m1")),
        lesson("z", 2, None),
        lesson("y", 1, None),
    ];

    let outline = build_outline(&modules, &lessons, &full_access());

    assert_eq!(outline.len(), 2);
    let residual = &outline[1];
    assert!(residual.module.is_none());
    assert_eq!(residual.title(), "Lessons");
    let ids: Vec<&str> = residual.entries.iter().map(|e| e.lesson.id.as_str()).collect();
    assert_eq!(ids, vec!["y", "z"]);
    // Residual group comes last, so its indices follow the modules'
    assert_eq!(residual.entries[0].global_index, 2);
}

#[test]
fn test_orphaned_module_reference_folds_into_residual() {
    // The lesson points at a module the module list does not contain
    let modules = vec![module("m1", 1)];
    let lessons = vec![lesson("a", 1, Some("m1")), lesson("ghost", 1, Some("missing"))];

    let outline = build_outline(&modules, &lessons, &full_access());

    let total: usize = outline.iter().map(|g| g.entries.len()).sum();
    assert_eq!(total, 2);
    let residual = outline.last().unwrap();
    assert!(residual.module.is_none());
    assert_eq!(residual.entries[0].lesson.id, "ghost");
}

#[test]
fn test_trial_lesson_unlocks_without_access() {
    let modules = vec![module("m1", 1)];
    let lessons = vec![lesson("a", 1, Some("m1")), lesson("b", 2, Some("m1"))];
    let access = AccessContext {
        has_access: false,
        trial_lesson_id: Some("b".to_string()),
    };

    let outline = build_outline(&modules, &lessons, &access);
    let entries = &outline[0].entries;
    assert!(!entries[0].unlocked);
    assert!(entries[1].unlocked);
}

#[test]
fn test_access_unlocks_everything() {
    let lessons = vec![lesson("a", 1, None), lesson("b", 2, None)];
    let outline = build_outline(&[], &lessons, &full_access());
    assert!(outline[0].entries.iter().all(|e| e.unlocked));
}

#[test]
fn test_progress_percent() {
    assert_eq!(progress_percent(&[]), 0);

    let mut lessons = vec![lesson("a", 1, None), lesson("b", 2, None), lesson("c", 3, None)];
    assert_eq!(progress_percent(&lessons), 0);

    lessons[0].completed = true;
    assert_eq!(progress_percent(&lessons), 33);

    lessons[1].completed = true;
    lessons[2].completed = true;
    assert_eq!(progress_percent(&lessons), 100);
}
