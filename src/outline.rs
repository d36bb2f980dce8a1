//! Lesson/module grouping for the course program outline.
//!
//! Takes the flat lesson list and the module list as served by the API
//! and produces the ordered outline the detail screen renders: lessons
//! partitioned into module groups plus one residual "unassigned" group,
//! each group sorted by the lesson's explicit order, modules sequenced by
//! their own order, and every lesson given a 1-based global index.

use std::collections::HashMap;

use crate::models::{Course, CourseModule, Lesson};

/// A lesson placed in the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub lesson: Lesson,
    /// 1-based position across the whole outline, module order first,
    /// intra-module order second.
    pub global_index: usize,
    /// Locked lessons render but are inert.
    pub unlocked: bool,
}

/// One module's worth of outline entries; `module` is `None` for the
/// residual group of lessons without a module.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineGroup {
    pub module: Option<CourseModule>,
    pub entries: Vec<OutlineEntry>,
}

impl OutlineGroup {
    pub fn title(&self) -> &str {
        self.module.as_ref().map(|m| m.title.as_str()).unwrap_or("Lessons")
    }
}

/// Access facts that decide which lessons are unlocked.
#[derive(Debug, Clone, Default)]
pub struct AccessContext {
    pub has_access: bool,
    pub trial_lesson_id: Option<String>,
}

impl AccessContext {
    pub fn for_course(course: &Course) -> Self {
        Self {
            has_access: course.has_access,
            trial_lesson_id: course.trial_lesson_id.clone(),
        }
    }

    /// A lesson is unlocked if the course grants access or the lesson is
    /// the designated trial lesson.
    pub fn unlocks(&self, lesson_id: &str) -> bool {
        self.has_access || self.trial_lesson_id.as_deref() == Some(lesson_id)
    }
}

/// Build the ordered outline.
///
/// Every input lesson lands in exactly one group; modules that end up
/// with zero lessons are skipped entirely. Global indices are assigned by
/// summing the sizes of all preceding groups plus the local position, so
/// across the outline they form the permutation 1..=N.
pub fn build_outline(modules: &[CourseModule], lessons: &[Lesson], access: &AccessContext) -> Vec<OutlineGroup> {
    let mut by_module: HashMap<&str, Vec<Lesson>> = HashMap::new();
    let mut unassigned: Vec<Lesson> = Vec::new();

    for lesson in lessons {
        match lesson.module_id.as_deref() {
            Some(module_id) => by_module.entry(module_id).or_default().push(lesson.clone()),
            None => unassigned.push(lesson.clone()),
        }
    }

    let mut ordered_modules: Vec<&CourseModule> = modules.iter().collect();
    ordered_modules.sort_by_key(|m| m.order);

    let mut groups = Vec::new();
    let mut next_index = 1usize;

    for module in ordered_modules {
        let Some(mut group_lessons) = by_module.remove(module.id.as_str()) else {
            continue; // empty modules are dropped from the outline
        };
        group_lessons.sort_by_key(|l| l.order);
        groups.push(OutlineGroup {
            module: Some(module.clone()),
            entries: index_entries(group_lessons, &mut next_index, access),
        });
    }

    // Lessons referencing a module id the module list does not contain
    // would otherwise vanish; treat them as unassigned.
    let mut orphaned: Vec<Lesson> = by_module.into_values().flatten().collect();
    unassigned.append(&mut orphaned);

    if !unassigned.is_empty() {
        unassigned.sort_by_key(|l| l.order);
        groups.push(OutlineGroup {
            module: None,
            entries: index_entries(unassigned, &mut next_index, access),
        });
    }

    groups
}

fn index_entries(lessons: Vec<Lesson>, next_index: &mut usize, access: &AccessContext) -> Vec<OutlineEntry> {
    lessons
        .into_iter()
        .map(|lesson| {
            let entry = OutlineEntry {
                unlocked: access.unlocks(&lesson.id),
                global_index: *next_index,
                lesson,
            };
            *next_index += 1;
            entry
        })
        .collect()
}

/// Completed / total, as a whole percentage. Empty lists are 0%.
pub fn progress_percent(lessons: &[Lesson]) -> u8 {
    if lessons.is_empty() {
        return 0;
    }
    let completed = lessons.iter().filter(|l| l.completed).count();
    ((completed * 100) / lessons.len()) as u8
}
