//! Course detail screen: program outline, progress, tests, and access
//! actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::models::{Course, CourseModule, CourseTest, Lesson};
use crate::outline::{build_outline, progress_percent, AccessContext, OutlineEntry, OutlineGroup};
use crate::ui::core::{Action, Component, DialogType};

pub struct CourseDetailComponent {
    course: Option<Course>,
    lessons: Vec<Lesson>,
    tests: Vec<CourseTest>,
    outline: Vec<OutlineGroup>,
    /// Outline entries flattened in display order; selection runs over
    /// these, skipping group headers.
    entries: Vec<OutlineEntry>,
    selected_index: usize,
    list_state: ListState,
    loading: bool,
    icons: IconService,
}

impl CourseDetailComponent {
    pub fn new() -> Self {
        Self {
            course: None,
            lessons: Vec::new(),
            tests: Vec::new(),
            outline: Vec::new(),
            entries: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            loading: true,
            icons: IconService,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.course = None;
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn set_data(
        &mut self,
        course: Course,
        lessons: Vec<Lesson>,
        modules: Vec<CourseModule>,
        tests: Vec<CourseTest>,
    ) {
        let access = AccessContext::for_course(&course);
        self.outline = build_outline(&modules, &lessons, &access);
        self.entries = self.outline.iter().flat_map(|g| g.entries.iter().cloned()).collect();
        self.course = Some(course);
        self.lessons = lessons;
        self.tests = tests;
        self.selected_index = 0;
        self.loading = false;
        self.sync_list_state();
    }

    /// Map the selected entry index to its rendered row, accounting for
    /// the group header above each module.
    fn rendered_index(&self) -> usize {
        let mut row = 0;
        let mut seen = 0;
        for group in &self.outline {
            row += 1; // header
            if self.selected_index < seen + group.entries.len() {
                return row + (self.selected_index - seen);
            }
            seen += group.entries.len();
            row += group.entries.len();
        }
        0
    }

    fn sync_list_state(&mut self) {
        if self.entries.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.rendered_index()));
        }
    }

    fn selected_entry(&self) -> Option<&OutlineEntry> {
        self.entries.get(self.selected_index)
    }

    fn entry_item(&self, entry: &OutlineEntry) -> ListItem<'static> {
        let lesson = &entry.lesson;
        let status_icon = if !entry.unlocked {
            self.icons.locked()
        } else if lesson.completed {
            self.icons.lesson_completed()
        } else {
            self.icons.lesson_pending()
        };

        let mut spans = vec![
            Span::styled(format!("  {:>3}. ", entry.global_index), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{status_icon} ")),
            Span::styled(
                lesson.title.clone(),
                if entry.unlocked {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ];
        if self
            .course
            .as_ref()
            .and_then(|c| c.trial_lesson_id.as_deref())
            == Some(lesson.id.as_str())
        {
            spans.push(Span::styled(
                format!(" {} trial", self.icons.trial()),
                Style::default().fg(Color::Yellow),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    fn render_header(&self, f: &mut Frame, rect: Rect, course: &Course) {
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(3)]).split(rect);

        let mut title_spans = vec![Span::styled(
            course.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(status) = course.student_course_status {
            title_spans.push(Span::styled(
                format!("  {} {}", self.icons.access_status(status), status.label()),
                Style::default().fg(Color::Yellow),
            ));
        } else if course.has_access {
            title_spans.push(Span::styled("  access granted", Style::default().fg(Color::Green)));
        }
        if course.is_free() {
            title_spans.push(Span::styled("  free", Style::default().fg(Color::Green)));
        } else {
            title_spans.push(Span::styled(
                format!("  {:.2}", course.price),
                Style::default().fg(Color::Gray),
            ));
        }
        let teacher = course
            .teacher
            .as_ref()
            .map(|t| format!("by {}", t.name))
            .unwrap_or_default();

        f.render_widget(
            Paragraph::new(vec![
                Line::from(title_spans),
                Line::from(Span::styled(teacher, Style::default().fg(Color::DarkGray))),
            ]),
            chunks[0],
        );

        let percent = progress_percent(&self.lessons);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(percent as u16);
        f.render_widget(gauge, chunks[1]);
    }
}

impl Default for CourseDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CourseDetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.entries.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.entries.len() - 1);
                    self.sync_list_state();
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.sync_list_state();
                Action::None
            }
            KeyCode::Enter => match self.selected_entry() {
                // Locked lessons render but are inert
                Some(entry) if !entry.unlocked => Action::None,
                Some(entry) => {
                    let body = entry
                        .lesson
                        .description
                        .clone()
                        .unwrap_or_else(|| "No description".to_string());
                    Action::ShowDialog(DialogType::Info(format!("{}\n\n{}", entry.lesson.title, body)))
                }
                None => Action::None,
            },
            KeyCode::Char('r') => match &self.course {
                Some(course) if course.can_request_access() => Action::ShowDialog(DialogType::RequestAccess {
                    course_id: course.id.clone(),
                    title: course.title.clone(),
                    price: course.price,
                }),
                _ => Action::None,
            },
            KeyCode::Char('x') => match &self.course {
                Some(course) if course.has_access => Action::ShowDialog(DialogType::ExtendAccess {
                    course_id: course.id.clone(),
                    title: course.title.clone(),
                }),
                _ => Action::None,
            },
            KeyCode::Char('f') => match &self.course {
                Some(course) => Action::OpenDeck(course.id.clone()),
                None => Action::None,
            },
            KeyCode::Esc | KeyCode::Backspace => Action::BackToCatalog,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CourseDetailLoaded {
                course,
                lessons,
                modules,
                tests,
            } => {
                self.set_data(course, lessons, modules, tests);
                Action::None
            }
            Action::FetchFailed(_) => {
                self.loading = false;
                action
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(course) = self.course.clone() else {
            let placeholder = Paragraph::new(if self.loading { "Loading…" } else { "Course unavailable" })
                .block(Block::default().borders(Borders::ALL).title(" Course "))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, rect);
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(rect);

        self.render_header(f, chunks[0], &course);

        let mut items: Vec<ListItem> = Vec::new();
        for group in &self.outline {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("— {} —", group.title()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))));
            for entry in &group.entries {
                items.push(self.entry_item(entry));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Program ");
        if items.is_empty() {
            f.render_widget(
                Paragraph::new("No lessons yet").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        } else {
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
            f.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }

        let tests_line = if self.tests.is_empty() {
            Line::from(Span::styled("No tests available", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::styled(
                format!("{} test(s) available — r request access · x extend · f flashcards", self.tests.len()),
                Style::default().fg(Color::Gray),
            ))
        };
        f.render_widget(Paragraph::new(tests_line), chunks[2]);
    }
}
