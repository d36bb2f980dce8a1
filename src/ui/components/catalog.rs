//! Course catalog screen.
//!
//! View mode, search text, status/category filters, and sort order all
//! initialize from the durable preference store and are written back on
//! every change. Search/status/sort are folded into the query key and
//! resolved server-side; the category filter pares the fetched list down
//! client-side. Search input is debounced: only text that has settled
//! for 500 ms triggers a fetch, keystrokes in between never do.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::api::CourseListQuery;
use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::icons::IconService;
use crate::models::{Banner, Course};
use crate::prefs::{CatalogPrefs, PrefsStore, ViewMode};
use crate::ui::components::stories::StoryCarousel;
use crate::ui::core::{Action, Component};
use crate::utils::Debouncer;

/// Client-side category filter, applied after the fetch.
pub fn filter_by_category(courses: &[Course], category: Option<&str>) -> Vec<Course> {
    match category {
        None => courses.to_vec(),
        Some(cat) => courses
            .iter()
            .filter(|c| c.category.as_deref() == Some(cat))
            .cloned()
            .collect(),
    }
}

pub struct CatalogComponent {
    prefs: CatalogPrefs,
    prefs_store: PrefsStore,

    search_buffer: String,
    search_active: bool,
    committed_search: String,
    debouncer: Debouncer,

    courses: Vec<Course>,
    banners: Vec<Banner>,
    pub carousel: StoryCarousel,

    selected_index: usize,
    list_state: ListState,
    loading: bool,
    icons: IconService,
}

impl CatalogComponent {
    pub fn new(prefs_store: PrefsStore) -> Self {
        let prefs = CatalogPrefs::load(&prefs_store);
        Self {
            prefs,
            prefs_store,
            search_buffer: String::new(),
            search_active: false,
            committed_search: String::new(),
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            courses: Vec::new(),
            banners: Vec::new(),
            carousel: StoryCarousel::new(),
            selected_index: 0,
            list_state: ListState::default(),
            loading: true,
            icons: IconService,
        }
    }

    pub fn prefs(&self) -> &CatalogPrefs {
        &self.prefs
    }

    /// Server-side query for the current preference set and settled
    /// search text. The category filter is deliberately absent.
    pub fn query(&self) -> CourseListQuery {
        CourseListQuery {
            search: self.committed_search.clone(),
            status: self.prefs.status_filter.query_param().map(str::to_string),
            sort_by: self.prefs.sort_by.as_str().to_string(),
            sort_order: self.prefs.sort_order.as_str().to_string(),
        }
    }

    /// Courses after the client-side category filter.
    pub fn visible_courses(&self) -> Vec<Course> {
        filter_by_category(&self.courses, self.prefs.category_filter.as_deref())
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// True while keystrokes belong to this screen alone (search entry
    /// or the story viewer), so global shortcuts must stay out.
    pub fn is_capturing(&self) -> bool {
        self.search_active || self.carousel.is_viewer_open()
    }

    fn selected_course(&self) -> Option<Course> {
        self.visible_courses().get(self.selected_index).cloned()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_courses().len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= len {
                self.selected_index = len - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Categories present in the fetched list, used by the cycle key.
    fn categories(&self) -> Vec<String> {
        self.courses
            .iter()
            .filter_map(|c| c.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn cycle_category(&mut self) {
        let categories = self.categories();
        let next = match &self.prefs.category_filter {
            None => categories.first().cloned(),
            Some(current) => match categories.iter().position(|c| c == current) {
                Some(pos) if pos + 1 < categories.len() => Some(categories[pos + 1].clone()),
                _ => None,
            },
        };
        // Persistence failures only lose the preference, never the screen
        if let Err(e) = self.prefs.set_category_filter(&mut self.prefs_store, next) {
            log::warn!("Failed to persist category filter: {e}");
        }
        self.clamp_selection();
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !c.is_control() => {
                self.search_buffer.push(c);
                self.debouncer.input(self.search_buffer.clone(), Instant::now());
                Action::None
            }
            KeyCode::Backspace => {
                self.search_buffer.pop();
                self.debouncer.input(self.search_buffer.clone(), Instant::now());
                Action::None
            }
            KeyCode::Enter => {
                // Commit immediately, superseding the pending debounce
                self.search_active = false;
                self.debouncer.cancel();
                Action::SearchCommitted(self.search_buffer.clone())
            }
            KeyCode::Esc => {
                self.search_active = false;
                self.search_buffer = self.committed_search.clone();
                self.debouncer.cancel();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn header_line(&self) -> Line<'static> {
        let sort_glyph = match self.prefs.sort_order {
            crate::prefs::SortOrder::Asc => self.icons.sort_asc(),
            crate::prefs::SortOrder::Desc => self.icons.sort_desc(),
        };
        let search_display = if self.search_active {
            format!("{}█", self.search_buffer)
        } else if self.committed_search.is_empty() {
            "—".to_string()
        } else {
            self.committed_search.clone()
        };

        Line::from(vec![
            Span::styled(
                format!(" {} ", self.icons.view_mode(self.prefs.view_mode)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{} ", self.prefs.view_mode.as_str()), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} {} ", self.icons.search(), search_display),
                Style::default().fg(if self.search_active { Color::Yellow } else { Color::Gray }),
            ),
            Span::styled(
                format!("status:{} ", self.prefs.status_filter.as_str()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(
                    "category:{} ",
                    self.prefs.category_filter.as_deref().unwrap_or("all")
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("sort:{}{}", self.prefs.sort_by.as_str(), sort_glyph),
                Style::default().fg(Color::Gray),
            ),
        ])
    }

    fn course_item(&self, course: &Course) -> ListItem<'static> {
        let mut spans = vec![
            Span::raw(format!("{} ", self.icons.course())),
            Span::styled(course.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ];

        if let Some(status) = course.student_course_status {
            spans.push(Span::styled(
                format!("  [{}]", status.label()),
                Style::default().fg(match status {
                    crate::models::AccessStatus::Approved => Color::Green,
                    crate::models::AccessStatus::Pending => Color::Yellow,
                    crate::models::AccessStatus::Rejected => Color::Red,
                }),
            ));
        }
        if course.is_free() {
            spans.push(Span::styled("  free", Style::default().fg(Color::Green)));
        } else {
            spans.push(Span::styled(
                format!("  {:.2}", course.price),
                Style::default().fg(Color::Gray),
            ));
        }

        // List mode adds the second detail line; grid mode keeps rows compact
        match self.prefs.view_mode {
            ViewMode::List => {
                let detail = format!(
                    "   {} lessons · {} modules · {}",
                    course.lesson_count,
                    course.module_count,
                    course.category.as_deref().unwrap_or("uncategorized"),
                );
                ListItem::new(vec![
                    Line::from(spans),
                    Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
                ])
            }
            ViewMode::Grid => ListItem::new(Line::from(spans)),
        }
    }
}

impl Component for CatalogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.carousel.is_viewer_open() {
            return self.carousel.handle_key_events(key);
        }
        if self.search_active {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.search_active = true;
                Action::None
            }
            KeyCode::Char('v') => Action::ToggleViewMode,
            KeyCode::Char('s') => Action::CycleStatusFilter,
            KeyCode::Char('c') => Action::CycleCategoryFilter,
            KeyCode::Char('S') => Action::CycleSortBy,
            KeyCode::Char('o') => Action::ToggleSortOrder,
            KeyCode::Char('y') => self.carousel.handle_key_events(key_enter()),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible_courses().len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1).min(len - 1);
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.clamp_selection();
                Action::None
            }
            KeyCode::Enter => match self.selected_course() {
                Some(course) => Action::OpenCourse(course.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CoursesLoaded(courses) => {
                self.loading = false;
                self.courses = courses;
                self.clamp_selection();
                Action::None
            }
            Action::BannersLoaded(banners) => {
                self.banners = banners;
                Action::None
            }
            Action::StoriesLoaded(stories) => {
                self.carousel.update_data(stories, Instant::now());
                Action::None
            }
            Action::SearchCommitted(ref text) => {
                self.committed_search = text.clone();
                self.loading = true;
                // Pass through so the app schedules the fetch
                action
            }
            Action::ToggleViewMode => {
                let next = self.prefs.view_mode.toggled();
                if let Err(e) = self.prefs.set_view_mode(&mut self.prefs_store, next) {
                    log::warn!("Failed to persist view mode: {e}");
                }
                Action::None
            }
            Action::CycleStatusFilter => {
                let next = self.prefs.status_filter.next();
                if let Err(e) = self.prefs.set_status_filter(&mut self.prefs_store, next) {
                    log::warn!("Failed to persist status filter: {e}");
                }
                self.loading = true;
                Action::RefreshCourses
            }
            Action::CycleCategoryFilter => {
                self.cycle_category();
                Action::None
            }
            Action::CycleSortBy => {
                let next = self.prefs.sort_by.next();
                if let Err(e) = self.prefs.set_sort_by(&mut self.prefs_store, next) {
                    log::warn!("Failed to persist sort field: {e}");
                }
                self.loading = true;
                Action::RefreshCourses
            }
            Action::ToggleSortOrder => {
                if let Err(e) = self.prefs.toggle_sort_order(&mut self.prefs_store) {
                    log::warn!("Failed to persist sort order: {e}");
                }
                self.loading = true;
                Action::RefreshCourses
            }
            Action::FetchFailed(_) => {
                // Reads that fail render as an empty list, never a crash
                self.loading = false;
                action
            }
            other => other,
        }
    }

    fn tick(&mut self, now: Instant) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(text) = self.debouncer.poll(now) {
            actions.push(Action::SearchCommitted(text));
        }
        actions.extend(self.carousel.tick(now));
        actions
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let has_banner = !self.banners.is_empty();
        let chunks = Layout::vertical([
            Constraint::Length(if has_banner { 1 } else { 0 }),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(rect);

        if let Some(banner) = self.banners.first() {
            let line = Line::from(Span::styled(
                format!(" {} ", banner.text),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
            f.render_widget(Paragraph::new(line), chunks[0]);
        }

        self.carousel.render(f, chunks[1]);
        f.render_widget(Paragraph::new(self.header_line()), chunks[2]);

        let visible = self.visible_courses();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Courses ({}) ", visible.len()));

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading…").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[3],
            );
            return;
        }
        if visible.is_empty() {
            f.render_widget(
                Paragraph::new("No courses match the current filters")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[3],
            );
            return;
        }

        let items: Vec<ListItem> = visible.iter().map(|c| self.course_item(c)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, chunks[3], &mut self.list_state);
    }

    fn on_blur(&mut self) {
        self.debouncer.cancel();
        self.carousel.teardown();
    }
}

fn key_enter() -> KeyEvent {
    KeyEvent::from(KeyCode::Enter)
}
