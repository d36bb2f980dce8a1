//! Students admin screen.
//!
//! Lists students with their course access records; actions on a record
//! (approve / reject / detach) go through a chooser dialog and re-fetch
//! after the mutation lands.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::models::{Student, StudentCourse};
use crate::ui::core::{Action, Component, DialogType};
use crate::utils::datetime::{days_remaining, format_access_window};

pub struct StudentsComponent {
    students: Vec<Student>,
    selected_student: usize,
    selected_course: usize,
    list_state: ListState,
    loading: bool,
    icons: IconService,
}

impl StudentsComponent {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            selected_student: 0,
            selected_course: 0,
            list_state: ListState::default(),
            loading: true,
            icons: IconService,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    fn current_student(&self) -> Option<&Student> {
        self.students.get(self.selected_student)
    }

    fn current_record(&self) -> Option<(&Student, &StudentCourse)> {
        let student = self.current_student()?;
        student.courses.get(self.selected_course).map(|c| (student, c))
    }

    fn clamp(&mut self) {
        if self.students.is_empty() {
            self.selected_student = 0;
            self.list_state.select(None);
        } else {
            if self.selected_student >= self.students.len() {
                self.selected_student = self.students.len() - 1;
            }
            let courses = self.students[self.selected_student].courses.len();
            if courses == 0 {
                self.selected_course = 0;
            } else if self.selected_course >= courses {
                self.selected_course = courses - 1;
            }
            self.list_state.select(Some(self.selected_student));
        }
    }

    fn student_item(&self, index: usize, student: &Student) -> ListItem<'static> {
        let mut lines = vec![Line::from(vec![
            Span::styled(student.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", student.email.as_deref().unwrap_or("")),
                Style::default().fg(Color::DarkGray),
            ),
        ])];

        for (ci, record) in student.courses.iter().enumerate() {
            let selected = index == self.selected_student && ci == self.selected_course;
            let marker = if selected { "›" } else { " " };
            let remaining = match days_remaining(record.access_end) {
                Some(days) if days >= 0 => format!(" ({days}d left)"),
                Some(_) => " (expired)".to_string(),
                None => String::new(),
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "  {marker} {} {} · {} · {}{}",
                    self.icons.access_status(record.status),
                    record.course_id,
                    record.status.label(),
                    format_access_window(record.access_start, record.access_end),
                    remaining,
                ),
                if selected {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                },
            )));
        }
        ListItem::new(lines)
    }
}

impl Default for StudentsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StudentsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.students.is_empty() {
                    self.selected_student = (self.selected_student + 1).min(self.students.len() - 1);
                    self.selected_course = 0;
                    self.clamp();
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_student = self.selected_student.saturating_sub(1);
                self.selected_course = 0;
                self.clamp();
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(student) = self.current_student() {
                    if !student.courses.is_empty() {
                        self.selected_course = (self.selected_course + 1).min(student.courses.len() - 1);
                    }
                }
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_course = self.selected_course.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter => match self.current_record() {
                Some((student, record)) => Action::ShowDialog(DialogType::StudentCourse {
                    student_id: student.id.clone(),
                    course_id: record.course_id.clone(),
                    status: record.status,
                }),
                None => Action::None,
            },
            KeyCode::Char('p') => match self.current_student() {
                Some(student) => Action::ShowDialog(DialogType::ResetStudentPassword {
                    student_id: student.id.clone(),
                    name: student.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('A') => Action::ShowDialog(DialogType::CreateStudent),
            KeyCode::Char('e') => Action::ExportStudents,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::StudentsLoaded(students) => {
                self.loading = false;
                self.students = students;
                self.clamp();
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
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Students ({}) ", self.students.len()));

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading…").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        } else if self.students.is_empty() {
            f.render_widget(
                Paragraph::new("No students").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        } else {
            let items: Vec<ListItem> = self
                .students
                .iter()
                .enumerate()
                .map(|(i, s)| self.student_item(i, s))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray));
            f.render_stateful_widget(list, chunks[0], &mut self.list_state);
        }

        let hints = Line::from(Span::styled(
            "Enter manage access · ←/→ pick course · p reset password · A new student · e export",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(hints), chunks[1]);
    }
}
