//! Modal dialogs: confirmations, input forms, help and logs overlays.
//!
//! One component owns whichever dialog is open. Confirmations emit the
//! matching action and close; input forms validate inline and stay open
//! until the input passes or the user cancels.

pub mod common;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::logger::Logger;
use crate::models::AccessStatus;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;

use common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
}

/// Buffers for the create/edit input forms.
#[derive(Default)]
struct FormState {
    name: String,
    email: String,
    field: Option<FormField>,
    error: Option<String>,
}

impl FormState {
    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.field = None;
        self.error = None;
    }

    fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.field? {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
        }
    }
}

pub struct DialogComponent {
    dialog: Option<DialogType>,
    form: FormState,
    logger: Option<Logger>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog: None,
            form: FormState::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn open(&mut self, dialog: DialogType) {
        self.form.reset();
        match &dialog {
            DialogType::CreateStudent | DialogType::CreateCurator => {
                self.form.field = Some(FormField::Name);
            }
            DialogType::EditCurator { name, .. } => {
                self.form.name = name.clone();
                self.form.field = Some(FormField::Name);
            }
            _ => {}
        }
        self.dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.dialog = None;
        self.form.reset();
    }

    fn validate_name(&mut self) -> bool {
        if self.form.name.trim().is_empty() {
            self.form.error = Some("Name must not be empty".to_string());
            return false;
        }
        true
    }

    fn validate_email(&mut self) -> bool {
        if !self.form.email.contains('@') {
            self.form.error = Some("Email must contain @".to_string());
            return false;
        }
        true
    }

    /// Confirmation dialogs: a yes key emits the action, everything else
    /// is ignored or closes.
    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        let dialog = match &self.dialog {
            Some(d) => d.clone(),
            None => return Action::None,
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => {
                self.close();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('y') => match dialog {
                DialogType::RequestAccess { course_id, .. } => Action::RequestAccess(course_id),
                DialogType::ExtendAccess { course_id, .. } => Action::ExtendAccess(course_id),
                DialogType::ResetStudentPassword { student_id, .. } => {
                    Action::ResetStudentPassword(student_id)
                }
                DialogType::ResetCuratorPassword { curator_id, .. } => {
                    Action::ResetCuratorPassword(curator_id)
                }
                DialogType::DeleteCurator { curator_id, .. } => Action::DeleteCurator(curator_id),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_student_course_key(&mut self, key: KeyEvent) -> Action {
        let (student_id, course_id) = match &self.dialog {
            Some(DialogType::StudentCourse {
                student_id,
                course_id,
                ..
            }) => (student_id.clone(), course_id.clone()),
            _ => return Action::None,
        };

        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            KeyCode::Char('a') => Action::ApproveStudentCourse {
                student_id,
                course_id,
            },
            KeyCode::Char('x') => Action::RejectStudentCourse {
                student_id,
                course_id,
            },
            KeyCode::Char('d') => Action::DetachStudentCourse {
                student_id,
                course_id,
            },
            _ => Action::None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        let dialog = match &self.dialog {
            Some(d) => d.clone(),
            None => return Action::None,
        };
        let has_email = matches!(dialog, DialogType::CreateStudent | DialogType::CreateCurator);

        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            KeyCode::Tab => {
                if has_email {
                    self.form.field = match self.form.field {
                        Some(FormField::Name) => Some(FormField::Email),
                        _ => Some(FormField::Name),
                    };
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.form.buffer_mut() {
                    buffer.pop();
                }
                self.form.error = None;
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.form.buffer_mut() {
                    buffer.push(c);
                }
                self.form.error = None;
                Action::None
            }
            KeyCode::Enter => {
                if !self.validate_name() {
                    return Action::None;
                }
                if has_email && !self.validate_email() {
                    return Action::None;
                }
                let name = self.form.name.trim().to_string();
                let email = self.form.email.trim().to_string();
                match dialog {
                    DialogType::CreateStudent => Action::CreateStudent { name, email },
                    DialogType::CreateCurator => Action::CreateCurator { name, email },
                    DialogType::EditCurator { curator_id, .. } => Action::EditCurator {
                        curator_id,
                        name,
                    },
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect, title: &str, body: Vec<Line>, color: Color) {
        let rect = LayoutManager::centered_rect(55, 30, area);
        f.render_widget(Clear, rect);

        let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
            .margin(1)
            .split(rect);

        f.render_widget(create_dialog_block(title, color), rect);
        f.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[0]);
        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::Y_CONFIRM,
                shortcuts::SEPARATOR,
                shortcuts::N_CANCEL,
            ]),
            chunks[1],
        );
    }

    fn render_form(&self, f: &mut Frame, area: Rect, title: &str, has_email: bool) {
        let rect = LayoutManager::centered_rect(55, 45, area);
        f.render_widget(Clear, rect);

        let mut constraints = vec![Constraint::Length(3)];
        if has_email {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::vertical(constraints).margin(1).split(rect);

        f.render_widget(create_dialog_block(title, Color::Cyan), rect);
        f.render_widget(
            create_input_paragraph(&self.form.name, "Name", self.form.field == Some(FormField::Name)),
            chunks[0],
        );
        let mut next = 1;
        if has_email {
            f.render_widget(
                create_input_paragraph(
                    &self.form.email,
                    "Email",
                    self.form.field == Some(FormField::Email),
                ),
                chunks[next],
            );
            next += 1;
        }

        if let Some(error) = &self.form.error {
            f.render_widget(
                Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
                chunks[next],
            );
        }
        let mut instructions = vec![shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR];
        if has_email {
            instructions.push(shortcuts::TAB_FIELD);
            instructions.push(shortcuts::SEPARATOR);
        }
        instructions.push(shortcuts::ESC_CANCEL);
        f.render_widget(create_instructions_paragraph(&instructions), chunks[next + 1]);
    }

    fn render_message(&self, f: &mut Frame, area: Rect, title: &str, text: &str, color: Color) {
        let rect = LayoutManager::centered_rect(60, 40, area);
        f.render_widget(Clear, rect);

        let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
            .margin(1)
            .split(rect);

        f.render_widget(create_dialog_block(title, color), rect);
        f.render_widget(
            Paragraph::new(text.to_string()).wrap(Wrap { trim: true }),
            chunks[0],
        );
        f.render_widget(
            create_instructions_paragraph(&[("Esc", Color::Red, " Close")]),
            chunks[1],
        );
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let rect = LayoutManager::centered_rect(60, 70, area);
        f.render_widget(Clear, rect);

        let lines: Vec<Line> = [
            ("Navigation", ""),
            ("  j/k", "move selection"),
            ("  Tab", "cycle screens"),
            ("  Enter", "open / confirm"),
            ("  Esc", "back / close"),
            ("Catalog", ""),
            ("  /", "search (debounced)"),
            ("  v", "toggle grid/list view"),
            ("  s", "cycle status filter"),
            ("  c", "cycle category filter"),
            ("  S", "cycle sort field"),
            ("  o", "toggle sort order"),
            ("  y", "open story viewer"),
            ("Course", ""),
            ("  r", "request access"),
            ("  x", "extend access"),
            ("  f", "review flashcards"),
            ("Flashcards", ""),
            ("  Space", "flip card"),
            ("  1/2/3", "grade easy/medium/hard"),
            ("General", ""),
            ("  r", "refresh data"),
            ("  t", "contact support"),
            ("  G", "show logs"),
            ("  `", "dismiss toast"),
            ("  q", "quit"),
        ]
        .iter()
        .map(|(key, desc)| {
            if desc.is_empty() {
                Line::from(Span::styled(
                    key.to_string(),
                    Style::default().fg(Color::Cyan),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:<10}"), Style::default().fg(Color::Yellow)),
                    Span::styled(desc.to_string(), Style::default().fg(Color::Gray)),
                ])
            }
        })
        .collect();

        let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
            .margin(1)
            .split(rect);
        f.render_widget(create_dialog_block(" Help ", Color::Cyan), rect);
        f.render_widget(Paragraph::new(lines), chunks[0]);
        f.render_widget(
            create_instructions_paragraph(&[("Esc", Color::Red, " Close")]),
            chunks[1],
        );
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let rect = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, rect);

        let logs = self
            .logger
            .as_ref()
            .map(|l| l.get_logs())
            .unwrap_or_default();
        let lines: Vec<Line> = if logs.is_empty() {
            vec![Line::from(Span::styled(
                "No log entries",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            logs.iter().map(|entry| Line::from(entry.clone())).collect()
        };

        let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
            .margin(1)
            .split(rect);
        f.render_widget(create_dialog_block(" Logs ", Color::Yellow), rect);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
        f.render_widget(
            create_instructions_paragraph(&[
                ("Esc", Color::Red, " Close"),
                shortcuts::SEPARATOR,
                ("c", Color::Yellow, " Clear"),
            ]),
            chunks[1],
        );
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let dialog = match &self.dialog {
            Some(d) => d,
            None => return Action::None,
        };

        match dialog {
            DialogType::RequestAccess { .. }
            | DialogType::ExtendAccess { .. }
            | DialogType::ResetStudentPassword { .. }
            | DialogType::ResetCuratorPassword { .. }
            | DialogType::DeleteCurator { .. } => self.handle_confirm_key(key),
            DialogType::StudentCourse { .. } => self.handle_student_course_key(key),
            DialogType::CreateStudent
            | DialogType::CreateCurator
            | DialogType::EditCurator { .. } => self.handle_form_key(key),
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.close();
                    Action::None
                }
                KeyCode::Char('c') => {
                    if let Some(logger) = &self.logger {
                        logger.clear();
                    }
                    Action::None
                }
                _ => Action::None,
            },
            DialogType::Error(_) | DialogType::Info(_) | DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.close();
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog = match &self.dialog {
            Some(d) => d.clone(),
            None => return,
        };

        match dialog {
            DialogType::RequestAccess {
                title, price, ..
            } => {
                let body = if price <= 0.0 {
                    vec![
                        Line::from(format!("Request access to \"{title}\"?")),
                        Line::from(Span::styled(
                            "This course is free.",
                            Style::default().fg(Color::Green),
                        )),
                    ]
                } else {
                    vec![
                        Line::from(format!("Request access to \"{title}\"?")),
                        Line::from(Span::styled(
                            format!("Price: {price:.2}"),
                            Style::default().fg(Color::Yellow),
                        )),
                    ]
                };
                self.render_confirm(f, rect, " Request access ", body, Color::Cyan);
            }
            DialogType::ExtendAccess { title, .. } => {
                let body = vec![Line::from(format!("Extend access to \"{title}\"?"))];
                self.render_confirm(f, rect, " Extend access ", body, Color::Cyan);
            }
            DialogType::StudentCourse {
                course_id, status, ..
            } => {
                let rect_inner = LayoutManager::centered_rect(55, 35, rect);
                f.render_widget(Clear, rect_inner);
                let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
                    .margin(1)
                    .split(rect_inner);
                f.render_widget(create_dialog_block(" Course access ", Color::Cyan), rect_inner);
                let status_color = match status {
                    AccessStatus::Approved => Color::Green,
                    AccessStatus::Pending => Color::Yellow,
                    AccessStatus::Rejected => Color::Red,
                };
                f.render_widget(
                    Paragraph::new(vec![
                        Line::from(format!("Course: {course_id}")),
                        Line::from(vec![
                            Span::raw("Status: "),
                            Span::styled(status.label(), Style::default().fg(status_color)),
                        ]),
                    ]),
                    chunks[0],
                );
                f.render_widget(
                    create_instructions_paragraph(&[
                        ("a", Color::Green, " Approve"),
                        shortcuts::SEPARATOR,
                        ("x", Color::Red, " Reject"),
                        shortcuts::SEPARATOR,
                        ("d", Color::Yellow, " Detach"),
                        shortcuts::SEPARATOR,
                        ("Esc", Color::Gray, " Close"),
                    ]),
                    chunks[1],
                );
            }
            DialogType::ResetStudentPassword { name, .. }
            | DialogType::ResetCuratorPassword { name, .. } => {
                let body = vec![Line::from(format!("Reset password for {name}?"))];
                self.render_confirm(f, rect, " Reset password ", body, Color::Yellow);
            }
            DialogType::DeleteCurator { name, .. } => {
                let body = vec![
                    Line::from(format!("Delete curator {name}?")),
                    Line::from(Span::styled(
                        "This cannot be undone.",
                        Style::default().fg(Color::Red),
                    )),
                ];
                self.render_confirm(f, rect, " Delete curator ", body, Color::Red);
            }
            DialogType::CreateStudent => self.render_form(f, rect, " New student ", true),
            DialogType::CreateCurator => self.render_form(f, rect, " New curator ", true),
            DialogType::EditCurator { .. } => self.render_form(f, rect, " Edit curator ", false),
            DialogType::Error(message) => {
                self.render_message(f, rect, " Error ", &message, Color::Red)
            }
            DialogType::Info(message) => {
                self.render_message(f, rect, " Info ", &message, Color::Cyan)
            }
            DialogType::Help => self.render_help(f, rect),
            DialogType::Logs => self.render_logs(f, rect),
        }
    }
}
