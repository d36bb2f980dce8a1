//! Toast notification stack.
//!
//! Append-only queue keyed by a locally generated monotonic id. Each
//! toast carries its own expiry deadline and is removed on the first
//! tick at or after it; manual dismissal removes it immediately, which
//! is also what cancels its timer. Repeated messages are not coalesced.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::constants::TOAST_DEFAULT_MS;
use crate::ui::core::{Action, Component, ToastSeverity};

/// Ephemeral client-only entity; never round-trips to the server.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast with the default duration.
    pub fn push(&mut self, message: impl Into<String>, severity: ToastSeverity, now: Instant) -> u64 {
        self.push_with_duration(message, severity, Duration::from_millis(TOAST_DEFAULT_MS), now)
    }

    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        severity: ToastSeverity,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            deadline: now + duration,
        });
        id
    }

    /// Remove every toast whose deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| now < t.deadline);
    }

    /// Remove a toast before its deadline.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn style_for(severity: ToastSeverity) -> (Color, &'static str) {
        match severity {
            ToastSeverity::Info => (Color::Cyan, "ℹ"),
            ToastSeverity::Success => (Color::Green, "✔"),
            ToastSeverity::Error => (Color::Red, "✖"),
        }
    }
}

impl Component for ToastStack {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Backtick dismisses the oldest toast; toasts are otherwise
        // non-interactive.
        if key.code == KeyCode::Char('`') {
            if let Some(first) = self.toasts.first() {
                return Action::DismissToast(first.id);
            }
        }
        Action::None
    }

    fn tick(&mut self, now: Instant) -> Vec<Action> {
        self.expire(now);
        Vec::new()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Stacked in arrival order, bottom-up from the bottom edge of
        // the given rect.
        let bottom = rect.y + rect.height;
        for (i, toast) in self.toasts.iter().enumerate() {
            let y = bottom.saturating_sub((i as u16 + 1) * 3);
            if y < rect.y {
                break;
            }
            let width = (toast.message.len() as u16 + 6).min(rect.width).max(20);
            let area = Rect {
                x: rect.x + rect.width.saturating_sub(width),
                y,
                width,
                height: 3,
            };

            let (color, glyph) = Self::style_for(toast.severity);
            let paragraph = Paragraph::new(Line::from(vec![
                Span::styled(format!(" {glyph} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(toast.message.clone()),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(color)),
            );

            f.render_widget(Clear, area);
            f.render_widget(paragraph, area);
        }
    }
}
