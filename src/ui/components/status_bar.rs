//! Bottom status bar: current screen, background activity, key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::core::Screen;

#[derive(Default)]
pub struct StatusBar {
    pub screen: Screen,
    pub loading: bool,
    pub active_tasks: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let activity = if self.loading {
            Span::styled(" ⟳ loading ", Style::default().fg(Color::Yellow))
        } else if self.active_tasks > 0 {
            Span::styled(
                format!(" {} task(s) ", self.active_tasks),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(" idle ", Style::default().fg(Color::Green))
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.screen.title()), Style::default().fg(Color::Cyan)),
            activity,
            Span::styled(
                "Tab screens · r refresh · ? help · G logs · q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(line), rect);
    }
}
