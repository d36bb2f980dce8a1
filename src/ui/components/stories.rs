//! Story carousel: passive auto-advancing strip plus an explicit
//! full-screen viewer.
//!
//! The strip advances every five seconds, wrapping modulo the item
//! count; the timer is cleared whenever the list is empty or the screen
//! is torn down. The viewer records a "viewed" event exactly once per
//! entry and per manual navigation step — never from the passive
//! auto-advance.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

use crate::constants::STORY_ADVANCE_SECS;
use crate::models::Story;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::Countdown;

pub struct StoryCarousel {
    stories: Vec<Story>,
    strip_index: usize,
    advance: Countdown,
    /// Index into `stories` while the full-screen viewer is open.
    viewer: Option<usize>,
}

impl StoryCarousel {
    pub fn new() -> Self {
        Self {
            stories: Vec::new(),
            strip_index: 0,
            advance: Countdown::new(Duration::from_secs(STORY_ADVANCE_SECS)),
            viewer: None,
        }
    }

    pub fn update_data(&mut self, stories: Vec<Story>, now: Instant) {
        self.stories = stories;
        self.strip_index = 0;
        self.viewer = None;
        if self.stories.is_empty() {
            self.advance.cancel();
        } else {
            self.advance.start(now);
        }
    }

    pub fn strip_index(&self) -> usize {
        self.strip_index
    }

    pub fn viewer_index(&self) -> Option<usize> {
        self.viewer
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Advance the passive strip if the interval elapsed. Records nothing.
    pub fn advance_strip(&mut self, now: Instant) -> bool {
        if self.stories.is_empty() {
            return false;
        }
        if self.advance.poll_repeating(now) {
            self.strip_index = (self.strip_index + 1) % self.stories.len();
            true
        } else {
            false
        }
    }

    /// Open the viewer on the story currently shown in the strip.
    /// Returns the story id to record a view for.
    pub fn open_viewer(&mut self) -> Option<String> {
        if self.stories.is_empty() {
            return None;
        }
        let index = self.strip_index;
        self.viewer = Some(index);
        Some(self.stories[index].id.clone())
    }

    /// Manual next inside the viewer; disabled at the last story.
    pub fn viewer_next(&mut self) -> Option<String> {
        let index = self.viewer?;
        if index + 1 >= self.stories.len() {
            return None;
        }
        self.viewer = Some(index + 1);
        Some(self.stories[index + 1].id.clone())
    }

    /// Manual previous inside the viewer; disabled at the first story.
    pub fn viewer_previous(&mut self) -> Option<String> {
        let index = self.viewer?;
        if index == 0 {
            return None;
        }
        self.viewer = Some(index - 1);
        Some(self.stories[index - 1].id.clone())
    }

    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }

    /// Stop the auto-advance timer; called on screen teardown so no tick
    /// fires against a dismantled strip.
    pub fn teardown(&mut self) {
        self.advance.cancel();
        self.viewer = None;
    }

    fn render_strip(&self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Stories ");

        if self.stories.is_empty() {
            f.render_widget(Paragraph::new("").block(block), rect);
            return;
        }

        let story = &self.stories[self.strip_index];
        let dots: String = (0..self.stories.len())
            .map(|i| if i == self.strip_index { '●' } else { '○' })
            .collect();

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", story.title),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(dots, Style::default().fg(Color::DarkGray)),
            Span::styled("  Enter to open", Style::default().fg(Color::DarkGray)),
        ]);

        f.render_widget(Paragraph::new(line).block(block), rect);
    }

    fn render_viewer(&self, f: &mut Frame) {
        let Some(index) = self.viewer else { return };
        let Some(story) = self.stories.get(index) else { return };

        let area = LayoutManager::centered_rect(70, 60, f.area());
        f.render_widget(Clear, area);

        let at_start = index == 0;
        let at_end = index + 1 == self.stories.len();
        let nav = Line::from(vec![
            Span::styled(
                "← prev",
                if at_start {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ),
            Span::raw("  "),
            Span::styled(
                "next →",
                if at_end {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ),
            Span::styled("   Esc close", Style::default().fg(Color::DarkGray)),
        ]);

        let mut lines = vec![
            Line::from(Span::styled(
                story.title.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(body) = &story.body {
            lines.push(Line::from(body.clone()));
            lines.push(Line::from(""));
        }
        lines.push(nav);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" Story {}/{} ", index + 1, self.stories.len())),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }
}

impl Default for StoryCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StoryCarousel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.viewer.is_some() {
            return match key.code {
                KeyCode::Right | KeyCode::Char('l') => match self.viewer_next() {
                    Some(story_id) => Action::RecordStoryView(story_id),
                    None => Action::None,
                },
                KeyCode::Left | KeyCode::Char('h') => match self.viewer_previous() {
                    Some(story_id) => Action::RecordStoryView(story_id),
                    None => Action::None,
                },
                KeyCode::Esc => {
                    self.close_viewer();
                    Action::None
                }
                _ => Action::None,
            };
        }

        if key.code == KeyCode::Enter {
            if let Some(story_id) = self.open_viewer() {
                return Action::RecordStoryView(story_id);
            }
        }
        Action::None
    }

    fn tick(&mut self, now: Instant) -> Vec<Action> {
        self.advance_strip(now);
        Vec::new()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_strip(f, rect);
        if self.viewer.is_some() {
            self.render_viewer(f);
        }
    }

    fn on_blur(&mut self) {
        self.teardown();
    }
}
