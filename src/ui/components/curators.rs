//! Curators admin screen (admin role only).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Curator;
use crate::ui::core::{Action, Component, DialogType};

pub struct CuratorsComponent {
    curators: Vec<Curator>,
    selected_index: usize,
    list_state: ListState,
    loading: bool,
}

impl CuratorsComponent {
    pub fn new() -> Self {
        Self {
            curators: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            loading: true,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    fn selected(&self) -> Option<&Curator> {
        self.curators.get(self.selected_index)
    }

    fn clamp(&mut self) {
        if self.curators.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.curators.len() {
                self.selected_index = self.curators.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Default for CuratorsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CuratorsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.curators.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.curators.len() - 1);
                    self.clamp();
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.clamp();
                Action::None
            }
            KeyCode::Char('A') => Action::ShowDialog(DialogType::CreateCurator),
            KeyCode::Char('E') => match self.selected() {
                Some(curator) => Action::ShowDialog(DialogType::EditCurator {
                    curator_id: curator.id.clone(),
                    name: curator.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('D') => match self.selected() {
                Some(curator) => Action::ShowDialog(DialogType::DeleteCurator {
                    curator_id: curator.id.clone(),
                    name: curator.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('p') => match self.selected() {
                Some(curator) => Action::ShowDialog(DialogType::ResetCuratorPassword {
                    curator_id: curator.id.clone(),
                    name: curator.name.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CuratorsLoaded(curators) => {
                self.loading = false;
                self.curators = curators;
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
            .title(format!(" Curators ({}) ", self.curators.len()));

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading…").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        } else if self.curators.is_empty() {
            f.render_widget(
                Paragraph::new("No curators").block(block).style(Style::default().fg(Color::DarkGray)),
                chunks[0],
            );
        } else {
            let items: Vec<ListItem> = self
                .curators
                .iter()
                .map(|c| {
                    ListItem::new(Line::from(vec![
                        Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(
                            format!("  {}", c.email.as_deref().unwrap_or("")),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("▶ ");
            f.render_stateful_widget(list, chunks[0], &mut self.list_state);
        }

        let hints = Line::from(Span::styled(
            "A new · E edit · D delete · p reset password",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(hints), chunks[1]);
    }
}
