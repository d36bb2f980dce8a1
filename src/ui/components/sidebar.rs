//! Navigation sidebar listing the screens the current role may open.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use crate::icons::IconService;
use crate::models::Role;
use crate::ui::core::{Action, Component, Screen};

pub struct SidebarComponent {
    role: Role,
    screens: Vec<Screen>,
    selected_index: usize,
    list_state: ListState,
    icons: IconService,
}

impl SidebarComponent {
    pub fn new(role: Role) -> Self {
        // CourseDetail and Flashcards are reached from the catalog, not
        // from the sidebar.
        let screens: Vec<Screen> = [Screen::Catalog, Screen::Students, Screen::Curators]
            .into_iter()
            .filter(|s| s.visible_to(role))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            role,
            screens,
            selected_index: 0,
            list_state,
            icons: IconService,
        }
    }

    pub fn select_screen(&mut self, screen: Screen) {
        if let Some(pos) = self.screens.iter().position(|s| *s == screen) {
            self.selected_index = pos;
            self.list_state.select(Some(pos));
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.screens.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.screens.len() - 1);
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            KeyCode::Enter => match self.screens.get(self.selected_index) {
                Some(screen) => Action::NavigateTo(*screen),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self
            .screens
            .iter()
            .map(|s| ListItem::new(Line::from(Span::raw(format!(" {}", s.title())))))
            .collect();

        let title = format!(" {} {} ", self.icons.role(self.role), self.role.label());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶");
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
