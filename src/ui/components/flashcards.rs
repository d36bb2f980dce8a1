//! Flashcard review session.
//!
//! Linear, restartable traversal over a pre-fetched card sequence:
//! front → flip → back → grade → next card (flip reset) or finish.
//! Grading fires exactly one progress update per card; finishing
//! surfaces exactly one completion notice, after which the app
//! schedules navigation back to the catalog. Restart re-requests the
//! review set so server-side scheduling is reflected.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::models::{Difficulty, Flashcard, FlashcardDeck};
use crate::ui::core::{Action, Component};

/// Outcome of grading one card.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    pub card_id: String,
    pub difficulty: Difficulty,
    /// True when the graded card was the last one.
    pub finished: bool,
}

/// Pure session state; the component wraps it with key handling.
#[derive(Debug, Default)]
pub struct ReviewSession {
    deck_id: String,
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
    finished: bool,
}

impl ReviewSession {
    pub fn new(deck_id: impl Into<String>, cards: Vec<Flashcard>) -> Self {
        Self {
            deck_id: deck_id.into(),
            cards,
            index: 0,
            flipped: false,
            finished: false,
        }
    }

    pub fn deck_id(&self) -> &str {
        &self.deck_id
    }

    pub fn current(&self) -> Option<&Flashcard> {
        if self.finished {
            None
        } else {
            self.cards.get(self.index)
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Reveal the back of the current card. No-op when already flipped
    /// or finished.
    pub fn flip(&mut self) {
        if !self.finished && self.current().is_some() {
            self.flipped = true;
        }
    }

    /// Grade the current card. Only legal after a flip; advances to the
    /// next card with flip state reset, or finishes on the last card.
    pub fn grade(&mut self, difficulty: Difficulty) -> Option<GradeOutcome> {
        if self.finished || !self.flipped {
            return None;
        }
        let card = self.cards.get(self.index)?;
        let card_id = card.id.clone();

        self.flipped = false;
        if self.index + 1 < self.cards.len() {
            self.index += 1;
        } else {
            self.finished = true;
        }

        Some(GradeOutcome {
            card_id,
            difficulty,
            finished: self.finished,
        })
    }
}

pub struct FlashcardComponent {
    deck: Option<FlashcardDeck>,
    session: Option<ReviewSession>,
    loading: bool,
}

impl FlashcardComponent {
    pub fn new() -> Self {
        Self {
            deck: None,
            session: None,
            loading: false,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.session = None;
    }

    pub fn start_session(&mut self, deck: FlashcardDeck, cards: Vec<Flashcard>) {
        self.loading = false;
        self.session = Some(ReviewSession::new(deck.id.clone(), cards));
        self.deck = Some(deck);
    }

    pub fn session(&self) -> Option<&ReviewSession> {
        self.session.as_ref()
    }

    pub fn clear(&mut self) {
        self.deck = None;
        self.session = None;
        self.loading = false;
    }

    fn title(&self) -> String {
        match &self.deck {
            Some(deck) => format!(" {} ", deck.title),
            None => " Flashcards ".to_string(),
        }
    }

    fn render_card(&self, f: &mut Frame, rect: Rect, session: &ReviewSession) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(rect);

        let progress = if session.len() == 0 {
            0.0
        } else {
            session.index() as f64 / session.len() as f64
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(progress)
            .label(format!("{}/{}", session.index(), session.len()));
        f.render_widget(gauge, chunks[0]);

        let (face_title, face_text, color) = match session.current() {
            Some(card) if session.is_flipped() => (" Back ", card.back.clone(), Color::Green),
            Some(card) => (" Front ", card.front.clone(), Color::White),
            None => (" Done ", "Session complete".to_string(), Color::Yellow),
        };

        let card_widget = Paragraph::new(face_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(face_title)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(card_widget, chunks[1]);

        let hint = if session.is_finished() {
            Line::from(Span::styled("R restart  Esc back", Style::default().fg(Color::DarkGray)))
        } else if session.is_flipped() {
            Line::from(vec![
                Span::styled("1", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" easy  ", Style::default().fg(Color::Gray)),
                Span::styled("2", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" medium  ", Style::default().fg(Color::Gray)),
                Span::styled("3", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" hard", Style::default().fg(Color::Gray)),
            ])
        } else {
            Line::from(Span::styled("Space to flip  Esc back", Style::default().fg(Color::DarkGray)))
        };
        f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);
    }
}

impl Default for FlashcardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FlashcardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(session) = self.session.as_mut() else {
            return Action::None;
        };

        if session.is_finished() {
            return match key.code {
                KeyCode::Char('r' | 'R') => Action::RestartReview,
                KeyCode::Esc => Action::BackToCatalog,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                session.flip();
                Action::None
            }
            KeyCode::Char('1') => Self::grade_action(session, Difficulty::Easy),
            KeyCode::Char('2') => Self::grade_action(session, Difficulty::Medium),
            KeyCode::Char('3') => Self::grade_action(session, Difficulty::Hard),
            KeyCode::Esc => Action::BackToCatalog,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.loading {
            let loading = Paragraph::new("Loading review…")
                .block(Block::default().borders(Borders::ALL).title(self.title()))
                .alignment(Alignment::Center);
            f.render_widget(loading, rect);
            return;
        }

        match &self.session {
            Some(session) if !session.is_empty() => self.render_card(f, rect, session),
            _ => {
                let empty = Paragraph::new("No cards due for review")
                    .block(Block::default().borders(Borders::ALL).title(self.title()))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(empty, rect);
            }
        }
    }
}

impl FlashcardComponent {
    fn grade_action(session: &mut ReviewSession, difficulty: Difficulty) -> Action {
        match session.grade(difficulty) {
            Some(outcome) => Action::CardGraded {
                deck_id: session.deck_id().to_string(),
                card_id: outcome.card_id,
                difficulty: outcome.difficulty,
            },
            None => Action::None,
        }
    }
}
