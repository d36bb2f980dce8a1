//! Terminal lifecycle and the main event loop.

use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

use super::app_component::AppComponent;
use super::core::{AppContext, EventHandler, EventType};

/// Run the application until the user quits. Sets up the alternate
/// screen and raw mode, and restores the terminal on the way out even
/// when the loop errors.
pub async fn run_app(context: AppContext) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(context);
    let result = event_loop(&mut terminal, &mut app).await;

    app.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppComponent,
) -> Result<()> {
    let mut event_handler = EventHandler::new();

    loop {
        terminal.draw(|f| app.render(f))?;

        match event_handler.next_event().await? {
            EventType::Key(key) => app.handle_event(Event::Key(key)).await?,
            EventType::Resize(_, _) | EventType::Other => {}
            EventType::Tick => app.tick(Instant::now()).await?,
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
