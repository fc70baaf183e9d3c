//! The interactive dashboard: terminal setup, the event loop, and the
//! state and rendering modules behind it.

pub mod input;
pub mod state;
pub mod ui;

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::config::AppConfig;
use state::AppState;

/// Run the dashboard until the user quits.
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(config.ui.start_page, config.ui.units, Local::now());
    debug!(page = state.page.title(), "dashboard opened");

    // Capture the loop result so the terminal is restored even when
    // drawing fails.
    let result = run_loop(&mut terminal, &mut state, config.ui.tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    tick_rate: Duration,
) -> crate::Result<()> {
    loop {
        state.tick();
        terminal.draw(|frame| ui::draw_ui(frame, state))?;

        if state.exit_requested() {
            break;
        }

        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                input::handle_key(key, state);
            }
        }
    }
    Ok(())
}
