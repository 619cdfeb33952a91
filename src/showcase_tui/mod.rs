//! Actor Showcase terminal user interface
//!
//! The TUI fetches the actor listing once on start, renders it as a grid of
//! cards and lets the user refetch, filter and switch theme.

pub mod app;
pub mod components;
pub mod fetch;
pub mod screens;
pub mod theme;
pub mod traits;
pub mod ui;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

pub use app::App;
pub use fetch::ActorsFetch;
pub use theme::Theme;

use crate::api::ActorSource;
use crate::config::Config;

/// Set up the terminal, run the app until the user quits, restore the terminal.
/// `startup` is applied to the app before the first frame is drawn.
pub async fn run_tui<F>(config: Config, source: Arc<dyn ActorSource>, startup: F) -> Result<()>
where
    F: FnOnce(&mut App),
{
    info!("Starting TUI interface against {}", config.api_base_url);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, source);
    startup(&mut app);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    /// Flatten a test terminal's buffer into text, one line per row
    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }
}
