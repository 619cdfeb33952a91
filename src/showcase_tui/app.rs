//! Main TUI application state and logic

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::components::StatusDisplay;
use super::fetch::{ActorsFetch, FetchPhase};
use super::screens::{help::SHORTCUTS, ActorsScreen, HelpScreen, StatsScreen};
use super::theme::Theme;
use super::traits::ScreenAction;
use super::ui::{centered_rect, Styles};
use crate::api::ActorSource;
use crate::config::Config;

const TICK_RATE: Duration = Duration::from_millis(100);
/// How long info and success messages cover the shortcut hint
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Actors,
    Stats,
    Help,
}

impl Screen {
    const ALL: [Screen; 3] = [Screen::Actors, Screen::Stats, Screen::Help];

    pub fn title(&self) -> &str {
        match self {
            Screen::Actors => "Actors",
            Screen::Stats => "Statistics",
            Screen::Help => "Help",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(&self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main TUI application state
pub struct App {
    /// Current active screen
    pub current_screen: Screen,
    /// Previous screen for navigation
    pub previous_screen: Option<Screen>,
    /// Application configuration
    pub config: Config,
    pub theme: Theme,
    /// Listing fetch lifecycle
    pub fetch: ActorsFetch,

    // Screen states
    pub actors: ActorsScreen,
    pub stats: StatsScreen,
    pub help: HelpScreen,

    // Global application state
    pub status: StatusDisplay,
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App {
    /// Create the application and start the first fetch.
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config, source: Arc<dyn ActorSource>) -> Self {
        let mut status = StatusDisplay::new()
            .with_timestamps()
            .with_auto_clear(STATUS_CLEAR_AFTER);
        status.set_loading("Fetching actors...".to_string());

        Self {
            current_screen: Screen::Actors,
            previous_screen: None,
            theme: config.theme,
            actors: ActorsScreen::new(&config.api_base_url),
            config,
            fetch: ActorsFetch::mount(source),
            stats: StatsScreen::new(),
            help: HelpScreen::new(),
            status,
            should_quit: false,
            show_help_popup: false,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.tick();

            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }

            if self.should_quit {
                break;
            }
        }

        info!("Application loop completed");
        Ok(())
    }

    /// Apply finished fetches and refresh derived state
    pub fn tick(&mut self) {
        if self.status.should_auto_clear() {
            self.status.clear();
        }

        if !self.fetch.poll() {
            return;
        }

        match self.fetch.phase() {
            FetchPhase::Success => {
                let count = self.fetch.records().len();
                self.status.set_success(format!("Loaded {} actors", count));
            }
            FetchPhase::Failed => {
                let message = self.fetch.error_message().unwrap_or("Fetch failed").to_string();
                self.status.set_error(message);
            }
            FetchPhase::Idle | FetchPhase::Loading => {}
        }

        self.actors.sync_with(self.fetch.records());
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.show_help_popup = !self.show_help_popup;
                return;
            }
            KeyCode::Esc => {
                if self.show_help_popup {
                    self.show_help_popup = false;
                } else if self.current_screen != Screen::Actors {
                    self.go_back();
                }
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return;
            }
            KeyCode::Char('r') => {
                self.refetch();
                return;
            }
            KeyCode::Char('s') => {
                let target = if self.current_screen == Screen::Stats {
                    Screen::Actors
                } else {
                    Screen::Stats
                };
                self.navigate_to_screen(target);
                return;
            }
            KeyCode::Tab => {
                self.navigate_to_screen(self.current_screen.next());
                return;
            }
            KeyCode::BackTab => {
                self.navigate_to_screen(self.current_screen.previous());
                return;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.navigate_to_screen(Screen::ALL[index]);
                return;
            }
            _ => {}
        }

        if self.show_help_popup {
            return;
        }

        let action = match self.current_screen {
            Screen::Actors => self.actors.handle_key_event(key, &self.fetch),
            Screen::Stats => ScreenAction::None,
            Screen::Help => {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => self.help.scroll_up(),
                    KeyCode::Down | KeyCode::Char('j') => self.help.scroll_down(),
                    _ => {}
                }
                ScreenAction::None
            }
        };

        self.apply_action(action);
    }

    fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Refetch => self.refetch(),
            ScreenAction::SetStatus(message) => self.status.set_info(message),
            ScreenAction::None => {}
        }
    }

    pub fn refetch(&mut self) {
        self.fetch.refetch();
        self.status.set_loading("Fetching actors...".to_string());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {}", self.theme);
        self.status.set_info(format!("Theme: {}", self.theme));
    }

    /// Navigate to a specific screen
    pub fn navigate_to_screen(&mut self, screen: Screen) {
        if screen == self.current_screen {
            return;
        }
        self.previous_screen = Some(self.current_screen);
        self.current_screen = screen;
    }

    /// Return to the screen we came from, or the actor grid
    pub fn go_back(&mut self) {
        let target = self.previous_screen.take().unwrap_or(Screen::Actors);
        if target != self.current_screen {
            self.current_screen = target;
        }
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();
        let styles = Styles::new(self.theme);

        f.render_widget(Block::default().style(styles.base()), size);

        // Main layout: status bar at bottom, content area above
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        match self.current_screen {
            Screen::Actors => self.actors.draw(f, chunks[0], &self.fetch, &styles),
            Screen::Stats => self.stats.draw(f, chunks[0], &self.fetch, &styles),
            Screen::Help => self.help.draw(f, chunks[0], &styles),
        }

        self.status.render(f, chunks[1], &styles, &self.status_hint());

        if self.show_help_popup {
            self.draw_help_popup(f, size, &styles);
        }
    }

    fn status_hint(&self) -> String {
        format!(
            "Actor Showcase - {} | r: Refresh | t: Theme ({}) | Tab: Switch | ?: Help | q: Quit",
            self.current_screen.title(),
            self.theme
        )
    }

    /// Draw help popup with the shortcut list
    fn draw_help_popup(&self, f: &mut Frame, area: Rect, styles: &Styles) {
        let popup_area = centered_rect(70, 70, area);

        f.render_widget(Clear, popup_area);

        let help_content: String = SHORTCUTS
            .iter()
            .map(|(keys, action)| format!("{:<18}{}\n", keys, action))
            .collect();

        let help_popup = Paragraph::new(help_content)
            .style(styles.base())
            .block(
                Block::default()
                    .title("Help - Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(styles.title()),
            );

        f.render_widget(help_popup, popup_area);
    }
}
