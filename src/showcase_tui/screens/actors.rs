//! Actor grid screen
//!
//! Rendering is decided by [`select_view`] from the fetch state alone:
//! loading wins over everything, then errors, then the empty placeholder,
//! and only then the card grid.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Actor, ActorFilter};
use crate::showcase_tui::{
    components::{ActorCard, CARD_HEIGHT},
    fetch::ActorsFetch,
    traits::{Navigable, ScreenAction},
    ui::{centered_rect, Styles},
};

/// What the actor screen shows for a given fetch state
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Cards(Vec<&'a Actor>),
}

pub fn select_view<'a>(
    is_loading: bool,
    error_message: Option<&'a str>,
    records: &'a [Actor],
    filter: &ActorFilter,
) -> ListView<'a> {
    if is_loading {
        return ListView::Loading;
    }
    if let Some(message) = error_message {
        return ListView::Error(message);
    }
    let visible = filter.apply(records);
    if visible.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(visible)
    }
}

/// Number of card columns for a given width
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

pub struct ActorsScreen {
    pub filter: ActorFilter,
    api_url: String,
    selected: Option<usize>,
    /// Card keys in display order
    item_ids: Vec<i64>,
    columns: usize,
    scroll_row: usize,
}

impl ActorsScreen {
    pub fn new(api_url: &str) -> Self {
        Self {
            filter: ActorFilter::default(),
            api_url: api_url.to_string(),
            selected: None,
            item_ids: Vec::new(),
            columns: 1,
            scroll_row: 0,
        }
    }

    /// Id of the highlighted actor
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.and_then(|i| self.item_ids.get(i).copied())
    }

    /// Re-read the visible cards from the fetched records
    pub fn sync_with(&mut self, records: &[Actor]) {
        let ids = self
            .filter
            .apply(records)
            .into_iter()
            .map(|actor| ActorCard::new(actor).key())
            .collect();
        self.set_item_ids(ids);
    }

    /// Replace the visible cards. The highlight follows the selected actor's
    /// id and only falls back to the old position when that actor is gone.
    pub fn set_item_ids(&mut self, ids: Vec<i64>) {
        let previous_id = self.selected_id();
        let previous_index = self.selected;
        self.item_ids = ids;

        let count = self.item_ids.len();
        if count == 0 {
            self.selected = None;
            self.scroll_row = 0;
            return;
        }

        self.selected = previous_id
            .and_then(|id| self.item_ids.iter().position(|&item| item == id))
            .or(Some(previous_index.map_or(0, |i| i.min(count - 1))));
    }

    pub fn navigate_left(&mut self) {
        if let Some(i) = self.selected {
            if i % self.columns > 0 {
                self.selected = Some(i - 1);
            }
        }
    }

    pub fn navigate_right(&mut self) {
        if let Some(i) = self.selected {
            if i % self.columns + 1 < self.columns && i + 1 < self.item_ids.len() {
                self.selected = Some(i + 1);
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, fetch: &ActorsFetch) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Home => self.navigate_to_first(),
            KeyCode::End => self.navigate_to_last(),
            KeyCode::Enter if fetch.error_message().is_some() && !fetch.is_loading() => {
                return ScreenAction::Refetch;
            }
            KeyCode::Char('w') => {
                self.filter.winners_only = !self.filter.winners_only;
                self.sync_with(fetch.records());
                return ScreenAction::SetStatus(if self.filter.winners_only {
                    "Showing Oscar winners only".to_string()
                } else {
                    "Showing all actors".to_string()
                });
            }
            _ => {}
        }
        ScreenAction::None
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect, fetch: &ActorsFetch, styles: &Styles) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        self.draw_header(f, chunks[0], fetch, styles);

        match select_view(fetch.is_loading(), fetch.error_message(), fetch.records(), &self.filter) {
            ListView::Loading => draw_loading(f, chunks[1], styles),
            ListView::Error(message) => draw_error(f, chunks[1], message, &self.api_url, styles),
            ListView::Empty => draw_empty(f, chunks[1], self.filter.is_active(), styles),
            ListView::Cards(actors) => self.draw_grid(f, chunks[1], &actors, styles),
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, fetch: &ActorsFetch, styles: &Styles) {
        let mut subtitle = format!("Actors from {}", self.api_url);
        if let Some(updated) = fetch.last_updated() {
            subtitle.push_str(&format!(" · updated {}", updated.format("%H:%M:%S")));
        }
        if let Some(filter) = self.filter.describe() {
            subtitle.push_str(&format!(" · filter: {}", filter));
        }

        let header = Paragraph::new(vec![
            Line::from(Span::styled("🎬 Actor Showcase", styles.title())),
            Line::from(Span::styled(subtitle, styles.muted())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(styles.border()));

        f.render_widget(header, area);
    }

    fn draw_grid(&mut self, f: &mut Frame, area: Rect, actors: &[&Actor], styles: &Styles) {
        self.columns = grid_columns(area.width);
        self.set_item_ids(actors.iter().map(|actor| ActorCard::new(actor).key()).collect());

        let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
        if let Some(selected) = self.selected {
            let row = selected / self.columns;
            if row < self.scroll_row {
                self.scroll_row = row;
            } else if row >= self.scroll_row + visible_rows {
                self.scroll_row = row + 1 - visible_rows;
            }
        }

        let card_width = area.width / self.columns as u16;
        let first = self.scroll_row * self.columns;
        let last = (first + visible_rows * self.columns).min(actors.len());

        for (index, actor) in actors.iter().enumerate().take(last).skip(first) {
            let row = (index / self.columns - self.scroll_row) as u16;
            let col = (index % self.columns) as u16;
            let card_area = Rect {
                x: area.x + col * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            };
            let card = ActorCard::new(actor);
            let selected = self.selected_id() == Some(card.key());
            card.render(f, card_area, styles, selected);
        }
    }
}

impl Navigable for ActorsScreen {
    fn navigate_up(&mut self) {
        if let Some(i) = self.selected {
            if i >= self.columns {
                self.selected = Some(i - self.columns);
            }
        }
    }

    fn navigate_down(&mut self) {
        if let Some(i) = self.selected {
            if i + self.columns < self.item_ids.len() {
                self.selected = Some(i + self.columns);
            }
        }
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.item_ids.len());
    }

    fn get_item_count(&self) -> usize {
        self.item_ids.len()
    }
}

fn draw_loading(f: &mut Frame, area: Rect, styles: &Styles) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("⟳ Loading actors...", styles.info())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(60, 40, area));
}

fn draw_error(f: &mut Frame, area: Rect, message: &str, api_url: &str, styles: &Styles) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled("Could not load actors", styles.error())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), styles.base())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Check that the API is running at {}", api_url),
            styles.muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press r or Enter to retry", styles.info())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .border_style(styles.error()),
    );
    f.render_widget(paragraph, centered_rect(70, 60, area));
}

fn draw_empty(f: &mut Frame, area: Rect, filtered: bool, styles: &Styles) {
    let text = if filtered {
        "No actors match the current filter"
    } else {
        "No actors found"
    };
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text, styles.muted()))])
        .alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(60, 40, area));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_actors;
    use crate::showcase_tui::test_support::buffer_text;
    use crate::showcase_tui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_loading_wins() {
        let actors = sample_actors();
        let view = select_view(true, Some("boom"), &actors, &ActorFilter::default());
        assert_eq!(view, ListView::Loading);
    }

    #[test]
    fn test_error_before_records() {
        let actors = sample_actors();
        let view = select_view(false, Some("Request failed with HTTP status 500"), &actors, &ActorFilter::default());
        assert_eq!(view, ListView::Error("Request failed with HTTP status 500"));
    }

    #[test]
    fn test_empty_array_shows_placeholder() {
        assert_eq!(select_view(false, None, &[], &ActorFilter::default()), ListView::Empty);
    }

    #[test]
    fn test_cards_keep_response_order() {
        let mut actors = sample_actors();
        actors.reverse();
        match select_view(false, None, &actors, &ActorFilter::default()) {
            ListView::Cards(cards) => {
                let ids: Vec<i64> = cards.iter().map(|a| a.id).collect();
                assert_eq!(ids, vec![5, 4, 3, 2, 1]);
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_can_empty_the_grid() {
        let actors = sample_actors();
        let filter = ActorFilter { country: Some("Norge".into()), winners_only: false };
        assert_eq!(select_view(false, None, &actors, &filter), ListView::Empty);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(120), 3);
        assert_eq!(grid_columns(200), 4);
    }

    #[test]
    fn test_grid_navigation() {
        let mut screen = ActorsScreen::new("http://localhost:8000");
        screen.columns = 2;
        screen.set_item_ids(vec![1, 2, 3, 4, 5]);
        assert_eq!(screen.get_selected_index(), Some(0));

        screen.navigate_right();
        assert_eq!(screen.get_selected_index(), Some(1));
        screen.navigate_right();
        assert_eq!(screen.get_selected_index(), Some(1), "stays within the row");
        screen.navigate_down();
        assert_eq!(screen.get_selected_index(), Some(3));
        screen.navigate_down();
        assert_eq!(screen.get_selected_index(), Some(3), "no card below");
        screen.navigate_left();
        screen.navigate_down();
        assert_eq!(screen.get_selected_index(), Some(4));
        screen.navigate_up();
        screen.navigate_up();
        assert_eq!(screen.get_selected_index(), Some(0));

        screen.navigate_to_last();
        assert_eq!(screen.get_selected_index(), Some(4));
        screen.set_item_ids(vec![1, 2]);
        assert_eq!(screen.get_selected_index(), Some(1), "clamped once id 5 is gone");
        screen.set_item_ids(Vec::new());
        assert_eq!(screen.get_selected_index(), None);
    }

    #[test]
    fn test_selection_follows_actor_id() {
        let mut actors = sample_actors();
        let mut screen = ActorsScreen::new("http://localhost:8000");
        screen.sync_with(&actors);
        screen.set_selected_index(Some(2));
        assert_eq!(screen.selected_id(), Some(3));

        actors.insert(
            0,
            Actor { id: 6, name: "Tom Hanks".into(), birth_year: 1956, country: "USA".into(), oscars: 2 },
        );
        screen.sync_with(&actors);
        assert_eq!(screen.selected_id(), Some(3));
        assert_eq!(screen.get_selected_index(), Some(3));

        actors.reverse();
        screen.sync_with(&actors);
        assert_eq!(screen.selected_id(), Some(3));

        screen.filter.country = Some("USA".into());
        screen.sync_with(&actors);
        assert_eq!(screen.get_item_count(), 4);
        assert!(screen.selected_id().is_some());
        assert_ne!(screen.selected_id(), Some(3), "Sverige is filtered out");
    }

    #[test]
    fn test_grid_scrolls_to_keep_selection_visible() {
        let actors = sample_actors();
        let refs: Vec<&Actor> = actors.iter().collect();
        let styles = Styles::new(Theme::Dark);
        let mut screen = ActorsScreen::new("http://localhost:8000");
        // 40 columns wide gives one card per row, 10 rows tall fits two cards
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        let mut draw = |screen: &mut ActorsScreen| {
            terminal
                .draw(|f| {
                    let area = f.size();
                    screen.draw_grid(f, area, &refs, &styles);
                })
                .unwrap();
            buffer_text(&terminal)
        };

        let text = draw(&mut screen);
        assert!(text.contains("Meryl Streep"));
        assert!(!text.contains("Ingrid Bergman"));
        assert_eq!(screen.scroll_row, 0);

        screen.navigate_to_last();
        let text = draw(&mut screen);
        assert_eq!(screen.scroll_row, 3);
        assert!(text.contains("Katharine Hepburn"));
        assert!(text.contains("Jack Nicholson"));
        assert!(!text.contains("Meryl Streep"));

        screen.navigate_up();
        draw(&mut screen);
        assert_eq!(screen.scroll_row, 3, "row 3 is still visible");

        screen.navigate_up();
        let text = draw(&mut screen);
        assert_eq!(screen.scroll_row, 2);
        assert!(text.contains("Ingrid Bergman"));
        assert!(!text.contains("Katharine Hepburn"));
    }
}
