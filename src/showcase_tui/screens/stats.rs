//! Statistics screen computed from the loaded actors

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::ActorStats;
use crate::showcase_tui::{fetch::ActorsFetch, ui::Styles};

#[derive(Debug, Default)]
pub struct StatsScreen;

impl StatsScreen {
    pub fn new() -> Self {
        Self
    }

    /// Same precedence as the actor grid: loading, then error, then empty
    pub fn draw(&self, f: &mut Frame, area: Rect, fetch: &ActorsFetch, styles: &Styles) {
        let placeholder = if fetch.is_loading() {
            Some(Span::styled("⟳ Loading actors...", styles.info()))
        } else if let Some(message) = fetch.error_message() {
            Some(Span::styled(format!("Statistics unavailable: {}", message), styles.error()))
        } else if fetch.records().is_empty() {
            Some(Span::styled("No actors found", styles.muted()))
        } else {
            None
        };

        if let Some(span) = placeholder {
            let paragraph = Paragraph::new(Line::from(span))
                .alignment(Alignment::Center)
                .block(Block::default().title("Statistics").borders(Borders::ALL).border_style(styles.border()));
            f.render_widget(paragraph, area);
            return;
        }

        let stats = ActorStats::from_actors(fetch.records());

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let figures = vec![
            metric_line("Total actors", stats.total_actors.to_string(), styles),
            metric_line("Oscars", stats.total_oscars.to_string(), styles),
            metric_line("Countries", stats.unique_countries.to_string(), styles),
            metric_line("Average Oscars", format!("{:.1}", stats.average_oscars), styles),
        ];
        let figures = Paragraph::new(figures).block(
            Block::default()
                .title(Span::styled("📈 Statistics", styles.title()))
                .borders(Borders::ALL)
                .border_style(styles.border()),
        );
        f.render_widget(figures, chunks[0]);

        let countries: Vec<ListItem> = stats
            .countries
            .iter()
            .map(|c| ListItem::new(Line::from(Span::styled(format!("• {}", c), styles.base()))))
            .collect();
        let countries = List::new(countries).block(
            Block::default()
                .title(Span::styled("🌍 Countries", styles.title()))
                .borders(Borders::ALL)
                .border_style(styles.border()),
        );
        f.render_widget(countries, chunks[1]);
    }
}

fn metric_line(label: &str, value: String, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), styles.muted()),
        Span::styled(value, styles.badge()),
    ])
}
