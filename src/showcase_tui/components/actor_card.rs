//! Card view for a single actor

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Actor;
use crate::showcase_tui::ui::{truncate_to_width, Styles};

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 5;

/// "1 Oscar" / "N Oscars"
pub fn oscar_label(oscars: u32) -> String {
    if oscars == 1 {
        "1 Oscar".to_string()
    } else {
        format!("{} Oscars", oscars)
    }
}

pub struct ActorCard<'a> {
    actor: &'a Actor,
}

impl<'a> ActorCard<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }

    pub fn key(&self) -> i64 {
        self.actor.id
    }

    /// Achievement badge, only for actors with at least one Oscar
    pub fn badge(&self) -> Option<String> {
        if self.actor.is_oscar_winner() {
            Some(format!("🏆 {}", oscar_label(self.actor.oscars)))
        } else {
            None
        }
    }

    /// Plain-text rendering used by CLI mode
    pub fn text_lines(&self) -> Vec<String> {
        let mut header = self.actor.name.clone();
        if let Some(badge) = self.badge() {
            header.push_str("  ");
            header.push_str(&badge);
        }
        vec![
            header,
            format!("  Country: {}", self.actor.country),
            format!("  Born:    {}", self.actor.birth_year),
        ]
    }

    pub fn render(&self, f: &mut Frame, area: Rect, styles: &Styles, selected: bool) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let border_style = if selected {
            styles.selected_border()
        } else {
            styles.border()
        };

        let block = Block::default()
            .title(Span::styled(
                truncate_to_width(&self.actor.name, inner_width),
                styles.title(),
            ))
            .borders(Borders::ALL)
            .border_style(border_style);

        let badge_line = match self.badge() {
            Some(badge) => Line::from(Span::styled(truncate_to_width(&badge, inner_width), styles.badge())),
            None => Line::from(""),
        };

        let lines = vec![
            badge_line,
            Line::from(vec![
                Span::styled("Country: ", styles.muted()),
                Span::styled(
                    truncate_to_width(&self.actor.country, inner_width.saturating_sub(9)),
                    styles.base(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Born:    ", styles.muted()),
                Span::styled(self.actor.birth_year.to_string(), styles.base()),
            ]),
        ];

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
