//! Help screen listing keyboard shortcuts

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::showcase_tui::ui::Styles;

pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Switch between Actors, Statistics and Help"),
    ("1 / 2 / 3", "Jump to Actors / Statistics / Help"),
    ("s", "Toggle the statistics view"),
    ("↑↓←→ / hjkl", "Move between actor cards"),
    ("Home / End", "First / last card"),
    ("r", "Fetch actors again"),
    ("Enter", "Retry after an error"),
    ("w", "Toggle Oscar winners only"),
    ("t", "Toggle light / dark theme"),
    ("? / F1", "Toggle the shortcut popup"),
    ("Esc", "Close popup / previous screen"),
    ("q", "Quit"),
];

#[derive(Debug, Default)]
pub struct HelpScreen {
    pub scroll_offset: u16,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if (self.scroll_offset as usize) + 1 < SHORTCUTS.len() {
            self.scroll_offset += 1;
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, styles: &Styles) {
        let lines: Vec<Line> = SHORTCUTS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:<18}", keys), styles.title()),
                    Span::styled(*action, styles.base()),
                ])
            })
            .collect();

        let help = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0))
            .block(
                Block::default()
                    .title("Keyboard Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(styles.border()),
            );

        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_is_bounded() {
        let mut help = HelpScreen::default();
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);

        for _ in 0..SHORTCUTS.len() + 5 {
            help.scroll_down();
        }
        assert_eq!(help.scroll_offset as usize, SHORTCUTS.len() - 1);
    }
}
