//! Status display component for showing messages and progress

use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::showcase_tui::ui::Styles;

/// Types of status messages
#[derive(Debug, Clone, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Error,
    Loading,
}

/// Status message with type and content
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub status_type: StatusType,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl StatusMessage {
    pub fn new(message: String, status_type: StatusType) -> Self {
        Self {
            message,
            status_type,
            timestamp: chrono::Local::now(),
        }
    }
}

/// Status bar showing the latest message, or a hint once it has expired
#[derive(Default)]
pub struct StatusDisplay {
    pub current_message: Option<StatusMessage>,
    pub show_timestamp: bool,
    pub auto_clear_timeout: Option<Duration>,
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamp = true;
        self
    }

    pub fn with_auto_clear(mut self, timeout: Duration) -> Self {
        self.auto_clear_timeout = Some(timeout);
        self
    }

    /// Set current status message
    pub fn set_message(&mut self, message: StatusMessage) {
        self.current_message = Some(message);
    }

    pub fn set_info(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Info));
    }

    pub fn set_success(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Success));
    }

    pub fn set_error(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Error));
    }

    pub fn set_loading(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Loading));
    }

    pub fn clear(&mut self) {
        self.current_message = None;
    }

    pub fn get_current(&self) -> Option<&StatusMessage> {
        self.current_message.as_ref()
    }

    /// Info and success messages expire; errors and progress stay until replaced
    pub fn should_auto_clear(&self) -> bool {
        if let (Some(timeout), Some(message)) = (self.auto_clear_timeout, &self.current_message) {
            if matches!(message.status_type, StatusType::Info | StatusType::Success) {
                let elapsed = chrono::Local::now().signed_duration_since(message.timestamp);
                return elapsed.to_std().unwrap_or_default() > timeout;
            }
        }
        false
    }

    /// Render the status bar, falling back to `hint` when there is no message
    pub fn render(&self, f: &mut Frame, area: Rect, styles: &Styles, hint: &str) {
        let (content, style) = match &self.current_message {
            Some(message) => (self.format_message(message), Self::style_for(message, styles)),
            None => (hint.to_string(), styles.muted()),
        };

        let paragraph = Paragraph::new(content)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(styles.border()));

        f.render_widget(paragraph, area);
    }

    fn style_for(message: &StatusMessage, styles: &Styles) -> Style {
        match message.status_type {
            StatusType::Info => styles.info(),
            StatusType::Success => styles.success(),
            StatusType::Error => styles.error(),
            StatusType::Loading => styles.warning(),
        }
    }

    /// Format message for display
    fn format_message(&self, message: &StatusMessage) -> String {
        let prefix = match message.status_type {
            StatusType::Info => "ℹ",
            StatusType::Success => "✓",
            StatusType::Error => "✗",
            StatusType::Loading => "⟳",
        };

        if self.show_timestamp {
            format!(
                "{} [{}] {}",
                prefix,
                message.timestamp.format("%H:%M:%S"),
                message.message
            )
        } else {
            format!("{} {}", prefix, message.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_clear_only_for_expired_info() {
        let mut status = StatusDisplay::new().with_auto_clear(Duration::from_secs(4));
        assert!(!status.should_auto_clear());

        status.set_success("Loaded 5 actors".into());
        assert!(!status.should_auto_clear(), "fresh message");

        let aged = |status: &mut StatusDisplay| {
            if let Some(message) = status.current_message.as_mut() {
                message.timestamp = message.timestamp - chrono::Duration::seconds(10);
            }
        };
        aged(&mut status);
        assert!(status.should_auto_clear());
        status.clear();
        assert!(status.get_current().is_none());

        status.set_error("Request failed with HTTP status 500".into());
        aged(&mut status);
        assert!(!status.should_auto_clear());

        status.set_loading("Fetching actors...".into());
        aged(&mut status);
        assert!(!status.should_auto_clear());
    }

    #[test]
    fn test_without_timeout_nothing_expires() {
        let mut status = StatusDisplay::new();
        status.set_info("hello".into());
        if let Some(message) = status.current_message.as_mut() {
            message.timestamp = message.timestamp - chrono::Duration::seconds(60);
        }
        assert!(!status.should_auto_clear());
    }

    #[test]
    fn test_format_prefix() {
        let status = StatusDisplay::new();
        let msg = StatusMessage::new("Loaded 5 actors".into(), StatusType::Success);
        assert_eq!(status.format_message(&msg), "✓ Loaded 5 actors");

        let status = StatusDisplay::new().with_timestamps();
        assert!(status.format_message(&msg).starts_with("✓ ["));
    }
}
