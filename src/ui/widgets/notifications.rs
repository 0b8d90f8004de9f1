//! Notification and error popups.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};

/// A bordered message drawn over the current view.
pub struct Popup<'a> {
    prefix: Span<'static>,
    message: &'a str,
    accent: Color,
    title: &'static str,
}

impl<'a> Popup<'a> {
    pub fn notification(notification: &'a Notification) -> Self {
        let (accent, icon) = match notification.level {
            NotificationLevel::Info => (Color::Cyan, "ℹ "),
            NotificationLevel::Success => (Color::Green, "✓ "),
            NotificationLevel::Warning => (Color::Yellow, "⚠ "),
            NotificationLevel::Error => (Color::Red, "✗ "),
        };
        Self {
            prefix: Span::styled(icon, Style::default().fg(accent)),
            message: &notification.message,
            accent,
            title: "",
        }
    }

    /// Sticky error, cleared with the back key.
    pub fn error(message: &'a str) -> Self {
        Self {
            prefix: Span::styled(
                "✗ Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            message,
            accent: Color::Red,
            title: " Esc to dismiss ",
        }
    }

    /// Rows needed to show the whole message at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let chars = self.prefix.width() + self.message.chars().count();
        (chars.div_ceil(inner).max(1) + 2).min(u16::MAX as usize) as u16
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));
        let paragraph = Paragraph::new(Line::from(vec![self.prefix, Span::raw(self.message)]))
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }
}
