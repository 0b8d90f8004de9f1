//! One-line status bar: connectivity, input mode, freshness and activity.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{InputMode, Store};

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let hint = Line::styled(" Press ? for help ", Style::default().fg(Color::Gray));
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint.width() as u16)])
                .areas(area);

        let mut spans = vec![
            Span::styled(
                " Coindeck ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            connection(store),
            Span::raw(" |"),
            mode(store.app.input_mode),
            Span::raw("| "),
            Span::styled(
                store.app.currency.to_uppercase(),
                Style::default().fg(Color::White),
            ),
        ];
        if let Some(updated) = store.markets.last_updated {
            let local = updated.with_timezone(&chrono::Local);
            spans.push(Span::styled(
                format!(" | Updated {}", local.format("%H:%M:%S")),
                Style::default().fg(Color::Gray),
            ));
        }
        if is_busy(store) {
            spans.push(Span::styled(
                " Loading... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let background = Style::default().bg(Color::DarkGray);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(background), left);
        frame.render_widget(Paragraph::new(hint).style(background), right);
    }
}

/// Whether the last coin-table request succeeded.
fn connection(store: &Store) -> Span<'static> {
    if store.app.connected {
        Span::styled("● Online", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ Offline", Style::default().fg(Color::Red))
    }
}

fn mode(mode: InputMode) -> Span<'static> {
    match mode {
        InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Yellow)),
        InputMode::Search => Span::styled(
            " SEARCH ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    }
}

/// Any screen still waiting on a fetch.
fn is_busy(store: &Store) -> bool {
    store.markets.loading
        || store.watchlist.loading
        || store.news.loading
        || store.coin.loading
        || store.coin.news_loading
}
