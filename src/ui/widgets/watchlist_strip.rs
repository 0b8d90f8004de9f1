//! Starred-coin carousel shown above the coin table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::CandleChart;
use crate::state::{Store, WatchlistSlide};
use crate::ui::format::{format_change, format_price, truncate};

/// Minimum width of one card.
const CARD_WIDTH: u16 = 24;

/// Starred-coin strip widget.
pub struct WatchlistStrip;

impl WatchlistStrip {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let watchlist = &store.watchlist;
        let title = format!(" Watchlist ({}) ", watchlist.starred.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = if let Some(error) = &watchlist.error {
            Some(Line::styled(
                format!("Failed to load watchlist: {error}"),
                Style::default().fg(Color::Red),
            ))
        } else if watchlist.starred.is_empty() {
            Some(Line::styled(
                "Star coins in the table to track them here.",
                Style::default().fg(Color::DarkGray),
            ))
        } else if watchlist.slides.is_empty() {
            Some(Line::styled(
                "Loading...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ))
        } else {
            None
        };

        if let Some(message) = message {
            frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), inner);
            return;
        }

        let capacity = (inner.width / CARD_WIDTH).max(1) as usize;
        let cards: Vec<&WatchlistSlide> = watchlist.visible().take(capacity).collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
            .split(inner);

        for (slide, card_area) in cards.into_iter().zip(columns.iter()) {
            render_card(frame, *card_area, slide, &store.app.currency);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, slide: &WatchlistSlide, currency: &str) {
    let coin = &slide.coin;
    let change_color = match coin.price_change_percentage_24h {
        Some(c) if c.is_sign_negative() => Color::Red,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let header = vec![
        Line::from(vec![
            Span::styled(
                truncate(&coin.name, inner.width.saturating_sub(8) as usize),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", coin.symbol.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw(format_price(coin.current_price, currency)),
            Span::raw(" "),
            Span::styled(
                format_change(coin.price_change_percentage_24h),
                Style::default().fg(change_color),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);
    frame.render_widget(CandleChart::new(&slide.candles).axis(false), rows[1]);
}
