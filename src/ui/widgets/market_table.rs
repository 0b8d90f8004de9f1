//! Coin table with search box and pagination footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{InputMode, Store};
use crate::ui::format::{format_change, format_compact, format_price, truncate};

const STARRED: &str = "★";
const UNSTARRED: &str = "☆";

/// Coin table widget.
pub struct MarketTable;

impl MarketTable {
    /// Render the search box, table and footer.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Min(0),    // Table
                Constraint::Length(1), // Pagination
            ])
            .split(area);

        render_search(frame, chunks[0], store);
        render_table(frame, chunks[1], store);
        render_footer(frame, chunks[2], store);
    }
}

fn render_search(frame: &mut Frame, area: Rect, store: &Store) {
    let editing = store.app.input_mode == InputMode::Search;
    let border = if editing { Color::Yellow } else { Color::DarkGray };

    let content = if store.app.input_buffer.is_empty() && !editing {
        Line::styled("Press / to search by name", Style::default().fg(Color::DarkGray))
    } else {
        Line::raw(store.app.input_buffer.as_str())
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(search, area);

    if editing {
        let cursor_x = area.x + 1 + store.app.cursor_position as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_table(frame: &mut Frame, area: Rect, store: &Store) {
    let markets = &store.markets;
    let coins = markets.filtered_coins();
    let currency = store.app.currency.as_str();

    let header_cells = ["", "#", "Coin", "Price", "24h", "Volume", "Market Cap"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = coins.iter().map(|coin| {
        let star = if markets.is_starred(&coin.id) {
            Cell::from(STARRED).style(Style::default().fg(Color::Yellow))
        } else {
            Cell::from(UNSTARRED).style(Style::default().fg(Color::DarkGray))
        };
        let change_style = if coin.is_up() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let rank = coin
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_default();

        Row::new(vec![
            star,
            Cell::from(rank),
            Cell::from(Line::from(vec![
                Span::raw(truncate(&coin.name, 24)),
                Span::styled(
                    format!(" {}", coin.symbol.to_uppercase()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])),
            Cell::from(format_price(coin.current_price, currency)),
            Cell::from(format_change(coin.price_change_percentage_24h)).style(change_style),
            Cell::from(format_compact(coin.total_volume, currency)),
            Cell::from(format_compact(coin.market_cap, currency)),
        ])
        .height(1)
    });

    let title = if markets.search_query.is_empty() {
        " Cryptocurrency Prices by Market Cap ".to_string()
    } else {
        format!(" Matching \"{}\" ({}) ", markets.search_query, coins.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(markets.selected_index);
    frame.render_stateful_widget(table, area, &mut state);

    let inner = Block::default().borders(Borders::ALL).inner(area);
    let overlay = if markets.loading && markets.coins.is_empty() {
        Some(Line::styled(
            "Loading...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(error) = &markets.error {
        Some(Line::styled(
            format!("Failed to fetch coins: {error}"),
            Style::default().fg(Color::Red),
        ))
    } else if coins.is_empty() && !markets.coins.is_empty() {
        Some(Line::styled("No coins match your search.", Style::default().fg(Color::DarkGray)))
    } else {
        None
    };

    if let Some(line) = overlay
        && inner.height > 0
    {
        let bottom = Rect { y: inner.bottom() - 1, height: 1, ..inner };
        frame.render_widget(Paragraph::new(line), bottom);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, store: &Store) {
    let markets = &store.markets;
    let key = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);

    let footer = Line::from(vec![
        Span::styled(format!(" Page {} ", markets.page_number()), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" p", key),
        Span::styled(" prev  ", dim),
        Span::styled("n", key),
        Span::styled(" next  ", dim),
        Span::styled(format!("Rows per page: {} ", markets.rows_per_page), Style::default()),
        Span::styled("+", key),
        Span::styled(" change", dim),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}
