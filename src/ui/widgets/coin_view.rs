//! Coin detail page: statistics, chart with time-frame selector, coin news.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use super::{ArticleList, CandleChart};
use crate::state::{CoinDetail, Store, TimeFrame};
use crate::ui::format::{format_change, format_compact, format_price, strip_html};

/// Coin detail page.
pub struct CoinView;

impl CoinView {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        render_info(frame, columns[0], store);
        render_chart(frame, right[0], store);

        let coin = &store.coin;
        ArticleList {
            title: format!(" {} News ", coin.title()),
            articles: &coin.news,
            selected: None,
            loading: coin.news_loading,
            error: coin.news_error.as_deref(),
        }
        .render(frame, right[1]);
    }
}

fn render_info(frame: &mut Frame, area: Rect, store: &Store) {
    let coin = &store.coin;
    let block = Block::default()
        .title(format!(" {} ", coin.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(detail) = &coin.detail else {
        let line = if let Some(error) = &coin.error {
            Line::styled(format!("Failed to load coin: {error}"), Style::default().fg(Color::Red))
        } else {
            Line::styled(
                "Loading...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
        return;
    };

    let star = if store.markets.is_starred(&detail.id) {
        Span::styled(" ★ starred", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ☆ press s to star", Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(detail.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" ({})", detail.symbol.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ),
            star,
        ]),
        Line::raw(""),
    ];
    lines.extend(stat_lines(detail, &store.app.currency));
    lines.push(Line::raw(""));
    lines.push(Line::raw(strip_html(&detail.description)));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn stat_lines(detail: &CoinDetail, currency: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow);
    let change_color = match detail.price_change_percentage_24h {
        Some(c) if c.is_sign_negative() => Color::Red,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };

    vec![
        Line::from(vec![
            Span::styled("Price       ", label),
            Span::styled(
                format_price(detail.current_price, currency),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("24h Change  ", label),
            Span::styled(
                format_change(detail.price_change_percentage_24h),
                Style::default().fg(change_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Market Cap  ", label),
            Span::raw(format_compact(detail.market_cap, currency)),
        ]),
        Line::from(vec![
            Span::styled("Volume      ", label),
            Span::raw(format_compact(detail.total_volume, currency)),
        ]),
        Line::from(vec![
            Span::styled("24h Low     ", label),
            Span::raw(format_price(detail.low_24h, currency)),
        ]),
        Line::from(vec![
            Span::styled("24h High    ", label),
            Span::raw(format_price(detail.high_24h, currency)),
        ]),
    ]
}

fn render_chart(frame: &mut Frame, area: Rect, store: &Store) {
    let coin = &store.coin;
    let block = Block::default()
        .title(" Price Chart ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = TimeFrame::ALL
        .iter()
        .position(|tf| *tf == coin.time_frame)
        .unwrap_or(0);
    let tabs = Tabs::new(TimeFrame::ALL.iter().map(|tf| tf.to_string()))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, rows[0]);

    if coin.loading && coin.candles.is_empty() {
        let loading = Paragraph::new(Line::styled(
            "Loading...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(loading, rows[1]);
        return;
    }

    // Failed fetches fall back to the empty-chart message
    frame.render_widget(
        CandleChart::new(&coin.candles).currency(&store.app.currency),
        rows[1],
    );
}
