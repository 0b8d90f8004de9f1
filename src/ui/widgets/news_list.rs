//! News article lists for the news tab and the coin page.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::state::{Article, Store};
use crate::ui::format::truncate;

pub const NEWS_FAILED: &str = "Failed to fetch news";

/// One article list with its loading and error states.
pub struct ArticleList<'a> {
    pub title: String,
    pub articles: &'a [Article],
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl ArticleList<'_> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let status = if self.error.is_some() {
            Some(Line::styled(NEWS_FAILED, Style::default().fg(Color::Red)))
        } else if self.loading && self.articles.is_empty() {
            Some(Line::styled(
                "Loading...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ))
        } else if self.articles.is_empty() {
            Some(Line::styled("No articles found.", Style::default().fg(Color::DarkGray)))
        } else {
            None
        };

        if let Some(status) = status {
            let paragraph = Paragraph::new(status)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .articles
            .iter()
            .map(|article| article_item(article, width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn article_item(article: &Article, width: usize) -> ListItem<'static> {
    let mut meta = Vec::new();
    if let Some(source) = &article.source {
        meta.push(source.clone());
    }
    if let Some(published) = article.published_at {
        meta.push(published.format("%Y-%m-%d %H:%M").to_string());
    }

    let mut lines = vec![
        Line::styled(
            truncate(&article.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(meta.join(" · "), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(
                truncate(&article.url, width.saturating_sub(20)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    if let Some(description) = &article.description {
        lines.push(Line::raw(truncate(description, width)));
    }
    lines.push(Line::raw(""));

    ListItem::new(lines)
}

/// General crypto news tab.
pub struct NewsList;

impl NewsList {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let news = &store.news;
        ArticleList {
            title: format!(" Crypto News ({}) ", news.articles.len()),
            articles: &news.articles,
            selected: news.selected_index,
            loading: news.loading,
            error: news.error.as_deref(),
        }
        .render(frame, area);
    }
}
