//! Tab bar with a breadcrumb for the open coin.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
};

use crate::config::KeyBindings;
use crate::state::{Store, View};

pub struct TabBar;

impl TabBar {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let key = Style::default().fg(Color::DarkGray);
        let mut titles = vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", keys.dashboard), key),
                Span::raw("Dashboard"),
            ]),
            Line::from(vec![
                Span::styled(format!("[{}] ", keys.news), key),
                Span::raw("News"),
            ]),
        ];

        // The coin page has no tab key; it is reached from the table
        let selected = match store.app.current_view {
            View::Dashboard => 0,
            View::News => 1,
            View::CoinDetail => {
                titles.push(Line::from(vec![
                    Span::raw(format!("› {}", store.coin.title())),
                    Span::styled(format!("  [{}] back", keys.back), key),
                ]));
                2
            }
        };

        let tabs = Tabs::new(titles)
            .select(selected)
            .divider(" ")
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, area);
    }
}
