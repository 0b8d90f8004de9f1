//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(help_lines(keys))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

fn help_lines(keys: &KeyBindings) -> Vec<Line<'static>> {
    let sections: [(&str, Vec<(String, &str)>); 4] = [
        (
            "Navigation",
            vec![
                (format!("{}/↓", keys.down), "Move down"),
                (format!("{}/↑", keys.up), "Move up"),
                ("Home/End".to_string(), "Go to top / bottom"),
                (keys.dashboard.clone(), "Dashboard"),
                (keys.news.clone(), "News"),
                (keys.back.clone(), "Back / close"),
            ],
        ),
        (
            "Coin Table",
            vec![
                (keys.select.clone(), "Open coin"),
                (keys.star.clone(), "Star / unstar coin"),
                (keys.search.clone(), "Search by name (Esc clears)"),
                (format!("{}/→", keys.next_page), "Next page"),
                (format!("{}/←", keys.prev_page), "Previous page"),
                (keys.rows_per_page.clone(), "Change rows per page"),
            ],
        ),
        (
            "Coin Page",
            vec![
                (keys.time_frame.clone(), "Cycle time frame"),
                (keys.star.clone(), "Star / unstar coin"),
            ],
        ),
        (
            "Actions",
            vec![
                (keys.refresh.clone(), "Refresh data"),
                (keys.help.clone(), "Toggle help"),
                (keys.quit.clone(), "Quit"),
            ],
        ),
    ];

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Cyan);

    let mut lines = Vec::new();
    for (i, (title, entries)) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(title, heading)));
        lines.push(Line::from(""));
        for (binding, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {binding:<9}"), key),
                Span::raw(description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_reflects_bindings() {
        let keys = KeyBindings {
            star: "f".to_string(),
            ..Default::default()
        };
        let text: Vec<String> = help_lines(&keys)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(text.iter().any(|l| l.starts_with("  f ") && l.contains("Star")));
        assert!(text.iter().any(|l| l.contains("Change rows per page") && l.contains('+')));
    }
}
