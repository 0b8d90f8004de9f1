//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

pub mod format;
mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    ArticleList, CandleChart, CoinView, HelpPanel, MarketTable, NEWS_FAILED, NO_DATA, NewsList,
    Popup, StatusBar, TabBar, WatchlistStrip,
};

use crate::config::KeyBindings;
use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, keys: &KeyBindings) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store);
        TabBar::render(frame, layout.tab_area, store, keys);

        match store.app.current_view {
            View::Dashboard => {
                let (strip, table) = Layout::dashboard(layout.main_area);
                if let Some(strip) = strip {
                    WatchlistStrip::render(frame, strip, store);
                }
                MarketTable::render(frame, table, store);
            }
            View::News => NewsList::render(frame, layout.main_area, store),
            View::CoinDetail => CoinView::render(frame, layout.main_area, store),
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys);
        }

        // A sticky error hides any transient notification
        let popup = match (&store.app.error, &store.app.notification) {
            (Some(error), _) => Some(Popup::error(error)),
            (None, Some(notification)) => Some(Popup::notification(notification)),
            (None, None) => None,
        };
        if let Some(popup) = popup {
            let area = layout.popup(popup.height(layout.popup_width()));
            popup.render(frame, area);
        }
    }
}
