//! State management for Coindeck.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Async work (HTTP
//! fetches, watchlist writes) is performed by the app; the store only
//! applies the resulting actions.

mod app_state;
mod coin_state;
mod market_state;
mod news_state;
mod watchlist_state;

pub use app_state::{AppState, InputMode, View};
pub use coin_state::{Candle, CoinDetail, CoinState, TimeFrame, price_range, take_last};
pub use market_state::{CoinMarket, MarketState, filter_by_name};
pub use news_state::{Article, NewsState};
pub use watchlist_state::{WatchlistSlide, WatchlistState};

use crate::config::UiConfig;
use crate::error::Result;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    SetInputMode(InputMode),
    Back,

    // Coin table
    LoadMarkets,
    /// Page, rows per page and the rows fetched for them.
    MarketsLoaded(u32, u32, Vec<CoinMarket>),
    MarketsFailed(u32, u32, String),
    NextPage,
    PrevPage,
    CycleRowsPerPage,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Watchlist
    ToggleStar(String),
    ReloadStarred,
    StarredLoaded(BTreeSet<String>),
    LoadWatchlist,
    WatchlistIdsLoaded(BTreeSet<String>),
    /// Cards for the id set they were fetched for.
    WatchlistLoaded(BTreeSet<String>, Vec<WatchlistSlide>),
    WatchlistFailed(BTreeSet<String>, String),

    // Coin detail
    OpenCoin(String),
    CoinLoaded(Box<CoinDetail>, Vec<Candle>),
    CandlesLoaded(String, TimeFrame, Vec<Candle>),
    /// Coin id, the chart time frame when only candles were requested, error.
    CoinFailed(String, Option<TimeFrame>, String),
    SetTimeFrame(TimeFrame),
    CycleTimeFrame,
    CoinNewsLoaded(String, Vec<Article>),
    CoinNewsFailed(String, String),

    // News
    LoadNews,
    NewsLoaded(Vec<Article>),
    NewsFailed(String),

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    Tick,

    // Data refresh
    RefreshAll,

    // Error handling
    SetError(String),

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Whether the notification has been shown for its full duration.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Coin table state.
    pub markets: MarketState,
    /// Starred-coin strip state.
    pub watchlist: WatchlistState,
    /// Coin detail state.
    pub coin: CoinState,
    /// News tab state.
    pub news: NewsState,
    /// Ticks between carousel steps.
    carousel_ticks: u64,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, ui: &UiConfig) -> Self {
        let tick_ms = ui.tick_rate_ms.max(1);
        Self {
            app: AppState::default(),
            markets: MarketState::with_paging(ui.rows_per_page, ui.rows_per_page_options.clone()),
            watchlist: WatchlistState::default(),
            coin: CoinState::default(),
            news: NewsState::default(),
            carousel_ticks: ui.carousel_interval_secs.saturating_mul(1000) / tick_ms,
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.set_view(view),
            Action::SetInputMode(mode) => self.app.input_mode = mode,
            Action::Back => {
                if self.app.show_help {
                    self.app.show_help = false;
                } else if self.app.current_view == View::CoinDetail {
                    self.app.current_view = self.app.previous_view;
                }
                self.app.error = None;
            }

            // Coin table
            Action::LoadMarkets => {
                self.markets.loading = true;
                self.markets.error = None;
            }
            Action::MarketsLoaded(page, rows, coins) => {
                if !self.markets.is_current(page, rows) {
                    tracing::debug!(page, rows, "discarding stale coin page");
                    return;
                }
                self.markets.coins = coins;
                self.markets.loading = false;
                self.markets.error = None;
                self.markets.last_updated = Some(chrono::Utc::now());
                self.markets.clamp_selection();
                self.app.connected = true;
            }
            Action::MarketsFailed(page, rows, error) => {
                if !self.markets.is_current(page, rows) {
                    return;
                }
                self.markets.loading = false;
                self.markets.error = Some(error);
                self.app.connected = false;
            }
            Action::NextPage => self.markets.next_page(),
            Action::PrevPage => self.markets.prev_page(),
            Action::CycleRowsPerPage => self.markets.cycle_rows_per_page(),
            Action::SearchInput(c) => {
                self.app.push_char(c);
                self.apply_search();
            }
            Action::SearchBackspace => {
                self.app.pop_char();
                self.apply_search();
            }
            Action::ClearSearch => {
                self.app.clear_input();
                self.app.input_mode = InputMode::Normal;
                self.apply_search();
            }

            // Watchlist
            Action::ToggleStar(_) | Action::ReloadStarred => {}
            Action::StarredLoaded(ids) => self.markets.starred = ids,
            Action::LoadWatchlist => {
                self.watchlist.loading = true;
                self.watchlist.error = None;
            }
            Action::WatchlistIdsLoaded(ids) => {
                if ids.is_empty() {
                    self.watchlist.slides.clear();
                    self.watchlist.offset = 0;
                }
                self.watchlist.starred = ids;
            }
            Action::WatchlistLoaded(ids, slides) => {
                // An older batch finishing late must not bring back unstarred cards
                if ids != self.watchlist.starred {
                    tracing::debug!(?ids, "discarding stale watchlist cards");
                    return;
                }
                self.watchlist.slides = slides;
                self.watchlist.loading = false;
                self.watchlist.error = None;
                if self.watchlist.offset >= self.watchlist.slides.len() {
                    self.watchlist.offset = 0;
                }
            }
            Action::WatchlistFailed(ids, error) => {
                if ids != self.watchlist.starred {
                    return;
                }
                self.watchlist.loading = false;
                self.watchlist.error = Some(error);
            }

            // Coin detail
            Action::OpenCoin(id) => {
                self.set_view(View::CoinDetail);
                self.coin.open(id);
                self.coin.news_loading = true;
            }
            Action::CoinLoaded(detail, candles) => {
                // Results for a coin the user already left are dropped
                if self.coin.coin_id.as_deref() != Some(detail.id.as_str()) {
                    tracing::debug!(coin = %detail.id, "discarding stale coin detail");
                    return;
                }
                self.coin.detail = Some(*detail);
                self.coin.candles = candles;
                self.coin.loading = false;
                self.coin.error = None;
            }
            Action::CandlesLoaded(id, time_frame, candles) => {
                if self.coin.coin_id.as_deref() != Some(id.as_str())
                    || self.coin.time_frame != time_frame
                {
                    return;
                }
                self.coin.candles = candles;
                self.coin.loading = false;
                self.coin.error = None;
            }
            Action::CoinFailed(id, time_frame, error) => {
                if self.coin.coin_id.as_deref() != Some(id.as_str())
                    || time_frame.is_some_and(|tf| tf != self.coin.time_frame)
                {
                    tracing::debug!(coin = %id, "discarding stale coin failure");
                    return;
                }
                self.coin.loading = false;
                self.coin.candles.clear();
                self.coin.error = Some(error);
            }
            Action::SetTimeFrame(time_frame) => {
                self.coin.time_frame = time_frame;
                self.coin.loading = true;
            }
            Action::CycleTimeFrame => {
                self.coin.time_frame = self.coin.time_frame.next();
                self.coin.loading = true;
            }
            Action::CoinNewsLoaded(id, articles) => {
                if self.coin.coin_id.as_deref() != Some(id.as_str()) {
                    return;
                }
                self.coin.news = articles;
                self.coin.news_loading = false;
                self.coin.news_error = None;
            }
            Action::CoinNewsFailed(id, error) => {
                if self.coin.coin_id.as_deref() != Some(id.as_str()) {
                    return;
                }
                self.coin.news_loading = false;
                self.coin.news_error = Some(error);
            }

            // News
            Action::LoadNews => {
                self.news.loading = true;
                self.news.error = None;
            }
            Action::NewsLoaded(articles) => {
                self.news.selected_index = if articles.is_empty() { None } else { Some(0) };
                self.news.articles = articles;
                self.news.loading = false;
                self.news.error = None;
                self.news.last_updated = Some(chrono::Utc::now());
            }
            Action::NewsFailed(error) => {
                self.news.loading = false;
                self.news.error = Some(error);
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-10),
            Action::PageDown => self.scroll(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::Tick => self.tick(Instant::now()),

            // Data refresh
            Action::RefreshAll => {
                self.app.notification = Some(Notification::info("Refreshing data"));
            }

            // Error handling
            Action::SetError(error) => self.app.error = Some(error),

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn set_view(&mut self, view: View) {
        if self.app.current_view != view && self.app.current_view != View::CoinDetail {
            self.app.previous_view = self.app.current_view;
        }
        self.app.current_view = view;
    }

    fn apply_search(&mut self) {
        self.markets.search_query = self.app.input_buffer.clone();
        self.markets.clamp_selection();
    }

    fn tick(&mut self, now: Instant) {
        if self
            .app
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.app.notification = None;
        }
        self.watchlist.tick(self.carousel_ticks);
    }

    fn scroll(&mut self, delta: i32) {
        match self.app.current_view {
            View::Dashboard => {
                let current = self.markets.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.markets.filtered_coins().len().saturating_sub(1);
                self.markets.selected_index = Some(new_index.min(max_index));
            }
            View::News => {
                let current = self.news.selected_index.unwrap_or(0) as i32;
                let new_index = (current + delta).max(0) as usize;
                let max_index = self.news.articles.len().saturating_sub(1);
                self.news.selected_index = Some(new_index.min(max_index));
            }
            View::CoinDetail => {}
        }
    }

    fn go_to_top(&mut self) {
        match self.app.current_view {
            View::Dashboard => self.markets.selected_index = Some(0),
            View::News => self.news.selected_index = Some(0),
            View::CoinDetail => {}
        }
    }

    fn go_to_bottom(&mut self) {
        match self.app.current_view {
            View::Dashboard => {
                let max = self.markets.filtered_coins().len().saturating_sub(1);
                self.markets.selected_index = Some(max);
            }
            View::News => {
                let max = self.news.articles.len().saturating_sub(1);
                self.news.selected_index = Some(max);
            }
            View::CoinDetail => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, &UiConfig::default())
    }

    fn coin(id: &str, name: &str) -> CoinMarket {
        CoinMarket {
            id: id.to_string(),
            symbol: id.to_string(),
            name: name.to_string(),
            image: None,
            current_price: Some(Decimal::ONE),
            price_change_percentage_24h: None,
            total_volume: None,
            market_cap: None,
            market_cap_rank: None,
        }
    }

    fn detail(id: &str) -> CoinDetail {
        CoinDetail {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            image: None,
            current_price: None,
            price_change_percentage_24h: None,
            low_24h: None,
            high_24h: None,
            market_cap: None,
            total_volume: None,
            description: String::new(),
        }
    }

    fn loaded_store() -> Store {
        let mut store = store();
        store.reduce(Action::MarketsLoaded(0, 5, vec![
            coin("bitcoin", "Bitcoin"),
            coin("ethereum", "Ethereum"),
            coin("tether", "Tether"),
        ]));
        store
    }

    #[test]
    fn test_markets_loaded_selects_first_row() {
        let store = loaded_store();
        assert_eq!(store.markets.selected_index, Some(0));
        assert!(store.app.connected);
        assert!(store.markets.last_updated.is_some());
    }

    #[test]
    fn test_markets_failed_keeps_previous_rows() {
        let mut store = loaded_store();
        store.reduce(Action::LoadMarkets);
        store.reduce(Action::MarketsFailed(0, 5, "HTTP 500".to_string()));

        assert_eq!(store.markets.coins.len(), 3);
        assert_eq!(store.markets.error.as_deref(), Some("HTTP 500"));
        assert!(!store.markets.loading);
        assert!(!store.app.connected);
    }

    #[test]
    fn test_search_filters_live() {
        let mut store = loaded_store();
        store.reduce(Action::SetInputMode(InputMode::Search));
        for c in "ETH".chars() {
            store.reduce(Action::SearchInput(c));
        }

        let names: Vec<&str> = store
            .markets
            .filtered_coins()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // "Tether" contains "eth" too
        assert_eq!(names, vec!["Ethereum", "Tether"]);

        store.reduce(Action::ClearSearch);
        assert_eq!(store.markets.filtered_coins().len(), 3);
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_search_backspace() {
        let mut store = loaded_store();
        store.reduce(Action::SearchInput('x'));
        assert!(store.markets.filtered_coins().is_empty());
        assert_eq!(store.markets.selected_index, None);

        store.reduce(Action::SearchBackspace);
        assert_eq!(store.markets.filtered_coins().len(), 3);
        assert_eq!(store.markets.selected_index, Some(0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut store = loaded_store();
        store.reduce(Action::PageDown);
        assert_eq!(store.markets.selected_index, Some(2));
        store.reduce(Action::ScrollUp);
        store.reduce(Action::PageUp);
        assert_eq!(store.markets.selected_index, Some(0));
        store.reduce(Action::GoToBottom);
        assert_eq!(store.markets.selected_coin().map(|c| c.id.as_str()), Some("tether"));
    }

    #[test]
    fn test_starred_copies_are_independent() {
        let mut store = store();
        let ids: BTreeSet<String> = ["bitcoin".to_string()].into();

        store.reduce(Action::StarredLoaded(ids.clone()));
        assert!(store.markets.is_starred("bitcoin"));
        assert!(store.watchlist.starred.is_empty());

        store.reduce(Action::WatchlistIdsLoaded(ids));
        assert!(store.watchlist.starred.contains("bitcoin"));
    }

    #[test]
    fn test_emptied_watchlist_clears_slides() {
        let mut store = store();
        store.reduce(Action::WatchlistLoaded(BTreeSet::new(), Vec::new()));
        store.watchlist.offset = 3;
        store.reduce(Action::WatchlistIdsLoaded(BTreeSet::new()));
        assert!(store.watchlist.slides.is_empty());
        assert_eq!(store.watchlist.offset, 0);
    }

    #[test]
    fn test_open_coin_and_back() {
        let mut store = store();
        store.reduce(Action::SetView(View::News));
        store.reduce(Action::OpenCoin("bitcoin".to_string()));

        assert_eq!(store.app.current_view, View::CoinDetail);
        assert_eq!(store.coin.coin_id.as_deref(), Some("bitcoin"));
        assert!(store.coin.loading);

        store.reduce(Action::Back);
        assert_eq!(store.app.current_view, View::News);
    }

    #[test]
    fn test_cycle_time_frame_marks_loading() {
        let mut store = store();
        store.reduce(Action::CycleTimeFrame);
        assert_eq!(store.coin.time_frame, TimeFrame::Week);
        assert!(store.coin.loading);

        store.reduce(Action::SetTimeFrame(TimeFrame::Year));
        assert_eq!(store.coin.time_frame, TimeFrame::Year);
    }

    #[test]
    fn test_stale_coin_results_dropped() {
        let mut store = store();
        store.reduce(Action::OpenCoin("bitcoin".to_string()));
        store.reduce(Action::OpenCoin("ethereum".to_string()));

        let mut late = detail("bitcoin");
        late.name = "Bitcoin".to_string();
        store.reduce(Action::CoinLoaded(Box::new(late), Vec::new()));
        assert!(store.coin.detail.is_none());
        assert!(store.coin.loading);

        store.reduce(Action::CoinLoaded(Box::new(detail("ethereum")), Vec::new()));
        assert_eq!(store.coin.title(), "ethereum");
        assert!(!store.coin.loading);
    }

    #[test]
    fn test_candles_for_old_time_frame_dropped() {
        let mut store = store();
        store.reduce(Action::OpenCoin("bitcoin".to_string()));
        store.reduce(Action::CycleTimeFrame);
        store.reduce(Action::CycleTimeFrame);

        store.reduce(Action::CandlesLoaded("bitcoin".to_string(), TimeFrame::Week, Vec::new()));
        assert!(store.coin.loading);

        store.reduce(Action::CandlesLoaded("bitcoin".to_string(), TimeFrame::Month, Vec::new()));
        assert!(!store.coin.loading);
    }

    #[test]
    fn test_stale_markets_page_dropped() {
        let mut store = loaded_store();
        store.reduce(Action::NextPage);
        store.reduce(Action::NextPage);
        store.reduce(Action::LoadMarkets);

        store.reduce(Action::MarketsLoaded(1, 5, vec![coin("solana", "Solana")]));
        store.reduce(Action::MarketsFailed(1, 5, "HTTP 500".to_string()));
        assert_eq!(store.markets.coins.len(), 3);
        assert!(store.markets.error.is_none());
        assert!(store.markets.loading);

        store.reduce(Action::MarketsLoaded(2, 5, vec![coin("cardano", "Cardano")]));
        assert_eq!(store.markets.coins[0].id, "cardano");
        assert!(!store.markets.loading);

        // Same page at a different size is stale as well
        store.reduce(Action::MarketsLoaded(2, 30, Vec::new()));
        assert_eq!(store.markets.coins.len(), 1);
    }

    #[test]
    fn test_late_watchlist_batch_dropped() {
        let mut store = store();
        let starred: BTreeSet<String> = ["bitcoin".to_string()].into();
        store.reduce(Action::WatchlistIdsLoaded(starred.clone()));
        store.reduce(Action::WatchlistIdsLoaded(BTreeSet::new()));

        let card = WatchlistSlide {
            coin: detail("bitcoin"),
            candles: Vec::new(),
        };
        store.reduce(Action::WatchlistLoaded(starred.clone(), vec![card]));
        store.reduce(Action::WatchlistFailed(starred, "HTTP 500".to_string()));

        assert!(store.watchlist.starred.is_empty());
        assert!(store.watchlist.slides.is_empty());
        assert!(store.watchlist.error.is_none());
    }

    #[test]
    fn test_watchlist_cards_kept_for_current_ids() {
        let mut store = store();
        let starred: BTreeSet<String> = ["bitcoin".to_string()].into();
        store.reduce(Action::LoadWatchlist);
        store.reduce(Action::WatchlistIdsLoaded(starred.clone()));

        let card = WatchlistSlide {
            coin: detail("bitcoin"),
            candles: Vec::new(),
        };
        store.reduce(Action::WatchlistLoaded(starred, vec![card]));
        assert_eq!(store.watchlist.slides.len(), 1);
        assert!(!store.watchlist.loading);
    }

    #[test]
    fn test_failure_for_left_coin_dropped() {
        let mut store = store();
        store.reduce(Action::OpenCoin("bitcoin".to_string()));
        store.reduce(Action::OpenCoin("ethereum".to_string()));
        store.reduce(Action::CoinLoaded(Box::new(detail("ethereum")), Vec::new()));

        store.reduce(Action::CoinFailed(
            "bitcoin".to_string(),
            None,
            "HTTP 500".to_string(),
        ));
        assert_eq!(store.coin.coin_id.as_deref(), Some("ethereum"));
        assert!(store.coin.error.is_none());
        assert!(store.coin.detail.is_some());

        store.reduce(Action::CoinFailed(
            "ethereum".to_string(),
            None,
            "HTTP 500".to_string(),
        ));
        assert_eq!(store.coin.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_candle_failure_for_old_time_frame_dropped() {
        let mut store = store();
        store.reduce(Action::OpenCoin("bitcoin".to_string()));
        store.reduce(Action::CandlesLoaded("bitcoin".to_string(), TimeFrame::Day, vec![]));
        store.reduce(Action::CycleTimeFrame);
        store.reduce(Action::CycleTimeFrame);

        store.reduce(Action::CoinFailed(
            "bitcoin".to_string(),
            Some(TimeFrame::Week),
            "timeout".to_string(),
        ));
        assert!(store.coin.error.is_none());
        assert!(store.coin.loading);

        store.reduce(Action::CoinFailed(
            "bitcoin".to_string(),
            Some(TimeFrame::Month),
            "timeout".to_string(),
        ));
        assert_eq!(store.coin.error.as_deref(), Some("timeout"));
        assert!(!store.coin.loading);
    }

    #[test]
    fn test_news_failure_sets_error() {
        let mut store = store();
        store.reduce(Action::LoadNews);
        assert!(store.news.loading);
        store.reduce(Action::NewsFailed("Failed to fetch news".to_string()));
        assert!(!store.news.loading);
        assert_eq!(store.news.error.as_deref(), Some("Failed to fetch news"));
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let mut store = store();
        let mut notification = Notification::info("Starred bitcoin");
        let shown_at = notification.created_at;
        notification.duration_secs = 3;
        store.reduce(Action::ShowNotification(notification));

        store.tick(shown_at + Duration::from_secs(1));
        assert!(store.app.notification.is_some());

        store.tick(shown_at + Duration::from_secs(3));
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn test_carousel_ticks_from_config() {
        let store = store();
        // 3s at 250ms per tick
        assert_eq!(store.carousel_ticks, 12);
    }

    #[test]
    fn test_huge_carousel_interval_saturates() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let ui = UiConfig {
            carousel_interval_secs: u64::MAX,
            ..UiConfig::default()
        };
        let store = Store::new(tx, &ui);
        assert_eq!(store.carousel_ticks, u64::MAX / 250);
    }

    #[test]
    fn test_dispatch_sends_to_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, &UiConfig::default());
        store.dispatch(Action::LoadNews).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::LoadNews)));
    }
}
