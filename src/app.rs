//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering. Side effects
//! (HTTP fetches, watchlist writes) live in [`Controller`], which turns
//! their outcomes back into actions on the store's channel.

use crate::api::{CoinGeckoClient, NewsApiClient};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::events::{EventConfig, EventHandler};
use crate::loader::Loader;
use crate::state::{Action, Notification, Store, TimeFrame, View};
use crate::ui::Ui;
use crate::watchlist::{FileStorage, Watchlist, WatchlistChanged};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Effect dispatcher.
    controller: Controller,
    /// Watchlist change forwarders.
    forwarders: Vec<JoinHandle<()>>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        let loader = Loader::new(
            Arc::new(CoinGeckoClient::new(config.api.clone())?),
            Arc::new(NewsApiClient::new(config.news.clone())?),
        );

        let data_dir = match &config.storage.data_dir {
            Some(dir) => dir.clone(),
            None => config::data_dir()?,
        };
        let storage = FileStorage::new(data_dir);
        tracing::info!(path = %storage.root().display(), "watchlist storage");
        let watchlist = Arc::new(Watchlist::new(storage));

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut store = Store::new(action_tx.clone(), &config.ui);
        store.app.currency = config.api.vs_currency.clone();

        let event_handler =
            EventHandler::new(config.keybindings.clone(), EventConfig::from_ui(&config.ui));

        // The table and the strip each keep their own copy of the starred set
        let forwarders = vec![
            forward_changes(watchlist.subscribe(), action_tx.clone(), Action::ReloadStarred),
            forward_changes(watchlist.subscribe(), action_tx.clone(), Action::LoadWatchlist),
        ];

        let controller = Controller::new(loader, watchlist, action_tx, &config);

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            controller,
            forwarders,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Initial load
        for action in [
            Action::LoadMarkets,
            Action::ReloadStarred,
            Action::LoadWatchlist,
            Action::LoadNews,
        ] {
            self.store.dispatch(action)?;
        }

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms.max(1));
        let mut last_tick = Instant::now();

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            let keys = &self.config.keybindings;
            let store = &self.store;
            self.terminal
                .draw(|frame| Ui::render(frame, store, keys))
                .map_err(|e| Error::terminal(e.to_string()))?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.controller.handle(&mut self.store, action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.controller.handle(&mut self.store, action);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.store.reduce(Action::Tick);
                last_tick = Instant::now();
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("shutting down");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for forwarder in &self.forwarders {
            forwarder.abort();
        }

        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Turn every watchlist change signal into `action` on the action channel.
///
/// A lagged receiver still reloads once, since reloads read the full set.
fn forward_changes(
    mut changes: broadcast::Receiver<WatchlistChanged>,
    action_tx: mpsc::UnboundedSender<Action>,
    action: Action,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "watchlist subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
            if action_tx.send(action.clone()).is_err() {
                break;
            }
        }
    })
}

/// Performs the side effects behind actions and reduces everything else.
pub struct Controller {
    loader: Loader,
    watchlist: Arc<Watchlist>,
    action_tx: mpsc::UnboundedSender<Action>,
    news_query: String,
    news_limit: usize,
}

impl Controller {
    pub fn new(
        loader: Loader,
        watchlist: Arc<Watchlist>,
        action_tx: mpsc::UnboundedSender<Action>,
        config: &Config,
    ) -> Self {
        Self {
            loader,
            watchlist,
            action_tx,
            news_query: config.news.default_query.clone(),
            news_limit: config.news.limit,
        }
    }

    /// Handle an action.
    pub fn handle(&self, store: &mut Store, action: Action) {
        match action {
            Action::LoadMarkets => {
                store.reduce(Action::LoadMarkets);
                self.load_markets(store);
            }
            Action::NextPage | Action::PrevPage | Action::CycleRowsPerPage => {
                let page = store.markets.page;
                let rows = store.markets.rows_per_page;
                store.reduce(action);
                if store.markets.page != page || store.markets.rows_per_page != rows {
                    self.handle(store, Action::LoadMarkets);
                }
            }
            Action::ToggleStar(id) => self.toggle_star(store, &id),
            Action::ReloadStarred => {
                store.reduce(Action::StarredLoaded(self.watchlist.load_all()));
            }
            Action::LoadWatchlist => {
                store.reduce(Action::LoadWatchlist);
                let ids = self.watchlist.load_all();
                store.reduce(Action::WatchlistIdsLoaded(ids.clone()));

                let loader = self.loader.clone();
                self.spawn(async move {
                    match loader.watchlist(&ids).await {
                        Ok(slides) => Action::WatchlistLoaded(ids, slides),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to load watchlist cards");
                            Action::WatchlistFailed(ids, e.to_string())
                        }
                    }
                });
            }
            Action::OpenCoin(id) => {
                store.reduce(Action::OpenCoin(id.clone()));
                self.load_coin(id, store.coin.time_frame);
            }
            Action::SetTimeFrame(_) | Action::CycleTimeFrame => {
                store.reduce(action);
                if let Some(id) = store.coin.coin_id.clone() {
                    self.load_candles(id, store.coin.time_frame);
                }
            }
            Action::LoadNews => {
                store.reduce(Action::LoadNews);
                let loader = self.loader.clone();
                let (query, limit) = (self.news_query.clone(), self.news_limit);
                self.spawn(async move {
                    match loader.news(&query, limit).await {
                        Ok(articles) => Action::NewsLoaded(articles),
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to fetch news");
                            Action::NewsFailed(e.to_string())
                        }
                    }
                });
            }
            Action::RefreshAll => {
                store.reduce(Action::RefreshAll);
                self.handle(store, Action::LoadMarkets);
                self.handle(store, Action::LoadWatchlist);
                self.handle(store, Action::LoadNews);
                if store.app.current_view == View::CoinDetail
                    && let Some(id) = store.coin.coin_id.clone()
                {
                    self.handle(store, Action::OpenCoin(id));
                }
            }
            // Let the store handle the action
            other => store.reduce(other),
        }
    }

    fn toggle_star(&self, store: &mut Store, id: &str) {
        let action = match self.watchlist.toggle(id) {
            Ok(true) => {
                Action::ShowNotification(Notification::success(format!("Added {id} to watchlist")))
            }
            Ok(false) => {
                Action::ShowNotification(Notification::info(format!("Removed {id} from watchlist")))
            }
            Err(e) => {
                tracing::error!(coin = id, error = %e, "failed to update watchlist");
                Action::SetError(format!("Could not update watchlist: {e}"))
            }
        };
        store.reduce(action);
    }

    fn load_markets(&self, store: &Store) {
        let loader = self.loader.clone();
        let (page, rows) = (store.markets.page, store.markets.rows_per_page);
        self.spawn(async move {
            match loader.markets(page, rows).await {
                Ok(coins) => Action::MarketsLoaded(page, rows, coins),
                Err(e) => {
                    if e.is_recoverable() {
                        tracing::warn!(page, error = %e, "failed to fetch coin markets");
                    } else {
                        tracing::error!(page, error = %e, "failed to fetch coin markets");
                    }
                    Action::MarketsFailed(page, rows, e.to_string())
                }
            }
        });
    }

    /// Detail and chart, then news by the coin's name.
    fn load_coin(&self, id: String, time_frame: TimeFrame) {
        let loader = self.loader.clone();
        let action_tx = self.action_tx.clone();
        let news_limit = self.news_limit;
        tokio::spawn(async move {
            let query = match loader.coin(&id, time_frame).await {
                Ok((detail, candles)) => {
                    let name = detail.name.clone();
                    let _ = action_tx.send(Action::CoinLoaded(Box::new(detail), candles));
                    name
                }
                Err(e) => {
                    tracing::warn!(coin = %id, error = %e, "failed to load coin");
                    let failed = Action::CoinFailed(id.clone(), None, e.to_string());
                    let _ = action_tx.send(failed);
                    id.clone()
                }
            };

            let action = match loader.news(&query, news_limit).await {
                Ok(articles) => Action::CoinNewsLoaded(id, articles),
                Err(e) => {
                    tracing::warn!(query, error = %e, "failed to fetch coin news");
                    Action::CoinNewsFailed(id, e.to_string())
                }
            };
            let _ = action_tx.send(action);
        });
    }

    fn load_candles(&self, id: String, time_frame: TimeFrame) {
        let loader = self.loader.clone();
        self.spawn(async move {
            match loader.candles(&id, time_frame).await {
                Ok(candles) => Action::CandlesLoaded(id, time_frame, candles),
                Err(e) => {
                    tracing::warn!(coin = %id, %time_frame, error = %e, "failed to load chart");
                    Action::CoinFailed(id, Some(time_frame), e.to_string())
                }
            }
        });
    }

    /// Run `task` in the background and dispatch the action it resolves to.
    fn spawn(&self, task: impl Future<Output = Action> + Send + 'static) {
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            // The receiver is gone once the app has quit
            let _ = action_tx.send(task.await);
        });
    }
}
