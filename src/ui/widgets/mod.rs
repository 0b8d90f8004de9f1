//! TUI widgets.

mod candle_chart;
mod coin_view;
mod help;
mod market_table;
mod news_list;
mod notifications;
mod status_bar;
mod tab_bar;
mod watchlist_strip;

pub use candle_chart::{CandleChart, NO_DATA};
pub use coin_view::CoinView;
pub use help::HelpPanel;
pub use market_table::MarketTable;
pub use news_list::{ArticleList, NEWS_FAILED, NewsList};
pub use notifications::Popup;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use watchlist_strip::WatchlistStrip;
