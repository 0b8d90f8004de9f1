//! # Coindeck - Crypto Dashboard TUI
//!
//! A terminal dashboard for cryptocurrency prices backed by the CoinGecko
//! market-data API and NewsAPI, with a persistent starred-coin watchlist.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Event loop, terminal lifecycle and side-effect dispatch
//! - **UI**: Layout, widgets and value formatting
//! - **API**: CoinGecko and NewsAPI clients behind source traits
//! - **Loader**: Batched fetches shaped for each view
//! - **Watchlist**: Durable starred-coin set with change subscribers
//! - **State**: Centralized state management
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod loader;
pub mod state;
pub mod ui;
pub mod watchlist;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use loader::Loader;
pub use watchlist::Watchlist;
