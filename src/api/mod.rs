//! Market-data and news API integration.
//!
//! This module provides high-level clients for CoinGecko and NewsAPI,
//! handling authentication headers, rate limiting and data conversion.
//! The rest of the application only sees the [`MarketDataSource`] and
//! [`NewsSource`] traits.

mod client;
mod converter;
mod news;
mod types;

pub use client::{CoinGeckoClient, RateLimiter};
pub use converter::DataConverter;
pub use news::NewsApiClient;

use crate::error::{Error, Result};
use crate::state::{Article, Candle, CoinDetail, CoinMarket};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Read-only market data provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// One page of coins ordered by market cap.
    async fn coin_markets(&self, page: u32, per_page: u32) -> Result<Vec<CoinMarket>>;

    /// Detailed data for one coin.
    async fn coin(&self, id: &str) -> Result<CoinDetail>;

    /// OHLC candles covering the last `days` days.
    async fn ohlc(&self, id: &str, days: u32) -> Result<Vec<Candle>>;
}

/// Full-text news search provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Articles matching `query`, newest first as returned upstream.
    async fn search(&self, query: &str) -> Result<Vec<Article>>;
}

/// Pass successful responses through, turn everything else into an [`Error`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(Error::RateLimited(retry_after));
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    Err(Error::api(status.as_u16(), message))
}

/// Extract the provider's error message from a JSON error body.
///
/// Handles `{"error": "..."}`, `{"message": "..."}` (NewsAPI) and
/// `{"status": {"error_message": "..."}}` (CoinGecko).
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .or_else(|| value.get("status")?.get("error_message"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
