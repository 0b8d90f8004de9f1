//! Wire types for the CoinGecko and NewsAPI responses.
//!
//! Only the fields the dashboard renders are modelled; everything else in
//! the upstream payloads is ignored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Element of `GET /coins/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    pub total_volume: Option<Decimal>,
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

/// Per-currency amounts, e.g. `{"usd": 64000.1, "eur": 59000.3}`.
pub type CurrencyMap = HashMap<String, Option<Decimal>>;

/// Body of `GET /coins/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<CoinImage>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
    #[serde(default)]
    pub description: HashMap<String, Option<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinImage {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub current_price: CurrencyMap,
    pub price_change_percentage_24h: Option<Decimal>,
    pub low_24h: CurrencyMap,
    pub high_24h: CurrencyMap,
    pub market_cap: CurrencyMap,
    pub total_volume: CurrencyMap,
}

/// Row of `GET /coins/{id}/ohlc`: `[timestamp_ms, open, high, low, close]`.
pub type OhlcRow = (i64, Decimal, Decimal, Decimal, Decimal);

/// Body of `GET /everything`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub source: Option<NewsSourceRef>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsSourceRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
