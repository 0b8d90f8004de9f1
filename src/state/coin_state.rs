//! Coin detail state: price statistics, candles and contextual news.

use super::Article;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Detailed data for a single coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Large logo URL.
    pub image: Option<String>,
    pub current_price: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
    pub low_24h: Option<Decimal>,
    pub high_24h: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub total_volume: Option<Decimal>,
    /// English description, may contain HTML anchors.
    pub description: String,
}

/// One OHLC interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Top of the candle body.
    pub fn body_high(&self) -> Decimal {
        self.open.max(self.close)
    }

    /// Bottom of the candle body.
    pub fn body_low(&self) -> Decimal {
        self.open.min(self.close)
    }
}

/// Lowest low and highest high over a series, `None` if empty.
pub fn price_range(candles: &[Candle]) -> Option<(Decimal, Decimal)> {
    let low = candles.iter().map(|c| c.low).min()?;
    let high = candles.iter().map(|c| c.high).max()?;
    Some((low, high))
}

/// Selectable chart range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFrame {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Value of the `days` query parameter.
    pub fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    /// How many of the most recent candles to keep, `None` for all.
    pub fn candle_limit(self) -> Option<usize> {
        match self {
            Self::Day => Some(10),
            Self::Week => Some(30),
            Self::Month | Self::Year => None,
        }
    }

    /// The next time frame, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Day,
        }
    }

    /// Keep the most recent candles for this time frame.
    pub fn limit(self, candles: Vec<Candle>) -> Vec<Candle> {
        take_last(candles, self.candle_limit())
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// Keep the last `limit` items (all of them when `limit` is `None`).
pub fn take_last<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit
        && items.len() > limit
    {
        items.drain(..items.len() - limit);
    }
    items
}

/// State for the coin detail view.
#[derive(Debug, Default)]
pub struct CoinState {
    /// Coin currently open.
    pub coin_id: Option<String>,
    /// Loaded detail.
    pub detail: Option<CoinDetail>,
    /// Candles for the selected time frame.
    pub candles: Vec<Candle>,
    /// Selected chart range.
    pub time_frame: TimeFrame,
    /// News mentioning the coin.
    pub news: Vec<Article>,
    pub loading: bool,
    pub news_loading: bool,
    /// Detail or chart fetch error.
    pub error: Option<String>,
    /// News fetch error.
    pub news_error: Option<String>,
}

impl CoinState {
    /// Reset for a newly opened coin.
    pub fn open(&mut self, coin_id: impl Into<String>) {
        *self = Self {
            coin_id: Some(coin_id.into()),
            time_frame: self.time_frame,
            loading: true,
            ..Default::default()
        };
    }

    /// Display name for the news header.
    pub fn title(&self) -> &str {
        self.detail
            .as_ref()
            .map(|d| d.name.as_str())
            .or(self.coin_id.as_deref())
            .unwrap_or("")
    }
}
