//! Data conversion utilities for API responses.

use super::types::{CoinResponse, CurrencyMap, MarketsItem, NewsArticle, OhlcRow};
use crate::state::{Article, Candle, CoinDetail, CoinMarket};
use chrono::DateTime;
use rust_decimal::Decimal;

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a `/coins/markets` element.
    pub fn convert_market(item: MarketsItem) -> CoinMarket {
        CoinMarket {
            id: item.id,
            symbol: item.symbol,
            name: item.name,
            image: item.image,
            current_price: item.current_price,
            price_change_percentage_24h: item.price_change_percentage_24h,
            total_volume: item.total_volume,
            market_cap: item.market_cap,
            market_cap_rank: item.market_cap_rank,
        }
    }

    /// Convert a `/coins/{id}` body, picking amounts in `vs_currency`.
    pub fn convert_coin(coin: CoinResponse, vs_currency: &str) -> CoinDetail {
        let market = coin.market_data.unwrap_or_default();
        let pick = |map: &CurrencyMap| Self::pick_currency(map, vs_currency);

        CoinDetail {
            current_price: pick(&market.current_price),
            price_change_percentage_24h: market.price_change_percentage_24h,
            low_24h: pick(&market.low_24h),
            high_24h: pick(&market.high_24h),
            market_cap: pick(&market.market_cap),
            total_volume: pick(&market.total_volume),
            image: coin
                .image
                .and_then(|img| img.large.or(img.small).or(img.thumb)),
            description: coin
                .description
                .get("en")
                .cloned()
                .flatten()
                .unwrap_or_default(),
            id: coin.id,
            symbol: coin.symbol,
            name: coin.name,
        }
    }

    /// Convert OHLC rows, dropping rows with an out-of-range timestamp.
    pub fn convert_ohlc(rows: Vec<OhlcRow>) -> Vec<Candle> {
        rows.into_iter()
            .filter_map(|(ts, open, high, low, close)| {
                // API timestamp is in milliseconds
                let timestamp = DateTime::from_timestamp_millis(ts)?;
                Some(Candle {
                    timestamp,
                    open,
                    high,
                    low,
                    close,
                })
            })
            .collect()
    }

    /// Convert a NewsAPI article. Returns `None` for articles without a title
    /// or URL, including NewsAPI's `[Removed]` placeholders.
    pub fn convert_article(article: NewsArticle) -> Option<Article> {
        let title = article.title.filter(|t| !t.is_empty() && t != "[Removed]")?;
        let url = article.url.filter(|u| !u.is_empty())?;

        Some(Article {
            title,
            description: article.description.filter(|d| !d.is_empty()),
            url,
            image_url: article.url_to_image,
            source: article.source.and_then(|s| s.name),
            author: article.author,
            published_at: article.published_at,
        })
    }

    fn pick_currency(map: &CurrencyMap, vs_currency: &str) -> Option<Decimal> {
        map.get(&vs_currency.to_lowercase()).copied().flatten()
    }
}
