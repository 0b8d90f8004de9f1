//! Composes the market-data and news sources into the fetches each screen needs.

use crate::api::{MarketDataSource, NewsSource};
use crate::error::{Error, Result};
use crate::state::{
    Article, Candle, CoinDetail, CoinMarket, TimeFrame, WatchlistSlide, take_last,
};
use futures::future::try_join_all;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Candles shown on each watchlist card.
pub const SLIDE_CANDLES: usize = 10;

/// Chart range for watchlist cards, in days.
const SLIDE_DAYS: u32 = 1;

#[derive(Clone)]
pub struct Loader {
    market: Arc<dyn MarketDataSource>,
    news: Arc<dyn NewsSource>,
}

impl Loader {
    pub fn new(market: Arc<dyn MarketDataSource>, news: Arc<dyn NewsSource>) -> Self {
        Self { market, news }
    }

    /// One page of the coin table. `page` is zero-based.
    pub async fn markets(&self, page: u32, per_page: u32) -> Result<Vec<CoinMarket>> {
        self.market
            .coin_markets(page.saturating_add(1), per_page)
            .await
    }

    /// Cards for every starred coin, fetched concurrently.
    ///
    /// All requests are awaited together; the first failure fails the batch.
    pub async fn watchlist(&self, ids: &BTreeSet<String>) -> Result<Vec<WatchlistSlide>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(count = ids.len(), "loading watchlist cards");
        let slides = ids.iter().map(|id| async move {
            let (coin, candles) =
                futures::try_join!(self.market.coin(id), self.market.ohlc(id, SLIDE_DAYS))?;
            Ok::<_, Error>(WatchlistSlide {
                coin,
                candles: take_last(candles, Some(SLIDE_CANDLES)),
            })
        });

        try_join_all(slides).await
    }

    /// Detail and chart for one coin.
    pub async fn coin(&self, id: &str, time_frame: TimeFrame) -> Result<(CoinDetail, Vec<Candle>)> {
        let (detail, candles) = futures::try_join!(
            self.market.coin(id),
            self.market.ohlc(id, time_frame.days())
        )?;
        Ok((detail, time_frame.limit(candles)))
    }

    /// Candles only, for a time-frame switch on an already loaded coin.
    pub async fn candles(&self, id: &str, time_frame: TimeFrame) -> Result<Vec<Candle>> {
        let candles = self.market.ohlc(id, time_frame.days()).await?;
        Ok(time_frame.limit(candles))
    }

    /// The first `limit` articles matching `query`.
    pub async fn news(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
        let mut articles = self.news.search(query).await?;
        articles.truncate(limit);
        Ok(articles)
    }
}
