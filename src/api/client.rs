//! CoinGecko API client.

use super::types::{CoinResponse, MarketsItem, OhlcRow};
use super::{DataConverter, MarketDataSource, check_status};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{Candle, CoinDetail, CoinMarket};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// User agent sent to every upstream API.
pub(crate) const USER_AGENT: &str = concat!("coindeck/", env!("CARGO_PKG_VERSION"));

/// High-level API client for CoinGecko.
pub struct CoinGeckoClient {
    /// Configuration.
    config: ApiConfig,
    /// HTTP client carrying the auth headers.
    http: reqwest::Client,
    /// Rate limiter state.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl CoinGeckoClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| Error::config(format!("invalid CoinGecko API key: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        } else {
            tracing::warn!("no CoinGecko API key configured, using the keyless public tier");
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(config.rate_limit))),
            config,
            http,
        })
    }

    /// Quote currency used for every request.
    pub fn vs_currency(&self) -> &str {
        &self.config.vs_currency
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.rate_limit().await;

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, ?query, "CoinGecko request");

        let result: Result<T> = async {
            let response = self.http.get(&url).query(query).send().await?;
            let body = check_status(response).await?.json::<T>().await?;
            Ok(body)
        }
        .await;

        result.inspect_err(|e| tracing::warn!(%url, error = %e, "CoinGecko request failed"))
    }

    /// Apply rate limiting.
    async fn rate_limit(&self) {
        let mut limiter = self.rate_limiter.lock().await;
        limiter.wait().await;
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn coin_markets(&self, page: u32, per_page: u32) -> Result<Vec<CoinMarket>> {
        let items: Vec<MarketsItem> = self
            .get_json(
                "/coins/markets",
                &[
                    ("vs_currency", self.config.vs_currency.clone()),
                    ("per_page", per_page.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        Ok(items.into_iter().map(DataConverter::convert_market).collect())
    }

    async fn coin(&self, id: &str) -> Result<CoinDetail> {
        validate_id(id)?;
        let body: CoinResponse = self
            .get_json(
                &format!("/coins/{id}"),
                &[("localization", "false".to_string())],
            )
            .await?;

        Ok(DataConverter::convert_coin(body, &self.config.vs_currency))
    }

    async fn ohlc(&self, id: &str, days: u32) -> Result<Vec<Candle>> {
        validate_id(id)?;
        let rows: Vec<OhlcRow> = self
            .get_json(
                &format!("/coins/{id}/ohlc"),
                &[
                    ("vs_currency", self.config.vs_currency.clone()),
                    ("days", days.to_string()),
                ],
            )
            .await?;

        Ok(DataConverter::convert_ohlc(rows))
    }
}

/// Coin ids are interpolated into the URL path.
fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_input(format!("invalid coin id: {id:?}")))
    }
}

/// Token bucket limiting requests per second. A rate of zero disables it.
#[derive(Debug)]
pub struct RateLimiter {
    requests_per_second: u32,
    last_request: Instant,
    tokens: f64,
}

impl RateLimiter {
    pub fn new(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            last_request: Instant::now(),
            tokens: requests_per_second as f64,
        }
    }

    /// Wait until a request may be sent, then consume one token.
    pub async fn wait(&mut self) {
        if self.requests_per_second == 0 {
            return;
        }
        let rate = self.requests_per_second as f64;

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_request).as_secs_f64();

        // Replenish tokens
        self.tokens = (self.tokens + elapsed * rate).min(rate);

        if self.tokens < 1.0 {
            let wait_time = (1.0 - self.tokens) / rate;
            tracing::debug!(wait_secs = wait_time, "rate limiter: waiting for a slot");
            tokio::time::sleep(Duration::from_secs_f64(wait_time)).await;
            self.tokens = 1.0;
        }

        self.tokens -= 1.0;
        self.last_request = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("bitcoin").is_ok());
        assert!(validate_id("avalanche-2").is_ok());
        assert!(validate_id("usd-coin").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("../admin").is_err());
        assert!(validate_id("bit coin").is_err());
    }

    #[test]
    fn test_client_rejects_bad_key() {
        let config = ApiConfig {
            api_key: Some("bad\nkey".to_string()),
            ..Default::default()
        };
        assert!(matches!(CoinGeckoClient::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_client_builds_with_key() {
        let config = ApiConfig {
            api_key: Some("CG-demo".to_string()),
            vs_currency: "eur".to_string(),
            ..Default::default()
        };
        let client = tokio_test::assert_ok!(CoinGeckoClient::new(config));
        assert_eq!(client.vs_currency(), "eur");
    }

    #[tokio::test]
    async fn test_invalid_id_fails_before_request() {
        let client = CoinGeckoClient::new(ApiConfig::default()).unwrap();
        let err = client.coin("../../etc").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limiter_allows_burst_then_waits() {
        let mut limiter = RateLimiter::new(2);
        let start = Instant::now();

        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() < Duration::from_millis(10));

        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limiter_disabled() {
        let mut limiter = RateLimiter::new(0);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
