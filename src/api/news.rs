//! NewsAPI client.

use super::client::USER_AGENT;
use super::types::NewsResponse;
use super::{DataConverter, NewsSource, check_status};
use crate::config::NewsConfig;
use crate::error::{Error, Result};
use crate::state::Article;
use async_trait::async_trait;
use std::time::Duration;

pub struct NewsApiClient {
    config: NewsConfig,
    http: reqwest::Client,
}

impl NewsApiClient {
    pub fn new(config: NewsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config("NEWS_API_KEY is not set"))
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let api_key = self.api_key()?;
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_input("news query is empty"));
        }

        let url = format!("{}/everything", self.config.base_url.trim_end_matches('/'));
        tracing::debug!(%url, query, "NewsAPI request");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("apiKey", api_key)])
            .send()
            .await?;
        let body: NewsResponse = check_status(response).await?.json().await?;
        articles_from(body)
    }
}

/// NewsAPI reports some failures in a 200 body with `status: "error"`.
fn articles_from(body: NewsResponse) -> Result<Vec<Article>> {
    if body.status != "ok" {
        let message = body
            .message
            .or(body.code)
            .unwrap_or_else(|| format!("unexpected status {:?}", body.status));
        return Err(Error::api(200, message));
    }

    Ok(body
        .articles
        .into_iter()
        .filter_map(DataConverter::convert_article)
        .collect())
}
