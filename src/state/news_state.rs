//! News state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    /// Publishing outlet.
    pub source: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// State for the general news tab.
#[derive(Debug, Default)]
pub struct NewsState {
    pub articles: Vec<Article>,
    pub selected_index: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

