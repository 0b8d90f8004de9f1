//! Coin table state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A row of the paginated coin market list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    /// Provider identifier (e.g. "bitcoin").
    pub id: String,
    /// Ticker symbol (e.g. "btc").
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Logo URL.
    pub image: Option<String>,
    /// Current price in the quote currency.
    pub current_price: Option<Decimal>,
    /// Price change over the last 24h, in percent.
    pub price_change_percentage_24h: Option<Decimal>,
    /// Traded volume over the last 24h.
    pub total_volume: Option<Decimal>,
    /// Market capitalisation.
    pub market_cap: Option<Decimal>,
    /// Market cap rank.
    pub market_cap_rank: Option<u32>,
}

impl CoinMarket {
    /// Whether the coin gained over the last 24h.
    pub fn is_up(&self) -> bool {
        self.price_change_percentage_24h
            .map(|c| c >= Decimal::ZERO)
            .unwrap_or(false)
    }
}

/// State for the coin table.
#[derive(Debug)]
pub struct MarketState {
    /// Coins of the current page.
    pub coins: Vec<CoinMarket>,
    /// Currently selected row in the filtered list.
    pub selected_index: Option<usize>,
    /// Case-insensitive name filter applied to the current page.
    pub search_query: String,
    /// Zero-based page index.
    pub page: u32,
    /// Rows requested per page.
    pub rows_per_page: u32,
    /// Page sizes the user can cycle through.
    pub rows_per_page_options: Vec<u32>,
    /// The table's copy of the starred ids.
    pub starred: BTreeSet<String>,
    /// Whether a page is currently loading.
    pub loading: bool,
    /// Last fetch error.
    pub error: Option<String>,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            coins: Vec::new(),
            selected_index: None,
            search_query: String::new(),
            page: 0,
            rows_per_page: 5,
            rows_per_page_options: vec![5, 30, 45],
            starred: BTreeSet::new(),
            loading: false,
            error: None,
            last_updated: None,
        }
    }
}

impl MarketState {
    /// Create a table state with the given paging options.
    pub fn with_paging(rows_per_page: u32, options: Vec<u32>) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            rows_per_page_options: options,
            ..Default::default()
        }
    }

    /// Coins whose name contains the search term, ignoring case.
    pub fn filtered_coins(&self) -> Vec<&CoinMarket> {
        filter_by_name(&self.coins, &self.search_query)
    }

    /// Get the currently selected coin.
    pub fn selected_coin(&self) -> Option<&CoinMarket> {
        self.selected_index
            .and_then(|i| self.filtered_coins().get(i).copied())
    }

    /// Whether the table's copy marks `id` as starred.
    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.contains(id)
    }

    /// One-based page number for display.
    pub fn page_number(&self) -> u32 {
        self.page + 1
    }

    /// Advance to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
        self.selected_index = None;
    }

    /// Go back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
        self.selected_index = None;
    }

    /// Switch to the next page size and return to the first page.
    pub fn cycle_rows_per_page(&mut self) {
        if self.rows_per_page_options.is_empty() {
            return;
        }
        let next = self
            .rows_per_page_options
            .iter()
            .position(|&n| n == self.rows_per_page)
            .map(|i| (i + 1) % self.rows_per_page_options.len())
            .unwrap_or(0);
        self.rows_per_page = self.rows_per_page_options[next].max(1);
        self.page = 0;
        self.selected_index = None;
    }

    /// Whether a fetch for `page` at `rows` per page matches what the table shows now.
    pub fn is_current(&self, page: u32, rows: u32) -> bool {
        self.page == page && self.rows_per_page == rows
    }

    /// Keep the selection inside the filtered list.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_coins().len();
        self.selected_index = match (len, self.selected_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }
}

/// Keep coins whose name contains `term`, case-insensitively. An empty term keeps all.
pub fn filter_by_name<'a>(coins: &'a [CoinMarket], term: &str) -> Vec<&'a CoinMarket> {
    let term = term.to_lowercase();
    coins
        .iter()
        .filter(|c| term.is_empty() || c.name.to_lowercase().contains(&term))
        .collect()
}
