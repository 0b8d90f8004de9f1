//! Starred-coin strip state.

use super::{Candle, CoinDetail};
use std::collections::BTreeSet;

/// One card of the starred-coin strip.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistSlide {
    pub coin: CoinDetail,
    /// Recent candles for the mini chart.
    pub candles: Vec<Candle>,
}

/// State for the starred-coin strip.
#[derive(Debug, Default)]
pub struct WatchlistState {
    /// The strip's copy of the starred ids.
    pub starred: BTreeSet<String>,
    /// Loaded cards, one per starred id.
    pub slides: Vec<WatchlistSlide>,
    /// Index of the first visible card.
    pub offset: usize,
    /// Ticks since the strip last advanced.
    pub ticks_since_advance: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl WatchlistState {
    /// Advance the carousel by one card, wrapping around.
    pub fn advance(&mut self) {
        self.offset = match self.slides.len() {
            0 => 0,
            len => (self.offset + 1) % len,
        };
        self.ticks_since_advance = 0;
    }

    /// Advance once every `ticks_per_step` ticks. Zero disables auto-scroll.
    pub fn tick(&mut self, ticks_per_step: u64) {
        if ticks_per_step == 0 || self.slides.len() < 2 {
            return;
        }
        self.ticks_since_advance += 1;
        if self.ticks_since_advance >= ticks_per_step {
            self.advance();
        }
    }

    /// Slides in display order, starting at the carousel offset.
    pub fn visible(&self) -> impl Iterator<Item = &WatchlistSlide> {
        let offset = self.offset.min(self.slides.len());
        self.slides[offset..].iter().chain(self.slides[..offset].iter())
    }
}
