//! Terminal candlestick chart.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::state::{Candle, price_range};
use crate::ui::format::format_price;

pub const NO_DATA: &str = "No data available for selected time frame.";

const WICK: &str = "│";
const BODY: &str = "┃";

/// Candlestick chart over a fixed candle series.
///
/// Each candle takes one column (spread out when there is room); the most
/// recent candles are kept when the area is too narrow.
pub struct CandleChart<'a> {
    candles: &'a [Candle],
    currency: &'a str,
    axis: bool,
    bullish: Style,
    bearish: Style,
}

impl<'a> CandleChart<'a> {
    pub fn new(candles: &'a [Candle]) -> Self {
        Self {
            candles,
            currency: "usd",
            axis: true,
            bullish: Style::default().fg(Color::Green),
            bearish: Style::default().fg(Color::Red),
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    /// Draw high/low price labels on the left.
    pub fn axis(mut self, axis: bool) -> Self {
        self.axis = axis;
        self
    }
}

impl Widget for CandleChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some((low, high)) = price_range(self.candles) else {
            Paragraph::new(NO_DATA)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        };

        let mut plot = area;
        if self.axis {
            let top = format_price(Some(high), self.currency);
            let bottom = format_price(Some(low), self.currency);
            let label_width = top.chars().count().max(bottom.chars().count()) as u16 + 1;
            if area.width > label_width + 4 {
                let label_style = Style::default().fg(Color::DarkGray);
                buf.set_string(area.x, area.y, &top, label_style);
                buf.set_string(area.x, area.bottom() - 1, &bottom, label_style);
                plot.x += label_width;
                plot.width -= label_width;
            }
        }

        let visible = &self.candles[self.candles.len().saturating_sub(plot.width as usize)..];
        let column_width = (plot.width as usize / visible.len()).max(1);
        let scale = Scale::new(low, high, plot.height);

        for (i, candle) in visible.iter().enumerate() {
            let x = plot.x + (i * column_width + column_width / 2) as u16;
            if x >= plot.right() {
                break;
            }
            let style = if candle.is_bullish() { self.bullish } else { self.bearish };

            let body_top = scale.row(candle.body_high());
            let body_bottom = scale.row(candle.body_low());
            for row in scale.row(candle.high)..=scale.row(candle.low) {
                let symbol = if (body_top..=body_bottom).contains(&row) { BODY } else { WICK };
                if let Some(cell) = buf.cell_mut((x, plot.y + row)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

/// Maps prices to rows, row 0 being the highest price.
struct Scale {
    low: Decimal,
    span: Decimal,
    rows: u16,
}

impl Scale {
    fn new(low: Decimal, high: Decimal, height: u16) -> Self {
        Self {
            low,
            span: high - low,
            rows: height.saturating_sub(1),
        }
    }

    fn row(&self, price: Decimal) -> u16 {
        if self.span.is_zero() {
            return self.rows / 2;
        }
        let from_bottom = (price - self.low) / self.span * Decimal::from(self.rows);
        let from_bottom = from_bottom.round().to_u16().unwrap_or(0).min(self.rows);
        self.rows - from_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rust_decimal_macros::dec;

    fn candle(i: i64, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Candle {
        Candle {
            timestamp: DateTime::from_timestamp(i * 60, 0).unwrap(),
            open,
            high,
            low,
            close,
        }
    }

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("")
    }

    #[test]
    fn test_empty_series_shows_fallback() {
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&[]).render(area, &mut buf);

        let text: String = (0..area.width).map(|x| symbol_at(&buf, x, 0)).collect();
        assert!(text.contains("No data available"));
    }

    #[test]
    fn test_single_candle_spans_full_height() {
        let candles = [candle(0, dec!(2), dec!(4), dec!(0), dec!(3))];
        let area = Rect::new(0, 0, 1, 5);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&candles).axis(false).render(area, &mut buf);

        let column: Vec<&str> = (0..5).map(|y| symbol_at(&buf, 0, y)).collect();
        // high 4 at row 0, body 3..2 at rows 1..2, low 0 at row 4
        assert_eq!(column, vec![WICK, BODY, BODY, WICK, WICK]);
        assert_eq!(buf.cell((0, 1)).unwrap().fg, Color::Green);
    }

    #[test]
    fn test_bearish_candle_is_red() {
        let candles = [
            candle(0, dec!(10), dec!(12), dec!(8), dec!(9)),
            candle(1, dec!(9), dec!(10), dec!(7), dec!(10)),
        ];
        let area = Rect::new(0, 0, 2, 6);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&candles).axis(false).render(area, &mut buf);

        let first = (0..6).find(|&y| symbol_at(&buf, 0, y) == BODY).unwrap();
        assert_eq!(buf.cell((0, first)).unwrap().fg, Color::Red);
        let second = (0..6).find(|&y| symbol_at(&buf, 1, y) == BODY).unwrap();
        assert_eq!(buf.cell((1, second)).unwrap().fg, Color::Green);
    }

    #[test]
    fn test_narrow_area_keeps_latest_candles() {
        let candles: Vec<Candle> = (0..20)
            .map(|i| {
                let p = Decimal::from(i);
                candle(i, p, p + dec!(1), p, p + dec!(1))
            })
            .collect();
        let area = Rect::new(0, 0, 5, 10);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&candles).axis(false).render(area, &mut buf);

        // The latest candle reaches the highest price, at the top row
        assert_eq!(symbol_at(&buf, 4, 0), BODY);
        assert_eq!(symbol_at(&buf, 0, 0), " ");
    }

    #[test]
    fn test_flat_series_draws_middle_row() {
        let candles = [candle(0, dec!(5), dec!(5), dec!(5), dec!(5))];
        let area = Rect::new(0, 0, 1, 5);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&candles).axis(false).render(area, &mut buf);
        assert_eq!(symbol_at(&buf, 0, 2), BODY);
    }

    #[test]
    fn test_axis_labels() {
        let candles = [candle(0, dec!(100), dec!(110), dec!(90), dec!(105))];
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        CandleChart::new(&candles).render(area, &mut buf);

        let top: String = (0..8).map(|x| symbol_at(&buf, x, 0)).collect();
        let bottom: String = (0..7).map(|x| symbol_at(&buf, x, 4)).collect();
        assert_eq!(top, "$110.00 ");
        assert_eq!(bottom, "$90.00 ");
    }
}
