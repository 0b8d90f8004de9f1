//! Text formatting for prices, volumes and article text.

use rust_decimal::Decimal;

const MISSING: &str = "n/a";

/// Display prefix for a quote currency code.
pub fn currency_symbol(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "usd" | "" => "$".to_string(),
        "eur" => "€".to_string(),
        "gbp" => "£".to_string(),
        "jpy" | "cny" => "¥".to_string(),
        "inr" => "₹".to_string(),
        "btc" => "₿".to_string(),
        other => format!("{} ", other.to_uppercase()),
    }
}

/// `$64,123.50`, with six decimals below one unit.
pub fn format_price(price: Option<Decimal>, currency: &str) -> String {
    let Some(price) = price else {
        return MISSING.to_string();
    };
    let dp = if price.abs() >= Decimal::ONE { 2 } else { 6 };
    let digits = format!("{:.*}", dp, price.abs().round_dp(dp as u32));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let sign = if price.is_sign_negative() && !price.is_zero() { "-" } else { "" };
    let mut out = format!("{sign}{}{}", currency_symbol(currency), group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `$1.26T`, `$23.40B`, `$512.00K`.
pub fn format_compact(amount: Option<Decimal>, currency: &str) -> String {
    let Some(amount) = amount else {
        return MISSING.to_string();
    };
    let units = [
        (Decimal::from(1_000_000_000_000u64), "T"),
        (Decimal::from(1_000_000_000u64), "B"),
        (Decimal::from(1_000_000u64), "M"),
        (Decimal::from(1_000u64), "K"),
    ];
    let symbol = currency_symbol(currency);
    for (scale, suffix) in units {
        if amount.abs() >= scale {
            return format!("{symbol}{:.2}{suffix}", (amount / scale).round_dp(2));
        }
    }
    format!("{symbol}{:.2}", amount.round_dp(2))
}

/// `+1.25%` or `-0.50%`.
pub fn format_change(change: Option<Decimal>) -> String {
    match change {
        Some(c) if c >= Decimal::ZERO => format!("+{:.2}%", c.round_dp(2)),
        Some(c) => format!("{:.2}%", c.round_dp(2)),
        None => MISSING.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Shorten to at most `max` characters, ending with an ellipsis when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Plain text from a description containing HTML anchors and entities.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("\r\n", "\n")
}
