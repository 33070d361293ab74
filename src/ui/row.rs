use crate::market::Coin;

/// Display-ready text for one coin row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRow {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub rising: bool,
}

impl From<&Coin> for CoinRow {
    fn from(coin: &Coin) -> Self {
        Self {
            symbol: coin.symbol.to_uppercase(),
            name: coin.name.clone(),
            price: format_price(coin.current_price),
            change: format_change(coin.price_change_percentage_24h),
            rising: coin.price_change_percentage_24h >= 0.0,
        }
    }
}

/// `$` + grouped integer part + at most 3 fraction digits (6 below 1.0),
/// trailing zeros dropped.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "$-".to_string();
    }

    let digits = if price.abs() >= 1.0 { 3 } else { 6 };
    let fixed = format!("{:.*}", digits, price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if price < 0.0 && !is_zero { "-" } else { "" };

    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, frac)
    }
}

pub fn format_change(change: f64) -> String {
    format!("{:.2}%", change)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
