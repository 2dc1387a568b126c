//! Market ticker rows for the dashboard strip.
//!
//! The market feed sends every numeric field as a string; accessors parse
//! them with a zero fallback so a malformed tick never breaks rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketTicker {
    pub symbol: Option<String>,
    #[serde(rename = "lastPrice")]
    pub last_price: Option<String>,
    #[serde(rename = "priceChange")]
    pub price_change: Option<String>,
    #[serde(rename = "priceChangePercent")]
    pub price_change_percent: Option<String>,
    #[serde(rename = "quoteVolume")]
    pub quote_volume: Option<String>,
}

impl MarketTicker {
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or("")
    }

    pub fn last_price(&self) -> f64 {
        parse_or_zero(self.last_price.as_deref())
    }

    pub fn price_change_percent(&self) -> f64 {
        parse_or_zero(self.price_change_percent.as_deref())
    }

    pub fn quote_volume(&self) -> f64 {
        parse_or_zero(self.quote_volume.as_deref())
    }
}

fn parse_or_zero(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}
