use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Opaque coin identifier as sent by the price source.
///
/// The source is free to encode it as a JSON string or a JSON number;
/// both are kept as text so that equality is stable across pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = CoinId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CoinId, E> {
                Ok(CoinId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CoinId, E> {
                Ok(CoinId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CoinId, E> {
                Ok(CoinId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CoinId, E> {
                Ok(CoinId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One coin record from a price page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    /// Display name (e.g., "Bitcoin").
    pub name: String,
    /// Short ticker code as sent by the source, usually lower-case (e.g., "btc").
    pub symbol: String,
    /// Image URL. Not rendered by the terminal surface.
    #[serde(default)]
    pub image: String,
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    #[serde(rename = "priceChangePercentage24h")]
    pub price_change_percentage_24h: f64,
}

/// Envelope of one page response: `{ "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct CoinPage {
    pub data: Vec<Coin>,
}
