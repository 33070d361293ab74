//! Coin records as delivered by the price source.

mod coin;

pub use coin::{Coin, CoinId, CoinPage};
