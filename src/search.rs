//! Live text filtering of the coin dataset.

use crate::market::Coin;

/// Positions of the coins that match a query, in dataset order.
///
/// The view does not own coins. Resolve it against the same dataset slice
/// it was computed from; it is rebuilt whenever the dataset or query changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn iter<'a>(&'a self, coins: &'a [Coin]) -> impl Iterator<Item = &'a Coin> + 'a {
        self.positions.iter().filter_map(move |&i| coins.get(i))
    }

    pub fn get<'a>(&self, coins: &'a [Coin], index: usize) -> Option<&'a Coin> {
        self.positions.get(index).and_then(|&i| coins.get(i))
    }
}

/// Filters `coins` by `query`.
///
/// A blank query keeps everything. Otherwise a coin is kept when the query
/// occurs, ignoring case, in its name or its symbol.
pub fn apply_query(coins: &[Coin], query: &str) -> FilteredView {
    if query.trim().is_empty() {
        return FilteredView {
            positions: (0..coins.len()).collect(),
        };
    }

    let needle = query.to_lowercase();
    let positions = coins
        .iter()
        .enumerate()
        .filter(|(_, coin)| matches(coin, &needle))
        .map(|(i, _)| i)
        .collect();

    FilteredView { positions }
}

/// `needle` must already be lower-cased.
fn matches(coin: &Coin, needle: &str) -> bool {
    coin.name.to_lowercase().contains(needle) || coin.symbol.to_lowercase().contains(needle)
}
