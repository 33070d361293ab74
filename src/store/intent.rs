use crate::market::Coin;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DatasetIntent {
    /// A request for the next page is about to be sent.
    FetchStarted,
    /// The outstanding request returned coins.
    PageLoaded { coins: Vec<Coin> },
    /// The outstanding request returned an empty page.
    PageEmpty,
    /// The outstanding request failed. Nothing but the in-flight flag changes.
    FetchFailed,
}

impl Intent for DatasetIntent {}
