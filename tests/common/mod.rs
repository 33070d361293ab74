//! Shared test utilities: scripted fetchers, observers and coin builders.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use async_trait::async_trait;
use coinpager::fetch::{FetchError, PageFetcher, PageIndex};
use coinpager::market::{Coin, CoinId};
use coinpager::store::{DatasetStore, FetchObserver};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn coin(id: &str, name: &str, symbol: &str) -> Coin {
    Coin {
        id: CoinId::new(id),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: format!("https://img.example.com/{}.png", id),
        current_price: 1.0,
        price_change_percentage_24h: 0.0,
    }
}

/// `count` distinct coins numbered from `start`.
pub fn coins(start: usize, count: usize) -> Vec<Coin> {
    (start..start + count)
        .map(|i| coin(&format!("coin-{}", i), &format!("Coin {}", i), &format!("c{}", i)))
        .collect()
}

pub fn status_error(status: u16) -> FetchError {
    FetchError::Status {
        status,
        message: "unavailable".to_string(),
    }
}

pub fn malformed_error() -> FetchError {
    let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    FetchError::Malformed { source }
}

// -- Fetcher mocks ------------------------------------------------------------

/// Answers page requests from a script, in order, and records every call.
/// Once the script runs out it answers with empty pages.
#[derive(Default)]
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Vec<Coin>, FetchError>>>,
    calls: Mutex<Vec<u32>>,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, coins: Vec<Coin>) {
        self.script.lock().unwrap().push_back(Ok(coins));
    }

    pub fn push_err(&self, error: FetchError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Page numbers requested so far.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, page: PageIndex) -> Result<Vec<Coin>, FetchError> {
        self.calls.lock().unwrap().push(page.get());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// -- Observer mocks -----------------------------------------------------------

#[derive(Default)]
pub struct RecordingObserver {
    errors: Mutex<Vec<(u32, String)>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// `(page, error kind)` for every reported failure.
    pub fn errors(&self) -> Vec<(u32, String)> {
        self.errors.lock().unwrap().clone()
    }
}

impl FetchObserver for RecordingObserver {
    fn on_fetch_error(&self, page: PageIndex, error: &FetchError) {
        self.errors
            .lock()
            .unwrap()
            .push((page.get(), error.kind().to_string()));
    }
}

// -- Composite builders -------------------------------------------------------

pub fn make_store() -> (DatasetStore, Arc<ScriptedFetcher>, Arc<RecordingObserver>) {
    let fetcher = ScriptedFetcher::new();
    let observer = RecordingObserver::new();
    let store = DatasetStore::with_observer(fetcher.clone(), observer.clone());
    (store, fetcher, observer)
}
