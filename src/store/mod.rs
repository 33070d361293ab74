//! Accumulated coin dataset and its paging lifecycle.
//!
//! ```text
//! Idle(has_more) ──trigger──→ Fetching ──non-empty page──→ Idle(has_more)
//!                                 ├──────empty page──────→ Idle(exhausted)
//!                                 └────────failure───────→ Idle(has_more)
//! Idle(exhausted) ──trigger──→ Idle(exhausted)
//! ```
//!
//! The `in_flight` flag is the only lock. All transitions happen on the
//! caller's thread through [`DatasetReducer`]; the fetch itself is the only
//! suspension point, so a fetch can be run inline with
//! [`DatasetStore::request_next_page`] or handed to an event loop as a
//! [`PendingFetch`] and fed back with [`DatasetStore::complete`].

mod intent;
mod observer;
mod reducer;
mod state;

use std::sync::Arc;

use crate::fetch::{FetchError, PageFetcher, PageIndex};
use crate::market::Coin;
use crate::mvi::Reducer;

pub use intent::DatasetIntent;
pub use observer::{FetchObserver, TracingObserver};
pub use reducer::DatasetReducer;
pub use state::{DatasetState, PaginationState};

/// A page request that passed the single-flight guard and has not run yet.
pub struct PendingFetch {
    page: PageIndex,
    fetcher: Arc<dyn PageFetcher>,
}

impl PendingFetch {
    pub fn page(&self) -> PageIndex {
        self.page
    }

    /// Performs the request. Always resolves; failures are carried in the result.
    pub async fn run(self) -> FetchCompletion {
        let result = self.fetcher.fetch_page(self.page).await;
        FetchCompletion {
            page: self.page,
            result,
        }
    }
}

/// Result of a finished page request, ready to be applied to the store.
#[derive(Debug)]
pub struct FetchCompletion {
    pub page: PageIndex,
    pub result: Result<Vec<Coin>, FetchError>,
}

/// What a trigger or a completion did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// A request was already outstanding, or the dataset is exhausted.
    Skipped,
    Appended { page: PageIndex, count: usize },
    Exhausted { page: PageIndex },
    Failed { page: PageIndex },
    /// Completion did not belong to the outstanding request.
    Stale { page: PageIndex },
}

impl PageOutcome {
    pub fn grew(&self) -> bool {
        matches!(self, PageOutcome::Appended { .. })
    }
}

/// Sole owner of the coin dataset and its pagination state.
pub struct DatasetStore {
    state: DatasetState,
    fetcher: Arc<dyn PageFetcher>,
    observer: Arc<dyn FetchObserver>,
}

impl DatasetStore {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_observer(fetcher, Arc::new(TracingObserver))
    }

    pub fn with_observer(fetcher: Arc<dyn PageFetcher>, observer: Arc<dyn FetchObserver>) -> Self {
        Self {
            state: DatasetState::default(),
            fetcher,
            observer,
        }
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn coins(&self) -> &[Coin] {
        self.state.coins()
    }

    pub fn pagination(&self) -> PaginationState {
        self.state.pagination()
    }

    pub fn is_loading(&self) -> bool {
        self.state.pagination().in_flight()
    }

    /// Applies the single-flight guard and marks the next page as in flight.
    ///
    /// Returns `None` while a request is outstanding or after exhaustion.
    pub fn begin_fetch(&mut self) -> Option<PendingFetch> {
        let pagination = self.state.pagination();
        if !pagination.can_request() {
            tracing::trace!(
                in_flight = pagination.in_flight(),
                has_more = pagination.has_more(),
                "Page request skipped"
            );
            return None;
        }

        let page = pagination.next_page();
        self.dispatch(DatasetIntent::FetchStarted);
        tracing::debug!(page = page.get(), "Page request started");

        Some(PendingFetch {
            page,
            fetcher: Arc::clone(&self.fetcher),
        })
    }

    /// Applies a finished request. Clearing `in_flight` is always the last step.
    pub fn complete(&mut self, completion: FetchCompletion) -> PageOutcome {
        let FetchCompletion { page, result } = completion;
        let pagination = self.state.pagination();

        if !pagination.in_flight() || pagination.next_page() != page {
            tracing::warn!(
                page = page.get(),
                expected = pagination.next_page().get(),
                in_flight = pagination.in_flight(),
                "Ignoring stale page completion"
            );
            return PageOutcome::Stale { page };
        }

        match result {
            Ok(coins) if coins.is_empty() => {
                self.dispatch(DatasetIntent::PageEmpty);
                tracing::info!(page = page.get(), total = self.coins().len(), "Coin source exhausted");
                PageOutcome::Exhausted { page }
            }
            Ok(coins) => {
                let count = coins.len();
                self.dispatch(DatasetIntent::PageLoaded { coins });
                tracing::debug!(page = page.get(), count, total = self.coins().len(), "Page appended");
                PageOutcome::Appended { page, count }
            }
            Err(error) => {
                self.observer.on_fetch_error(page, &error);
                self.dispatch(DatasetIntent::FetchFailed);
                PageOutcome::Failed { page }
            }
        }
    }

    /// Runs one full fetch cycle inline, or does nothing if the guard refuses.
    pub async fn request_next_page(&mut self) -> PageOutcome {
        match self.begin_fetch() {
            Some(pending) => {
                let completion = pending.run().await;
                self.complete(completion)
            }
            None => PageOutcome::Skipped,
        }
    }

    fn dispatch(&mut self, intent: DatasetIntent) {
        DatasetReducer::apply(&mut self.state, intent);
    }
}
