//! The searchable, incrementally loaded coin list.
//!
//! [`CoinBrowser`] is what a rendering surface talks to. It takes two events,
//! [`CoinBrowser::on_query_changed`] and [`CoinBrowser::on_near_end_of_list`],
//! and exposes the visible coins plus a loading flag.

use crate::market::Coin;
use crate::search::{apply_query, FilteredView};
use crate::store::{DatasetStore, FetchCompletion, PageOutcome, PendingFetch};

pub struct CoinBrowser {
    store: DatasetStore,
    query: String,
    view: FilteredView,
}

impl CoinBrowser {
    pub fn new(store: DatasetStore) -> Self {
        let view = apply_query(store.coins(), "");
        Self {
            store,
            query: String::new(),
            view,
        }
    }

    /// Replaces the query and refilters the loaded coins. Never fetches.
    pub fn on_query_changed(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refilter();
    }

    /// Asks for the next page. The caller runs the returned fetch and hands
    /// its completion to [`CoinBrowser::on_page_fetched`].
    pub fn on_near_end_of_list(&mut self) -> Option<PendingFetch> {
        self.store.begin_fetch()
    }

    pub fn on_page_fetched(&mut self, completion: FetchCompletion) -> PageOutcome {
        let outcome = self.store.complete(completion);
        if outcome.grew() {
            self.refilter();
        }
        outcome
    }

    /// Fetches and applies the next page inline.
    pub async fn load_next_page(&mut self) -> PageOutcome {
        let outcome = self.store.request_next_page().await;
        if outcome.grew() {
            self.refilter();
        }
        outcome
    }

    pub fn visible(&self) -> impl Iterator<Item = &Coin> + '_ {
        self.view.iter(self.store.coins())
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    pub fn visible_at(&self, index: usize) -> Option<&Coin> {
        self.view.get(self.store.coins(), index)
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn has_more(&self) -> bool {
        self.store.pagination().has_more()
    }

    pub fn dataset_len(&self) -> usize {
        self.store.coins().len()
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    fn refilter(&mut self) {
        self.view = apply_query(self.store.coins(), &self.query);
    }
}
