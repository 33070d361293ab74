use crate::fetch::{FetchError, PageIndex};

/// Receives fetch failures that the store has absorbed.
pub trait FetchObserver: Send + Sync {
    fn on_fetch_error(&self, page: PageIndex, error: &FetchError);
}

/// Default observer: one `warn` event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_fetch_error(&self, page: PageIndex, error: &FetchError) {
        tracing::warn!(
            page = page.get(),
            kind = error.kind(),
            error = %error,
            "Coin page fetch failed"
        );
    }
}
