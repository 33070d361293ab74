//! Page fetching.
//!
//! A [`PageFetcher`] turns a 1-based page index into one page of coins.
//! It performs exactly one request per call: no retry, no backoff and no
//! request deadline. Callers decide what to do with a [`FetchError`].

mod error;
mod http;

use std::fmt;
use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::market::Coin;

pub use error::FetchError;
pub use http::{HttpPageFetcher, DEFAULT_PAGE_SIZE};

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(NonZeroU32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(NonZeroU32::MIN);

    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of coin pages.
///
/// An empty `Ok` page is a valid answer and means the source has no
/// more coins. Implementations must not retry on their own.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: PageIndex) -> Result<Vec<Coin>, FetchError>;
}
