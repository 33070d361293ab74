use crate::fetch::PageIndex;
use crate::market::Coin;
use crate::mvi::ModelState;

/// Pagination bookkeeping for the coin dataset.
///
/// Fresh state is `{ next_page: 1, has_more: true, in_flight: false }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub(super) next_page: PageIndex,
    pub(super) has_more: bool,
    pub(super) in_flight: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            next_page: PageIndex::FIRST,
            has_more: true,
            in_flight: false,
        }
    }
}

impl PaginationState {
    pub fn next_page(&self) -> PageIndex {
        self.next_page
    }

    /// False once the source returned an empty page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Single-flight guard: nothing outstanding and not exhausted.
    pub fn can_request(&self) -> bool {
        !self.in_flight && self.has_more
    }
}

/// The accumulated dataset plus its pagination state.
///
/// Coins are append-only in fetch order. Duplicate ids across pages are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetState {
    pub(super) coins: Vec<Coin>,
    pub(super) pagination: PaginationState,
}

impl ModelState for DatasetState {}

impl DatasetState {
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }
}
