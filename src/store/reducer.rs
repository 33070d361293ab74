use crate::mvi::Reducer;
use crate::store::intent::DatasetIntent;
use crate::store::state::DatasetState;

pub struct DatasetReducer;

impl Reducer for DatasetReducer {
    type State = DatasetState;
    type Intent = DatasetIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DatasetIntent::FetchStarted => {
                if !state.pagination.can_request() {
                    return state;
                }
                let mut state = state;
                state.pagination.in_flight = true;
                state
            }
            // Completions without an outstanding request are ignored.
            _ if !state.pagination.in_flight => state,
            DatasetIntent::PageLoaded { coins } if coins.is_empty() => {
                Self::reduce(state, DatasetIntent::PageEmpty)
            }
            DatasetIntent::PageLoaded { coins } => {
                let mut state = state;
                state.coins.extend(coins);
                state.pagination.next_page = state.pagination.next_page.next();
                state.pagination.in_flight = false;
                state
            }
            DatasetIntent::PageEmpty => {
                let mut state = state;
                state.pagination.has_more = false;
                state.pagination.in_flight = false;
                state
            }
            DatasetIntent::FetchFailed => {
                let mut state = state;
                state.pagination.in_flight = false;
                state
            }
        }
    }
}
