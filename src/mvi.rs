//! Intent/reducer primitives.
//!
//! Models in this crate change only by folding intents through a reducer:
//! the reducer gets the old value by move and hands back the new one, with
//! no I/O in between. Whoever owns the model decides when intents arrive.

/// Something that happened to a model: a user action or a system event.
pub trait Intent: Send + 'static {}

/// A model value. `Default` is the state before any intent was applied.
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function for one model type.
pub trait Reducer {
    type State: ModelState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduces the state stored in `slot` in place.
    fn apply(slot: &mut Self::State, intent: Self::Intent) {
        let state = std::mem::take(slot);
        *slot = Self::reduce(state, intent);
    }
}
