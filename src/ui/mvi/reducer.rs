//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// The only place state changes. Implementations take the previous state by
/// value and return the next one; side effects belong to action creators.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Whether `intent` would change `state`. The store skips the reducer
    /// and its subscribers when this returns `false`.
    fn changes(_state: &Self::State, _intent: &Self::Intent) -> bool {
        true
    }
}
