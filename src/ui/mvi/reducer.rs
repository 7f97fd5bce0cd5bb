//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition for one widget.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Returns the next state. Must not touch anything outside `state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
