//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Apply `intent` to `state`. Must not perform I/O; persistence and
    /// logging of the outcome belong to the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
