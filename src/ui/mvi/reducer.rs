//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// The only place where a state transition happens.
///
/// `reduce` is a pure function `(State, Intent) -> State`. Side effects such
/// as spawning a fetch or opening a link belong to the caller, which inspects
/// the returned state.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
