//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// State is replaced, never mutated in place: a reducer takes the old value
/// and returns the new one. `Default` is the state before anything happened
/// (an idle store, an inert pager).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
