//! Marker trait for reducer-owned state.

/// State owned by a reducer. Cloned to produce new states and compared to
/// detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
