//! Marker trait for intents.

/// An action requested by a screen or by the session itself
/// (navigate, go back, add a sample to the cart, ...).
pub trait Intent: Send + 'static {}
