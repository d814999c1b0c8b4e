//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents are already normalized: a swipe, a wheel notch and an arrow key
/// all arrive as the same navigation intent, and a finished fetch arrives as
/// a store intent. Reducers never see raw terminal events.
pub trait Intent: Send + 'static {}
