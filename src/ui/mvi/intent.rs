//! Marker trait for dispatchable intents.

/// Data handed to [`Store::dispatch`](crate::ui::store::Store::dispatch).
///
/// Action creators build intents; reducers consume them by value.
pub trait Intent: Send + 'static {}
