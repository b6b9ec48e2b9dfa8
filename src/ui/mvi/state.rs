//! Marker trait for store-owned state.

/// State held by a [`Store`](crate::ui::store::Store).
///
/// `Default` supplies the bootstrap value before the first dispatch.
/// `Sync` because the store hands out shared snapshots to listeners.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
