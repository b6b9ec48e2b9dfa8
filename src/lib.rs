//! State layer for surfacing client-side errors in the API catalog UI.
//!
//! Raised errors are wrapped by [`ui::errors::send_error`] into timestamped
//! records, dispatched through a [`ui::store::Store`], and accumulated by
//! [`ui::errors::ErrorReducer`] until the UI clears them.

pub mod config;
pub mod logging;
pub mod ui;
