//! Error list feature module.
//!
//! Collects errors raised by catalog calls so the UI can render them.
//!
//! - `payload.rs` - `ApiError` and `MessageType`, the wrapped error
//! - `state.rs` - `ErrorRecord` and `ErrorState` (append-only list)
//! - `intent.rs` - `SendError` / `ClearAllErrors` and instruction decoding
//! - `actions.rs` - action creators; the only place with side effects
//! - `reducer.rs` - state transitions (pure)

mod actions;
mod intent;
mod payload;
mod reducer;
mod state;

pub use actions::{clear_all_errors, send_error, send_error_with, RecordSource, SystemSource};
pub use intent::{ErrorIntent, InstructionError, CLEAR_ALL_ERRORS, SEND_ERROR};
pub use payload::{ApiError, MessageType, UnknownMessageType};
pub use reducer::ErrorReducer;
pub use state::{ErrorRecord, ErrorState};
