//! Unidirectional data flow primitives.
//!
//! ```text
//! action creator ──→ Intent ──→ Store::dispatch ──→ Reducer ──→ State
//!                                                                 │
//!                                        subscribers (render) ←───┘
//! ```
//!
//! - **State**: value owned by a store, replaced on every transition
//! - **Intent**: tagged data describing a requested transition
//! - **Reducer**: pure function from (State, Intent) to the next State
//! - **Instruction**: an intent in JSON form, for callers outside the typed API

mod instruction;
mod intent;
mod reducer;
mod state;

pub use instruction::{DecodeInstruction, Instruction};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
