//! Reducer for the error list.

use crate::ui::mvi::{DecodeInstruction, Instruction, Reducer};

use super::actions::RecordSource;
use super::intent::ErrorIntent;
use super::state::ErrorState;

/// Appends sent errors and clears them all on request.
pub struct ErrorReducer;

impl Reducer for ErrorReducer {
    type State = ErrorState;
    type Intent = ErrorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ErrorIntent::ClearAllErrors => ErrorState::default(),
            ErrorIntent::SendError(record) => state.appended(record),
        }
    }

    fn changes(state: &Self::State, intent: &Self::Intent) -> bool {
        match intent {
            ErrorIntent::ClearAllErrors => !state.is_empty(),
            ErrorIntent::SendError(_) => true,
        }
    }
}

impl ErrorReducer {
    /// Applies a raw instruction. `None` means no state exists yet and the
    /// empty default is used. A bare error payload gets its id and timestamp
    /// from `records`. Instructions that are not error intents leave the
    /// state as it was.
    pub fn reduce_instruction(
        state: Option<ErrorState>,
        instruction: Instruction,
        records: &(dyn RecordSource + 'static),
    ) -> ErrorState {
        let state = state.unwrap_or_default();
        match ErrorIntent::decode(instruction, records) {
            Ok(intent) => Self::reduce(state, intent),
            Err(_) => state,
        }
    }
}
