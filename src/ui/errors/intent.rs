//! Intents for the error list and their conversion to and from [`Instruction`].
//!
//! A `SEND_ERROR` payload may be a full [`ErrorRecord`] or a bare
//! [`ApiError`]; the latter is wrapped the same way [`send_error`](super::send_error) does.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::actions::{send_error_with, RecordSource};
use super::payload::ApiError;
use super::state::ErrorRecord;
use crate::ui::mvi::{DecodeInstruction, Instruction, Intent};

pub const SEND_ERROR: &str = "SEND_ERROR";
pub const CLEAR_ALL_ERRORS: &str = "CLEAR_ALL_ERRORS";

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorIntent {
    /// Append a record to the end of the list.
    SendError(ErrorRecord),
    /// Drop every record.
    ClearAllErrors,
}

impl Intent for ErrorIntent {}

impl ErrorIntent {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SendError(_) => SEND_ERROR,
            Self::ClearAllErrors => CLEAR_ALL_ERRORS,
        }
    }
}

#[derive(Debug, Error)]
pub enum InstructionError {
    #[error("instruction has no type")]
    MissingTag,

    #[error("unknown instruction type '{0}'")]
    UnknownTag(String),

    #[error("invalid payload for '{tag}': {source}")]
    InvalidPayload {
        tag: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Accepted `SEND_ERROR` payloads: a complete record, or a bare error that
/// still needs an id and a timestamp.
#[derive(Deserialize)]
#[serde(untagged)]
enum SendPayload {
    Record(ErrorRecord),
    Bare(ApiError),
}

impl DecodeInstruction for ErrorIntent {
    type Context = dyn RecordSource;
    type Error = InstructionError;

    fn decode(
        instruction: Instruction,
        records: &Self::Context,
    ) -> Result<Self, InstructionError> {
        let kind = instruction.kind.ok_or(InstructionError::MissingTag)?;
        match kind.as_str() {
            SEND_ERROR => {
                let payload: SendPayload = serde_json::from_value(instruction.payload)
                    .map_err(|source| InstructionError::InvalidPayload {
                        tag: SEND_ERROR,
                        source,
                    })?;
                Ok(match payload {
                    SendPayload::Record(record) => ErrorIntent::SendError(record),
                    SendPayload::Bare(error) => send_error_with(error, records),
                })
            }
            CLEAR_ALL_ERRORS => Ok(ErrorIntent::ClearAllErrors),
            _ => Err(InstructionError::UnknownTag(kind)),
        }
    }
}

impl TryFrom<ErrorIntent> for Instruction {
    type Error = serde_json::Error;

    fn try_from(intent: ErrorIntent) -> Result<Self, Self::Error> {
        let kind = intent.tag();
        let payload = match intent {
            ErrorIntent::SendError(record) => serde_json::to_value(record)?,
            ErrorIntent::ClearAllErrors => Value::Null,
        };
        Ok(Instruction::new(kind, payload))
    }
}
