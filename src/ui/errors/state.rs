use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payload::ApiError;
use crate::ui::mvi::UiState;

/// A raised error captured at dispatch time.
///
/// Fields are private so that a record cannot change once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    id: Uuid,
    timestamp: SystemTime,
    error: ApiError,
}

impl ErrorRecord {
    pub fn new(id: Uuid, timestamp: SystemTime, error: ApiError) -> Self {
        Self {
            id,
            timestamp,
            error,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn error(&self) -> &ApiError {
        &self.error
    }
}

/// Errors waiting to be shown, most recent last.
///
/// Only [`ErrorReducer`](super::ErrorReducer) adds to the list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorState {
    errors: Vec<ErrorRecord>,
}

impl UiState for ErrorState {}

impl From<Vec<ErrorRecord>> for ErrorState {
    fn from(errors: Vec<ErrorRecord>) -> Self {
        Self { errors }
    }
}

impl ErrorState {
    pub(super) fn appended(mut self, record: ErrorRecord) -> Self {
        self.errors.push(record);
        self
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn latest(&self) -> Option<&ErrorRecord> {
        self.errors.last()
    }
}
