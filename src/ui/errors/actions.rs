//! Action creators for the error list.

use std::time::SystemTime;

use uuid::Uuid;

use super::intent::ErrorIntent;
use super::payload::ApiError;
use super::state::ErrorRecord;

/// Identity and time for new records.
pub trait RecordSource {
    fn next_id(&self) -> Uuid;
    fn now(&self) -> SystemTime;
}

/// Random v4 ids and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl RecordSource for SystemSource {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Wraps `error` in a fresh [`ErrorRecord`] and returns the intent that
/// appends it.
pub fn send_error(error: ApiError) -> ErrorIntent {
    send_error_with(error, &SystemSource)
}

pub fn send_error_with(error: ApiError, source: &dyn RecordSource) -> ErrorIntent {
    let record = ErrorRecord::new(source.next_id(), source.now(), error);
    tracing::error!(
        id = %record.id(),
        code = %record.error().code,
        status = record.error().status,
        message_type = record.error().message_type.level(),
        "Error: {}",
        record.error()
    );
    ErrorIntent::SendError(record)
}

pub fn clear_all_errors() -> ErrorIntent {
    ErrorIntent::ClearAllErrors
}
