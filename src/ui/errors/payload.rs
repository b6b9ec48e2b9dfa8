//! Typed error payload carried by an [`ErrorRecord`](super::ErrorRecord).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity attached to an [`ApiError`].
///
/// Each variant has a fixed numeric id, level name and letter; these are
/// what the catalog services emit on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MessageTypeRepr", try_from = "MessageTypeRepr")]
pub enum MessageType {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

const ALL: [MessageType; 5] = [
    MessageType::Trace,
    MessageType::Debug,
    MessageType::Info,
    MessageType::Warning,
    MessageType::Error,
];

impl MessageType {
    /// Looks up the variant matching all three parts, `None` otherwise.
    pub fn new(id: u8, level: &str, letter: char) -> Option<Self> {
        ALL.into_iter()
            .find(|t| t.id() == id && t.level() == level && t.letter() == letter)
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Trace => 0,
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warning => 'W',
            Self::Error => 'E',
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown message type ({id}, {level}, {letter})")]
pub struct UnknownMessageType {
    id: u8,
    level: String,
    letter: char,
}

#[derive(Serialize, Deserialize)]
struct MessageTypeRepr {
    id: u8,
    level: String,
    letter: char,
}

impl From<MessageType> for MessageTypeRepr {
    fn from(t: MessageType) -> Self {
        Self {
            id: t.id(),
            level: t.level().to_string(),
            letter: t.letter(),
        }
    }
}

impl TryFrom<MessageTypeRepr> for MessageType {
    type Error = UnknownMessageType;

    fn try_from(repr: MessageTypeRepr) -> Result<Self, UnknownMessageType> {
        MessageType::new(repr.id, &repr.level, repr.letter).ok_or(UnknownMessageType {
            id: repr.id,
            level: repr.level,
            letter: repr.letter,
        })
    }
}

/// Error reported by a catalog service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Message key, e.g. `"ZWEAC100E"`.
    pub code: String,
    /// HTTP status of the failed call.
    pub status: u16,
    pub message_type: MessageType,
    /// Human-readable message text.
    pub text: String,
}

impl ApiError {
    pub fn new(
        code: impl Into<String>,
        status: u16,
        message_type: MessageType,
        text: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            status,
            message_type,
            text: text.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_type_lookup_requires_all_parts() {
        assert_eq!(MessageType::new(40, "ERROR", 'E'), Some(MessageType::Error));
        assert_eq!(MessageType::new(30, "WARNING", 'W'), Some(MessageType::Warning));
        assert_eq!(MessageType::new(40, "ERROR", 'W'), None);
        assert_eq!(MessageType::new(41, "ERROR", 'E'), None);
    }

    #[test]
    fn api_error_uses_camel_case_and_message_type_triple() {
        let err = ApiError::new("ABC123", 123, MessageType::Error, "Bad stuff happened");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "ABC123",
                "status": 123,
                "messageType": { "id": 40, "level": "ERROR", "letter": "E" },
                "text": "Bad stuff happened",
            })
        );
    }

    #[test]
    fn message_type_decodes_from_triple() {
        let decoded: MessageType =
            serde_json::from_value(json!({ "id": 40, "level": "ERROR", "letter": "E" })).unwrap();
        assert_eq!(decoded, MessageType::Error);
        assert_eq!(
            MessageType::try_from(MessageTypeRepr::from(MessageType::Info)).unwrap(),
            MessageType::Info
        );
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let value = json!({
            "code": "X",
            "status": 500,
            "messageType": { "id": 99, "level": "FATAL", "letter": "F" },
            "text": "boom",
        });
        assert!(serde_json::from_value::<ApiError>(value).is_err());
    }

    #[test]
    fn display_joins_code_and_text() {
        let err = ApiError::new("ZWEAC104E", 404, MessageType::Error, "Service not found");
        assert_eq!(err.to_string(), "ZWEAC104E Service not found");
    }
}
