//! Untyped instruction form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Instruction as built by callers outside the typed API: a tag and a JSON
/// payload. `{}` deserializes to an instruction with no tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

impl Instruction {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: Some(kind.into()),
            payload,
        }
    }
}

/// Intents that can be built from an [`Instruction`].
///
/// `Context` is whatever decoding needs besides the instruction, e.g. an id
/// and clock source when a payload has to be wrapped.
pub trait DecodeInstruction: Sized {
    type Context: ?Sized;
    type Error;

    fn decode(instruction: Instruction, context: &Self::Context) -> Result<Self, Self::Error>;
}
