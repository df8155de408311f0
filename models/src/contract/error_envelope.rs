//! Structured error detail returned on failure responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"errors": [...], "user_messages": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
    #[serde(default)]
    pub user_messages: Vec<UserMessage>,
}

impl ErrorEnvelope {
    /// Message of the first error entry, when it carries a non-blank one.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()
            .and_then(|error| error.message.as_deref())
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub code: i64,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub severity: Option<String>,
    pub text: Option<String>,
    pub details: Option<Value>,
}
