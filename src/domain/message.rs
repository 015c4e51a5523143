//! Message payload returned by the greeting object route.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A flat record with a single text field.
///
/// Serializes to `{"text":"..."}` as JSON and to
/// `<message><text>...</text></message>` as XML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "message")]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message(text={})", self.text)
    }
}
