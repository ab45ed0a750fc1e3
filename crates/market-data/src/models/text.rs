//! Lenient text values for backend fields.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer};

/// A field value kept in its display form.
///
/// The backend mostly sends strings, but some feeds emit bare JSON numbers
/// or booleans for the same columns. Those are stored as their textual form
/// so every column can be sorted and formatted the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldText(String);

impl FieldText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for FieldText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextInput {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl<'de> Deserialize<'de> for FieldText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match TextInput::deserialize(deserializer)? {
            TextInput::String(s) => s,
            TextInput::Number(n) => n.to_string(),
            TextInput::Bool(b) => b.to_string(),
        };
        Ok(FieldText(text))
    }
}
