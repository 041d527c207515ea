use std::fmt;

use serde::Serialize;

/// A single committed answer.
///
/// Serializes as a plain JSON string, boolean or array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A text value (from Input or Select steps).
    Text(String),

    /// A boolean value (from Confirm steps).
    Flag(bool),

    /// The chosen options, in option order (from MultiSelect steps).
    TextList(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(list) => Some(list),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Flag(_) => "Flag",
            Self::TextList(_) => "TextList",
        }
    }
}

/// Human-readable form used in the "Previous:" log.
impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(true) => f.write_str("Yes"),
            Self::Flag(false) => f.write_str("No"),
            Self::TextList(list) if list.is_empty() => f.write_str("(none)"),
            Self::TextList(list) => f.write_str(&list.join(", ")),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::TextList(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::TextList(list.into_iter().map(str::to_string).collect())
    }
}
