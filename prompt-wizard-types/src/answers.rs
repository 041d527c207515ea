use std::collections::BTreeMap;

use serde::Serialize;

use crate::{AnswerError, AnswerValue};

/// Committed answers of a wizard run, keyed by step key.
///
/// Inserting under an existing key overwrites the previous answer. Iteration
/// and serialization follow key order, so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert an answer, replacing any previous answer under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the answer stored under `key`.
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Check if an answer exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get an iterator over all key-value pairs, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, key: &str) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::type_mismatch(key, "Text", other)),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_flag(&self, key: &str) -> Result<bool, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Flag(b)) => Ok(*b),
            Some(other) => Err(AnswerError::type_mismatch(key, "Flag", other)),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }

    /// Get a list answer.
    pub fn get_text_list(&self, key: &str) -> Result<&[String], AnswerError> {
        match self.get(key) {
            Some(AnswerValue::TextList(list)) => Ok(list),
            Some(other) => Err(AnswerError::type_mismatch(key, "TextList", other)),
            None => Err(AnswerError::MissingKey(key.to_string())),
        }
    }

    /// Encode as a compact JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}
