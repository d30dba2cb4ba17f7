use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One serialized value. Checkboxes contribute their checked state as a
/// boolean; every other kind contributes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedValue {
    Checked(bool),
    Text(String),
}

impl SavedValue {
    pub fn text(s: &str) -> Self {
        SavedValue::Text(s.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SavedValue::Text(s) => Some(s),
            SavedValue::Checked(_) => None,
        }
    }
}

/// The flat name → values mapping produced by serialization. Encodes to a
/// plain JSON object of arrays of strings and booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    pub entries: BTreeMap<String, Vec<SavedValue>>,
}

impl FormRecord {
    pub fn new() -> Self {
        FormRecord::default()
    }

    /// Append a value to a name's list, creating the list on first use.
    pub fn push(&mut self, name: &str, value: SavedValue) {
        self.entries.entry(name.to_string()).or_default().push(value);
    }

    pub fn get(&self, name: &str) -> Option<&[SavedValue]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
