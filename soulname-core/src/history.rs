//! Caller-side history of generated names.
//!
//! The selector never stores results. Front ends keep a [`History`],
//! record each new name at the front and hand [`History::as_slice`] back in
//! the next request so recent names are avoided.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SoulnameError};
use crate::types::{GeneratedName, NameId};

/// Newest-first list of generated names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<GeneratedName>,
}

impl History {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a freshly generated name at the front.
    pub fn record(&mut self, name: GeneratedName) {
        self.entries.insert(0, name);
    }

    /// Drop the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: NameId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// The newest `n` entries.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[GeneratedName] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// All entries, newest first.
    #[must_use]
    pub fn as_slice(&self) -> &[GeneratedName] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a JSON array.
    ///
    /// # Errors
    /// Returns [`SoulnameError::Serialization`] on failure.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SoulnameError::Serialization(e.to_string()))
    }

    /// Parse a JSON array written by [`History::to_json`].
    ///
    /// # Errors
    /// Returns [`SoulnameError::Serialization`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SoulnameError::Serialization(e.to_string()))
    }
}

impl From<Vec<GeneratedName>> for History {
    fn from(entries: Vec<GeneratedName>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn name(n: u128, local: &str) -> GeneratedName {
        GeneratedName {
            id: NameId(Uuid::from_u128(n)),
            local_full_name: local.to_string(),
            romanized_full_name: "Kim Test".to_string(),
            ancestry_markers: "金".to_string(),
            surname_meaning: "Gold".to_string(),
            given_name_meaning: "Test".to_string(),
            interpretation: "text".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn record_prepends() {
        let mut history = History::new();
        history.record(name(1, "김하나"));
        history.record(name(2, "김두리"));
        assert_eq!(history.as_slice()[0].local_full_name, "김두리");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn recent_is_capped() {
        let mut history = History::new();
        for i in 0..3 {
            history.record(name(i, "김하나"));
        }
        assert_eq!(history.recent(5).len(), 3);
        assert_eq!(history.recent(2).len(), 2);
        assert_eq!(history.recent(2)[0].id, NameId(Uuid::from_u128(2)));
    }

    #[test]
    fn remove_by_id() {
        let mut history = History::new();
        history.record(name(1, "김하나"));
        history.record(name(2, "김두리"));
        assert!(history.remove(NameId(Uuid::from_u128(1))));
        assert!(!history.remove(NameId(Uuid::from_u128(1))));
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }

    #[test]
    fn json_is_a_plain_array() {
        let mut history = History::new();
        history.record(name(1, "김하나"));
        let json = history.to_json().expect("serialize");
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"localFullName\""));
        assert_eq!(History::from_json(&json).expect("parse"), history);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = History::from_json("{").expect_err("must fail");
        assert!(matches!(err, SoulnameError::Serialization(_)));
    }
}
