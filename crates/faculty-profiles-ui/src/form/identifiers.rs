//! Controller for the identifiers multi-select.

/// An ordered, deduplicated list of bare identifier strings.
///
/// The field never edits schemes; those are re-attached on submission by
/// matching values against the persisted record. Options for the select
/// derive from the current entries, so adding an existing value is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifiersField {
    entries: Vec<String>,
}

impl IdentifiersField {
    /// Builds the field from the deserialized form values, trimming and
    /// deduplicating while preserving first-seen order.
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        let mut field = Self::default();
        for entry in entries {
            field.add(entry);
        }
        field
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Adds a value. Blank input and values already present are no-ops;
    /// returns whether the list changed.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        let value = value.into().trim().to_string();
        if value.is_empty() || self.contains(&value) {
            return false;
        }
        self.entries.push(value);
        true
    }

    /// Removes a value; returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != value);
        self.entries.len() != before
    }

    /// The values to submit, in display order.
    #[must_use]
    pub fn submitted_values(&self) -> Vec<String> {
        self.entries.clone()
    }
}
