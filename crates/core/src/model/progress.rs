use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::label::Label;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressKeyError {
    #[error("progress key is missing a line index: {0}")]
    MissingIndex(String),
    #[error("progress key has an invalid line index: {0}")]
    InvalidIndex(String),
    #[error("progress key has an unknown label: {0}")]
    UnknownLabel(String),
}

/// Identifies one checklist line: the section label plus the line's index in
/// that section's content.
///
/// Serialized as `"<Label>-<index>"`, e.g. `"Topics-2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProgressKey {
    label: Label,
    line: usize,
}

impl ProgressKey {
    #[must_use]
    pub fn new(label: Label, line: usize) -> Self {
        Self { label, line }
    }

    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.label, self.line)
    }
}

impl FromStr for ProgressKey {
    type Err = ProgressKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, line) = s
            .rsplit_once('-')
            .ok_or_else(|| ProgressKeyError::MissingIndex(s.to_string()))?;
        let line = line
            .parse::<usize>()
            .map_err(|_| ProgressKeyError::InvalidIndex(s.to_string()))?;
        let label = label
            .parse::<Label>()
            .map_err(|_| ProgressKeyError::UnknownLabel(s.to_string()))?;
        Ok(Self { label, line })
    }
}

impl TryFrom<String> for ProgressKey {
    type Error = ProgressKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProgressKey> for String {
    fn from(key: ProgressKey) -> Self {
        key.to_string()
    }
}

/// Completion flags for checklist lines.
///
/// A missing entry means "not completed". Entries are only ever removed by
/// [`ProgressMap::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap {
    entries: BTreeMap<ProgressKey, bool>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: ProgressKey) -> bool {
        self.entries.get(&key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: ProgressKey, done: bool) {
        self.entries.insert(key, done);
    }

    /// Flip the flag for `key` and return the new value.
    pub fn toggle(&mut self, key: ProgressKey) -> bool {
        let done = !self.get(key);
        self.set(key, done);
        done
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProgressKey, bool)> + '_ {
        self.entries.iter().map(|(key, done)| (*key, *done))
    }

    /// Encode as a JSON object keyed by `"<Label>-<index>"`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from the JSON produced by [`ProgressMap::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a valid progress object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_incomplete() {
        let map = ProgressMap::new();
        assert!(!map.get(ProgressKey::new(Label::Topics, 3)));
    }

    #[test]
    fn toggling_twice_restores_only_that_key() {
        let mut map = ProgressMap::new();
        let other = ProgressKey::new(Label::Exercises, 0);
        map.set(other, true);
        let key = ProgressKey::new(Label::Topics, 1);

        assert!(map.toggle(key));
        assert!(!map.toggle(key));

        assert!(!map.get(key));
        assert!(map.get(other));
    }

    #[test]
    fn clear_empties_the_map() {
        let mut map = ProgressMap::new();
        map.set(ProgressKey::new(Label::Books, 0), true);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn json_uses_label_dash_index_keys() {
        let mut map = ProgressMap::new();
        map.set(ProgressKey::new(Label::ImportantNotes, 2), true);
        map.set(ProgressKey::new(Label::Topics, 0), false);

        let json = map.to_json().unwrap();
        assert_eq!(json, r#"{"Topics-0":false,"Important Notes-2":true}"#);
    }

    #[test]
    fn json_round_trip_preserves_every_flag() {
        let mut map = ProgressMap::new();
        map.set(ProgressKey::new(Label::Milestone, 4), true);
        map.set(ProgressKey::new(Label::Resources, 1), false);

        let restored = ProgressMap::from_json(&map.to_json().unwrap()).unwrap();
        assert_eq!(restored, map);
        assert!(restored.get(ProgressKey::new(Label::Milestone, 4)));
        assert!(!restored.get(ProgressKey::new(Label::Milestone, 5)));
    }

    #[test]
    fn rejects_keys_without_a_known_label() {
        assert!(ProgressMap::from_json(r#"{"Homework-1":true}"#).is_err());
        assert!(ProgressMap::from_json(r#"{"Topics":true}"#).is_err());
        assert!(ProgressMap::from_json("not json").is_err());
    }
}
