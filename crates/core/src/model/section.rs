use serde::{Deserialize, Serialize};

use crate::model::label::Label;

/// A labeled span of roadmap text.
///
/// After merging there is at most one `Section` per label and its content is
/// never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    label: Label,
    content: String,
}

impl Section {
    #[must_use]
    pub fn new(label: Label, content: impl Into<String>) -> Self {
        Self {
            label,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content lines paired with their index in the unfiltered line list.
    ///
    /// Blank lines are skipped but still consume an index, so the indices of
    /// the remaining lines do not shift.
    pub fn indexed_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
    }
}
