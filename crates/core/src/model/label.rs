use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while reading a label or level from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("unknown section label: {0}")]
    UnknownLabel(String),
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

//
// ─── LABEL ────────────────────────────────────────────────────────────────────
//

/// Section heading recognized in a generated roadmap.
///
/// The vocabulary is closed: text that does not start with one of these
/// headings is treated as content of the preceding section. Matching is
/// case-sensitive and literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Label {
    Assumptions,
    RoadmapStructure,
    Goal,
    Topics,
    Exercises,
    Online,
    Resources,
    Books,
    ImportantNotes,
    ContributeToOpenSource,
    Activities,
    Milestone,
}

impl Label {
    /// Every recognized label, in vocabulary order.
    pub const ALL: [Label; 12] = [
        Label::Assumptions,
        Label::RoadmapStructure,
        Label::Goal,
        Label::Topics,
        Label::Exercises,
        Label::Online,
        Label::Resources,
        Label::Books,
        Label::ImportantNotes,
        Label::ContributeToOpenSource,
        Label::Activities,
        Label::Milestone,
    ];

    /// The heading text as it appears in a roadmap.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Assumptions => "Assumptions",
            Label::RoadmapStructure => "Roadmap Structure",
            Label::Goal => "Goal",
            Label::Topics => "Topics",
            Label::Exercises => "Exercises",
            Label::Online => "Online",
            Label::Resources => "Resources",
            Label::Books => "Books",
            Label::ImportantNotes => "Important Notes",
            Label::ContributeToOpenSource => "Contribute to Open Source Projects",
            Label::Activities => "Activities",
            Label::Milestone => "Milestone",
        }
    }

    /// Milestones are drawn apart from the other sections.
    #[must_use]
    pub fn is_milestone(self) -> bool {
        matches!(self, Label::Milestone)
    }

    /// The goal section is shown as plain text rather than a checklist.
    #[must_use]
    pub fn is_plain_text(self) -> bool {
        matches!(self, Label::Goal)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| LabelError::UnknownLabel(s.to_string()))
    }
}

impl TryFrom<String> for Label {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

//
// ─── LEVEL ────────────────────────────────────────────────────────────────────
//

/// Self-reported experience level sent along with the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LabelError::UnknownLevel(s.to_string()))
    }
}
