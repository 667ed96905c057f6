use crate::model::progress::ProgressMap;

/// What the last session left behind. Each field is stored separately and may
/// be missing on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub goal: Option<String>,
    pub roadmap: Option<String>,
    pub progress: Option<ProgressMap>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn goal_or_default(&self) -> String {
        self.goal.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn roadmap_or_default(&self) -> String {
        self.roadmap.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn progress_or_default(&self) -> ProgressMap {
        self.progress.clone().unwrap_or_default()
    }
}
