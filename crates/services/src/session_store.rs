use std::sync::Arc;

use roadmap_core::model::{ProgressMap, SessionSnapshot};
use storage::repository::KeyValueStore;
use tracing::warn;

pub const GOAL_KEY: &str = "eduaid_goal";
pub const ROADMAP_KEY: &str = "eduaid_roadmap";
pub const PROGRESS_KEY: &str = "eduaid_progress";

/// Shadows the goal, the raw roadmap and the progress map into a key-value
/// store.
///
/// Every operation is best-effort: failures are logged and otherwise
/// ignored, and anything that cannot be read back counts as absent.
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl SessionPersistence {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save_goal(&self, goal: &str) {
        self.write(GOAL_KEY, goal).await;
    }

    pub async fn save_roadmap(&self, roadmap: &str) {
        self.write(ROADMAP_KEY, roadmap).await;
    }

    pub async fn save_progress(&self, progress: &ProgressMap) {
        match progress.to_json() {
            Ok(json) => self.write(PROGRESS_KEY, &json).await,
            Err(err) => warn!(error = %err, "failed to encode progress"),
        }
    }

    /// Read back whatever the last session stored.
    pub async fn restore(&self) -> SessionSnapshot {
        let goal = self.read(GOAL_KEY).await;
        let roadmap = self.read(ROADMAP_KEY).await;
        let progress = self
            .read(PROGRESS_KEY)
            .await
            .and_then(|raw| match ProgressMap::from_json(&raw) {
                Ok(progress) => Some(progress),
                Err(err) => {
                    warn!(error = %err, "discarding unreadable progress");
                    None
                }
            });

        SessionSnapshot {
            goal,
            roadmap,
            progress,
        }
    }

    /// Remove all three keys.
    pub async fn reset(&self) {
        for key in [GOAL_KEY, ROADMAP_KEY, PROGRESS_KEY] {
            if let Err(err) = self.store.remove(key).await {
                warn!(key, error = %err, "failed to remove persisted value");
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.save(key, value).await {
            warn!(key, error = %err, "failed to persist value");
        }
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.load(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted value");
                None
            }
        }
    }
}
