use roadmap_core::SectionParser;
use roadmap_core::model::{Level, ProgressKey, ProgressMap, Section};
use tracing::{debug, info, warn};

use crate::error::ResponderError;
use crate::responder::PromptResponder;
use crate::session_store::SessionPersistence;

/// Shown for any failed generation, whatever the cause.
pub const GENERATE_ERROR_MESSAGE: &str = "Error generating roadmap! Please try again later.";

//
// ─── GENERATION ───────────────────────────────────────────────────────────────
//

/// The inputs captured when a generation starts.
///
/// Hand it back to [`RoadmapSession::finish_generate`]; a request that was
/// superseded or cleared in the meantime is dropped there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub goal: String,
    pub level: Level,
    ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Nothing was sent or applied: a request is already in flight, the goal
    /// is blank, or the result belongs to a request that is no longer pending.
    Ignored,
    Generated,
    Failed,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// The roadmap screen's state.
///
/// Every mutation of the goal, the raw roadmap or the progress map is written
/// through to [`SessionPersistence`] before the call returns. Sections are
/// never stored; they are re-derived from the raw roadmap on demand.
pub struct RoadmapSession {
    persistence: SessionPersistence,
    parser: SectionParser,
    goal: String,
    level: Level,
    roadmap: String,
    progress: ProgressMap,
    issued: u64,
    pending: Option<u64>,
    error: Option<String>,
}

impl RoadmapSession {
    /// Rebuild the session from whatever the previous run persisted.
    pub async fn restore(persistence: SessionPersistence, parser: SectionParser) -> Self {
        let snapshot = persistence.restore().await;
        info!(
            has_goal = snapshot.goal.is_some(),
            has_roadmap = snapshot.roadmap.is_some(),
            has_progress = snapshot.progress.is_some(),
            "restored roadmap session"
        );

        Self {
            persistence,
            parser,
            goal: snapshot.goal_or_default(),
            level: Level::default(),
            roadmap: snapshot.roadmap_or_default(),
            progress: snapshot.progress_or_default(),
            issued: 0,
            pending: None,
            error: None,
        }
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn roadmap(&self) -> &str {
        &self.roadmap
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sections of the current roadmap. Empty when the text has no
    /// recognized labels.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.parser.sections(&self.roadmap)
    }

    pub async fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
        self.persistence.save_goal(&self.goal).await;
    }

    /// The level only lives for the current run.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Enter the loading state and capture the request to send.
    ///
    /// Returns `None` while another request is in flight or when the goal is
    /// blank.
    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        if self.pending.is_some() {
            debug!("generation already in flight; ignoring submit");
            return None;
        }
        if self.goal.trim().is_empty() {
            return None;
        }

        self.issued += 1;
        self.pending = Some(self.issued);
        self.error = None;
        Some(GenerateRequest {
            goal: self.goal.clone(),
            level: self.level,
            ticket: self.issued,
        })
    }

    /// Leave the loading state with the responder's result.
    ///
    /// On failure the previous roadmap is kept and a generic message is
    /// recorded. Results for a request that is no longer pending, because
    /// the session was cleared meanwhile, are dropped without touching state
    /// or the store.
    pub async fn finish_generate(
        &mut self,
        request: &GenerateRequest,
        result: Result<String, ResponderError>,
    ) -> GenerateOutcome {
        if self.pending != Some(request.ticket) {
            debug!(ticket = request.ticket, "generation no longer pending; dropping result");
            return GenerateOutcome::Ignored;
        }
        self.pending = None;

        match result {
            Ok(roadmap) => {
                self.roadmap = roadmap;
                self.persistence.save_roadmap(&self.roadmap).await;
                self.persistence.save_progress(&self.progress).await;
                info!(sections = self.sections().len(), "roadmap generated");
                GenerateOutcome::Generated
            }
            Err(err) => {
                warn!(error = %err, "roadmap generation failed");
                self.error = Some(GENERATE_ERROR_MESSAGE.to_string());
                GenerateOutcome::Failed
            }
        }
    }

    /// Run a whole generation against `responder`.
    pub async fn generate(&mut self, responder: &dyn PromptResponder) -> GenerateOutcome {
        let Some(request) = self.begin_generate() else {
            return GenerateOutcome::Ignored;
        };
        let result = responder.generate(&request.goal, request.level).await;
        self.finish_generate(&request, result).await
    }

    /// Flip one checklist line and persist the whole progress map.
    pub async fn toggle(&mut self, key: ProgressKey) -> bool {
        let done = self.progress.toggle(key);
        self.persistence.save_progress(&self.progress).await;
        done
    }

    /// Forget the goal, the roadmap and all progress, in memory and in the
    /// store. A generation in flight is abandoned.
    pub async fn clear(&mut self) {
        self.pending = None;
        self.goal.clear();
        self.roadmap.clear();
        self.progress.clear();
        self.error = None;
        self.persistence.reset().await;
        info!("roadmap session cleared");
    }
}
