use std::sync::Arc;

use roadmap_core::SectionParser;
use roadmap_core::model::Label;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::responder::{GeminiResponder, PromptResponder};
use crate::roadmap_session::RoadmapSession;
use crate::session_store::SessionPersistence;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    persistence: SessionPersistence,
    parser: SectionParser,
    responder: Arc<dyn PromptResponder>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the Gemini responder
    /// configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(&storage, Arc::new(GeminiResponder::from_env()))
    }

    /// Build services over an existing storage and responder.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Parser` if the label vocabulary cannot be
    /// compiled.
    pub fn new(
        storage: &Storage,
        responder: Arc<dyn PromptResponder>,
    ) -> Result<Self, AppServicesError> {
        let parser = SectionParser::new(&Label::ALL)?;
        Ok(Self {
            persistence: SessionPersistence::new(Arc::clone(&storage.kv)),
            parser,
            responder,
        })
    }

    #[must_use]
    pub fn persistence(&self) -> SessionPersistence {
        self.persistence.clone()
    }

    #[must_use]
    pub fn responder(&self) -> Arc<dyn PromptResponder> {
        Arc::clone(&self.responder)
    }

    /// Restore the last session from storage.
    pub async fn restore_session(&self) -> RoadmapSession {
        RoadmapSession::restore(self.persistence.clone(), self.parser.clone()).await
    }
}
