use std::sync::Arc;

use services::{PromptResponder, RoadmapSession};
use tokio::sync::Mutex;

/// Shared handle to the single roadmap session. The lock is released while a
/// generation request is in flight.
pub type SessionHandle = Arc<Mutex<RoadmapSession>>;

pub trait UiApp: Send + Sync {
    fn session(&self) -> SessionHandle;
    fn responder(&self) -> Arc<dyn PromptResponder>;
}

#[derive(Clone)]
pub struct AppContext {
    session: SessionHandle,
    responder: Arc<dyn PromptResponder>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            responder: app.responder(),
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionHandle {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn responder(&self) -> Arc<dyn PromptResponder> {
        Arc::clone(&self.responder)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
