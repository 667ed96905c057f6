#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod responder;
pub mod roadmap_session;
pub mod session_store;

pub use app_services::AppServices;
pub use error::{AppServicesError, ResponderError};
pub use responder::{FALLBACK_ROADMAP, GeminiResponder, PromptResponder, ResponderConfig};
pub use roadmap_session::{
    GENERATE_ERROR_MESSAGE, GenerateOutcome, GenerateRequest, RoadmapSession,
};
pub use session_store::SessionPersistence;
