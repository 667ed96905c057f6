use std::env;

use async_trait::async_trait;
use reqwest::Client;
use roadmap_core::model::Level;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResponderError;

/// Returned in place of a roadmap when the upstream reply carries no text.
pub const FALLBACK_ROADMAP: &str = "Sorry, no roadmap generated.";

/// Produces free-form roadmap text for a goal and level.
#[async_trait]
pub trait PromptResponder: Send + Sync {
    /// Ask for a study roadmap.
    ///
    /// # Errors
    ///
    /// Returns `ResponderError` on transport failures or non-success replies.
    async fn generate(&self, goal: &str, level: Level) -> Result<String, ResponderError>;
}

/// The prompt sent upstream for a goal and level.
#[must_use]
pub fn build_prompt(goal: &str, level: Level) -> String {
    format!(
        "I want to {goal}. My current level is {level}. Please give me a structured study \
         roadmap with milestones, resources, and exercises."
    )
}

#[derive(Clone, Debug)]
pub struct ResponderConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ResponderConfig {
    /// Read the responder settings from the environment.
    ///
    /// `ROADMAP_API_KEY` (or the legacy `API_GEMI`) is required; without it
    /// the responder stays disabled.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ROADMAP_API_KEY")
            .or_else(|_| env::var("API_GEMI"))
            .ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("ROADMAP_API_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let model = env::var("ROADMAP_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Calls the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiResponder {
    client: Client,
    config: Option<ResponderConfig>,
}

impl GeminiResponder {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ResponderConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ResponderConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl PromptResponder for GeminiResponder {
    async fn generate(&self, goal: &str, level: Level) -> Result<String, ResponderError> {
        let config = self.config.as_ref().ok_or(ResponderError::Disabled)?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt(goal, level),
                }],
            }],
        };

        debug!(model = %config.model, %level, "requesting roadmap");
        let response = self
            .client
            .post(url)
            .query(&[("key", config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResponderError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.into_text())
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

// Every level is optional: a reply that parses but lacks text falls back to
// `FALLBACK_ROADMAP`.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FALLBACK_ROADMAP.to_string())
    }
}
