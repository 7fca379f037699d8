//! AI façade: the one capability interface for roadmap generation, role
//! assessment, advisor chat and interview practice.
//!
//! Two backends, picked at startup by `AI_MODE`:
//! - `DeterministicAi`: canned generators, never fails, no network.
//! - `LiveAi`: chat-completion calls through `llm_client`.
//!
//! Callers never see an `AiError`. Every call goes through `call_with_fallback`,
//! which bounds it by `AI_TIMEOUT_SECS` and yields `None` on any failure so the
//! caller can substitute the deterministic result.

pub mod deterministic;
pub mod live;
pub mod prompts;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{AiMode, Config};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::StudentProfile;
use crate::models::roadmap::Roadmap;
use crate::models::session::{AnswerEvaluation, ChatMessage};
use crate::roadmap::progress::Progress;

pub use deterministic::DeterministicAi;
pub use live::LiveAi;

#[derive(Debug, Error)]
pub enum AiError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("AI call timed out after {0:?}")]
    Timeout(Duration),

    #[error("AI returned malformed data: {0}")]
    Malformed(String),
}

/// One role's score as judged by the AI backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssessment {
    pub role_id: String,
    /// Signed so out-of-range replies can be detected and rejected.
    pub score: i64,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// What the advisor knows about the student when answering a chat message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorContext {
    pub profile: Option<StudentProfile>,
    pub tracks: Vec<String>,
    pub progress: Option<Progress>,
    pub current_milestone: Option<String>,
}

#[async_trait]
pub trait CareerAi: Send + Sync {
    /// "live" or "deterministic", for logs and responses.
    fn backend(&self) -> &'static str;

    async fn generate_roadmap(
        &self,
        profile: &StudentProfile,
        catalog: &Catalog,
    ) -> Result<Roadmap, AiError>;

    async fn assess_roles(
        &self,
        profile: &StudentProfile,
        catalog: &Catalog,
    ) -> Result<Vec<RoleAssessment>, AiError>;

    async fn chat_reply(
        &self,
        history: &[ChatMessage],
        context: &AdvisorContext,
    ) -> Result<String, AiError>;

    async fn interview_questions(
        &self,
        role: &str,
        company: Option<&str>,
    ) -> Result<Vec<String>, AiError>;

    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerEvaluation, AiError>;
}

/// Builds the backend selected by configuration.
pub fn build_backend(config: &Config) -> anyhow::Result<Arc<dyn CareerAi>> {
    match config.ai_mode {
        AiMode::Deterministic => {
            info!("AI backend: deterministic");
            Ok(Arc::new(DeterministicAi))
        }
        AiMode::Live => {
            let api_key = config
                .openai_api_key
                .clone()
                .context("AI_MODE=live requires OPENAI_API_KEY")?;
            let llm = LlmClient::new(api_key).context("Failed to build LLM client")?;
            info!("AI backend: live (model: {})", crate::llm_client::MODEL);
            Ok(Arc::new(LiveAi::new(llm)))
        }
    }
}

/// Runs an AI call under `timeout`. Returns `None` (after logging) on error or timeout.
pub async fn call_with_fallback<T, F>(operation: &str, timeout: Duration, call: F) -> Option<T>
where
    F: Future<Output = Result<T, AiError>>,
{
    let result = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(AiError::Timeout(timeout)),
    };

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("AI {operation} unavailable, using deterministic fallback: {e}");
            None
        }
    }
}
