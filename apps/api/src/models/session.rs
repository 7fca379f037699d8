use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Feedback for one practice answer. `score` is 0 – 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    pub score: u32,
    pub feedback: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResult {
    pub question: String,
    pub answer: String,
    pub evaluation: AnswerEvaluation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: Uuid,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub results: Vec<InterviewResult>,
    pub average_score: u32,
    pub completed_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Builds a finished session, averaging the evaluation scores (0 when empty).
    pub fn finish(role: String, company: Option<String>, results: Vec<InterviewResult>) -> Self {
        let average_score = if results.is_empty() {
            0
        } else {
            let total: u32 = results.iter().map(|r| r.evaluation.score).sum();
            (total as f64 / results.len() as f64).round() as u32
        };

        Self {
            id: Uuid::new_v4(),
            role,
            company,
            results,
            average_score,
            completed_at: Utc::now(),
        }
    }
}

/// A project the student logged by hand on top of roadmap projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Forces the deterministic AI backend even when a live one is configured.
    #[serde(default)]
    pub demo_mode: bool,
}
