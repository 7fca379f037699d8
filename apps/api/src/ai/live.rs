//! Live AI backend: chat-completion calls via `LlmClient`.
//!
//! Returns whatever the model produced; shape and range checks happen at the
//! call sites, which fall back to the deterministic result on rejection.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::ai::prompts::{
    interview_system, role_assessment_system, roadmap_system, CHAT_SYSTEM_TEMPLATE,
    EVALUATION_PROMPT_TEMPLATE, INTERVIEW_PROMPT_TEMPLATE, ROADMAP_PROMPT_TEMPLATE,
    ROLE_ASSESSMENT_PROMPT_TEMPLATE,
};
use crate::ai::{AdvisorContext, AiError, CareerAi, RoleAssessment};
use crate::catalog::Catalog;
use crate::llm_client::{ChatTurn, LlmClient};
use crate::models::profile::StudentProfile;
use crate::models::roadmap::Roadmap;
use crate::models::session::{AnswerEvaluation, ChatMessage, ChatRole};

const STRUCTURED_TEMPERATURE: f32 = 0.7;
const CHAT_TEMPERATURE: f32 = 0.8;

pub struct LiveAi {
    llm: LlmClient,
}

impl LiveAi {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AiError> {
    serde_json::to_string_pretty(value).map_err(|e| AiError::Malformed(e.to_string()))
}

fn join_or(items: &[&str], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn roadmap_prompt(profile: &StudentProfile) -> Result<String, AiError> {
    let interests: Vec<&str> = profile.interests.iter().map(String::as_str).collect();
    let constraints = to_pretty_json(&profile.constraints)?;

    Ok(ROADMAP_PROMPT_TEMPLATE
        .replace("{major}", &profile.major)
        .replace("{interests}", &join_or(&interests, "None listed"))
        .replace("{skills}", &join_or(&profile.current_skills.labels(), "None listed"))
        .replace(
            "{experience}",
            &format!("{:?}", profile.experience_level).to_lowercase(),
        )
        .replace(
            "{timeline}",
            profile.graduation_timeline.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "{target_roles}",
            &join_or(&profile.distinct_target_roles(), "Not sure yet"),
        )
        .replace("{constraints}", &constraints))
}

#[async_trait]
impl CareerAi for LiveAi {
    fn backend(&self) -> &'static str {
        "live"
    }

    async fn generate_roadmap(
        &self,
        profile: &StudentProfile,
        _catalog: &Catalog,
    ) -> Result<Roadmap, AiError> {
        let prompt = roadmap_prompt(profile)?;
        info!("Requesting roadmap from LLM for profile {}", profile.id);
        let roadmap = self
            .llm
            .call_json::<Roadmap>(&roadmap_system(), &prompt, STRUCTURED_TEMPERATURE)
            .await?;
        Ok(roadmap)
    }

    async fn assess_roles(
        &self,
        profile: &StudentProfile,
        catalog: &Catalog,
    ) -> Result<Vec<RoleAssessment>, AiError> {
        let roles: Vec<_> = catalog
            .roles()
            .iter()
            .map(|r| {
                json!({
                    "roleId": r.role_id,
                    "name": r.name,
                    "requiredSkills": r.required_skills,
                    "preferredSkills": r.preferred_skills,
                })
            })
            .collect();

        let prompt = ROLE_ASSESSMENT_PROMPT_TEMPLATE
            .replace("{profile}", &to_pretty_json(profile)?)
            .replace("{catalog}", &to_pretty_json(&roles)?);

        let assessments = self
            .llm
            .call_json::<Vec<RoleAssessment>>(
                &role_assessment_system(),
                &prompt,
                STRUCTURED_TEMPERATURE,
            )
            .await?;
        Ok(assessments)
    }

    async fn chat_reply(
        &self,
        history: &[ChatMessage],
        context: &AdvisorContext,
    ) -> Result<String, AiError> {
        let system = CHAT_SYSTEM_TEMPLATE.replace("{context}", &to_pretty_json(context)?);

        let mut turns = Vec::with_capacity(history.len() + 1);
        turns.push(ChatTurn::system(system));
        turns.extend(history.iter().map(|m| match m.role {
            ChatRole::User => ChatTurn::user(m.content.clone()),
            ChatRole::Assistant => ChatTurn::assistant(m.content.clone()),
        }));

        Ok(self.llm.call_text(&turns, CHAT_TEMPERATURE).await?)
    }

    async fn interview_questions(
        &self,
        role: &str,
        company: Option<&str>,
    ) -> Result<Vec<String>, AiError> {
        let company_clause = company.map(|c| format!(" at {c}")).unwrap_or_default();
        let prompt = INTERVIEW_PROMPT_TEMPLATE
            .replace("{role}", role)
            .replace("{company_clause}", &company_clause);

        Ok(self
            .llm
            .call_json::<Vec<String>>(&interview_system(), &prompt, STRUCTURED_TEMPERATURE)
            .await?)
    }

    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerEvaluation, AiError> {
        let prompt = EVALUATION_PROMPT_TEMPLATE
            .replace("{question}", question)
            .replace("{answer}", answer);

        Ok(self
            .llm
            .call_json::<AnswerEvaluation>(&interview_system(), &prompt, STRUCTURED_TEMPERATURE)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_prompt_fills_placeholders() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{
                "name": "Ada",
                "major": "Mathematics",
                "interests": ["Fintech", "AI / Machine Learning"],
                "currentSkills": ["Python"],
                "experienceLevel": "beginner",
                "targetRoles": ["data-scientist"]
            }"#,
        )
        .unwrap();

        let prompt = roadmap_prompt(&profile).unwrap();
        assert!(prompt.contains("Major: Mathematics"));
        assert!(prompt.contains("Interests: Fintech, AI / Machine Learning"));
        assert!(prompt.contains("Current Skills: Python"));
        assert!(prompt.contains("Experience: beginner"));
        assert!(prompt.contains("Timeline: Not specified"));
        assert!(prompt.contains("Target Roles: data-scientist"));
        assert!(!prompt.contains("{major}"));
    }

    #[test]
    fn test_roadmap_prompt_handles_empty_lists() {
        let profile: StudentProfile = serde_json::from_str(r#"{"name": "Lin"}"#).unwrap();
        let prompt = roadmap_prompt(&profile).unwrap();
        assert!(prompt.contains("Current Skills: None listed"));
        assert!(prompt.contains("Target Roles: Not sure yet"));
    }
}
