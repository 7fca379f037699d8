//! Deterministic AI backend: canned, profile-aware answers with no network calls.
//!
//! This is a supported mode, not an error path: it is what runs when no API key
//! is configured or the student turns on demo mode.

use async_trait::async_trait;

use crate::ai::{AdvisorContext, AiError, CareerAi, RoleAssessment};
use crate::catalog::Catalog;
use crate::matching::scoring::rank_roles;
use crate::models::profile::StudentProfile;
use crate::models::roadmap::Roadmap;
use crate::models::session::{AnswerEvaluation, ChatMessage, ChatRole};
use crate::roadmap::generator::deterministic_roadmap;

pub struct DeterministicAi;

#[async_trait]
impl CareerAi for DeterministicAi {
    fn backend(&self) -> &'static str {
        "deterministic"
    }

    async fn generate_roadmap(
        &self,
        profile: &StudentProfile,
        catalog: &Catalog,
    ) -> Result<Roadmap, AiError> {
        Ok(deterministic_roadmap(profile, catalog))
    }

    async fn assess_roles(
        &self,
        profile: &StudentProfile,
        catalog: &Catalog,
    ) -> Result<Vec<RoleAssessment>, AiError> {
        Ok(rank_roles(profile, catalog.roles(), None)
            .into_iter()
            .map(|m| RoleAssessment {
                role_id: m.role_id,
                score: i64::from(m.score),
                explanation: None,
            })
            .collect())
    }

    async fn chat_reply(
        &self,
        history: &[ChatMessage],
        context: &AdvisorContext,
    ) -> Result<String, AiError> {
        let last = history
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(canned_reply(last, context))
    }

    async fn interview_questions(
        &self,
        role: &str,
        _company: Option<&str>,
    ) -> Result<Vec<String>, AiError> {
        Ok(canned_questions(role))
    }

    async fn evaluate_answer(
        &self,
        _question: &str,
        answer: &str,
    ) -> Result<AnswerEvaluation, AiError> {
        Ok(heuristic_evaluation(answer))
    }
}

const REPLIES: &[(&str, &str)] = &[
    (
        "difference between",
        "Great question! A Data Analyst typically focuses on analyzing existing data to derive \
        insights using SQL, Excel, and visualization tools. A Data Scientist builds predictive \
        models and uses machine learning. Both are excellent career paths with lots of demand!",
    ),
    (
        "only 5 hours",
        "Absolutely! Let's adjust your roadmap to be more realistic. With 5 hours per week, I \
        recommend focusing on one skill at a time. We can extend your timeline and prioritize the \
        most impactful activities. Would you like me to suggest a modified schedule?",
    ),
];

const DEFAULT_REPLY: &str = "I'm here to help with your career journey! You can ask me about \
    specific roles, skills to learn, how to adjust your roadmap, or anything else about your tech \
    career path.";

pub(crate) fn canned_reply(message: &str, context: &AdvisorContext) -> String {
    let lower = message.to_lowercase();

    if lower.contains("what should i") {
        return match &context.current_milestone {
            Some(milestone) => format!(
                "Based on your roadmap, I recommend focusing on your current milestone: \
                {milestone}. Work through its skills and ship one of its projects before moving \
                on. Would you like specific resource recommendations?"
            ),
            None => "Based on your roadmap, I recommend focusing on building core programming \
                skills. Start with data structures and algorithms, as they're fundamental for tech \
                interviews. Would you like specific resource recommendations?"
                .to_string(),
        };
    }

    REPLIES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, reply)| reply.to_string())
        .unwrap_or_else(|| DEFAULT_REPLY.to_string())
}

const SWE_QUESTIONS: [&str; 6] = [
    "Tell me about a challenging coding project you worked on and how you approached it.",
    "Explain the difference between a stack and a queue, and give examples of when to use each.",
    "How would you debug a program that's running slowly?",
    "Describe a time you had to learn a new technology quickly. How did you approach it?",
    "How would you explain APIs to someone non-technical?",
    "Walk me through how you would design a simple e-commerce shopping cart.",
];

const DATA_QUESTIONS: [&str; 6] = [
    "Tell me about a time you used data to solve a problem or make a decision.",
    "How would you handle missing or inconsistent data in a dataset?",
    "Explain the difference between correlation and causation.",
    "Describe a data analysis project you've worked on. What tools did you use?",
    "How would you present complex data findings to a non-technical audience?",
    "What metrics would you track for a mobile app, and why?",
];

const GENERAL_QUESTIONS: [&str; 6] = [
    "Tell me about yourself and why you're interested in this role.",
    "Describe a challenging situation you faced and how you handled it.",
    "Where do you see yourself in 3-5 years?",
    "Tell me about a time you worked in a team. What was your role?",
    "What are your greatest strengths and areas for improvement?",
    "Why do you want to work at our company?",
];

pub(crate) fn canned_questions(role: &str) -> Vec<String> {
    let role = role.to_lowercase();
    let set = if role == "swe" || role.contains("software") {
        &SWE_QUESTIONS
    } else if role.starts_with("data") {
        &DATA_QUESTIONS
    } else {
        &GENERAL_QUESTIONS
    };
    set.iter().map(|q| q.to_string()).collect()
}

/// Length and keyword heuristic: base 50, capped at 95.
pub(crate) fn heuristic_evaluation(answer: &str) -> AnswerEvaluation {
    let word_count = answer.split_whitespace().count();
    let lower = answer.to_lowercase();

    let mut score = 50;
    if word_count > 30 {
        score += 20;
    }
    if word_count > 60 {
        score += 10;
    }
    if lower.contains("example") || lower.contains("experience") {
        score += 10;
    }
    if lower.contains("result") || lower.contains("learned") {
        score += 10;
    }

    let feedback = if word_count < 20 {
        "Your answer is quite brief. Try to provide more detail and specific examples."
    } else {
        "Good response! You provided relevant information. Consider adding more specific examples \
        to strengthen your answer."
    };

    AnswerEvaluation {
        score: score.min(95),
        feedback: feedback.to_string(),
        improvements: vec![
            "Use the STAR method (Situation, Task, Action, Result) to structure your response"
                .to_string(),
            "Include specific metrics or outcomes when possible".to_string(),
            "Connect your experience to the role requirements".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_short_answer_scores_base() {
        let eval = heuristic_evaluation("I like coding.");
        assert_eq!(eval.score, 50);
        assert!(eval.feedback.contains("quite brief"));
        assert_eq!(eval.improvements.len(), 3);
    }

    #[test]
    fn test_long_answer_with_keywords_capped_at_95() {
        let answer = format!("{} for example the result was good", words(70));
        assert_eq!(heuristic_evaluation(&answer).score, 95);
    }

    #[test]
    fn test_medium_answer_length_bonus() {
        assert_eq!(heuristic_evaluation(&words(31)).score, 70);
        assert_eq!(heuristic_evaluation(&words(61)).score, 80);
    }

    #[test]
    fn test_questions_by_role() {
        assert_eq!(canned_questions("swe")[1], SWE_QUESTIONS[1]);
        assert_eq!(canned_questions("data-analyst")[0], DATA_QUESTIONS[0]);
        assert_eq!(canned_questions("ux-designer")[0], GENERAL_QUESTIONS[0]);
        assert_eq!(canned_questions("product-manager").len(), 6);
    }

    #[test]
    fn test_reply_keyword_match() {
        let ctx = AdvisorContext::default();
        assert!(canned_reply("What's the DIFFERENCE BETWEEN analyst and scientist?", &ctx)
            .contains("Data Scientist"));
        assert_eq!(canned_reply("hello", &ctx), DEFAULT_REPLY);
    }

    #[test]
    fn test_reply_mentions_current_milestone() {
        let ctx = AdvisorContext {
            current_milestone: Some("Learn Version Control".to_string()),
            ..AdvisorContext::default()
        };
        assert!(canned_reply("What should I do next?", &ctx).contains("Learn Version Control"));
    }

    #[tokio::test]
    async fn test_assess_roles_mirrors_rank() {
        let catalog = Catalog::builtin();
        let profile: StudentProfile = serde_json::from_str(
            r#"{"name": "Ada", "currentSkills": ["SQL", "Excel"]}"#,
        )
        .unwrap();

        let assessments = DeterministicAi.assess_roles(&profile, &catalog).await.unwrap();
        let ranked = rank_roles(&profile, catalog.roles(), None);
        assert_eq!(assessments.len(), ranked.len());
        assert_eq!(assessments[0].role_id, ranked[0].role_id);
        assert_eq!(assessments[0].score, i64::from(ranked[0].score));
    }

    #[tokio::test]
    async fn test_chat_uses_last_user_message() {
        let history = vec![
            ChatMessage::user("I have only 5 hours a week"),
            ChatMessage::assistant("Noted."),
        ];
        let reply = DeterministicAi
            .chat_reply(&history, &AdvisorContext::default())
            .await
            .unwrap();
        assert!(reply.contains("5 hours per week"));
    }
}
