//! Advisor chat and interview practice.
//!
//! Each operation asks the AI backend first, checks the answer, and falls back to
//! the canned deterministic answer on failure, timeout or an unusable reply.

pub mod handlers;

use std::time::Duration;

use tracing::warn;

use crate::ai::deterministic::{canned_questions, canned_reply, heuristic_evaluation};
use crate::ai::{call_with_fallback, AdvisorContext, CareerAi};
use crate::models::roadmap::MilestoneStatus;
use crate::models::session::{AnswerEvaluation, ChatMessage, ChatRole};
use crate::roadmap::next_steps::get_next_steps;
use crate::store::Store;

/// Snapshot of the student's situation for the advisor prompt.
pub fn advisor_context(store: &Store) -> AdvisorContext {
    let Some(roadmap) = store.roadmap() else {
        return AdvisorContext {
            profile: store.profile().cloned(),
            ..Default::default()
        };
    };

    // the milestone being worked on, else the one to start next
    let current_milestone = roadmap
        .milestones()
        .find(|m| m.status == MilestoneStatus::InProgress)
        .map(|m| m.name.clone())
        .or_else(|| get_next_steps(roadmap).into_iter().next().map(|s| s.milestone.name));

    AdvisorContext {
        profile: store.profile().cloned(),
        tracks: roadmap.tracks.clone(),
        progress: Some(roadmap.progress()),
        current_milestone,
    }
}

pub async fn advisor_reply(
    ai: &dyn CareerAi,
    history: &[ChatMessage],
    context: &AdvisorContext,
    timeout: Duration,
) -> String {
    let reply = call_with_fallback("chat reply", timeout, ai.chat_reply(history, context)).await;
    match reply.map(|r| r.trim().to_string()) {
        Some(reply) if !reply.is_empty() => reply,
        other => {
            if other.is_some() {
                warn!("AI chat reply was empty, using canned reply");
            }
            let last = history
                .iter()
                .rev()
                .find(|m| m.role == ChatRole::User)
                .map(|m| m.content.as_str())
                .unwrap_or_default();
            canned_reply(last, context)
        }
    }
}

pub async fn practice_questions(
    ai: &dyn CareerAi,
    role: &str,
    company: Option<&str>,
    timeout: Duration,
) -> Vec<String> {
    let questions = call_with_fallback(
        "interview questions",
        timeout,
        ai.interview_questions(role, company),
    )
    .await;

    match questions {
        Some(questions)
            if !questions.is_empty() && questions.iter().all(|q| !q.trim().is_empty()) =>
        {
            questions
        }
        Some(_) => {
            warn!("AI returned unusable interview questions, using canned set");
            canned_questions(role)
        }
        None => canned_questions(role),
    }
}

pub async fn evaluate_answer(
    ai: &dyn CareerAi,
    question: &str,
    answer: &str,
    timeout: Duration,
) -> AnswerEvaluation {
    let evaluation = call_with_fallback(
        "answer evaluation",
        timeout,
        ai.evaluate_answer(question, answer),
    )
    .await;

    match evaluation {
        Some(evaluation) if evaluation.score <= 100 => evaluation,
        Some(evaluation) => {
            warn!("AI evaluation score {} out of range, using heuristic", evaluation.score);
            heuristic_evaluation(answer)
        }
        None => heuristic_evaluation(answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::{FailingAi, ScriptedAi};
    use crate::catalog::Catalog;
    use crate::models::profile::StudentProfile;
    use crate::roadmap::generator::deterministic_roadmap;
    use crate::roadmap::transitions::set_milestone_status;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn make_profile() -> StudentProfile {
        serde_json::from_str(
            r#"{"name": "Ada", "interests": ["Data"], "targetRoles": ["data-analyst"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_context_without_roadmap() {
        let store = Store::default().with_profile(make_profile());
        let context = advisor_context(&store);
        assert!(context.profile.is_some());
        assert!(context.progress.is_none());
        assert!(context.current_milestone.is_none());
    }

    #[test]
    fn test_context_prefers_in_progress_milestone() {
        let profile = make_profile();
        let roadmap = deterministic_roadmap(&profile, &Catalog::builtin());
        let first = roadmap.phases[0].milestones[0].name.clone();
        assert_eq!(
            advisor_context(&Store::default().with_roadmap(roadmap.clone())).current_milestone,
            Some(first)
        );

        let phase = &roadmap.phases[1];
        let started = set_milestone_status(
            &roadmap,
            &phase.id,
            &phase.milestones[0].id,
            MilestoneStatus::InProgress,
        )
        .unwrap();
        let context = advisor_context(&Store::default().with_roadmap(started));
        assert_eq!(context.current_milestone, Some(phase.milestones[0].name.clone()));
        assert_eq!(context.tracks, vec!["data-analyst".to_string()]);
    }

    #[tokio::test]
    async fn test_reply_falls_back_to_canned() {
        let history = vec![ChatMessage::user(
            "What is the difference between analyst and scientist?",
        )];
        let reply =
            advisor_reply(&FailingAi, &history, &AdvisorContext::default(), TIMEOUT).await;
        assert!(reply.contains("Data Analyst"));

        let empty = ScriptedAi {
            reply: "   ".to_string(),
            ..Default::default()
        };
        let reply = advisor_reply(&empty, &history, &AdvisorContext::default(), TIMEOUT).await;
        assert!(reply.contains("Data Analyst"));
    }

    #[tokio::test]
    async fn test_reply_uses_ai_answer() {
        let ai = ScriptedAi {
            reply: "Focus on SQL this week.".to_string(),
            ..Default::default()
        };
        let history = [ChatMessage::user("hi")];
        let reply = advisor_reply(&ai, &history, &AdvisorContext::default(), TIMEOUT).await;
        assert_eq!(reply, "Focus on SQL this week.");
    }

    #[tokio::test]
    async fn test_questions_fallback_on_empty_list() {
        let ai = ScriptedAi::default();
        let questions = practice_questions(&ai, "swe", None, TIMEOUT).await;
        assert_eq!(questions, canned_questions("swe"));
        assert_eq!(questions.len(), 6);

        let ai = ScriptedAi {
            questions: vec!["Why Rust?".to_string()],
            ..Default::default()
        };
        assert_eq!(
            practice_questions(&ai, "swe", Some("Acme"), TIMEOUT).await,
            vec!["Why Rust?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_evaluation_rejects_out_of_range_score() {
        let ai = ScriptedAi {
            evaluation: Some(AnswerEvaluation {
                score: 140,
                feedback: "Amazing".to_string(),
                improvements: vec![],
            }),
            ..Default::default()
        };
        let evaluation = evaluate_answer(&ai, "Q", "short answer", TIMEOUT).await;
        assert_eq!(evaluation, heuristic_evaluation("short answer"));
        assert_eq!(evaluation.score, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluation_timeout_uses_heuristic() {
        let ai = ScriptedAi {
            evaluation: Some(AnswerEvaluation {
                score: 90,
                feedback: "Great".to_string(),
                improvements: vec![],
            }),
            delay: Some(Duration::from_secs(60)),
            ..Default::default()
        };
        let evaluation = evaluate_answer(&ai, "Q", "short answer", TIMEOUT).await;
        assert_eq!(evaluation.score, 50);
    }
}
