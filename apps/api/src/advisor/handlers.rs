use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::{advisor_context, advisor_reply, evaluate_answer, practice_questions};
use crate::errors::AppError;
use crate::models::session::{AnswerEvaluation, ChatMessage, InterviewResult, InterviewSession};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub results: Vec<InterviewResult>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let (mut history, context, settings) = {
        let store = state.store.read().await;
        (
            store.chat_history().to_vec(),
            advisor_context(&store),
            store.settings().clone(),
        )
    };
    let user_message = ChatMessage::user(message);
    history.push(user_message.clone());

    let ai = state.ai_for(&settings);
    let reply = advisor_reply(ai.as_ref(), &history, &context, state.config.ai_timeout).await;
    let assistant_message = ChatMessage::assistant(reply);

    state
        .update(|store| {
            Ok(store
                .with_chat_message(user_message.clone())
                .with_chat_message(assistant_message.clone()))
        })
        .await?;

    Ok(Json(assistant_message))
}

/// GET /api/v1/chat
pub async fn handle_get_chat(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    let store = state.store.read().await;
    Json(store.chat_history().to_vec())
}

/// DELETE /api/v1/chat
pub async fn handle_clear_chat(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.update(|store| Ok(store.without_chat_history())).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let role = req.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role must not be empty".to_string()));
    }
    let company = req.company.as_deref().map(str::trim).filter(|c| !c.is_empty());

    let settings = state.store.read().await.settings().clone();
    let ai = state.ai_for(&settings);
    let questions = practice_questions(ai.as_ref(), role, company, state.config.ai_timeout).await;
    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/interview/evaluate
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<AnswerEvaluation>, AppError> {
    let settings = state.store.read().await.settings().clone();
    let ai = state.ai_for(&settings);
    let evaluation =
        evaluate_answer(ai.as_ref(), &req.question, &req.answer, state.config.ai_timeout).await;
    Ok(Json(evaluation))
}

/// POST /api/v1/interview/sessions
pub async fn handle_save_session(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<(StatusCode, Json<InterviewSession>), AppError> {
    if let Some(r) = req.results.iter().find(|r| r.evaluation.score > 100) {
        return Err(AppError::Validation(format!(
            "evaluation score {} is outside 0 – 100",
            r.evaluation.score
        )));
    }

    let session = InterviewSession::finish(req.role, req.company, req.results);
    state
        .update(|store| Ok(store.with_interview_session(session.clone())))
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/interview/sessions
pub async fn handle_list_sessions(State(state): State<AppState>) -> Json<Vec<InterviewSession>> {
    let store = state.store.read().await;
    Json(store.interview_sessions().to_vec())
}
