//! Axum route handlers for the interview flow.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::engine::{advance_turn, ConversationState, Difficulty};
use crate::state::AppState;

/// Request body for one interview turn. All conversation state travels with
/// the request; the opening turn omits `answer`, `question` and
/// `conversationHistory`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTurnRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub conversation_history: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTurnResponse {
    pub question: String,
    pub feedback: String,
    pub conversation_history: String,
    pub is_finished: bool,
}

/// POST /api/v1/interview/turn
///
/// Advances a mock interview by one exchange. Transport/model failures are
/// surfaced as errors (the client may retry with the same state); a
/// malformed reply payload instead ends the interview fail-closed.
pub async fn handle_interview_turn(
    State(state): State<AppState>,
    Json(request): Json<InterviewTurnRequest>,
) -> Result<Json<InterviewTurnResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let conversation = ConversationState {
        topic: request.topic,
        difficulty: request.difficulty,
        transcript: request.conversation_history.unwrap_or_default(),
        current_question: request.question.unwrap_or_default(),
        is_finished: false,
    };

    let outcome = advance_turn(&state.llm, &conversation, request.answer.as_deref())
        .await
        .map_err(|e| AppError::Llm(format!("Interview turn failed: {e}")))?;

    Ok(Json(InterviewTurnResponse {
        question: outcome.state.current_question,
        feedback: outcome.feedback,
        conversation_history: outcome.state.transcript,
        is_finished: outcome.state.is_finished,
    }))
}
