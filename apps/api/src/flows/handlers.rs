//! Axum route handlers for the single-shot flows.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flows::debate::{debate_claim, DebateRebuttal};
use crate::flows::quiz::{generate_quiz, Quiz};
use crate::flows::reasoning::{create_challenge, ChallengeCategory, ReasoningChallenge};
use crate::flows::resources::{curate_resources, ResourceList};
use crate::interview::engine::Difficulty;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub topic: String,
    #[serde(default)]
    pub source_paragraph: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateRequest {
    pub topic: String,
    pub user_claim: String,
}

#[derive(Debug, Deserialize)]
pub struct ReasoningRequest {
    pub category: ChallengeCategory,
    pub difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesRequest {
    pub interest_area: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<Quiz>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let quiz = generate_quiz(
        &request.topic,
        request.source_paragraph.as_deref(),
        &state.llm,
    )
    .await?;

    Ok(Json(quiz))
}

/// POST /api/v1/debate
pub async fn handle_debate(
    State(state): State<AppState>,
    Json(request): Json<DebateRequest>,
) -> Result<Json<DebateRebuttal>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.user_claim.trim().is_empty() {
        return Err(AppError::Validation(
            "userClaim cannot be empty".to_string(),
        ));
    }

    let rebuttal = debate_claim(&request.topic, &request.user_claim, &state.llm).await?;

    Ok(Json(rebuttal))
}

/// POST /api/v1/reasoning
pub async fn handle_reasoning_challenge(
    State(state): State<AppState>,
    Json(request): Json<ReasoningRequest>,
) -> Result<Json<ReasoningChallenge>, AppError> {
    let challenge = create_challenge(request.category, request.difficulty, &state.llm).await?;

    Ok(Json(challenge))
}

/// POST /api/v1/resources
pub async fn handle_curate_resources(
    State(state): State<AppState>,
    Json(request): Json<ResourcesRequest>,
) -> Result<Json<ResourceList>, AppError> {
    if request.interest_area.trim().is_empty() {
        return Err(AppError::Validation(
            "interestArea cannot be empty".to_string(),
        ));
    }

    let resources = curate_resources(&request.interest_area, &state.llm).await?;

    Ok(Json(resources))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_request_deserializes_without_source_paragraph() {
        let json = serde_json::json!({"topic": "thermodynamics"});
        let request: QuizRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.topic, "thermodynamics");
        assert!(request.source_paragraph.is_none());
    }

    #[test]
    fn test_reasoning_request_deserializes() {
        let json = serde_json::json!({"category": "logical", "difficulty": "hard"});
        let request: ReasoningRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.category, ChallengeCategory::Logical);
        assert_eq!(request.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_debate_request_uses_camel_case() {
        let json = serde_json::json!({"topic": "remote work", "userClaim": "It always helps"});
        let request: DebateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.user_claim, "It always helps");
    }
}
