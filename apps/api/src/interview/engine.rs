//! Turn Engine — drives one conversational exchange of the mock interview.
//!
//! Flow: build TurnRequest → model call → parse the embedded JSON payload →
//!       append to transcript → return the updated ConversationState.
//!
//! The engine is stateless between calls: all state is passed in and returned.
//! Termination is one-way — `is_finished` never transitions back to false.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::interview::prompts::{build_turn_prompt, INTERVIEW_SYSTEM};
use crate::interview::transcript::append_turn;
use crate::llm_client::{LlmClient, LlmError};

/// Question shown to the user when the model's reply payload cannot be parsed.
pub const GENERATION_ERROR_QUESTION: &str =
    "There was an error during generation. Please try again later.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Difficulty of an interview. Fixed at initiation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// The only persisted entity of the interview flow. Exclusively owned by the
/// client driving the conversation; one state per active conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub topic: String,
    pub difficulty: Difficulty,
    /// Append-only log of the exchange; grows monotonically until the end.
    #[serde(default)]
    pub transcript: String,
    /// The most recent question posed; empty before the first turn.
    #[serde(default)]
    pub current_question: String,
    /// One-way terminal flag. Once true the client stops submitting turns.
    #[serde(default)]
    pub is_finished: bool,
}

impl ConversationState {
    pub fn new(topic: String, difficulty: Difficulty) -> Self {
        Self {
            topic,
            difficulty,
            transcript: String::new(),
            current_question: String::new(),
            is_finished: false,
        }
    }
}

/// One turn's request to the model. `answer`, `question` and
/// `conversation_history` default to empty strings — never null — so the
/// prompt template stays well-formed on the opening turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub answer: String,
    pub question: String,
    pub conversation_history: String,
}

/// The model's outer reply. `feedback` is itself a JSON-encoded string
/// carrying `{question, feedback, isFinished}` — the prompt contract
/// double-encodes the structured payload, and the engine must parse it.
/// Fields are trusted to match this shape; anything missing decodes as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReply {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub conversation_history: String,
    #[serde(default)]
    pub is_finished: bool,
}

/// The structured payload embedded in `TurnReply::feedback`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InnerTurn {
    #[serde(default)]
    question: String,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    is_finished: bool,
}

/// Result of one engine call: the updated state plus the feedback text to
/// show the user (feedback is per-turn, not part of the persisted state).
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub state: ConversationState,
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Model seam
// ────────────────────────────────────────────────────────────────────────────

/// The model turn call. Implement this to swap the backing model without
/// touching the engine — tests use scripted implementations.
#[async_trait]
pub trait TurnModel: Send + Sync {
    async fn next_turn(&self, request: &TurnRequest) -> Result<TurnReply, LlmError>;
}

#[async_trait]
impl TurnModel for LlmClient {
    async fn next_turn(&self, request: &TurnRequest) -> Result<TurnReply, LlmError> {
        let prompt = build_turn_prompt(request);
        self.call_json::<TurnReply>(&prompt, INTERVIEW_SYSTEM).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Turn engine
// ────────────────────────────────────────────────────────────────────────────

/// Advances the conversation by exactly one exchange.
///
/// `user_answer` is absent only on the opening turn. A transport/model
/// failure is returned unchanged — the input state is untouched, so the
/// caller may retry the same turn. A reply whose embedded payload is not
/// valid JSON is NOT an error: the conversation is terminated fail-closed
/// via [`recover`], preserving the raw text for the user.
pub async fn advance_turn(
    model: &dyn TurnModel,
    state: &ConversationState,
    user_answer: Option<&str>,
) -> Result<TurnOutcome, LlmError> {
    let request = TurnRequest {
        topic: state.topic.clone(),
        difficulty: state.difficulty,
        answer: user_answer.unwrap_or("").to_string(),
        question: state.current_question.clone(),
        conversation_history: state.transcript.clone(),
    };

    let reply = model.next_turn(&request).await?;

    let inner: InnerTurn = match serde_json::from_str(&reply.feedback) {
        Ok(inner) => inner,
        Err(e) => {
            warn!("Turn reply payload was not valid JSON, ending conversation: {e}");
            return Ok(recover(reply.feedback, state));
        }
    };

    debug!(
        "Turn parsed: is_finished={}, transcript_len={}",
        inner.is_finished,
        state.transcript.len()
    );

    let transcript = append_turn(
        &state.transcript,
        &inner.question,
        &request.answer,
        &inner.feedback,
    );

    Ok(TurnOutcome {
        state: ConversationState {
            topic: state.topic.clone(),
            difficulty: state.difficulty,
            transcript,
            current_question: inner.question,
            // One-way transition: a finished conversation never reopens.
            is_finished: state.is_finished || inner.is_finished,
        },
        feedback: inner.feedback,
    })
}

/// Fail-closed recovery for a malformed reply payload.
///
/// The conversation is terminated rather than left inconsistent: fixed error
/// question, raw unparsed text preserved verbatim as feedback (it may still
/// carry readable content), transcript unchanged.
pub fn recover(raw_feedback: String, prior: &ConversationState) -> TurnOutcome {
    TurnOutcome {
        state: ConversationState {
            topic: prior.topic.clone(),
            difficulty: prior.difficulty,
            transcript: prior.transcript.clone(),
            current_question: GENERATION_ERROR_QUESTION.to_string(),
            is_finished: true,
        },
        feedback: raw_feedback,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted model: returns a fixed `feedback` payload and records the
    /// request it was sent.
    struct ScriptedModel {
        feedback_payload: String,
        seen: Mutex<Option<TurnRequest>>,
    }

    impl ScriptedModel {
        fn new(feedback_payload: &str) -> Self {
            Self {
                feedback_payload: feedback_payload.to_string(),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TurnModel for ScriptedModel {
        async fn next_turn(&self, request: &TurnRequest) -> Result<TurnReply, LlmError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok(TurnReply {
                question: String::new(),
                feedback: self.feedback_payload.clone(),
                conversation_history: request.conversation_history.clone(),
                is_finished: false,
            })
        }
    }

    /// Model whose transport always fails.
    struct FailingModel;

    #[async_trait]
    impl TurnModel for FailingModel {
        async fn next_turn(&self, _request: &TurnRequest) -> Result<TurnReply, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn fresh_state() -> ConversationState {
        ConversationState::new("Rust ownership".to_string(), Difficulty::Medium)
    }

    #[tokio::test]
    async fn test_first_turn_opens_with_single_question() {
        let model = ScriptedModel::new(
            r#"{"question":"What is a borrow?","feedback":"","isFinished":false}"#,
        );
        let outcome = advance_turn(&model, &fresh_state(), None).await.unwrap();

        assert_eq!(outcome.state.transcript, "Interviewer: What is a borrow?\n");
        assert_eq!(outcome.state.current_question, "What is a borrow?");
        assert!(!outcome.state.is_finished);

        // The request sent upstream carries empty answer and history, never null.
        let seen = model.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.answer, "");
        assert_eq!(seen.question, "");
        assert_eq!(seen.conversation_history, "");
    }

    #[tokio::test]
    async fn test_continuation_appends_exact_triple() {
        let model =
            ScriptedModel::new(r#"{"question":"Q2","feedback":"Good job","isFinished":false}"#);
        let state = ConversationState {
            transcript: "Interviewer: Q1\n".to_string(),
            current_question: "Q1".to_string(),
            ..fresh_state()
        };

        let outcome = advance_turn(&model, &state, Some("A1")).await.unwrap();

        assert_eq!(
            outcome.state.transcript,
            "Interviewer: Q1\nUser: A1\nInterviewer: Good job\n"
        );
        assert_eq!(outcome.state.current_question, "Q2");
        assert_eq!(outcome.feedback, "Good job");
        assert!(!outcome.state.is_finished);
    }

    #[tokio::test]
    async fn test_transcript_only_grows() {
        let model =
            ScriptedModel::new(r#"{"question":"Q3","feedback":"Solid","isFinished":false}"#);
        let state = ConversationState {
            transcript: "Interviewer: Q1\nUser: A1\nInterviewer: F1\n".to_string(),
            current_question: "Q2".to_string(),
            ..fresh_state()
        };

        let outcome = advance_turn(&model, &state, Some("A2")).await.unwrap();

        assert!(outcome.state.transcript.starts_with(&state.transcript));
        assert!(outcome.state.transcript.len() > state.transcript.len());
    }

    #[tokio::test]
    async fn test_parse_failure_is_fail_closed() {
        let model = ScriptedModel::new("not json");
        let state = ConversationState {
            transcript: "Interviewer: Q1\n".to_string(),
            current_question: "Q1".to_string(),
            ..fresh_state()
        };

        let outcome = advance_turn(&model, &state, Some("A1")).await.unwrap();

        assert!(outcome.state.is_finished);
        assert_eq!(outcome.feedback, "not json");
        assert_eq!(outcome.state.transcript, "Interviewer: Q1\n");
        assert_eq!(outcome.state.current_question, GENERATION_ERROR_QUESTION);
    }

    #[tokio::test]
    async fn test_finished_reply_terminates_conversation() {
        let model = ScriptedModel::new(
            r#"{"question":"The interview is finished.","feedback":"Well done","isFinished":true}"#,
        );
        let state = ConversationState {
            transcript: "Interviewer: Q1\n".to_string(),
            current_question: "Q1".to_string(),
            ..fresh_state()
        };

        let outcome = advance_turn(&model, &state, Some("A1")).await.unwrap();
        assert!(outcome.state.is_finished);
    }

    #[tokio::test]
    async fn test_termination_is_one_way() {
        // Even if a caller violates convention and submits another turn, a
        // finished conversation never reopens.
        let model = ScriptedModel::new(r#"{"question":"Q9","feedback":"F9","isFinished":false}"#);
        let state = ConversationState {
            transcript: "Interviewer: Q1\n".to_string(),
            current_question: "Q1".to_string(),
            is_finished: true,
            ..fresh_state()
        };

        let outcome = advance_turn(&model, &state, Some("A1")).await.unwrap();
        assert!(outcome.state.is_finished);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_error() {
        let state = fresh_state();
        let result = advance_turn(&FailingModel, &state, None).await;
        assert!(result.is_err());
        // The input state is untouched; the caller may retry the same turn.
        assert!(!state.is_finished);
        assert!(state.transcript.is_empty());
    }

    #[test]
    fn test_difficulty_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), r#""easy""#);
        let parsed: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
        assert_eq!(parsed, Difficulty::Hard);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_inner_payload_missing_fields_decode_as_empty() {
        // Validation gap accepted by design: a successfully parsed payload
        // with missing fields propagates empty values, not an error.
        let inner: InnerTurn = serde_json::from_str(r#"{"question":"Q"}"#).unwrap();
        assert_eq!(inner.question, "Q");
        assert_eq!(inner.feedback, "");
        assert!(!inner.is_finished);
    }
}
