//! Quiz generation — builds a mixed MCQ/open-ended quiz for a topic, with an
//! optional source paragraph to ground the questions.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{QUIZ_PROMPT_TEMPLATE, QUIZ_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    OpenEnded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_type: QuestionType,
    pub question_text: String,
    /// Present for MCQ questions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

/// Generates a quiz for a topic using the LLM.
pub async fn generate_quiz(
    topic: &str,
    source_paragraph: Option<&str>,
    llm: &LlmClient,
) -> Result<Quiz, AppError> {
    let prompt = build_quiz_prompt(topic, source_paragraph);
    llm.call_json::<Quiz>(&prompt, QUIZ_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))
}

fn build_quiz_prompt(topic: &str, source_paragraph: Option<&str>) -> String {
    let source_section = source_paragraph
        .map(|p| format!("Source paragraph (base the questions on this):\n{p}\n"))
        .unwrap_or_default();
    QUIZ_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{source_section}", &source_section)
}
