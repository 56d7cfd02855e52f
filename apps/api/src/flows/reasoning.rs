//! Reasoning challenges — generates a problem plus a step-by-step solution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{REASONING_PROMPT_TEMPLATE, REASONING_SYSTEM};
use crate::interview::engine::Difficulty;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Mathematical,
    Logical,
    Tricky,
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChallengeCategory::Mathematical => "mathematical",
            ChallengeCategory::Logical => "logical",
            ChallengeCategory::Tricky => "tricky",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningChallenge {
    pub problem: String,
    pub solution: String,
}

/// Creates a reasoning challenge of the given category and difficulty.
pub async fn create_challenge(
    category: ChallengeCategory,
    difficulty: Difficulty,
    llm: &LlmClient,
) -> Result<ReasoningChallenge, AppError> {
    let prompt = REASONING_PROMPT_TEMPLATE
        .replace("{category}", &category.to_string())
        .replace("{difficulty}", &difficulty.to_string());
    llm.call_json::<ReasoningChallenge>(&prompt, REASONING_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Reasoning challenge failed: {e}")))
}
