//! Debate practice — a devil's-advocate rebuttal to a user claim.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{DEBATE_PROMPT_TEMPLATE, DEBATE_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateRebuttal {
    pub rebuttal: String,
    /// Sources for the counterargument, if the model found any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
}

/// Produces a fact-based counterargument to the user's claim.
pub async fn debate_claim(
    topic: &str,
    user_claim: &str,
    llm: &LlmClient,
) -> Result<DebateRebuttal, AppError> {
    let prompt = DEBATE_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{user_claim}", user_claim);
    llm.call_json::<DebateRebuttal>(&prompt, DEBATE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Debate rebuttal failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuttal_deserializes_without_sources() {
        let json = r#"{"rebuttal": "The data suggests otherwise."}"#;
        let rebuttal: DebateRebuttal = serde_json::from_str(json).unwrap();
        assert_eq!(rebuttal.rebuttal, "The data suggests otherwise.");
        assert!(rebuttal.sources.is_none());
    }

    #[test]
    fn test_rebuttal_roundtrips_with_sources() {
        let json = r#"{"rebuttal": "Studies disagree.", "sources": "https://example.org/study"}"#;
        let rebuttal: DebateRebuttal = serde_json::from_str(json).unwrap();
        assert_eq!(rebuttal.sources.as_deref(), Some("https://example.org/study"));
    }
}
