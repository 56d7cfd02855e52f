// All LLM prompt constants for the interview flow.
// Each flow that needs LLM calls defines its own prompts.rs alongside it.

use crate::interview::engine::TurnRequest;

/// System prompt for the interview turn call — enforces JSON-only output.
pub const INTERVIEW_SYSTEM: &str = "You are an AI interviewer conducting a mock interview. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the JSON.";

/// Interview turn prompt template.
/// Replace: {topic}, {difficulty}, {answer}, {question}, {conversation_history}
///
/// NOTE: the reply is deliberately double-encoded — the outer `feedback`
/// string carries a JSON payload `{question, feedback, isFinished}`. This
/// mirrors the original prompt contract bit-for-bit; the turn engine parses
/// the embedded string.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Conduct a mock interview with the user on the topic of {topic} at the difficulty level of {difficulty}.

The user has provided the following answer to the previous question: {answer}
The previous question was: {question}
The conversation history is:
{conversation_history}

Provide the next interview question and give immediate feedback on the user's answer, including strengths, areas for improvement, and suggested phrases. If the user has not provided an answer yet, generate the first question. If the interview is finished, set isFinished to true and make the question "The interview is finished." If you are generating a question, set isFinished to false.

Return a JSON object with this EXACT schema:
{
  "question": "<the next interview question>",
  "feedback": "<a JSON-encoded string containing {\"question\": ..., \"feedback\": ..., \"isFinished\": ...}>",
  "conversationHistory": "<the conversation history>",
  "isFinished": false
}

The `feedback` field MUST itself be a valid JSON-encoded string. Example:
{
  "question": "What are your strengths?",
  "feedback": "{\"question\": \"What are your strengths?\", \"feedback\": \"Your answer was good. Here are some strengths, areas for improvement, and suggested phrases.\", \"isFinished\": false}",
  "conversationHistory": "Interviewer: What are your strengths?\nUser: I am a hard worker.\n",
  "isFinished": false
}"#;

/// Builds the turn prompt by filling the template from the request.
/// Every placeholder is replaced with a concrete (possibly empty) string.
pub fn build_turn_prompt(request: &TurnRequest) -> String {
    INTERVIEW_PROMPT_TEMPLATE
        .replace("{topic}", &request.topic)
        .replace("{difficulty}", &request.difficulty.to_string())
        .replace("{answer}", &request.answer)
        .replace("{question}", &request.question)
        .replace("{conversation_history}", &request.conversation_history)
}
