//! Transcript codec — append-only encoding of the conversation history blob.
//!
//! The transcript is write-only from this service's perspective: it is opaque
//! context re-sent to the model on every turn, never decoded back into
//! structured turns. It is never truncated or summarized, so prompt cost
//! grows with conversation length.

/// Appends one exchange to the transcript. Pure function.
///
/// An empty prior transcript means the conversation is opening, so only the
/// interviewer's question is recorded (there is no answer yet). Later turns
/// complete the exchange opened by the previous question line with the
/// user's answer and the interviewer's feedback.
pub fn append_turn(prior: &str, question: &str, answer: &str, feedback: &str) -> String {
    if prior.is_empty() {
        format!("Interviewer: {question}\n")
    } else {
        format!("{prior}User: {answer}\nInterviewer: {feedback}\n")
    }
}
