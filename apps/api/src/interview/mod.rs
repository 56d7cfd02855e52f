//! Mock interview — the only multi-turn flow in ReWise.
//!
//! The server holds no conversation state: the full `ConversationState`
//! travels in each request and response, and `engine::advance_turn` drives
//! exactly one exchange per call.

pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod transcript;
