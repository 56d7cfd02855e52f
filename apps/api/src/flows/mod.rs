//! Single-shot study tools: one prompt, one structured reply, no state
//! machine. Unlike the interview flow, the outer JSON reply IS the payload.

pub mod debate;
pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod reasoning;
pub mod resources;
