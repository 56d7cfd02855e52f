use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service itself is stateless: conversation state travels in the request
/// and response bodies, so the only shared resource is the LLM client.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
