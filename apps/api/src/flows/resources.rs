//! Resource curation — a list of learning resources for an interest area.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{RESOURCES_PROMPT_TEMPLATE, RESOURCES_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: Vec<String>,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    pub resources: Vec<Resource>,
}

/// Curates learning resources for the given interest area.
pub async fn curate_resources(
    interest_area: &str,
    llm: &LlmClient,
) -> Result<ResourceList, AppError> {
    let prompt = RESOURCES_PROMPT_TEMPLATE.replace("{interest_area}", interest_area);
    llm.call_json::<ResourceList>(&prompt, RESOURCES_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resource curation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_list_deserializes() {
        let json = r#"{
            "resources": [
                {
                    "title": "The Rust Book",
                    "description": "The official introduction to Rust.",
                    "link": "https://doc.rust-lang.org/book/",
                    "tags": ["Free for students", "Book"],
                    "date": "2024-01-15"
                }
            ]
        }"#;
        let list: ResourceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.resources.len(), 1);
        assert_eq!(list.resources[0].title, "The Rust Book");
        assert_eq!(list.resources[0].tags.len(), 2);
    }
}
