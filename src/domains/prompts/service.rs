//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//! It maintains a registry of available prompts and handles argument
//! substitution.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Configuration for the prompts domain.
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts()
            .into_iter()
            .map(|template| {
                info!("Registering prompt: {}", template.name);
                (template.name.clone(), template)
            })
            .collect();

        Self { config, prompts }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments);

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_args(topic: &str) -> HashMap<String, String> {
        let mut args = HashMap::new();
        args.insert("topic".to_string(), topic.to_string());
        args
    }

    fn rendered_text(result: &GetPromptResult) -> String {
        serde_json::to_value(&result.messages)
            .unwrap()
            .as_array()
            .and_then(|msgs| msgs[0]["content"]["text"].as_str().map(str::to_owned))
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let service = PromptService::new(PromptsConfig::default());

        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "blog_post_generator_prompt");
    }

    #[tokio::test]
    async fn test_blog_prompt_substitutes_topic() {
        let service = PromptService::new(PromptsConfig::default());

        let result = service
            .get_prompt("blog_post_generator_prompt", Some(topic_args("testing")))
            .await
            .unwrap();

        let text = rendered_text(&result);
        assert!(text.contains("testing"));
        assert!(text.contains("# Generate a Dev.to Blog Post"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new(PromptsConfig::default());

        let result = service.get_prompt("blog_post_generator_prompt", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new(PromptsConfig::default());

        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
