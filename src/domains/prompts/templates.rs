//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the rendering logic
//! for instantiating a template with arguments.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` is replaced with the value of `variable`; placeholders
    /// for arguments that were not supplied are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        clean_unmatched_placeholders(&result)
    }
}

/// Remove any unmatched placeholder variables.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();
    let mut start = 0;

    while let Some(pos) = result[start..].find("{{") {
        let abs_pos = start + pos;
        if let Some(end_pos) = result[abs_pos..].find("}}") {
            let end_abs = abs_pos + end_pos + 2;
            result = format!("{}{}", &result[..abs_pos], &result[end_abs..]);
            // Don't advance start, as we've removed content
            continue;
        }
        start = abs_pos + 2;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());

        assert_eq!(template.render(&args), "Hello, World!");
    }

    #[test]
    fn test_repeated_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "{{x}} and {{x}}");

        let mut args = HashMap::new();
        args.insert("x".to_string(), "again".to_string());

        assert_eq!(template.render(&args), "again and again");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{missing}}!");

        assert_eq!(template.render(&HashMap::new()), "Hello!");
    }

    #[test]
    fn test_value_substituted_verbatim() {
        let template = PromptTemplate::new("test", None, vec![], "Topic: **{{topic}}**");

        let mut args = HashMap::new();
        args.insert("topic".to_string(), "async/await in Rust".to_string());

        assert_eq!(template.render(&args), "Topic: **async/await in Rust**");
    }
}
