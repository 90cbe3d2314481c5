//! Blog post generator prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// A prompt template that guides an LLM in generating a dev.to blog post.
pub struct BlogPostGeneratorPrompt;

impl PromptDefinition for BlogPostGeneratorPrompt {
    const NAME: &'static str = "blog_post_generator_prompt";
    const DESCRIPTION: &'static str =
        "A prompt template to guide the LLM in generating a blog post for dev.to";

    fn template() -> &'static str {
        r#"# Generate a Dev.to Blog Post

Please generate a comprehensive and engaging blog post about the following topic: **{{topic}}**.

The blog post should include:
- A catchy and informative title.
- An introduction that hooks the reader.
- Several paragraphs discussing key aspects of the topic.
- Code examples or technical details if applicable.
- A conclusion that summarizes the main points and offers a call to action or further thoughts.
- Use Markdown formatting extensively (headings, bold, italics, code blocks, lists).

Consider the target audience to be developers and tech enthusiasts on Dev.to.
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "topic".to_string(),
            title: None,
            description: Some("The main topic of the blog post".to_string()),
            required: Some(true),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_prompt_metadata() {
        assert_eq!(BlogPostGeneratorPrompt::NAME, "blog_post_generator_prompt");
        assert!(!BlogPostGeneratorPrompt::DESCRIPTION.is_empty());

        let args = BlogPostGeneratorPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "topic");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_template_has_heading_and_topic_slot() {
        let template = BlogPostGeneratorPrompt::template();
        assert!(template.starts_with("# "));
        assert!(template.contains("{{topic}}"));
    }
}
