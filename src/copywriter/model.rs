use async_trait::async_trait;

use super::{truncate_chars, Copywriter};
use crate::bedrock::TextClient;
use crate::config::CopyConfig;
use crate::error::Result;
use crate::models::{AdCopy, ProductInput, TextGenerationRequest};

/// Copy generator backed by a Bedrock text model. The model is an opaque
/// text-in/text-out collaborator; its raw output is split on sentence
/// terminators and trimmed into headline and caption.
pub struct ModelCopywriter {
    text: TextClient,
    config: CopyConfig,
}

impl ModelCopywriter {
    pub fn new(text: TextClient, config: CopyConfig) -> Self {
        Self { text, config }
    }

    fn build_prompt(input: &ProductInput) -> String {
        format!(
            "Create a catchy ad headline and caption for {}.\nDescription: {}\nPlatform: {}",
            input.name, input.description, input.platform
        )
    }
}

#[async_trait]
impl Copywriter for ModelCopywriter {
    async fn generate(&self, input: &ProductInput) -> Result<AdCopy> {
        let request = TextGenerationRequest {
            prompt: Self::build_prompt(input),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            model_id: self.config.model_id.clone(),
        };

        let raw = self.text.generate(request).await?;
        let (headline, caption) = split_copy(&raw, self.config.headline_max_chars);

        log::debug!("Model copy for '{}': headline='{}'", input.name, headline);

        Ok(AdCopy::new(headline, caption, input.platform))
    }
}

/// Split raw model output into (headline, caption): the first sentence
/// fragment, truncated, becomes the headline; the next one-to-two fragments
/// joined become the caption.
fn split_copy(raw: &str, headline_max_chars: usize) -> (String, String) {
    let fragments: Vec<&str> = raw
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let headline = fragments
        .first()
        .map(|s| truncate_chars(s, headline_max_chars))
        .unwrap_or_default();

    let caption = fragments
        .iter()
        .skip(1)
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(". ");

    (headline, caption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    #[test]
    fn splits_on_sentence_terminators() {
        let raw = "Great sound, no wires. All-day battery! Order yours today? Extra tail.";
        let (headline, caption) = split_copy(raw, 50);
        assert_eq!(headline, "Great sound, no wires");
        assert_eq!(caption, "All-day battery. Order yours today");
    }

    #[test]
    fn headline_is_truncated_to_max_chars() {
        let raw = "x".repeat(200);
        let (headline, _) = split_copy(&raw, 50);
        assert_eq!(headline.chars().count(), 50);
    }

    #[test]
    fn empty_output_yields_empty_copy() {
        let (headline, caption) = split_copy("   ", 50);
        assert!(headline.is_empty());
        assert!(caption.is_empty());
    }

    #[test]
    fn prompt_embeds_product_and_platform() {
        let input = ProductInput::new(
            "Wireless Earbuds",
            "High-quality wireless earbuds.",
            Platform::AmazonAds,
        );
        let prompt = ModelCopywriter::build_prompt(&input);
        assert!(prompt.contains("Wireless Earbuds"));
        assert!(prompt.contains("Amazon Ads"));
    }
}
