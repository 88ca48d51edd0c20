use serde::{Deserialize, Serialize};

use super::common::Platform;

/// One user submission. Immutable once read.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub platform: Platform,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            platform,
        }
    }
}

/// Generated ad copy for a single request.
#[derive(Debug, Clone, Serialize)]
pub struct AdCopy {
    pub headline: String,
    pub caption: String,
    pub cta: String,
}

impl AdCopy {
    pub fn new(headline: impl Into<String>, caption: impl Into<String>, platform: Platform) -> Self {
        Self {
            headline: headline.into(),
            caption: caption.into(),
            cta: platform.cta().to_string(),
        }
    }

    /// Placeholder copy used when model invocation fails. The CTA stays exact.
    pub fn fallback(input: &ProductInput) -> Self {
        let headline = crate::copywriter::truncate_chars(&format!("Discover {}", input.name), 50);
        AdCopy::new(headline, input.description.clone(), input.platform)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationRequest {
    pub prompt: String,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
    pub model_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TitanTextResponse {
    pub results: Vec<TitanTextResult>,
}

#[derive(Serialize, Deserialize)]
pub struct TitanTextResult {
    #[serde(rename = "outputText")]
    pub output_text: String,
    #[serde(rename = "completionReason")]
    pub completion_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ClaudeMessagesResponse {
    pub content: Vec<ClaudeContentBlock>,
    pub stop_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ClaudeContentBlock {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct LlamaResponse {
    pub generation: String,
    pub prompt_token_count: i32,
    pub generation_token_count: i32,
    pub stop_reason: String,
}
