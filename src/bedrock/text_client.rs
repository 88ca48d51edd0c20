use crate::{
    error::{CreativeError, Result},
    models::{ClaudeMessagesResponse, LlamaResponse, TextGenerationRequest, TitanTextResponse},
};
use aws_sdk_bedrockruntime::{error::ProvideErrorMetadata, primitives::Blob, Client};
use serde_json::json;

const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";

#[derive(Clone)]
pub struct TextClient {
    client: Client,
}

impl TextClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("amazon.titan-text-express-v1", "Titan Text Express", "Amazon"),
            (
                "anthropic.claude-3-haiku-20240307-v1:0",
                "Claude 3 Haiku",
                "Anthropic",
            ),
            ("meta.llama3-8b-instruct-v1:0", "Llama 3 8B Instruct", "Meta"),
        ]
    }

    /// Invoke the model once with the request prompt and return the raw
    /// generated text. No retries; a single attempt per call.
    pub async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        let model_id = request.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID);

        let request_payload = Self::build_request_payload(&request, model_id)?;
        let request_json = serde_json::to_string(&request_payload)
            .map_err(|e| CreativeError::SerializationError(e.to_string()))?;

        log::info!("Invoking model: {}", model_id);
        log::debug!("Text generation request payload: {}", request_json);

        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                log::error!("AWS SDK text generation error details: {:?}", e);

                if let Some(service_error) = e.as_service_error() {
                    CreativeError::AwsServiceError(format!(
                        "Bedrock service error: {} - {}",
                        service_error.code().unwrap_or("unknown"),
                        service_error.message().unwrap_or("no message")
                    ))
                } else {
                    CreativeError::AwsError(format!("AWS SDK error: {}", e))
                }
            })?;

        let response_bytes = response.body.into_inner();
        let response_str = String::from_utf8(response_bytes)
            .map_err(|e| CreativeError::ResponseError(e.to_string()))?;

        Self::extract_text(&response_str, model_id)
    }

    fn build_request_payload(
        request: &TextGenerationRequest,
        model_id: &str,
    ) -> Result<serde_json::Value> {
        let payload = match model_id {
            id if id.starts_with("amazon.titan") => json!({
                "inputText": request.prompt,
                "textGenerationConfig": {
                    "maxTokenCount": request.max_tokens.unwrap_or(80),
                    "temperature": request.temperature.unwrap_or(0.7),
                    "topP": 0.9
                }
            }),
            id if id.starts_with("anthropic.claude") => json!({
                "messages": [
                    {
                        "role": "user",
                        "content": request.prompt
                    }
                ],
                "max_tokens": request.max_tokens.unwrap_or(80),
                "temperature": request.temperature.unwrap_or(0.7),
                "anthropic_version": "bedrock-2023-05-31"
            }),
            id if id.starts_with("meta.llama") => json!({
                "prompt": request.prompt,
                "max_gen_len": request.max_tokens.unwrap_or(80),
                "temperature": request.temperature.unwrap_or(0.7),
                "top_p": 0.9
            }),
            _ => {
                return Err(CreativeError::RequestError(format!(
                    "Unsupported model ID: {}",
                    model_id
                )))
            }
        };

        Ok(payload)
    }

    fn extract_text(response_str: &str, model_id: &str) -> Result<String> {
        let text = match model_id {
            id if id.starts_with("amazon.titan") => {
                let titan: TitanTextResponse = serde_json::from_str(response_str)
                    .map_err(|e| CreativeError::ResponseError(e.to_string()))?;
                titan
                    .results
                    .into_iter()
                    .next()
                    .map(|r| r.output_text)
                    .ok_or_else(|| CreativeError::ResponseError("No text generated".into()))?
            }
            id if id.starts_with("anthropic.claude") => {
                let claude: ClaudeMessagesResponse = serde_json::from_str(response_str)
                    .map_err(|e| CreativeError::ResponseError(e.to_string()))?;
                claude
                    .content
                    .into_iter()
                    .map(|block| block.text)
                    .collect::<Vec<_>>()
                    .join("")
            }
            id if id.starts_with("meta.llama") => {
                let llama: LlamaResponse = serde_json::from_str(response_str)
                    .map_err(|e| CreativeError::ResponseError(e.to_string()))?;
                llama.generation
            }
            _ => {
                return Err(CreativeError::ResponseError(
                    "Unexpected model type in response".into(),
                ))
            }
        };

        Ok(text)
    }
}
