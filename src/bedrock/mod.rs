pub mod text_client;

use crate::config::BedrockConfig;
use crate::error::Result;
use aws_sdk_bedrockruntime::Client;
use tokio::sync::OnceCell;

pub use text_client::TextClient;

static RUNTIME_CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Process-wide Bedrock runtime handle. Initialized once, on first use, then
/// reused for the lifetime of the process. No teardown, no invalidation.
pub async fn runtime_client(config: &BedrockConfig) -> Result<Client> {
    let config = config.clone();
    let client = RUNTIME_CLIENT
        .get_or_init(|| async move { build_client(config).await })
        .await;
    Ok(client.clone())
}

async fn build_client(bedrock_config: BedrockConfig) -> Client {
    let aws_config = if let (Some(access_key), Some(secret_key)) =
        (&bedrock_config.access_key, &bedrock_config.secret_key)
    {
        aws_config::from_env()
            .credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "adcraft-client",
            ))
            .region(aws_sdk_bedrockruntime::config::Region::new(
                bedrock_config
                    .region
                    .clone()
                    .unwrap_or_else(|| "us-east-1".to_string()),
            ))
            .load()
            .await
    } else {
        aws_config::load_from_env().await
    };

    Client::new(&aws_config)
}
