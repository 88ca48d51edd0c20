use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreativeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Image error: {0}")]
    ImageError(String),
    #[error("AWS error: {0}")]
    AwsError(String),
    #[error("AWS service error: {0}")]
    AwsServiceError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<image::ImageError> for CreativeError {
    fn from(err: image::ImageError) -> Self {
        CreativeError::ImageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CreativeError>;
