use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        BedrockConfig {
            region: None,
            access_key: None,
            secret_key: None,
        }
    }
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        BedrockConfig {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }
}

/// Settings for the model-backed copy generator.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub model_id: Option<String>,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
    /// Headlines are truncated to this many characters before rendering.
    pub headline_max_chars: usize,
}

impl Default for CopyConfig {
    fn default() -> Self {
        CopyConfig {
            model_id: None,
            max_tokens: Some(80),
            temperature: Some(0.7),
            headline_max_chars: 50,
        }
    }
}

impl CopyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let model_id = env::var("ADCRAFT_MODEL_ID").ok();
        let max_tokens = env::var("ADCRAFT_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok());

        CopyConfig {
            model_id,
            max_tokens: max_tokens.or(Some(80)),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Geometry, colors and fonts for the creative compositor.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Explicit TrueType file. When unset the standard system locations are
    /// searched; on any failure the built-in bitmap face is used.
    pub font_file: Option<PathBuf>,
    pub headline_px: f32,
    pub cta_px: f32,
    pub band_height: u32,
    /// Opacity of the bottom band, 0.0..=1.0.
    pub band_opacity: f32,
    /// Headline wrap column, in characters.
    pub wrap_columns: usize,
    pub accent_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            font_file: None,
            headline_px: 36.0,
            cta_px: 28.0,
            band_height: 180,
            band_opacity: 0.7,
            wrap_columns: 20,
            accent_color: [255, 165, 0],
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let font_file = env::var("ADCRAFT_FONT").ok().map(PathBuf::from);

        RenderConfig {
            font_file,
            ..Default::default()
        }
    }

    pub fn with_font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_file = Some(path.into());
        self
    }

    pub fn with_band_opacity(mut self, opacity: f32) -> Self {
        self.band_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_wrap_columns(mut self, columns: usize) -> Self {
        self.wrap_columns = columns.max(1);
        self
    }
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub bedrock: Option<BedrockConfig>,
    pub copy: CopyConfig,
    pub render: RenderConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            bedrock: None,
            copy: CopyConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        StudioConfig {
            bedrock: Some(BedrockConfig::from_env()),
            copy: CopyConfig::from_env(),
            render: RenderConfig::from_env(),
        }
    }

    pub fn with_bedrock(mut self, config: BedrockConfig) -> Self {
        self.bedrock = Some(config);
        self
    }

    pub fn with_copy(mut self, config: CopyConfig) -> Self {
        self.copy = config;
        self
    }

    pub fn with_render(mut self, config: RenderConfig) -> Self {
        self.render = config;
        self
    }
}
