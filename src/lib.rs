pub mod bedrock;
pub mod config;
pub mod copywriter;
pub mod error;
pub mod logger;
pub mod models;
pub mod render;

pub use bedrock::TextClient;
pub use config::{BedrockConfig, CopyConfig, RenderConfig, StudioConfig};
pub use copywriter::{Copywriter, ModelCopywriter, TemplateCopywriter};
pub use error::{CreativeError, Result};
pub use models::{AdCopy, Creative, CreativeSet, CreativeSize, Platform, ProductInput};
pub use render::Compositor;

use std::sync::Arc;

/// Facade over the copy generator and the creative compositor. One studio is
/// built per process; every call to [`StudioClient::generate_creatives`]
/// regenerates copy and creatives from scratch.
pub struct StudioClient {
    copywriter: Arc<dyn Copywriter>,
    compositor: Compositor,
}

impl StudioClient {
    /// Studio with the template-backed copy generator. No external calls.
    pub fn template_backed(config: StudioConfig) -> Self {
        let copywriter = Arc::new(TemplateCopywriter::new(&config.copy));
        Self::with_copywriter(config, copywriter)
    }

    /// Studio with the model-backed copy generator. Initializes the shared
    /// Bedrock runtime handle on first use.
    pub async fn model_backed(config: StudioConfig) -> Result<Self> {
        let bedrock_config = config.bedrock.clone().ok_or_else(|| {
            CreativeError::ConfigError("model-backed studio requires a Bedrock configuration".into())
        })?;
        let client = bedrock::runtime_client(&bedrock_config).await?;
        let copywriter = Arc::new(ModelCopywriter::new(
            TextClient::new(client),
            config.copy.clone(),
        ));
        Ok(Self::with_copywriter(config, copywriter))
    }

    /// Studio with a caller-provided copy strategy.
    pub fn with_copywriter(config: StudioConfig, copywriter: Arc<dyn Copywriter>) -> Self {
        Self {
            copywriter,
            compositor: Compositor::new(config.render),
        }
    }

    /// Decode an uploaded JPEG/PNG into the working RGB bitmap.
    pub fn load_image(bytes: &[u8]) -> Result<image::RgbImage> {
        let img = image::load_from_memory(bytes)?;
        Ok(img.to_rgb8())
    }

    /// Run the full flow for one submission: generate copy once, then render
    /// one creative per catalog size of the requested platform.
    ///
    /// A failed model invocation is recoverable: placeholder copy is
    /// substituted (with the exact platform CTA) and rendering proceeds. An
    /// undecodable upload is the caller's error and nothing is rendered.
    pub async fn generate_creatives(
        &self,
        input: &ProductInput,
        image_bytes: &[u8],
    ) -> Result<CreativeSet> {
        let _timer = logger::timer(&format!("{} creatives", input.platform));

        let base = Self::load_image(image_bytes)?;

        let copy = match self.copywriter.generate(input).await {
            Ok(copy) => copy,
            Err(e) => {
                log::warn!("Copy generation failed, using placeholder copy: {}", e);
                AdCopy::fallback(input)
            }
        };

        let creatives = input
            .platform
            .sizes()
            .iter()
            .map(|&size| {
                self.compositor
                    .render(&base, &copy.headline, &copy.cta, input.platform, size)
            })
            .collect();

        Ok(CreativeSet { copy, creatives })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn jpeg_fixture(w: u32, h: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(w, h, Rgb([180, 40, 90]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Jpeg)
            .unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn amazon_flow_produces_exactly_one_creative() {
        let studio = StudioClient::template_backed(StudioConfig::default());
        let input = ProductInput::new(
            "Wireless Earbuds",
            "High-quality wireless earbuds with noise cancellation and long battery life.",
            Platform::AmazonAds,
        );

        let set = studio
            .generate_creatives(&input, &jpeg_fixture(800, 600))
            .await
            .unwrap();

        assert_eq!(set.copy.cta, "Buy Now");
        assert_eq!(set.creatives.len(), 1);
        assert_eq!(set.creatives[0].size, CreativeSize::new(1200, 628));
        assert_eq!(set.creatives[0].image.width(), 1200);
        assert_eq!(set.creatives[0].image.height(), 628);
        assert_eq!(set.creatives[0].label(), "Amazon Ads Creative 1200x628");
    }

    #[tokio::test]
    async fn creative_count_and_sizes_follow_the_catalog() {
        let studio = StudioClient::template_backed(StudioConfig::default());
        let bytes = jpeg_fixture(640, 480);

        for platform in Platform::all() {
            let input = ProductInput::new("Desk Lamp", "A lamp.", platform);
            let set = studio.generate_creatives(&input, &bytes).await.unwrap();

            let rendered: Vec<_> = set.creatives.iter().map(|c| c.size).collect();
            assert_eq!(rendered, platform.sizes().to_vec());
            assert!(set.creatives.iter().all(|c| c.platform == platform));
        }
    }

    #[tokio::test]
    async fn undecodable_upload_is_reported_before_rendering() {
        let studio = StudioClient::template_backed(StudioConfig::default());
        let input = ProductInput::new("Desk Lamp", "A lamp.", Platform::Instagram);

        let err = studio
            .generate_creatives(&input, b"not an image")
            .await
            .unwrap_err();
        assert!(matches!(err, CreativeError::ImageError(_)));
    }

    #[tokio::test]
    async fn failing_copywriter_falls_back_to_placeholder_copy() {
        struct FailingWriter;

        #[async_trait::async_trait]
        impl Copywriter for FailingWriter {
            async fn generate(&self, _input: &ProductInput) -> Result<AdCopy> {
                Err(CreativeError::AwsError("model unavailable".into()))
            }
        }

        let studio =
            StudioClient::with_copywriter(StudioConfig::default(), Arc::new(FailingWriter));
        let input = ProductInput::new("Desk Lamp", "A warm light.", Platform::GoogleAds);

        let set = studio
            .generate_creatives(&input, &jpeg_fixture(320, 240))
            .await
            .unwrap();

        assert_eq!(set.copy.headline, "Discover Desk Lamp");
        assert_eq!(set.copy.cta, "Learn More");
        assert_eq!(set.creatives.len(), 2);
    }

    #[test]
    fn png_bytes_round_trip_through_the_decoder() {
        let creative = Creative::new(
            Platform::Instagram,
            CreativeSize::new(32, 32),
            RgbImage::from_pixel(32, 32, Rgb([1, 2, 3])),
        );
        let bytes = creative.png_bytes().unwrap();
        let decoded = StudioClient::load_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));

        let uri = creative.to_data_uri().unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
