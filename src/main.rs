use adcraft::{
    BedrockConfig, Platform, ProductInput, StudioClient, StudioConfig, TextClient,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    adcraft::logger::init_with_config(
        adcraft::logger::LoggerConfig::development()
            .with_level(adcraft::logger::LogLevel::Debug),
    )?;

    adcraft::logger::log_startup_info("adcraft", env!("CARGO_PKG_VERSION"));

    let platform = env::args()
        .nth(1)
        .map(|s| s.parse::<Platform>())
        .transpose()?
        .unwrap_or(Platform::AmazonAds);

    let image_bytes = match env::args().nth(2) {
        Some(path) => {
            log::info!("🖼️  Using product image: {}", path);
            fs::read(path)?
        }
        None => {
            log::warn!("⚠️  No product image given, using a generated sample");
            sample_image_bytes()?
        }
    };

    let input = ProductInput::new(
        "Wireless Earbuds",
        "High-quality wireless earbuds with noise cancellation and long battery life.",
        platform,
    );

    log::info!("📋 Product: {} ({})", input.name, input.platform);

    // Test 1: template-backed copy, no external calls
    log::info!("🔄 Generating creatives with the template copywriter...");

    let studio = StudioClient::template_backed(StudioConfig::from_env());
    let set = studio.generate_creatives(&input, &image_bytes).await?;

    log::info!("📢 Headline: {}", set.copy.headline);
    log::info!("📝 Caption: {}", set.copy.caption);
    log::info!("👉 CTA: {}", set.copy.cta);

    for creative in &set.creatives {
        let filename = format!(
            "template_{}_{}.png",
            creative.platform.to_string().replace(' ', "_").to_lowercase(),
            creative.size
        );
        fs::write(&filename, creative.png_bytes()?)?;
        log::info!("💾 {} saved to: {}", creative.label(), filename);
    }

    // Test 2: model-backed copy, only when AWS credentials are available
    match (
        env::var("AWS_ACCESS_KEY_ID"),
        env::var("AWS_SECRET_ACCESS_KEY"),
    ) {
        (Ok(_), Ok(_)) => {
            log::info!("✅ AWS credentials found in environment");
            log::info!("📚 Supported text generation models:");
            for (id, name, provider) in TextClient::supported_models() {
                log::info!("  {} - {} ({})", id, name, provider);
            }

            log::info!("🔄 Generating creatives with the model copywriter...");
            let config = StudioConfig::from_env().with_bedrock(BedrockConfig::from_env());

            match StudioClient::model_backed(config).await {
                Ok(studio) => {
                    let set = studio.generate_creatives(&input, &image_bytes).await?;
                    log::info!("📢 Headline: {}", set.copy.headline);
                    log::info!("📝 Caption: {}", set.copy.caption);
                    log::info!("👉 CTA: {}", set.copy.cta);

                    for creative in &set.creatives {
                        let filename = format!(
                            "model_{}_{}.png",
                            creative.platform.to_string().replace(' ', "_").to_lowercase(),
                            creative.size
                        );
                        fs::write(&filename, creative.png_bytes()?)?;
                        log::info!("💾 {} saved to: {}", creative.label(), filename);
                    }
                }
                Err(e) => {
                    log::error!("❌ Failed to initialize the model-backed studio: {}", e);
                    log::warn!("💡 Check your AWS region and Bedrock model access");
                }
            }
        }
        _ => {
            log::warn!("⚠️  No AWS credentials in environment, skipping the model copywriter");
        }
    }

    log::info!("🎉 Done! Check the generated PNG files in the current directory");

    Ok(())
}

// Flat gradient stand-in for a product photo, demo only.
fn sample_image_bytes() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    let img = RgbImage::from_fn(800, 600, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 160])
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img).write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}
