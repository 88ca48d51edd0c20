use adcraft::{Platform, ProductInput, StudioClient, StudioConfig};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    adcraft::logger::init()?;

    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "product.jpg".to_string());
    let image_bytes = fs::read(&image_path)?;

    let input = ProductInput::new(
        "Wireless Earbuds",
        "High-quality wireless earbuds with noise cancellation and long battery life.",
        Platform::Instagram,
    );

    let studio = StudioClient::template_backed(StudioConfig::from_env());
    let set = studio.generate_creatives(&input, &image_bytes).await?;

    println!("Headline: {}", set.copy.headline);
    println!("Caption:  {}", set.copy.caption);
    println!("CTA:      {}", set.copy.cta);

    for creative in &set.creatives {
        let filename = format!("creative_{}.png", creative.size);
        fs::write(&filename, creative.png_bytes()?)?;
        println!("{} -> {}", creative.label(), filename);
    }

    Ok(())
}
