use serde::{Deserialize, Serialize};
use std::fmt;

use super::creative::CreativeSize;

/// Advertising platforms with standard creative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    AmazonAds,
    GoogleAds,
}

const INSTAGRAM_SIZES: [CreativeSize; 2] = [
    CreativeSize::new(1080, 1080),
    CreativeSize::new(1080, 1350),
];
const AMAZON_SIZES: [CreativeSize; 1] = [CreativeSize::new(1200, 628)];
const GOOGLE_SIZES: [CreativeSize; 2] = [
    CreativeSize::new(728, 90),
    CreativeSize::new(300, 250),
];

impl Platform {
    pub fn all() -> [Platform; 3] {
        [Platform::Instagram, Platform::AmazonAds, Platform::GoogleAds]
    }

    /// Call-to-action label. Fixed per platform, independent of product content.
    pub fn cta(&self) -> &'static str {
        match self {
            Platform::Instagram => "Shop Now",
            Platform::AmazonAds => "Buy Now",
            Platform::GoogleAds => "Learn More",
        }
    }

    /// Required output dimensions, in the order creatives are produced.
    pub fn sizes(&self) -> &'static [CreativeSize] {
        match self {
            Platform::Instagram => &INSTAGRAM_SIZES,
            Platform::AmazonAds => &AMAZON_SIZES,
            Platform::GoogleAds => &GOOGLE_SIZES,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Instagram => "Instagram",
            Platform::AmazonAds => "Amazon Ads",
            Platform::GoogleAds => "Google Ads",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Platform {
    type Err = crate::error::CreativeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "instagram" => Ok(Platform::Instagram),
            "amazonads" | "amazon" => Ok(Platform::AmazonAds),
            "googleads" | "google" => Ok(Platform::GoogleAds),
            other => Err(crate::error::CreativeError::RequestError(format!(
                "unknown platform: {}",
                other
            ))),
        }
    }
}
