use base64::Engine;
use chrono::{DateTime, Utc};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use uuid::Uuid;

use super::common::Platform;
use crate::error::Result;

/// Output dimensions of one creative, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreativeSize {
    pub width: u32,
    pub height: u32,
}

impl CreativeSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for CreativeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One fully rendered ad image for a specific platform and pixel size.
/// Regenerated on every invocation; never cached or persisted.
#[derive(Clone, Serialize)]
pub struct Creative {
    pub id: Uuid,
    pub platform: Platform,
    pub size: CreativeSize,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub image: RgbImage,
}

impl Creative {
    pub fn new(platform: Platform, size: CreativeSize, image: RgbImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform,
            size,
            created_at: Utc::now(),
            image,
        }
    }

    /// Display label, e.g. `Amazon Ads Creative 1200x628`.
    pub fn label(&self) -> String {
        format!("{} Creative {}", self.platform, self.size)
    }

    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(self.image.clone())
            .write_to(&mut buf, image::ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Base64 data URI for display-only surfaces.
    pub fn to_data_uri(&self) -> Result<String> {
        let bytes = self.png_bytes()?;
        let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:image/png;base64,{}", b64))
    }
}

impl fmt::Debug for Creative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Creative")
            .field("id", &self.id)
            .field("platform", &self.platform)
            .field("size", &self.size)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Everything produced for one submission: the copy plus one creative per
/// catalog size of the requested platform.
#[derive(Debug, Clone)]
pub struct CreativeSet {
    pub copy: super::copy::AdCopy,
    pub creatives: Vec<Creative>,
}
