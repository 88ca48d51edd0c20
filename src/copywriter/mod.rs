pub mod model;
pub mod template;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AdCopy, ProductInput};

pub use model::ModelCopywriter;
pub use template::TemplateCopywriter;

/// Copy generation strategy. The model-backed and template-backed writers are
/// interchangeable behind this seam; both resolve the CTA purely from the
/// platform.
#[async_trait]
pub trait Copywriter: Send + Sync {
    async fn generate(&self, input: &ProductInput) -> Result<AdCopy>;
}

pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("", 50), "");
    }
}
