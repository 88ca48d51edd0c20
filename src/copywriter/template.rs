use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

use super::{truncate_chars, Copywriter};
use crate::config::CopyConfig;
use crate::error::Result;
use crate::models::{AdCopy, ProductInput};

const HEADLINE_TEMPLATES: [&str; 4] = [
    "Meet {name}, Your New Favorite",
    "Upgrade Your Everyday with {name}",
    "{name}: Made to Impress",
    "Say Hello to {name}",
];

const CAPTION_TEMPLATES: [&str; 3] = [
    "{description} Get yours today.",
    "Discover why everyone is talking about {name}. {description}",
    "{name} is finally here. {description}",
];

/// Copy generator that picks uniformly at random from fixed template lists.
/// The RNG is seedable so tests can pin the selection.
pub struct TemplateCopywriter {
    rng: Mutex<StdRng>,
    headline_max_chars: usize,
}

impl TemplateCopywriter {
    pub fn new(config: &CopyConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: &CopyConfig, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            headline_max_chars: config.headline_max_chars,
        }
    }

    /// All headline candidates for a product, after substitution.
    pub fn headline_candidates(name: &str) -> Vec<String> {
        HEADLINE_TEMPLATES
            .iter()
            .map(|t| t.replace("{name}", name))
            .collect()
    }

    /// All caption candidates for a product, after substitution.
    pub fn caption_candidates(name: &str, description: &str) -> Vec<String> {
        CAPTION_TEMPLATES
            .iter()
            .map(|t| t.replace("{name}", name).replace("{description}", description))
            .collect()
    }

    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap();
        rng.random_range(0..len)
    }
}

#[async_trait]
impl Copywriter for TemplateCopywriter {
    async fn generate(&self, input: &ProductInput) -> Result<AdCopy> {
        let headline = HEADLINE_TEMPLATES[self.pick(HEADLINE_TEMPLATES.len())]
            .replace("{name}", &input.name);
        let caption = CAPTION_TEMPLATES[self.pick(CAPTION_TEMPLATES.len())]
            .replace("{name}", &input.name)
            .replace("{description}", &input.description);

        Ok(AdCopy::new(
            truncate_chars(&headline, self.headline_max_chars),
            caption,
            input.platform,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    fn sample_input() -> ProductInput {
        ProductInput::new(
            "Wireless Earbuds",
            "High-quality wireless earbuds with noise cancellation.",
            Platform::Instagram,
        )
    }

    #[tokio::test]
    async fn output_is_always_drawn_from_the_candidate_sets() {
        let input = sample_input();
        let headlines = TemplateCopywriter::headline_candidates(&input.name);
        let captions = TemplateCopywriter::caption_candidates(&input.name, &input.description);

        let writer = TemplateCopywriter::with_seed(&CopyConfig::default(), 7);
        for _ in 0..32 {
            let copy = writer.generate(&input).await.unwrap();
            assert!(headlines.contains(&copy.headline), "unexpected headline: {}", copy.headline);
            assert!(captions.contains(&copy.caption), "unexpected caption: {}", copy.caption);
            assert_eq!(copy.cta, "Shop Now");
        }
    }

    #[tokio::test]
    async fn same_seed_same_sequence() {
        let input = sample_input();
        let a = TemplateCopywriter::with_seed(&CopyConfig::default(), 42);
        let b = TemplateCopywriter::with_seed(&CopyConfig::default(), 42);

        for _ in 0..8 {
            let ca = a.generate(&input).await.unwrap();
            let cb = b.generate(&input).await.unwrap();
            assert_eq!(ca.headline, cb.headline);
            assert_eq!(ca.caption, cb.caption);
        }
    }

    #[tokio::test]
    async fn long_product_names_still_fit_the_headline_budget() {
        let input = ProductInput::new("X".repeat(120), "desc", Platform::GoogleAds);
        let writer = TemplateCopywriter::with_seed(&CopyConfig::default(), 1);
        let copy = writer.generate(&input).await.unwrap();
        assert!(copy.headline.chars().count() <= 50);
        assert_eq!(copy.cta, "Learn More");
    }
}
