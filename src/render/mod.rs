pub mod fonts;
pub mod text;

use image::{imageops, Rgb, RgbImage};

use crate::config::RenderConfig;
use crate::models::{Creative, CreativeSize, Platform};
use fonts::FontFace;

const HEADLINE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const CTA_LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const BAND_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

const BUTTON_WIDTH: u32 = 180;
const BUTTON_HEIGHT: u32 = 40;
// Left inset of the button, bottom margin below it, and the horizontal inset
// of the label into the button are all the same 20 px step.
const INSET: u32 = 20;

/// Draws ad copy onto resized copies of the product photo. The photo is
/// stretched to the exact target size; aspect ratio is not preserved.
pub struct Compositor {
    config: RenderConfig,
    face: FontFace,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Self {
        let face = fonts::resolve(config.font_file.as_deref());
        Self { config, face }
    }

    pub fn render(
        &self,
        base: &RgbImage,
        headline: &str,
        cta: &str,
        platform: Platform,
        size: CreativeSize,
    ) -> Creative {
        let mut img = imageops::resize(
            base,
            size.width,
            size.height,
            imageops::FilterType::Lanczos3,
        );
        let (w, h) = (img.width(), img.height());

        let band_top = h.saturating_sub(self.config.band_height);
        fill_rect_blend(&mut img, 0, band_top, w, h, BAND_COLOR, self.config.band_opacity);

        let lines = text::wrap_columns(headline, self.config.wrap_columns);
        let line_height = (self.config.headline_px * 1.2).round() as i32;
        let text_top = band_top as i32 + INSET as i32;
        for (i, line) in lines.iter().enumerate() {
            text::draw_line(
                &mut img,
                &self.face,
                self.config.headline_px,
                INSET as i32,
                text_top + i as i32 * line_height,
                HEADLINE_COLOR,
                line,
            );
        }

        let button_top = h.saturating_sub(BUTTON_HEIGHT + INSET);
        let button_bottom = h.saturating_sub(INSET);
        fill_rect_blend(
            &mut img,
            INSET,
            button_top,
            INSET + BUTTON_WIDTH,
            button_bottom,
            Rgb(self.config.accent_color),
            1.0,
        );

        text::draw_line(
            &mut img,
            &self.face,
            self.config.cta_px,
            (INSET + INSET) as i32,
            button_top as i32 + 5,
            CTA_LABEL_COLOR,
            cta,
        );

        Creative::new(platform, size, img)
    }
}

fn fill_rect_blend(
    img: &mut RgbImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: Rgb<u8>,
    alpha: f32,
) {
    let alpha = alpha.clamp(0.0, 1.0);
    let inv = 1.0 - alpha;
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dst = img.get_pixel_mut(x, y);
            dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn white_base(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    fn compositor() -> Compositor {
        Compositor::new(RenderConfig::default())
    }

    #[test]
    fn output_matches_the_requested_size_exactly() {
        let base = white_base(800, 600);
        for platform in Platform::all() {
            for &size in platform.sizes() {
                let creative = compositor().render(&base, "Headline", platform.cta(), platform, size);
                assert_eq!(creative.image.width(), size.width);
                assert_eq!(creative.image.height(), size.height);
            }
        }
    }

    #[test]
    fn stretching_ignores_the_input_aspect_ratio() {
        // a 10x1000 sliver still fills a wide banner edge to edge
        let base = white_base(10, 1000);
        let size = CreativeSize::new(728, 90);
        let creative = compositor().render(&base, "h", "Learn More", Platform::GoogleAds, size);
        assert_eq!((creative.image.width(), creative.image.height()), (728, 90));
    }

    #[test]
    fn band_darkens_the_bottom_of_the_image() {
        let base = white_base(400, 400);
        let size = CreativeSize::new(300, 250);
        let creative = compositor().render(&base, "", "Buy Now", Platform::AmazonAds, size);

        // inside the band, left of the button
        let in_band = creative.image.get_pixel(5, 250 - 90).0;
        assert!(in_band[0] < 100, "band not blended: {:?}", in_band);
        // above the band the base stays untouched
        let above = creative.image.get_pixel(5, 10).0;
        assert_eq!(above, [255, 255, 255]);
    }

    #[test]
    fn cta_button_is_filled_with_the_accent_color() {
        let base = white_base(640, 480);
        let size = CreativeSize::new(1200, 628);
        let creative = compositor().render(&base, "Headline", "Buy Now", Platform::AmazonAds, size);

        // left of the label text, inside the button rectangle
        let px = creative.image.get_pixel(25, 628 - 40).0;
        assert_eq!(px, [255, 165, 0]);
    }

    #[test]
    fn very_long_headlines_render_without_panicking() {
        let base = white_base(200, 200);
        let size = CreativeSize::new(300, 250);
        let solid: String = "N".repeat(1000);
        let spaced = "new ".repeat(250);

        for headline in [solid.as_str(), spaced.as_str(), ""] {
            let creative =
                compositor().render(&base, headline, "Shop Now", Platform::Instagram, size);
            assert_eq!(creative.image.height(), 250);
        }
    }

    #[test]
    fn missing_font_resource_never_escapes_render() {
        let config = RenderConfig::default().with_font_file(PathBuf::from("/no/such/font.ttf"));
        let compositor = Compositor::new(config);
        let base = white_base(64, 64);
        let creative = compositor.render(
            &base,
            "Fallback headline",
            "Shop Now",
            Platform::Instagram,
            CreativeSize::new(1080, 1080),
        );
        assert_eq!(creative.image.width(), 1080);
    }

    #[test]
    fn tiny_banner_sizes_keep_all_geometry_in_bounds() {
        let base = white_base(800, 600);
        let creative = compositor().render(
            &base,
            "A headline that wraps across several lines for sure",
            "Learn More",
            Platform::GoogleAds,
            CreativeSize::new(728, 90),
        );
        assert_eq!((creative.image.width(), creative.image.height()), (728, 90));
    }
}
