use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

use super::fonts::FontFace;

/// Greedy word wrap at a fixed character column, independent of pixel font
/// metrics. Words longer than the column are hard-chunked so every output
/// line stays within the budget.
pub fn wrap_columns(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > columns {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars[..columns].iter().collect());
            chars.drain(..columns);
        }
        if chars.is_empty() {
            continue;
        }

        let word_len = chars.len();
        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed <= columns {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(chars.iter());
            current_len += word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current = chars.into_iter().collect();
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Draw one line of text with its top-left corner at (x, y). Pixels outside
/// the image are clipped.
pub fn draw_line(
    img: &mut RgbImage,
    face: &FontFace,
    px: f32,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    match face {
        FontFace::TrueType(font) => draw_truetype(img, font, px, x, y, color, text),
        FontFace::Bitmap => draw_bitmap(img, px, x, y, color, text),
    }
}

fn draw_truetype(
    img: &mut RgbImage,
    font: &Font<'static>,
    px: f32,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let mut caret_x = x as f32;
    let baseline_y = y as f32 + v_metrics.ascent;

    for ch in text.chars() {
        let glyph = font
            .glyph(ch)
            .scaled(scale)
            .positioned(point(caret_x, baseline_y));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px_x = gx as i32 + bb.min.x;
                let px_y = gy as i32 + bb.min.y;
                if px_x < 0 || px_y < 0 {
                    return;
                }
                let (px_x, px_y) = (px_x as u32, px_y as u32);
                if px_x >= img.width() || px_y >= img.height() {
                    return;
                }
                if v <= 0.0 {
                    return;
                }
                let sa = v.min(1.0);
                let inv = 1.0 - sa;
                let dst = img.get_pixel_mut(px_x, px_y);
                dst.0[0] = (color.0[0] as f32 * sa + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (color.0[1] as f32 * sa + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (color.0[2] as f32 * sa + dst.0[2] as f32 * inv) as u8;
            });
        }
        caret_x += glyph.unpositioned().h_metrics().advance_width;
    }
}

fn draw_bitmap(img: &mut RgbImage, px: f32, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let s = ((px / 8.0).round() as i32).max(1);
    let mut caret = x;

    for ch in text.chars() {
        let glyph = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?'));
        if let Some(rows) = glyph {
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..8 {
                    if row & (1 << gx) == 0 {
                        continue;
                    }
                    for dy in 0..s {
                        for dx in 0..s {
                            let px_x = caret + gx as i32 * s + dx;
                            let px_y = y + gy as i32 * s + dy;
                            if px_x < 0 || px_y < 0 {
                                continue;
                            }
                            let (px_x, px_y) = (px_x as u32, px_y as u32);
                            if px_x >= img.width() || px_y >= img.height() {
                                continue;
                            }
                            img.put_pixel(px_x, px_y, color);
                        }
                    }
                }
            }
        }
        caret += 8 * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_columns("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_columns("", 20).is_empty());
        assert!(wrap_columns("   ", 20).is_empty());
    }

    #[test]
    fn lines_never_exceed_the_column_budget() {
        let text = "premium wireless earbuds with active noise cancellation and long battery life";
        for line in wrap_columns(text, 20) {
            assert!(line.chars().count() <= 20, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn oversized_words_are_hard_chunked() {
        let word = "x".repeat(1000);
        let lines = wrap_columns(&word, 20);
        assert_eq!(lines.len(), 50);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
    }

    #[test]
    fn wrapping_survives_the_full_length_range() {
        for len in [0usize, 1, 19, 20, 21, 199, 1000] {
            let spaced = "word ".repeat(len / 5 + 1);
            let _ = wrap_columns(&spaced[..spaced.len().min(len)], 20);
            let solid: String = "y".repeat(len);
            let _ = wrap_columns(&solid, 20);
        }
    }

    #[test]
    fn bitmap_drawing_clips_at_the_edges() {
        let mut img = RgbImage::new(16, 16);
        // partially and fully out of bounds, must not panic
        draw_bitmap(&mut img, 8.0, 10, 10, Rgb([255, 255, 255]), "wide text");
        draw_bitmap(&mut img, 8.0, -20, -20, Rgb([255, 255, 255]), "off");
        assert_eq!(img.width(), 16);
    }
}
