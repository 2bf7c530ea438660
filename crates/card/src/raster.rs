//! Raster canvas backed by an RGBA pixel buffer.

use crate::canvas::{Canvas, Color, TextAlign};
use crate::error::{CardError, Result};
use crate::layout::{CARD_HEIGHT, CARD_WIDTH};
use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Pixel canvas that rasterizes text with a TrueType/OpenType font.
pub struct RasterCanvas {
    image: RgbaImage,
    font: FontVec,
}

impl RasterCanvas {
    /// Create a transparent canvas of the given size
    #[must_use]
    pub fn new(width: u32, height: u32, font: FontVec) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            font,
        }
    }

    /// Standard 1080x1080 card canvas
    #[must_use]
    pub fn card(font: FontVec) -> Self {
        Self::new(CARD_WIDTH, CARD_HEIGHT, font)
    }

    /// Card canvas using the font stored at `path`
    pub fn from_font_file(path: &Path) -> Result<Self> {
        let font = load_font(path)?;
        Ok(Self::card(font))
    }

    /// Borrow the pixels
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixels
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height())
        {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        *pixel = blend_over(*pixel, color, coverage);
    }
}

/// Read and parse a font file
pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path).map_err(|e| CardError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    FontVec::try_from_vec(bytes).map_err(|e| CardError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Paint a top-left to bottom-right linear gradient over the whole image.
///
/// Each pixel takes the colour at its projection onto the diagonal, so the
/// corners carry the exact endpoint colours.
pub fn paint_linear_gradient(image: &mut RgbaImage, from: Color, to: Color) {
    let dx = image.width().saturating_sub(1) as f32;
    let dy = image.height().saturating_sub(1) as f32;
    let length_sq = dx * dx + dy * dy;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let t = if length_sq > 0.0 {
            (x as f32 * dx + y as f32 * dy) / length_sq
        } else {
            0.0
        };
        *pixel = Rgba(from.lerp(to, t).to_rgba());
    }
}

/// Source-over compositing of `color` scaled by `coverage` onto `dst`.
fn blend_over(dst: Rgba<u8>, color: Color, coverage: f32) -> Rgba<u8> {
    let src_a = f32::from(color.alpha()) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return dst;
    }

    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let [r, g, b, _] = color.to_rgba();

    let channel = |src: u8, dst: u8| -> u8 {
        let src = f32::from(src) / 255.0;
        let dst = f32::from(dst) / 255.0;
        let out = (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
        (out * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(r, dst[0]),
        channel(g, dst[1]),
        channel(b, dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill(&mut self, color: Color) {
        let rgba = Rgba(color.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    fn fill_linear_gradient(&mut self, from: Color, to: Color) {
        paint_linear_gradient(&mut self.image, from, to);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }

        width
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        let scale = PxScale::from(size);
        let mut caret = align.left_edge(x, self.measure_text(text, size));

        let mut outlines = Vec::new();
        {
            let scaled = self.font.as_scaled(scale);
            let mut previous = None;
            for c in text.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = previous {
                    caret += scaled.kern(prev, id);
                }
                let glyph = id.with_scale_and_position(scale, point(caret, baseline));
                caret += scaled.h_advance(id);
                previous = Some(id);

                if let Some(outlined) = self.font.outline_glyph(glyph) {
                    outlines.push(outlined);
                }
            }
        }

        for outlined in outlines {
            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i64;
            let top = bounds.min.y as i64;
            outlined.draw(|gx, gy, coverage| {
                self.blend(left + i64::from(gx), top + i64::from(gy), color, coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_gradient_corners() {
        let from = Color::rgb(0x667eea);
        let to = Color::rgb(0x764ba2);
        let mut image = RgbaImage::new(64, 32);
        paint_linear_gradient(&mut image, from, to);

        assert_eq!(image.get_pixel(0, 0).0, from.to_rgba());
        assert_eq!(image.get_pixel(63, 31).0, to.to_rgba());

        // Interior pixels lie between the endpoints on every channel
        let mid = image.get_pixel(32, 16).0;
        assert!(mid[0] >= 0x66 && mid[0] <= 0x76);
        assert!(mid[2] >= 0xa2 && mid[2] <= 0xea);
        assert_eq!(mid[3], 255);
    }

    #[test]
    fn test_gradient_single_pixel() {
        let mut image = RgbaImage::new(1, 1);
        paint_linear_gradient(&mut image, Color::WHITE, Color::BLACK);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_blend_over() {
        let white = Rgba([255, 255, 255, 255]);

        let covered = blend_over(white, Color::BLACK, 1.0);
        assert_eq!(covered.0, [0, 0, 0, 255]);

        let untouched = blend_over(white, Color::BLACK, 0.0);
        assert_eq!(untouched, white);

        let watermark = blend_over(white, Color::from_argb(0x4000_0000), 1.0);
        assert!(watermark[0] > 180 && watermark[0] < 200);
        assert_eq!(watermark[3], 255);
    }

    #[test]
    fn test_blend_onto_transparent() {
        let clear = Rgba([0, 0, 0, 0]);
        let out = blend_over(clear, Color::from_argb(0x80FF_0000), 1.0);
        assert_eq!(out[0], 255);
        assert_eq!(out[3], 128);
    }

    fn test_font_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/DejaVuSansMono.ttf")
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let font = load_font(&test_font_path()).unwrap();
        let mut canvas = RasterCanvas::new(200, 80, font);
        canvas.fill(Color::WHITE);

        assert!(canvas.measure_text("Dil se", 32.0) > 0.0);
        canvas.draw_text("Dil se", 10.0, 50.0, 32.0, Color::BLACK, TextAlign::Start);

        let inked = canvas
            .image()
            .pixels()
            .filter(|p| p.0 != [255, 255, 255, 255])
            .count();
        assert!(inked > 50);

        // Nothing is drawn above the glyph ascent
        assert!((0..200).all(|x| canvas.image().get_pixel(x, 0).0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_rendered_card_differs_from_background() {
        let mut canvas = RasterCanvas::from_font_file(&test_font_path()).unwrap();
        let spec = crate::render::CardSpec::new("Love is the greatest power in the world.", "");

        let layout = crate::render::render_card(&spec, &mut canvas);
        assert!(!layout.quote_lines.is_empty());

        let image = canvas.into_image();
        assert_eq!(image.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        let quote_pixels = image
            .pixels()
            .filter(|p| p.0 != [255, 255, 255, 255])
            .count();
        assert!(quote_pixels > 500);
    }

    #[test]
    fn test_load_font_missing_file() {
        let err = load_font(&PathBuf::from("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, CardError::FontLoad { .. }));
    }

    #[test]
    fn test_load_font_invalid_data() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let err = RasterCanvas::from_font_file(&path).err().unwrap();
        assert!(err.to_string().contains("broken.ttf"));
    }
}
