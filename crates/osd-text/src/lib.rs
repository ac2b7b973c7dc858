//! TrueType glyph rasterization with kerning and outline effects.

use ab_glyph::{Font, FontArc, Glyph, GlyphId, OutlinedGlyph, ScaleFont};
use osd_color::Color;
use osd_framebuffer::Framebuffer;

/// Owns a font's byte buffer and a live font-info handle into it.
///
/// `FontArc` keeps its backing bytes alive internally, so `FontResource`
/// never outlives its buffer by construction.
pub struct FontResource {
    font: FontArc,
}

/// Resource-load failure for a font file.
#[derive(Debug)]
pub enum FontError {
    Parse,
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::Parse => write!(f, "failed to parse font data"),
        }
    }
}

impl std::error::Error for FontError {}

impl FontResource {
    /// Parse a TrueType/OpenType font from raw bytes already read by the
    /// host's load-by-path interface.
    pub fn load(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font = FontArc::try_from_vec(bytes).map_err(|_| FontError::Parse)?;
        Ok(FontResource { font })
    }

    fn scale_for(&self, px_size: f32) -> f32 {
        let sf = self.font.as_scaled(px_size);
        let units = sf.ascent() - sf.descent();
        if units.abs() < f32::EPSILON {
            px_size
        } else {
            px_size * px_size / units.max(1.0)
        }
    }
}

/// Sum of horizontal advances plus kerning between consecutive codepoints.
/// Appending a character never decreases the result.
pub fn measure_width(font: &FontResource, text: &str, px_size: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let scale = font.scale_for(px_size);
    let sf = font.font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = sf.glyph_id(ch);
        if let Some(p) = prev {
            width += sf.kern(p, id);
        }
        width += sf.h_advance(id);
        prev = Some(id);
    }
    width
}

/// Render `text` with its baseline at `(x, y)`, blending each covered pixel
/// with alpha `(glyph_coverage · color.alpha) / 255`. Silent on empty text.
pub fn render(
    fb: &mut Framebuffer<'_>,
    font: &FontResource,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    px_size: f32,
) {
    render_offset(fb, font, text, x, y, color, px_size, 0, 0);
}

fn render_offset(
    fb: &mut Framebuffer<'_>,
    font: &FontResource,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    px_size: f32,
    dx: i32,
    dy: i32,
) {
    if text.is_empty() {
        return;
    }
    let scale = font.scale_for(px_size);
    let sf = font.font.as_scaled(scale);
    let mut pen_x = x as f32;
    let baseline_y = y as f32 + sf.ascent();
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = sf.glyph_id(ch);
        if let Some(p) = prev {
            pen_x += sf.kern(p, id);
        }
        let glyph: Glyph = id.with_scale_and_position(scale, ab_glyph::point(pen_x, baseline_y));
        if let Some(outlined) = font.font.outline_glyph(glyph) {
            blit_glyph(fb, &outlined, color, dx, dy);
        }
        pen_x += sf.h_advance(id);
        prev = Some(id);
    }
}

fn blit_glyph(fb: &mut Framebuffer<'_>, outlined: &OutlinedGlyph, color: Color, dx: i32, dy: i32) {
    let bounds = outlined.px_bounds();
    let base_x = bounds.min.x.round() as i32 + dx;
    let base_y = bounds.min.y.round() as i32 + dy;
    outlined.draw(|gx, gy, coverage| {
        if coverage <= 0.0 {
            return;
        }
        let a = ((coverage.min(1.0) * color.alpha() as f32) as u32).min(255) as u8;
        let px_color = color.with_alpha(a);
        fb.blend_pixel(base_x + gx as i32, base_y + gy as i32, px_color);
    });
}

/// Render `text` with an outline: the text is first stamped in
/// `outline_color` at every offset `(dx,dy) ∈ [-outline_px, outline_px]²`
/// except `(0,0)`, with alpha forced to the main color's alpha, then the
/// main text is drawn at `(0,0)`.
pub fn render_with_outline(
    fb: &mut Framebuffer<'_>,
    font: &FontResource,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    outline_color: Color,
    px_size: f32,
    outline_px: i32,
) {
    if text.is_empty() {
        return;
    }
    if outline_px > 0 {
        let outline = outline_color.with_alpha(color.alpha());
        for dy in -outline_px..=outline_px {
            for dx in -outline_px..=outline_px {
                if dx == 0 && dy == 0 {
                    continue;
                }
                render_offset(fb, font, text, x, y, outline, px_size, dx, dy);
            }
        }
    }
    render(fb, font, text, x, y, color, px_size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_invalid_font_bytes() {
        let err = FontResource::load(vec![0u8; 32]).unwrap_err();
        assert!(matches!(err, FontError::Parse));
    }

    #[test]
    fn load_rejects_empty_buffer() {
        let err = FontResource::load(Vec::new()).unwrap_err();
        assert!(matches!(err, FontError::Parse));
    }
}
