//! Scaled SVG-to-bitmap rasterization and alpha blitting.

use osd_color::Color;
use osd_framebuffer::Framebuffer;

/// Owns the parsed vector tree. Lifetime and ownership mirror
/// [`osd_text::FontResource`]: created by [`VectorImage::load`], destroyed
/// with the value.
pub struct VectorImage {
    tree: usvg::Tree,
    width: u32,
    height: u32,
}

#[derive(Debug)]
pub enum VectorError {
    Parse,
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::Parse => write!(f, "failed to parse vector image data"),
        }
    }
}

impl std::error::Error for VectorError {}

impl VectorImage {
    /// Parse an SVG document already read by the host's load-by-path
    /// interface, at 96 DPI with pixel units.
    pub fn load(data: &[u8]) -> Result<Self, VectorError> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_data(data, &opt).map_err(|_| VectorError::Parse)?;
        let size = tree.size();
        Ok(VectorImage {
            tree,
            width: size.width().round().max(1.0) as u32,
            height: size.height().round().max(1.0) as u32,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rasterize to a letterboxed `target_w × target_h` pixmap and blend
    /// every pixel onto `fb` at `(x, y)`.
    pub fn render(
        &self,
        fb: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        target_w: u32,
        target_h: u32,
    ) {
        self.render_with_alpha(fb, x, y, target_w, target_h, 1.0);
    }

    /// As [`VectorImage::render`], but each rasterized pixel's alpha is
    /// multiplied by `alpha` before blending. `alpha <= 0` is a no-op.
    pub fn render_with_alpha(
        &self,
        fb: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        target_w: u32,
        target_h: u32,
        alpha: f32,
    ) {
        if alpha <= 0.0 || target_w == 0 || target_h == 0 {
            return;
        }

        let scale = (target_w as f32 / self.width as f32).min(target_h as f32 / self.height as f32);
        let raster_w = ((self.width as f32 * scale).round() as u32).max(1);
        let raster_h = ((self.height as f32 * scale).round() as u32).max(1);

        let Some(mut pixmap) = tiny_skia::Pixmap::new(raster_w, raster_h) else {
            return;
        };
        let transform = tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        let alpha = alpha.clamp(0.0, 1.0);
        for j in 0..raster_h {
            for i in 0..raster_w {
                let px = pixmap.pixel(i, j).unwrap_or_default();
                if px.alpha() == 0 {
                    continue;
                }
                let a = ((px.alpha() as f32) * alpha).round().clamp(0.0, 255.0) as u8;
                if a == 0 {
                    continue;
                }
                // tiny_skia::Pixmap stores premultiplied alpha; un-premultiply
                // before handing channels to the straight-alpha Color type.
                let unmul = |c: u8| -> u8 {
                    if px.alpha() == 0 {
                        0
                    } else {
                        ((c as u32 * 255) / px.alpha() as u32).min(255) as u8
                    }
                };
                let color = Color::new(a, unmul(px.red()), unmul(px.green()), unmul(px.blue()));
                fb.blend_pixel(x + i as i32, y + j as i32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_alpha_is_noop() {
        const MINIMAL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#ff0000"/></svg>"#;
        let img = VectorImage::load(MINIMAL.as_bytes()).expect("parses");
        let mut data = vec![0u8; 4 * 4 * 4];
        let mut fb = Framebuffer::new(&mut data, 4, 4);
        img.render_with_alpha(&mut fb, 0, 0, 4, 4, 0.0);
        assert_eq!(fb.get_pixel(0, 0), osd_color::TRANSPARENT);
    }

    #[test]
    fn dimensions_reflect_document_size() {
        const MINIMAL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"></svg>"#;
        let img = VectorImage::load(MINIMAL.as_bytes()).expect("parses");
        assert_eq!(img.dimensions(), (10, 20));
    }
}
