//! Software 2D rasterization primitives.
//!
//! Every primitive composites through [`Framebuffer::blend_pixel`]; none of
//! them write opaquely. Pixel iteration order within a primitive is an
//! implementation detail and must not be relied on by callers.

use osd_color::Color;
use osd_framebuffer::Framebuffer;

/// An integer screen point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Bresenham line traversal with a square stamp of side `thickness` at
/// every traversed pixel. `p0 == p1` stamps once.
pub fn draw_line(fb: &mut Framebuffer<'_>, p0: Point, p1: Point, color: Color, thickness: i32) {
    let half = (thickness.max(1)) / 2;
    let stamp = |fb: &mut Framebuffer<'_>, cx: i32, cy: i32| {
        for dy in -half..=half {
            for dx in -half..=half {
                fb.blend_pixel(cx + dx, cy + dy, color);
            }
        }
    };

    if p0 == p1 {
        stamp(fb, p0.x, p0.y);
        return;
    }

    let dx = (p1.x - p0.x).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let dy = -(p1.y - p0.y).abs();
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (p0.x, p0.y);

    loop {
        stamp(fb, x, y);
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Convenience wrapper for float endpoints, rounding to nearest pixel.
pub fn draw_line_f(
    fb: &mut Framebuffer<'_>,
    p0: (f32, f32),
    p1: (f32, f32),
    color: Color,
    thickness: i32,
) {
    draw_line(
        fb,
        Point::new(p0.0.round() as i32, p0.1.round() as i32),
        Point::new(p1.0.round() as i32, p1.1.round() as i32),
        color,
        thickness,
    );
}

/// Open polyline through consecutive points.
pub fn draw_polyline(fb: &mut Framebuffer<'_>, points: &[Point], color: Color, thickness: i32) {
    for pair in points.windows(2) {
        draw_line(fb, pair[0], pair[1], color, thickness);
    }
}

/// Naive `x²+y²≤r²` filled-circle sweep over the bounding box.
pub fn draw_filled_circle(fb: &mut Framebuffer<'_>, center: Point, r: i32, color: Color) {
    if r <= 0 {
        fb.blend_pixel(center.x, center.y, color);
        return;
    }
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                fb.blend_pixel(center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Annular sweep over `r_inner²..r_outer²`.
pub fn draw_circle_outline(
    fb: &mut Framebuffer<'_>,
    center: Point,
    r: i32,
    color: Color,
    thickness: i32,
) {
    if r <= 0 {
        fb.blend_pixel(center.x, center.y, color);
        return;
    }
    let thickness = thickness.max(1);
    let r_inner = (r - thickness / 2).max(0);
    let r_outer = r_inner + thickness;
    let (ri2, ro2) = (r_inner * r_inner, r_outer * r_outer);
    for dy in -r_outer..=r_outer {
        for dx in -r_outer..=r_outer {
            let d2 = dx * dx + dy * dy;
            if d2 >= ri2 && d2 <= ro2 {
                fb.blend_pixel(center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Filled rectangle; `w<=0` or `h<=0` draws nothing.
pub fn draw_rect_filled(fb: &mut Framebuffer<'_>, x: i32, y: i32, w: i32, h: i32, color: Color) {
    if w <= 0 || h <= 0 {
        return;
    }
    for dy in 0..h {
        for dx in 0..w {
            fb.blend_pixel(x + dx, y + dy, color);
        }
    }
}

/// Rectangle outline decomposed into four filled bars; top and bottom are
/// full-width, left and right exclude the corners to avoid double-blending.
pub fn draw_rect_outline(
    fb: &mut Framebuffer<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    thickness: i32,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let t = thickness.max(1);
    draw_rect_filled(fb, x, y, w, t, color);
    draw_rect_filled(fb, x, y + h - t, w, t, color);
    draw_rect_filled(fb, x, y + t, t, (h - 2 * t).max(0), color);
    draw_rect_filled(fb, x + w - t, y + t, t, (h - 2 * t).max(0), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use osd_color::TRANSPARENT;

    fn fb(w: u32, h: u32, data: &mut Vec<u8>) -> Framebuffer<'_> {
        *data = vec![0u8; (w * h * 4) as usize];
        Framebuffer::new(data, w, h)
    }

    #[test]
    fn zero_or_negative_rect_is_skipped() {
        let mut data = Vec::new();
        let mut f = fb(4, 4, &mut data);
        draw_rect_filled(&mut f, 0, 0, 0, 2, Color::new(255, 1, 1, 1));
        assert_eq!(f.get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn degenerate_circle_draws_center_only() {
        let mut data = Vec::new();
        let mut f = fb(4, 4, &mut data);
        let c = Color::new(255, 9, 9, 9);
        draw_filled_circle(&mut f, Point::new(1, 1), 0, c);
        assert_eq!(f.get_pixel(1, 1), c);
        assert_eq!(f.get_pixel(2, 2), TRANSPARENT);
    }

    #[test]
    fn degenerate_line_stamps_once() {
        let mut data = Vec::new();
        let mut f = fb(4, 4, &mut data);
        let c = Color::new(255, 9, 9, 9);
        draw_line(&mut f, Point::new(1, 1), Point::new(1, 1), c, 1);
        assert_eq!(f.get_pixel(1, 1), c);
    }
}
