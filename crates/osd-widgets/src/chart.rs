//! Sharpness history chart: centripetal Catmull–Rom spline through the
//! EMA-smoothed values of the shared [`osd_core::history::SharpnessHistory`]
//! ring buffer, with a translucent fill and the raw samples overlaid as
//! small dots. Used by both the variant-info panel (widget 4) and the
//! autofocus-debug widget (widget 9).

use osd_color::Color;
use osd_core::history::Sample;
use osd_framebuffer::Framebuffer;
use osd_primitives::{draw_filled_circle, draw_polyline, Point};

const SEGMENTS_PER_SPAN: usize = 8;

/// Draw `samples` (oldest first) into a `width × height` box at `(x, y)`.
/// The x axis spans the sample window linearly; the y axis maps the
/// combined range of raw and EMA values (falling back to `[0,1]` when flat)
/// onto the box height, plotted top-down (higher value = higher up).
pub fn draw_history_chart(
    fb: &mut Framebuffer<'_>,
    samples: &[Sample],
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    line_color: Color,
    fill_color: Color,
) {
    if samples.len() < 2 {
        return;
    }

    let t0 = samples[0].monotonic_us;
    let t1 = samples[samples.len() - 1].monotonic_us;
    let span_us = (t1 - t0).max(1) as f64;

    // Shared y-scale across both series so the raw dots land meaningfully
    // against the smoothed curve rather than each being normalized alone.
    let min = samples
        .iter()
        .flat_map(|s| [s.score, s.ema])
        .fold(f32::INFINITY, f32::min);
    let max = samples
        .iter()
        .flat_map(|s| [s.score, s.ema])
        .fold(f32::NEG_INFINITY, f32::max);
    let (min, max) = if (max - min).abs() < f32::EPSILON {
        (0.0, 1.0)
    } else {
        (min, max)
    };

    let to_screen = |monotonic_us: u64, value: f32| -> (f32, f32) {
        let sx = x as f32 + ((monotonic_us - t0) as f64 / span_us) as f32 * width as f32;
        let norm = (value - min) / (max - min);
        let sy = y as f32 + height as f32 * (1.0 - norm.clamp(0.0, 1.0));
        (sx, sy)
    };

    let raw_points: Vec<(f32, f32)> = samples.iter().map(|s| to_screen(s.monotonic_us, s.score)).collect();
    let curve_points: Vec<(f32, f32)> = samples.iter().map(|s| to_screen(s.monotonic_us, s.ema)).collect();
    let spline = centripetal_catmull_rom(&curve_points, SEGMENTS_PER_SPAN);

    // Translucent fill: polygon from the baseline up through the spline and
    // back, approximated here as one filled bar per spline segment (no
    // general polygon fill primitive exists in this rasterizer).
    let baseline_y = y + height;
    for pair in spline.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, _y1) = pair[1];
        let bar_x = x0.round() as i32;
        let bar_top = y0.round() as i32;
        let bar_w = ((x1 - x0).round() as i32).max(1);
        osd_primitives::draw_rect_filled(fb, bar_x, bar_top, bar_w, baseline_y - bar_top, fill_color);
    }

    let line_points: Vec<Point> = spline
        .iter()
        .map(|&(px, py)| Point::new(px.round() as i32, py.round() as i32))
        .collect();
    draw_polyline(fb, &line_points, line_color, 1);

    for &(px, py) in &raw_points {
        draw_filled_circle(fb, Point::new(px.round() as i32, py.round() as i32), 2, line_color);
    }
}

/// Centripetal Catmull–Rom spline through `points`, `segments_per_span`
/// interpolated points between each consecutive pair. Endpoints are
/// duplicated as virtual control points (the common "phantom point" fix for
/// open splines).
fn centripetal_catmull_rom(points: &[(f32, f32)], segments_per_span: usize) -> Vec<(f32, f32)> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut extended = Vec::with_capacity(points.len() + 2);
    extended.push(points[0]);
    extended.extend_from_slice(points);
    extended.push(points[points.len() - 1]);

    let mut out = Vec::new();
    for i in 1..extended.len() - 2 {
        let p0 = extended[i - 1];
        let p1 = extended[i];
        let p2 = extended[i + 1];
        let p3 = extended[i + 2];

        let t0 = 0.0f32;
        let t1 = t0 + knot_interval(p0, p1);
        let t2 = t1 + knot_interval(p1, p2);
        let t3 = t2 + knot_interval(p2, p3);

        for s in 0..segments_per_span {
            let t = t1 + (t2 - t1) * (s as f32 / segments_per_span as f32);
            out.push(catmull_rom_eval(p0, p1, p2, p3, t0, t1, t2, t3, t));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

fn knot_interval(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt().sqrt().max(1e-4)
}

#[allow(clippy::too_many_arguments)]
fn catmull_rom_eval(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t0: f32,
    t1: f32,
    t2: f32,
    t3: f32,
    t: f32,
) -> (f32, f32) {
    let lerp = |a: (f32, f32), b: (f32, f32), ta: f32, tb: f32, t: f32| -> (f32, f32) {
        if (tb - ta).abs() < 1e-6 {
            return a;
        }
        let w = (t - ta) / (tb - ta);
        (a.0 + (b.0 - a.0) * w, a.1 + (b.1 - a.1) * w)
    };

    let a1 = lerp(p0, p1, t0, t1, t);
    let a2 = lerp(p1, p2, t1, t2, t);
    let a3 = lerp(p2, p3, t2, t3, t);
    let b1 = lerp(a1, a2, t0, t2, t);
    let b2 = lerp(a2, a3, t1, t3, t);
    lerp(b1, b2, t1, t2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_passes_near_original_samples() {
        let points = vec![(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0)];
        let spline = centripetal_catmull_rom(&points, 8);
        assert!(spline.len() > points.len());
        assert_eq!(*spline.last().unwrap(), *points.last().unwrap());
    }

    #[test]
    fn two_samples_produce_a_short_spline() {
        let points = vec![(0.0, 0.0), (10.0, 10.0)];
        let spline = centripetal_catmull_rom(&points, 8);
        assert!(spline.len() >= 8);
    }
}
