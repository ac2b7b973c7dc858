//! Widget 1: crosshair, and — when moving and above threshold — the speed
//! indicators drawn radially around it.

use osd_color::Color;
use osd_core::config::CrosshairOrientation;
use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::{draw_circle_outline, draw_filled_circle, draw_line_f, Point};

/// Unit direction vectors for the four crosshair arms.
fn arm_directions(orientation: CrosshairOrientation) -> [(f32, f32); 4] {
    match orientation {
        CrosshairOrientation::Vertical => [(0.0, -1.0), (0.0, 1.0), (-1.0, 0.0), (1.0, 0.0)],
        CrosshairOrientation::Diagonal => {
            const D: f32 = std::f32::consts::FRAC_1_SQRT_2; // cos(45°)
            [(-D, -D), (D, -D), (-D, D), (D, D)]
        }
    }
}

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.crosshair.clone();
    if !cfg.enabled {
        return false;
    }

    let (cx, cy) = ctx.center();
    let origin = (
        cx + ctx.state.crosshair_offset.dx,
        cy + ctx.state.crosshair_offset.dy,
    );
    let mut changed = false;

    if cfg.circle.enabled {
        draw_circle_outline(
            fb,
            Point::new(origin.0, origin.1),
            cfg.circle.radius,
            cfg.circle.color.into(),
            cfg.circle.thickness,
        );
        changed = true;
    }

    if cfg.cross.enabled {
        for (dx, dy) in arm_directions(cfg.orientation) {
            let start = (
                origin.0 as f32 + dx * cfg.cross.gap as f32,
                origin.1 as f32 + dy * cfg.cross.gap as f32,
            );
            let end = (
                origin.0 as f32 + dx * (cfg.cross.gap + cfg.cross.length) as f32,
                origin.1 as f32 + dy * (cfg.cross.gap + cfg.cross.length) as f32,
            );
            draw_line_f(fb, start, end, cfg.cross.color.into(), cfg.cross.thickness);
        }
        changed = true;
    }

    if cfg.center_dot.enabled {
        draw_filled_circle(
            fb,
            Point::new(origin.0, origin.1),
            cfg.center_dot.radius,
            cfg.center_dot.color.into(),
        );
        changed = true;
    }

    changed |= render_speed_indicators(fb, ctx, origin);
    changed
}

fn render_speed_indicators(fb: &mut Framebuffer<'_>, ctx: &RenderContext, origin: (i32, i32)) -> bool {
    let cfg = &ctx.config.speed_indicators;
    if !cfg.enabled {
        return false;
    }
    let Some(speeds) = ctx.state.rotary_speeds else {
        return false;
    };
    if !speeds.is_moving {
        return false;
    }

    let color: Color = cfg.color.into();
    let mut changed = false;

    if speeds.azimuth_norm.abs() > cfg.threshold {
        let value = speeds.azimuth_norm * cfg.max_speed_azimuth;
        let label = format!("{value:.1}°/s");
        osd_text::render(
            fb,
            &ctx.fonts.speed_indicators,
            &label,
            origin.0 + ctx.config.crosshair.circle.radius + 10,
            origin.1 - 6,
            color,
            cfg.font_size,
        );
        changed = true;
    }

    if speeds.elevation_norm.abs() > cfg.threshold {
        let value = speeds.elevation_norm * cfg.max_speed_elevation;
        let label = format!("{value:.1}°/s");
        let width = osd_text::measure_width(&ctx.fonts.speed_indicators, &label, cfg.font_size);
        osd_text::render(
            fb,
            &ctx.fonts.speed_indicators,
            &label,
            origin.0 - (width / 2.0) as i32,
            origin.1 + ctx.config.crosshair.circle.radius + 10,
            color,
            cfg.font_size,
        );
        changed = true;
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::arm_directions;
    use osd_core::config::CrosshairOrientation;

    #[test]
    fn diagonal_arms_are_scaled_by_cos_45() {
        let dirs = arm_directions(CrosshairOrientation::Diagonal);
        for (dx, dy) in dirs {
            assert!((dx.abs() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
            assert!((dy.abs() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        }
    }

    #[test]
    fn vertical_arms_are_axis_aligned() {
        let dirs = arm_directions(CrosshairOrientation::Vertical);
        assert!(dirs.contains(&(0.0, -1.0)));
        assert!(dirs.contains(&(1.0, 0.0)));
    }
}
