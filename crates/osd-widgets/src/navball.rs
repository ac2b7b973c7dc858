//! Widget 3: rotated textured sphere, level marker, center indicator, and
//! celestial (sun/moon) indicators.

use osd_core::navball::{point_to_uv, CelestialPosition, RotationMatrix};
use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_line_f;
use osd_vector::VectorImage;

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    if !ctx.config.navball.enabled {
        return false;
    }
    let (Some(texture), Some(lut)) = (ctx.navball_texture.as_ref(), ctx.navball_lut.as_ref()) else {
        return false;
    };

    let cx = ctx.config.navball.position_x;
    let cy = ctx.config.navball.position_y;

    let rotation = match ctx.state.orientation {
        Some(o) => RotationMatrix::from_euler_deg(o.azimuth_deg, o.elevation_deg, o.bank_deg),
        None => RotationMatrix::from_euler_deg(0.0, 0.0, 0.0),
    };

    let radius = lut.radius();
    for dj in -radius..=radius {
        for di in -radius..=radius {
            let Some(point) = lut.get(di, dj) else {
                continue;
            };
            let rotated = rotation.apply(point);
            let (u, v) = point_to_uv(rotated);
            let color = texture.sample(u, v);
            fb.blend_pixel(cx + di, cy + dj, color);
        }
    }

    if ctx.config.navball.show_level_marker {
        let half = (radius as f32 * 0.9) as i32;
        draw_line_f(
            fb,
            ((cx - half) as f32, cy as f32),
            ((cx + half) as f32, cy as f32),
            osd_color::WHITE,
            2,
        );
    }

    if let Some(icon) = ctx.icons.navball_center_indicator.as_ref() {
        let scale = ctx.config.navball.center_indicator.scale;
        let size = ((radius as f32 * 0.25) * scale).max(1.0) as u32;
        icon.render(fb, cx - (size / 2) as i32, cy - (size / 2) as i32, size, size);
    }

    render_celestial_indicators(fb, ctx, cx, cy, radius, &rotation);
    true
}

fn render_celestial_indicators(
    fb: &mut Framebuffer<'_>,
    ctx: &RenderContext,
    cx: i32,
    cy: i32,
    radius: i32,
    rotation: &RotationMatrix,
) {
    let cfg = &ctx.config.celestial_indicators;
    if !cfg.enabled {
        return;
    }
    let Some(gps) = ctx.state.gps else {
        log::warn!("celestial indicators enabled but GPS is not valid this frame, skipping");
        return;
    };
    let Some(timestamp) = ctx.state.utc_timestamp else {
        log::warn!("celestial indicators enabled but no valid UTC timestamp this frame, skipping");
        return;
    };

    if cfg.show_sun {
        let pos = osd_core::navball::sun_position(gps.latitude_deg, gps.longitude_deg, timestamp);
        place_body(
            fb,
            cx,
            cy,
            radius,
            rotation,
            pos,
            cfg.visibility_threshold,
            cfg.scale,
            ctx.icons.celestial_sun_front.as_ref(),
            ctx.icons.celestial_sun_back.as_ref(),
        );
    }
    if cfg.show_moon {
        let pos = osd_core::navball::moon_position(gps.latitude_deg, gps.longitude_deg, timestamp);
        place_body(
            fb,
            cx,
            cy,
            radius,
            rotation,
            pos,
            cfg.visibility_threshold,
            cfg.scale,
            ctx.icons.celestial_moon_front.as_ref(),
            ctx.icons.celestial_moon_back.as_ref(),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn place_body(
    fb: &mut Framebuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    rotation: &RotationMatrix,
    pos: CelestialPosition,
    visibility_threshold: f64,
    scale: f32,
    front: Option<&VectorImage>,
    back: Option<&VectorImage>,
) {
    let az = pos.azimuth_deg.to_radians();
    let alt = pos.altitude_deg.to_radians();
    let world_dir = (
        (alt.cos() * az.sin()) as f32,
        alt.sin() as f32,
        (alt.cos() * az.cos()) as f32,
    );
    let rotated = rotation.apply(world_dir);

    let visible = pos.altitude_deg > visibility_threshold;
    let (icon, alpha) = if visible { (front, 1.0) } else { (back, 0.35) };
    let Some(icon) = icon else {
        return;
    };

    let size = ((radius as f32 * 0.18) * scale).max(1.0) as u32;
    let sx = cx + (rotated.0 * radius as f32) as i32 - (size / 2) as i32;
    let sy = cy - (rotated.1 * radius as f32) as i32 - (size / 2) as i32;
    icon.render_with_alpha(fb, sx, sy, size, size, alpha);
}

#[cfg(test)]
mod tests {
    use super::*;
    use osd_core::navball::NavballLut;

    #[test]
    fn identity_rotation_samples_without_panicking() {
        let lut = NavballLut::build(4);
        let rotation = RotationMatrix::from_euler_deg(0.0, 0.0, 0.0);
        for dj in -4..=4 {
            for di in -4..=4 {
                if let Some(p) = lut.get(di, dj) {
                    let rotated = rotation.apply(p);
                    let (u, v) = point_to_uv(rotated);
                    assert!((0.0..=1.0).contains(&v));
                    assert!(u.is_finite());
                }
            }
        }
    }
}
