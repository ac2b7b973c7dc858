//! Widget 4: build identifiers, resolution, enabled flags, live telemetry
//! values, and a sliding sharpness-history spline.

use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;

const BUILD_ID: &str = env!("CARGO_PKG_VERSION");

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.variant_info.clone();
    if !cfg.enabled {
        return false;
    }

    if let Some(sharpness) = ctx.state.sharpness {
        ctx.sharpness_history.push(sharpness.global_score, ctx.state.monotonic_us);
    }

    let color = cfg.color.into();
    let line_h = (cfg.font_size * 1.3).ceil() as i32;
    let mut y = cfg.position_y;

    let line = |fb: &mut Framebuffer<'_>, text: &str, y: &mut i32| {
        osd_text::render(fb, &ctx.fonts.variant_info, text, cfg.position_x, *y, color, cfg.font_size);
        *y += line_h;
    };

    line(fb, &format!("osd-compositor v{BUILD_ID}"), &mut y);
    line(fb, &format!("{}x{}", ctx.width, ctx.height), &mut y);
    line(
        fb,
        &format!(
            "crosshair:{} navball:{} detections:{} roi:{}",
            flag(ctx.config.crosshair.enabled),
            flag(ctx.config.navball.enabled),
            flag(ctx.config.detections.enabled),
            flag(ctx.config.roi.enabled),
        ),
        &mut y,
    );

    if let Some(o) = ctx.state.orientation {
        line(
            fb,
            &format!("az:{:.1} el:{:.1} bank:{:.1}", o.azimuth_deg, o.elevation_deg, o.bank_deg),
            &mut y,
        );
    }
    if let Some(gps) = ctx.state.gps {
        line(
            fb,
            &format!("lat:{:.4} lon:{:.4} alt:{:.1}m", gps.latitude_deg, gps.longitude_deg, gps.altitude_m),
            &mut y,
        );
    }
    if let Some(sharpness) = ctx.state.sharpness {
        line(fb, &format!("sharpness:{:.3}", sharpness.global_score), &mut y);
    }

    let samples = ctx.sharpness_history.samples();
    if samples.len() >= 2 {
        crate::chart::draw_history_chart(
            fb,
            samples,
            cfg.position_x,
            y,
            200,
            40,
            color,
            color.with_alpha(60),
        );
    }

    true
}

fn flag(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
