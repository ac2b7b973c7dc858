//! Widget 8: SAM single-object tracker — bounding box, centroid crosshair,
//! predicted-centroid marker, optional mask overlay, and state-labeled pill.

use osd_color::Color;
use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::{draw_filled_circle, draw_line, draw_rect_filled, draw_rect_outline, Point};
use osd_telemetry::{DetectionStatus, TrackingState};

use crate::geometry::ndc_rect_to_pixels;
use crate::pill::{draw_label_pill, draw_label_pill_right_aligned};

fn state_color(state: TrackingState) -> Color {
    match state {
        TrackingState::Tracking => Color::parse_hex("#00FF00"),
        TrackingState::Occluded => Color::parse_hex("#FFFF00"),
        TrackingState::Starting => Color::parse_hex("#00FFFF"),
        TrackingState::Lost => Color::parse_hex("#FF0000"),
        TrackingState::Idle => osd_color::WHITE,
    }
}

fn state_label(state: TrackingState) -> &'static str {
    match state {
        TrackingState::Tracking => "TRACKING",
        TrackingState::Occluded => "OCCLUDED",
        TrackingState::Starting => "STARTING",
        TrackingState::Lost => "LOST",
        TrackingState::Idle => "IDLE",
    }
}

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.sam_mask.clone();
    if !cfg.enabled {
        return false;
    }
    let Some(tracking) = ctx.state.sam_tracking.clone() else {
        return false;
    };
    if tracking.status != DetectionStatus::Ok || tracking.tracking_state == TrackingState::Idle {
        return false;
    }

    let color = if cfg.per_state_color {
        state_color(tracking.tracking_state)
    } else {
        cfg.color.into()
    };

    let bbox = tracking.bbox;
    if let Some(rect) = ndc_rect_to_pixels(bbox.x1 as f64, bbox.y1 as f64, bbox.x2 as f64, bbox.y2 as f64, ctx.width, ctx.height)
    {
        draw_rect_outline(fb, rect.x1, rect.y1, rect.width(), rect.height(), color, cfg.box_thickness);

        let pct = (tracking.confidence * 100.0).round() as i32;
        let label = format!("{} {}%", state_label(tracking.tracking_state), pct);
        draw_label_pill(fb, &ctx.fonts.variant_info, &label, rect.x1, rect.y1, rect.y2, osd_color::WHITE, cfg.label_font_size);

        if matches!(tracking.tracking_state, TrackingState::Lost | TrackingState::Occluded) {
            let lost_label = format!("Lost: {}", tracking.lost_frames);
            draw_label_pill_right_aligned(
                fb,
                &ctx.fonts.variant_info,
                &lost_label,
                rect.x2,
                rect.y1,
                rect.y2,
                osd_color::WHITE,
                cfg.label_font_size,
            );
        }
    }

    let centroid = (
        ((tracking.centroid.0 as f64 + 1.0) / 2.0 * ctx.width as f64).round() as i32,
        ((tracking.centroid.1 as f64 + 1.0) / 2.0 * ctx.height as f64).round() as i32,
    );
    draw_filled_circle(fb, Point::new(centroid.0, centroid.1), cfg.centroid_radius, color);

    let predicted = (
        ((tracking.predicted_centroid.0 as f64 + 1.0) / 2.0 * ctx.width as f64).round() as i32,
        ((tracking.predicted_centroid.1 as f64 + 1.0) / 2.0 * ctx.height as f64).round() as i32,
    );
    if predicted != centroid {
        let half = cfg.centroid_radius;
        draw_line(fb, Point::new(predicted.0 - half, predicted.1 - half), Point::new(predicted.0 + half, predicted.1 + half), color, 1);
        draw_line(fb, Point::new(predicted.0 - half, predicted.1 + half), Point::new(predicted.0 + half, predicted.1 - half), color, 1);
    }

    if cfg.mask_enabled {
        render_mask(fb, ctx, &tracking, color);
    }

    true
}

fn render_mask(fb: &mut Framebuffer<'_>, ctx: &RenderContext, tracking: &osd_telemetry::SamTracking, color: Color) {
    let Some(mask) = tracking.mask.as_ref() else {
        return;
    };
    if mask.len() != 256 * 256 {
        return;
    }

    let crop_x = (ctx.width as i32 - 512) / 2;
    let crop_y = (ctx.height as i32 - 512) / 2;
    let alpha = (ctx.config.sam_mask.mask_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mask_color = color.with_alpha(alpha);

    for my in 0..256usize {
        for mx in 0..256usize {
            if mask[my * 256 + mx] == 0 {
                continue;
            }
            draw_rect_filled(fb, crop_x + (mx as i32) * 2, crop_y + (my as i32) * 2, 2, 2, mask_color);
        }
    }
}
