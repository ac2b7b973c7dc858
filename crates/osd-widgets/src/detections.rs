//! Widget 6: object detection boxes, filtered by confidence and status,
//! labeled `<coco_name> <nn>%` in a dark pill.

use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_rect_outline;
use osd_telemetry::DetectionStatus;

use crate::coco::{class_name, palette_color};
use crate::geometry::ndc_rect_to_pixels;
use crate::pill::draw_label_pill;

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.detections.clone();
    if !cfg.enabled {
        return false;
    }
    let Some(detections) = ctx.state.detections.clone() else {
        return false;
    };
    if detections.status != DetectionStatus::Ok {
        return false;
    }

    let mut changed = false;
    for d in &detections.items {
        if d.confidence < cfg.min_confidence {
            continue;
        }
        let Some(rect) = ndc_rect_to_pixels(d.x1 as f64, d.y1 as f64, d.x2 as f64, d.y2 as f64, ctx.width, ctx.height)
        else {
            continue;
        };

        let color = if cfg.per_class_color {
            palette_color(d.class_id)
        } else {
            cfg.color.into()
        };

        draw_rect_outline(fb, rect.x1, rect.y1, rect.width(), rect.height(), color, cfg.box_thickness);

        let pct = (d.confidence * 100.0).round() as i32;
        let label = format!("{} {}%", class_name(d.class_id), pct);
        draw_label_pill(
            fb,
            &ctx.fonts.variant_info,
            &label,
            rect.x1,
            rect.y1,
            rect.y2,
            osd_color::WHITE,
            cfg.label_font_size,
        );
        changed = true;
    }
    changed
}
