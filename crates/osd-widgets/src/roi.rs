//! Widget 7: the four named regions of interest (focus, track, zoom, fx),
//! each drawn in its own configured color with a labeled pill.

use osd_color::Color;
use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_rect_outline;
use osd_telemetry::Roi;

use crate::geometry::ndc_rect_to_pixels;
use crate::pill::draw_label_pill;

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.roi.clone();
    if !cfg.enabled {
        return false;
    }
    let Some(rois) = ctx.state.rois else {
        return false;
    };

    let mut changed = false;
    let entries: [(&str, Option<Roi>, Color); 4] = [
        ("FOCUS", rois.focus, cfg.color_focus.into()),
        ("TRACK", rois.track, cfg.color_track.into()),
        ("ZOOM", rois.zoom, cfg.color_zoom.into()),
        ("FX", rois.fx, cfg.color_fx.into()),
    ];

    for (label, roi, color) in entries {
        let Some(roi) = roi else { continue };
        let Some(rect) = ndc_rect_to_pixels(roi.x1, roi.y1, roi.x2, roi.y2, ctx.width, ctx.height) else {
            continue;
        };
        draw_rect_outline(fb, rect.x1, rect.y1, rect.width(), rect.height(), color, cfg.box_thickness);
        draw_label_pill(
            fb,
            &ctx.fonts.variant_info,
            label,
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
