//! Widget 5: sharpness heatmap, an 8×8 grid normalized across its own 64
//! cells and mapped blue→green→red.

use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_rect_filled;

const GRID_ALPHA: u8 = 199; // 0.78 * 255, rounded

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.sharpness_heatmap.clone();
    if !cfg.enabled {
        return false;
    }
    let Some(sharpness) = ctx.state.sharpness else {
        return false;
    };

    let normalized = crate::ramp::normalize_grid(&sharpness.grid_8x8);
    for row in 0..8 {
        for col in 0..8 {
            let idx = row * 8 + col;
            let color = crate::ramp::heat_color(normalized[idx], GRID_ALPHA);
            draw_rect_filled(
                fb,
                cfg.position_x + col as i32 * cfg.cell_size,
                cfg.position_y + row as i32 * cfg.cell_size,
                cfg.cell_size,
                cfg.cell_size,
                color,
            );
        }
    }

    if cfg.show_label {
        let label = format!("{:.3}", sharpness.global_score);
        osd_text::render(
            fb,
            &ctx.fonts.variant_info,
            &label,
            cfg.position_x,
            cfg.position_y - (cfg.label_font_size.ceil() as i32) - 2,
            osd_color::WHITE,
            cfg.label_font_size,
        );
    }

    true
}
