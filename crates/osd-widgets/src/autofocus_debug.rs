//! Widget 9: autofocus diagnostics — focus/zoom position sliders, an
//! independent sharpness heatmap, and the shared history chart.

use osd_color::Color;
use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_rect_filled;

const SLIDER_WIDTH: i32 = 16;
const SLIDER_GAP: i32 = 24;
const SLIDER_TRACK: Color = Color::new(200, 60, 60, 60);

pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = ctx.config.autofocus_debug.clone();
    if !cfg.enabled {
        return false;
    }
    let Some(camera) = ctx.state.camera_day else {
        return false;
    };

    let mut x = cfg.position_x;
    let y = cfg.position_y;

    draw_slider(fb, x, y, cfg.bar_height, camera.focus_pos, osd_color::Color::parse_hex("#00FFFF"));
    x += SLIDER_WIDTH + SLIDER_GAP;
    draw_slider(fb, x, y, cfg.bar_height, camera.zoom_pos, osd_color::Color::parse_hex("#FF00FF"));
    x += SLIDER_WIDTH + SLIDER_GAP;

    if let Some(sharpness) = ctx.state.sharpness {
        let normalized = crate::ramp::normalize_grid(&sharpness.grid_8x8);
        for row in 0..8 {
            for col in 0..8 {
                let idx = row * 8 + col;
                let color = crate::ramp::heat_color(normalized[idx], 199);
                draw_rect_filled(
                    fb,
                    x + col as i32 * cfg.heatmap_cell_size,
                    y + row as i32 * cfg.heatmap_cell_size,
                    cfg.heatmap_cell_size,
                    cfg.heatmap_cell_size,
                    color,
                );
            }
        }
        x += 8 * cfg.heatmap_cell_size + SLIDER_GAP;
        ctx.sharpness_history.push(sharpness.global_score, ctx.state.monotonic_us);
    }

    let samples = ctx.sharpness_history.samples();
    if samples.len() >= 2 {
        let line = osd_color::Color::parse_hex("#FFFFFF");
        crate::chart::draw_history_chart(fb, samples, x, y, cfg.chart_width, cfg.bar_height, line, line.with_alpha(60));
    }

    true
}

fn draw_slider(fb: &mut Framebuffer<'_>, x: i32, y: i32, height: i32, value: f64, fill: Color) {
    draw_rect_filled(fb, x, y, SLIDER_WIDTH, height, SLIDER_TRACK);
    let clamped = value.clamp(0.0, 1.0) as f32;
    let fill_height = (height as f32 * clamped).round() as i32;
    let fill_y = y + height - fill_height;
    draw_rect_filled(fb, x, fill_y, SLIDER_WIDTH, fill_height, fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use osd_core::Config;
    use osd_framebuffer::OwnedFramebuffer;

    #[test]
    fn disabled_by_default() {
        let cfg = Config::default();
        assert!(!cfg.autofocus_debug.enabled);
    }

    #[test]
    fn slider_fill_scales_with_value() {
        let mut owned = OwnedFramebuffer::new(64, 64);
        let mut fb = owned.view();
        draw_slider(&mut fb, 0, 0, 40, 1.0, Color::new(255, 0, 255, 0));
        assert_eq!(fb.get_pixel(0, 0), Color::new(255, 0, 255, 0));
    }

    #[test]
    fn slider_clamps_out_of_range_values() {
        let mut owned = OwnedFramebuffer::new(64, 64);
        let mut fb = owned.view();
        draw_slider(&mut fb, 0, 0, 40, 5.0, Color::new(255, 0, 255, 0));
        assert_eq!(fb.get_pixel(0, 0), Color::new(255, 0, 255, 0));
    }
}
