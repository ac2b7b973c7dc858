//! Shared "label pill" drawing: a dark, semi-transparent rounded-looking
//! background bar behind a text label, used by detections, ROI, and SAM
//! tracking. Pills clip-avoid the top edge by flipping below the anchor box.

use osd_color::Color;
use osd_framebuffer::Framebuffer;
use osd_primitives::draw_rect_filled;
use osd_text::FontResource;

const PILL_BG: Color = Color::new(0xB0, 0x00, 0x00, 0x00);
const PAD_X: i32 = 4;
const PAD_Y: i32 = 2;

/// Draw `text` in a dark pill anchored above `(box_x1, box_top)`, spanning
/// at least `box_x1..box_x2`. Flips below `box_top` if the pill would clip
/// above the top of the frame.
pub fn draw_label_pill(
    fb: &mut Framebuffer<'_>,
    font: &FontResource,
    text: &str,
    box_x1: i32,
    box_top: i32,
    box_bottom: i32,
    text_color: Color,
    font_size: f32,
) {
    let text_w = osd_text::measure_width(font, text, font_size).ceil() as i32;
    let pill_h = font_size.ceil() as i32 + PAD_Y * 2;
    let pill_w = text_w + PAD_X * 2;

    let above_y = box_top - pill_h;
    let y = if above_y < 0 { box_bottom } else { above_y };

    draw_rect_filled(fb, box_x1, y, pill_w, pill_h, PILL_BG);
    osd_text::render(
        fb,
        font,
        text,
        box_x1 + PAD_X,
        y + PAD_Y,
        text_color,
        font_size,
    );
}

/// Draw a label pill right-aligned so its right edge sits at `right_x`,
/// used for the SAM tracking widget's `Lost: <n>` companion pill.
pub fn draw_label_pill_right_aligned(
    fb: &mut Framebuffer<'_>,
    font: &FontResource,
    text: &str,
    right_x: i32,
    box_top: i32,
    box_bottom: i32,
    text_color: Color,
    font_size: f32,
) {
    let text_w = osd_text::measure_width(font, text, font_size).ceil() as i32;
    let pill_w = text_w + PAD_X * 2;
    draw_label_pill(
        fb,
        font,
        text,
        right_x - pill_w,
        box_top,
        box_bottom,
        text_color,
        font_size,
    );
}
