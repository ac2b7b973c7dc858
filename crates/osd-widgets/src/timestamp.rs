//! Widget 2: UTC timestamp, `HH:MM:SS UTC`. Compiled out entirely under the
//! `mode-live` build (LIVE streams have no meaningful recording clock).

use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;

#[cfg(feature = "mode-live")]
pub fn render(_fb: &mut Framebuffer<'_>, _ctx: &mut RenderContext) -> bool {
    false
}

#[cfg(not(feature = "mode-live"))]
pub fn render(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let cfg = &ctx.config.timestamp;
    if !cfg.enabled {
        return false;
    }
    let Some(epoch_seconds) = ctx.state.utc_timestamp else {
        return false;
    };

    let label = format_utc(epoch_seconds);
    osd_text::render_with_outline(
        fb,
        &ctx.fonts.timestamp,
        &label,
        cfg.position_x,
        cfg.position_y,
        cfg.color.into(),
        osd_color::BLACK,
        cfg.font_size,
        2,
    );
    true
}

fn format_utc(epoch_seconds: i64) -> String {
    use chrono::{DateTime, Utc};
    match DateTime::<Utc>::from_timestamp(epoch_seconds, 0) {
        Some(dt) => dt.format("%H:%M:%S UTC").to_string(),
        None => "--:--:-- UTC".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_utc;

    #[test]
    fn epoch_formats_to_midnight() {
        assert_eq!(format_utc(0), "00:00:00 UTC");
    }
}
