//! Compositing layer: one module per overlay widget, each exposing a
//! `render(fb, ctx) -> bool` that draws its layer and reports whether it
//! touched the frame. [`render_all`] dispatches every widget in the fixed
//! order the layout invariant requires.

pub mod autofocus_debug;
mod chart;
pub mod coco;
pub mod crosshair;
pub mod detections;
pub mod geometry;
pub mod heatmap;
pub mod navball;
mod pill;
pub mod ramp;
pub mod roi;
pub mod sam_tracking;
pub mod timestamp;
pub mod variant_info;

#[cfg(all(feature = "mode-live", feature = "mode-recording"))]
compile_error!("osd-widgets: mode-live and mode-recording are mutually exclusive");

use osd_core::RenderContext;
use osd_framebuffer::Framebuffer;

/// Render every widget in order, returning whether any widget drew
/// anything this frame. Order is fixed: crosshair, timestamp, navball,
/// variant info, sharpness heatmap, detections, regions of interest, SAM
/// tracking, autofocus debug.
pub fn render_all(fb: &mut Framebuffer<'_>, ctx: &mut RenderContext) -> bool {
    let mut changed = false;
    changed |= crosshair::render(fb, ctx);
    changed |= timestamp::render(fb, ctx);
    changed |= navball::render(fb, ctx);
    changed |= variant_info::render(fb, ctx);
    changed |= heatmap::render(fb, ctx);
    changed |= detections::render(fb, ctx);
    changed |= roi::render(fb, ctx);
    changed |= sam_tracking::render(fb, ctx);
    changed |= autofocus_debug::render(fb, ctx);
    changed
}
