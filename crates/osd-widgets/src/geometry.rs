//! NDC→pixel mapping shared by every widget that reads a telemetry rectangle
//! (invariant I1): `px = (ndc+1)/2 * dim`, `py = (ndc+1)/2 * dim`.

/// A pixel-space rectangle with `y1 < y2` already enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelRect {
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

/// Map an NDC rectangle `(x1,y1)-(x2,y2)`, each axis in `[-1,1]`, to a pixel
/// rectangle in a `width × height` frame. Returns `None` when the mapped
/// rectangle is degenerate (`y1 >= y2` after conversion, per I1) — the
/// caller must not draw it.
pub fn ndc_rect_to_pixels(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    width: u32,
    height: u32,
) -> Option<PixelRect> {
    let to_px = |ndc: f64, dim: u32| -> i32 { ((ndc + 1.0) / 2.0 * dim as f64).round() as i32 };
    let (px1, py1) = (to_px(x1, width), to_px(y1, height));
    let (px2, py2) = (to_px(x2, width), to_px(y2, height));
    if py1 >= py2 {
        return None;
    }
    Some(PixelRect {
        x1: px1.min(px2),
        y1: py1,
        x2: px1.max(px2),
        y2: py2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frame_rect_maps_to_corners() {
        let r = ndc_rect_to_pixels(-1.0, -1.0, 1.0, 1.0, 1920, 1080).unwrap();
        assert_eq!(r, PixelRect { x1: 0, y1: 0, x2: 1920, y2: 1080 });
    }

    #[test]
    fn detection_scenario_maps_to_documented_pixels() {
        // Scenario 3: A={(-0.5,-0.5)-(0.5,0.5)} in 1920x1080.
        let r = ndc_rect_to_pixels(-0.5, -0.5, 0.5, 0.5, 1920, 1080).unwrap();
        assert_eq!(r, PixelRect { x1: 480, y1: 270, x2: 1440, y2: 810 });
    }

    #[test]
    fn degenerate_rect_is_rejected() {
        assert!(ndc_rect_to_pixels(0.0, 0.5, 0.5, 0.5, 100, 100).is_none());
        assert!(ndc_rect_to_pixels(0.0, 0.6, 0.5, 0.4, 100, 100).is_none());
    }
}
