//! The blue→green→red piecewise-linear color ramp shared by the sharpness
//! heatmap (widget 5) and the autofocus-debug heatmap (widget 9).

use osd_color::Color;

/// Map `t ∈ [0,1]` through blue→green→red at the given `alpha` (0..255).
/// Values outside `[0,1]` are clamped.
pub fn heat_color(t: f32, alpha: u8) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r, g, b) = if t < 0.5 {
        let u = t / 0.5;
        (0.0, u, 1.0 - u)
    } else {
        let u = (t - 0.5) / 0.5;
        (u, 1.0 - u, 0.0)
    };
    Color::new(
        alpha,
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Normalize `values` by their own min/max, returning `0.5` for every cell
/// when the grid is flat (`max - min` below epsilon).
pub fn normalize_grid(values: &[f32]) -> Vec<f32> {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = max - min;
    if span.abs() < f32::EPSILON {
        return vec![0.5; values.len()];
    }
    values.iter().map(|&v| (v - min) / span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_are_pure_blue_and_red() {
        let blue = heat_color(0.0, 255);
        assert_eq!((blue.red(), blue.green(), blue.blue()), (0, 0, 255));
        let red = heat_color(1.0, 255);
        assert_eq!((red.red(), red.green(), red.blue()), (255, 0, 0));
    }

    #[test]
    fn scenario_five_normalizes_high_cell_toward_red() {
        let mut values = vec![0.30f32; 64];
        values[63] = 0.80;
        let normalized = normalize_grid(&values);
        assert_eq!(normalized[63], 1.0);
        assert_eq!(normalized[0], 0.0);
        let c = heat_color(normalized[63], 200);
        assert!(c.red() > c.blue());
    }
}
