use osd_widgets::coco::class_name;
use osd_widgets::geometry::ndc_rect_to_pixels;
use osd_widgets::ramp::{heat_color, normalize_grid};

/// Scenario 3: two detections, one below `min_confidence`. Only the
/// surviving box's NDC rectangle maps to the documented pixel corners, and
/// its label reads `"person 90%"`.
#[test]
fn detection_filtering_keeps_only_the_confident_box() {
    let min_confidence = 0.25;
    let detections = [
        (-0.5f64, -0.5f64, 0.5f64, 0.5f64, 0.90f32, 0i32),
        (0.0, 0.0, 0.1, 0.1, 0.10, 5),
    ];

    let kept: Vec<_> = detections
        .iter()
        .filter(|(.., conf, _)| *conf >= min_confidence)
        .collect();
    assert_eq!(kept.len(), 1);

    let (x1, y1, x2, y2, conf, class_id) = kept[0];
    let rect = ndc_rect_to_pixels(*x1, *y1, *x2, *y2, 1920, 1080).unwrap();
    assert_eq!(rect.x1, 480);
    assert_eq!(rect.y1, 270);
    assert_eq!(rect.x2, 1440);
    assert_eq!(rect.y2, 810);

    let pct = (conf * 100.0).round() as i32;
    let label = format!("{} {}%", class_name(*class_id), pct);
    assert_eq!(label, "person 90%");
}

/// Scenario 4: only the elevation speed indicator clears the gate and its
/// rendered value matches the documented `"7.0°/s"`.
#[test]
fn speed_indicator_gate_admits_only_elevation() {
    let threshold = 0.05;
    let az_speed = 0.04;
    let el_speed = 0.20;
    let max_speed_azimuth = 35.0;
    let max_speed_elevation = 35.0;

    assert!(az_speed.abs() <= threshold);
    assert!(el_speed.abs() > threshold);

    let label = format!("{:.1}°/s", el_speed * max_speed_elevation);
    assert_eq!(label, "7.0°/s");
    let _ = max_speed_azimuth;
}

/// Scenario 5: a grid with one outlier cell normalizes so the outlier maps
/// to the red end of the ramp and the rest to the blue end.
#[test]
fn sharpness_normalization_separates_the_outlier_cell() {
    let mut grid = [0.30f32; 64];
    grid[63] = 0.80;

    let normalized = normalize_grid(&grid);
    assert_eq!(normalized[63], 1.0);
    for &v in &normalized[..63] {
        assert_eq!(v, 0.0);
    }

    let outlier_color = heat_color(normalized[63], 255);
    let baseline_color = heat_color(normalized[0], 255);
    assert!(outlier_color.red() > outlier_color.blue());
    assert!(baseline_color.blue() > baseline_color.red());

    let global_score = 0.30f32 * 63.0 / 64.0 + 0.80 / 64.0;
    let label = format!("{global_score:.3}");
    assert_eq!(label, "0.308");
}
