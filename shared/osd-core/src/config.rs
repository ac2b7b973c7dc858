//! Declarative JSON configuration.
//!
//! Every leaf has a `#[serde(default)]` so a missing key uses its
//! documented default; unknown fields are ignored (no
//! `deny_unknown_fields`) per the documented configuration contract.

use osd_color::Color;
use serde::Deserialize;

/// A color parsed from `#RRGGBB` or `#AARRGGBB`. Wraps [`Color`] so config
/// structs can `#[derive(Deserialize)]` without teaching `osd-color` about
/// `serde`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexColor(pub Color);

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(HexColor(Color::parse_hex(&s)))
    }
}

impl From<HexColor> for Color {
    fn from(h: HexColor) -> Self {
        h.0
    }
}

fn white() -> HexColor {
    HexColor(osd_color::WHITE)
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CenterDot {
    pub enabled: bool,
    pub radius: i32,
    pub color: HexColor,
    pub thickness: i32,
}

impl Default for CenterDot {
    fn default() -> Self {
        CenterDot {
            enabled: true,
            radius: 2,
            color: white(),
            thickness: 1,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CrossArms {
    pub enabled: bool,
    pub length: i32,
    pub gap: i32,
    pub thickness: i32,
    pub color: HexColor,
}

impl Default for CrossArms {
    fn default() -> Self {
        CrossArms {
            enabled: true,
            length: 20,
            gap: 8,
            thickness: 2,
            color: white(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CrosshairCircle {
    pub enabled: bool,
    pub radius: i32,
    pub thickness: i32,
    pub color: HexColor,
}

impl Default for CrosshairCircle {
    fn default() -> Self {
        CrosshairCircle {
            enabled: true,
            radius: 40,
            thickness: 2,
            color: white(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum CrosshairOrientation {
    #[serde(rename = "vertical")]
    Vertical,
    #[serde(rename = "diagonal")]
    Diagonal,
}

impl Default for CrosshairOrientation {
    fn default() -> Self {
        CrosshairOrientation::Vertical
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CrosshairConfig {
    pub enabled: bool,
    pub orientation: CrosshairOrientation,
    pub center_dot: CenterDot,
    pub cross: CrossArms,
    pub circle: CrosshairCircle,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        CrosshairConfig {
            enabled: true,
            orientation: CrosshairOrientation::default(),
            center_dot: CenterDot::default(),
            cross: CrossArms::default(),
            circle: CrosshairCircle::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    pub enabled: bool,
    pub position_x: i32,
    pub position_y: i32,
    pub color: HexColor,
    pub font_size: f32,
    pub font: String,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        TimestampConfig {
            enabled: true,
            position_x: 10,
            position_y: 10,
            color: white(),
            font_size: 14.0,
            font: "liberation_sans_bold".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpeedIndicatorsConfig {
    pub enabled: bool,
    pub color: HexColor,
    pub font_size: f32,
    pub threshold: f64,
    pub max_speed_azimuth: f64,
    pub max_speed_elevation: f64,
    pub font: String,
}

impl Default for SpeedIndicatorsConfig {
    fn default() -> Self {
        SpeedIndicatorsConfig {
            enabled: true,
            color: white(),
            font_size: 12.0,
            threshold: 0.05,
            max_speed_azimuth: 35.0,
            max_speed_elevation: 35.0,
            font: "share_tech_mono".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VariantInfoConfig {
    pub enabled: bool,
    pub position_x: i32,
    pub position_y: i32,
    pub color: HexColor,
    pub font_size: f32,
    pub font: String,
}

impl Default for VariantInfoConfig {
    fn default() -> Self {
        VariantInfoConfig {
            enabled: true,
            position_x: 10,
            position_y: 40,
            color: white(),
            font_size: 12.0,
            font: "b612_mono_bold".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CenterIndicatorConfig {
    pub enabled: bool,
    pub scale: f32,
    pub indicator: String,
}

impl Default for CenterIndicatorConfig {
    fn default() -> Self {
        CenterIndicatorConfig {
            enabled: true,
            scale: 1.0,
            indicator: "crosshair".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavballConfig {
    pub enabled: bool,
    pub position_x: i32,
    pub position_y: i32,
    pub size: i32,
    pub skin: String,
    pub show_level_marker: bool,
    pub center_indicator: CenterIndicatorConfig,
}

impl Default for NavballConfig {
    fn default() -> Self {
        NavballConfig {
            enabled: true,
            position_x: 960,
            position_y: 540,
            size: 200,
            skin: "stock".into(),
            show_level_marker: true,
            center_indicator: CenterIndicatorConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CelestialIndicatorsConfig {
    pub enabled: bool,
    pub show_sun: bool,
    pub show_moon: bool,
    pub scale: f32,
    pub visibility_threshold: f64,
    pub sun_front_svg: String,
    pub sun_back_svg: String,
    pub moon_front_svg: String,
    pub moon_back_svg: String,
}

impl Default for CelestialIndicatorsConfig {
    fn default() -> Self {
        CelestialIndicatorsConfig {
            enabled: false,
            show_sun: true,
            show_moon: true,
            scale: 1.0,
            visibility_threshold: -5.0,
            sun_front_svg: "sun_front.svg".into(),
            sun_back_svg: "sun_back.svg".into(),
            moon_front_svg: "moon_front.svg".into(),
            moon_back_svg: "moon_back.svg".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SharpnessHeatmapConfig {
    pub enabled: bool,
    pub position_x: i32,
    pub position_y: i32,
    pub cell_size: i32,
    pub show_label: bool,
    pub label_font_size: f32,
}

impl Default for SharpnessHeatmapConfig {
    fn default() -> Self {
        SharpnessHeatmapConfig {
            enabled: false,
            position_x: 20,
            position_y: 100,
            cell_size: 16,
            show_label: true,
            label_font_size: 12.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DetectionsConfig {
    pub enabled: bool,
    pub color: HexColor,
    pub box_thickness: i32,
    pub per_class_color: bool,
    pub label_font_size: f32,
    pub min_confidence: f32,
}

impl Default for DetectionsConfig {
    fn default() -> Self {
        DetectionsConfig {
            enabled: true,
            color: HexColor(osd_color::Color::parse_hex("#00FF00")),
            box_thickness: 2,
            per_class_color: true,
            label_font_size: 12.0,
            min_confidence: 0.25,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    pub enabled: bool,
    pub box_thickness: i32,
    pub label_font_size: f32,
    pub color_focus: HexColor,
    pub color_track: HexColor,
    pub color_zoom: HexColor,
    pub color_fx: HexColor,
}

impl Default for RoiConfig {
    fn default() -> Self {
        RoiConfig {
            enabled: true,
            box_thickness: 2,
            label_font_size: 12.0,
            color_focus: HexColor(osd_color::Color::parse_hex("#FFFF00")),
            color_track: HexColor(osd_color::Color::parse_hex("#00FFFF")),
            color_zoom: HexColor(osd_color::Color::parse_hex("#FF00FF")),
            color_fx: HexColor(osd_color::Color::parse_hex("#FFFFFF")),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AutofocusDebugConfig {
    pub enabled: bool,
    pub position_x: i32,
    pub position_y: i32,
    pub bar_height: i32,
    pub heatmap_cell_size: i32,
    pub chart_width: i32,
}

impl Default for AutofocusDebugConfig {
    fn default() -> Self {
        AutofocusDebugConfig {
            enabled: false,
            position_x: 20,
            position_y: 300,
            bar_height: 120,
            heatmap_cell_size: 12,
            chart_width: 300,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SamMaskConfig {
    pub enabled: bool,
    pub color: HexColor,
    pub box_thickness: i32,
    pub per_state_color: bool,
    pub label_font_size: f32,
    pub centroid_radius: i32,
    pub mask_enabled: bool,
    pub mask_alpha: f32,
}

impl Default for SamMaskConfig {
    fn default() -> Self {
        SamMaskConfig {
            enabled: true,
            color: HexColor(osd_color::Color::parse_hex("#00FF00")),
            box_thickness: 2,
            per_state_color: true,
            label_font_size: 12.0,
            centroid_radius: 4,
            mask_enabled: true,
            mask_alpha: 0.4,
        }
    }
}

/// The full declarative configuration document, one section per widget.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crosshair: CrosshairConfig,
    pub timestamp: TimestampConfig,
    pub speed_indicators: SpeedIndicatorsConfig,
    pub variant_info: VariantInfoConfig,
    pub navball: NavballConfig,
    pub celestial_indicators: CelestialIndicatorsConfig,
    pub sharpness_heatmap: SharpnessHeatmapConfig,
    pub detections: DetectionsConfig,
    pub roi: RoiConfig,
    pub autofocus_debug: AutofocusDebugConfig,
    pub sam_mask: SamMaskConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            crosshair: CrosshairConfig::default(),
            timestamp: TimestampConfig::default(),
            speed_indicators: SpeedIndicatorsConfig::default(),
            variant_info: VariantInfoConfig::default(),
            navball: NavballConfig::default(),
            celestial_indicators: CelestialIndicatorsConfig::default(),
            sharpness_heatmap: SharpnessHeatmapConfig::default(),
            detections: DetectionsConfig::default(),
            roi: RoiConfig::default(),
            autofocus_debug: AutofocusDebugConfig::default(),
            sam_mask: SamMaskConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Malformed(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Malformed(e) => write!(f, "malformed configuration document: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Malformed(e) => Some(e),
        }
    }
}

impl Config {
    /// Parse a configuration document. Missing fields use their documented
    /// defaults; unknown fields are ignored.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(data).map_err(ConfigError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_documented_defaults() {
        let cfg = Config::from_json("{}").unwrap();
        assert!(cfg.crosshair.enabled);
        assert_eq!(cfg.speed_indicators.threshold, 0.05);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let cfg = Config::from_json(r#"{"totally_unknown": 123, "crosshair": {"enabled": false}}"#).unwrap();
        assert!(!cfg.crosshair.enabled);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Config::from_json("{not json").is_err());
    }
}
