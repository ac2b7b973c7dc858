//! Per-frame decoded state cache.
//!
//! Every field starts `None`/default-invalid at the top of a decode
//! (invariant I4); only fields backed by a present submessage or a
//! matched opaque payload become valid. None of these types default an
//! optional field to a "neutral" stand-in value.

/// Compass orientation, degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub bank_deg: f64,
}

/// Rotary speeds, normalized `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotarySpeeds {
    pub azimuth_norm: f64,
    pub elevation_norm: f64,
    pub is_moving: bool,
}

/// Crosshair pixel offset for the compiled-in channel. Always present
/// (defaults to `(0, 0)`) since it has no validity flag in the source
/// schema beyond the submessage itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrosshairOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gps {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDay {
    pub sensor_gain: f64,
    pub iris_pos: f64,
    pub focus_pos: f64,
    pub zoom_pos: f64,
    pub exposure: f64,
    pub auto_gain: bool,
    pub auto_iris: bool,
    pub has_sensor_gain: bool,
    pub has_exposure: bool,
}

/// A single region of interest in NDC `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Roi {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoiData {
    pub focus: Option<Roi>,
    pub track: Option<Roi>,
    pub zoom: Option<Roi>,
    pub fx: Option<Roi>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientMetadata {
    pub canvas_width_px: u32,
    pub canvas_height_px: u32,
    pub device_pixel_ratio: f32,
    pub osd_buffer_width: u32,
    pub osd_buffer_height: u32,
    pub video_proxy_ndc_x: f32,
    pub video_proxy_ndc_y: f32,
    pub video_proxy_ndc_width: f32,
    pub video_proxy_ndc_height: f32,
    pub scale_factor: f32,
    pub is_sharp_mode: bool,
    pub theme_hue: f32,
    pub theme_chroma: f32,
    pub theme_lightness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sharpness {
    pub global_score: f32,
    pub grid_8x8: [f32; 64],
    pub grid_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionStatus {
    Ok,
    NoData,
    Error,
}

impl DetectionStatus {
    pub(crate) fn from_i32(v: i32) -> Self {
        match v {
            0 => DetectionStatus::Ok,
            2 => DetectionStatus::Error,
            _ => DetectionStatus::NoData,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Detections {
    pub items: Vec<Detection>,
    pub status: DetectionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    Starting,
    Tracking,
    Occluded,
    Lost,
}

impl TrackingState {
    pub(crate) fn from_i32(v: i32) -> Self {
        match v {
            1 => TrackingState::Starting,
            2 => TrackingState::Tracking,
            3 => TrackingState::Occluded,
            4 => TrackingState::Lost,
            _ => TrackingState::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SamTracking {
    pub status: DetectionStatus,
    pub tracking_state: TrackingState,
    pub bbox: BBox,
    pub centroid: (f32, f32),
    pub predicted_centroid: (f32, f32),
    pub confidence: f32,
    pub lost_frames: u32,
    /// Decoded binary coverage grid, row-major, one byte per cell.
    pub mask: Option<Vec<u8>>,
}

/// Everything a widget can read for the current frame. Reset to all-invalid
/// at the top of every decode.
#[derive(Clone, Debug, Default)]
pub struct DecodedState {
    pub orientation: Option<Orientation>,
    pub rotary_speeds: Option<RotarySpeeds>,
    pub crosshair_offset: CrosshairOffset,
    pub utc_timestamp: Option<i64>,
    pub gps: Option<Gps>,
    pub monotonic_us: u64,
    pub frame_monotonic_day_us: u64,
    pub frame_monotonic_heat_us: u64,
    pub rois: Option<RoiData>,
    pub camera_day: Option<CameraDay>,
    pub client_metadata: Option<ClientMetadata>,
    pub sharpness: Option<Sharpness>,
    pub detections: Option<Detections>,
    pub sam_tracking: Option<SamTracking>,
}
