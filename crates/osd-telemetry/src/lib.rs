//! Binary protobuf telemetry decoding and opaque-payload dispatch.
//!
//! The host deposits a length-delimited `GuiState` message (≤16 KiB) once
//! per frame. [`decode_frame`] resets every per-frame validity flag, decodes
//! the scalar submessages, then walks `opaque_payloads` dispatching each by
//! UUID to its sub-schema. Decode errors are local: the frame still renders
//! with whatever state remained valid from this pass.

mod pb;
pub mod state;

use prost::Message;
use state::DecodedState;

pub use state::*;

/// Telemetry buffers larger than this are rejected outright.
pub const MAX_TELEMETRY_SIZE: usize = 16 * 1024;
/// Typical opaque payload size cap.
const MAX_PAYLOAD_SIZE: usize = 4 * 1024;
/// Expanded cap for the RLE mask payload, which can be considerably larger.
const MAX_MASK_PAYLOAD_SIZE: usize = 64 * 1024;
/// Unmatched-UUID warnings are rate-limited to one per this many frames.
const UNMATCHED_LOG_INTERVAL: u64 = 300;

#[cfg(all(feature = "channel-day", feature = "channel-thermal"))]
compile_error!("osd-telemetry: channel-day and channel-thermal are mutually exclusive");

const UUID_CLIENT_METADATA: &str = "01941b00-0000-7000-8000-000000000001";
const UUID_CV_META: &str = "019c3e33-d52d-7552-b36b-6fdcaa5d59b8";
const UUID_DETECTIONS_DAY: &str = "019c40f6-825c-7f4c-8284-ddad4375ed9b";
const UUID_DETECTIONS_THERMAL: &str = "019c40f6-825d-7e0e-9893-87c7b167a751";
const UUID_SAM_TRACKING_DAY: &str = "019c4a10-2a1e-7b3a-8a52-2a6a5a9b9a10";
const UUID_SAM_TRACKING_THERMAL: &str = "019c4a10-2a1f-7c4b-9b63-3b7b6bac0b21";

/// Decode one frame's telemetry bytes into a fresh [`DecodedState`].
///
/// Per invariant I4, every optional field starts invalid; only fields
/// backed by a present submessage or a matched opaque payload become
/// valid. `unmatched_count` is the running per-process unmatched-UUID
/// counter, used to rate-limit the "no registry match" warning.
pub fn decode_frame(bytes: &[u8], unmatched_count: &mut u64) -> DecodedState {
    let mut out = DecodedState::default();

    if bytes.len() > MAX_TELEMETRY_SIZE {
        log::warn!(
            "telemetry buffer of {} bytes exceeds the {} byte cap, dropping frame",
            bytes.len(),
            MAX_TELEMETRY_SIZE
        );
        return out;
    }

    let msg = match pb::GuiState::decode(bytes) {
        Ok(msg) => msg,
        Err(e) => {
            log::warn!("failed to decode outer telemetry message: {e}");
            return out;
        }
    };

    apply_scalar_fields(&msg, &mut out);

    for payload in &msg.opaque_payloads {
        apply_opaque_payload(payload, &mut out, unmatched_count);
    }

    out
}

fn apply_scalar_fields(msg: &pb::GuiState, out: &mut DecodedState) {
    if let Some(c) = &msg.compass {
        out.orientation = Some(Orientation {
            azimuth_deg: c.azimuth,
            elevation_deg: c.elevation,
            bank_deg: c.bank,
        });
    }
    if let Some(r) = &msg.rotary {
        out.rotary_speeds = Some(RotarySpeeds {
            azimuth_norm: r.azimuth_speed,
            elevation_norm: r.elevation_speed,
            is_moving: r.is_moving,
        });
    }
    if let Some(t) = &msg.time {
        out.utc_timestamp = Some(t.timestamp);
    }
    if let Some(a) = &msg.actual_space_time {
        out.gps = Some(Gps {
            latitude_deg: a.latitude,
            longitude_deg: a.longitude,
            altitude_m: a.altitude,
            timestamp: a.timestamp,
        });
    }
    if let Some(cam) = &msg.camera_day {
        out.camera_day = Some(CameraDay {
            sensor_gain: cam.sensor_gain,
            iris_pos: cam.iris_pos,
            focus_pos: cam.focus_pos,
            zoom_pos: cam.zoom_pos,
            exposure: cam.exposure,
            auto_gain: cam.auto_gain,
            auto_iris: cam.auto_iris,
            has_sensor_gain: cam.has_sensor_gain,
            has_exposure: cam.has_exposure,
        });
    }
    if let Some(cv) = &msg.cv {
        out.rois = Some(extract_rois(cv));
    }
    if let Some(rec) = &msg.rec_osd {
        out.crosshair_offset = CrosshairOffset {
            #[cfg(not(feature = "channel-thermal"))]
            dx: rec.crosshair_offset_x_day,
            #[cfg(not(feature = "channel-thermal"))]
            dy: rec.crosshair_offset_y_day,
            #[cfg(feature = "channel-thermal")]
            dx: rec.crosshair_offset_x_heat,
            #[cfg(feature = "channel-thermal")]
            dy: rec.crosshair_offset_y_heat,
        };
    }

    out.monotonic_us = msg.monotonic_us;
    out.frame_monotonic_day_us = msg.frame_monotonic_day_us;
    out.frame_monotonic_heat_us = msg.frame_monotonic_heat_us;
}

fn extract_rois(cv: &pb::CvData) -> RoiData {
    #[cfg(not(feature = "channel-thermal"))]
    let (focus, track, zoom, fx) = (
        &cv.roi_focus_day,
        &cv.roi_track_day,
        &cv.roi_zoom_day,
        &cv.roi_fx_day,
    );
    #[cfg(feature = "channel-thermal")]
    let (focus, track, zoom, fx) = (
        &cv.roi_focus_heat,
        &cv.roi_track_heat,
        &cv.roi_zoom_heat,
        &cv.roi_fx_heat,
    );

    RoiData {
        focus: convert_roi(focus),
        track: convert_roi(track),
        zoom: convert_roi(zoom),
        fx: convert_roi(fx),
    }
}

fn convert_roi(rect: &Option<pb::RoiRect>) -> Option<Roi> {
    let rect = rect.as_ref()?;
    if !rect.present {
        return None;
    }
    Some(Roi {
        x1: rect.x1,
        y1: rect.y1,
        x2: rect.x2,
        y2: rect.y2,
    })
}

fn apply_opaque_payload(payload: &pb::OpaquePayload, out: &mut DecodedState, unmatched_count: &mut u64) {
    match payload.type_uuid.as_str() {
        UUID_CLIENT_METADATA => decode_client_metadata(&payload.payload, out),
        UUID_CV_META => decode_cv_meta(&payload.payload, out),
        #[cfg(not(feature = "channel-thermal"))]
        UUID_DETECTIONS_DAY => decode_detections(&payload.payload, out),
        #[cfg(feature = "channel-thermal")]
        UUID_DETECTIONS_THERMAL => decode_detections(&payload.payload, out),
        #[cfg(not(feature = "channel-thermal"))]
        UUID_SAM_TRACKING_DAY => decode_sam_tracking(&payload.payload, out),
        #[cfg(feature = "channel-thermal")]
        UUID_SAM_TRACKING_THERMAL => decode_sam_tracking(&payload.payload, out),
        _ => {
            *unmatched_count += 1;
            if *unmatched_count % UNMATCHED_LOG_INTERVAL == 0 {
                log::warn!(
                    "unmatched opaque payload uuid '{}' ({} unmatched so far)",
                    payload.type_uuid,
                    unmatched_count
                );
            }
        }
    }
}

fn decode_client_metadata(bytes: &[u8], out: &mut DecodedState) {
    if bytes.len() > MAX_PAYLOAD_SIZE {
        log::warn!("ClientMetadata payload of {} bytes exceeds cap", bytes.len());
        return;
    }
    let Ok(msg) = pb::ClientMetadata::decode(bytes) else {
        log::warn!("failed to decode ClientMetadata payload");
        return;
    };

    let dims_ok = (1..=40960).contains(&msg.canvas_width_px) && (1..=40960).contains(&msg.canvas_height_px);
    let dpr_ok = msg.device_pixel_ratio > 0.0 && msg.device_pixel_ratio <= 10.0 && !msg.device_pixel_ratio.is_nan();
    if !dims_ok || !dpr_ok {
        log::warn!("ClientMetadata out of documented range, dropping");
        return;
    }

    out.client_metadata = Some(ClientMetadata {
        canvas_width_px: msg.canvas_width_px,
        canvas_height_px: msg.canvas_height_px,
        device_pixel_ratio: msg.device_pixel_ratio,
        osd_buffer_width: msg.osd_buffer_width,
        osd_buffer_height: msg.osd_buffer_height,
        video_proxy_ndc_x: msg.video_proxy_ndc_x,
        video_proxy_ndc_y: msg.video_proxy_ndc_y,
        video_proxy_ndc_width: msg.video_proxy_ndc_width,
        video_proxy_ndc_height: msg.video_proxy_ndc_height,
        scale_factor: msg.scale_factor,
        is_sharp_mode: msg.is_sharp_mode,
        theme_hue: msg.theme_hue,
        theme_chroma: msg.theme_chroma,
        theme_lightness: msg.theme_lightness,
    });
}

fn decode_cv_meta(bytes: &[u8], out: &mut DecodedState) {
    if bytes.len() > MAX_PAYLOAD_SIZE {
        log::warn!("CvMeta payload of {} bytes exceeds cap", bytes.len());
        return;
    }
    let Ok(msg) = pb::CvMeta::decode(bytes) else {
        log::warn!("failed to decode CvMeta payload");
        return;
    };
    let mut grid = [0.0f32; 64];
    let count = msg.grid_8x8.len().min(64);
    grid[..count].copy_from_slice(&msg.grid_8x8[..count]);
    out.sharpness = Some(Sharpness {
        global_score: msg.global_score,
        grid_8x8: grid,
        grid_count: count,
    });
}

fn decode_detections(bytes: &[u8], out: &mut DecodedState) {
    if bytes.len() > MAX_PAYLOAD_SIZE {
        log::warn!("ObjectDetections payload of {} bytes exceeds cap", bytes.len());
        return;
    }
    let Ok(msg) = pb::ObjectDetections::decode(bytes) else {
        log::warn!("failed to decode ObjectDetections payload");
        return;
    };
    let mut items = Vec::with_capacity(msg.items.len().min(64));
    for d in msg.items.iter().take(64) {
        items.push(Detection {
            x1: d.x1,
            y1: d.y1,
            x2: d.x2,
            y2: d.y2,
            confidence: d.confidence,
            class_id: d.class_id.clamp(0, 79),
        });
    }
    out.detections = Some(Detections {
        items,
        status: DetectionStatus::from_i32(msg.status),
    });
}

fn decode_sam_tracking(bytes: &[u8], out: &mut DecodedState) {
    if bytes.len() > MAX_MASK_PAYLOAD_SIZE {
        log::warn!("SamTracking payload of {} bytes exceeds cap", bytes.len());
        return;
    }
    let Ok(msg) = pb::SamTracking::decode(bytes) else {
        log::warn!("failed to decode SamTracking payload");
        return;
    };

    let mask = if !msg.mask_rle.is_empty() && msg.mask_width > 0 && msg.mask_height > 0 {
        decode_rle_mask(&msg.mask_rle, msg.mask_width, msg.mask_height)
    } else {
        None
    };

    out.sam_tracking = Some(SamTracking {
        status: DetectionStatus::from_i32(msg.status),
        tracking_state: TrackingState::from_i32(msg.state),
        bbox: BBox {
            x1: msg.x1,
            y1: msg.y1,
            x2: msg.x2,
            y2: msg.y2,
        },
        centroid: (msg.centroid_x, msg.centroid_y),
        predicted_centroid: (msg.predicted_centroid_x, msg.predicted_centroid_y),
        confidence: msg.confidence,
        lost_frames: msg.lost_frames,
        mask,
    });
}

/// Decode `(run_length: u16, value: u8)` little-endian pairs into a
/// `width * height` coverage grid. Returns `None` if the stream does not
/// exactly cover the declared dimensions.
pub fn decode_rle_mask(bytes: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let total = (width as usize).checked_mul(height as usize)?;
    let mut out = Vec::with_capacity(total);
    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let run = u16::from_le_bytes([chunk[0], chunk[1]]) as usize;
        let value = chunk[2];
        if out.len() + run > total {
            return None;
        }
        out.resize(out.len() + run, value);
    }
    if !chunks.remainder().is_empty() || out.len() != total {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_decodes_to_all_invalid() {
        let mut unmatched = 0;
        let state = decode_frame(&[], &mut unmatched);
        assert!(state.orientation.is_none());
        assert!(state.gps.is_none());
        assert!(state.sharpness.is_none());
    }

    #[test]
    fn oversized_buffer_is_rejected() {
        let mut unmatched = 0;
        let oversized = vec![0u8; MAX_TELEMETRY_SIZE + 1];
        let state = decode_frame(&oversized, &mut unmatched);
        assert!(state.orientation.is_none());
    }

    #[test]
    fn rle_mask_round_trips_a_solid_block() {
        let bytes = [4u8, 0, 1, 4u8, 0, 0]; // 4x(value 1), 4x(value 0): 2x4
        let decoded = decode_rle_mask(&bytes, 2, 4).unwrap();
        assert_eq!(decoded, vec![1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn rle_mask_rejects_mismatched_total() {
        let bytes = [4u8, 0, 1];
        assert!(decode_rle_mask(&bytes, 2, 4).is_none());
    }
}
