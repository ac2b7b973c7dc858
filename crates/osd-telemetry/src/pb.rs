//! Generated protobuf types for the telemetry wire format.
include!(concat!(env!("OUT_DIR"), "/osd.telemetry.rs"));
