//! Frame orchestrator: couples telemetry decoding and the widget set to a
//! host-owned framebuffer behind a small `extern "C"` ABI.

pub mod compositor;
pub mod ffi;

pub use compositor::{Compositor, FsResourceLoader, InitError};
