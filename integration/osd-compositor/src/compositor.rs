//! Safe compositor core. Owns the render context, the exported framebuffer,
//! and the raw telemetry scratch buffer; the FFI boundary in [`crate::ffi`]
//! is a thin, `unsafe`-isolated wrapper around this type.

use osd_core::resources::{ResourceError, ResourceLoader};
use osd_core::{Config, RenderContext};
use osd_framebuffer::OwnedFramebuffer;

/// Fixed framebuffer dimensions, resolved at build time (§4.C8's
/// compile-time `W,H`). A reconfigurable build would make these Cargo
/// features; no caller has asked for more than one resolution yet.
pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

#[derive(Debug)]
pub enum InitError {
    ConfigMissing(std::io::Error),
    ConfigMalformed(osd_core::config::ConfigError),
    Resource(ResourceError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::ConfigMissing(e) => write!(f, "configuration file missing: {e}"),
            InitError::ConfigMalformed(e) => write!(f, "configuration file malformed: {e}"),
            InitError::Resource(e) => write!(f, "resource load failed: {e}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::ConfigMissing(e) => Some(e),
            InitError::ConfigMalformed(e) => Some(e),
            InitError::Resource(e) => Some(e),
        }
    }
}

impl From<ResourceError> for InitError {
    fn from(e: ResourceError) -> Self {
        InitError::Resource(e)
    }
}

/// The single owned compositor instance (§9: "no second instance is
/// required or supported").
pub struct Compositor {
    ctx: RenderContext,
    framebuffer: OwnedFramebuffer,
    telemetry: Vec<u8>,
    proto_valid: bool,
}

impl Compositor {
    /// Load `config_path` through `loader`, parse it, load every configured
    /// resource, and build the navball LUT. Any failure here is fatal per
    /// the (a)/(b) error taxonomy entries — the caller must not retry with
    /// the same instance.
    pub fn init(loader: &dyn ResourceLoader, config_path: &str) -> Result<Self, InitError> {
        let bytes = loader.load(config_path).map_err(InitError::ConfigMissing)?;
        let text = String::from_utf8_lossy(&bytes);
        let config = Config::from_json(&text).map_err(InitError::ConfigMalformed)?;
        let ctx = RenderContext::init(WIDTH, HEIGHT, config, loader)?;
        Ok(Compositor {
            ctx,
            framebuffer: OwnedFramebuffer::new(WIDTH, HEIGHT),
            telemetry: Vec::new(),
            proto_valid: false,
        })
    }

    /// Copy `bytes` into the internal telemetry scratch buffer and mark a
    /// render pending. Oversized or empty buffers are rejected locally
    /// (§6: "a telemetry buffer of size==0 is rejected").
    pub fn update_state(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() || bytes.len() > osd_telemetry::MAX_TELEMETRY_SIZE {
            log::warn!("update_state: rejecting telemetry buffer of {} bytes", bytes.len());
            return false;
        }
        self.telemetry.clear();
        self.telemetry.extend_from_slice(bytes);
        self.proto_valid = true;
        self.ctx.needs_render = true;
        self.ctx.frame_count = self.ctx.frame_count.wrapping_add(1);
        true
    }

    /// Run one frame: decode telemetry (if present), dispatch every widget
    /// in fixed order, and report whether any widget drew.
    pub fn render(&mut self) -> bool {
        if !self.ctx.needs_render {
            return false;
        }

        let mut fb = self.framebuffer.view();
        fb.clear(osd_color::TRANSPARENT);

        if self.proto_valid {
            self.ctx.state = osd_telemetry::decode_frame(&self.telemetry, &mut self.ctx.unmatched_payload_count);
        }

        let changed = osd_widgets::render_all(&mut fb, &mut self.ctx);
        self.ctx.needs_render = false;
        changed
    }

    pub fn framebuffer_bytes(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }
}

/// Reads resource bytes from the host filesystem, rooted at a base
/// directory. The library never hardcodes a path; the host (FFI caller or
/// the CLI) chooses where configuration and assets live.
pub struct FsResourceLoader {
    root: std::path::PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        FsResourceLoader { root: root.into() }
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, path: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}
