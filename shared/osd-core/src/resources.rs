//! Resource loading: fonts and vector icons are handed to the core as
//! already-read bytes through a load-by-path interface owned by the host;
//! the core only ever sees `Vec<u8>` / `&[u8]` here.

use osd_text::{FontError, FontResource};
use osd_vector::{VectorError, VectorImage};

#[derive(Debug)]
pub enum ResourceError {
    Font(FontError),
    Vector(VectorError),
    Navball(crate::navball::NavballError),
    Missing(String),
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceError::Font(e) => write!(f, "font resource error: {e}"),
            ResourceError::Vector(e) => write!(f, "vector resource error: {e}"),
            ResourceError::Navball(e) => write!(f, "navball resource error: {e}"),
            ResourceError::Missing(what) => write!(f, "required resource missing: {what}"),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<FontError> for ResourceError {
    fn from(e: FontError) -> Self {
        ResourceError::Font(e)
    }
}

impl From<VectorError> for ResourceError {
    fn from(e: VectorError) -> Self {
        ResourceError::Vector(e)
    }
}

/// A host-side callback that reads a resource file by its registry path
/// and returns its raw bytes. The core never touches the filesystem
/// itself (§1 out-of-scope: font/vector/texture files on disk).
pub trait ResourceLoader {
    fn load(&self, path: &str) -> std::io::Result<Vec<u8>>;
}

/// Per-widget font resources named after the widget that owns them.
pub struct Fonts {
    pub timestamp: FontResource,
    pub speed_indicators: FontResource,
    pub variant_info: FontResource,
}

/// Built-in vector icons plus the optional celestial-indicator set.
pub struct VectorIcons {
    pub cross: VectorImage,
    pub circle: VectorImage,
    pub navball_center_indicator: Option<VectorImage>,
    pub celestial_sun_front: Option<VectorImage>,
    pub celestial_sun_back: Option<VectorImage>,
    pub celestial_moon_front: Option<VectorImage>,
    pub celestial_moon_back: Option<VectorImage>,
}
