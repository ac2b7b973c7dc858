//! The render context: the single record shared by the orchestrator and
//! every widget (§4.C8).

use crate::config::Config;
use crate::history::SharpnessHistory;
use crate::navball::{NavballLut, NavballTexture};
use crate::registries;
use crate::resources::{Fonts, ResourceError, ResourceLoader, VectorIcons};
use osd_telemetry::DecodedState;
use osd_text::FontResource;
use osd_vector::VectorImage;

/// Everything a widget needs to render, minus the framebuffer (borrowed
/// separately per frame so library code stays unit-testable without the
/// FFI boundary).
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
    pub config: Config,
    pub fonts: Fonts,
    pub icons: VectorIcons,
    pub navball_texture: Option<NavballTexture>,
    pub navball_lut: Option<NavballLut>,
    pub state: DecodedState,
    pub sharpness_history: SharpnessHistory,
    /// Running count of opaque payloads that matched no UUID in the
    /// registry, used to rate-limit the "unmatched" warning.
    pub unmatched_payload_count: u64,
    pub needs_render: bool,
    pub frame_count: u32,
}

impl RenderContext {
    /// Load every configured resource and build the navball LUT. Failures
    /// here are fatal per §7(b) — the caller (init) propagates them.
    pub fn init(
        width: u32,
        height: u32,
        config: Config,
        loader: &dyn ResourceLoader,
    ) -> Result<Self, ResourceError> {
        let load_font = |name: &str| -> Result<FontResource, ResourceError> {
            let path = registries::resolve_font(name);
            let bytes = loader.load(path).map_err(|_| ResourceError::Missing(path.to_string()))?;
            Ok(FontResource::load(bytes)?)
        };

        let fonts = Fonts {
            timestamp: load_font(&config.timestamp.font)?,
            speed_indicators: load_font(&config.speed_indicators.font)?,
            variant_info: load_font(&config.variant_info.font)?,
        };

        let load_svg = |path: &str| -> Result<VectorImage, ResourceError> {
            let bytes = loader.load(path).map_err(|_| ResourceError::Missing(path.to_string()))?;
            Ok(VectorImage::load(&bytes)?)
        };

        let cross = load_svg("icons/crosshair.svg")?;
        let circle = load_svg("icons/circle.svg")?;

        let navball_center_indicator = if config.navball.center_indicator.enabled {
            Some(load_svg(registries::resolve_center_indicator(
                &config.navball.center_indicator.indicator,
            ))?)
        } else {
            None
        };

        let (celestial_sun_front, celestial_sun_back, celestial_moon_front, celestial_moon_back) =
            if config.celestial_indicators.enabled {
                (
                    Some(load_svg(&config.celestial_indicators.sun_front_svg)?),
                    Some(load_svg(&config.celestial_indicators.sun_back_svg)?),
                    Some(load_svg(&config.celestial_indicators.moon_front_svg)?),
                    Some(load_svg(&config.celestial_indicators.moon_back_svg)?),
                )
            } else {
                (None, None, None, None)
            };

        let icons = VectorIcons {
            cross,
            circle,
            navball_center_indicator,
            celestial_sun_front,
            celestial_sun_back,
            celestial_moon_front,
            celestial_moon_back,
        };

        let (navball_texture, navball_lut) = if config.navball.enabled {
            let skin_path = registries::resolve_navball_skin(&config.navball.skin);
            let bytes = loader.load(skin_path).map_err(|_| ResourceError::Missing(skin_path.to_string()))?;
            let texture = NavballTexture::load(&bytes).map_err(ResourceError::Navball)?;
            let lut = NavballLut::build(config.navball.size / 2);
            (Some(texture), Some(lut))
        } else {
            (None, None)
        };

        Ok(RenderContext {
            width,
            height,
            config,
            fonts,
            icons,
            navball_texture,
            navball_lut,
            state: DecodedState::default(),
            sharpness_history: SharpnessHistory::new(30.0, 0.1),
            unmatched_payload_count: 0,
            needs_render: true,
            frame_count: 0,
        })
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
