//! Navball texture, rotation, and celestial-indicator ephemeris.
//!
//! The LUT precomputes, for each pixel in the navball disc, the unit
//! sphere-space point that pixel projects to. Per frame, the hot loop
//! rotates that precomputed point by the current orientation and samples
//! the texture through a 16.16 fixed-point UV, so no trigonometry runs
//! per pixel per frame — only the one-time LUT build pays for it.

use osd_color::Color;

#[derive(Debug)]
pub enum NavballError {
    Decode,
}

impl std::fmt::Display for NavballError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavballError::Decode => write!(f, "failed to decode navball skin texture"),
        }
    }
}

impl std::error::Error for NavballError {}

/// An equirectangular texture sampled with longitude/latitude UVs.
pub struct NavballTexture {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl NavballTexture {
    pub fn load(bytes: &[u8]) -> Result<Self, NavballError> {
        let img = image::load_from_memory(bytes)
            .map_err(|_| NavballError::Decode)?
            .to_rgba8();
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Color::new(p.0[3], p.0[0], p.0[1], p.0[2]))
            .collect();
        Ok(NavballTexture { width, height, pixels })
    }

    /// Sample at normalized UV (`u`,`v` each `[0,1)`) using 16.16
    /// fixed-point texel addressing.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = u.rem_euclid(1.0);
        let v = v.clamp(0.0, 1.0);
        let fx = (u * self.width as f32 * 65536.0) as u32;
        let fy = (v * (self.height - 1).max(1) as f32 * 65536.0) as u32;
        let x = (fx >> 16).min(self.width - 1);
        let y = (fy >> 16).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}

/// A unit sphere-space point a navball disc pixel maps to, or `None` if the
/// pixel falls outside the disc.
pub type LutEntry = Option<(f32, f32, f32)>;

/// Precomputed pixel→sphere-space-point table for a navball of the given
/// on-screen radius.
pub struct NavballLut {
    radius: i32,
    entries: Vec<LutEntry>,
}

impl NavballLut {
    /// Build a LUT for a navball disc of radius `radius` pixels.
    pub fn build(radius: i32) -> Self {
        let radius = radius.max(1);
        let side = (radius * 2 + 1) as usize;
        let mut entries = Vec::with_capacity(side * side);
        let r2 = (radius * radius) as f32;
        for j in -radius..=radius {
            for i in -radius..=radius {
                let x = i as f32;
                let y = j as f32;
                let d2 = x * x + y * y;
                if d2 > r2 {
                    entries.push(None);
                    continue;
                }
                let z = (r2 - d2).max(0.0).sqrt();
                let r = radius as f32;
                entries.push(Some((x / r, y / r, z / r)));
            }
        }
        NavballLut { radius, entries }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Look up the sphere-space point for disc-local offset `(di, dj)` in
    /// `[-radius, radius]`. `None` for offsets outside the disc.
    pub fn get(&self, di: i32, dj: i32) -> LutEntry {
        let side = self.radius * 2 + 1;
        if di < -self.radius || di > self.radius || dj < -self.radius || dj > self.radius {
            return None;
        }
        let row = (dj + self.radius) as usize;
        let col = (di + self.radius) as usize;
        self.entries[row * side as usize + col]
    }
}

/// Column-major 3x3 rotation matrix composed as `yaw · pitch · roll`.
#[derive(Clone, Copy, Debug)]
pub struct RotationMatrix(pub [[f32; 3]; 3]);

impl RotationMatrix {
    /// `yaw`=azimuth, `pitch`=elevation, `roll`=bank, all in degrees.
    pub fn from_euler_deg(yaw: f64, pitch: f64, roll: f64) -> Self {
        let (yaw, pitch, roll) = (yaw.to_radians(), pitch.to_radians(), roll.to_radians());
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();

        let ry = [[cy, 0.0, sy], [0.0, 1.0, 0.0], [-sy, 0.0, cy]];
        let rp = [[1.0, 0.0, 0.0], [0.0, cp, -sp], [0.0, sp, cp]];
        let rr = [[cr, -sr, 0.0], [sr, cr, 0.0], [0.0, 0.0, 1.0]];

        let m = mat_mul(mat_mul(ry, rp), rr);
        RotationMatrix([
            [m[0][0] as f32, m[0][1] as f32, m[0][2] as f32],
            [m[1][0] as f32, m[1][1] as f32, m[1][2] as f32],
            [m[2][0] as f32, m[2][1] as f32, m[2][2] as f32],
        ])
    }

    pub fn apply(&self, p: (f32, f32, f32)) -> (f32, f32, f32) {
        let m = self.0;
        (
            m[0][0] * p.0 + m[0][1] * p.1 + m[0][2] * p.2,
            m[1][0] * p.0 + m[1][1] * p.1 + m[1][2] * p.2,
            m[2][0] * p.0 + m[2][1] * p.1 + m[2][2] * p.2,
        )
    }
}

fn mat_mul(a: [[f64; 3]; 3], b: [[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0f64; 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            out[r][c] = a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c];
        }
    }
    out
}

/// Convert a rotated unit sphere-space point into longitude/latitude UV.
pub fn point_to_uv(p: (f32, f32, f32)) -> (f32, f32) {
    let lon = p.0.atan2(p.2);
    let lat = p.1.clamp(-1.0, 1.0).asin();
    let u = (lon / (2.0 * std::f32::consts::PI)) + 0.5;
    let v = 0.5 - (lat / std::f32::consts::PI);
    (u, v)
}

/// Horizon-frame position of a celestial body: azimuth and altitude in
/// degrees, plus whether it is above the visibility threshold.
#[derive(Clone, Copy, Debug)]
pub struct CelestialPosition {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

/// Low-order solar ephemeris (mean-anomaly + equation-of-center
/// approximation, accurate to roughly a degree) converted to the observer's
/// horizon frame. This intentionally trades VSOP87 precision for a compact,
/// allocation-free implementation suitable for an indicator icon, not for
/// navigation.
pub fn sun_position(lat_deg: f64, lon_deg: f64, unix_seconds: i64) -> CelestialPosition {
    let days = (unix_seconds as f64) / 86400.0 - 10957.5; // days since 2030-01-01T00:00:00Z epoch anchor
    let mean_anomaly = osd_math::normalize_360(357.5291 + 0.98560028 * days);
    let mean_longitude = osd_math::normalize_360(280.4665 + 0.98564736 * days);
    let eq_of_center = 1.9148 * mean_anomaly.to_radians().sin()
        + 0.0200 * (2.0 * mean_anomaly).to_radians().sin()
        + 0.0003 * (3.0 * mean_anomaly).to_radians().sin();
    let ecliptic_longitude = (mean_longitude + eq_of_center).to_radians();
    let obliquity: f64 = 23.439_f64.to_radians();

    let ra = (obliquity.cos() * ecliptic_longitude.sin()).atan2(ecliptic_longitude.cos());
    let dec = (obliquity.sin() * ecliptic_longitude.sin()).asin();

    horizon_from_equatorial(ra.to_degrees(), dec.to_degrees(), lat_deg, lon_deg, days)
}

/// Low-order lunar ephemeris: a mean-orbit approximation, same precision
/// trade-off as [`sun_position`].
pub fn moon_position(lat_deg: f64, lon_deg: f64, unix_seconds: i64) -> CelestialPosition {
    let days = (unix_seconds as f64) / 86400.0 - 10957.5;
    let mean_longitude = osd_math::normalize_360(218.316 + 13.176396 * days);
    let mean_anomaly = osd_math::normalize_360(134.963 + 13.064993 * days);
    let ecliptic_longitude = (mean_longitude + 6.289 * mean_anomaly.to_radians().sin()).to_radians();
    let obliquity: f64 = 23.439_f64.to_radians();

    let ra = ecliptic_longitude.sin() * obliquity.cos();
    let ra = ra.atan2(ecliptic_longitude.cos());
    let dec = (ecliptic_longitude.sin() * obliquity.sin()).asin();

    horizon_from_equatorial(ra.to_degrees(), dec.to_degrees(), lat_deg, lon_deg, days)
}

fn horizon_from_equatorial(ra_deg: f64, dec_deg: f64, lat_deg: f64, lon_deg: f64, days: f64) -> CelestialPosition {
    let gst = osd_math::normalize_360(280.46061837 + 360.98564736629 * days);
    let lst = osd_math::normalize_360(gst + lon_deg);
    let hour_angle = osd_math::normalize_180(lst - ra_deg).to_radians();

    let lat = lat_deg.to_radians();
    let dec = dec_deg.to_radians();

    let altitude = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos()).asin();
    let azimuth = (-hour_angle.sin()).atan2(dec.tan() * lat.cos() - lat.sin() * hour_angle.cos());

    CelestialPosition {
        azimuth_deg: osd_math::normalize_360(azimuth.to_degrees()),
        altitude_deg: altitude.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lut_marks_outside_disc_as_none() {
        let lut = NavballLut::build(10);
        assert!(lut.get(0, 0).is_some());
        assert!(lut.get(100, 100).is_none());
    }

    #[test]
    fn rotation_identity_preserves_point() {
        let r = RotationMatrix::from_euler_deg(0.0, 0.0, 0.0);
        let p = (0.3, 0.4, 0.866);
        let out = r.apply(p);
        assert!((out.0 - p.0).abs() < 1e-5);
        assert!((out.1 - p.1).abs() < 1e-5);
        assert!((out.2 - p.2).abs() < 1e-5);
    }

    #[test]
    fn sun_position_altitude_is_bounded() {
        let pos = sun_position(51.5, -0.1, 1_800_000_000);
        assert!(pos.altitude_deg >= -90.0 && pos.altitude_deg <= 90.0);
        assert!(pos.azimuth_deg >= 0.0 && pos.azimuth_deg < 360.0);
    }
}
