//! Name→path registries resolved at config-load time (§6).
//!
//! All lookups are case-sensitive linear scans over a small `const`
//! table, mirroring the teacher's `Demo::from_index` style registry
//! lookups rather than a hash map — these tables have a dozen entries at
//! most and are only ever consulted once per resource at `init`.

pub const FONTS: &[(&str, &str)] = &[
    ("liberation_sans_bold", "fonts/LiberationSans-Bold.ttf"),
    ("b612_mono_bold", "fonts/B612Mono-Bold.ttf"),
    ("share_tech_mono", "fonts/ShareTechMono-Regular.ttf"),
    ("orbitron_bold", "fonts/Orbitron-Bold.ttf"),
];

pub const NAVBALL_SKINS: &[(&str, &str)] = &[
    ("stock", "navball/stock.png"),
    ("stock_iva", "navball/stock_iva.png"),
    ("5thHorseman_v2", "navball/5thHorseman_v2.png"),
    ("5thHorseman_black", "navball/5thHorseman_black.png"),
    ("5thHorseman_brown", "navball/5thHorseman_brown.png"),
    ("jafo", "navball/jafo.png"),
    ("kbob_v2", "navball/kbob_v2.png"),
    ("ordinary_kerman", "navball/ordinary_kerman.png"),
    ("trekky", "navball/trekky.png"),
    ("apollo", "navball/apollo.png"),
    ("white_owl", "navball/white_owl.png"),
    ("zasnold", "navball/zasnold.png"),
    ("falconb", "navball/falconb.png"),
];

pub const CENTER_INDICATORS: &[(&str, &str)] = &[
    ("circle", "icons/center_circle.svg"),
    ("rectangle", "icons/center_rectangle.svg"),
    ("crosshair", "icons/center_crosshair.svg"),
];

/// Resolve a font name to its resource path. Falls back to the first
/// registry entry when the name is unknown.
pub fn resolve_font(name: &str) -> &'static str {
    resolve(FONTS, name)
}

/// Resolve a navball skin name to its PNG path. Unknown names default to
/// `stock`.
pub fn resolve_navball_skin(name: &str) -> &'static str {
    NAVBALL_SKINS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| *path)
        .unwrap_or_else(|| resolve(NAVBALL_SKINS, "stock"))
}

/// Resolve a center-indicator name to its SVG path. Falls back to the
/// first registry entry when the name is unknown.
pub fn resolve_center_indicator(name: &str) -> &'static str {
    resolve(CENTER_INDICATORS, name)
}

fn resolve(table: &'static [(&'static str, &'static str)], name: &str) -> &'static str {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| *path)
        .unwrap_or(table[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_navball_skin_defaults_to_stock() {
        assert_eq!(resolve_navball_skin("not-a-skin"), resolve_navball_skin("stock"));
    }

    #[test]
    fn unknown_font_falls_back_to_first_entry() {
        assert_eq!(resolve_font("not-a-font"), FONTS[0].1);
    }
}
