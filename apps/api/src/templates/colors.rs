//! Color scheme catalog.
//!
//! Channels are stored as OKLCH triples (perceptual, device-independent) and
//! rendered as CSS `oklch()` strings. Stored values are not validated.

use std::fmt;

use serde::Serialize;

/// A color in OKLCH space: lightness 0..1, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    pub lightness: f32,
    pub chroma: f32,
    pub hue: f32,
}

impl Oklch {
    pub const fn new(lightness: f32, chroma: f32, hue: f32) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.lightness, self.chroma, self.hue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: Oklch,
    pub secondary: Oklch,
    pub accent: Oklch,
    pub text: Oklch,
    pub muted: Oklch,
}

/// Renderable color strings for the five roles of a scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub muted: String,
}

/// The first entry is the default scheme.
pub static COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "professional-blue",
        name: "Professional Blue",
        primary: Oklch::new(0.45, 0.15, 255.0),
        secondary: Oklch::new(0.6, 0.1, 250.0),
        accent: Oklch::new(0.7, 0.14, 230.0),
        text: Oklch::new(0.2, 0.02, 260.0),
        muted: Oklch::new(0.55, 0.02, 260.0),
    },
    ColorScheme {
        id: "modern-teal",
        name: "Modern Teal",
        primary: Oklch::new(0.55, 0.11, 190.0),
        secondary: Oklch::new(0.68, 0.09, 185.0),
        accent: Oklch::new(0.78, 0.13, 170.0),
        text: Oklch::new(0.22, 0.02, 200.0),
        muted: Oklch::new(0.56, 0.02, 200.0),
    },
    ColorScheme {
        id: "executive-navy",
        name: "Executive Navy",
        primary: Oklch::new(0.3, 0.09, 260.0),
        secondary: Oklch::new(0.45, 0.06, 255.0),
        accent: Oklch::new(0.75, 0.12, 85.0),
        text: Oklch::new(0.18, 0.01, 260.0),
        muted: Oklch::new(0.52, 0.015, 260.0),
    },
    ColorScheme {
        id: "creative-purple",
        name: "Creative Purple",
        primary: Oklch::new(0.5, 0.2, 300.0),
        secondary: Oklch::new(0.65, 0.15, 310.0),
        accent: Oklch::new(0.72, 0.17, 350.0),
        text: Oklch::new(0.21, 0.03, 300.0),
        muted: Oklch::new(0.55, 0.03, 300.0),
    },
    ColorScheme {
        id: "minimal-gray",
        name: "Minimal Gray",
        primary: Oklch::new(0.3, 0.0, 0.0),
        secondary: Oklch::new(0.5, 0.0, 0.0),
        accent: Oklch::new(0.65, 0.0, 0.0),
        text: Oklch::new(0.15, 0.0, 0.0),
        muted: Oklch::new(0.6, 0.0, 0.0),
    },
    ColorScheme {
        id: "forest-green",
        name: "Forest Green",
        primary: Oklch::new(0.45, 0.12, 150.0),
        secondary: Oklch::new(0.6, 0.1, 145.0),
        accent: Oklch::new(0.75, 0.15, 125.0),
        text: Oklch::new(0.2, 0.02, 150.0),
        muted: Oklch::new(0.55, 0.02, 150.0),
    },
    ColorScheme {
        id: "warm-burgundy",
        name: "Warm Burgundy",
        primary: Oklch::new(0.4, 0.14, 15.0),
        secondary: Oklch::new(0.55, 0.11, 20.0),
        accent: Oklch::new(0.72, 0.13, 50.0),
        text: Oklch::new(0.2, 0.02, 20.0),
        muted: Oklch::new(0.55, 0.02, 20.0),
    },
];

pub fn default_color_scheme() -> &'static ColorScheme {
    &COLOR_SCHEMES[0]
}

/// Exact-match lookup. `None` when the id is unknown.
pub fn find_color_scheme(id: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|scheme| scheme.id == id)
}

/// Lookup that falls back to the default scheme for unknown ids.
/// Use `find_color_scheme` to tell the two cases apart.
pub fn get_color_scheme(id: &str) -> &'static ColorScheme {
    find_color_scheme(id).unwrap_or_else(default_color_scheme)
}

pub fn apply_color_scheme(scheme: &ColorScheme) -> AppliedColors {
    AppliedColors {
        primary: scheme.primary.to_string(),
        secondary: scheme.secondary.to_string(),
        accent: scheme.accent.to_string(),
        text: scheme.text.to_string(),
        muted: scheme.muted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        assert!(!COLOR_SCHEMES.is_empty());
        let ids: HashSet<&str> = COLOR_SCHEMES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), COLOR_SCHEMES.len());
    }

    #[test]
    fn test_known_id_resolves() {
        let scheme = get_color_scheme("forest-green");
        assert_eq!(scheme.id, "forest-green");
        assert_eq!(find_color_scheme("forest-green"), Some(scheme));
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_entry() {
        let fallback = get_color_scheme("does-not-exist");
        assert_eq!(fallback, get_color_scheme(COLOR_SCHEMES[0].id));
        assert_eq!(fallback.id, "professional-blue");
        assert!(find_color_scheme("does-not-exist").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(find_color_scheme("Forest-Green").is_none());
    }

    #[test]
    fn test_oklch_renders_css() {
        assert_eq!(Oklch::new(0.45, 0.15, 255.0).to_string(), "oklch(0.45 0.15 255)");
        assert_eq!(Oklch::new(0.3, 0.0, 0.0).to_string(), "oklch(0.3 0 0)");
    }

    #[test]
    fn test_apply_formats_every_channel() {
        let colors = apply_color_scheme(default_color_scheme());
        for value in [
            &colors.primary,
            &colors.secondary,
            &colors.accent,
            &colors.text,
            &colors.muted,
        ] {
            assert!(value.starts_with("oklch(") && value.ends_with(')'), "{value}");
        }
        assert_eq!(colors.primary, "oklch(0.45 0.15 255)");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let scheme = get_color_scheme("creative-purple");
        assert_eq!(apply_color_scheme(scheme), apply_color_scheme(scheme));
    }

    #[test]
    fn test_apply_does_not_validate_channels() {
        let scheme = ColorScheme {
            id: "broken",
            name: "Broken",
            primary: Oklch::new(-1.0, 9.0, 720.0),
            ..default_color_scheme().clone()
        };
        assert_eq!(apply_color_scheme(&scheme).primary, "oklch(-1 9 720)");
    }
}
