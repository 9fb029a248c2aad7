//! Design tokens for Creditline
//!
//! Raw values the typography system reads: font sizes, weights, line
//! heights and letter spacing. All sizes are unscaled design
//! pixels; see [`crate::responsive`] for device scaling.

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Tokens
// =============================================================================

/// Font sizes in pixels
pub mod font_size {
    /// 10px
    pub const XXS: f32 = 10.0;
    /// 12px
    pub const XS: f32 = 12.0;
    /// 14px
    pub const SM: f32 = 14.0;
    /// 16px
    pub const BASE: f32 = 16.0;
    /// 18px
    pub const LG: f32 = 18.0;
    /// 20px
    pub const XL: f32 = 20.0;
    /// 24px
    pub const XL2: f32 = 24.0;
    /// 32px
    pub const XL3: f32 = 32.0;
    /// 40px
    pub const XL4: f32 = 40.0;

    /// Size used when a key is unknown
    pub const FALLBACK: f32 = BASE;

    /// Font size by name (`"sm"`, `"2xl"`) or pixel key (`"13"`)
    pub fn get(key: &str) -> Option<f32> {
        match key {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "base" => Some(BASE),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XL2),
            "3xl" => Some(XL3),
            "4xl" => Some(XL4),
            "10" | "11" | "12" | "13" | "14" | "16" | "18" | "20" | "24" | "32" | "40" => {
                key.parse().ok()
            }
            _ => None,
        }
    }

    /// Font size by key, falling back to [`FALLBACK`]
    pub fn get_or_default(key: &str) -> f32 {
        get(key).unwrap_or(FALLBACK)
    }
}

// =============================================================================
// Weight Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// The four weights the brand typeface ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Regular,
    /// 500
    Medium,
    /// 600
    #[serde(rename = "semibold")]
    SemiBold,
    /// 700
    Bold,
}

impl FontWeight {
    /// Numeric weight
    pub fn value(&self) -> u16 {
        match self {
            Self::Regular => font_weight::REGULAR,
            Self::Medium => font_weight::MEDIUM,
            Self::SemiBold => font_weight::SEMI_BOLD,
            Self::Bold => font_weight::BOLD,
        }
    }

    /// Font family carrying this weight.
    ///
    /// Each weight is a separate family, so the family must be picked
    /// from the weight rather than relying on synthetic bolding.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Regular => font_family::REGULAR,
            Self::Medium => font_family::MEDIUM,
            Self::SemiBold => font_family::SEMI_BOLD,
            Self::Bold => font_family::BOLD,
        }
    }
}

/// Font family names
pub mod font_family {
    /// Regular weight
    pub const REGULAR: &str = "THICCCBOI-Regular";
    /// Medium weight
    pub const MEDIUM: &str = "THICCCBOI-Medium";
    /// Semi-bold weight
    pub const SEMI_BOLD: &str = "THICCCBOI-SemiBold";
    /// Bold weight
    pub const BOLD: &str = "THICCCBOI-Bold";
}

// =============================================================================
// Tracking Tokens
// =============================================================================

/// Letter spacing presets, in em
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tracking {
    /// -0.025em
    Tight,
    /// 0em
    #[default]
    Normal,
    /// 0.025em
    Wide,
}

impl Tracking {
    /// Spacing in em
    pub fn em(&self) -> f32 {
        match self {
            Self::Tight => tracking::TIGHT,
            Self::Normal => tracking::NORMAL,
            Self::Wide => tracking::WIDE,
        }
    }
}

/// Letter spacing values in em
pub mod tracking {
    /// -0.075em
    pub const SUPER_TIGHT: f32 = -0.075;
    /// -0.05em
    pub const ULTRA_TIGHT: f32 = -0.05;
    /// -0.025em
    pub const TIGHT: f32 = -0.025;
    /// 0em
    pub const NORMAL: f32 = 0.0;
    /// 0.025em
    pub const WIDE: f32 = 0.025;
    /// 0.05em
    pub const EXTRA_WIDE: f32 = 0.05;
    /// 0.1em
    pub const SUPER_WIDE: f32 = 0.1;
}

// =============================================================================
// Per-variant Metrics
// =============================================================================

/// Line heights in pixels, keyed by text variant
pub mod line_height {
    #![allow(missing_docs)]

    pub const H1: f32 = 52.0;
    pub const H2: f32 = 48.0;
    pub const H3: f32 = 30.0;
    pub const H4: f32 = 32.0;
    pub const H5: f32 = 24.0;
    pub const H6: f32 = 22.0;
    pub const H7: f32 = 24.0;

    pub const SH1: f32 = 20.0;
    pub const SH2: f32 = 18.0;
    pub const SH3: f32 = 19.0;
    pub const SH4: f32 = 16.0;
    pub const SH5: f32 = 16.0;

    pub const B1: f32 = 24.0;
    pub const B2: f32 = 22.0;
    pub const B3: f32 = 22.0;
    pub const B4: f32 = 20.0;
    pub const B5: f32 = 20.0;
    pub const B6: f32 = 24.0;
    pub const B7: f32 = 20.0;
    pub const B8: f32 = 20.0;
    pub const B9: f32 = 18.0;

    pub const BUTTON_LG: f32 = 22.0;
    pub const BUTTON_MD: f32 = 20.0;
    pub const BUTTON_SM: f32 = 16.0;

    pub const LINK: f32 = 22.0;
    pub const LINK_SM: f32 = 20.0;
    pub const LINK_XS: f32 = 16.0;

    pub const OVERLINE_MD: f32 = 16.0;
    pub const OVERLINE_SM: f32 = 14.0;
}

/// Letter spacing in pixels, keyed by text variant
pub mod letter_spacing {
    #![allow(missing_docs)]

    pub const H1: f32 = -0.8;
    pub const H2: f32 = -0.64;
    pub const H3: f32 = -0.48;
    pub const H4: f32 = -0.4;
    pub const H5: f32 = -0.36;
    pub const H6: f32 = -0.32;
    pub const H7: f32 = -0.36;

    pub const SH1: f32 = -0.32;
    pub const SH2: f32 = -0.28;
    pub const SH3: f32 = -0.28;
    pub const SH4: f32 = -0.24;
    pub const SH5: f32 = -0.24;

    pub const B1: f32 = -0.32;
    pub const B2: f32 = -0.28;
    pub const B3: f32 = -0.28;
    pub const B4: f32 = -0.24;
    pub const B5: f32 = -0.24;
    pub const B6: f32 = -0.32;
    pub const B7: f32 = 0.0;
    pub const B8: f32 = 0.0;
    pub const B9: f32 = 0.0;

    pub const BUTTON_LG: f32 = -0.32;
    pub const BUTTON_MD: f32 = -0.28;
    pub const BUTTON_SM: f32 = -0.24;

    pub const LINK: f32 = -0.32;
    pub const LINK_SM: f32 = -0.28;
    pub const LINK_XS: f32 = -0.24;

    pub const OVERLINE_MD: f32 = 0.05;
    pub const OVERLINE_SM: f32 = 0.025;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Font Size Tests
    // ==========================================================================

    #[test]
    fn test_font_size_by_name_and_pixels() {
        assert_eq!(font_size::get("base"), Some(16.0));
        assert_eq!(font_size::get("2xl"), Some(24.0));
        assert_eq!(font_size::get("13"), Some(13.0));
        assert_eq!(font_size::get("15"), None);
    }

    #[test]
    fn test_font_size_fallback() {
        assert_eq!(font_size::get_or_default("huge"), 16.0);
        assert_eq!(font_size::get_or_default("xs"), 12.0);
    }

    // ==========================================================================
    // Weight Tests
    // ==========================================================================

    #[test]
    fn test_weight_selects_family() {
        assert_eq!(FontWeight::Regular.family(), "THICCCBOI-Regular");
        assert_eq!(FontWeight::Medium.family(), "THICCCBOI-Medium");
        assert_eq!(FontWeight::SemiBold.family(), "THICCCBOI-SemiBold");
        assert_eq!(FontWeight::Bold.family(), "THICCCBOI-Bold");
    }

    #[test]
    fn test_weight_values_ascend() {
        let weights = [FontWeight::Regular, FontWeight::Medium, FontWeight::SemiBold, FontWeight::Bold];
        assert!(weights.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn test_weight_serde_names() {
        assert_eq!(serde_json::to_string(&FontWeight::SemiBold).unwrap(), "\"semibold\"");
        let bold: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(bold, FontWeight::Bold);
    }

    // ==========================================================================
    // Tracking Tests
    // ==========================================================================

    #[test]
    fn test_tracking_em() {
        assert_eq!(Tracking::Tight.em(), -0.025);
        assert_eq!(Tracking::Normal.em(), 0.0);
        assert_eq!(Tracking::Wide.em(), 0.025);
    }
}
