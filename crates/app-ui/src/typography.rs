//! Typography system for Creditline
//!
//! Text variants are defined in design pixels and resolved against a
//! [`ScaleContext`], so font scaling is an explicit input rather than
//! process-wide state.
//!
//! # Example
//!
//! ```rust
//! use app_ui::responsive::{ScaleContext, Viewport};
//! use app_ui::typography::{Typography, TypographyVariant};
//!
//! let typo = Typography::new(ScaleContext::new(Viewport::reference()));
//! let h1 = typo.get(TypographyVariant::H1);
//! assert_eq!(h1.font_family, "THICCCBOI-Bold");
//! assert_eq!(h1.font_size, 42.0);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::responsive::ScaleContext;
use crate::tokens::{font_size, letter_spacing, line_height, FontWeight, Tracking};

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family, chosen by weight
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Numeric font weight
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in pixels
    pub letter_spacing: f32,
    /// Letter spacing preset
    pub tracking: Tracking,
    /// Case transform
    #[serde(default)]
    pub text_transform: TextTransform,
    /// Decoration
    #[serde(default)]
    pub text_decoration: TextDecoration,
}

impl TextStyle {
    /// Create an unscaled style for a size and weight
    pub fn new(font_size: f32, weight: FontWeight) -> Self {
        Self {
            font_family: weight.family().to_string(),
            font_size,
            font_weight: weight.value(),
            line_height: font_size,
            letter_spacing: 0.0,
            tracking: Tracking::Normal,
            text_transform: TextTransform::None,
            text_decoration: TextDecoration::None,
        }
    }

    fn metrics(mut self, line_height: f32, letter_spacing: f32, tracking: Tracking) -> Self {
        self.line_height = line_height;
        self.letter_spacing = letter_spacing;
        self.tracking = tracking;
        self
    }

    fn uppercase(mut self) -> Self {
        self.text_transform = TextTransform::Uppercase;
        self
    }

    fn underline(mut self) -> Self {
        self.text_decoration = TextDecoration::Underline;
        self
    }

    /// Same style with the font size scaled for a device
    pub fn scaled(&self, ctx: &ScaleContext) -> Self {
        Self {
            font_size: ctx.scale_font_size(self.font_size),
            ..self.clone()
        }
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Named text variants of the design system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    // Headings
    /// 40 bold
    H1,
    /// 32 bold
    H2,
    /// 24 bold
    H3,
    /// 20 bold
    H4,
    /// 18 bold
    H5,
    /// 16 bold
    H6,
    /// 18 semibold
    H7,

    // Subheadings
    /// 16 semibold
    Sh1,
    /// 14 bold
    Sh2,
    /// 14 semibold
    Sh3,
    /// 12 semibold
    Sh4,
    /// 12 bold
    Sh5,

    // Body
    /// 16 medium
    B1,
    /// 14 medium
    B2,
    /// 14 regular
    B3,
    /// 12 medium
    B4,
    /// 12 regular
    B5,
    /// 16 regular
    #[default]
    B6,
    /// 13 medium
    B7,
    /// 13 regular
    B8,
    /// 11 medium
    B9,

    // Links
    /// 16 medium, underlined
    Link,
    /// 14 medium, underlined
    LinkSm,
    /// 12 medium, underlined
    LinkXs,

    // Button labels
    /// 16 semibold
    ButtonLg,
    /// 14 semibold
    ButtonMd,
    /// 12 semibold
    ButtonSm,

    // Overlines
    /// 12 medium, wide, uppercase
    OverlineMd,
    /// 10 semibold, uppercase
    OverlineSm,
}

impl TypographyVariant {
    /// Every variant
    pub const ALL: [Self; 29] = [
        Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6, Self::H7,
        Self::Sh1, Self::Sh2, Self::Sh3, Self::Sh4, Self::Sh5,
        Self::B1, Self::B2, Self::B3, Self::B4, Self::B5, Self::B6, Self::B7, Self::B8, Self::B9,
        Self::Link, Self::LinkSm, Self::LinkXs,
        Self::ButtonLg, Self::ButtonMd, Self::ButtonSm,
        Self::OverlineMd, Self::OverlineSm,
    ];

    /// Unscaled style for this variant
    pub fn style(&self) -> TextStyle {
        use FontWeight::*;
        use Tracking::*;

        match self {
            Self::H1 => TextStyle::new(font_size::XL4, Bold).metrics(line_height::H1, letter_spacing::H1, Tight),
            Self::H2 => TextStyle::new(font_size::XL3, Bold).metrics(line_height::H2, letter_spacing::H2, Tight),
            Self::H3 => TextStyle::new(font_size::XL2, Bold).metrics(line_height::H3, letter_spacing::H3, Tight),
            Self::H4 => TextStyle::new(font_size::XL, Bold).metrics(line_height::H4, letter_spacing::H4, Tight),
            Self::H5 => TextStyle::new(font_size::LG, Bold).metrics(line_height::H5, letter_spacing::H5, Tight),
            Self::H6 => TextStyle::new(font_size::BASE, Bold).metrics(line_height::H6, letter_spacing::H6, Tight),
            Self::H7 => TextStyle::new(font_size::LG, SemiBold).metrics(line_height::H7, letter_spacing::H7, Tight),

            Self::Sh1 => TextStyle::new(font_size::BASE, SemiBold).metrics(line_height::SH1, letter_spacing::SH1, Tight),
            Self::Sh2 => TextStyle::new(font_size::SM, Bold).metrics(line_height::SH2, letter_spacing::SH2, Tight),
            Self::Sh3 => TextStyle::new(font_size::SM, SemiBold).metrics(line_height::SH3, letter_spacing::SH3, Tight),
            Self::Sh4 => TextStyle::new(font_size::XS, SemiBold).metrics(line_height::SH4, letter_spacing::SH4, Tight),
            Self::Sh5 => TextStyle::new(font_size::XS, Bold).metrics(line_height::SH5, letter_spacing::SH5, Tight),

            Self::B1 => TextStyle::new(font_size::BASE, Medium).metrics(line_height::B1, letter_spacing::B1, Tight),
            Self::B2 => TextStyle::new(font_size::SM, Medium).metrics(line_height::B2, letter_spacing::B2, Tight),
            Self::B3 => TextStyle::new(font_size::SM, Regular).metrics(line_height::B3, letter_spacing::B3, Tight),
            Self::B4 => TextStyle::new(font_size::XS, Medium).metrics(line_height::B4, letter_spacing::B4, Tight),
            Self::B5 => TextStyle::new(font_size::XS, Regular).metrics(line_height::B5, letter_spacing::B5, Tight),
            Self::B6 => TextStyle::new(font_size::BASE, Regular).metrics(line_height::B6, letter_spacing::B6, Tight),
            Self::B7 => TextStyle::new(13.0, Medium).metrics(line_height::B7, letter_spacing::B7, Normal),
            Self::B8 => TextStyle::new(13.0, Regular).metrics(line_height::B8, letter_spacing::B8, Normal),
            Self::B9 => TextStyle::new(11.0, Medium).metrics(line_height::B9, letter_spacing::B9, Normal),

            Self::Link => TextStyle::new(font_size::BASE, Medium)
                .metrics(line_height::LINK, letter_spacing::LINK, Tight)
                .underline(),
            Self::LinkSm => TextStyle::new(font_size::SM, Medium)
                .metrics(line_height::LINK_SM, letter_spacing::LINK_SM, Tight)
                .underline(),
            Self::LinkXs => TextStyle::new(font_size::XS, Medium)
                .metrics(line_height::LINK_XS, letter_spacing::LINK_XS, Tight)
                .underline(),

            Self::ButtonLg => TextStyle::new(font_size::BASE, SemiBold)
                .metrics(line_height::BUTTON_LG, letter_spacing::BUTTON_LG, Tight),
            Self::ButtonMd => TextStyle::new(font_size::SM, SemiBold)
                .metrics(line_height::BUTTON_MD, letter_spacing::BUTTON_MD, Tight),
            Self::ButtonSm => TextStyle::new(font_size::XS, SemiBold)
                .metrics(line_height::BUTTON_SM, letter_spacing::BUTTON_SM, Tight),

            Self::OverlineMd => TextStyle::new(font_size::XS, Medium)
                .metrics(line_height::OVERLINE_MD, letter_spacing::OVERLINE_MD, Wide)
                .uppercase(),
            Self::OverlineSm => TextStyle::new(font_size::XXS, SemiBold)
                .metrics(line_height::OVERLINE_SM, letter_spacing::OVERLINE_SM, Normal)
                .uppercase(),
        }
    }

    /// Style for this variant scaled for a device
    pub fn resolve(&self, ctx: &ScaleContext) -> TextStyle {
        self.style().scaled(ctx)
    }
}

// =============================================================================
// Typography System
// =============================================================================

/// Every variant resolved for one [`ScaleContext`]
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    context: ScaleContext,
    styles: HashMap<TypographyVariant, TextStyle>,
}

impl Default for Typography {
    fn default() -> Self {
        Self::new(ScaleContext::default())
    }
}

impl Typography {
    /// Resolve every variant for `context`
    pub fn new(context: ScaleContext) -> Self {
        let styles = TypographyVariant::ALL
            .iter()
            .map(|v| (*v, v.resolve(&context)))
            .collect();

        Self { context, styles }
    }

    /// Resolved style for a variant
    pub fn get(&self, variant: TypographyVariant) -> &TextStyle {
        // ALL covers every variant
        &self.styles[&variant]
    }

    /// Context the styles were resolved against
    pub fn context(&self) -> &ScaleContext {
        &self.context
    }

    /// Change the app font scale and re-resolve every style
    pub fn set_font_scale(&mut self, scale: f32) {
        let context = self.context.with_font_scale(scale);
        if context != self.context {
            *self = Self::new(context);
        }
    }
}

// =============================================================================
// Text Transform
// =============================================================================

/// Text transform options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// No transform
    #[default]
    None,
    /// UPPERCASE
    Uppercase,
}

impl TextTransform {
    /// Apply the transform to text
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Uppercase => text.to_uppercase(),
        }
    }
}

// =============================================================================
// Text Decoration
// =============================================================================

/// Text decoration options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    /// No decoration
    #[default]
    None,
    /// Underline
    Underline,
}
