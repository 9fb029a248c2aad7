//! Viewport-relative scaling
//!
//! Sizes in the design system are authored against a 375×812 reference
//! screen. A [`ScaleContext`] is built once from the device viewport and the
//! app font scale, then passed to everything that resolves a size.
//!
//! # Example
//!
//! ```rust
//! use app_ui::responsive::{ScaleContext, Viewport};
//!
//! let ctx = ScaleContext::new(Viewport::new(414.0, 896.0));
//! assert_eq!(ctx.scale_width(100.0), 110.0);
//!
//! let larger = ctx.with_font_scale(1.2);
//! assert!(larger.scale_font_size(16.0) > ctx.scale_font_size(16.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Design reference width
pub const BASE_WIDTH: f32 = 375.0;

/// Design reference height
pub const BASE_HEIGHT: f32 = 812.0;

/// App-wide font scale applied on top of the screen scale
pub const DEFAULT_FONT_SCALE: f32 = 1.05;

/// Default lower bound of the font screen scale
pub const DEFAULT_MIN_FONT_SCALE: f32 = 0.85;

/// Default upper bound of the font screen scale
pub const DEFAULT_MAX_FONT_SCALE: f32 = 1.2;

/// Spacing screen scale bounds
pub const SPACING_SCALE_RANGE: (f32, f32) = (0.9, 1.15);

/// Device viewport in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The design reference screen
    pub fn reference() -> Self {
        Self::new(BASE_WIDTH, BASE_HEIGHT)
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    fn width_scale(&self) -> f32 {
        self.width / BASE_WIDTH
    }

    fn height_scale(&self) -> f32 {
        self.height / BASE_HEIGHT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::reference()
    }
}

/// Everything needed to turn design sizes into device sizes.
///
/// Deserialized contexts go through the same checks as the builders, so an
/// invalid field falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawScaleContext")]
pub struct ScaleContext {
    /// Device viewport
    pub viewport: Viewport,
    /// App font scale
    pub font_scale: f32,
    /// Physical pixels per point
    pub pixel_ratio: f32,
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self {
            viewport: Viewport::reference(),
            font_scale: DEFAULT_FONT_SCALE,
            pixel_ratio: 1.0,
        }
    }
}

/// Unchecked wire form of [`ScaleContext`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawScaleContext {
    viewport: Viewport,
    font_scale: f32,
    pixel_ratio: f32,
}

impl Default for RawScaleContext {
    fn default() -> Self {
        let ScaleContext { viewport, font_scale, pixel_ratio } = ScaleContext::default();
        Self { viewport, font_scale, pixel_ratio }
    }
}

impl From<RawScaleContext> for ScaleContext {
    fn from(raw: RawScaleContext) -> Self {
        ScaleContext::new(raw.viewport)
            .with_font_scale(raw.font_scale)
            .with_pixel_ratio(raw.pixel_ratio)
    }
}

impl ScaleContext {
    /// Context for a viewport with the default font scale.
    ///
    /// An empty or non-finite viewport falls back to the reference screen.
    pub fn new(viewport: Viewport) -> Self {
        let viewport = if viewport.is_valid() {
            viewport
        } else {
            warn!(?viewport, "Ignoring invalid viewport");
            Viewport::reference()
        };
        Self { viewport, ..Default::default() }
    }

    /// Same context with a different app font scale.
    ///
    /// Non-positive or non-finite scales are ignored.
    pub fn with_font_scale(self, font_scale: f32) -> Self {
        if !font_scale.is_finite() || font_scale <= 0.0 {
            warn!(font_scale, "Ignoring invalid font scale");
            return self;
        }
        Self { font_scale, ..self }
    }

    /// Same context with a different pixel density
    pub fn with_pixel_ratio(self, pixel_ratio: f32) -> Self {
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            warn!(pixel_ratio, "Ignoring invalid pixel ratio");
            return self;
        }
        Self { pixel_ratio, ..self }
    }

    /// Scale a horizontal size by the width ratio
    pub fn scale_width(&self, size: f32) -> f32 {
        (size * self.viewport.width_scale()).round()
    }

    /// Scale a vertical size by the height ratio
    pub fn scale_height(&self, size: f32) -> f32 {
        (size * self.viewport.height_scale()).round()
    }

    /// Scale a font size with the default bounds
    pub fn scale_font_size(&self, size: f32) -> f32 {
        self.scale_font_size_within(size, DEFAULT_MIN_FONT_SCALE, DEFAULT_MAX_FONT_SCALE)
    }

    /// Scale a font size, clamping the screen scale to `[min_scale, max_scale]`
    /// before applying the app font scale.
    ///
    /// If the bounds cross, `max_scale` wins. A NaN bound is ignored.
    pub fn scale_font_size_within(&self, size: f32, min_scale: f32, max_scale: f32) -> f32 {
        let screen = self.viewport.width_scale().max(min_scale).min(max_scale);
        let size = size * screen * self.font_scale;
        self.round_to_pixel(size).round()
    }

    /// Scale a margin or padding, with tighter bounds than fonts
    pub fn scale_spacing(&self, size: f32) -> f32 {
        let (min, max) = SPACING_SCALE_RANGE;
        (size * self.viewport.width_scale().clamp(min, max)).round()
    }

    fn round_to_pixel(&self, size: f32) -> f32 {
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return size;
        }
        (size * self.pixel_ratio).round() / self.pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ScaleContext {
        ScaleContext::new(Viewport::reference()).with_font_scale(1.0)
    }

    // ==========================================================================
    // Dimension Tests
    // ==========================================================================

    #[test]
    fn test_reference_screen_is_identity() {
        let ctx = reference();
        assert_eq!(ctx.scale_width(120.0), 120.0);
        assert_eq!(ctx.scale_height(240.0), 240.0);
        assert_eq!(ctx.scale_spacing(16.0), 16.0);
        assert_eq!(ctx.scale_font_size(16.0), 16.0);
    }

    #[test]
    fn test_scale_width_and_height() {
        let ctx = ScaleContext::new(Viewport::new(750.0, 406.0));
        assert_eq!(ctx.scale_width(10.0), 20.0);
        assert_eq!(ctx.scale_height(10.0), 5.0);
    }

    #[test]
    fn test_spacing_is_clamped() {
        let wide = ScaleContext::new(Viewport::new(750.0, 812.0));
        assert_eq!(wide.scale_spacing(100.0), 115.0);

        let narrow = ScaleContext::new(Viewport::new(300.0, 812.0));
        assert_eq!(narrow.scale_spacing(100.0), 90.0);
    }

    // ==========================================================================
    // Font Tests
    // ==========================================================================

    #[test]
    fn test_font_scale_default() {
        let ctx = ScaleContext::new(Viewport::reference());
        assert_eq!(ctx.font_scale, DEFAULT_FONT_SCALE);
        // 40 × 1.05 = 42
        assert_eq!(ctx.scale_font_size(40.0), 42.0);
    }

    #[test]
    fn test_font_screen_scale_is_clamped() {
        let tablet = ScaleContext::new(Viewport::new(1024.0, 1366.0)).with_font_scale(1.0);
        assert_eq!(tablet.scale_font_size(20.0), 24.0);

        let small = ScaleContext::new(Viewport::new(200.0, 400.0)).with_font_scale(1.0);
        assert_eq!(small.scale_font_size(20.0), 17.0);
    }

    #[test]
    fn test_font_scale_within_custom_bounds() {
        let tablet = ScaleContext::new(Viewport::new(1024.0, 1366.0)).with_font_scale(1.0);
        assert_eq!(tablet.scale_font_size_within(10.0, 1.0, 2.0), 20.0);
    }

    #[test]
    fn test_crossed_font_bounds_never_panic() {
        let ctx = reference();
        // Upper bound wins: 16 × 0.85 = 13.6
        assert_eq!(ctx.scale_font_size_within(16.0, 1.2, 0.85), 14.0);
        assert_eq!(ctx.scale_font_size_within(16.0, f32::NAN, f32::NAN), 16.0);
    }

    #[test]
    fn test_font_scale_is_per_context() {
        let base = reference();
        let larger = base.with_font_scale(1.5);

        assert_eq!(base.scale_font_size(16.0), 16.0);
        assert_eq!(larger.scale_font_size(16.0), 24.0);
    }

    #[test]
    fn test_invalid_font_scale_ignored() {
        let ctx = reference();
        assert_eq!(ctx.with_font_scale(0.0), ctx);
        assert_eq!(ctx.with_font_scale(f32::NAN), ctx);
        assert_eq!(ctx.with_pixel_ratio(-2.0), ctx);
    }

    #[test]
    fn test_context_from_json() {
        let ctx: ScaleContext =
            serde_json::from_str(r#"{"viewport":{"width":414,"height":896},"fontScale":1.1}"#)
                .unwrap();
        assert_eq!(ctx.viewport, Viewport::new(414.0, 896.0));
        assert_eq!(ctx.font_scale, 1.1);
        assert_eq!(ctx.pixel_ratio, 1.0);
    }

    #[test]
    fn test_invalid_json_fields_fall_back() {
        let ctx: ScaleContext = serde_json::from_str(r#"{"pixelRatio":0}"#).unwrap();
        assert_eq!(ctx.pixel_ratio, 1.0);
        assert_eq!(ctx.scale_font_size(16.0), 17.0);

        let ctx: ScaleContext = serde_json::from_str(r#"{"fontScale":-1.0}"#).unwrap();
        assert_eq!(ctx.font_scale, DEFAULT_FONT_SCALE);
        assert!(ctx.scale_font_size(16.0) > 0.0);

        let ctx: ScaleContext =
            serde_json::from_str(r#"{"viewport":{"width":0,"height":812}}"#).unwrap();
        assert_eq!(ctx.viewport, Viewport::reference());
    }

    #[test]
    fn test_context_json_round_trip_keeps_names() {
        let ctx = reference().with_pixel_ratio(3.0);
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"pixelRatio\":3.0"));
        assert_eq!(serde_json::from_str::<ScaleContext>(&json).unwrap(), ctx);
    }
}
