//! Drawer configuration
//!
//! Everything the drawer reads at mount: viewport height, snap fractions,
//! spring constants, and the constants of the derived-style ramps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Viewport height is not a positive finite number
    #[error("Invalid viewport height: {0}")]
    InvalidViewport(f32),

    /// Snap fractions are not strictly increasing inside [0, 1]
    #[error("Snap fractions must satisfy 0 <= top < middle < bottom <= 1 (got {top}, {middle}, {bottom})")]
    SnapOrder {
        /// Top fraction
        top: f32,
        /// Middle fraction
        middle: f32,
        /// Bottom fraction
        bottom: f32,
    },

    /// Header does not fit inside the viewport
    #[error("Header height {header} exceeds viewport height {viewport}")]
    HeaderTooTall {
        /// Header height
        header: f32,
        /// Viewport height
        viewport: f32,
    },

    /// A length or threshold is negative or not finite
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// Spring constants cannot produce motion
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rest positions as fractions of the viewport height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapFractions {
    /// Fully expanded
    pub top: f32,
    /// Resting position on mount
    pub middle: f32,
    /// Collapsed
    pub bottom: f32,
}

impl Default for SnapFractions {
    fn default() -> Self {
        Self { top: 0.0, middle: 0.34, bottom: 0.73 }
    }
}

/// Spring parameters for snap animations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    /// Damping coefficient
    pub damping: f32,
    /// Spring stiffness
    pub stiffness: f32,
    /// Mass of the animated body
    pub mass: f32,
    /// Release velocity is clamped to +/- this value (px/s)
    pub max_initial_velocity: f32,
    /// Speed below which the spring may settle (px/s)
    pub rest_speed: f32,
    /// Distance below which the spring may settle (px)
    pub rest_displacement: f32,
    /// Never travel past the target
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 55.0,
            stiffness: 320.0,
            mass: 0.7,
            max_initial_velocity: 1000.0,
            rest_speed: 2.0,
            rest_displacement: 0.01,
            overshoot_clamping: false,
        }
    }
}

/// Drawer heights at each snap point as fractions of the viewport.
///
/// The top height is always the viewport minus the header, so only the
/// middle and bottom heights are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeightFractions {
    /// Height while resting at `Middle`
    pub middle: f32,
    /// Height while resting at `Bottom`
    pub bottom: f32,
}

impl Default for HeightFractions {
    fn default() -> Self {
        Self { middle: 0.75, bottom: 0.35 }
    }
}

/// Scroll-to-drag hand-back thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandBackConfig {
    /// Minimum downward velocity on scroll drag end (px/s)
    pub drag_velocity: f32,
    /// Momentum must end with scroll position in (-window, 0]
    pub momentum_window: f32,
}

impl Default for HandBackConfig {
    fn default() -> Self {
        Self { drag_velocity: 10.0, momentum_window: 5.0 }
    }
}

/// Complete drawer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawerConfig {
    /// Viewport height in pixels, read once at mount
    pub viewport_height: f32,
    /// Height of the fixed header above the drawer
    pub header_height: f32,
    /// Snap point fractions
    pub snap: SnapFractions,
    /// How far past `Bottom` a drag may pull
    pub overshoot_margin: f32,
    /// Release speed that counts as a flick (px/s)
    pub fling_velocity: f32,
    /// Snap animation spring
    pub spring: SpringConfig,
    /// Drawer heights at the snap points
    pub heights: HeightFractions,
    /// Header opacity reaches 1 at this fraction of the `Middle` offset
    pub header_fade_fraction: f32,
    /// Grip handle fades in over this distance before `Bottom`
    pub handle_fade_distance: f32,
    /// Score scale at `Bottom`
    pub score_max_scale: f32,
    /// Score translate at `Bottom`
    pub score_max_translate: f32,
    /// Hand-back thresholds
    pub hand_back: HandBackConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            viewport_height: 812.0,
            header_height: 0.0,
            snap: SnapFractions::default(),
            overshoot_margin: 50.0,
            fling_velocity: 1000.0,
            spring: SpringConfig::default(),
            heights: HeightFractions::default(),
            header_fade_fraction: 0.5,
            handle_fade_distance: 50.0,
            score_max_scale: 1.18,
            score_max_translate: 20.0,
            hand_back: HandBackConfig::default(),
        }
    }
}

impl DrawerConfig {
    /// Default configuration for a viewport height
    pub fn for_viewport(viewport_height: f32) -> Self {
        Self { viewport_height, ..Default::default() }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the header height
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    /// Set the snap fractions
    pub fn with_snap(mut self, top: f32, middle: f32, bottom: f32) -> Self {
        self.snap = SnapFractions { top, middle, bottom };
        self
    }

    /// Set the overshoot margin
    pub fn with_overshoot_margin(mut self, margin: f32) -> Self {
        self.overshoot_margin = margin;
        self
    }

    /// Set the spring
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Set the hand-back thresholds
    pub fn with_hand_back(mut self, hand_back: HandBackConfig) -> Self {
        self.hand_back = hand_back;
        self
    }

    /// Check every invariant the drawer relies on
    pub fn validate(&self) -> Result<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(ConfigError::InvalidViewport(self.viewport_height));
        }

        let SnapFractions { top, middle, bottom } = self.snap;
        let in_unit = |f: f32| f.is_finite() && (0.0..=1.0).contains(&f);
        if !(in_unit(top) && in_unit(middle) && in_unit(bottom) && top < middle && middle < bottom) {
            return Err(ConfigError::SnapOrder { top, middle, bottom });
        }

        if self.header_height > self.viewport_height {
            return Err(ConfigError::HeaderTooTall {
                header: self.header_height,
                viewport: self.viewport_height,
            });
        }

        let lengths = [
            ("headerHeight", self.header_height),
            ("overshootMargin", self.overshoot_margin),
            ("flingVelocity", self.fling_velocity),
            ("headerFadeFraction", self.header_fade_fraction),
            ("handleFadeDistance", self.handle_fade_distance),
            ("heights.middle", self.heights.middle),
            ("heights.bottom", self.heights.bottom),
            ("scoreMaxScale", self.score_max_scale),
            ("scoreMaxTranslate", self.score_max_translate),
            ("handBack.dragVelocity", self.hand_back.drag_velocity),
            ("handBack.momentumWindow", self.hand_back.momentum_window),
            ("spring.maxInitialVelocity", self.spring.max_initial_velocity),
            ("spring.restSpeed", self.spring.rest_speed),
            ("spring.restDisplacement", self.spring.rest_displacement),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let spring = &self.spring;
        if !(spring.stiffness.is_finite() && spring.stiffness > 0.0) {
            return Err(ConfigError::InvalidSpring(format!(
                "stiffness must be positive, got {}",
                spring.stiffness
            )));
        }
        if !(spring.mass.is_finite() && spring.mass > 0.0) {
            return Err(ConfigError::InvalidSpring(format!(
                "mass must be positive, got {}",
                spring.mass
            )));
        }
        if !spring.damping.is_finite() || spring.damping < 0.0 {
            return Err(ConfigError::InvalidSpring(format!(
                "damping must be non-negative, got {}",
                spring.damping
            )));
        }

        Ok(())
    }
}
