//! User interface logic for Creditline
//!
//! This crate holds the interaction and design-system logic behind the
//! home screen. Rendering is left to the host; everything here is plain
//! state driven by gesture, scroll and frame callbacks.
//!
//! # Modules
//!
//! - [`drawer`] - Draggable bottom drawer with scroll hand-off
//! - [`interpolate`] - Piecewise-linear interpolation
//! - [`responsive`] - Viewport-relative scaling
//! - [`tokens`] - Design tokens (font sizes, weights, metrics)
//! - [`typography`] - Text variants resolved for a device
//! - [`score_bubble`] - Credit score animation bridge and counter
//! - [`telemetry`] - Log subscriber setup
//!
//! # Example
//!
//! ```rust
//! use app_ui::drawer::{DrawerConfig, SnapTable, SnapPoint};
//!
//! let config = DrawerConfig::for_viewport(812.0);
//! let table = SnapTable::from_config(&config);
//!
//! // A slow release just below the middle settles back on it
//! assert_eq!(table.select(300.0, -50.0, config.fling_velocity), SnapPoint::Middle);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod drawer;
pub mod interpolate;
pub mod responsive;
pub mod score_bubble;
pub mod telemetry;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use drawer::{
    ContentHost, DerivedStyle, Drawer, DrawerConfig, Driver, GestureSample, InteractionMode,
    ScrollSample, SnapPoint, SnapTable,
};

pub use interpolate::{interpolate, Extrapolate};

pub use responsive::{ScaleContext, Viewport};

pub use tokens::{font_size, FontWeight, Tracking};

pub use typography::{TextDecoration, TextStyle, TextTransform, Typography, TypographyVariant};

pub use score_bubble::{
    AnimationEngine, EngineError, InputOutcome, ScoreBubble, ScoreBubbleConfig, ScoreCounter,
};
