//! Snap points and release-target selection

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{DrawerConfig, SnapFractions};

/// Named rest positions of the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapPoint {
    /// Fully expanded; content scrolls on its own
    Top,
    /// Initial position
    Middle,
    /// Collapsed
    Bottom,
}

impl SnapPoint {
    /// All snap points from top to bottom
    pub const ALL: [SnapPoint; 3] = [SnapPoint::Top, SnapPoint::Middle, SnapPoint::Bottom];
}

/// Pixel offsets of the three snap points for one viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTable {
    top: f32,
    middle: f32,
    bottom: f32,
    overshoot: f32,
}

impl SnapTable {
    /// Compute the table from a viewport height and fractions.
    ///
    /// A negative or NaN overshoot is treated as zero.
    pub fn new(viewport_height: f32, fractions: SnapFractions, overshoot: f32) -> Self {
        Self {
            top: viewport_height * fractions.top,
            middle: viewport_height * fractions.middle,
            bottom: viewport_height * fractions.bottom,
            overshoot: overshoot.max(0.0),
        }
    }

    /// Compute the table for a drawer configuration
    pub fn from_config(config: &DrawerConfig) -> Self {
        Self::new(config.viewport_height, config.snap, config.overshoot_margin)
    }

    /// Offset of a snap point
    pub fn offset(&self, point: SnapPoint) -> f32 {
        match point {
            SnapPoint::Top => self.top,
            SnapPoint::Middle => self.middle,
            SnapPoint::Bottom => self.bottom,
        }
    }

    /// Top offset
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Middle offset
    pub fn middle(&self) -> f32 {
        self.middle
    }

    /// Bottom offset
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Largest offset a drag may reach
    pub fn max_drag(&self) -> f32 {
        self.bottom + self.overshoot
    }

    /// Clamp an offset into the draggable range.
    ///
    /// The upper bound wins if the table is inverted.
    pub fn clamp_drag(&self, offset: f32) -> f32 {
        offset.max(self.top).min(self.max_drag())
    }

    /// The snap point sitting exactly at `offset`, if any
    pub fn point_at(&self, offset: f32) -> Option<SnapPoint> {
        SnapPoint::ALL
            .into_iter()
            .find(|p| (self.offset(*p) - offset).abs() <= 0.5)
    }

    /// Choose the release target for an offset and vertical velocity.
    ///
    /// Rules apply in order: a fast upward flick goes to `Top`, a fast
    /// downward flick goes to `Bottom`, otherwise the nearest band wins.
    pub fn select(&self, offset: f32, velocity: f32, fling_velocity: f32) -> SnapPoint {
        let target = if velocity < -fling_velocity && offset > self.top {
            SnapPoint::Top
        } else if velocity > fling_velocity && offset < self.bottom {
            SnapPoint::Bottom
        } else if offset < self.middle * 0.5 {
            SnapPoint::Top
        } else if offset < (self.middle + self.bottom) / 2.0 {
            SnapPoint::Middle
        } else {
            SnapPoint::Bottom
        };

        debug!(offset, velocity, ?target, "Selected snap target");
        target
    }
}
