//! Styles derived from the drawer offset
//!
//! Every value here is a pure function of the offset and is recomputed on
//! every frame.

use serde::{Deserialize, Serialize};

use super::config::DrawerConfig;
use super::snap::SnapTable;
use crate::interpolate::{interpolate, lerp_clamped, Extrapolate};

/// Visual properties for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStyle {
    /// Drawer panel height
    pub height: f32,
    /// Drawer panel vertical translation (the offset itself)
    pub translate_y: f32,
    /// Header and score region opacity
    pub header_opacity: f32,
    /// Grip handle opacity
    pub handle_opacity: f32,
    /// Score bubble scale
    pub score_scale: f32,
    /// Score bubble vertical translation
    pub score_translate_y: f32,
}

/// Maps offsets to [`DerivedStyle`]s for one configuration
#[derive(Debug, Clone, Copy)]
pub struct StyleEvaluator {
    table: SnapTable,
    heights: [f32; 3],
    header_fade_end: f32,
    handle_fade_distance: f32,
    score_max_scale: f32,
    score_max_translate: f32,
}

impl StyleEvaluator {
    /// Build an evaluator for a configuration
    pub fn new(config: &DrawerConfig) -> Self {
        let table = SnapTable::from_config(config);
        let viewport = config.viewport_height;
        Self {
            table,
            heights: [
                viewport - config.header_height,
                viewport * config.heights.middle,
                viewport * config.heights.bottom,
            ],
            header_fade_end: table.middle() * config.header_fade_fraction,
            handle_fade_distance: config.handle_fade_distance,
            score_max_scale: config.score_max_scale,
            score_max_translate: config.score_max_translate,
        }
    }

    /// Drawer height, interpolated across the three snap points
    pub fn height(&self, offset: f32) -> f32 {
        let t = &self.table;
        interpolate(
            offset,
            &[t.top(), t.middle(), t.bottom()],
            &self.heights,
            Extrapolate::Clamp,
        )
    }

    /// Header opacity: 0 at `Top`, 1 from the fade end onwards
    pub fn header_opacity(&self, offset: f32) -> f32 {
        if self.header_fade_end <= self.table.top() {
            return 1.0;
        }
        lerp_clamped(offset, (self.table.top(), self.header_fade_end), (0.0, 1.0))
    }

    /// Grip handle opacity: only visible just before `Bottom`
    pub fn handle_opacity(&self, offset: f32) -> f32 {
        let bottom = self.table.bottom();
        if self.handle_fade_distance <= 0.0 {
            return if offset >= bottom { 1.0 } else { 0.0 };
        }
        lerp_clamped(offset, (bottom - self.handle_fade_distance, bottom), (0.0, 1.0))
    }

    /// Score bubble scale, growing from `Middle` to `Bottom`
    pub fn score_scale(&self, offset: f32) -> f32 {
        lerp_clamped(
            offset,
            (self.table.middle(), self.table.bottom()),
            (1.0, self.score_max_scale),
        )
    }

    /// Score bubble translation, growing from `Middle` to `Bottom`
    pub fn score_translate_y(&self, offset: f32) -> f32 {
        lerp_clamped(
            offset,
            (self.table.middle(), self.table.bottom()),
            (0.0, self.score_max_translate),
        )
    }

    /// Every derived property for `offset`
    pub fn evaluate(&self, offset: f32) -> DerivedStyle {
        DerivedStyle {
            height: self.height(offset),
            translate_y: offset,
            header_opacity: self.header_opacity(offset),
            handle_opacity: self.handle_opacity(offset),
            score_scale: self.score_scale(offset),
            score_translate_y: self.score_translate_y(offset),
        }
    }
}
