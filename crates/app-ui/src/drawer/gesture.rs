//! Pan-gesture handling for the drawer

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::offset::{Driver, OffsetCell, WriterToken};
use super::snap::{SnapPoint, SnapTable};

/// One pan-gesture frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureSample {
    /// Vertical translation since the gesture started (px, down is positive)
    pub translation_y: f32,
    /// Vertical velocity (px/s, down is positive)
    pub velocity_y: f32,
}

impl GestureSample {
    /// Create a sample
    pub fn new(translation_y: f32, velocity_y: f32) -> Self {
        Self { translation_y, velocity_y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.translation_y.is_finite() && self.velocity_y.is_finite()
    }
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Where the drawer should settle
    pub target: SnapPoint,
    /// Offset at release
    pub offset: f32,
    /// Release velocity, unclamped
    pub velocity: f32,
}

/// Translates pan input into offset writes and a snap decision
#[derive(Debug, Default)]
pub struct GestureController {
    start_offset: f32,
    token: Option<WriterToken>,
}

impl GestureController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Begin a drag: take the offset away from any running animation
    pub fn start(&mut self, cell: &mut OffsetCell) {
        self.token = Some(cell.claim(Driver::Dragging));
        self.start_offset = cell.get();
        debug!(start_offset = self.start_offset, "Drawer drag started");
    }

    /// Follow the finger, clamped to the draggable range
    pub fn update(&mut self, cell: &mut OffsetCell, table: &SnapTable, sample: GestureSample) {
        let Some(token) = self.token else {
            return;
        };
        let candidate = table.clamp_drag(self.start_offset + sample.translation_y);
        if !cell.write(&token, candidate) {
            // Someone else claimed the offset mid-drag
            self.token = None;
        }
    }

    /// Finish the drag and choose where to settle.
    ///
    /// Returns `None` if no drag was active.
    pub fn end(
        &mut self,
        cell: &mut OffsetCell,
        table: &SnapTable,
        sample: GestureSample,
        fling_velocity: f32,
    ) -> Option<Release> {
        // A corrupt release keeps the last good position
        if sample.is_finite() {
            self.update(cell, table, sample);
        }
        let token = self.token.take()?;
        cell.release(&token);

        let offset = cell.get();
        let velocity = if sample.velocity_y.is_finite() { sample.velocity_y } else { 0.0 };
        let target = table.select(offset, velocity, fling_velocity);
        debug!(offset, velocity, ?target, "Drawer drag released");

        Some(Release { target, offset, velocity })
    }

    /// Abandon the drag without choosing a target
    pub fn cancel(&mut self, cell: &mut OffsetCell) {
        if let Some(token) = self.token.take() {
            cell.release(&token);
        }
    }
}
