//! Scroll/drag mode coordination
//!
//! Only one input source moves the drawer at a time. While the drawer is
//! pinned at `Top` the content list scrolls on its own; dragging the list
//! down past its top edge hands vertical motion back to the drawer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::HandBackConfig;

/// Which input source owns vertical motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// The pan gesture moves the drawer; content scrolling is off
    #[default]
    Dragging,
    /// The content scrolls; the drawer is pinned at `Top`
    ScrollingContent,
}

/// One content-scroll frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSample {
    /// Content offset (px); negative while pulled past the top edge
    pub content_offset_y: f32,
    /// Finger velocity (px/s, pulling down is positive)
    pub velocity_y: f32,
}

impl ScrollSample {
    /// Create a sample
    pub fn new(content_offset_y: f32, velocity_y: f32) -> Self {
        Self { content_offset_y, velocity_y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.content_offset_y.is_finite() && self.velocity_y.is_finite()
    }
}

/// Why the content handed motion back to the drawer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandBack {
    /// The finger lifted at the top edge while moving down
    DragEnd {
        /// Release velocity
        velocity: f32,
    },
    /// Momentum scrolling came to rest at the top edge
    MomentumEnd,
}

impl HandBack {
    /// Velocity to seed the drawer animation with
    pub fn velocity(&self) -> f32 {
        match self {
            Self::DragEnd { velocity } => *velocity,
            Self::MomentumEnd => 0.0,
        }
    }
}

/// Owns the interaction mode and decides hand-offs
#[derive(Debug, Clone)]
pub struct ModeCoordinator {
    mode: InteractionMode,
    scroll_y: f32,
    thresholds: HandBackConfig,
}

impl ModeCoordinator {
    /// Create a coordinator in `Dragging` mode
    pub fn new(thresholds: HandBackConfig) -> Self {
        Self { mode: InteractionMode::Dragging, scroll_y: 0.0, thresholds }
    }

    /// Current mode
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether the pan gesture may move the drawer
    pub fn accepts_pan(&self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    /// Whether the content may scroll
    pub fn scroll_enabled(&self) -> bool {
        self.mode == InteractionMode::ScrollingContent
    }

    /// Last scroll position seen while scrolling content
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Switch to content scrolling. Returns whether the mode changed.
    pub fn enter_scrolling(&mut self) -> bool {
        self.transition(InteractionMode::ScrollingContent)
    }

    /// Switch to drawer dragging. Returns whether the mode changed.
    pub fn enter_dragging(&mut self) -> bool {
        self.transition(InteractionMode::Dragging)
    }

    /// Content was scrolled back to its origin
    pub fn scroll_reset(&mut self) {
        self.scroll_y = 0.0;
    }

    /// Record a scroll frame. Returns `false` if the event was stale.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> bool {
        if !self.scroll_enabled() {
            debug!(offset = sample.content_offset_y, "Ignoring scroll outside content mode");
            return false;
        }
        self.scroll_y = sample.content_offset_y;
        true
    }

    /// The finger lifted from the content
    pub fn on_scroll_end_drag(&mut self, sample: ScrollSample) -> Option<HandBack> {
        if !self.on_scroll(sample) {
            return None;
        }
        let at_top = sample.content_offset_y <= 0.0;
        let pulling_down = sample.velocity_y > self.thresholds.drag_velocity;
        if at_top && pulling_down {
            self.hand_back(HandBack::DragEnd { velocity: sample.velocity_y })
        } else {
            None
        }
    }

    /// Momentum scrolling stopped
    pub fn on_momentum_end(&mut self, sample: ScrollSample) -> Option<HandBack> {
        if !self.on_scroll(sample) {
            return None;
        }
        let y = sample.content_offset_y;
        // Only a few px of overscroll count as resting at the edge
        if y > -self.thresholds.momentum_window && y <= 0.0 {
            self.hand_back(HandBack::MomentumEnd)
        } else {
            None
        }
    }

    fn hand_back(&mut self, reason: HandBack) -> Option<HandBack> {
        self.enter_dragging();
        debug!(?reason, "Content handed motion back to the drawer");
        Some(reason)
    }

    fn transition(&mut self, to: InteractionMode) -> bool {
        if self.mode == to {
            return false;
        }
        info!(from = ?self.mode, ?to, "Drawer interaction mode changed");
        self.mode = to;
        true
    }
}

impl Default for ModeCoordinator {
    fn default() -> Self {
        Self::new(HandBackConfig::default())
    }
}
