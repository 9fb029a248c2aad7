//! Home screen bottom drawer
//!
//! The drawer is a panel whose vertical offset is driven by pan gestures,
//! snap animations, and hand-offs from the scrollable content it hosts.
//! [`Drawer`] is the mediator: pan and scroll events go to it, it decides
//! which source owns the offset, and it reports scroll enablement back to
//! the [`ContentHost`].
//!
//! # Example
//!
//! ```rust
//! use app_ui::drawer::{ContentHost, Drawer, DrawerConfig, GestureSample, SnapPoint};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct List { scroll_enabled: bool }
//!
//! impl ContentHost for List {
//!     fn set_scroll_enabled(&mut self, enabled: bool) { self.scroll_enabled = enabled; }
//!     fn reset_scroll(&mut self) {}
//! }
//!
//! let mut drawer = Drawer::new(DrawerConfig::for_viewport(812.0), List::default()).unwrap();
//! drawer.pan_start();
//! drawer.pan_move(GestureSample::new(-200.0, -1500.0));
//! drawer.pan_end(GestureSample::new(-200.0, -1500.0));
//!
//! while drawer.advance(Duration::from_millis(16)).is_none() {}
//! assert_eq!(drawer.resting_point(), Some(SnapPoint::Top));
//! assert!(drawer.host().scroll_enabled);
//! ```

pub mod config;
pub mod coordinator;
pub mod gesture;
pub mod offset;
pub mod snap;
pub mod spring;
pub mod style;

use std::time::Duration;

use tracing::{debug, trace};

pub use config::{
    ConfigError, DrawerConfig, HandBackConfig, HeightFractions, SnapFractions, SpringConfig,
};
pub use coordinator::{HandBack, InteractionMode, ModeCoordinator, ScrollSample};
pub use gesture::{GestureController, GestureSample, Release};
pub use offset::{Driver, OffsetCell, WriterToken};
pub use snap::{SnapPoint, SnapTable};
pub use spring::SpringAnimation;
pub use style::{DerivedStyle, StyleEvaluator};

/// The scrollable list rendered inside the drawer
#[cfg_attr(test, mockall::automock)]
pub trait ContentHost {
    /// Allow or forbid the content from scrolling
    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Scroll the content back to its origin
    fn reset_scroll(&mut self);
}

/// A snap animation in flight
#[derive(Debug)]
struct ActiveSnap {
    target: SnapPoint,
    spring: SpringAnimation,
    token: WriterToken,
}

/// Drawer state for one mounted home screen
pub struct Drawer<H: ContentHost> {
    config: DrawerConfig,
    table: SnapTable,
    styles: StyleEvaluator,
    offset: OffsetCell,
    gesture: GestureController,
    mode: ModeCoordinator,
    snap: Option<ActiveSnap>,
    resting: Option<SnapPoint>,
    host: H,
}

impl<H: ContentHost> Drawer<H> {
    /// Mount a drawer at `Middle`
    pub fn new(config: DrawerConfig, mut host: H) -> config::Result<Self> {
        config.validate()?;

        let table = SnapTable::from_config(&config);
        let styles = StyleEvaluator::new(&config);
        let mode = ModeCoordinator::new(config.hand_back);
        host.set_scroll_enabled(false);

        debug!(
            viewport = config.viewport_height,
            top = table.top(),
            middle = table.middle(),
            bottom = table.bottom(),
            "Drawer mounted"
        );

        Ok(Self {
            offset: OffsetCell::new(table.middle()),
            gesture: GestureController::new(),
            snap: None,
            resting: Some(SnapPoint::Middle),
            config,
            table,
            styles,
            mode,
            host,
        })
    }

    /// Current offset
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Who currently writes the offset
    pub fn driver(&self) -> Driver {
        self.offset.driver()
    }

    /// Current interaction mode
    pub fn mode(&self) -> InteractionMode {
        self.mode.mode()
    }

    /// Snap table for this viewport
    pub fn snap_table(&self) -> &SnapTable {
        &self.table
    }

    /// Configuration the drawer was mounted with
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Target of the running snap animation
    pub fn animation_target(&self) -> Option<SnapPoint> {
        self.snap.as_ref().map(|s| s.target)
    }

    /// Snap point the drawer is resting on, if idle
    pub fn resting_point(&self) -> Option<SnapPoint> {
        self.resting
    }

    /// Derived styles for the current frame
    pub fn style(&self) -> DerivedStyle {
        self.styles.evaluate(self.offset.get())
    }

    /// Style evaluator for this configuration
    pub fn style_evaluator(&self) -> &StyleEvaluator {
        &self.styles
    }

    /// The hosted content
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The hosted content, mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // =========================================================================
    // Pan gesture
    // =========================================================================

    /// A pan gesture began. Cancels any running snap animation.
    pub fn pan_start(&mut self) {
        if !self.mode.accepts_pan() {
            debug!("Pan ignored while content is scrolling");
            return;
        }
        self.snap = None;
        self.resting = None;
        self.gesture.start(&mut self.offset);
    }

    /// A pan gesture moved
    pub fn pan_move(&mut self, sample: GestureSample) {
        if !sample.is_finite() {
            debug!(?sample, "Dropping non-finite pan sample");
            return;
        }
        self.gesture.update(&mut self.offset, &self.table, sample);
        trace!(offset = self.offset.get(), "Drawer dragged");
    }

    /// A pan gesture ended. Returns the chosen snap target.
    pub fn pan_end(&mut self, sample: GestureSample) -> Option<SnapPoint> {
        if !sample.is_finite() {
            debug!(?sample, "Non-finite pan release treated as a still release");
        }

        let release = self.gesture.end(
            &mut self.offset,
            &self.table,
            sample,
            self.config.fling_velocity,
        )?;
        self.animate_to(release.target, release.velocity);
        Some(release.target)
    }

    /// The pan gesture was cancelled by the platform.
    ///
    /// The drawer settles on whatever the position rule picks.
    pub fn pan_cancel(&mut self) {
        if !self.gesture.is_active() {
            return;
        }
        self.gesture.cancel(&mut self.offset);
        let target = self.table.select(self.offset.get(), 0.0, self.config.fling_velocity);
        self.animate_to(target, 0.0);
    }

    // =========================================================================
    // Content scroll
    // =========================================================================

    /// The content scrolled
    pub fn scroll(&mut self, sample: ScrollSample) {
        if !sample.is_finite() {
            debug!(?sample, "Dropping non-finite scroll sample");
            return;
        }
        self.mode.on_scroll(sample);
    }

    /// Whether the content is currently allowed to scroll
    pub fn scroll_enabled(&self) -> bool {
        self.mode.scroll_enabled()
    }

    /// The finger lifted from the content
    pub fn scroll_end_drag(&mut self, sample: ScrollSample) -> bool {
        if !sample.is_finite() {
            return false;
        }
        match self.mode.on_scroll_end_drag(sample) {
            Some(hand_back) => {
                self.hand_back(hand_back);
                true
            }
            None => false,
        }
    }

    /// Momentum scrolling ended
    pub fn momentum_end(&mut self, sample: ScrollSample) -> bool {
        if !sample.is_finite() {
            return false;
        }
        match self.mode.on_momentum_end(sample) {
            Some(hand_back) => {
                self.hand_back(hand_back);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Animate to a snap point without a gesture
    pub fn snap_to(&mut self, point: SnapPoint) {
        if self.gesture.is_active() {
            self.gesture.cancel(&mut self.offset);
        }
        self.animate_to(point, 0.0);
    }

    /// Advance the running animation by one frame.
    ///
    /// Returns the snap point on the frame the drawer comes to rest.
    pub fn advance(&mut self, dt: Duration) -> Option<SnapPoint> {
        let snap = self.snap.as_mut()?;

        if !self.offset.is_current(&snap.token) {
            // Superseded by a drag
            self.snap = None;
            return None;
        }

        let position = self.table.clamp_drag(snap.spring.advance(dt));
        self.offset.write(&snap.token, position);
        trace!(offset = position, target = ?snap.target, "Snap frame");

        if !snap.spring.is_settled() {
            return None;
        }

        let ActiveSnap { target, token, .. } = self.snap.take()?;
        self.offset.write(&token, self.table.offset(target));
        self.offset.release(&token);
        self.settle(target);
        Some(target)
    }

    fn animate_to(&mut self, target: SnapPoint, velocity: f32) {
        if target != SnapPoint::Top && self.mode.enter_dragging() {
            self.host.set_scroll_enabled(false);
        }

        let token = self.offset.claim(Driver::Animating);
        let spring = SpringAnimation::new(
            self.config.spring,
            self.offset.get(),
            self.table.offset(target),
            velocity,
        );
        debug!(target = ?target, from = self.offset.get(), velocity, "Snap animation started");

        self.resting = None;
        self.snap = Some(ActiveSnap { target, spring, token });
    }

    fn hand_back(&mut self, hand_back: HandBack) {
        self.host.set_scroll_enabled(false);
        self.animate_to(SnapPoint::Middle, hand_back.velocity());
    }

    fn settle(&mut self, target: SnapPoint) {
        self.resting = Some(target);
        match target {
            SnapPoint::Top => {
                if self.mode.enter_scrolling() {
                    self.host.set_scroll_enabled(true);
                }
            }
            SnapPoint::Middle | SnapPoint::Bottom => {
                if self.mode.enter_dragging() {
                    self.host.set_scroll_enabled(false);
                }
                self.mode.scroll_reset();
                self.host.reset_scroll();
            }
        }
        debug!(?target, mode = ?self.mode.mode(), "Drawer settled");
    }
}
