//! Single-writer cell for the drawer offset
//!
//! The offset has exactly one writer at a time: the active drag or the
//! active snap animation. Claiming the cell hands out a [`WriterToken`] and
//! invalidates every token handed out before it, so a superseded animation
//! can no longer move the drawer.

use tracing::trace;

/// Who currently owns the offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Driver {
    /// Nobody; the offset is at rest
    #[default]
    Idle,
    /// A pan gesture
    Dragging,
    /// A snap animation
    Animating,
}

/// Proof of write access, valid until the next claim or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterToken {
    generation: u64,
    driver: Driver,
}

impl WriterToken {
    /// The driver this token was issued to
    pub fn driver(&self) -> Driver {
        self.driver
    }
}

/// The shared drawer offset
#[derive(Debug, Clone)]
pub struct OffsetCell {
    value: f32,
    driver: Driver,
    generation: u64,
}

impl OffsetCell {
    /// Create an idle cell at `value`
    pub fn new(value: f32) -> Self {
        Self { value, driver: Driver::Idle, generation: 0 }
    }

    /// Current offset
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Current driver
    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Take ownership for `driver`, cancelling the previous writer
    pub fn claim(&mut self, driver: Driver) -> WriterToken {
        debug_assert!(driver != Driver::Idle);
        self.generation += 1;
        self.driver = driver;
        trace!(?driver, generation = self.generation, "Offset claimed");
        WriterToken { generation: self.generation, driver }
    }

    /// Whether `token` is still the active writer
    pub fn is_current(&self, token: &WriterToken) -> bool {
        token.generation == self.generation && token.driver == self.driver
    }

    /// Write `value` if `token` is the active writer.
    ///
    /// Returns `false` and leaves the offset untouched otherwise.
    pub fn write(&mut self, token: &WriterToken, value: f32) -> bool {
        if !self.is_current(token) {
            trace!(
                ?token,
                active = ?self.driver,
                "Rejected write from stale offset writer"
            );
            return false;
        }
        self.value = value;
        true
    }

    /// Give up ownership; later writes with `token` are rejected
    pub fn release(&mut self, token: &WriterToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.generation += 1;
        self.driver = Driver::Idle;
        true
    }
}
