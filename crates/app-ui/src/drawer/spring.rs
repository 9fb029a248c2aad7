//! Damped spring used for snap animations
//!
//! Integrates `m·a = -k·(x - target) - c·v` with semi-implicit Euler in
//! fixed substeps so the result does not depend on the host frame rate.

use std::time::Duration;

use super::config::SpringConfig;

/// Integration substep in seconds
const SUBSTEP: f32 = 1.0 / 240.0;

/// A running spring toward a fixed target
#[derive(Debug, Clone)]
pub struct SpringAnimation {
    config: SpringConfig,
    target: f32,
    position: f32,
    velocity: f32,
    start_side: f32,
    settled: bool,
}

impl SpringAnimation {
    /// Start a spring at `from` heading to `target`.
    ///
    /// `initial_velocity` is clamped to the magnitude of the configured maximum.
    pub fn new(config: SpringConfig, from: f32, target: f32, initial_velocity: f32) -> Self {
        let max = config.max_initial_velocity.abs();
        let velocity = if initial_velocity.is_finite() {
            initial_velocity.max(-max).min(max)
        } else {
            0.0
        };

        let mut spring = Self {
            config,
            target,
            position: from,
            velocity,
            start_side: (from - target).signum(),
            settled: false,
        };
        spring.settled = spring.at_rest();
        if spring.settled {
            spring.position = target;
            spring.velocity = 0.0;
        }
        spring
    }

    /// Target offset
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current position
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether the spring has come to rest on its target
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` and return the new position
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if self.settled {
            return self.position;
        }

        let SpringConfig { damping, stiffness, mass, .. } = self.config;
        let mut remaining = dt.as_secs_f32();

        while remaining > 0.0 {
            let step = remaining.min(SUBSTEP);
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;

            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;

            if self.config.overshoot_clamping && self.crossed_target() {
                self.finish();
                break;
            }
            if self.at_rest() {
                self.finish();
                break;
            }
        }

        self.position
    }

    fn crossed_target(&self) -> bool {
        self.start_side != 0.0 && (self.position - self.target).signum() == -self.start_side
    }

    fn at_rest(&self) -> bool {
        self.velocity.abs() < self.config.rest_speed
            && (self.position - self.target).abs() < self.config.rest_displacement
    }

    fn finish(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}
