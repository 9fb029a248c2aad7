//! Credit score bubble
//!
//! The bubble is a vector animation whose fill is driven by a numeric input
//! on an external engine. The engine may not be ready when the score first
//! arrives, so input updates are best effort: a failed update is retried
//! once after a short delay and then dropped. The numeric overlay is a
//! plain [`ScoreCounter`] and never waits on the engine.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors reported by the animation engine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// The engine has not finished loading the animation
    #[error("animation engine is not ready")]
    NotReady,

    /// The state machine has no input with this name
    #[error("animation input not found: {0}")]
    MissingInput(String),

    /// The engine refused the value
    #[error("animation engine rejected {input}: {reason}")]
    Rejected {
        /// Input name
        input: String,
        /// Engine-provided reason
        reason: String,
    },
}

/// Result type for engine calls
pub type Result<T> = std::result::Result<T, EngineError>;

/// The vector-animation engine rendering the bubble
#[cfg_attr(test, mockall::automock)]
pub trait AnimationEngine: Send + Sync {
    /// Set a numeric state-machine input
    fn set_number_input(&self, input: &str, value: f32) -> Result<()>;
}

/// Score bubble settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreBubbleConfig {
    /// State-machine input that receives the fill level
    pub input_name: String,
    /// Lowest possible score
    pub min_score: u16,
    /// Highest possible score
    pub max_score: u16,
    /// Delay before the single retry (ms)
    pub retry_delay_ms: u64,
    /// Length of the numeric count-up (ms)
    pub count_duration_ms: u64,
}

impl Default for ScoreBubbleConfig {
    fn default() -> Self {
        Self {
            input_name: "score".to_string(),
            min_score: 300,
            max_score: 850,
            retry_delay_ms: 500,
            count_duration_ms: 1500,
        }
    }
}

impl ScoreBubbleConfig {
    /// Fill level (0 to 100) for a score
    pub fn engine_value(&self, score: u16) -> f32 {
        let span = self.max_score.saturating_sub(self.min_score);
        if span == 0 {
            return 100.0;
        }
        let clamped = score.clamp(self.min_score, self.max_score);
        f32::from(clamped - self.min_score) / f32::from(span) * 100.0
    }

    /// Retry delay
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Count-up duration
    pub fn count_duration(&self) -> Duration {
        Duration::from_millis(self.count_duration_ms)
    }
}

/// What happened to an input update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The engine accepted the value
    Applied,
    /// The engine failed; one retry is pending
    RetryScheduled,
    /// The engine failed and no retry could be scheduled
    Dropped,
}

// =============================================================================
// Score Counter
// =============================================================================

/// Ease-out count from zero to the score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCounter {
    target: u16,
    duration: Duration,
    elapsed: Duration,
}

impl ScoreCounter {
    /// Start counting toward `target`
    pub fn new(target: u16, duration: Duration) -> Self {
        Self { target, duration, elapsed: Duration::ZERO }
    }

    /// Advance the count and return the value to display
    pub fn advance(&mut self, dt: Duration) -> u16 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Value to display
    pub fn value(&self) -> u16 {
        if self.is_finished() {
            return self.target;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        (f32::from(self.target) * eased).round() as u16
    }

    /// Whether the count reached the target
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Final value
    pub fn target(&self) -> u16 {
        self.target
    }
}

// =============================================================================
// Score Bubble
// =============================================================================

/// Drives the bubble animation and the numeric overlay
pub struct ScoreBubble<E: AnimationEngine + 'static> {
    engine: Arc<E>,
    config: ScoreBubbleConfig,
    /// Value the engine should end up showing, until it accepts it
    pending: Arc<Mutex<Option<f32>>>,
    counter: ScoreCounter,
}

impl<E: AnimationEngine + 'static> ScoreBubble<E> {
    /// Create a bubble showing zero
    pub fn new(engine: E, config: ScoreBubbleConfig) -> Self {
        let counter = ScoreCounter::new(0, config.count_duration());
        Self {
            engine: Arc::new(engine),
            config,
            pending: Arc::new(Mutex::new(None)),
            counter,
        }
    }

    /// Show a new score.
    ///
    /// The overlay count restarts regardless of the engine outcome.
    pub fn set_score(&mut self, score: u16) -> InputOutcome {
        self.counter = ScoreCounter::new(score, self.config.count_duration());

        let value = self.config.engine_value(score);
        *self.pending.lock() = Some(value);

        match self.engine.set_number_input(&self.config.input_name, value) {
            Ok(()) => {
                self.pending.lock().take();
                debug!(score, value, "Score bubble updated");
                InputOutcome::Applied
            }
            Err(err) => {
                warn!(%err, score, value, "Score bubble update failed, retrying once");
                self.schedule_retry(value)
            }
        }
    }

    fn schedule_retry(&self, value: f32) -> InputOutcome {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(value, "No async runtime, score bubble retry skipped");
            self.pending.lock().take();
            return InputOutcome::Dropped;
        };

        let engine = Arc::clone(&self.engine);
        let pending = Arc::clone(&self.pending);
        let input = self.config.input_name.clone();
        let delay = self.config.retry_delay();

        handle.spawn(async move {
            tokio::time::sleep(delay).await;

            if *pending.lock() != Some(value) {
                debug!(value, "Score bubble retry superseded");
                return;
            }

            match engine.set_number_input(&input, value) {
                Ok(()) => {
                    pending.lock().take();
                    debug!(value, "Score bubble updated on retry");
                }
                Err(err) => {
                    pending.lock().take();
                    error!(%err, value, "Score bubble update dropped");
                }
            }
        });

        InputOutcome::RetryScheduled
    }

    /// Advance the numeric overlay
    pub fn advance(&mut self, dt: Duration) -> u16 {
        self.counter.advance(dt)
    }

    /// Score currently shown by the overlay
    pub fn displayed_score(&self) -> u16 {
        self.counter.value()
    }

    /// Whether an engine update is still outstanding
    pub fn has_pending_update(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Settings in use
    pub fn config(&self) -> &ScoreBubbleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    fn bubble(engine: MockAnimationEngine) -> ScoreBubble<MockAnimationEngine> {
        ScoreBubble::new(engine, ScoreBubbleConfig::default())
    }

    // ==========================================================================
    // Engine Value Tests
    // ==========================================================================

    #[test]
    fn test_engine_value_range() {
        let config = ScoreBubbleConfig::default();
        assert_eq!(config.engine_value(300), 0.0);
        assert_eq!(config.engine_value(850), 100.0);
        assert!((config.engine_value(575) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_engine_value_clamps() {
        let config = ScoreBubbleConfig::default();
        assert_eq!(config.engine_value(120), 0.0);
        assert_eq!(config.engine_value(900), 100.0);
    }

    #[test]
    fn test_config_from_json() {
        let config: ScoreBubbleConfig = serde_json::from_str(r#"{"retryDelayMs": 250}"#).unwrap();
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
        assert_eq!(config.input_name, "score");
    }

    // ==========================================================================
    // Engine Update Tests
    // ==========================================================================

    #[test]
    fn test_update_applied() {
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .withf(|input, value| input == "score" && (*value - 50.0).abs() < 1e-3)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut bubble = bubble(engine);
        assert_eq!(bubble.set_score(575), InputOutcome::Applied);
        assert!(!bubble.has_pending_update());
    }

    #[test]
    fn test_failure_without_runtime_is_dropped() {
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .times(1)
            .returning(|_, _| Err(EngineError::NotReady));

        let mut bubble = bubble(engine);
        assert_eq!(bubble.set_score(700), InputOutcome::Dropped);
        assert!(!bubble.has_pending_update());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_delay() {
        let mut seq = Sequence::new();
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(EngineError::NotReady));
        engine
            .expect_set_number_input()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut bubble = bubble(engine);
        assert_eq!(bubble.set_score(700), InputOutcome::RetryScheduled);
        assert!(bubble.has_pending_update());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(bubble.has_pending_update());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!bubble.has_pending_update());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_only_once() {
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .times(2)
            .returning(|input, _| Err(EngineError::MissingInput(input.to_string())));

        let mut bubble = bubble(engine);
        assert_eq!(bubble.set_score(700), InputOutcome::RetryScheduled);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!bubble.has_pending_update());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_score_supersedes_retry() {
        let mut seq = Sequence::new();
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(EngineError::NotReady));
        engine
            .expect_set_number_input()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut bubble = bubble(engine);
        bubble.set_score(600);
        assert_eq!(bubble.set_score(800), InputOutcome::Applied);

        // The stale retry must not reach the engine
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!bubble.has_pending_update());
    }

    // ==========================================================================
    // Counter Tests
    // ==========================================================================

    #[test]
    fn test_counter_eases_out() {
        let mut counter = ScoreCounter::new(800, Duration::from_millis(1000));
        assert_eq!(counter.value(), 0);

        let halfway = counter.advance(Duration::from_millis(500));
        assert_eq!(halfway, 700);

        assert_eq!(counter.advance(Duration::from_millis(600)), 800);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_counter_zero_duration() {
        let counter = ScoreCounter::new(720, Duration::ZERO);
        assert_eq!(counter.value(), 720);
    }

    #[test]
    fn test_overlay_counts_without_engine() {
        let mut engine = MockAnimationEngine::new();
        engine
            .expect_set_number_input()
            .returning(|_, _| Err(EngineError::NotReady));

        let mut bubble = bubble(engine);
        bubble.set_score(742);

        let mut shown = 0;
        for _ in 0..120 {
            shown = bubble.advance(Duration::from_millis(16));
        }
        assert_eq!(shown, 742);
        assert_eq!(bubble.displayed_score(), 742);
    }
}
