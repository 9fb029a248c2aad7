//! Home Screen Drawer Integration Tests
//!
//! End-to-end tests driving the drawer with full gesture and scroll
//! sequences, plus the score bubble and typography the screen renders.

use app_ui::drawer::{
    ContentHost, Drawer, DrawerConfig, Driver, GestureSample, InteractionMode, ScrollSample,
    SnapPoint,
};
use app_ui::responsive::{ScaleContext, Viewport};
use app_ui::score_bubble::{
    AnimationEngine, EngineError, InputOutcome, ScoreBubble, ScoreBubbleConfig,
};
use app_ui::typography::{Typography, TypographyVariant};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

/// Content list that records what the drawer told it
#[derive(Debug, Default)]
struct RecordingList {
    scroll_enabled: bool,
    toggles: Vec<bool>,
    resets: usize,
}

impl ContentHost for RecordingList {
    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        self.toggles.push(enabled);
    }

    fn reset_scroll(&mut self) {
        self.resets += 1;
    }
}

fn mount() -> Drawer<RecordingList> {
    Drawer::new(DrawerConfig::for_viewport(812.0), RecordingList::default()).unwrap()
}

fn run_until_settled(drawer: &mut Drawer<RecordingList>) -> SnapPoint {
    for _ in 0..1200 {
        if let Some(point) = drawer.advance(FRAME) {
            return point;
        }
    }
    panic!("drawer never settled at offset {}", drawer.offset());
}

fn drag(drawer: &mut Drawer<RecordingList>, path: &[f32], release_velocity: f32) -> Option<SnapPoint> {
    drawer.pan_start();
    for translation in path {
        drawer.pan_move(GestureSample::new(*translation, release_velocity));
    }
    let last = path.last().copied().unwrap_or(0.0);
    drawer.pan_end(GestureSample::new(last, release_velocity))
}

/// Test the full expand, scroll, and hand-back cycle
#[test]
fn test_expand_scroll_and_hand_back() {
    let mut drawer = mount();
    assert!(!drawer.host().scroll_enabled);

    // Flick up from the middle
    assert_eq!(drag(&mut drawer, &[-20.0, -60.0, -90.0], -1500.0), Some(SnapPoint::Top));
    assert_eq!(run_until_settled(&mut drawer), SnapPoint::Top);
    assert_eq!(drawer.mode(), InteractionMode::ScrollingContent);
    assert!(drawer.host().scroll_enabled);

    // Pans are ignored while the list owns vertical motion
    drawer.pan_start();
    drawer.pan_move(GestureSample::new(150.0, 600.0));
    assert_eq!(drawer.offset(), 0.0);

    // Scroll the list down and back up past its top edge
    drawer.scroll(ScrollSample::new(240.0, -800.0));
    drawer.scroll(ScrollSample::new(60.0, 400.0));
    assert!(!drawer.scroll_end_drag(ScrollSample::new(60.0, 400.0)));
    drawer.scroll(ScrollSample::new(-3.0, 120.0));
    assert!(drawer.scroll_end_drag(ScrollSample::new(-3.0, 120.0)));

    assert_eq!(drawer.mode(), InteractionMode::Dragging);
    assert!(!drawer.host().scroll_enabled);
    assert_eq!(run_until_settled(&mut drawer), SnapPoint::Middle);
    assert_eq!(drawer.host().resets, 1);
    assert_eq!(drawer.host().toggles, vec![false, true, false]);
}

/// Test the 812pt reference scenario
#[test]
fn test_reference_viewport_scenario() {
    let mut drawer = mount();
    let table = *drawer.snap_table();
    assert!((table.middle() - 276.08).abs() < 1e-3);
    assert!((table.bottom() - 592.76).abs() < 1e-3);

    let to_300 = 300.0 - drawer.offset();
    assert_eq!(drag(&mut drawer, &[to_300], -50.0), Some(SnapPoint::Middle));
    assert_eq!(run_until_settled(&mut drawer), SnapPoint::Middle);
    assert!((drawer.offset() - table.middle()).abs() < 1e-4);
}

/// Test that the offset stays in range through a long gesture session
#[test]
fn test_offset_bounds_over_session() {
    let mut drawer = mount();
    let max = drawer.snap_table().max_drag();

    // Deterministic zig-zag gestures with alternating releases
    let mut seed = 7u32;
    for round in 0..12 {
        let mut path = Vec::new();
        let mut translation = 0.0;
        for _ in 0..20 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            translation += ((seed >> 16) % 161) as f32 - 80.0;
            path.push(translation);
        }

        let velocity = if round % 3 == 0 { 2000.0 } else if round % 3 == 1 { -2000.0 } else { 0.0 };
        drawer.pan_start();
        for t in &path {
            drawer.pan_move(GestureSample::new(*t, velocity));
            assert!(drawer.offset() >= 0.0 && drawer.offset() <= max + 1e-3);
        }
        drawer.pan_end(GestureSample::new(translation, velocity));

        // Interrupt half of the animations with the next drag
        let frames = if round % 2 == 0 { 8 } else { 1200 };
        for _ in 0..frames {
            drawer.advance(FRAME);
            assert!(drawer.offset() >= 0.0 && drawer.offset() <= max + 1e-3);
        }

        // Reopen the drawer for dragging if it ended up scrolling content
        if drawer.mode() == InteractionMode::ScrollingContent {
            drawer.momentum_end(ScrollSample::new(0.0, 0.0));
            run_until_settled(&mut drawer);
        }
    }
}

/// Test that a new drag takes ownership away from a running snap
#[test]
fn test_drag_interrupts_snap() {
    let mut drawer = mount();
    drag(&mut drawer, &[40.0], 1500.0);
    for _ in 0..5 {
        drawer.advance(FRAME);
    }
    assert_eq!(drawer.driver(), Driver::Animating);

    drawer.pan_start();
    assert_eq!(drawer.driver(), Driver::Dragging);
    let held = drawer.offset();
    for _ in 0..10 {
        assert_eq!(drawer.advance(FRAME), None);
    }
    assert_eq!(drawer.offset(), held);

    drawer.pan_end(GestureSample::new(0.0, 0.0));
    assert_eq!(drawer.driver(), Driver::Animating);
    run_until_settled(&mut drawer);
    assert_eq!(drawer.driver(), Driver::Idle);
}

/// Test mounting from a JSON configuration
#[test]
fn test_mount_from_json_config() {
    let config = DrawerConfig::from_json(
        r#"{"viewportHeight": 896, "headerHeight": 100, "snap": {"middle": 0.3}}"#,
    )
    .unwrap();
    let mut drawer = Drawer::new(config, RecordingList::default()).unwrap();

    assert!((drawer.offset() - 896.0 * 0.3).abs() < 1e-3);

    drawer.snap_to(SnapPoint::Top);
    run_until_settled(&mut drawer);
    let style = drawer.style();
    assert!((style.height - 796.0).abs() < 1e-3);
    assert_eq!(style.header_opacity, 0.0);
}

/// Test derived styles at each resting position
#[test]
fn test_styles_at_rest_positions() {
    let mut drawer = mount();

    let middle = drawer.style();
    assert!((middle.height - 609.0).abs() < 1e-3);
    assert_eq!(middle.header_opacity, 1.0);
    assert_eq!(middle.score_scale, 1.0);

    drawer.snap_to(SnapPoint::Bottom);
    run_until_settled(&mut drawer);
    let bottom = drawer.style();
    assert!((bottom.height - 812.0 * 0.35).abs() < 1e-3);
    assert_eq!(bottom.handle_opacity, 1.0);
    assert!((bottom.score_scale - 1.18).abs() < 1e-3);
    assert!((bottom.score_translate_y - 20.0).abs() < 1e-3);
}

// =============================================================================
// Score Bubble
// =============================================================================

/// Engine state shared with the test
#[derive(Default)]
struct EngineState {
    ready: AtomicBool,
    calls: AtomicUsize,
    last_value: Mutex<Option<f32>>,
}

/// Engine that finishes loading right after the first attempt
struct WarmingEngine(Arc<EngineState>);

impl AnimationEngine for WarmingEngine {
    fn set_number_input(&self, _input: &str, value: f32) -> Result<(), EngineError> {
        let state = &self.0;
        if state.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            state.ready.store(true, Ordering::SeqCst);
            return Err(EngineError::NotReady);
        }
        if !state.ready.load(Ordering::SeqCst) {
            return Err(EngineError::NotReady);
        }
        *state.last_value.lock().unwrap() = Some(value);
        Ok(())
    }
}

/// Test that the bubble reaches the engine once it finishes loading
#[tokio::test(start_paused = true)]
async fn test_score_bubble_retries_until_engine_ready() {
    let state = Arc::new(EngineState::default());
    let mut bubble = ScoreBubble::new(WarmingEngine(Arc::clone(&state)), ScoreBubbleConfig::default());

    assert_eq!(bubble.set_score(740), InputOutcome::RetryScheduled);
    assert_eq!(*state.last_value.lock().unwrap(), None);

    // The overlay counts up regardless
    for _ in 0..100 {
        bubble.advance(FRAME);
    }
    assert_eq!(bubble.displayed_score(), 740);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(state.calls.load(Ordering::SeqCst), 2);
    let applied = state.last_value.lock().unwrap().unwrap();
    assert!((applied - 80.0).abs() < 1e-3);
    assert!(!bubble.has_pending_update());
}

// =============================================================================
// Typography
// =============================================================================

/// Test that typography follows the device and font scale
#[test]
fn test_typography_for_device() {
    let phone = ScaleContext::new(Viewport::new(375.0, 812.0)).with_font_scale(1.0);
    let tablet = ScaleContext::new(Viewport::new(1024.0, 1366.0)).with_font_scale(1.0);

    let phone_typo = Typography::new(phone);
    let tablet_typo = Typography::new(tablet);

    assert_eq!(phone_typo.get(TypographyVariant::B1).font_size, 16.0);
    assert_eq!(tablet_typo.get(TypographyVariant::B1).font_size, 19.0);
    assert_eq!(
        phone_typo.get(TypographyVariant::B1).font_family,
        tablet_typo.get(TypographyVariant::B1).font_family
    );
}
