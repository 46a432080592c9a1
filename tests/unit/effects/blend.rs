use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct Recorder {
    frames: RefCell<Vec<BlendFrame>>,
}

impl BlendTargets for Recorder {
    fn apply(&self, frame: &BlendFrame) {
        self.frames.borrow_mut().push(*frame);
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[test]
fn opacities_follow_power_curve_across_range() {
    let height = 2400.0;
    let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, height);
    for step in 0..=48 {
        let offset = height * f64::from(step) / 48.0;
        engine.on_scroll(offset);
        let frame = engine.on_frame().unwrap();
        let expected = (offset / height).powf(1.1);
        assert_eq!(round3(frame.gamma), round3(expected));
        assert_eq!(round3(frame.sunset.opacity), round3(expected));
        assert_eq!(round3(frame.sunrise.opacity), round3(1.0 - expected));
        assert_eq!(frame.sunrise.opacity, 1.0 - frame.gamma);
        assert_eq!(frame.sunset.opacity, frame.gamma);
    }
}

#[test]
fn offsets_and_tint_scale_with_gamma() {
    let frame = frame_for_gamma(&BlendConfig::default(), 0.5);
    assert_eq!(frame.sunrise.offset_y, -4.0);
    assert_eq!(frame.sunset.offset_y, -6.0);
    assert!((frame.tint_opacity - (0.08 + 0.5 * 0.18)).abs() < 1e-12);

    let top = frame_for_gamma(&BlendConfig::default(), 0.0);
    assert_eq!(top.tint_opacity_css(), "0.080");
    let bottom = frame_for_gamma(&BlendConfig::default(), 1.0);
    assert_eq!(bottom.tint_opacity_css(), "0.260");
}

#[test]
fn scrolling_past_the_end_clamps_to_one() {
    let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, 1000.0);
    engine.on_scroll(1500.0);
    let frame = engine.on_frame().unwrap();
    assert_eq!(frame.gamma, 1.0);
    assert_eq!(frame.sunrise.opacity, 0.0);
    assert_eq!(frame.sunset.opacity, 1.0);
}

#[test]
fn scrolling_above_the_top_clamps_to_zero() {
    let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, 1000.0);
    for offset in [0.0, -25.0] {
        engine.on_scroll(offset);
        let frame = engine.on_frame().unwrap();
        assert_eq!(frame.gamma, 0.0);
        assert_eq!(frame.sunrise.opacity, 1.0);
        assert_eq!(frame.sunset.opacity, 0.0);
        assert_eq!(frame.sunrise.transform_css(), "translate3d(0, 0.00px, 0)");
    }
}

#[test]
fn degenerate_height_writes_nothing_and_clears_pending() {
    let targets = Recorder::default();
    for height in [0.0, -300.0] {
        let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, height);
        assert!(engine.prime().is_none());
        assert!(engine.on_scroll(120.0));
        assert!(!engine.flush(&targets));
        assert!(!engine.cache().frame.is_pending());
        assert_eq!(engine.recomputes(), 0);
    }
    assert!(targets.frames.borrow().is_empty());
}

#[test]
fn scroll_bursts_coalesce_into_one_recompute_with_last_offset() {
    let targets = Recorder::default();
    let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, 1000.0);

    let scheduled: Vec<bool> = [100.0, 220.0, 310.0, 450.0, 500.0]
        .into_iter()
        .map(|offset| engine.on_scroll(offset))
        .collect();
    assert_eq!(scheduled, vec![true, false, false, false, false]);

    assert!(engine.flush(&targets));
    assert_eq!(engine.recomputes(), 1);
    let frames = targets.frames.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].gamma, 0.5f64.powf(1.1));
}

#[test]
fn scroll_after_flush_schedules_again() {
    let mut engine = BlendEngine::new(BlendConfig::default(), 0.0, 1000.0);
    assert!(engine.on_scroll(10.0));
    engine.on_frame();
    assert!(engine.on_scroll(20.0));
}

#[test]
fn resize_updates_height_without_scheduling() {
    let mut engine = BlendEngine::new(BlendConfig::default(), 500.0, 0.0);
    assert!(engine.prime().is_none());
    engine.on_resize(1000.0);
    assert!(!engine.cache().frame.is_pending());
    assert!(engine.on_scroll(500.0));
    let frame = engine.on_frame().unwrap();
    assert_eq!(frame.gamma, 0.5f64.powf(1.1));
}

#[test]
fn prime_reflects_initial_scroll_position() {
    let mut engine = BlendEngine::new(BlendConfig::default(), 1000.0, 1000.0);
    let frame = engine.prime().unwrap();
    assert_eq!(frame.gamma, 1.0);
    assert_eq!(frame.sunrise.opacity_css(), "0.000");
    assert_eq!(frame.sunset.transform_css(), "translate3d(0, -12.00px, 0)");
    assert_eq!(engine.recomputes(), 1);
}
