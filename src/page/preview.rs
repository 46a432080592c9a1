//! Offline previews of the page effects, driven by [`VirtualClock`].
//!
//! Used by the `sunfade` CLI to inspect timings and the blend curve without a
//! browser.

use std::{cell::RefCell, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture, join};

use crate::{
    config::SunfadeConfig,
    effects::{
        blend::{BlendEngine, BlendFrame},
        intro::{IntroSequence, IntroTargets},
        loader::{GateOutcome, ImageOutcome, LoaderGate, Overlay},
    },
    foundation::core::Millis,
    schedule::virtual_clock::VirtualClock,
};

/// When (and how) a simulated background image settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageTiming {
    Settles { at: Millis, outcome: ImageOutcome },
    Never,
}

impl std::str::FromStr for ImageTiming {
    type Err = String;

    /// Accepts `never`, `<ms>` (loads) or `<ms>!` (fails).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("never") {
            return Ok(Self::Never);
        }
        let (digits, outcome) = match s.strip_suffix('!') {
            Some(rest) => (rest, ImageOutcome::Failed),
            None => (s, ImageOutcome::Loaded),
        };
        let ms: u32 = digits
            .parse()
            .map_err(|_| format!("invalid image timing '{s}' (expected <ms>, <ms>! or never)"))?;
        Ok(Self::Settles {
            at: Millis(ms),
            outcome,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PreviewEvent {
    TitleVisible,
    ShimmerStarted { background_position: String },
    FloatingStarted,
    OverlayHidden,
    OverlayRemoved,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimelineEntry {
    pub at: Millis,
    #[serde(flatten)]
    pub event: PreviewEvent,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    pub gate: GateOutcome,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Clone)]
struct Recorder {
    clock: VirtualClock,
    entries: Rc<RefCell<Vec<TimelineEntry>>>,
}

impl Recorder {
    fn push(&self, event: PreviewEvent) {
        self.entries.borrow_mut().push(TimelineEntry {
            at: self.clock.now(),
            event,
        });
    }
}

impl Overlay for Recorder {
    fn hide(&self) {
        self.push(PreviewEvent::OverlayHidden);
    }

    fn remove(&self) {
        self.push(PreviewEvent::OverlayRemoved);
    }
}

impl IntroTargets for Recorder {
    fn show_title(&self) {
        self.push(PreviewEvent::TitleVisible);
    }

    fn start_shimmer(&self, background_position: &str) {
        self.push(PreviewEvent::ShimmerStarted {
            background_position: background_position.to_string(),
        });
    }

    fn start_floating(&self) {
        self.push(PreviewEvent::FloatingStarted);
    }
}

/// Runs the loader gate and the intro sequence side by side on a virtual clock.
pub fn simulate_timeline(config: &SunfadeConfig, images: &[ImageTiming]) -> Timeline {
    let clock = VirtualClock::new();
    let recorder = Recorder {
        clock: clock.clone(),
        entries: Rc::new(RefCell::new(Vec::new())),
    };
    let gate = LoaderGate::new(recorder.clone(), config.loader);
    let intro = IntroSequence::new(config.intro.clone());

    let signals: Vec<LocalBoxFuture<'static, ImageOutcome>> = images
        .iter()
        .map(|timing| match *timing {
            ImageTiming::Settles { at, outcome } => {
                clock.sleep_until(at).map(move |_| outcome).boxed_local()
            }
            ImageTiming::Never => futures::future::pending().boxed_local(),
        })
        .collect();

    // The gate always finishes (timeout), so the join cannot stall.
    let gate_outcome = clock
        .run(join(gate.run(&clock, signals), intro.run(&clock, &recorder)))
        .map(|(outcome, ())| outcome)
        .unwrap_or(GateOutcome::TimedOut);

    let entries = recorder.entries.borrow().clone();
    Timeline {
        gate: gate_outcome,
        entries,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurveSample {
    pub scroll_offset: f64,
    #[serde(flatten)]
    pub frame: BlendFrame,
}

/// Samples the blend at `steps + 1` evenly spaced offsets in `[0, height]`.
/// Empty when `height` leaves nothing to scroll.
pub fn sample_curve(config: &SunfadeConfig, height: f64, steps: u32) -> Vec<CurveSample> {
    if height.is_nan() || height <= 0.0 {
        return Vec::new();
    }
    let steps = steps.max(1);
    let mut engine = BlendEngine::new(config.blend, 0.0, height);
    (0..=steps)
        .filter_map(|i| {
            let scroll_offset = height * f64::from(i) / f64::from(steps);
            engine.on_scroll(scroll_offset);
            let frame = engine.on_frame()?;
            Some(CurveSample {
                scroll_offset,
                frame,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/page/preview.rs"]
mod tests;
