//! Sunfade drives the scroll-linked visual effects of a single landing page.
//!
//! The crate is built as a WebAssembly module that attaches itself to the page
//! on instantiation. Five independent effects are supported:
//!
//! - **Intro**: the hero title fades in, sweeps a shimmer, then starts floating.
//! - **Loader gate**: the loading overlay waits for the background images or a
//!   timeout, then fades and detaches.
//! - **Scroll blend**: two background layers cross-fade (with parallax and a
//!   tint) as the page scrolls, at most once per animation frame.
//! - **Reveal**: marked elements become visible the first time they enter view.
//! - **Pointer glow**: orb elements track the cursor, again once per frame.
//!
//! All timing and arithmetic lives in host-independent types that run against a
//! [`Scheduler`]. The browser scheduler lives behind `wasm32`; natively the
//! [`VirtualClock`] drives the same code deterministically, which is what the
//! `sunfade` CLI and the tests use.
#![cfg_attr(not(target_arch = "wasm32"), forbid(unsafe_code))]

mod animation;
mod foundation;

pub(crate) mod effects;
pub(crate) mod page;
pub(crate) mod schedule;

/// Page configuration and its validation.
pub mod config;

#[cfg(target_arch = "wasm32")]
mod web;

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::{Lerp, Span};
pub use crate::config::{
    BlendConfig, Classes, IntroConfig, LoaderConfig, PointerConfig, RevealConfig, Selectors,
    SunfadeConfig,
};
pub use crate::foundation::core::{Intersection, Millis, Point, Rect};
pub use crate::foundation::error::{SunfadeError, SunfadeResult};

pub use crate::effects::blend::{
    BlendEngine, BlendFrame, BlendTargets, LayerStyle, frame_for_gamma, gamma,
};
pub use crate::effects::intro::{IntroSequence, IntroTargets};
pub use crate::effects::loader::{GateOutcome, ImageOutcome, LoaderGate, Overlay, OverlayState};
pub use crate::effects::pointer::{Orb, PointerFollower, local_position, px};
pub use crate::effects::reveal::{RevealAction, RevealTracker};
pub use crate::effects::viewport::ViewportCache;

pub use crate::page::activation::{
    Activation, BlendMode, IntroMode, LoaderMode, PagePresence, RevealMode,
};
pub use crate::page::preview::{
    CurveSample, ImageTiming, PreviewEvent, Timeline, TimelineEntry, sample_curve,
    simulate_timeline,
};

pub use crate::schedule::Scheduler;
pub use crate::schedule::frame::FrameGate;
pub use crate::schedule::virtual_clock::{VirtualClock, VirtualSleep};
