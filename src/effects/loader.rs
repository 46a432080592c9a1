//! Loading overlay gate.
//!
//! The overlay stays up until every tracked background image has settled (loaded
//! or failed) or the timeout fires, whichever happens first. Dismissal hides the
//! overlay at once and detaches it after the fade-out delay.

use std::{cell::Cell, future::Future, pin::pin};

use futures::future::{Either, join_all, select};

use crate::{config::LoaderConfig, schedule::Scheduler};

/// How one tracked image settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ImageOutcome {
    /// Already decoded when the gate started.
    AlreadyComplete,
    Loaded,
    /// Load error; counts as settled.
    Failed,
}

/// Which side of the race triggered dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GateOutcome {
    NoImages,
    AllSettled { failed: usize },
    TimedOut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum OverlayState {
    #[default]
    Shown,
    Hidden,
    Removed,
}

/// The loading overlay element.
pub trait Overlay {
    /// Switch to the hidden (fading) presentation.
    fn hide(&self);
    /// Detach the element from the page.
    fn remove(&self);
}

pub struct LoaderGate<O> {
    overlay: O,
    config: LoaderConfig,
    state: Cell<OverlayState>,
}

impl<O: Overlay> LoaderGate<O> {
    pub fn new(overlay: O, config: LoaderConfig) -> Self {
        Self {
            overlay,
            config,
            state: Cell::new(OverlayState::Shown),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    /// Hides the overlay. Only the first call has an effect; returns whether
    /// this call was it.
    pub fn dismiss(&self) -> bool {
        if self.state.get() != OverlayState::Shown {
            return false;
        }
        self.overlay.hide();
        self.state.set(OverlayState::Hidden);
        true
    }

    /// Detaches a hidden overlay. Returns whether this call removed it.
    pub fn detach(&self) -> bool {
        if self.state.get() != OverlayState::Hidden {
            return false;
        }
        self.overlay.remove();
        self.state.set(OverlayState::Removed);
        true
    }

    /// Waits for all `images` to settle or for the timeout, whichever is first.
    pub async fn race<S, I>(&self, scheduler: &S, images: Vec<I>) -> GateOutcome
    where
        S: Scheduler,
        I: Future<Output = ImageOutcome>,
    {
        let settled = pin!(join_all(images));
        let timeout = pin!(scheduler.sleep(self.config.timeout_ms));
        match select(settled, timeout).await {
            Either::Left((outcomes, _)) => GateOutcome::AllSettled {
                failed: outcomes
                    .iter()
                    .filter(|o| **o == ImageOutcome::Failed)
                    .count(),
            },
            Either::Right(((), _)) => GateOutcome::TimedOut,
        }
    }

    /// Full gate: race (skipped with no images), dismiss, then detach after the
    /// removal delay. With no images the overlay is hidden during the first poll.
    pub async fn run<S, I>(&self, scheduler: &S, images: Vec<I>) -> GateOutcome
    where
        S: Scheduler,
        I: Future<Output = ImageOutcome>,
    {
        let tracked = images.len();
        let outcome = if images.is_empty() {
            GateOutcome::NoImages
        } else {
            self.race(scheduler, images).await
        };
        tracing::info!(?outcome, tracked, "loader gate opened");

        self.dismiss();
        self.remove_after_delay(scheduler).await;
        outcome
    }

    /// Detaches a hidden overlay once the removal delay has passed. Does
    /// nothing unless the overlay is currently hidden.
    pub async fn remove_after_delay<S: Scheduler>(&self, scheduler: &S) {
        if self.state.get() != OverlayState::Hidden {
            return;
        }
        scheduler.sleep(self.config.removal_delay_ms).await;
        self.detach();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/loader.rs"]
mod tests;
