//! One-shot hero title intro: fade in, shimmer sweep, then a floating loop.

use futures::future::join3;

use crate::{config::IntroConfig, schedule::Scheduler};

/// The hero title and its nested text element.
pub trait IntroTargets {
    fn show_title(&self);
    /// Moves the text's background to `background_position`, sweeping the shimmer.
    fn start_shimmer(&self, background_position: &str);
    fn start_floating(&self);
}

#[derive(Clone, Debug)]
pub struct IntroSequence {
    config: IntroConfig,
}

impl IntroSequence {
    pub fn new(config: IntroConfig) -> Self {
        Self { config }
    }

    /// Runs the three stages. Stage delays are measured from the call, not
    /// from the previous stage; the title becomes visible on the next frame.
    pub async fn run<S, T>(&self, scheduler: &S, targets: &T)
    where
        S: Scheduler,
        T: IntroTargets,
    {
        let visible = async {
            scheduler.next_frame().await;
            targets.show_title();
        };
        let shimmer = async {
            scheduler.sleep(self.config.shimmer_at_ms).await;
            targets.start_shimmer(&self.config.shimmer_position);
        };
        let floating = async {
            scheduler.sleep(self.config.float_at_ms).await;
            targets.start_floating();
        };
        join3(visible, shimmer, floating).await;
        tracing::debug!("intro sequence finished");
    }

    /// Reduced-motion variant: all stages at once, no timers.
    pub fn apply_immediately<T: IntroTargets>(&self, targets: &T) {
        targets.show_title();
        targets.start_shimmer(&self.config.shimmer_position);
        targets.start_floating();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/intro.rs"]
mod tests;
