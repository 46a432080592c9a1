//! Scroll-driven day/night blending.
//!
//! Scroll progress is curved into `gamma` and fanned out to two parallax layers
//! (sunrise fading out, sunset fading in, both drifting upward at different
//! rates) plus a tint overlay. Scroll events only record the offset; the
//! recomputation runs at most once per rendered frame.

use crate::{
    animation::lerp::Span,
    config::BlendConfig,
    effects::viewport::ViewportCache,
};

/// Style values for one parallax layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerStyle {
    pub opacity: f64,
    /// Vertical translation in px; negative moves up.
    pub offset_y: f64,
}

impl LayerStyle {
    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn transform_css(&self) -> String {
        // `+ 0.0` folds -0.0 into 0.0 so gamma == 0 prints "0.00px".
        format!("translate3d(0, {:.2}px, 0)", self.offset_y + 0.0)
    }
}

/// Every style value written in one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlendFrame {
    pub gamma: f64,
    pub sunrise: LayerStyle,
    pub sunset: LayerStyle,
    pub tint_opacity: f64,
}

impl BlendFrame {
    pub fn tint_opacity_css(&self) -> String {
        format!("{:.3}", self.tint_opacity)
    }
}

/// Sink for a computed frame. Implementations must only write, never read
/// layout, so a whole frame lands in one batch.
pub trait BlendTargets {
    fn apply(&self, frame: &BlendFrame);
}

/// `gamma` for the given geometry, or `None` when the page cannot scroll.
pub fn gamma(config: &BlendConfig, cache: &ViewportCache) -> Option<f64> {
    cache.progress().map(|p| config.curve.apply(p))
}

pub fn frame_for_gamma(config: &BlendConfig, gamma: f64) -> BlendFrame {
    let sunrise_opacity = Span::new(1.0, 0.0);
    let sunset_opacity = Span::new(0.0, 1.0);
    let sunrise_offset = Span::new(0.0, -config.sunrise_shift_px);
    let sunset_offset = Span::new(0.0, -config.sunset_shift_px);

    BlendFrame {
        gamma,
        sunrise: LayerStyle {
            opacity: sunrise_opacity.at(gamma),
            offset_y: sunrise_offset.at(gamma),
        },
        sunset: LayerStyle {
            opacity: sunset_opacity.at(gamma),
            offset_y: sunset_offset.at(gamma),
        },
        tint_opacity: config.tint.at(gamma),
    }
}

/// Owns the viewport cache and turns scroll/resize events into frames.
#[derive(Clone, Debug)]
pub struct BlendEngine {
    config: BlendConfig,
    cache: ViewportCache,
    recomputes: u64,
}

impl BlendEngine {
    pub fn new(config: BlendConfig, scroll_offset: f64, scrollable_height: f64) -> Self {
        Self {
            config,
            cache: ViewportCache::new(scroll_offset, scrollable_height),
            recomputes: 0,
        }
    }

    pub fn cache(&self) -> &ViewportCache {
        &self.cache
    }

    /// Number of recomputations performed so far (initial one included).
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Start-up pass: computes a frame from the current geometry without
    /// touching the pending flag.
    pub fn prime(&mut self) -> Option<BlendFrame> {
        self.recompute()
    }

    /// Records the offset. Returns `true` when the caller must request a frame.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        self.cache.scroll_offset = scroll_offset;
        self.cache.frame.request()
    }

    /// Refreshes the cached scrollable height; never schedules a frame.
    pub fn on_resize(&mut self, scrollable_height: f64) {
        self.cache.scrollable_height = scrollable_height;
    }

    /// Frame callback: clears the pending flag and computes the styles to write.
    pub fn on_frame(&mut self) -> Option<BlendFrame> {
        self.cache.frame.release();
        self.recompute()
    }

    fn recompute(&mut self) -> Option<BlendFrame> {
        let gamma = gamma(&self.config, &self.cache)?;
        self.recomputes += 1;
        Some(frame_for_gamma(&self.config, gamma))
    }

    /// Runs the frame callback and forwards the result to `targets`.
    pub fn flush(&mut self, targets: &impl BlendTargets) -> bool {
        match self.on_frame() {
            Some(frame) => {
                targets.apply(&frame);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
