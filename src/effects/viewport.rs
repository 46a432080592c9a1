use crate::schedule::frame::FrameGate;

/// Last-known scroll geometry plus the blend engine's pending-frame flag.
///
/// `scroll_offset` is written on every scroll event; `scrollable_height` only
/// on resize. Reads happen once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportCache {
    pub scroll_offset: f64,
    pub scrollable_height: f64,
    pub frame: FrameGate,
}

impl ViewportCache {
    pub fn new(scroll_offset: f64, scrollable_height: f64) -> Self {
        Self {
            scroll_offset,
            scrollable_height,
            frame: FrameGate::new(),
        }
    }

    /// Distance the document can scroll, from its full height and the viewport height.
    pub fn scrollable_height_of(document_height: f64, viewport_height: f64) -> f64 {
        document_height - viewport_height
    }

    /// Normalized scroll progress in `[0, 1]`, or `None` when nothing can scroll.
    pub fn progress(&self) -> Option<f64> {
        if self.scrollable_height.is_nan() || self.scrollable_height <= 0.0 {
            return None;
        }
        let p = self.scroll_offset / self.scrollable_height;
        Some(if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/viewport.rs"]
mod tests;
