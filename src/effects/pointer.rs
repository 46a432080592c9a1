//! Cursor-following glow for the orb elements.
//!
//! Pointer moves only remember the latest client position; once per frame every
//! orb receives that position relative to its own bounding box.

use crate::{
    foundation::core::{Point, Rect},
    schedule::frame::FrameGate,
};

/// An element carrying the glow custom properties.
pub trait Orb {
    /// Bounding box in client coordinates.
    fn bounds(&self) -> Rect;
    /// Writes the pointer position relative to the orb's top-left corner.
    fn set_glow(&self, local: Point);
}

pub fn local_position(pointer: Point, bounds: Rect) -> Point {
    Point::new(pointer.x - bounds.x0, pointer.y - bounds.y0)
}

pub fn px(v: f64) -> String {
    format!("{:.1}px", v + 0.0)
}

#[derive(Clone, Debug, Default)]
pub struct PointerFollower {
    gate: FrameGate,
    latest: Option<Point>,
}

impl PointerFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Records the pointer; returns `true` when the caller must request a frame.
    pub fn on_move(&mut self, client: Point) -> bool {
        self.latest = Some(client);
        self.gate.request()
    }

    /// Frame callback: measures every orb, then writes every orb.
    /// Returns how many orbs were updated.
    pub fn flush<O: Orb>(&mut self, orbs: &[O]) -> usize {
        self.gate.release();
        let Some(pointer) = self.latest else {
            return 0;
        };
        let positions: Vec<Point> = orbs
            .iter()
            .map(|orb| local_position(pointer, orb.bounds()))
            .collect();
        for (orb, local) in orbs.iter().zip(positions) {
            orb.set_glow(local);
        }
        orbs.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pointer.rs"]
mod tests;
