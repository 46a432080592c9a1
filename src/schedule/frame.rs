/// At-most-one-pending-update flag shared by the per-frame effects.
///
/// The first trigger since the last flush arms the gate and asks the caller to
/// schedule a frame callback; later triggers before that callback runs are
/// absorbed. The frame callback must call [`FrameGate::release`] before doing its
/// batched work so a trigger raised during that work schedules a fresh frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears the pending flag; returns whether a frame was outstanding.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame.rs"]
mod tests;
