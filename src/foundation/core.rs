pub use kurbo::{Point, Rect};

/// A duration or timestamp in whole milliseconds.
///
/// Browser timers take `u32` delays, so this is the unit every scheduled step uses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Result of an intersection check for one observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
