/// Easing curves mapping normalized progress `t` in `[0, 1]` onto `[0, 1]`.
///
/// Inputs are clamped before the curve is applied, so out-of-range progress
/// always yields exactly `0.0` or `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// `t^exponent`; exponents above 1 start slow and accelerate.
    Power { exponent: f64 },
}

impl Ease {
    /// Curve used by the scroll blend.
    pub const SCROLL_BLEND: Self = Self::Power { exponent: 1.1 };

    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power { exponent } => t.powf(exponent),
        }
    }

    pub(crate) fn is_well_formed(self) -> bool {
        match self {
            Self::Power { exponent } => exponent.is_finite() && exponent > 0.0,
            _ => true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
