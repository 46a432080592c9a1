pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A `from -> to` range sampled by progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    pub from: T,
    pub to: T,
}

impl<T: Lerp> Span<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    pub fn at(&self, t: f64) -> T {
        T::lerp(&self.from, &self.to, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
