//! Decorative effects.
//!
//! Nothing in here feeds back into the join or verify flows. Each model is a
//! plain value advanced by the host with elapsed time; randomness comes from a
//! caller-provided [`fastrand::Rng`] and the screen size from a [`Viewport`],
//! so all of it runs without a display.

mod confetti;
mod ripple;
mod rotating_text;
mod stars;

pub use confetti::*;
pub use ripple::*;
pub use rotating_text::*;
pub use stars::*;

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// Used until the browser reports a real size (and during SSR).
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Cubic ease-out over `t` in `[0, 1]`.
pub(crate) fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Uniform float in `[low, high)`.
pub(crate) fn uniform(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}
