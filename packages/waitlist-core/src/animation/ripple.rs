use std::time::Duration;

/// One ring of the ripple backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleRing {
    pub size: f64,
    pub opacity: f64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub main_circle_size: f64,
    pub main_circle_opacity: f64,
    pub num_circles: usize,
}

impl Default for Ripple {
    fn default() -> Self {
        Self {
            main_circle_size: 210.0,
            main_circle_opacity: 0.24,
            num_circles: 8,
        }
    }
}

const RING_STEP: f64 = 70.0;
const OPACITY_STEP: f64 = 0.03;
const MIN_OPACITY: f64 = 0.02;
const DELAY_STEP_MS: u64 = 60;

impl Ripple {
    /// Rings from the innermost out. Each is larger, fainter and starts a little later.
    pub fn rings(&self) -> Vec<RippleRing> {
        (0..self.num_circles)
            .map(|i| RippleRing {
                size: self.main_circle_size + i as f64 * RING_STEP,
                opacity: (self.main_circle_opacity - i as f64 * OPACITY_STEP).max(MIN_OPACITY),
                delay: Duration::from_millis(i as u64 * DELAY_STEP_MS),
            })
            .collect()
    }
}
