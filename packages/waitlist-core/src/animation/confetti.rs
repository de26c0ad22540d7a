use std::time::Duration;

use super::{ease_out, uniform, Viewport};

pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_DURATION: Duration = Duration::from_secs(3);
pub const CONFETTI_PALETTE: [&str; 5] = ["#a3e635", "#ffffff", "#22c55e", "#fbbf24", "#f472b6"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    pub size: f64,
    pub rotation: f64,
    pub velocity: Velocity,
}

/// Where a piece is drawn at some point of its flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceFrame {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl ConfettiPiece {
    fn random(id: usize, viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
        Self {
            id,
            x: uniform(rng, 0.0, viewport.width),
            y: viewport.height / 2.0,
            color: CONFETTI_PALETTE[rng.usize(..CONFETTI_PALETTE.len())],
            size: uniform(rng, 4.0, 12.0),
            rotation: uniform(rng, 0.0, 360.0),
            velocity: Velocity {
                x: uniform(rng, -5.0, 5.0),
                y: uniform(rng, -20.0, -5.0),
            },
        }
    }

    /// Outward, then down past the bottom of the screen, fading out.
    pub fn frame_at(&self, elapsed: Duration) -> PieceFrame {
        let t = elapsed.as_secs_f64() / CONFETTI_DURATION.as_secs_f64();
        let p = ease_out(t);

        let target_x = self.x + self.velocity.x * 100.0;
        let target_y = self.y + self.velocity.y * 50.0 + 1000.0;

        PieceFrame {
            x: self.x + (target_x - self.x) * p,
            y: self.y + (target_y - self.y) * p,
            rotation: self.rotation + 720.0 * p,
            opacity: 1.0 - p,
        }
    }
}

/// Handle for one burst, used to expire exactly that burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstId(u64);

/// The confetti layer.
///
/// [`observe`](Confetti::observe) turns a trigger counter into one burst per
/// increment; [`burst`](Confetti::burst) fires unconditionally. A burst lives
/// for [`CONFETTI_DURATION`], after which the host calls
/// [`expire`](Confetti::expire) with the id it was given.
#[derive(Debug, Default)]
pub struct Confetti {
    seen: u64,
    pieces: Vec<ConfettiPiece>,
    current: u64,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_active(&self) -> bool {
        !self.pieces.is_empty()
    }

    /// Feed the current trigger count. Returns a new burst whenever the count
    /// has moved since the last call, including while a burst is on screen.
    pub fn observe(
        &mut self,
        triggers: u64,
        viewport: Viewport,
        rng: &mut fastrand::Rng,
    ) -> Option<BurstId> {
        let fired = triggers != self.seen;
        self.seen = triggers;
        fired.then(|| self.burst(viewport, rng))
    }

    /// Replace whatever is on screen with a fresh burst.
    pub fn burst(&mut self, viewport: Viewport, rng: &mut fastrand::Rng) -> BurstId {
        self.current += 1;
        self.pieces = (0..CONFETTI_COUNT)
            .map(|id| ConfettiPiece::random(id, viewport, rng))
            .collect();
        BurstId(self.current)
    }

    /// Clear the pieces if `burst` is still the one on screen.
    pub fn expire(&mut self, burst: BurstId) -> bool {
        if burst.0 != self.current || self.pieces.is_empty() {
            return false;
        }
        self.pieces.clear();
        true
    }
}
