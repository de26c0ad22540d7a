use std::time::Duration;

use super::{ease_out, uniform, Viewport};

pub const STAR_TARGET: usize = 50;
pub const STAR_REFILL_INTERVAL: Duration = Duration::from_millis(200);
pub const SHOOTING_STAR_MIN_GAP: Duration = Duration::from_secs(3);
pub const SHOOTING_STAR_MAX_GAP: Duration = Duration::from_secs(8);

/// Stars keep falling this far past the bottom edge before they're retired.
const OFFSCREEN_MARGIN: f64 = 100.0;
const SPAWN_Y: f64 = -20.0;
const DRIFT: f64 = 200.0;
const SHOOTING_TRAVEL: f64 = 300.0;
const SHOOTING_LINGER: Duration = Duration::from_millis(500);

/// A background star drifting down the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    /// Seconds to cross the screen
    pub speed: f64,
    /// Drift in degrees, -15..15
    pub angle: f64,
    /// Seconds before it starts moving
    pub delay: f64,
    pub born: Duration,
}

impl Star {
    fn progress(&self, now: Duration) -> f64 {
        let age = now.saturating_sub(self.born).as_secs_f64() - self.delay;
        (age / self.speed).clamp(0.0, 1.0)
    }

    /// Linear fall from the spawn point to below the bottom edge.
    pub fn position_at(&self, now: Duration, viewport: Viewport) -> (f64, f64) {
        let t = self.progress(now);
        let end_x = self.x + self.angle.to_radians().sin() * DRIFT;
        let end_y = viewport.height + OFFSCREEN_MARGIN;
        (
            self.x + (end_x - self.x) * t,
            self.y + (end_y - self.y) * t,
        )
    }

    /// Past the bottom margin, i.e. its fall has completed.
    pub fn is_offscreen(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A fast diagonal streak.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    /// Seconds to complete the streak
    pub speed: f64,
    pub born: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakFrame {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl ShootingStar {
    pub fn frame_at(&self, now: Duration) -> StreakFrame {
        let t = (now.saturating_sub(self.born).as_secs_f64() / self.speed).clamp(0.0, 1.0);
        let p = ease_out(t);

        // 0 → 1 → 1 → 0 over equal thirds
        let fade = if t < 1.0 / 3.0 {
            t * 3.0
        } else if t < 2.0 / 3.0 {
            1.0
        } else {
            (1.0 - t) * 3.0
        };

        StreakFrame {
            x: self.x + SHOOTING_TRAVEL * p,
            y: self.y + SHOOTING_TRAVEL * p,
            opacity: fade * self.opacity,
        }
    }

    pub fn expires_at(&self) -> Duration {
        self.born + Duration::from_secs_f64(self.speed) + SHOOTING_LINGER
    }
}

/// Background star field.
///
/// Owns its own clock bookkeeping: the host calls [`tick`](StarField::tick)
/// with time since mount and the field catches up on every refill step and
/// shooting-star spawn it missed. Dropping the field is all the teardown it
/// needs.
#[derive(Debug)]
pub struct StarField {
    viewport: Viewport,
    rng: fastrand::Rng,
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    next_id: u64,
    next_refill: Duration,
    next_shooting: Duration,
}

impl StarField {
    pub fn new(viewport: Viewport, mut rng: fastrand::Rng) -> Self {
        let first_shooting = random_gap(&mut rng);
        let mut field = Self {
            viewport,
            rng,
            stars: Vec::with_capacity(STAR_TARGET),
            shooting: Vec::new(),
            next_id: 0,
            next_refill: STAR_REFILL_INTERVAL,
            next_shooting: first_shooting,
        };
        for _ in 0..STAR_TARGET {
            let star = field.spawn_star(Duration::ZERO);
            field.stars.push(star);
        }
        field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// Advance to `now` (time since the field was created).
    pub fn tick(&mut self, now: Duration) {
        while self.next_refill <= now {
            let at = self.next_refill;
            self.refill(at);
            self.next_refill += STAR_REFILL_INTERVAL;
        }

        while self.next_shooting <= now {
            let at = self.next_shooting;
            let star = self.spawn_shooting_star(at);
            self.shooting.push(star);
            self.next_shooting = at + random_gap(&mut self.rng);
        }

        self.shooting.retain(|star| star.expires_at() > now);
    }

    /// Retire stars that have left the screen and top up by at most one.
    fn refill(&mut self, at: Duration) {
        self.stars.retain(|star| !star.is_offscreen(at));
        if self.stars.len() < STAR_TARGET {
            let star = self.spawn_star(at);
            self.stars.push(star);
        }
    }

    fn spawn_star(&mut self, born: Duration) -> Star {
        let id = self.take_id();
        let rng = &mut self.rng;
        Star {
            id,
            x: uniform(rng, 0.0, self.viewport.width),
            y: SPAWN_Y,
            size: uniform(rng, 1.0, 4.0),
            opacity: uniform(rng, 0.2, 1.0),
            speed: uniform(rng, 2.0, 5.0),
            angle: uniform(rng, -15.0, 15.0),
            delay: uniform(rng, 0.0, 2.0),
            born,
        }
    }

    fn spawn_shooting_star(&mut self, born: Duration) -> ShootingStar {
        let id = self.take_id();
        let rng = &mut self.rng;
        ShootingStar {
            id,
            x: uniform(rng, 0.0, self.viewport.width),
            y: uniform(rng, 0.0, self.viewport.height * 0.3),
            size: uniform(rng, 2.0, 4.0),
            opacity: uniform(rng, 0.4, 1.2).min(1.0),
            speed: uniform(rng, 0.8, 1.8),
            born,
        }
    }

    fn take_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

fn random_gap(rng: &mut fastrand::Rng) -> Duration {
    let min = SHOOTING_STAR_MIN_GAP.as_millis() as u64;
    let max = SHOOTING_STAR_MAX_GAP.as_millis() as u64;
    Duration::from_millis(rng.u64(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> StarField {
        StarField::new(Viewport::new(1000.0, 800.0), fastrand::Rng::with_seed(3))
    }

    #[test]
    fn test_starts_full() {
        let field = field();
        assert_eq!(field.stars().len(), STAR_TARGET);
        for star in field.stars() {
            assert_eq!(star.y, -20.0);
            assert!((0.0..1000.0).contains(&star.x));
            assert!((-15.0..15.0).contains(&star.angle));
            assert!((2.0..5.0).contains(&star.speed));
        }
        assert!(field.shooting_stars().is_empty());
    }

    #[test]
    fn test_star_falls_past_bottom() {
        let star = Star {
            id: 1,
            x: 100.0,
            y: -20.0,
            size: 2.0,
            opacity: 1.0,
            speed: 2.0,
            angle: 0.0,
            delay: 1.0,
            born: Duration::ZERO,
        };
        let viewport = Viewport::new(500.0, 400.0);

        // still waiting out its delay
        assert_eq!(star.position_at(Duration::from_millis(500), viewport), (100.0, -20.0));
        assert!(!star.is_offscreen(Duration::from_secs(2)));
        assert_eq!(star.position_at(Duration::from_secs(3), viewport), (100.0, 500.0));
        assert!(star.is_offscreen(Duration::from_secs(3)));
    }

    #[test]
    fn test_offscreen_stars_are_replaced_one_per_step() {
        let mut field = field();
        // every initial star is gone after 7s (delay <= 2s, speed <= 5s)
        field.tick(Duration::from_secs(7));
        let survivors_from_start = field
            .stars()
            .iter()
            .filter(|star| star.born == Duration::ZERO)
            .count();
        assert_eq!(survivors_from_start, 0);
        assert!(field.stars().len() <= STAR_TARGET);
        assert!(!field.stars().is_empty());
    }

    #[test]
    fn test_never_exceeds_target() {
        let mut field = field();
        for step in 1..=200 {
            field.tick(Duration::from_millis(step * 100));
            assert!(field.stars().len() <= STAR_TARGET);
        }
    }

    #[test]
    fn test_shooting_stars_spawn_in_gap_window() {
        let mut field = field();
        let first = field.next_shooting;
        assert!(first >= SHOOTING_STAR_MIN_GAP && first < SHOOTING_STAR_MAX_GAP);

        field.tick(first - Duration::from_millis(1));
        assert!(field.shooting_stars().is_empty());

        field.tick(first);
        assert_eq!(field.shooting_stars().len(), 1);
        let star = &field.shooting_stars()[0];
        assert_eq!(star.born, first);
        assert!(star.y < 800.0 * 0.3);
        assert!(field.next_shooting >= first + SHOOTING_STAR_MIN_GAP);
    }

    #[test]
    fn test_shooting_star_is_retired_after_its_flight() {
        let mut field = field();
        let first = field.next_shooting;
        field.tick(first);
        let expires = field.shooting_stars()[0].expires_at();
        let id = field.shooting_stars()[0].id;

        field.tick(expires);
        assert!(field.shooting_stars().iter().all(|star| star.id != id));
    }

    #[test]
    fn test_streak_opacity_keyframes() {
        let star = ShootingStar {
            id: 1,
            x: 0.0,
            y: 0.0,
            size: 2.0,
            opacity: 1.0,
            speed: 1.5,
            born: Duration::ZERO,
        };
        assert_eq!(star.frame_at(Duration::ZERO).opacity, 0.0);
        assert_eq!(star.frame_at(Duration::from_millis(750)).opacity, 1.0);
        let end = star.frame_at(Duration::from_millis(1500));
        assert_eq!(end.opacity, 0.0);
        assert_eq!((end.x, end.y), (300.0, 300.0));
        assert_eq!(star.expires_at(), Duration::from_millis(2000));
    }
}
