//! Launch countdown shown on the landing page.
//!
//! Digits are derived from elapsed time, not decremented per tick, so a late
//! or doubled tick can never drift the display.

use std::fmt;
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Days/hours/minutes/seconds as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownDigits {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownDigits {
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.as_secs();
        Self {
            days: total / DAY,
            hours: total % DAY / HOUR,
            minutes: total % HOUR / MINUTE,
            seconds: total % MINUTE,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for CountdownDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
}

impl Countdown {
    /// 162 days, 13 hours, 22 minutes, 19 seconds.
    pub const LAUNCH: Countdown = Countdown::new(Duration::from_secs(
        162 * DAY + 13 * HOUR + 22 * MINUTE + 19,
    ));

    pub const fn new(total: Duration) -> Self {
        Self { total }
    }

    /// Digits after `elapsed`, floored to whole seconds and stopping at zero.
    pub fn digits_at(&self, elapsed: Duration) -> CountdownDigits {
        let elapsed = Duration::from_secs(elapsed.as_secs());
        CountdownDigits::from_duration(self.total.saturating_sub(elapsed))
    }

    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.total
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::LAUNCH
    }
}
