use std::time::Duration;

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(3);
pub const ROTATION_FADE: Duration = Duration::from_millis(500);

/// Headline word cycling.
///
/// Every `interval` the current word fades out for [`ROTATION_FADE`], then the
/// next word takes its place. Which word shows is a pure function of time since
/// mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotation {
    words: Vec<String>,
    interval: Duration,
    fade: Duration,
}

impl WordRotation {
    pub fn new<I, S>(words: I, interval: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            words: words.into_iter().map(Into::into).collect(),
            interval,
            fade: ROTATION_FADE.min(interval),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn index_at(&self, elapsed: Duration) -> Option<usize> {
        match self.words.len() {
            0 => None,
            1 => Some(0),
            len => {
                let swaps = elapsed.saturating_sub(self.fade).as_millis() / self.interval.as_millis();
                Some((swaps % len as u128) as usize)
            }
        }
    }

    pub fn word_at(&self, elapsed: Duration) -> Option<&str> {
        self.index_at(elapsed).map(|i| self.words[i].as_str())
    }

    /// False while the current word is fading out.
    pub fn is_visible_at(&self, elapsed: Duration) -> bool {
        if self.words.len() <= 1 || elapsed < self.interval {
            return true;
        }
        elapsed.as_millis() % self.interval.as_millis() >= self.fade.as_millis()
    }
}
