//! Side effects requested by the page state machines.
//!
//! A state machine hands back a list of [`Effect`]s instead of touching timers,
//! the router or the toast stack itself. Whoever owns the page executes them
//! and is responsible for cancelling anything still pending when the page goes
//! away.

use std::time::Duration;

use serde::Serialize;

/// Visual weight of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    #[default]
    Default,
    Success,
    Destructive,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: NoticeTone::Default,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            ..Self::new(title, description)
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Something a state machine wants done, possibly later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Client-side navigation to an absolute path
    Navigate { to: String, after: Duration },
    /// Fire the confetti burst once
    Confetti { after: Duration },
    /// Show a toast right away
    Notify(Notice),
}

impl Effect {
    pub fn delay(&self) -> Duration {
        match self {
            Effect::Navigate { after, .. } | Effect::Confetti { after } => *after,
            Effect::Notify(_) => Duration::ZERO,
        }
    }
}

#[cfg(feature = "runtime")]
pub use runner::EffectRunner;

#[cfg(feature = "runtime")]
mod runner {
    use std::sync::Arc;

    use tokio::task::JoinHandle;
    use tracing::debug;

    use super::Effect;

    type Handler = Arc<dyn Fn(Effect) + Send + Sync>;

    /// Executes effects on tokio timers.
    ///
    /// Every timer is owned by the runner. Dropping the runner (or calling
    /// [`EffectRunner::cancel_all`]) aborts whatever hasn't fired yet, so a torn
    /// down page never receives a late navigation or confetti trigger.
    pub struct EffectRunner {
        handler: Handler,
        timers: Vec<JoinHandle<()>>,
    }

    impl EffectRunner {
        pub fn new<F>(handler: F) -> Self
        where
            F: Fn(Effect) + Send + Sync + 'static,
        {
            Self {
                handler: Arc::new(handler),
                timers: Vec::new(),
            }
        }

        /// Dispatch immediate effects now and schedule the rest.
        ///
        /// Must be called from within a tokio runtime.
        pub fn run(&mut self, effects: impl IntoIterator<Item = Effect>) {
            self.timers.retain(|timer| !timer.is_finished());

            for effect in effects {
                let delay = effect.delay();
                if delay.is_zero() {
                    (self.handler)(effect);
                    continue;
                }

                debug!(?delay, ?effect, "Scheduling effect");
                let handler = Arc::clone(&self.handler);
                self.timers.push(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    handler(effect);
                }));
            }
        }

        /// Timers that haven't fired yet.
        pub fn pending(&self) -> usize {
            self.timers.iter().filter(|timer| !timer.is_finished()).count()
        }

        pub fn cancel_all(&mut self) {
            for timer in self.timers.drain(..) {
                timer.abort();
            }
        }
    }

    impl Drop for EffectRunner {
        fn drop(&mut self) {
            self.cancel_all();
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_is_immediate() {
        let effect = Effect::Notify(Notice::new("t", "d"));
        assert_eq!(effect.delay(), Duration::ZERO);
    }

    #[test]
    fn test_delays() {
        let navigate = Effect::Navigate {
            to: "/verify/abc".into(),
            after: Duration::from_secs(2),
        };
        let confetti = Effect::Confetti {
            after: Duration::from_millis(500),
        };
        assert_eq!(navigate.delay(), Duration::from_secs(2));
        assert_eq!(confetti.delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_notice_tones() {
        assert_eq!(Notice::new("a", "b").tone, NoticeTone::Default);
        assert_eq!(Notice::success("a", "b").tone, NoticeTone::Success);
        assert_eq!(Notice::destructive("a", "b").tone, NoticeTone::Destructive);
    }
}
