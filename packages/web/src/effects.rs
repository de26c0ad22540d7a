//! Runs page effects on the calling component's scope.
//!
//! Every delayed effect is a task spawned on the component that requested it,
//! so Dioxus drops it (timer included) when that component unmounts. A
//! redirect scheduled by the join page never fires after the user has left.

use dioxus::prelude::*;
use waitlist_core::Effect;

use crate::routes::Route;
use crate::state::{Celebration, Notices};
use crate::time::sleep;

#[derive(Clone, Copy)]
pub struct EffectHost {
    navigator: Navigator,
    notices: Notices,
    celebration: Celebration,
}

/// Hook wiring effects to the router, the toaster and the confetti overlay.
pub fn use_effect_host() -> EffectHost {
    EffectHost {
        navigator: use_navigator(),
        notices: crate::state::use_notices(),
        celebration: crate::state::use_celebration(),
    }
}

impl EffectHost {
    pub fn run(self, effects: Vec<Effect>) {
        for effect in effects {
            let delay = effect.delay();
            if delay.is_zero() {
                self.apply(effect);
                continue;
            }

            spawn(async move {
                sleep(delay).await;
                self.apply(effect);
            });
        }
    }

    fn apply(self, effect: Effect) {
        match effect {
            Effect::Navigate { to, .. } => match to.parse::<Route>() {
                Ok(route) => {
                    self.navigator.push(route);
                }
                Err(e) => tracing::warn!(%to, error = %e, "Unroutable navigation"),
            },
            Effect::Confetti { .. } => self.celebration.fire(),
            Effect::Notify(notice) => self.notices.push(notice),
        }
    }
}
