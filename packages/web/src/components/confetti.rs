//! Full-screen confetti burst

use std::time::Duration;

use dioxus::prelude::*;
use waitlist_core::animation::{Confetti, CONFETTI_DURATION};

use crate::state::use_celebration;
use crate::time::{sleep, viewport, FRAME};

/// Plays a burst each time the shared celebration trigger is fired.
#[component]
pub fn ConfettiOverlay() -> Element {
    let celebration = use_celebration();
    let mut confetti = use_signal(Confetti::new);
    let mut elapsed = use_signal(|| Duration::ZERO);
    let mut rng = use_signal(fastrand::Rng::new);

    use_effect(move || {
        let triggers = (celebration.triggers)();
        let burst = confetti
            .write()
            .observe(triggers, viewport(), &mut rng.write());

        if let Some(burst) = burst {
            elapsed.set(Duration::ZERO);
            spawn(async move {
                let mut t = Duration::ZERO;
                while t < CONFETTI_DURATION {
                    sleep(FRAME).await;
                    // A newer burst owns the clock now.
                    if *celebration.triggers.peek() != triggers {
                        return;
                    }
                    t += FRAME;
                    elapsed.set(t);
                }
                confetti.write().expire(burst);
            });
        }
    });

    let t = elapsed();
    let pieces: Vec<_> = confetti
        .read()
        .pieces()
        .iter()
        .map(|piece| (piece.clone(), piece.frame_at(t)))
        .collect();

    rsx! {
        div {
            class: "pointer-events-none fixed inset-0 z-50 overflow-hidden",
            for (piece, frame) in pieces {
                div {
                    key: "{piece.id}",
                    class: "absolute rounded-sm",
                    style: "left: {frame.x}px; top: {frame.y}px; width: {piece.size}px; height: {piece.size}px; background: {piece.color}; opacity: {frame.opacity}; transform: rotate({frame.rotation}deg);",
                }
            }
        }
    }
}
