//! Star field backdrop

use std::time::Duration;

use dioxus::prelude::*;
use waitlist_core::animation::StarField;

use crate::time::{sleep, viewport, FRAME};

#[component]
pub fn FallingStars() -> Element {
    let mut field = use_signal(|| StarField::new(viewport(), fastrand::Rng::new()));
    let mut now = use_signal(|| Duration::ZERO);

    // Scope-owned: stops with the page
    use_future(move || async move {
        let mut t = Duration::ZERO;
        loop {
            sleep(FRAME).await;
            t += FRAME;
            {
                let mut field = field.write();
                field.set_viewport(viewport());
                field.tick(t);
            }
            now.set(t);
        }
    });

    let t = now();
    let field = field.read();
    let viewport = field.viewport();
    let stars: Vec<_> = field
        .stars()
        .iter()
        .map(|star| (star.id, star.position_at(t, viewport), star.size, star.opacity))
        .collect();
    let streaks: Vec<_> = field
        .shooting_stars()
        .iter()
        .map(|star| (star.id, star.frame_at(t), star.size))
        .collect();

    rsx! {
        div {
            class: "pointer-events-none fixed inset-0 overflow-hidden",
            for (id, (x, y), size, opacity) in stars {
                div {
                    key: "star-{id}",
                    class: "absolute rounded-full bg-white",
                    style: "left: {x}px; top: {y}px; width: {size}px; height: {size}px; opacity: {opacity};",
                }
            }
            for (id, frame, size) in streaks {
                div {
                    key: "streak-{id}",
                    class: "absolute h-px bg-gradient-to-r from-white to-transparent",
                    style: "left: {frame.x}px; top: {frame.y}px; width: {size * 25.0}px; opacity: {frame.opacity}; transform: rotate(45deg); transform-origin: left;",
                }
            }
        }
    }
}
