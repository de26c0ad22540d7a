use dioxus::prelude::*;
use waitlist_core::animation::Ripple;

/// Concentric pulsing rings behind the hero content.
#[component]
pub fn RippleBackdrop(
    #[props(default = 210.0)] main_circle_size: f64,
    #[props(default = 0.24)] main_circle_opacity: f64,
    #[props(default = 8)] num_circles: usize,
) -> Element {
    let rings = Ripple {
        main_circle_size,
        main_circle_opacity,
        num_circles,
    }
    .rings();

    rsx! {
        div {
            class: "pointer-events-none absolute inset-0 flex items-center justify-center overflow-hidden",
            for (i, ring) in rings.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "ripple-ring absolute rounded-full border border-lime-400/30 bg-lime-400/5",
                    style: "width: {ring.size}px; height: {ring.size}px; opacity: {ring.opacity}; animation-delay: {ring.delay.as_secs_f64()}s;",
                }
            }
        }
    }
}
