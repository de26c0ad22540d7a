use std::time::Duration;

use dioxus::prelude::*;
use waitlist_core::animation::{WordRotation, DEFAULT_ROTATION_INTERVAL};

use crate::time::sleep;

const STEP: Duration = Duration::from_millis(100);

/// Headline word that cycles through `words`.
#[component]
pub fn RotatingText(words: Vec<String>, #[props(default)] class: String) -> Element {
    let rotation = use_memo(move || WordRotation::new(words.clone(), DEFAULT_ROTATION_INTERVAL));
    let mut elapsed = use_signal(|| Duration::ZERO);

    use_future(move || async move {
        let mut t = Duration::ZERO;
        loop {
            sleep(STEP).await;
            t += STEP;
            elapsed.set(t);
        }
    });

    let t = elapsed();
    let rotation = rotation.read();
    let Some(word) = rotation.word_at(t) else {
        return rsx! {};
    };
    let opacity = if rotation.is_visible_at(t) { "opacity-100" } else { "opacity-0" };

    rsx! {
        span {
            class: "inline-block transition-opacity duration-500 {opacity} {class}",
            "{word}"
        }
    }
}
