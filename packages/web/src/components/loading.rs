//! Loading components

use dioxus::prelude::*;

/// Centered spinner with a caption
#[component]
pub fn LoadingSpinner(label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-lime-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-lime-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-lime-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-zinc-400", "{label}" }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_shows_caption() {
        let html = dioxus_ssr::render_element(rsx! { LoadingSpinner { label: "Verifying..." } });

        assert!(html.contains("Verifying..."));
        assert_eq!(html.matches("animate-bounce").count(), 3);
    }
}
