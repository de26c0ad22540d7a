use dioxus::prelude::*;

pub const FAQ_ITEMS: [(&str, &str); 5] = [
    (
        "What is Wait?",
        "Wait is a modern waitlist template designed to help you build anticipation and collect early user signups for your upcoming product or service.",
    ),
    (
        "What's included in this template?",
        "The template includes a responsive design, countdown timer, email collection form, FAQ section, and social proof elements.",
    ),
    (
        "How do I customize this template?",
        "You can easily customize colors, fonts, content, and styling through the provided configuration files and component props.",
    ),
    (
        "Is there support available?",
        "Yes, we provide comprehensive documentation and community support to help you get started quickly.",
    ),
    (
        "How much will this cost?",
        "The template is available for a one-time purchase with lifetime updates and no recurring fees.",
    ),
];

#[component]
pub fn Faq() -> Element {
    rsx! {
        section {
            class: "container mx-auto px-4 py-16",
            div {
                class: "max-w-4xl mx-auto",
                div {
                    class: "text-center mb-16",
                    h2 {
                        class: "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-b from-white to-gray-400 bg-clip-text text-transparent",
                        "Frequently asked questions"
                    }
                    p {
                        class: "text-xl text-gray-300 max-w-2xl mx-auto",
                        "Everything you need to know about the Wait template. Find answers to the most common questions below."
                    }
                }
                div {
                    class: "space-y-4",
                    for (question, answer) in FAQ_ITEMS {
                        FaqItem { key: "{question}", question, answer }
                    }
                }
            }
        }
    }
}

/// Collapsible question/answer card
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> Element {
    let mut is_open = use_signal(|| false);
    let icon_class = if is_open() { "rotate-45" } else { "" };

    rsx! {
        div {
            class: "rounded-lg border border-gray-800 bg-gray-900/40 hover:border-gray-700 hover:bg-gray-900/60 transition-all duration-300 overflow-hidden",
            button {
                class: "w-full p-6 text-left flex items-center justify-between group",
                onclick: move |_| is_open.set(!is_open()),
                span { class: "text-lg font-medium text-white group-hover:text-lime-400 transition-colors", "{question}" }
                span { class: "text-2xl text-gray-400 transition-transform duration-300 {icon_class}", "+" }
            }
            if is_open() {
                div {
                    class: "px-6 pb-6",
                    p { class: "text-gray-300 leading-relaxed", "{answer}" }
                }
            }
        }
    }
}
