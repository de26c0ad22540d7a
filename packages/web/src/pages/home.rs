//! Landing page component

use dioxus::prelude::*;
use waitlist_core::IntakeForm;

use crate::components::{Faq, LaunchCountdown, RippleBackdrop, RotatingText};
use crate::effects::use_effect_host;

/// Landing page - hero, email form, countdown and FAQ
#[component]
pub fn Home() -> Element {
    let host = use_effect_host();
    let mut form = use_signal(IntakeForm::new);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        // Validation errors stay on the form; nothing else happens
        let submitted = form.write().submit();
        if let Ok(effects) = submitted {
            host.run(effects);
        }
    };

    let input = form.read().input().to_string();
    let error = form.read().error();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-gray-900 via-black to-gray-900 text-white relative overflow-hidden",

            RippleBackdrop { main_circle_size: 300.0, main_circle_opacity: 0.2, num_circles: 10 }
            div { class: "absolute inset-0 bg-black/40" }

            div {
                class: "relative z-10",

                // Hero
                div {
                    class: "container mx-auto px-4 py-16 text-center",

                    div {
                        class: "mb-8 inline-flex items-center rounded-full border border-lime-400/20 bg-lime-400/10 px-3 py-1 text-sm text-lime-400",
                        div { class: "w-2 h-2 bg-lime-400 rounded-full mr-2 animate-pulse" }
                        "AVAILABLE IN EARLY 2025"
                    }

                    h1 {
                        class: "text-5xl md:text-7xl font-bold mb-6 flex items-center justify-center gap-4 flex-wrap",
                        span {
                            class: "bg-gradient-to-b from-white via-gray-100 to-gray-400 bg-clip-text text-transparent",
                            "Get early"
                        }
                        RotatingText {
                            words: vec!["access".to_string(), "to Easyply".to_string()],
                            class: "bg-gradient-to-b from-lime-400 to-lime-500 bg-clip-text text-transparent",
                        }
                    }

                    p {
                        class: "text-xl text-gray-300 mb-12 max-w-2xl mx-auto leading-relaxed",
                        "Be amongst the first to experience Wait and launch a viral waitlist. Sign up to be notified when we launch!"
                    }

                    form {
                        class: "flex flex-col sm:flex-row gap-4 max-w-md mx-auto mb-4",
                        onsubmit: handle_submit,
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            value: "{input}",
                            oninput: move |e| form.write().set_input(e.value()),
                            class: "flex-1 rounded-md px-4 py-2 bg-gray-900/50 border border-gray-700 text-white placeholder:text-gray-400 focus:border-lime-400 focus:outline-none",
                        }
                        button {
                            r#type: "submit",
                            class: "rounded-md bg-lime-400 text-black hover:bg-lime-300 font-semibold px-8 py-2",
                            "Join waitlist"
                        }
                    }

                    if let Some(error) = error {
                        p { class: "text-sm text-red-400 mb-8", "{error}" }
                    }

                    p { class: "text-gray-300 mt-8 mb-16", "Join 12,500+ others on the waitlist" }

                    div {
                        class: "mb-8",
                        LaunchCountdown {}
                        p {
                            class: "mt-4 text-sm font-medium text-gray-300",
                            "LEFT UNTIL FULL RELEASE"
                        }
                    }
                }

                Faq {}
            }
        }
    }
}
