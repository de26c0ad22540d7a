//! Join page component

use dioxus::prelude::*;
use waitlist_core::{JoinFlow, SubmissionState};

use crate::components::{LoadingSpinner, StarryBackdrop};
use crate::effects::use_effect_host;
use crate::routes::Route;
use crate::service;

/// Decoded `email` query value, `None` when absent.
pub(crate) fn decode_query(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    (!decoded.is_empty()).then_some(decoded)
}

/// Join page - registers the email from the query string, then redirects to
/// the verify page
#[component]
pub fn Waitlist(email: String) -> Element {
    let host = use_effect_host();
    let mut flow = use_signal(JoinFlow::new);
    let email = decode_query(&email);

    let requested = email.clone();
    use_future(move || {
        let requested = requested.clone();
        async move {
            let Some(address) = flow.write().begin(requested.as_deref()) else {
                return;
            };
            let reply = service::request_verification(address.as_str()).await;
            let effects = flow.write().finish(reply);
            host.run(effects);
        }
    });

    let state = flow.read().state();
    let error_message = flow.read().error_message().unwrap_or_default().to_string();
    let email = email.unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-gray-900 via-black to-gray-900 text-white relative overflow-hidden",

            StarryBackdrop {}

            div {
                class: "relative z-10 container mx-auto px-4 py-32 text-center max-w-2xl",

                match state {
                    SubmissionState::Idle | SubmissionState::Loading => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-lime-400/20 bg-lime-400/10 px-4 py-2 text-sm text-lime-400",
                            "JOINING WAITLIST..."
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-b from-white via-gray-100 to-gray-400 bg-clip-text text-transparent",
                            "Please wait..."
                        }
                        p {
                            class: "text-xl text-gray-300 mb-8 leading-relaxed",
                            "We're adding "
                            span { class: "text-lime-400 font-medium", "{email}" }
                            " to our waitlist. This will only take a moment."
                        }
                        LoadingSpinner { label: "Joining..." }
                    },
                    SubmissionState::Success => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-lime-400/20 bg-lime-400/10 px-4 py-2 text-sm text-lime-400",
                            "SUCCESS"
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-lime-400 to-lime-500 bg-clip-text text-transparent",
                            "Welcome aboard!"
                        }
                        p {
                            class: "text-xl text-gray-300 mb-8 leading-relaxed",
                            "Successfully added "
                            span { class: "text-lime-400 font-medium", "{email}" }
                            " to the waitlist. Redirecting to verification..."
                        }
                    },
                    SubmissionState::Error => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-red-500/20 bg-red-500/10 px-4 py-2 text-sm text-red-400",
                            "ERROR"
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-red-400 to-red-500 bg-clip-text text-transparent",
                            "Oops!"
                        }
                        p { class: "text-xl text-gray-300 mb-8 leading-relaxed", "{error_message}" }
                        Link {
                            to: Route::Home {},
                            class: "inline-block rounded-md bg-lime-400 text-black hover:bg-lime-300 font-semibold px-8 py-2",
                            "Try Again"
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_query() {
        assert_eq!(decode_query("a%40b.com").as_deref(), Some("a@b.com"));
        assert_eq!(decode_query("first%2Btag%40example.com").as_deref(), Some("first+tag@example.com"));
        assert_eq!(decode_query("plain@example.com").as_deref(), Some("plain@example.com"));
        assert_eq!(decode_query(""), None);
    }
}
