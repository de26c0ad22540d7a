//! Verify page components

use dioxus::prelude::*;
use waitlist_core::{resolve_token, ResendStep, SubmissionState, VerificationKind, VerifyFlow};

use crate::components::{LoadingSpinner, StarryBackdrop};
use crate::effects::use_effect_host;
use crate::routes::Route;
use crate::service;
use crate::state::use_notices;

/// `/verify?token=...`
#[component]
pub fn VerifyLink(token: String) -> Element {
    let token = resolve_token(Some(token.as_str()), &[]);
    rsx! { VerifyPage { token } }
}

/// `/verify/<token...>`
#[component]
pub fn VerifyPath(segments: Vec<String>) -> Element {
    let token = resolve_token(None, &segments);
    rsx! { VerifyPage { token } }
}

/// Checks the token once on mount and shows the outcome
#[component]
fn VerifyPage(#[props(!optional)] token: Option<String>) -> Element {
    let host = use_effect_host();
    let notices = use_notices();
    let mut flow = use_signal(VerifyFlow::new);

    use_future(move || {
        let token = token.clone();
        async move {
            let Some(token) = flow.write().begin(token) else {
                return;
            };
            let reply = service::check_token(&token).await;
            let effects = flow.write().finish(reply);
            host.run(effects);
        }
    });

    let handle_resend = move |_| {
        spawn(async move {
            let step = flow.write().begin_resend();
            match step {
                ResendStep::Send(email) => {
                    let reply = service::request_verification(email.as_str()).await;
                    let notice = flow.write().finish_resend(reply);
                    notices.push(notice);
                }
                ResendStep::Notify(notice) => notices.push(notice),
                ResendStep::Busy => {}
            }
        });
    };

    let flow = flow.read();
    let email = flow.email().map(str::to_string);
    let shown_email = email.clone().unwrap_or_default();
    let error_message = flow
        .error_message()
        .unwrap_or("We couldn't process your request. Please try again or contact support.")
        .to_string();
    // A 2xx reply that still reports an error
    let rejected = matches!(flow.outcome().map(|o| o.kind), Some(VerificationKind::Error));
    let resending = flow.is_resending();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-gray-900 via-black to-gray-900 text-white relative overflow-hidden",

            StarryBackdrop {}

            div {
                class: "relative z-10 container mx-auto px-4 py-32 text-center max-w-2xl",

                match flow.state() {
                    SubmissionState::Idle | SubmissionState::Loading => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-lime-400/20 bg-lime-400/10 px-4 py-2 text-sm text-lime-400",
                            "VERIFYING EMAIL..."
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-b from-white via-gray-100 to-gray-400 bg-clip-text text-transparent",
                            "Please wait..."
                        }
                        p {
                            class: "text-xl text-gray-300 mb-8 leading-relaxed",
                            "We're verifying your email and setting up your waitlist account."
                        }
                        LoadingSpinner { label: "Verifying..." }
                    },
                    SubmissionState::Success => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-lime-400/20 bg-lime-400/10 px-4 py-2 text-sm text-lime-400",
                            "SUCCESSFULLY VERIFIED"
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6",
                            span { class: "bg-gradient-to-b from-white via-gray-100 to-gray-400 bg-clip-text text-transparent", "Welcome to the" }
                            br {}
                            span { class: "bg-gradient-to-r from-lime-400 to-lime-500 bg-clip-text text-transparent", "waitlist!" }
                        }
                        p {
                            class: "text-xl text-gray-300 mb-8 leading-relaxed",
                            "Congratulations! Your email "
                            span { class: "text-lime-400 font-medium", "{shown_email}" }
                            " has been successfully verified and added to our waitlist. You'll be among the first to know when we launch!"
                        }
                        div {
                            class: "rounded-lg border border-gray-800 bg-gray-900/40 p-6 mb-8",
                            h3 { class: "text-lg font-semibold text-white mb-4", "You're all set!" }
                            p {
                                class: "text-gray-400 mb-4 text-sm",
                                "We'll notify you via email when Easyply is ready to launch. Keep an eye on your inbox!"
                            }
                            Link {
                                to: Route::Home {},
                                class: "inline-block rounded-md bg-lime-400 text-black hover:bg-lime-300 font-semibold px-6 py-2",
                                "Back to Home"
                            }
                        }
                    },
                    SubmissionState::Error => rsx! {
                        div {
                            class: "mb-6 inline-flex items-center rounded-full border border-red-500/20 bg-red-500/10 px-4 py-2 text-sm text-red-400",
                            if rejected { "REQUEST FAILED" } else { "VERIFICATION FAILED" }
                        }
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-6",
                            span { class: "bg-gradient-to-b from-white via-gray-100 to-gray-400 bg-clip-text text-transparent", "Something went" }
                            br {}
                            span { class: "bg-gradient-to-r from-red-400 to-red-500 bg-clip-text text-transparent", "wrong" }
                        }
                        p {
                            class: "text-xl text-gray-300 mb-8 leading-relaxed",
                            "{error_message}"
                            if let Some(email) = email.clone() {
                                span {
                                    class: "text-gray-400 text-lg mt-2 block",
                                    "Email: "
                                    span { class: "text-red-400", "{email}" }
                                }
                            }
                        }
                        div {
                            class: "flex gap-4 justify-center flex-wrap",
                            Link {
                                to: Route::Home {},
                                class: "inline-block rounded-md bg-lime-400 text-black hover:bg-lime-300 font-semibold px-8 py-2",
                                "Try Again"
                            }
                            if email.is_some() {
                                button {
                                    class: "rounded-md border border-lime-400/30 text-lime-400 hover:bg-lime-400/10 px-6 py-2 disabled:opacity-50",
                                    disabled: resending,
                                    onclick: handle_resend,
                                    if resending { "Sending..." } else { "Resend Email" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
