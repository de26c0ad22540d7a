//! Root application component

use dioxus::prelude::*;

use crate::components::{ConfettiOverlay, Toaster};
use crate::routes::Route;
use crate::state::{CelebrationProvider, NoticeProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Toasts and confetti outlive page changes, so they sit above the router
        NoticeProvider {
            CelebrationProvider {
                Router::<Route> {}
                ConfettiOverlay {}
                Toaster {}
            }
        }
    }
}
