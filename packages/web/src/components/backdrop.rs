use dioxus::prelude::*;

use super::{FallingStars, RippleBackdrop};

/// Ripple rings under a falling star field, shared by the join and verify pages.
#[component]
pub fn StarryBackdrop() -> Element {
    rsx! {
        RippleBackdrop {}
        FallingStars {}
    }
}
