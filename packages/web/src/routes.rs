//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Home, VerifyLink, VerifyPath, Waitlist};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/waitlist?:email")]
    Waitlist { email: String },

    // Token as a query parameter...
    #[route("/verify?:token")]
    VerifyLink { token: String },

    // ...or as the rest of the path, slashes included
    #[route("/verify/:..segments")]
    VerifyPath { segments: Vec<String> },
}
