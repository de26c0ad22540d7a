//! Waitlist - Dioxus Fullstack Web Application
//!
//! The landing page, the join page and the verify page. Page logic lives in
//! `waitlist-core`; this crate renders it and runs its effects on component
//! scoped tasks.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod effects;
mod pages;
mod routes;
mod service;
mod state;
mod time;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Resolve the verification service once, server side
    #[cfg(feature = "server")]
    waitlist_core::client::init_service_url(
        std::env::var("VERIFY_SERVICE_URL")
            .unwrap_or_else(|_| waitlist_core::client::DEFAULT_SERVICE_URL.to_string()),
    );

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
