// Waitlist - API server
//
// The landing page's only local endpoint: email syntax checks for the
// waitlist form. Storing entries and issuing verification tokens belong to
// the external verification service, not to this crate.

pub mod config;
pub mod server;

pub use config::*;
