//! Page components

mod home;
mod verify;
mod waitlist;

pub use home::*;
pub use verify::*;
pub use waitlist::*;
