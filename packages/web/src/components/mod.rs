//! Reusable UI components

mod backdrop;
mod confetti;
mod countdown;
mod faq;
mod falling_stars;
mod loading;
mod ripple;
mod rotating_text;
mod toaster;

pub use backdrop::*;
pub use confetti::*;
pub use countdown::*;
pub use faq::*;
pub use falling_stars::*;
pub use loading::*;
pub use ripple::*;
pub use rotating_text::*;
pub use toaster::*;
