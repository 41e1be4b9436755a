//! User-facing messages: the `Message` catalogue, its text, and the output
//! macros built on top of it.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
