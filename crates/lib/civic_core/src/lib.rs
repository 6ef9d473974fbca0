//! # civic_core
//!
//! Core domain logic for CivicConnect: persona prompts, the Gemini client,
//! and the structurer that turns free-text replies into sections.

pub mod gemini;
pub mod models;
pub mod prompts;
pub mod structurer;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
