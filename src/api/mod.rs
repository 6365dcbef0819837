//! Remote API Bindings
//!
//! Frontend bindings to the public recipe API, organized by resource.

mod error;
mod recipes;

// Re-export all public items
pub use error::*;
pub use recipes::*;
