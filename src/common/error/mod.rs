//! Unified error type for deck generation.
//!
//! Packaging, presentation-model and layout errors all convert into
//! [`DeckError`], so the generator and the binary deal with a single type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{DeckError, Result};
