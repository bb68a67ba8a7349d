//! Pitch Deck - generates the FE571 basket pairs trading strategy presentation
//!
//! The crate writes a fixed 20-slide PowerPoint deck (16:9, speaker notes on
//! every slide) with a small OOXML writer of its own.
//!
//! # Modules
//!
//! - [`layout`]: slide geometry and aspect-preserving image fitting
//! - [`deck`]: brand theme, slide builders and the deck content
//! - [`ooxml`]: the PresentationML model and OPC package writer
//! - [`common`]: unit conversion, XML escaping and the unified error type
//!
//! # Example
//!
//! ```no_run
//! use pitch_deck::deck::{self, DeckConfig};
//!
//! # fn main() -> pitch_deck::Result<()> {
//! let config = DeckConfig::new("deck.pptx", "backtesting/charts/");
//! let slides = deck::generate(&config)?;
//! assert_eq!(slides, 20);
//! # Ok(())
//! # }
//! ```

pub mod common;

/// Slide layout computation
pub mod layout;

/// OOXML (Office Open XML) presentation writer
///
/// This module provides the in-memory presentation model and the package
/// writer that serializes it as a .pptx file.
pub mod ooxml;

/// The strategy presentation
pub mod deck;

// Re-export commonly used types for convenience
pub use common::{DeckError, Result};
pub use deck::{DeckConfig, generate};
pub use layout::{ImageFit, LayoutError, fit_image};
