//! Utilities shared by the layout calculator and the presentation writer.

pub mod error;
pub mod unit;
pub mod xml;

pub use error::{DeckError, Result};
