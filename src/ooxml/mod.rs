//! Office Open XML writing.
//!
//! [`opc`] is the package container; [`pptx`] builds PresentationML on top
//! of it.

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
