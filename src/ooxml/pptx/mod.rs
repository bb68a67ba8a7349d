//! PowerPoint (.pptx) presentation writing.
//!
//! A presentation is built in memory as [`MutablePresentation`] →
//! [`MutableSlide`] → [`MutableShape`] and serialized through the OPC
//! package writer.
//!
//! ```rust
//! use pitch_deck::ooxml::pptx::{Bounds, MutablePresentation, Paragraph, TextFormat, TextFrame};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_text_box(
//!     TextFrame::single(Paragraph::new("Hello", TextFormat::new().size(32.0))),
//!     Bounds::new(457_200, 274_320, 8_229_600, 731_520),
//! );
//! let bytes = pres.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), pitch_deck::ooxml::OoxmlError>(())
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::{Alignment, ImageFormat, RgbColor, TextFormat};
pub use writer::{
    Bounds, MutablePresentation, MutableShape, MutableSlide, Paragraph, Table, TableCell,
    TextFrame,
};
