//! Writers that build a presentation in memory and serialize it as `.pptx`.

pub mod pres;
pub mod relmap;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

pub use pres::MutablePresentation;
pub use shape::{Bounds, MutableShape};
pub use slide::MutableSlide;
pub use table::{Table, TableCell};
pub use text::{Paragraph, TextFrame};
