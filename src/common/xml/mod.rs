//! XML helpers used when serializing presentation parts.

mod escape;

pub use escape::escape_xml;
