/// Open Packaging Conventions (OPC) writer.
///
/// The container format of `.pptx` files: a ZIP archive whose members are
/// parts, tied together by relationship parts and typed by
/// `[Content_Types].xml`.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
