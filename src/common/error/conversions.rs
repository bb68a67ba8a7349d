//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified DeckError type.

use super::types::DeckError;
use crate::layout::LayoutError;
use crate::ooxml::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for DeckError {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => DeckError::Io(e),
            OpcError::ZipError(e) => DeckError::Package(e.to_string()),
            OpcError::InvalidPackUri(s) => DeckError::Package(s),
            OpcError::DuplicatePart(s) => DeckError::Package(format!("duplicate part {}", s)),
        }
    }
}

impl From<OoxmlError> for DeckError {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => DeckError::from(e),
            OoxmlError::Xml(s) => DeckError::XmlError(s),
            OoxmlError::InvalidFormat(s) => DeckError::InvalidFormat(s),
            OoxmlError::Io(e) => DeckError::Io(e),
        }
    }
}

impl From<LayoutError> for DeckError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::MissingResource(s) => DeckError::MissingResource(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_io_error_is_flattened() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DeckError::from(OoxmlError::Opc(OpcError::IoError(io)));
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn test_layout_error_message() {
        let err = DeckError::from(LayoutError::MissingResource("chart.png".into()));
        assert_eq!(err.to_string(), "Missing resource: chart.png");
    }
}
