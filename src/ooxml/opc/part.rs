/// A single part (zip member) of an OPC package together with its
/// outgoing relationships.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part with no outgoing relationships.
    pub fn new(partname: PackURI, content_type: &'static str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }

    /// Create a part whose relationships were already collected.
    pub fn with_rels(
        partname: PackURI,
        content_type: &'static str,
        blob: Vec<u8>,
        rels: Relationships,
    ) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}
