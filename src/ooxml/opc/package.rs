/// In-memory OPC package assembled before serialization.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package: package-level relationships plus an ordered list of parts.
///
/// Parts are written in insertion order, which keeps the serialized archive
/// identical between runs.
#[derive(Debug)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Relate the package itself to `target` (e.g. the main presentation part).
    pub fn relate_to(&mut self, reltype: &'static str, target: &PackURI) -> String {
        self.rels.add(reltype, target)
    }

    /// Add a part, rejecting a second part with the same name.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.iter().any(|p| p.partname() == part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
