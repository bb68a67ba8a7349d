/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source part (or the package itself) to its target
/// parts. Ids are assigned in insertion order so serialized output is stable.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: &'static str,

    /// Target reference relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI targets are made relative to
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Directory of the source part ("/" for the package)
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.to_string(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target` and return its newly assigned rId.
    pub fn add(&mut self, reltype: &'static str, target: &PackURI) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target_ref: target.relative_ref(&self.base_uri),
        });
        r_id
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Serialize to the `.rels` part XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        let image = PackURI::new("/ppt/media/image1.png").unwrap();

        assert_eq!(rels.add(rt::SLIDE_LAYOUT, &layout), "rId1");
        assert_eq!(rels.add(rt::IMAGE, &image), "rId2");
        assert_eq!(rels.len(), 2);

        let targets: Vec<_> = rels.iter().map(|r| r.target_ref()).collect();
        assert_eq!(
            targets,
            ["../slideLayouts/slideLayout1.xml", "../media/image1.png"]
        );
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new("/");
        rels.add(
            rt::OFFICE_DOCUMENT,
            &PackURI::new("/ppt/presentation.xml").unwrap(),
        );

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="ppt/presentation.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
