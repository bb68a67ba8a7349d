//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a ZIP archive: `[Content_Types].xml`,
//! the package relationships, then every part followed by its `.rels`.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Package writer that serializes an OPC package to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        Self::write_content_types(&mut zip, package)?;
        Self::write_pkg_rels(&mut zip, package)?;
        Self::write_parts(&mut zip, package)?;

        Ok(zip.finish()?.into_inner())
    }

    /// Member options shared by every entry.
    ///
    /// The modification time is pinned to the DOS epoch so regenerating the
    /// same deck yields the same bytes.
    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
    }

    fn write_member<W: Write + std::io::Seek>(
        zip: &mut ZipWriter<W>,
        uri: &PackURI,
        blob: &[u8],
    ) -> Result<()> {
        zip.start_file(uri.membername(), Self::options())?;
        zip.write_all(blob)?;
        Ok(())
    }

    fn write_content_types<W: Write + std::io::Seek>(
        zip: &mut ZipWriter<W>,
        package: &OpcPackage,
    ) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        Self::write_member(zip, &PackURI::new(CONTENT_TYPES_URI)?, cti.to_xml().as_bytes())
    }

    fn write_pkg_rels<W: Write + std::io::Seek>(
        zip: &mut ZipWriter<W>,
        package: &OpcPackage,
    ) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        Self::write_member(zip, &rels_uri, package.rels().to_xml().as_bytes())
    }

    fn write_parts<W: Write + std::io::Seek>(
        zip: &mut ZipWriter<W>,
        package: &OpcPackage,
    ) -> Result<()> {
        for part in package.iter_parts() {
            Self::write_member(zip, part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                Self::write_member(zip, &rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: HashMap<String, String>,

    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }

        cti
    }

    /// Images map by extension; XML parts get an override per partname.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        // Sorted so the output does not depend on hash order
        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(&self.defaults[ext])
            ));
        }

        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(&self.overrides[partname])
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
