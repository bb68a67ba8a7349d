/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::relmap::RelationshipMapper;
use super::slide::MutableSlide;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const NOTES_MASTER_URI: &str = "/ppt/notesMasters/notesMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const NOTES_THEME_URI: &str = "/ppt/theme/theme2.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

/// Notes page size (7.5" x 10", portrait).
const NOTES_WIDTH: i64 = 6_858_000;
const NOTES_HEIGHT: i64 = 9_144_000;

/// A mutable PowerPoint presentation for writing.
///
/// Slides are appended in order and the whole presentation is serialized
/// once with [`save`](Self::save) or [`to_bytes`](Self::to_bytes).
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    title: String,
    author: String,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 6_858_000, // 7.5 inches
            title: String::new(),
            author: String::new(),
        }
    }

    /// Add a new slide to the end of the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Set the document title and author written to the core properties.
    pub fn set_properties(&mut self, title: &str, author: &str) {
        self.title = title.to_string();
        self.author = author.to_string();
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `notes_master_rel_id` - Relationship ID of the notes master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        master_rel_id: &str,
        notes_master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        xml.push_str("<p:notesMasterIdLst>");
        write!(xml, r#"<p:notesMasterId r:id="{}"/>"#, notes_master_rel_id)?;
        xml.push_str("</p:notesMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            NOTES_WIDTH, NOTES_HEIGHT
        )?;
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble every part of the presentation into an OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let layout_uri = PackURI::new(SLIDE_LAYOUT_URI)?;
        let notes_master_uri = PackURI::new(NOTES_MASTER_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        let notes_theme_uri = PackURI::new(NOTES_THEME_URI)?;
        let core_uri = PackURI::new(CORE_PROPS_URI)?;
        let app_uri = PackURI::new(APP_PROPS_URI)?;

        pkg.relate_to(rt::OFFICE_DOCUMENT, &pres_uri);
        pkg.relate_to(rt::CORE_PROPERTIES, &core_uri);
        pkg.relate_to(rt::EXTENDED_PROPERTIES, &app_uri);

        let mut pres_rels = Relationships::new(pres_uri.base_uri());
        let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, &master_uri);

        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        let mut slide_parts = Vec::with_capacity(self.slides.len() * 2);
        let mut media_parts = Vec::new();
        let mut notes_count = 0;

        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_rels.add(rt::SLIDE, &slide_uri));

            let mut slide_rels = Relationships::new(slide_uri.base_uri());
            slide_rels.add(rt::SLIDE_LAYOUT, &layout_uri);

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                let media_uri = PackURI::new(format!(
                    "/ppt/media/image{}.{}",
                    media_parts.len() + 1,
                    format.extension()
                ))?;
                let rel_id = slide_rels.add(rt::IMAGE, &media_uri);
                rel_mapper.add_image(index, image_index, rel_id);
                media_parts.push(Part::new(media_uri, format.mime_type(), data.to_vec()));
            }

            if let Some(notes_xml) = slide.generate_notes_xml() {
                notes_count += 1;
                let notes_uri =
                    PackURI::new(format!("/ppt/notesSlides/notesSlide{}.xml", index + 1))?;
                slide_rels.add(rt::NOTES_SLIDE, &notes_uri);

                let mut notes_rels = Relationships::new(notes_uri.base_uri());
                notes_rels.add(rt::NOTES_MASTER, &notes_master_uri);
                notes_rels.add(rt::SLIDE, &slide_uri);
                slide_parts.push(Part::with_rels(
                    notes_uri,
                    ct::PML_NOTES_SLIDE,
                    notes_xml?.into_bytes(),
                    notes_rels,
                ));
            }

            let slide_xml = slide.to_xml_with_rels(index, &rel_mapper)?;
            slide_parts.push(Part::with_rels(
                slide_uri,
                ct::PML_SLIDE,
                slide_xml.into_bytes(),
                slide_rels,
            ));
        }

        let notes_master_rel_id = pres_rels.add(rt::NOTES_MASTER, &notes_master_uri);
        let pres_props_uri = PackURI::new(PRES_PROPS_URI)?;
        let view_props_uri = PackURI::new(VIEW_PROPS_URI)?;
        let table_styles_uri = PackURI::new(TABLE_STYLES_URI)?;
        pres_rels.add(rt::PRES_PROPS, &pres_props_uri);
        pres_rels.add(rt::VIEW_PROPS, &view_props_uri);
        pres_rels.add(rt::THEME, &theme_uri);
        pres_rels.add(rt::TABLE_STYLES, &table_styles_uri);

        let pres_xml = self.generate_presentation_xml_with_rels(
            &master_rel_id,
            &notes_master_rel_id,
            &slide_rel_ids,
        )?;
        pkg.add_part(Part::with_rels(
            pres_uri,
            ct::PML_PRESENTATION_MAIN,
            pres_xml.into_bytes(),
            pres_rels,
        ))?;

        for part in slide_parts {
            pkg.add_part(part)?;
        }

        // Slide master: layout as rId1, theme as rId2
        let mut master_rels = Relationships::new(master_uri.base_uri());
        master_rels.add(rt::SLIDE_LAYOUT, &layout_uri);
        master_rels.add(rt::THEME, &theme_uri);
        pkg.add_part(Part::with_rels(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes().to_vec(),
            master_rels,
        ))?;

        let mut layout_rels = Relationships::new(layout_uri.base_uri());
        layout_rels.add(rt::SLIDE_MASTER, &master_uri);
        pkg.add_part(Part::with_rels(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().as_bytes().to_vec(),
            layout_rels,
        ))?;

        let mut notes_master_rels = Relationships::new(notes_master_uri.base_uri());
        notes_master_rels.add(rt::THEME, &notes_theme_uri);
        pkg.add_part(Part::with_rels(
            notes_master_uri,
            ct::PML_NOTES_MASTER,
            template::default_notes_master_xml().as_bytes().to_vec(),
            notes_master_rels,
        ))?;

        for uri in [theme_uri, notes_theme_uri] {
            pkg.add_part(Part::new(
                uri,
                ct::OFC_THEME,
                template::default_theme_xml().as_bytes().to_vec(),
            ))?;
        }

        pkg.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml().as_bytes().to_vec(),
        ))?;
        pkg.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml().into_bytes(),
        ))?;

        for part in media_parts {
            pkg.add_part(part)?;
        }

        pkg.add_part(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title, &self.author).into_bytes(),
        ))?;
        pkg.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len(), notes_count).into_bytes(),
        ))?;

        Ok(pkg)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.to_package()?)?)
    }

    /// Save the presentation to a `.pptx` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, &self.to_package()?)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::TextFormat;
    use crate::ooxml::pptx::writer::shape::Bounds;
    use crate::ooxml::pptx::writer::text::{Paragraph, TextFrame};
    use std::io::{Cursor, Read};

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_slide_height(5_143_500);
        pres.set_properties("Deck", "Group 7");

        let slide = pres.add_slide();
        slide.add_text_box(
            TextFrame::single(Paragraph::new("Hello", TextFormat::new())),
            Bounds::new(0, 0, 914_400, 914_400),
        );
        slide.set_notes("• one\n• two");

        let slide = pres.add_slide();
        slide
            .add_picture_from_bytes(PNG_HEADER.to_vec(), Bounds::new(0, 0, 10, 10), None)
            .unwrap();
        pres
    }

    fn read_member(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut out = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();
        let ids: Vec<u32> = pres.slides().iter().map(MutableSlide::slide_id).collect();
        assert_eq!(ids, vec![256, 257]);
    }

    #[test]
    fn test_presentation_xml() {
        let pres = sample();
        let ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres
            .generate_presentation_xml_with_rels("rId1", "rId4", &ids)
            .unwrap();

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:notesMasterId r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
        assert!(xml.find("<p:notesMasterIdLst>").unwrap() < xml.find("<p:sldIdLst>").unwrap());
    }

    #[test]
    fn test_package_members() {
        let bytes = sample().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "ppt/media/image1.png",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/notesMasters/notesMaster1.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing {name}");
        }
        assert!(archive.by_name("ppt/notesSlides/notesSlide2.xml").is_err());

        let slide_rels = read_member(&mut archive, "ppt/slides/_rels/slide2.xml.rels");
        assert!(slide_rels.contains(r#"Target="../media/image1.png""#));

        let notes_rels = read_member(&mut archive, "ppt/notesSlides/_rels/notesSlide1.xml.rels");
        assert!(notes_rels.contains(r#"Target="../slides/slide1.xml""#));
        assert!(notes_rels.contains(r#"Target="../notesMasters/notesMaster1.xml""#));

        let app = read_member(&mut archive, "docProps/app.xml");
        assert!(app.contains("<Slides>2</Slides><Notes>1</Notes>"));
    }

    #[test]
    fn test_save_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.pptx");
        let second = dir.path().join("b.pptx");

        sample().save(&first).unwrap();
        sample().save(&second).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }
}
