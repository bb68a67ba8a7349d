/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::{ImageFormat, RgbColor};
use super::relmap::RelationshipMapper;
use super::shape::{Bounds, MutableShape};
use super::table::Table;
use super::text::TextFrame;

const SLIDE_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

/// Notes body placement on the 7.5" x 10" notes page.
const NOTES_BODY: Bounds = Bounds {
    x: 685_800,
    y: 4_343_400,
    width: 5_486_400,
    height: 4_114_800,
};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Solid background fill
    pub(crate) background: Option<RgbColor>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
            notes: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: RgbColor) {
        self.background = Some(color);
    }

    /// Set speaker notes for the slide.
    ///
    /// Each line of `notes` becomes its own paragraph on the notes page.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Next free shape ID; ID 1 belongs to the shape tree itself.
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    /// Add a text box holding `frame` at the given position (EMUs).
    pub fn add_text_box(&mut self, frame: TextFrame, bounds: Bounds) {
        let shape = MutableShape::new_text_box(self.next_shape_id(), frame, bounds);
        self.shapes.push(shape);
    }

    /// Add a rectangle. A `None` line color draws the shape without an outline.
    pub fn add_rectangle(
        &mut self,
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    ) {
        let shape =
            MutableShape::new_rectangle(self.next_shape_id(), bounds, fill_color, line_color);
        self.shapes.push(shape);
    }

    pub fn add_rounded_rectangle(
        &mut self,
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    ) {
        let shape = MutableShape::new_rounded_rectangle(
            self.next_shape_id(),
            bounds,
            fill_color,
            line_color,
        );
        self.shapes.push(shape);
    }

    /// Add a picture to the slide from bytes.
    ///
    /// The image is stretched to `bounds`; callers size the bounds to keep
    /// the aspect ratio.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        bounds: Bounds,
        description: Option<String>,
    ) -> Result<()> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = MutableShape::new_picture(self.next_shape_id(), data, format, bounds, desc);
        self.shapes.push(shape);

        Ok(())
    }

    pub fn add_table(&mut self, table: Table, bounds: Bounds) {
        let shape = MutableShape::new_table(self.next_shape_id(), table, bounds);
        self.shapes.push(shape);
    }

    /// Collect all images from this slide in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(MutableShape::get_image_data)
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, "<p:sld {}>", SLIDE_NAMESPACES)?;
        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            )?;
        }

        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content, or `None` when the slide has no notes.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(Self::write_notes(notes_text))
    }

    fn write_notes(notes_text: &str) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, "<p:notes {}>", SLIDE_NAMESPACES)?;
        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder 1"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        // The notes master carries no placeholders to inherit a position from
        write!(
            xml,
            r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
            NOTES_BODY.x, NOTES_BODY.y, NOTES_BODY.width, NOTES_BODY.height
        )?;

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes_text.lines() {
            xml.push_str("<a:p>");
            if line.is_empty() {
                xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
            } else {
                write!(
                    xml,
                    r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
                    escape_xml(line)
                )?;
            }
            xml.push_str("</a:p>");
        }
        if notes_text.is_empty() {
            xml.push_str("<a:p/>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}

/// Write the required group shape properties of a shape tree.
fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
    xml.push_str("</p:grpSpPr>");
}
