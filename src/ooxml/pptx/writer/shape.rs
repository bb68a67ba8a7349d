/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::{ImageFormat, RgbColor};
use std::fmt::Write as FmtWrite;

use super::table::Table;
use super::text::TextFrame;

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn write_xfrm(&self, xml: &mut String, prefix: &str) -> Result<()> {
        write!(
            xml,
            r#"<{prefix}:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{prefix}:xfrm>"#,
            self.x, self.y, self.width, self.height
        )?;
        Ok(())
    }
}

/// A shape on a slide (text box, image, etc.).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        frame: TextFrame,
        bounds: Bounds,
    },
    Rectangle {
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        /// `None` draws no outline
        line_color: Option<RgbColor>,
    },
    RoundedRectangle {
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        bounds: Bounds,
        description: String,
    },
    Table {
        table: Table,
        bounds: Bounds,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, frame: TextFrame, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox { frame, bounds },
        }
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                bounds,
                fill_color,
                line_color,
            },
        }
    }

    pub(crate) fn new_rounded_rectangle(
        shape_id: u32,
        bounds: Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::RoundedRectangle {
                bounds,
                fill_color,
                line_color,
            },
        }
    }

    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        bounds: Bounds,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Picture {
                data,
                format,
                bounds,
                description,
            },
        }
    }

    pub(crate) fn new_table(shape_id: u32, table: Table, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Table { table, bounds },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn bounds(&self) -> Bounds {
        match &self.shape_type {
            ShapeType::TextBox { bounds, .. }
            | ShapeType::Rectangle { bounds, .. }
            | ShapeType::RoundedRectangle { bounds, .. }
            | ShapeType::Picture { bounds, .. }
            | ShapeType::Table { bounds, .. } => *bounds,
        }
    }

    /// Text of a text box, one line per paragraph.
    pub fn text(&self) -> Option<String> {
        match &self.shape_type {
            ShapeType::TextBox { frame, .. } => Some(frame.text()),
            _ => None,
        }
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox { frame, .. } => Some(frame),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.shape_type {
            ShapeType::Table { table, .. } => Some(table),
            _ => None,
        }
    }

    pub fn is_picture(&self) -> bool {
        matches!(self.shape_type, ShapeType::Picture { .. })
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their image part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { frame, bounds } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, "a")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                frame.write_xml(xml)?;
                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle {
                bounds,
                fill_color,
                line_color,
            } => {
                self.write_auto_shape(xml, "Rectangle", "rect", bounds, *fill_color, *line_color)?;
            },
            ShapeType::RoundedRectangle {
                bounds,
                fill_color,
                line_color,
            } => {
                self.write_auto_shape(
                    xml,
                    "Rounded Rectangle",
                    "roundRect",
                    bounds,
                    *fill_color,
                    *line_color,
                )?;
            },
            ShapeType::Picture {
                bounds,
                description,
                ..
            } => {
                let rid = rel_id.ok_or_else(|| {
                    OoxmlError::Xml(format!(
                        "picture {} has no image relationship",
                        self.shape_id
                    ))
                })?;

                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id - 1,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, "a")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
            ShapeType::Table { table, bounds } => {
                xml.push_str("<p:graphicFrame>");
                xml.push_str("<p:nvGraphicFramePr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Table {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(
                    r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
                );
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvGraphicFramePr>");

                bounds.write_xfrm(xml, "p")?;

                xml.push_str("<a:graphic>");
                xml.push_str(
                    r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
                );
                table.write_xml(xml, bounds.width, bounds.height)?;
                xml.push_str("</a:graphicData>");
                xml.push_str("</a:graphic>");
                xml.push_str("</p:graphicFrame>");
            },
        }

        Ok(())
    }

    fn write_auto_shape(
        &self,
        xml: &mut String,
        name: &str,
        preset: &str,
        bounds: &Bounds,
        fill_color: Option<RgbColor>,
        line_color: Option<RgbColor>,
    ) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            self.shape_id,
            name,
            self.shape_id - 1
        )?;
        xml.push_str("<p:cNvSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        bounds.write_xfrm(xml, "a")?;
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;

        match fill_color {
            Some(color) => write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color
            )?,
            None => xml.push_str("<a:noFill/>"),
        }

        match line_color {
            Some(color) => write!(
                xml,
                r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                color
            )?,
            None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        }

        xml.push_str("</p:spPr>");
        xml.push_str("</p:sp>");
        Ok(())
    }
}
