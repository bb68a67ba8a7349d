/// Text frames and paragraphs for text boxes and table cells.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Alignment, TextFormat};
use std::fmt::Write as FmtWrite;

/// One paragraph: a single run of text with its own formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub format: TextFormat,
    pub alignment: Option<Alignment>,
    /// Spacing after the paragraph in points
    pub space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
            alignment: None,
            space_after: None,
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Write `<a:p>` for this paragraph.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.alignment.is_some() || self.space_after.is_some() {
            xml.push_str("<a:pPr");
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_attr())?;
            }
            xml.push('>');
            if let Some(points) = self.space_after {
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    pt_to_centipoints(points)
                )?;
            }
            xml.push_str("</a:pPr>");
        }

        if self.text.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
        } else {
            xml.push_str("<a:r>");
            write_run_properties(xml, &self.format)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Write `<a:rPr>`; child order follows CT_TextCharacterProperties
/// (fill before latin typeface).
fn write_run_properties(xml: &mut String, format: &TextFormat) -> Result<()> {
    xml.push_str(r#"<a:rPr lang="en-US""#);

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(bold) = format.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = format.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    xml.push_str(r#" dirty="0""#);

    if format.color.is_none() && format.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }
    xml.push('>');

    if let Some(color) = format.color {
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color
        )?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }

    xml.push_str("</a:rPr>");
    Ok(())
}

/// The text content of a text box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    /// Wrap lines at the box edge instead of growing the box sideways
    pub word_wrap: bool,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame holding a single paragraph.
    pub fn single(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            word_wrap: false,
        }
    }

    pub fn push(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    /// Concatenated paragraph text, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write `<p:txBody>` for a text box shape.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        write!(
            xml,
            r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#,
            if self.word_wrap { "square" } else { "none" }
        )?;
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}
