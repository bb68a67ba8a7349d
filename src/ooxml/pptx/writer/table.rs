/// Table content for PPTX graphic frames.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Alignment, RgbColor, TextFormat};
use crate::ooxml::pptx::template::DEFAULT_TABLE_STYLE_ID;
use std::fmt::Write as FmtWrite;

use super::text::Paragraph;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub format: TextFormat,
    pub alignment: Option<Alignment>,
    /// Solid cell fill; `None` keeps the table style's fill
    pub fill: Option<RgbColor>,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::default(),
            alignment: None,
            fill: None,
        }
    }

    pub fn format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn fill(mut self, color: RgbColor) -> Self {
        self.fill = Some(color);
        self
    }
}

/// A rectangular grid of cells; the first row is styled as a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<TableCell>>,
    pub first_row_header: bool,
    pub band_rows: bool,
}

impl Table {
    pub fn new(rows: Vec<Vec<TableCell>>) -> Self {
        Self {
            rows,
            first_row_header: true,
            band_rows: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row; shorter rows are padded with empty cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Split `total` evenly into `parts`, giving the remainder to the last part.
    fn distribute(total: i64, parts: usize) -> Vec<i64> {
        if parts == 0 {
            return Vec::new();
        }
        let each = total / parts as i64;
        let mut sizes = vec![each; parts];
        if let Some(last) = sizes.last_mut() {
            *last += total - each * parts as i64;
        }
        sizes
    }

    /// Write the `<a:tbl>` element sized to `width` x `height` EMUs.
    pub(crate) fn write_xml(&self, xml: &mut String, width: i64, height: i64) -> Result<()> {
        let cols = self.column_count();
        let col_widths = Self::distribute(width, cols);
        let row_heights = Self::distribute(height, self.row_count());

        xml.push_str("<a:tbl>");
        write!(
            xml,
            r#"<a:tblPr firstRow="{}" bandRow="{}"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
            u8::from(self.first_row_header),
            u8::from(self.band_rows),
            DEFAULT_TABLE_STYLE_ID
        )?;

        xml.push_str("<a:tblGrid>");
        for w in &col_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, w)?;
        }
        xml.push_str("</a:tblGrid>");

        let empty = TableCell::new("");
        for (row, h) in self.rows.iter().zip(&row_heights) {
            write!(xml, r#"<a:tr h="{}">"#, h)?;
            for col in 0..cols {
                Self::write_cell(xml, row.get(col).unwrap_or(&empty))?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        Ok(())
    }

    fn write_cell(xml: &mut String, cell: &TableCell) -> Result<()> {
        xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");

        let mut paragraph = Paragraph::new(cell.text.as_str(), cell.format.clone());
        paragraph.alignment = cell.alignment;
        paragraph.write_xml(xml)?;

        xml.push_str("</a:txBody>");
        match cell.fill {
            Some(color) => write!(
                xml,
                r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:tcPr>"#,
                color
            )?,
            None => xml.push_str("<a:tcPr/>"),
        }
        xml.push_str("</a:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            vec![TableCell::new("Year"), TableCell::new("Strategy"), TableCell::new("SPY")],
            vec![TableCell::new("2018"), TableCell::new("+13%"), TableCell::new("-4%")],
            vec![TableCell::new("2022"), TableCell::new("+16%")],
        ])
    }

    #[test]
    fn test_dimensions() {
        let table = sample();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(1, 1).map(|c| c.text.as_str()), Some("+13%"));
        assert!(table.cell(2, 2).is_none());
    }

    #[test]
    fn test_distribute_keeps_total() {
        let widths = Table::distribute(8_229_600, 7);
        assert_eq!(widths.len(), 7);
        assert_eq!(widths.iter().sum::<i64>(), 8_229_600);
        assert!(Table::distribute(100, 0).is_empty());
    }

    #[test]
    fn test_xml_pads_short_rows() {
        let mut xml = String::new();
        sample().write_xml(&mut xml, 9_000, 3_000).unwrap();

        assert_eq!(xml.matches("<a:gridCol").count(), 3);
        assert_eq!(xml.matches("<a:tr ").count(), 3);
        assert_eq!(xml.matches("<a:tc>").count(), 9);
        assert!(xml.contains(r#"<a:tr h="1000">"#));
        assert!(xml.contains(r#"firstRow="1" bandRow="1""#));
    }

    #[test]
    fn test_cell_fill() {
        let mut xml = String::new();
        let cell = TableCell::new("Pair")
            .fill(RgbColor(0x9D, 0x15, 0x35))
            .align(Alignment::Center);
        Table::write_cell(&mut xml, &cell).unwrap();

        assert!(xml.contains(r#"<a:srgbClr val="9D1535"/>"#));
        assert!(xml.contains(r#"algn="ctr""#));
    }
}
