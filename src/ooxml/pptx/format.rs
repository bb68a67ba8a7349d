//! Format types for PPTX presentations.

use crate::ooxml::opc::constants::content_type as ct;
use std::fmt;

/// Image format types that can be embedded in a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        None
    }
}

/// A 24-bit sRGB color, written as `srgbClr val="RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor(0xFF, 0xFF, 0xFF);
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

impl Alignment {
    /// Value of the `algn` attribute on `a:pPr`.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
        }
    }
}

/// Text formatting properties for a run of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RgbColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::detect_from_bytes(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn test_detect_rejects_short_or_unknown() {
        assert_eq!(ImageFormat::detect_from_bytes(&[0x89, 0x50]), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"%PDF-1.7"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"GIF89a\x01\x00"), None);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(RgbColor(0x9D, 0x15, 0x35).to_string(), "9D1535");
        assert_eq!(RgbColor::WHITE.to_string(), "FFFFFF");
    }

    #[test]
    fn test_text_format_builder() {
        let format = TextFormat::new().size(32.0).bold(true);
        assert_eq!(format.size, Some(32.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, None);
    }
}
