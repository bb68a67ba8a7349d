//! Brand colors and text styles.

use crate::ooxml::pptx::{RgbColor, TextFormat};

pub const STEVENS_RED: RgbColor = RgbColor(0x9D, 0x15, 0x35);
pub const STEVENS_GRAY: RgbColor = RgbColor(0x94, 0x95, 0x94);
pub const DARK_GRAY: RgbColor = RgbColor(0x33, 0x33, 0x33);
pub const WHITE: RgbColor = RgbColor::WHITE;

/// Fill of even data rows in tables.
pub const TABLE_BAND: RgbColor = RgbColor(0xF5, 0xF5, 0xF5);
/// Fill of the box standing in for a chart.
pub const PLACEHOLDER_FILL: RgbColor = RgbColor(0xF8, 0xF8, 0xF8);

pub const FONT_PRIMARY: &str = "Helvetica Neue";

/// Text in the primary font at `size` points.
pub fn text(size: f64, color: RgbColor) -> TextFormat {
    TextFormat::new().font(FONT_PRIMARY).size(size).color(color)
}

pub fn slide_title() -> TextFormat {
    text(32.0, DARK_GRAY).bold(true)
}

pub fn bullet() -> TextFormat {
    text(20.0, DARK_GRAY)
}

pub fn one_liner() -> TextFormat {
    text(14.0, STEVENS_GRAY).italic(true)
}

pub fn column_header() -> TextFormat {
    text(18.0, STEVENS_RED).bold(true)
}

pub fn column_item() -> TextFormat {
    text(16.0, DARK_GRAY)
}

pub fn table_header() -> TextFormat {
    text(14.0, WHITE).bold(true)
}

pub fn table_cell() -> TextFormat {
    text(12.0, DARK_GRAY)
}

pub fn placeholder_label() -> TextFormat {
    text(18.0, STEVENS_GRAY)
}

pub fn placeholder_hint() -> TextFormat {
    text(12.0, STEVENS_GRAY)
}
