//! Fixed element rectangles of the 16:9 deck, in inches.

use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::Bounds;

use super::ImageFit;

/// Slide width in inches.
pub const SLIDE_WIDTH: f64 = 10.0;
/// Slide height in inches (16:9).
pub const SLIDE_HEIGHT: f64 = 5.625;

/// An axis-aligned rectangle in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to shape bounds in EMUs.
    pub fn to_bounds(self) -> Bounds {
        Bounds::new(
            inches_to_emu(self.x),
            inches_to_emu(self.y),
            inches_to_emu(self.width),
            inches_to_emu(self.height),
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

pub const TITLE: Rect = Rect::new(0.5, 0.3, 9.0, 0.8);
pub const ACCENT_BAR: Rect = Rect::new(0.5, 1.0, 1.5, 0.05);
pub const BULLETS: Rect = Rect::new(0.5, 1.3, 9.0, 4.0);
pub const ONE_LINER: Rect = Rect::new(0.5, 5.2, 9.0, 0.5);
/// One-liner raised above a full-height chart.
pub const CHART_ONE_LINER: Rect = Rect::new(0.5, 5.0, 9.0, 0.5);

pub const PLACEHOLDER_BOX: Rect = Rect::new(0.75, 1.4, 8.5, 3.5);
pub const PLACEHOLDER_LABEL: Rect = Rect::new(2.0, 2.8, 6.0, 1.0);

/// Bounding box a chart image is scaled into.
pub const IMAGE_MAX_WIDTH: f64 = 8.5;
pub const IMAGE_MAX_HEIGHT: f64 = 3.5;
pub const IMAGE_TOP: f64 = 1.3;

pub const TITLE_SLIDE_TITLE: Rect = Rect::new(0.5, 2.5, 9.0, 1.0);
pub const TITLE_SLIDE_SUBTITLE: Rect = Rect::new(0.5, 3.5, 9.0, 0.5);
pub const TITLE_SLIDE_CREDITS: Rect = Rect::new(0.5, 5.0, 9.0, 1.0);

pub const QUESTIONS_HEADING: Rect = Rect::new(0.5, 2.5, 9.0, 1.5);
pub const QUESTIONS_LINK: Rect = Rect::new(0.5, 4.5, 9.0, 0.5);

const TABLE_LEFT: f64 = 0.5;
const TABLE_TOP: f64 = 1.4;
const TABLE_WIDTH: f64 = 9.0;
const TABLE_ROW_HEIGHT: f64 = 0.4;

/// Side of a two-column slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn left(self) -> f64 {
        match self {
            Side::Left => 0.5,
            Side::Right => 5.3,
        }
    }
}

/// Table frame for a header row plus `data_rows` rows.
pub fn table(data_rows: usize) -> Rect {
    Rect::new(
        TABLE_LEFT,
        TABLE_TOP,
        TABLE_WIDTH,
        TABLE_ROW_HEIGHT * (data_rows + 1) as f64,
    )
}

/// Header of one column.
pub fn column_header(side: Side) -> Rect {
    Rect::new(side.left(), 1.3, 4.0, 0.5)
}

/// Item list of one column.
pub fn column_items(side: Side) -> Rect {
    Rect::new(side.left(), 1.8, 4.2, 3.0)
}

/// Rectangle of a fitted chart image.
pub fn image(fit: &ImageFit) -> Rect {
    Rect::new(fit.left, IMAGE_TOP, fit.width, fit.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fit_image;

    #[test]
    fn test_table_grows_with_rows() {
        assert!((table(4).height - 2.0).abs() < 1e-9);
        assert_eq!(table(0).height, 0.4);
        assert_eq!(table(6).to_bounds().height, 2_560_320);
    }

    #[test]
    fn test_columns() {
        assert_eq!(column_header(Side::Left).x, 0.5);
        assert_eq!(column_header(Side::Right).x, 5.3);
        assert!((column_items(Side::Left).y - column_header(Side::Left).bottom()).abs() < 1e-9);
        assert_eq!(column_items(Side::Right).to_bounds().x, 4_846_320);
        assert!(column_items(Side::Right).right() < SLIDE_WIDTH);
    }

    #[test]
    fn test_elements_fit_on_slide() {
        for rect in [
            TITLE,
            ACCENT_BAR,
            BULLETS,
            CHART_ONE_LINER,
            PLACEHOLDER_BOX,
            PLACEHOLDER_LABEL,
            TITLE_SLIDE_SUBTITLE,
            QUESTIONS_LINK,
        ] {
            assert!(rect.right() <= SLIDE_WIDTH, "{rect:?}");
            assert!(rect.bottom() <= SLIDE_HEIGHT, "{rect:?}");
        }
    }

    #[test]
    fn test_image_rect_sits_under_accent_bar() {
        let fit = fit_image(1600, 900, IMAGE_MAX_WIDTH, IMAGE_MAX_HEIGHT, SLIDE_WIDTH).unwrap();
        let rect = image(&fit);
        assert_eq!(rect.y, IMAGE_TOP);
        assert!(rect.y > ACCENT_BAR.bottom());
        assert!(rect.bottom() <= CHART_ONE_LINER.y);
        assert_eq!(rect.to_bounds().height, 3_200_400);
    }
}
