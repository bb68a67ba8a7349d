//! Reading exported chart images.

use crate::layout::{LayoutError, Result};
use std::io::Cursor;
use std::path::Path;

/// An encoded chart image with its pixel size.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Read the image at `path` and probe its dimensions from the header.
///
/// Anything that keeps the image from being placed (no file, unreadable or
/// unrecognized data) is reported as [`LayoutError::MissingResource`].
pub fn load_chart(path: &Path) -> Result<ChartImage> {
    let missing = |reason: String| {
        LayoutError::MissingResource(format!("{}: {}", path.display(), reason))
    };

    let data = std::fs::read(path).map_err(|e| missing(e.to_string()))?;
    let (width, height) = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| missing(e.to_string()))?
        .into_dimensions()
        .map_err(|e| missing(e.to_string()))?;

    Ok(ChartImage {
        data,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_chart(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, LayoutError::MissingResource(_)));
    }

    #[test]
    fn test_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(load_chart(&path).is_err());
    }

    #[test]
    fn test_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        image::RgbImage::new(160, 90).save(&path).unwrap();

        let chart = load_chart(&path).unwrap();
        assert_eq!((chart.width, chart.height), (160, 90));
        assert!(chart.data.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }
}
