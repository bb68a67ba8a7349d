//! Slide layout computation.
//!
//! Everything here is a pure function of slide size and content: the fixed
//! element rectangles in [`geometry`] and the aspect-preserving image fit.

pub mod geometry;

pub use geometry::Rect;

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Error types for layout operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The image to place is absent, unreadable or has no area
    #[error("Missing resource: {0}")]
    MissingResource(String),
}

/// Placement of an image scaled into a bounding box, in slide units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFit {
    pub width: f64,
    pub height: f64,
    /// Horizontal offset that centers the image on the slide
    pub left: f64,
}

/// Scale an `image_w` x `image_h` pixel image to the largest size that fits
/// within `max_w` x `max_h` while keeping its aspect ratio, then center it
/// horizontally on a slide `slide_w` wide.
///
/// An image wider than the box ratio takes the full box width; any other
/// image takes the full box height.
///
/// # Errors
///
/// Returns [`LayoutError::MissingResource`] when either image dimension is
/// zero or the box or slide size is not a positive finite number.
///
/// # Examples
///
/// ```
/// use pitch_deck::layout::fit_image;
///
/// let fit = fit_image(1600, 900, 8.5, 3.5, 10.0)?;
/// assert_eq!(fit.height, 3.5);
/// assert!((fit.width - 6.2222).abs() < 1e-3);
/// assert!((fit.left - 1.8889).abs() < 1e-3);
/// # Ok::<(), pitch_deck::layout::LayoutError>(())
/// ```
pub fn fit_image(
    image_w: u32,
    image_h: u32,
    max_w: f64,
    max_h: f64,
    slide_w: f64,
) -> Result<ImageFit> {
    if image_w == 0 || image_h == 0 {
        return Err(LayoutError::MissingResource(format!(
            "image has no area ({}x{})",
            image_w, image_h
        )));
    }
    for (name, value) in [
        ("box width", max_w),
        ("box height", max_h),
        ("slide width", slide_w),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(LayoutError::MissingResource(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }

    let ratio = f64::from(image_w) / f64::from(image_h);
    let (width, height) = if ratio > max_w / max_h {
        (max_w, max_w / ratio)
    } else {
        (max_h * ratio, max_h)
    };

    Ok(ImageFit {
        width,
        height,
        left: (slide_w - width) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_wide_image_in_square_box_fills_width() {
        let fit = fit_image(400, 100, 4.0, 4.0, 10.0).unwrap();
        assert_eq!(fit.width, 4.0);
        assert!((fit.height - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tall_image_in_square_box_fills_height() {
        let fit = fit_image(100, 400, 4.0, 4.0, 10.0).unwrap();
        assert_eq!(fit.height, 4.0);
        assert!((fit.width - 1.0).abs() < EPS);
    }

    #[test]
    fn test_chart_scenario() {
        let fit = fit_image(1600, 900, 8.5, 3.5, 10.0).unwrap();
        assert_eq!(fit.height, 3.5);
        assert!((fit.width - 3.5 * 16.0 / 9.0).abs() < EPS);
        assert!((fit.left - (10.0 - 3.5 * 16.0 / 9.0) / 2.0).abs() < EPS);
    }

    #[test]
    fn test_matching_ratio_fills_box() {
        let fit = fit_image(850, 350, 8.5, 3.5, 10.0).unwrap();
        assert!((fit.width - 8.5).abs() < EPS);
        assert!((fit.height - 3.5).abs() < EPS);
        assert!((fit.left - 0.75).abs() < EPS);
    }

    #[test]
    fn test_degenerate_inputs_are_missing_resources() {
        assert!(matches!(
            fit_image(0, 900, 8.5, 3.5, 10.0),
            Err(LayoutError::MissingResource(_))
        ));
        assert!(fit_image(1600, 0, 8.5, 3.5, 10.0).is_err());
        assert!(fit_image(1600, 900, 0.0, 3.5, 10.0).is_err());
        assert!(fit_image(1600, 900, 8.5, -1.0, 10.0).is_err());
        assert!(fit_image(1600, 900, 8.5, 3.5, f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn fit_stays_in_box_and_keeps_ratio(
            image_w in 1u32..10_000,
            image_h in 1u32..10_000,
            max_w in 0.1f64..20.0,
            max_h in 0.1f64..20.0,
        ) {
            let fit = fit_image(image_w, image_h, max_w, max_h, 10.0).unwrap();
            let ratio = f64::from(image_w) / f64::from(image_h);

            prop_assert!(fit.width <= max_w * (1.0 + 1e-12));
            prop_assert!(fit.height <= max_h * (1.0 + 1e-12));
            prop_assert!(((fit.width / fit.height) - ratio).abs() <= ratio * 1e-9);
            // One side always touches the box
            prop_assert!(fit.width == max_w || fit.height == max_h);
        }

        #[test]
        fn fit_is_centered(
            image_w in 1u32..5_000,
            image_h in 1u32..5_000,
            slide_w in 1.0f64..30.0,
        ) {
            let fit = fit_image(image_w, image_h, 8.5, 3.5, slide_w).unwrap();
            prop_assert!((fit.left + fit.width / 2.0 - slide_w / 2.0).abs() < 1e-9);
        }
    }
}
