//! The strategy presentation: brand theme, slide builders and content.
//!
//! [`generate`] builds all slides and writes the `.pptx` in one pass.
//! A chart whose image is missing or unreadable is replaced by a labelled
//! placeholder box; every other failure ends the run.

pub mod builder;
pub mod chart;
pub mod config;
pub mod content;
pub mod theme;

pub use builder::{Column, DeckBuilder, TitleSlide};
pub use config::DeckConfig;

use crate::common::Result;
use crate::ooxml::pptx::MutablePresentation;

/// Build every slide of the deck in memory.
pub fn build_presentation(config: &DeckConfig) -> Result<MutablePresentation> {
    let mut deck = DeckBuilder::new(config);
    content::build_slides(&mut deck)?;
    Ok(deck.finish())
}

/// Build the deck and save it to `config.output`, returning the slide count.
pub fn generate(config: &DeckConfig) -> Result<usize> {
    let pres = build_presentation(config)?;
    pres.save(config.output())?;
    log::info!(
        "wrote {} slides to {}",
        pres.slide_count(),
        config.output().display()
    );
    Ok(pres.slide_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;
    use crate::layout::fit_image;
    use crate::layout::geometry::{self, Side};
    use crate::ooxml::pptx::{Alignment, Bounds, TextFrame};
    use std::io::{Cursor, Read};
    use std::path::Path;

    fn config_in(dir: &Path) -> DeckConfig {
        DeckConfig::new(dir.join("deck.pptx"), dir.join("charts"))
    }

    fn slide_texts(pres: &MutablePresentation, index: usize) -> Vec<String> {
        pres.slides()[index]
            .shapes()
            .iter()
            .filter_map(|shape| shape.text())
            .collect()
    }

    #[test]
    fn test_twenty_slides_with_notes() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        assert_eq!(pres.slide_count(), content::SLIDE_COUNT);
        assert!(pres.slides().iter().all(|slide| slide.has_notes()));
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 5_143_500);

        let notes = pres.slides()[0].notes().unwrap();
        assert_eq!(notes.lines().count(), 3);
        assert!(notes.lines().all(|line| line.starts_with("• ")));
    }

    #[test]
    fn test_missing_charts_fall_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        let texts = slide_texts(&pres, 6);
        assert!(texts.contains(&"[IMAGE NOT FOUND: feature_importance.png]".to_string()));
        assert!(pres.slides().iter().all(|slide| !slide.shapes().iter().any(|s| s.is_picture())));
    }

    #[test]
    fn test_chart_embedded_at_fitted_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir_all(&config.charts_dir).unwrap();
        image::RgbImage::new(1600, 900)
            .save(config.chart_path("cumulative_returns.png"))
            .unwrap();

        let pres = build_presentation(&config).unwrap();
        let picture = pres.slides()[8]
            .shapes()
            .iter()
            .find(|shape| shape.is_picture())
            .expect("slide 9 embeds its chart");

        let fit = fit_image(1600, 900, 8.5, 3.5, 10.0).unwrap();
        let bounds = picture.bounds();
        assert_eq!(bounds.height, inches_to_emu(3.5));
        assert_eq!(bounds.width, inches_to_emu(fit.width));
        assert_eq!(bounds.x, inches_to_emu(fit.left));
        assert_eq!(bounds.y, inches_to_emu(geometry::IMAGE_TOP));

        // Other charts are still missing
        assert!(slide_texts(&pres, 9).contains(&"[IMAGE NOT FOUND: drawdown_chart.png]".to_string()));
    }

    #[test]
    fn test_placeholder_mode_ignores_images() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path()).with_placeholders(true);
        std::fs::create_dir_all(&config.charts_dir).unwrap();
        image::RgbImage::new(40, 40)
            .save(config.chart_path("drawdown_chart.png"))
            .unwrap();

        let pres = build_presentation(&config).unwrap();
        let texts = slide_texts(&pres, 9);
        assert!(texts.iter().any(|t| t.starts_with("[INSERT: drawdown_chart.png]")));
        assert!(!pres.slides()[9].shapes().iter().any(|s| s.is_picture()));
    }

    #[test]
    fn test_table_slide_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        // Slide 13 has five data rows
        let shape = pres.slides()[12]
            .shapes()
            .iter()
            .find(|shape| shape.table().is_some())
            .unwrap();
        let table = shape.table().unwrap();
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.cell(1, 0).unwrap().fill, Some(theme::TABLE_BAND));
        assert_eq!(table.cell(2, 0).unwrap().fill, None);
        assert_eq!(table.cell(0, 0).unwrap().fill, Some(theme::STEVENS_RED));
        assert_eq!(shape.bounds().height, geometry::table(5).to_bounds().height);
    }

    fn frame(pres: &MutablePresentation, slide: usize, shape: usize) -> &TextFrame {
        pres.slides()[slide].shapes()[shape].text_frame().unwrap()
    }

    fn bounds(pres: &MutablePresentation, slide: usize, shape: usize) -> Bounds {
        pres.slides()[slide].shapes()[shape].bounds()
    }

    #[test]
    fn test_title_slide_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        assert_eq!(pres.slides()[0].shape_count(), 3);
        assert_eq!(bounds(&pres, 0, 0), geometry::TITLE_SLIDE_TITLE.to_bounds());
        assert_eq!(frame(&pres, 0, 0).paragraphs[0].format.size, Some(44.0));
        assert_eq!(bounds(&pres, 0, 1), geometry::TITLE_SLIDE_SUBTITLE.to_bounds());

        // Course line and authors are separate paragraphs of one box
        let credits = frame(&pres, 0, 2);
        assert_eq!(bounds(&pres, 0, 2), geometry::TITLE_SLIDE_CREDITS.to_bounds());
        assert_eq!(credits.paragraphs.len(), 2);
        assert_eq!(credits.paragraphs[0].text, "FE571 | Professor Anshul Sharma | Group 7");
        assert_eq!(credits.paragraphs[0].format, theme::text(16.0, theme::STEVENS_GRAY));
        assert_eq!(credits.paragraphs[1].text, content::AUTHORS);
        assert_eq!(credits.paragraphs[1].format, theme::text(14.0, theme::STEVENS_GRAY));
        assert!(credits
            .paragraphs
            .iter()
            .all(|p| p.alignment == Some(Alignment::Center)));
    }

    #[test]
    fn test_content_slide_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        // Executive Summary: heading, accent bar, bullets and no one-liner
        let slide = &pres.slides()[1];
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(bounds(&pres, 1, 0), geometry::TITLE.to_bounds());
        assert_eq!(frame(&pres, 1, 0).paragraphs[0].format, theme::slide_title());
        assert_eq!(bounds(&pres, 1, 1), geometry::ACCENT_BAR.to_bounds());
        assert!(slide.shapes()[1].text_frame().is_none());

        let bullets = frame(&pres, 1, 2);
        assert_eq!(bounds(&pres, 1, 2), geometry::BULLETS.to_bounds());
        assert!(bullets.word_wrap);
        assert!(!bullets.paragraphs.is_empty());
        for paragraph in &bullets.paragraphs {
            assert!(paragraph.text.starts_with("• "), "{}", paragraph.text);
            assert_eq!(paragraph.format, theme::bullet());
            assert_eq!(paragraph.space_after, Some(12.0));
        }
    }

    #[test]
    fn test_two_column_slide_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        // Signal Generation
        assert_eq!(pres.slides()[4].shape_count(), 7);
        for (side, header, header_shape) in [
            (Side::Left, "ENTRY RULES", 2),
            (Side::Right, "EXIT RULES", 4),
        ] {
            let heading = frame(&pres, 4, header_shape);
            assert_eq!(bounds(&pres, 4, header_shape), geometry::column_header(side).to_bounds());
            assert_eq!(heading.paragraphs[0].text, header);
            assert_eq!(heading.paragraphs[0].format, theme::column_header());

            let items = frame(&pres, 4, header_shape + 1);
            assert_eq!(
                bounds(&pres, 4, header_shape + 1),
                geometry::column_items(side).to_bounds()
            );
            assert_eq!(items.paragraphs.len(), 3);
            for paragraph in &items.paragraphs {
                assert!(!paragraph.text.starts_with("• "));
                assert_eq!(paragraph.format, theme::column_item());
                assert_eq!(paragraph.space_after, Some(8.0));
            }
        }
        assert_eq!(bounds(&pres, 4, 2).x, inches_to_emu(0.5));
        assert_eq!(bounds(&pres, 4, 4).x, inches_to_emu(5.3));

        let one_liner = frame(&pres, 4, 6);
        assert_eq!(bounds(&pres, 4, 6), geometry::ONE_LINER.to_bounds());
        assert_eq!(bounds(&pres, 4, 6).y, inches_to_emu(5.2));
        assert_eq!(one_liner.paragraphs[0].format, theme::one_liner());
        assert!(one_liner.word_wrap);
    }

    #[test]
    fn test_chart_one_liner_sits_higher() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        // What Drives the Model?
        let last = pres.slides()[6].shape_count() - 1;
        let one_liner = frame(&pres, 6, last);
        assert_eq!(bounds(&pres, 6, last), geometry::CHART_ONE_LINER.to_bounds());
        assert_eq!(bounds(&pres, 6, last).y, inches_to_emu(5.0));
        assert_eq!(one_liner.paragraphs[0].format, theme::one_liner());
        assert!(one_liner.paragraphs[0].text.starts_with("Z-score and momentum"));
    }

    #[test]
    fn test_questions_slide_layout() {
        let dir = tempfile::tempdir().unwrap();
        let pres = build_presentation(&config_in(dir.path())).unwrap();

        assert_eq!(pres.slides()[19].shape_count(), 2);

        let heading = &frame(&pres, 19, 0).paragraphs[0];
        assert_eq!(bounds(&pres, 19, 0), geometry::QUESTIONS_HEADING.to_bounds());
        assert_eq!(heading.text, "Questions?");
        assert_eq!(heading.format.size, Some(54.0));
        assert_eq!(heading.format.bold, Some(true));
        assert_eq!(heading.alignment, Some(Alignment::Center));

        let link = &frame(&pres, 19, 1).paragraphs[0];
        assert_eq!(bounds(&pres, 19, 1), geometry::QUESTIONS_LINK.to_bounds());
        assert_eq!(link.text, content::REPOSITORY);
        assert_eq!(link.format, theme::text(16.0, theme::STEVENS_RED));
    }

    #[test]
    fn test_generate_writes_package() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir_all(&config.charts_dir).unwrap();
        image::RgbImage::new(300, 600)
            .save(config.chart_path("monthly_heatmap.png"))
            .unwrap();

        assert_eq!(generate(&config).unwrap(), 20);

        let bytes = std::fs::read(config.output()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();

        let count = |prefix: &str| {
            names
                .iter()
                .filter(|n| n.starts_with(prefix) && n.ends_with(".xml"))
                .count()
        };
        assert_eq!(count("ppt/slides/slide"), 20);
        assert_eq!(count("ppt/notesSlides/notesSlide"), 20);
        assert_eq!(
            names.iter().filter(|n| n.starts_with("ppt/media/")).count(),
            1
        );

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide14.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert!(slide.contains(r#"r:embed="rId2""#));
        assert!(slide.contains("Monthly Returns Heatmap"));
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = config_in(dir.path());
        let second = DeckConfig::new(dir.path().join("again.pptx"), &first.charts_dir);

        generate(&first).unwrap();
        generate(&second).unwrap();

        assert_eq!(
            std::fs::read(first.output()).unwrap(),
            std::fs::read(second.output()).unwrap()
        );
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig::new(dir.path().join("missing/dir/deck.pptx"), dir.path());
        assert!(matches!(generate(&config), Err(crate::DeckError::Io(_))));
    }
}
