//! Slide builders for each kind of slide in the deck.

use crate::common::Result;
use crate::common::unit::inches_to_emu;
use crate::layout::geometry::{self, Rect, Side};
use crate::layout::{ImageFit, fit_image};
use crate::ooxml::pptx::{
    Alignment, MutablePresentation, MutableSlide, Paragraph, Table, TableCell, TextFrame,
};

use super::chart::{ChartImage, load_chart};
use super::config::DeckConfig;
use super::theme;

/// Title, subtitle and author lines of the opening slide.
#[derive(Debug, Clone, Copy)]
pub struct TitleSlide<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub credits: &'a str,
    pub authors: &'a str,
}

/// One side of a two-column slide.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub header: &'a str,
    pub items: &'a [&'a str],
}

/// Builds the deck slide by slide on a 16:9 white-background presentation.
#[derive(Debug)]
pub struct DeckBuilder<'a> {
    pres: MutablePresentation,
    config: &'a DeckConfig,
}

impl<'a> DeckBuilder<'a> {
    pub fn new(config: &'a DeckConfig) -> Self {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(inches_to_emu(geometry::SLIDE_WIDTH));
        pres.set_slide_height(inches_to_emu(geometry::SLIDE_HEIGHT));
        Self { pres, config }
    }

    /// Finish building and hand over the presentation.
    pub fn finish(self) -> MutablePresentation {
        self.pres
    }

    pub fn set_properties(&mut self, title: &str, author: &str) {
        self.pres.set_properties(title, author);
    }

    /// Append a blank white slide.
    fn new_slide(&mut self, name: &str) -> &mut MutableSlide {
        log::debug!("building slide {}: {}", self.pres.slide_count() + 1, name);
        let slide = self.pres.add_slide();
        slide.set_background(theme::WHITE);
        slide
    }

    pub fn add_title_slide(&mut self, content: TitleSlide<'_>, notes: &[&str]) {
        let slide = self.new_slide(content.title);

        add_text(
            slide,
            geometry::TITLE_SLIDE_TITLE,
            Paragraph::new(content.title, theme::text(44.0, theme::DARK_GRAY).bold(true))
                .align(Alignment::Center),
        );
        add_text(
            slide,
            geometry::TITLE_SLIDE_SUBTITLE,
            Paragraph::new(content.subtitle, theme::text(24.0, theme::STEVENS_RED))
                .align(Alignment::Center),
        );

        let credits = TextFrame::single(
            Paragraph::new(content.credits, theme::text(16.0, theme::STEVENS_GRAY))
                .align(Alignment::Center),
        )
        .push(
            Paragraph::new(content.authors, theme::text(14.0, theme::STEVENS_GRAY))
                .align(Alignment::Center),
        );
        slide.add_text_box(credits, geometry::TITLE_SLIDE_CREDITS.to_bounds());

        set_speaker_notes(slide, notes);
    }

    /// Title, red accent bar and a bulleted list.
    pub fn add_content_slide(
        &mut self,
        title: &str,
        bullets: &[&str],
        one_liner: Option<&str>,
        notes: &[&str],
    ) {
        let slide = self.new_slide(title);
        add_heading(slide, title);

        let frame = bullets.iter().fold(TextFrame::new().wrap(true), |frame, bullet| {
            let paragraph = Paragraph::new(format!("• {}", bullet), theme::bullet());
            frame.push(paragraph.space_after(12.0))
        });
        slide.add_text_box(frame, geometry::BULLETS.to_bounds());

        add_one_liner(slide, geometry::ONE_LINER, one_liner);
        set_speaker_notes(slide, notes);
    }

    /// A table with a brand-red header row and banded data rows.
    pub fn add_table_slide(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[&[&str]],
        one_liner: Option<&str>,
        notes: &[&str],
    ) {
        let slide = self.new_slide(title);
        add_heading(slide, title);

        let mut grid = Vec::with_capacity(rows.len() + 1);
        grid.push(
            headers
                .iter()
                .map(|header| {
                    TableCell::new(*header)
                        .format(theme::table_header())
                        .align(Alignment::Center)
                        .fill(theme::STEVENS_RED)
                })
                .collect(),
        );
        for (row_index, row) in rows.iter().enumerate() {
            grid.push(
                row.iter()
                    .map(|value| {
                        let cell = TableCell::new(*value)
                            .format(theme::table_cell())
                            .align(Alignment::Center);
                        if row_index % 2 == 0 {
                            cell.fill(theme::TABLE_BAND)
                        } else {
                            cell
                        }
                    })
                    .collect(),
            );
        }

        slide.add_table(Table::new(grid), geometry::table(rows.len()).to_bounds());

        add_one_liner(slide, geometry::ONE_LINER, one_liner);
        set_speaker_notes(slide, notes);
    }

    /// A chart slide: the exported image, or a placeholder in draft mode.
    pub fn add_chart_slide(
        &mut self,
        title: &str,
        image_name: &str,
        one_liner: Option<&str>,
        notes: &[&str],
    ) -> Result<()> {
        if self.config.placeholders {
            self.add_chart_placeholder_slide(title, image_name, one_liner, notes);
            Ok(())
        } else {
            self.add_chart_image_slide(title, image_name, one_liner, notes)
        }
    }

    /// A rounded box marking where a chart is still to be inserted.
    pub fn add_chart_placeholder_slide(
        &mut self,
        title: &str,
        image_name: &str,
        one_liner: Option<&str>,
        notes: &[&str],
    ) {
        let slide = self.new_slide(title);
        add_heading(slide, title);

        let label = TextFrame::single(
            Paragraph::new(format!("[INSERT: {}]", image_name), theme::placeholder_label())
                .align(Alignment::Center),
        )
        .push(
            Paragraph::new(
                "Export from v5 notebook: backtesting/charts/",
                theme::placeholder_hint(),
            )
            .align(Alignment::Center),
        );
        add_placeholder(slide, label);

        add_one_liner(slide, geometry::ONE_LINER, one_liner);
        set_speaker_notes(slide, notes);
    }

    /// Embed a chart scaled into the image box and centered; fall back to a
    /// placeholder when the image cannot be used.
    pub fn add_chart_image_slide(
        &mut self,
        title: &str,
        image_name: &str,
        one_liner: Option<&str>,
        notes: &[&str],
    ) -> Result<()> {
        let path = self.config.chart_path(image_name);
        let loaded = load_chart(&path).and_then(|chart| {
            let fit = fit_image(
                chart.width,
                chart.height,
                geometry::IMAGE_MAX_WIDTH,
                geometry::IMAGE_MAX_HEIGHT,
                geometry::SLIDE_WIDTH,
            )?;
            Ok((chart, fit))
        });

        let slide = self.new_slide(title);
        add_heading(slide, title);

        match loaded {
            Ok((ChartImage { data, .. }, fit)) => {
                add_chart_picture(slide, data, &fit, image_name)?
            },
            Err(err) => {
                log::warn!("chart {} not embedded, using placeholder: {}", image_name, err);
                let label = TextFrame::single(
                    Paragraph::new(
                        format!("[IMAGE NOT FOUND: {}]", image_name),
                        theme::placeholder_label(),
                    )
                    .align(Alignment::Center),
                );
                add_placeholder(slide, label);
            },
        }

        add_one_liner(slide, geometry::CHART_ONE_LINER, one_liner);
        set_speaker_notes(slide, notes);
        Ok(())
    }

    /// Two headed lists side by side.
    pub fn add_two_column_slide(
        &mut self,
        title: &str,
        left: Column<'_>,
        right: Column<'_>,
        one_liner: Option<&str>,
        notes: &[&str],
    ) {
        let slide = self.new_slide(title);
        add_heading(slide, title);

        for (side, column) in [(Side::Left, left), (Side::Right, right)] {
            add_text(
                slide,
                geometry::column_header(side),
                Paragraph::new(column.header, theme::column_header()),
            );
            let items = column.items.iter().fold(TextFrame::new(), |frame, item| {
                frame.push(Paragraph::new(*item, theme::column_item()).space_after(8.0))
            });
            slide.add_text_box(items, geometry::column_items(side).to_bounds());
        }

        add_one_liner(slide, geometry::ONE_LINER, one_liner);
        set_speaker_notes(slide, notes);
    }

    /// Closing slide with the repository link.
    pub fn add_questions_slide(&mut self, link: &str, notes: &[&str]) {
        let slide = self.new_slide("Questions?");

        add_text(
            slide,
            geometry::QUESTIONS_HEADING,
            Paragraph::new("Questions?", theme::text(54.0, theme::DARK_GRAY).bold(true))
                .align(Alignment::Center),
        );
        add_text(
            slide,
            geometry::QUESTIONS_LINK,
            Paragraph::new(link, theme::text(16.0, theme::STEVENS_RED)).align(Alignment::Center),
        );

        set_speaker_notes(slide, notes);
    }
}

fn add_text(slide: &mut MutableSlide, rect: Rect, paragraph: Paragraph) {
    slide.add_text_box(TextFrame::single(paragraph), rect.to_bounds());
}

/// Slide title with the red accent bar beneath it.
fn add_heading(slide: &mut MutableSlide, title: &str) {
    add_text(slide, geometry::TITLE, Paragraph::new(title, theme::slide_title()));
    slide.add_rectangle(
        geometry::ACCENT_BAR.to_bounds(),
        Some(theme::STEVENS_RED),
        None,
    );
}

fn add_one_liner(slide: &mut MutableSlide, rect: Rect, one_liner: Option<&str>) {
    if let Some(text) = one_liner {
        let frame = TextFrame::single(Paragraph::new(text, theme::one_liner())).wrap(true);
        slide.add_text_box(frame, rect.to_bounds());
    }
}

fn add_placeholder(slide: &mut MutableSlide, label: TextFrame) {
    slide.add_rounded_rectangle(
        geometry::PLACEHOLDER_BOX.to_bounds(),
        Some(theme::PLACEHOLDER_FILL),
        Some(theme::STEVENS_GRAY),
    );
    slide.add_text_box(label, geometry::PLACEHOLDER_LABEL.to_bounds());
}

fn add_chart_picture(
    slide: &mut MutableSlide,
    data: Vec<u8>,
    fit: &ImageFit,
    image_name: &str,
) -> Result<()> {
    slide.add_picture_from_bytes(
        data,
        geometry::image(fit).to_bounds(),
        Some(image_name.to_string()),
    )?;
    Ok(())
}

/// Speaker notes, one "• " line per note.
fn set_speaker_notes(slide: &mut MutableSlide, notes: &[&str]) {
    if notes.is_empty() {
        return;
    }
    let text = notes
        .iter()
        .map(|note| format!("• {}", note))
        .collect::<Vec<_>>()
        .join("\n");
    slide.set_notes(&text);
}
