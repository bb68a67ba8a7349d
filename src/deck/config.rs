//! Generation settings.

use std::path::{Path, PathBuf};

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "FE571_Final_Presentation_v2.pptx";

/// Directory the chart images are exported to.
pub const DEFAULT_CHARTS_DIR: &str = "backtesting/charts/";

/// Where the deck is written and where its charts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub output: PathBuf,
    pub charts_dir: PathBuf,
    /// Render every chart slide as an "[INSERT: ...]" placeholder instead of
    /// embedding the exported image
    pub placeholders: bool,
}

impl DeckConfig {
    pub fn new(output: impl Into<PathBuf>, charts_dir: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            charts_dir: charts_dir.into(),
            placeholders: false,
        }
    }

    pub fn with_placeholders(mut self, placeholders: bool) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Full path of a chart image by file name.
    pub fn chart_path(&self, image_name: &str) -> PathBuf {
        self.charts_dir.join(image_name)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT, DEFAULT_CHARTS_DIR)
    }
}
