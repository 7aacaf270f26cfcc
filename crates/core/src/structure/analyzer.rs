//! Margin and section analysis behind a trait seam.

use crate::error::Result;
use crate::settings::ParseSettings;
use crate::source::RawPage;

use super::margin::{self, Margin};
use super::section::{self, Section};

/// Computes page margins and reading sections once header/footer boundaries
/// are known.
pub trait PageMarginSectionAnalyzer {
    /// Computes the page margin, seeded with the page's header and footer
    /// boundaries.
    fn calculate_margin(
        &self,
        raw: &RawPage,
        header: f64,
        footer: f64,
        settings: &ParseSettings,
    ) -> Result<Margin>;

    /// Splits the page into ordered sections. `raw.margin` holds the
    /// finalized margin.
    fn parse_sections(&self, raw: &RawPage, settings: &ParseSettings) -> Result<Vec<Section>>;
}

/// Geometric analyzer working from block rectangles only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLayoutAnalyzer;

impl PageMarginSectionAnalyzer for BasicLayoutAnalyzer {
    fn calculate_margin(
        &self,
        raw: &RawPage,
        header: f64,
        footer: f64,
        settings: &ParseSettings,
    ) -> Result<Margin> {
        Ok(margin::calculate_margin(raw, header, footer, settings))
    }

    fn parse_sections(&self, raw: &RawPage, settings: &ParseSettings) -> Result<Vec<Section>> {
        Ok(section::parse_sections(raw, settings))
    }
}
