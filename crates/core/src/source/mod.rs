//! Page content sources.
//!
//! A `PageContentSource` is bound to one document and turns page ids into
//! `RawPage`s. This module provides:
//! - The `PageContentSource` trait and the `RawPage` type
//! - Reference cleanup / font refinement used by the trait's default methods
//! - `JsonContentSource`, a source over pre-extracted JSON documents

pub mod cleanup;
pub mod json;
pub mod raw_page;

pub use json::{JsonContentSource, SourceBlock, SourceDocument, SourcePage};
pub use raw_page::RawPage;

use crate::error::Result;
use crate::font::FontProfile;
use crate::settings::ParseSettings;

/// Extracts page content from one document.
pub trait PageContentSource {
    /// Builds the document-wide font profile.
    fn font_profile(&self) -> Result<FontProfile>;

    /// Extracts the raw content of page `page_id`.
    ///
    /// Must be idempotent and leave the source unchanged.
    fn extract(&self, page_id: usize) -> Result<RawPage>;

    /// Merges and filters blocks in place.
    fn clean_up(&self, raw: &mut RawPage, settings: &ParseSettings) -> Result<()> {
        cleanup::clean_up(raw, settings)
    }

    /// Adjusts line-height derived metrics from the font profile.
    fn process_font(&self, raw: &mut RawPage, profile: &FontProfile) {
        cleanup::process_font(raw, profile);
    }
}
