//! masthead - document structure inference for page-described documents.
//!
//! Given per-page content extractions, finds repeating running headers and
//! footers by voting across the whole document, then derives page margins and
//! reading sections.
//!
//! # Example
//!
//! ```ignore
//! use masthead_core::{BasicLayoutAnalyzer, JsonContentSource, Pages, ParseSettings};
//!
//! let source = JsonContentSource::from_path("document.json")?;
//! let mut pages = Pages::with_count(source.page_count());
//! let summary = pages.parse(&source, &BasicLayoutAnalyzer, &ParseSettings::default())?;
//! ```

pub mod document;
pub mod error;
pub mod font;
pub mod layout;
pub mod settings;
pub mod source;
pub mod structure;
pub mod utils;

pub use document::{Page, Pages, ParseSummary};
pub use error::{Result, StructureError};
pub use font::{FontMetrics, FontProfile};
pub use layout::{Block, BlockContent, ImageBlock};
pub use settings::ParseSettings;
pub use source::{JsonContentSource, PageContentSource, RawPage};
pub use structure::{
    BasicLayoutAnalyzer, EdgeBoundaries, HeaderFooterDetector, Margin, PageMarginSectionAnalyzer,
    Section, detect_header_footer,
};
