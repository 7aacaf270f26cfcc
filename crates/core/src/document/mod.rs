//! Document module - page records and the structure parsing pipeline.
//!
//! This module contains:
//! - `page` - the per-page record filled in by parsing (Page)
//! - `pages` - the page collection and the parse pipeline (Pages)

pub mod page;
pub mod pages;

pub use page::Page;
pub use pages::{Pages, ParseSummary};
