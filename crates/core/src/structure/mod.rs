//! Document structure inference.
//!
//! This module contains:
//! - Cross-page running header/footer detection
//! - Page margins
//! - Reading sections
//! - The margin/section analyzer trait and its geometric implementation

pub mod analyzer;
pub mod header_footer;
pub mod margin;
pub mod section;

pub use analyzer::{BasicLayoutAnalyzer, PageMarginSectionAnalyzer};
pub use header_footer::{
    EDGE_WINDOW, EdgeBoundaries, FrequencyTally, HeaderFooterDetector, apply_header_footer,
    detect_header_footer, signature, threshold,
};
pub use margin::Margin;
pub use section::Section;
