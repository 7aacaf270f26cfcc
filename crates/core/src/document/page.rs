//! Page - the per-document page record structure analysis fills in.

use serde::{Deserialize, Serialize};

use crate::layout::ImageBlock;
use crate::structure::{Margin, Section};

/// A page of the document being converted.
///
/// Created once per source page. `Pages::parse` fills in the geometry of every
/// page whose `skip_parsing` flag is unset and leaves skipped pages untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Id of the page in the content source.
    pub id: usize,
    /// Exclude this page from parsing.
    #[serde(default)]
    pub skip_parsing: bool,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub margin: Option<Margin>,
    /// Bottom edge of the running header region.
    #[serde(default)]
    pub header: f64,
    /// Top edge of the running footer region.
    #[serde(default)]
    pub footer: f64,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub float_images: Vec<ImageBlock>,
}

impl Page {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            skip_parsing: false,
            width: 0.0,
            height: 0.0,
            margin: None,
            header: 0.0,
            footer: 0.0,
            sections: Vec::new(),
            float_images: Vec::new(),
        }
    }

    /// A page excluded from parsing.
    pub fn skipped(id: usize) -> Self {
        Self {
            skip_parsing: true,
            ..Self::new(id)
        }
    }

    /// Returns true once the page went through parsing.
    pub fn is_parsed(&self) -> bool {
        self.margin.is_some()
    }
}
