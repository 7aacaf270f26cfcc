//! JsonContentSource - page content from a pre-extracted JSON document.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "fonts": [{"name": "Helvetica", "line_height_ratio": 1.15}],
//!   "pages": [{
//!     "width": 612, "height": 792,
//!     "blocks": [{"bbox": [72, 40, 540, 52], "text": "Annual Report", "font": "Helvetica", "size": 10}],
//!     "images": [{"bbox": [72, 300, 300, 500], "name": "Im1"}]
//!   }]
//! }
//! ```
//!
//! A block without `text` is graphical.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};
use crate::font::{FontMetrics, FontProfile};
use crate::layout::{Block, BlockContent, ImageBlock};
use crate::utils::{Rect, is_valid_rect};

use super::{PageContentSource, RawPage};

/// A pre-extracted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub fonts: Vec<FontMetrics>,
    #[serde(default)]
    pub pages: Vec<SourcePage>,
}

/// One pre-extracted page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePage {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub blocks: Vec<SourceBlock>,
    #[serde(default)]
    pub images: Vec<ImageBlock>,
}

/// One pre-extracted block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBlock {
    pub bbox: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl SourcePage {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Appends a text block.
    pub fn text(mut self, bbox: Rect, text: &str) -> Self {
        self.blocks.push(SourceBlock {
            bbox,
            text: Some(text.to_string()),
            font: None,
            size: None,
        });
        self
    }

    /// Appends a graphical block.
    pub fn graphic(mut self, bbox: Rect) -> Self {
        self.blocks.push(SourceBlock {
            bbox,
            text: None,
            font: None,
            size: None,
        });
        self
    }
}

/// Content source over a `SourceDocument`.
#[derive(Debug, Clone, Default)]
pub struct JsonContentSource {
    doc: SourceDocument,
}

impl JsonContentSource {
    pub fn new(doc: SourceDocument) -> Self {
        Self { doc }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn page_count(&self) -> usize {
        self.doc.pages.len()
    }
}

impl PageContentSource for JsonContentSource {
    fn font_profile(&self) -> Result<FontProfile> {
        Ok(self.doc.fonts.iter().cloned().collect())
    }

    fn extract(&self, page_id: usize) -> Result<RawPage> {
        let page = self
            .doc
            .pages
            .get(page_id)
            .ok_or(StructureError::PageNotFound(page_id))?;

        if !(page.width.is_finite() && page.height.is_finite())
            || page.width <= 0.0
            || page.height <= 0.0
        {
            return Err(StructureError::Source(format!(
                "page {} has an invalid size {}x{}",
                page_id, page.width, page.height
            )));
        }

        let mut raw = RawPage::new(page_id, (0.0, 0.0, page.width, page.height));
        raw.blocks.reserve(page.blocks.len());
        for (index, sb) in page.blocks.iter().enumerate() {
            if !is_valid_rect(sb.bbox) {
                return Err(StructureError::InvalidBlock {
                    page: page_id,
                    index,
                    msg: format!("invalid bounding box {:?}", sb.bbox),
                });
            }
            let content = match &sb.text {
                Some(text) => BlockContent::Text(text.clone()),
                None => BlockContent::Graphic,
            };
            let mut block = Block::new(sb.bbox, content);
            block.font = sb.font.clone();
            block.size = sb.size;
            raw.blocks.push(block);
        }

        for (index, image) in page.images.iter().enumerate() {
            if !is_valid_rect(image.bbox) {
                return Err(StructureError::InvalidBlock {
                    page: page_id,
                    index,
                    msg: format!("invalid image bounding box {:?}", image.bbox),
                });
            }
            raw.images.push(image.clone());
        }

        Ok(raw)
    }
}
