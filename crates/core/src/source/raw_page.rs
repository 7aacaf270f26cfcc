//! RawPage - a page's extracted content while the document is being parsed.

use crate::layout::{Block, ImageBlock};
use crate::structure::Margin;
use crate::utils::Rect;

/// Extracted content of one page.
///
/// Owned by the coordinator for a single parse run. The header/footer
/// detector reads the blocks and writes `header`/`footer`; the margin/section
/// stage reads everything and stores `margin`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    /// Id of the source page.
    pub id: usize,
    /// Page rectangle.
    pub bbox: Rect,
    /// Content blocks.
    pub blocks: Vec<Block>,
    /// Images not yet classified by cleanup.
    pub images: Vec<ImageBlock>,
    /// Images floating over text, collected by cleanup.
    pub floating_images: Vec<ImageBlock>,
    /// Bottom edge of the running header region (0 if none).
    pub header: f64,
    /// Top edge of the running footer region (page bottom if none).
    pub footer: f64,
    /// Page margin, once computed.
    pub margin: Option<Margin>,
}

impl RawPage {
    pub fn new(id: usize, bbox: Rect) -> Self {
        Self {
            id,
            bbox,
            blocks: Vec::new(),
            images: Vec::new(),
            floating_images: Vec::new(),
            header: 0.0,
            footer: bbox.3,
            margin: None,
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn width(&self) -> f64 {
        self.bbox.2 - self.bbox.0
    }

    pub fn height(&self) -> f64 {
        self.bbox.3 - self.bbox.1
    }

    /// Bottom edge of the page, the default footer boundary.
    pub fn bottom(&self) -> f64 {
        self.bbox.3
    }

    /// Returns true if any block carries non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.blocks.iter().any(Block::has_visible_text)
    }

    /// Concatenated text of all text blocks, one block per line.
    pub fn raw_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
