//! Block and ImageBlock - the content units a page is made of.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Rect};

/// What a block carries.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// Text content, possibly empty or whitespace only.
    Text(String),
    /// Graphical content (inline image, vector shape).
    Graphic,
}

/// A content unit with a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub(crate) x0: f64,
    pub(crate) y0: f64,
    pub(crate) x1: f64,
    pub(crate) y1: f64,
    pub content: BlockContent,
    /// Dominant font name, if known.
    pub font: Option<String>,
    /// Dominant font size in points, if known.
    pub size: Option<f64>,
    /// Line height derived from the font profile.
    pub line_height: Option<f64>,
}

impl Block {
    pub fn new(bbox: Rect, content: BlockContent) -> Self {
        let (x0, y0, x1, y1) = bbox;
        Self {
            x0,
            y0,
            x1,
            y1,
            content,
            font: None,
            size: None,
            line_height: None,
        }
    }

    pub fn text(bbox: Rect, text: impl Into<String>) -> Self {
        Self::new(bbox, BlockContent::Text(text.into()))
    }

    pub fn graphic(bbox: Rect) -> Self {
        Self::new(bbox, BlockContent::Graphic)
    }

    pub fn with_font(mut self, name: impl Into<String>, size: f64) -> Self {
        self.font = Some(name.into());
        self.size = Some(size);
        self
    }

    pub fn set_bbox(&mut self, bbox: Rect) {
        let (x0, y0, x1, y1) = bbox;
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
    }

    /// Returns the text content, or None for graphical blocks.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(s) => Some(s),
            BlockContent::Graphic => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, BlockContent::Text(_))
    }

    /// Returns true if this block carries at least one non-whitespace character.
    pub fn has_visible_text(&self) -> bool {
        self.text_content().is_some_and(|s| !s.trim().is_empty())
    }
}

impl HasBBox for Block {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}

/// An image placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub bbox: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ImageBlock {
    pub fn new(bbox: Rect) -> Self {
        Self { bbox, name: None }
    }
}

impl HasBBox for ImageBlock {
    fn x0(&self) -> f64 {
        self.bbox.0
    }
    fn y0(&self) -> f64 {
        self.bbox.1
    }
    fn x1(&self) -> f64 {
        self.bbox.2
    }
    fn y1(&self) -> f64 {
        self.bbox.3
    }
}
