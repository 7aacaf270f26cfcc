//! FontProfile - line-height metrics per font, built once per document.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Line height ratio used for fonts the profile does not know.
pub const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Metrics for a single font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub name: String,
    /// Line height relative to the font size.
    pub line_height_ratio: f64,
}

/// Font metrics for a whole document.
#[derive(Debug, Clone, Default)]
pub struct FontProfile {
    fonts: FxHashMap<String, FontMetrics>,
}

impl FontProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the metrics for a font.
    pub fn insert(&mut self, metrics: FontMetrics) {
        self.fonts.insert(metrics.name.clone(), metrics);
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Line height ratio for `name`, or the default for unknown fonts.
    ///
    /// Non-positive or non-finite ratios are ignored.
    pub fn line_height_ratio(&self, name: Option<&str>) -> f64 {
        name.and_then(|n| self.fonts.get(n))
            .map(|m| m.line_height_ratio)
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(DEFAULT_LINE_HEIGHT_RATIO)
    }
}

impl FromIterator<FontMetrics> for FontProfile {
    fn from_iter<I: IntoIterator<Item = FontMetrics>>(iter: I) -> Self {
        let mut profile = Self::new();
        for metrics in iter {
            profile.insert(metrics);
        }
        profile
    }
}
