//! Parse settings.
//!
//! Contains ParseSettings for controlling cleanup and margin/section analysis.
//! The header/footer detector takes no settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};

/// Parameters for document structure parsing.
///
/// Known keys drive the reference cleanup and the reference margin/section
/// analyzer. Unknown keys are kept in `extra` and passed through untouched so
/// custom collaborators can read their own options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    /// Factor applied to the computed top margin, leaving free space above
    /// the body. Range: 0.0 to 1.0.
    pub page_margin_factor_top: f64,

    /// Factor applied to the computed bottom margin. Range: 0.0 to 1.0.
    pub page_margin_factor_bottom: f64,

    /// Graphic blocks thinner than this (in either direction) are dropped
    /// during cleanup.
    pub shape_min_dimension: f64,

    /// An image overlapping a text block by more than this in both directions
    /// is a floating image.
    pub float_image_ignorable_gap: f64,

    /// Minimum horizontal gap between two content intervals for them to be
    /// treated as separate columns.
    pub min_column_space: f64,

    /// Worker threads for the per-page margin/section phase. 1 or less runs
    /// sequentially.
    pub threads: usize,

    /// Options not understood by this crate.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            page_margin_factor_top: 0.5,
            page_margin_factor_bottom: 0.5,
            shape_min_dimension: 2.0,
            float_image_ignorable_gap: 5.0,
            min_column_space: 15.0,
            threads: 1,
            extra: BTreeMap::new(),
        }
    }
}

impl ParseSettings {
    /// Parses settings from a JSON object. Missing keys take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every known option is in range.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("page_margin_factor_top", self.page_margin_factor_top),
            ("page_margin_factor_bottom", self.page_margin_factor_bottom),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StructureError::InvalidSettings(format!(
                    "{name} should be between 0 and 1, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("shape_min_dimension", self.shape_min_dimension),
            ("float_image_ignorable_gap", self.float_image_ignorable_gap),
            ("min_column_space", self.min_column_space),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StructureError::InvalidSettings(format!(
                    "{name} should be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Looks up a pass-through option.
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}
