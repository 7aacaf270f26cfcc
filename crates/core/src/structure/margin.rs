//! Page margins derived from body content.

use serde::{Deserialize, Serialize};

use crate::layout::Block;
use crate::settings::ParseSettings;
use crate::source::RawPage;
use crate::utils::{EPSILON, HasBBox, ITP, get_bound, round1};

/// Page margin in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margin {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Blocks lying entirely between the header and footer boundaries.
pub fn body_blocks(raw: &RawPage, header: f64, footer: f64) -> Vec<&Block> {
    raw.blocks
        .iter()
        .filter(|b| b.y0() >= header - EPSILON && b.y1() <= footer + EPSILON)
        .collect()
}

/// Margin from the union of the body blocks.
///
/// Top and bottom are scaled down by the page margin factors to leave some
/// free space; every side is clamped to [0, 1 inch] and rounded to 0.1pt. A
/// page without body content gets one inch on every side.
pub fn calculate_margin(
    raw: &RawPage,
    header: f64,
    footer: f64,
    settings: &ParseSettings,
) -> Margin {
    let body = body_blocks(raw, header, footer);
    let Some((x0, y0, x1, y1)) = get_bound(body.iter().map(|b| b.bbox())) else {
        return Margin::uniform(ITP);
    };

    let (px0, py0, px1, py1) = raw.bbox;
    let left = (x0 - px0).max(0.0);
    let right = (px1 - x1).max(0.0);
    let top = (y0 - py0).max(0.0) * settings.page_margin_factor_top;
    let bottom = (py1 - y1).max(0.0) * settings.page_margin_factor_bottom;

    let clamp = |v: f64| round1(v).min(ITP);
    Margin::new(clamp(left), clamp(right), clamp(top), clamp(bottom))
}
