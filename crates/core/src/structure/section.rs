//! Reading sections: runs of body content sharing a column layout.

use serde::{Deserialize, Serialize};

use crate::layout::{Block, cluster_bands, merge_intervals, sort_in_reading_order};
use crate::settings::ParseSettings;
use crate::source::RawPage;
use crate::utils::{HasBBox, Rect, get_bound, union};

use super::margin::body_blocks;

/// A page region with a single column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Number of columns, 1 or 2.
    pub num_cols: usize,
    /// Horizontal gap between the columns, 0 for a single column.
    pub space: f64,
    /// Vertical distance from the previous section, or from the top margin
    /// line for the first section.
    pub before_space: f64,
    pub bbox: Rect,
    /// Column rectangles, left to right.
    pub columns: Vec<Rect>,
}

/// A horizontal band of vertically overlapping blocks.
#[derive(Debug)]
struct Band {
    bbox: Rect,
    columns: Vec<Rect>,
}

impl Band {
    fn new(blocks: &[&Block], min_column_space: f64) -> Option<Self> {
        let bbox = get_bound(blocks.iter().map(|b| b.bbox()))?;
        let intervals = merge_intervals(
            blocks.iter().map(|b| (b.x0(), b.x1())).collect(),
            min_column_space,
        );
        let columns = if intervals.len() == 2 {
            intervals
                .iter()
                .map(|&(x0, x1)| (x0, bbox.1, x1, bbox.3))
                .collect()
        } else {
            vec![bbox]
        };
        Some(Self { bbox, columns })
    }

    fn num_cols(&self) -> usize {
        self.columns.len()
    }
}

/// Split the body of a page into sections.
///
/// Body blocks are those between the page's header and footer boundaries,
/// taken in reading order. They are cut into horizontal bands; inside a band, x-extents closer than
/// `min_column_space` merge. Two extents make a two-column band, anything
/// else a single column. Consecutive bands with the same column count form a
/// section. A page without a margin is measured from its top edge.
pub fn parse_sections(raw: &RawPage, settings: &ParseSettings) -> Vec<Section> {
    let body = body_blocks(raw, raw.header, raw.footer);
    let body: Vec<&Block> = sort_in_reading_order(&body).into_iter().copied().collect();

    let bands: Vec<Band> = cluster_bands(body, |b| (b.y0(), b.y1()))
        .iter()
        .filter_map(|band| Band::new(band, settings.min_column_space))
        .collect();

    let mut merged: Vec<Band> = Vec::new();
    for band in bands {
        match merged.last_mut() {
            Some(last) if last.num_cols() == band.num_cols() => {
                last.bbox = union(last.bbox, band.bbox);
                for (col, other) in last.columns.iter_mut().zip(&band.columns) {
                    *col = union(*col, *other);
                }
            }
            _ => merged.push(band),
        }
    }

    let top_line = raw.bbox.1 + raw.margin.map_or(0.0, |m| m.top);
    let mut prev_bottom = top_line;
    merged
        .into_iter()
        .map(|band| {
            let space = match band.columns.as_slice() {
                [left, right] => (right.0 - left.2).max(0.0),
                _ => 0.0,
            };
            let section = Section {
                num_cols: band.num_cols(),
                space,
                before_space: (band.bbox.1 - prev_bottom).max(0.0),
                bbox: band.bbox,
                columns: band.columns,
            };
            prev_bottom = section.bbox.3;
            section
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Margin;

    #[test]
    fn single_then_two_columns() {
        let mut raw = RawPage::new(0, (0.0, 0.0, 600.0, 800.0)).with_blocks(vec![
            Block::text((72.0, 100.0, 528.0, 140.0), "Title"),
            Block::text((72.0, 160.0, 290.0, 400.0), "left 1"),
            Block::text((310.0, 160.0, 528.0, 380.0), "right 1"),
            Block::text((72.0, 410.0, 290.0, 600.0), "left 2"),
            Block::text((310.0, 390.0, 528.0, 620.0), "right 2"),
        ]);
        raw.margin = Some(Margin::new(72.0, 72.0, 50.0, 72.0));

        let sections = parse_sections(&raw, &ParseSettings::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].num_cols, 1);
        assert_eq!(sections[0].before_space, 50.0);
        assert_eq!(sections[1].num_cols, 2);
        assert_eq!(sections[1].space, 20.0);
        assert_eq!(sections[1].before_space, 20.0);
        assert_eq!(sections[1].columns[0], (72.0, 160.0, 290.0, 620.0));
        assert_eq!(sections[1].columns[1], (310.0, 160.0, 528.0, 620.0));
    }

    #[test]
    fn extraction_order_does_not_change_sections() {
        let blocks = vec![
            Block::text((310.0, 160.0, 528.0, 380.0), "right"),
            Block::text((72.0, 420.0, 528.0, 500.0), "footnote"),
            Block::text((72.0, 160.0, 290.0, 400.0), "left"),
            Block::text((72.0, 100.0, 528.0, 140.0), "title"),
        ];
        let shuffled = RawPage::new(0, (0.0, 0.0, 600.0, 800.0)).with_blocks(blocks.clone());
        let mut ordered = blocks;
        ordered.sort_by(|a, b| a.y0().total_cmp(&b.y0()).then(a.x0().total_cmp(&b.x0())));
        let ordered = RawPage::new(0, (0.0, 0.0, 600.0, 800.0)).with_blocks(ordered);

        let settings = ParseSettings::default();
        let sections = parse_sections(&shuffled, &settings);
        assert_eq!(sections, parse_sections(&ordered, &settings));
        let cols: Vec<usize> = sections.iter().map(|s| s.num_cols).collect();
        assert_eq!(cols, vec![1, 2, 1]);
        assert_eq!(sections[1].bbox, (72.0, 160.0, 528.0, 400.0));
    }

    #[test]
    fn page_without_body_has_no_sections() {
        let raw = RawPage::new(0, (0.0, 0.0, 600.0, 800.0));
        assert!(parse_sections(&raw, &ParseSettings::default()).is_empty());
    }
}
