//! Reference cleanup and font refinement for raw pages.
//!
//! `clean_up` merges and filters blocks without changing what a bounding box
//! means: every kept block keeps its rectangle, clipped to the page.

use crate::error::{Result, StructureError};
use crate::font::FontProfile;
use crate::layout::{Block, ImageBlock};
use crate::settings::ParseSettings;
use crate::utils::{HasBBox, Rect, approx_eq, intersect, is_valid_rect};

use super::RawPage;

/// Two text blocks with the same text whose edges are all this close are
/// duplicates.
const DUPLICATE_TOLERANCE: f64 = 0.5;

/// Clean up a raw page in place.
///
/// 1. Blocks and images outside the page are dropped, the rest clipped.
/// 2. Graphic blocks thinner than `shape_min_dimension` are dropped.
/// 3. Duplicated text blocks are merged into the first occurrence.
/// 4. Images are classified: floating over text, or inline graphic blocks.
pub fn clean_up(raw: &mut RawPage, settings: &ParseSettings) -> Result<()> {
    let page = raw.bbox;
    if !is_valid_rect(page) {
        return Err(StructureError::Source(format!(
            "page {} has an invalid page rectangle {:?}",
            raw.id, page
        )));
    }

    raw.blocks.retain_mut(|block| match intersect(block.bbox(), page) {
        Some(clipped) => {
            block.set_bbox(clipped);
            true
        }
        None => false,
    });
    raw.images.retain_mut(|image| match intersect(image.bbox, page) {
        Some(clipped) => {
            image.bbox = clipped;
            true
        }
        None => false,
    });

    let min_dimension = settings.shape_min_dimension;
    raw.blocks
        .retain(|b| b.is_text() || (b.width() >= min_dimension && b.height() >= min_dimension));

    dedup_text_blocks(&mut raw.blocks);

    let gap = settings.float_image_ignorable_gap;
    for image in std::mem::take(&mut raw.images) {
        if is_floating(&image, &raw.blocks, gap) {
            raw.floating_images.push(image);
        } else {
            raw.blocks.push(Block::graphic(image.bbox));
        }
    }

    Ok(())
}

/// Fill in line heights from the document font profile.
pub fn process_font(raw: &mut RawPage, profile: &FontProfile) {
    for block in &mut raw.blocks {
        if let Some(size) = block.size {
            block.line_height = Some(size * profile.line_height_ratio(block.font.as_deref()));
        }
    }
}

fn dedup_text_blocks(blocks: &mut Vec<Block>) {
    let mut kept: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks.drain(..) {
        let duplicate = block.is_text()
            && kept
                .iter()
                .any(|k| k.content == block.content && same_rect(k.bbox(), block.bbox()));
        if !duplicate {
            kept.push(block);
        }
    }
    *blocks = kept;
}

fn same_rect(a: Rect, b: Rect) -> bool {
    approx_eq(a.0, b.0, DUPLICATE_TOLERANCE)
        && approx_eq(a.1, b.1, DUPLICATE_TOLERANCE)
        && approx_eq(a.2, b.2, DUPLICATE_TOLERANCE)
        && approx_eq(a.3, b.3, DUPLICATE_TOLERANCE)
}

fn is_floating(image: &ImageBlock, blocks: &[Block], gap: f64) -> bool {
    blocks.iter().filter(|b| b.is_text()).any(|b| {
        intersect(image.bbox, b.bbox())
            .is_some_and(|overlap| overlap.width() > gap && overlap.height() > gap)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> RawPage {
        RawPage::new(0, (0.0, 0.0, 600.0, 800.0))
    }

    #[test]
    fn blocks_outside_page_are_dropped_and_others_clipped() {
        let mut raw = page().with_blocks(vec![
            Block::text((700.0, 10.0, 750.0, 20.0), "off page"),
            Block::text((580.0, 10.0, 620.0, 20.0), "edge"),
        ]);
        clean_up(&mut raw, &ParseSettings::default()).unwrap();
        assert_eq!(raw.blocks.len(), 1);
        assert_eq!(raw.blocks[0].bbox(), (580.0, 10.0, 600.0, 20.0));
    }

    #[test]
    fn thin_graphics_are_dropped_but_thin_text_is_kept() {
        let mut raw = page().with_blocks(vec![
            Block::graphic((10.0, 10.0, 500.0, 10.5)),
            Block::text((10.0, 30.0, 500.0, 30.5), "tiny"),
            Block::graphic((10.0, 50.0, 100.0, 100.0)),
        ]);
        clean_up(&mut raw, &ParseSettings::default()).unwrap();
        assert_eq!(raw.blocks.len(), 2);
        assert!(raw.blocks[0].is_text());
    }

    #[test]
    fn duplicate_text_blocks_are_merged() {
        let mut raw = page().with_blocks(vec![
            Block::text((10.0, 10.0, 100.0, 20.0), "Bold"),
            Block::text((10.2, 10.1, 100.2, 20.1), "Bold"),
            Block::text((10.0, 10.0, 100.0, 20.0), "Other"),
        ]);
        clean_up(&mut raw, &ParseSettings::default()).unwrap();
        assert_eq!(raw.blocks.len(), 2);
    }

    #[test]
    fn images_over_text_float() {
        let mut raw = page().with_blocks(vec![Block::text((10.0, 10.0, 300.0, 200.0), "body")]);
        raw.images.push(ImageBlock::new((100.0, 100.0, 200.0, 180.0)));
        raw.images.push(ImageBlock::new((100.0, 400.0, 200.0, 500.0)));
        clean_up(&mut raw, &ParseSettings::default()).unwrap();
        assert_eq!(raw.floating_images.len(), 1);
        assert_eq!(raw.floating_images[0].bbox, (100.0, 100.0, 200.0, 180.0));
        assert_eq!(raw.blocks.len(), 2);
        assert!(!raw.blocks[1].is_text());
        assert!(raw.images.is_empty());
    }

    #[test]
    fn line_heights_follow_profile() {
        let mut raw = page().with_blocks(vec![
            Block::text((10.0, 10.0, 100.0, 20.0), "a").with_font("Unknown", 10.0),
            Block::graphic((10.0, 30.0, 100.0, 60.0)),
        ]);
        process_font(&mut raw, &FontProfile::new());
        assert_eq!(raw.blocks[0].line_height, Some(12.0));
        assert_eq!(raw.blocks[1].line_height, None);
    }
}
