//! Running header/footer detection by cross-page frequency voting.
//!
//! The first and last few blocks (in reading order) of every page are header
//! and footer candidates. Each candidate's text is reduced to a signature in
//! which every run of digits is the same, so "Page 3 of 10" and "Page 4 of 10"
//! vote for the same template. A candidate whose signature shows up on more
//! pages than the threshold is running content, and its edge bounds the
//! page's header or footer region.
//!
//! Detection is two explicit stages over an immutable snapshot of candidate
//! windows: the tally stage sees every page before the classification stage
//! reads a single count.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::layout::{Block, sort_in_reading_order};
use crate::source::RawPage;
use crate::utils::HasBBox;

/// Number of blocks examined at each edge of a page.
pub const EDGE_WINDOW: usize = 3;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Normalized tally key for a block's text.
///
/// Trims surrounding whitespace and collapses every maximal run of decimal
/// digits to `1`.
pub fn signature(text: &str) -> String {
    DIGIT_RUN.replace_all(text.trim(), "1").into_owned()
}

/// Minimum count a signature must strictly exceed to be running content.
///
/// - 2 or 3 pages: the page count (so nothing can qualify)
/// - more than 10 pages: 40% of the pages, rounded down
/// - otherwise: 4
pub fn threshold(num_pages: usize) -> usize {
    match num_pages {
        2..=3 => num_pages,
        n if n > 10 => n * 2 / 5,
        _ => 4,
    }
}

/// Header and footer boundaries of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBoundaries {
    /// Bottom edge of the lowest header block, 0 if none.
    pub header: f64,
    /// Top edge of the highest footer block, the page bottom if none.
    pub footer: f64,
    /// Number of blocks classified as header.
    pub header_blocks: usize,
    /// Number of blocks classified as footer.
    pub footer_blocks: usize,
}

impl EdgeBoundaries {
    /// Boundaries of a page with no running content.
    pub fn none(page_bottom: f64) -> Self {
        Self {
            header: 0.0,
            footer: page_bottom,
            header_blocks: 0,
            footer_blocks: 0,
        }
    }
}

/// Signature occurrence counts for one detection pass.
///
/// Every candidate position counts, so a signature repeated within one page's
/// window is counted once per occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTally {
    headers: FxHashMap<String, usize>,
    footers: FxHashMap<String, usize>,
}

impl FrequencyTally {
    pub fn header_count(&self, signature: &str) -> usize {
        self.headers.get(signature).copied().unwrap_or(0)
    }

    pub fn footer_count(&self, signature: &str) -> usize {
        self.footers.get(signature).copied().unwrap_or(0)
    }

    fn add_page(&mut self, windows: &PageWindows<'_>) {
        bump(&mut self.headers, &windows.headers);
        bump(&mut self.footers, &windows.footers);
    }
}

fn bump(counts: &mut FxHashMap<String, usize>, candidates: &[Candidate<'_>]) {
    for c in candidates {
        *counts.entry(c.signature.clone()).or_insert(0) += 1;
    }
}

#[derive(Debug)]
struct Candidate<'a> {
    signature: String,
    block: &'a Block,
}

impl<'a> Candidate<'a> {
    /// Graphic blocks and whitespace-only text never take part.
    fn from_block(block: &'a Block) -> Option<Self> {
        let text = block.text_content()?;
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            signature: signature(text),
            block,
        })
    }
}

#[derive(Debug)]
struct PageWindows<'a> {
    headers: Vec<Candidate<'a>>,
    footers: Vec<Candidate<'a>>,
    bottom: f64,
}

impl<'a> PageWindows<'a> {
    fn new(page: &'a RawPage) -> Self {
        let ordered = sort_in_reading_order(&page.blocks);
        let headers = ordered
            .iter()
            .take(EDGE_WINDOW)
            .copied()
            .filter_map(Candidate::from_block)
            .collect();
        let footers = ordered
            .iter()
            .rev()
            .take(EDGE_WINDOW)
            .copied()
            .filter_map(Candidate::from_block)
            .collect();
        Self {
            headers,
            footers,
            bottom: page.bottom(),
        }
    }
}

/// Whole-document header/footer detector.
#[derive(Debug)]
pub struct HeaderFooterDetector<'a> {
    windows: Vec<PageWindows<'a>>,
}

impl<'a> HeaderFooterDetector<'a> {
    /// Snapshots the candidate windows of every page.
    pub fn new(pages: &'a [RawPage]) -> Self {
        Self {
            windows: pages.iter().map(PageWindows::new).collect(),
        }
    }

    /// Number of analyzed pages.
    pub fn page_count(&self) -> usize {
        self.windows.len()
    }

    /// Tally stage: counts signatures over every page.
    pub fn tally(&self) -> FrequencyTally {
        let mut tally = FrequencyTally::default();
        for windows in &self.windows {
            tally.add_page(windows);
        }
        tally
    }

    /// Classification stage: boundaries per page from a completed tally.
    ///
    /// Footer blocks must start at or below the page's header boundary. On a
    /// short page the two windows overlap, and a block already bounding the
    /// header is then never a footer, so `header <= footer` always holds.
    pub fn classify(&self, tally: &FrequencyTally) -> Vec<EdgeBoundaries> {
        let limit = threshold(self.page_count());
        self.windows
            .iter()
            .map(|w| {
                let headers: Vec<&Block> = w
                    .headers
                    .iter()
                    .filter(|c| tally.header_count(&c.signature) > limit)
                    .map(|c| c.block)
                    .collect();
                let header = headers.iter().map(|b| b.y1()).reduce(f64::max).unwrap_or(0.0);
                let footers: Vec<&Block> = w
                    .footers
                    .iter()
                    .filter(|c| tally.footer_count(&c.signature) > limit)
                    .map(|c| c.block)
                    .filter(|b| b.y0() >= header)
                    .collect();
                EdgeBoundaries {
                    header,
                    footer: footers
                        .iter()
                        .map(|b| b.y0())
                        .reduce(f64::min)
                        .unwrap_or(w.bottom),
                    header_blocks: headers.len(),
                    footer_blocks: footers.len(),
                }
            })
            .collect()
    }

    /// Runs both stages.
    pub fn detect(&self) -> Vec<EdgeBoundaries> {
        let tally = self.tally();
        let boundaries = self.classify(&tally);
        debug!(
            pages = self.page_count(),
            threshold = threshold(self.page_count()),
            header_pages = boundaries.iter().filter(|b| b.header_blocks > 0).count(),
            footer_pages = boundaries.iter().filter(|b| b.footer_blocks > 0).count(),
            "header/footer detection"
        );
        boundaries
    }
}

/// Detect header/footer boundaries for every page of a document.
pub fn detect_header_footer(pages: &[RawPage]) -> Vec<EdgeBoundaries> {
    HeaderFooterDetector::new(pages).detect()
}

/// Detect header/footer boundaries and store them on the pages.
pub fn apply_header_footer(pages: &mut [RawPage]) -> Vec<EdgeBoundaries> {
    let boundaries = detect_header_footer(pages);
    for (page, edges) in pages.iter_mut().zip(&boundaries) {
        page.header = edges.header;
        page.footer = edges.footer;
    }
    boundaries
}
