//! Pages - a document's page records and the structure parsing pipeline.
//!
//! Parsing runs three phases over the non-skipped pages:
//! 1. extract, clean up and refine every page;
//! 2. detect running headers/footers once over the whole document;
//! 3. compute margin and sections page by page.
//!
//! Each phase completes for all pages before the next starts. Only phase 3
//! may run in parallel.

use std::ops::{Deref, DerefMut};

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, StructureError};
use crate::settings::ParseSettings;
use crate::source::{PageContentSource, RawPage};
use crate::structure::{PageMarginSectionAnalyzer, Section, apply_header_footer};

use super::page::Page;

/// Outcome of a parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSummary {
    /// Number of pages that went through the pipeline.
    pub pages_parsed: usize,
    /// False if no page carried any text.
    pub words_found: bool,
    /// Pages with at least one running header block.
    pub header_pages: usize,
    /// Pages with at least one running footer block.
    pub footer_pages: usize,
}

/// A collection of `Page`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pages {
    pages: Vec<Page>,
}

impl Pages {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Records for pages `0..count`.
    pub fn with_count(count: usize) -> Self {
        Self::new((0..count).map(Page::new).collect())
    }

    /// Marks the pages with the given ids to be skipped.
    pub fn skip(&mut self, ids: &[usize]) {
        for page in self.pages.iter_mut().filter(|p| ids.contains(&p.id)) {
            page.skip_parsing = true;
        }
    }

    pub fn into_vec(self) -> Vec<Page> {
        self.pages
    }

    /// Analyze document structure: header, footer, margin and sections.
    ///
    /// Fills in every non-skipped page. Any extraction, cleanup or analyzer
    /// failure aborts the run and is returned unchanged; pages that might fail
    /// should be marked skipped beforehand.
    pub fn parse<S, A>(
        &mut self,
        source: &S,
        analyzer: &A,
        settings: &ParseSettings,
    ) -> Result<ParseSummary>
    where
        S: PageContentSource + ?Sized,
        A: PageMarginSectionAnalyzer + Sync + ?Sized,
    {
        settings.validate()?;

        let profile = source.font_profile()?;

        // Phase 1: extract and clean up raw pages.
        let mut targets: Vec<usize> = Vec::new();
        let mut raw_pages: Vec<RawPage> = Vec::new();
        let mut words_found = false;
        for (idx, page) in self.pages.iter_mut().enumerate() {
            if page.skip_parsing {
                continue;
            }

            let mut raw = source.extract(page.id)?;

            // scanned documents may come without any text
            if !words_found && raw.has_text() {
                words_found = true;
            }

            source.clean_up(&mut raw, settings)?;
            source.process_font(&mut raw, &profile);

            // floating images are classified by cleanup
            page.width = raw.width();
            page.height = raw.height();
            page.float_images = raw.floating_images.clone();

            targets.push(idx);
            raw_pages.push(raw);
        }
        debug!(pages = raw_pages.len(), fonts = profile.len(), "extracted raw pages");

        if !words_found {
            warn!("Words count: 0. It might be a scanned document, which is not supported yet.");
        }

        // Phase 2: document level structure.
        let edges = apply_header_footer(&mut raw_pages);
        for (&idx, edge) in targets.iter().zip(&edges) {
            let page = &mut self.pages[idx];
            page.header = edge.header;
            page.footer = edge.footer;
        }

        // Phase 3: page level structure.
        let sections = analyze_pages(&mut raw_pages, analyzer, settings)?;
        for ((&idx, raw), sections) in targets.iter().zip(&raw_pages).zip(sections) {
            let page = &mut self.pages[idx];
            page.margin = raw.margin;
            page.sections.extend(sections);
        }

        Ok(ParseSummary {
            pages_parsed: raw_pages.len(),
            words_found,
            header_pages: edges.iter().filter(|e| e.header_blocks > 0).count(),
            footer_pages: edges.iter().filter(|e| e.footer_blocks > 0).count(),
        })
    }
}

fn analyze_pages<A>(
    raw_pages: &mut [RawPage],
    analyzer: &A,
    settings: &ParseSettings,
) -> Result<Vec<Vec<Section>>>
where
    A: PageMarginSectionAnalyzer + Sync + ?Sized,
{
    if settings.threads <= 1 {
        return raw_pages
            .iter_mut()
            .map(|raw| analyze_page(raw, analyzer, settings))
            .collect();
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build()
        .map_err(|e| StructureError::ThreadPool(e.to_string()))?;
    pool.install(|| {
        raw_pages
            .par_iter_mut()
            .map(|raw| analyze_page(raw, analyzer, settings))
            .collect()
    })
}

fn analyze_page<A>(raw: &mut RawPage, analyzer: &A, settings: &ParseSettings) -> Result<Vec<Section>>
where
    A: PageMarginSectionAnalyzer + ?Sized,
{
    let margin = analyzer.calculate_margin(raw, raw.header, raw.footer, settings)?;
    raw.margin = Some(margin);
    analyzer.parse_sections(raw, settings)
}

impl Deref for Pages {
    type Target = [Page];

    fn deref(&self) -> &Self::Target {
        &self.pages
    }
}

impl DerefMut for Pages {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pages
    }
}

impl From<Vec<Page>> for Pages {
    fn from(pages: Vec<Page>) -> Self {
        Self::new(pages)
    }
}
