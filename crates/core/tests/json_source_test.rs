//! Tests for the JSON content source.

use masthead_core::layout::BlockContent;
use masthead_core::source::{JsonContentSource, PageContentSource};
use masthead_core::{BasicLayoutAnalyzer, Pages, ParseSettings, StructureError};

const DOC: &str = r#"{
    "fonts": [{"name": "Helvetica", "line_height_ratio": 1.15}],
    "pages": [
        {
            "width": 612,
            "height": 792,
            "blocks": [
                {"bbox": [72, 40, 540, 52], "text": "Annual Report", "font": "Helvetica", "size": 10},
                {"bbox": [72, 100, 540, 400]},
                {"bbox": [72, 420, 540, 700], "text": "Body", "font": "Times", "size": 12}
            ],
            "images": [{"bbox": [100, 450, 300, 600], "name": "Im1"}]
        },
        {"width": 612, "height": 792}
    ]
}"#;

#[test]
fn test_extract_blocks_and_images() {
    let source = JsonContentSource::from_json(DOC).unwrap();
    assert_eq!(source.page_count(), 2);

    let raw = source.extract(0).unwrap();
    assert_eq!(raw.id, 0);
    assert_eq!(raw.width(), 612.0);
    assert_eq!(raw.height(), 792.0);
    assert_eq!(raw.footer, 792.0);
    assert_eq!(raw.header, 0.0);
    assert_eq!(raw.blocks.len(), 3);
    assert_eq!(
        raw.blocks[0].content,
        BlockContent::Text("Annual Report".to_string())
    );
    assert_eq!(raw.blocks[1].content, BlockContent::Graphic);
    assert_eq!(raw.images.len(), 1);
    assert_eq!(raw.images[0].name.as_deref(), Some("Im1"));
    assert!(raw.has_text());
    assert_eq!(raw.raw_text(), "Annual Report\nBody");

    let empty = source.extract(1).unwrap();
    assert!(empty.blocks.is_empty());
    assert!(!empty.has_text());
}

#[test]
fn test_extract_is_idempotent() {
    let source = JsonContentSource::from_json(DOC).unwrap();
    assert_eq!(source.extract(0).unwrap(), source.extract(0).unwrap());
}

#[test]
fn test_font_refinement_uses_document_profile() {
    let source = JsonContentSource::from_json(DOC).unwrap();
    let profile = source.font_profile().unwrap();
    let mut raw = source.extract(0).unwrap();
    source.clean_up(&mut raw, &ParseSettings::default()).unwrap();
    source.process_font(&mut raw, &profile);

    let heights: Vec<Option<f64>> = raw.blocks.iter().map(|b| b.line_height).collect();
    assert_eq!(heights[0], Some(10.0 * 1.15));
    assert_eq!(heights[1], None);
    assert_eq!(heights[2], Some(12.0 * 1.2));
    // the image overlaps the body text
    assert_eq!(raw.floating_images.len(), 1);
}

#[test]
fn test_unknown_page() {
    let source = JsonContentSource::from_json(DOC).unwrap();
    assert!(matches!(
        source.extract(7),
        Err(StructureError::PageNotFound(7))
    ));
}

#[test]
fn test_inverted_block_is_rejected() {
    let source = JsonContentSource::from_json(
        r#"{"pages": [{"width": 100, "height": 100, "blocks": [
            {"bbox": [0, 0, 10, 10], "text": "ok"},
            {"bbox": [0, 20, 10, 10], "text": "upside down"}
        ]}]}"#,
    )
    .unwrap();
    match source.extract(0) {
        Err(StructureError::InvalidBlock { page, index, .. }) => {
            assert_eq!(page, 0);
            assert_eq!(index, 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let mut pages = Pages::with_count(1);
    assert!(
        pages
            .parse(&source, &BasicLayoutAnalyzer, &ParseSettings::default())
            .is_err()
    );
}

#[test]
fn test_invalid_page_size_is_rejected() {
    let source =
        JsonContentSource::from_json(r#"{"pages": [{"width": 0, "height": 100}]}"#).unwrap();
    assert!(matches!(source.extract(0), Err(StructureError::Source(_))));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        JsonContentSource::from_json("{\"pages\": [}"),
        Err(StructureError::Json(_))
    ));
}
