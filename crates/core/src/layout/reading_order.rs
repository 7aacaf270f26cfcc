//! Reading order: top-to-bottom, then left-to-right within a line cluster.

use crate::utils::{HasBBox, Rect};

/// Two objects are on the same row if they overlap vertically by at least this
/// fraction of the smaller height.
pub const ROW_OVERLAP_RATIO: f64 = 0.5;

/// Returns the indices of `items` in reading order.
///
/// Items are sorted by their top edge, then cut into rows of vertically
/// overlapping items; each row is then sorted left to right. Sorting is stable,
/// so identical rectangles keep their input order.
pub fn reading_order<T: HasBBox>(items: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[a]
            .y0()
            .total_cmp(&items[b].y0())
            .then(items[a].x0().total_cmp(&items[b].x0()))
    });

    let mut result = Vec::with_capacity(order.len());
    let mut row: Vec<usize> = Vec::new();
    let mut row_span: Option<Rect> = None;
    for idx in order {
        let item = &items[idx];
        let same_row = row_span.is_some_and(|span| in_same_row(&span, item));
        if !same_row && !row.is_empty() {
            flush_row(items, &mut row, &mut result);
        }
        row_span = match row_span {
            Some(span) if same_row => Some((
                span.0,
                span.1.min(item.y0()),
                span.2,
                span.3.max(item.y1()),
            )),
            _ => Some(item.bbox()),
        };
        row.push(idx);
    }
    flush_row(items, &mut row, &mut result);
    result
}

/// Returns references to `items` in reading order.
pub fn sort_in_reading_order<T: HasBBox>(items: &[T]) -> Vec<&T> {
    reading_order(items).into_iter().map(|i| &items[i]).collect()
}

fn in_same_row(span: &Rect, item: &impl HasBBox) -> bool {
    if !span.is_voverlap(item) {
        return false;
    }
    let min_height = span.height().min(item.height());
    span.voverlap(item) >= ROW_OVERLAP_RATIO * min_height
}

fn flush_row<T: HasBBox>(items: &[T], row: &mut Vec<usize>, out: &mut Vec<usize>) {
    row.sort_by(|&a, &b| items[a].x0().total_cmp(&items[b].x0()));
    out.append(row);
}
