//! Tolerance-based clustering of one-dimensional extents.
//!
//! Used by the section analyzer to find content columns and horizontal bands.

/// A closed interval (start, end) with start <= end.
pub type Interval = (f64, f64);

/// Merge intervals that overlap or are separated by less than `gap`.
///
/// The result is sorted by start and pairwise separated by at least `gap`.
pub fn merge_intervals(mut xs: Vec<Interval>, gap: f64) -> Vec<Interval> {
    xs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    let mut groups: Vec<Interval> = Vec::with_capacity(xs.len());
    for (start, end) in xs {
        match groups.last_mut() {
            Some(last) if start - last.1 < gap => last.1 = last.1.max(end),
            _ => groups.push((start, end)),
        }
    }
    groups
}

/// Group items into runs of vertically overlapping extents.
///
/// `extent` maps an item to its (top, bottom). Items are visited by top edge;
/// the sort is stable, so items sharing a top keep their input order. Each
/// returned group is a run of items whose extents chain together.
pub fn cluster_bands<T, F: Fn(&T) -> Interval>(mut xs: Vec<T>, extent: F) -> Vec<Vec<T>> {
    xs.sort_by(|a, b| extent(a).0.total_cmp(&extent(b).0));
    let mut groups: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut bottom = f64::NEG_INFINITY;
    for x in xs {
        let (top, end) = extent(&x);
        if !current.is_empty() && top >= bottom {
            groups.push(std::mem::take(&mut current));
            bottom = f64::NEG_INFINITY;
        }
        bottom = bottom.max(end);
        current.push(x);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_close_intervals() {
        let merged = merge_intervals(vec![(50.0, 60.0), (0.0, 10.0), (12.0, 20.0)], 5.0);
        assert_eq!(merged, vec![(0.0, 20.0), (50.0, 60.0)]);
    }

    #[test]
    fn merge_with_zero_gap_keeps_touching_apart() {
        let merged = merge_intervals(vec![(0.0, 10.0), (10.0, 20.0)], 0.0);
        assert_eq!(merged, vec![(0.0, 10.0), (10.0, 20.0)]);
    }

    #[test]
    fn bands_split_on_vertical_gaps() {
        let items = vec![(0.0, 10.0), (5.0, 12.0), (12.0, 20.0), (30.0, 40.0)];
        let bands = cluster_bands(items, |&iv| iv);
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].len(), 2);
    }

    #[test]
    fn bands_do_not_depend_on_input_order() {
        // left to right: the middle item is what joins the outer two
        let items = vec![(0.0, 10.0), (20.0, 30.0), (5.0, 25.0)];
        let bands = cluster_bands(items, |&iv| iv);
        assert_eq!(bands, vec![vec![(0.0, 10.0), (5.0, 25.0), (20.0, 30.0)]]);
    }
}
