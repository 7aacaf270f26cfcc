//! Geometry helpers shared by the layout and structure modules.
//!
//! Provides:
//! - The `Rect` type and the `HasBBox` trait
//! - Overlap / intersection / union operations on rectangles
//! - Small float helpers

/// Points per inch.
pub const ITP: f64 = 72.0;

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// A rectangle defined by (x0, y0, x1, y1) in page space.
///
/// The origin is the top-left corner of the page and y grows downward, so
/// (x0, y0) is the top-left corner and (x1, y1) the bottom-right corner.
pub type Rect = (f64, f64, f64, f64);

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Rounds to one decimal place.
#[inline]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Returns true if every coordinate is finite and the rectangle is not inverted.
pub fn is_valid_rect(rect: Rect) -> bool {
    let (x0, y0, x1, y1) = rect;
    x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite() && x1 >= x0 && y1 >= y0
}

/// Intersection of two rectangles, or None if they do not touch.
pub fn intersect(a: Rect, b: Rect) -> Option<Rect> {
    let x0 = a.0.max(b.0);
    let y0 = a.1.max(b.1);
    let x1 = a.2.min(b.2);
    let y1 = a.3.min(b.3);
    if x1 < x0 || y1 < y0 {
        None
    } else {
        Some((x0, y0, x1, y1))
    }
}

/// Smallest rectangle containing both inputs.
pub fn union(a: Rect, b: Rect) -> Rect {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

/// Smallest rectangle containing all inputs, or None for an empty input.
pub fn get_bound<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
    rects.into_iter().reduce(union)
}

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Returns true if there is vertical overlap with another object.
    fn is_voverlap(&self, other: &impl HasBBox) -> bool {
        other.y0() <= self.y1() && self.y0() <= other.y1()
    }

    /// Returns the amount of vertical overlap with another object.
    fn voverlap(&self, other: &impl HasBBox) -> f64 {
        if self.is_voverlap(other) {
            self.y1().min(other.y1()) - self.y0().max(other.y0())
        } else {
            0.0
        }
    }

    /// Returns the amount of horizontal overlap with another object.
    fn hoverlap(&self, other: &impl HasBBox) -> f64 {
        if other.x0() <= self.x1() && self.x0() <= other.x1() {
            self.x1().min(other.x1()) - self.x0().max(other.x0())
        } else {
            0.0
        }
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

impl<T: HasBBox> HasBBox for &T {
    fn x0(&self) -> f64 {
        (**self).x0()
    }
    fn y0(&self) -> f64 {
        (**self).y0()
    }
    fn x1(&self) -> f64 {
        (**self).x1()
    }
    fn y1(&self) -> f64 {
        (**self).y1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_disjoint_is_none() {
        assert_eq!(intersect((0.0, 0.0, 1.0, 1.0), (2.0, 2.0, 3.0, 3.0)), None);
    }

    #[test]
    fn intersect_touching_edges() {
        assert_eq!(
            intersect((0.0, 0.0, 1.0, 1.0), (1.0, 0.0, 2.0, 1.0)),
            Some((1.0, 0.0, 1.0, 1.0))
        );
    }

    #[test]
    fn get_bound_of_nothing() {
        assert_eq!(get_bound(std::iter::empty()), None);
        assert_eq!(
            get_bound([(0.0, 5.0, 2.0, 6.0), (1.0, 1.0, 4.0, 3.0)]),
            Some((0.0, 1.0, 4.0, 6.0))
        );
    }

    #[test]
    fn overlaps_on_rect_tuples() {
        let a: Rect = (0.0, 0.0, 10.0, 10.0);
        let b: Rect = (5.0, 8.0, 20.0, 30.0);
        assert!(approx_eq(a.voverlap(&b), 2.0, EPSILON));
        assert!(approx_eq(a.hoverlap(&b), 5.0, EPSILON));
        assert!(!is_valid_rect((1.0, 0.0, 0.0, 1.0)));
        assert!(!is_valid_rect((0.0, 0.0, f64::NAN, 1.0)));
    }
}
