//! Union decomposition of two touching or overlapping areas
//!
//! Both algorithms return the union of two areas as at most three disjoint
//! strips, or `None` when the pair cannot be tiled that way and the caller
//! must keep both areas separate. The horizontal variant slices the result
//! into top-to-bottom strips spanning the merged columns. The vertical
//! variant slices it into left-to-right strips spanning the merged rows.

use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::domain::core::Area;

/// Ordered strips produced by a union, never more than three
pub type Strips = SmallVec<[Area; 3]>;

/// Direction along which a union is sliced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnionAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl UnionAxis {
    /// Runs the union algorithm matching this axis
    pub fn union(self, a: &Area, b: &Area) -> Option<Strips> {
        match self {
            UnionAxis::Horizontal => a.horizontal_union(b),
            UnionAxis::Vertical => a.vertical_union(b),
        }
    }
}

/// True if at least one empty line lies between `end` and `start`
fn separated(end: i32, start: i32) -> bool {
    i64::from(end) + 1 < i64::from(start)
}

/// True if `start` is the line right after `end`
fn flush(end: i32, start: i32) -> bool {
    i64::from(end) + 1 == i64::from(start)
}

impl Area {
    /// Merges two areas into top-to-bottom strips
    ///
    /// # Example
    /// ```rust
    /// use screen_area::Area;
    ///
    /// let left = Area::new(0, 0, 5, 10);
    /// let right = Area::new(5, 0, 5, 10);
    /// let strips = left.horizontal_union(&right).unwrap();
    /// assert_eq!(strips.as_slice(), &[Area::new(0, 0, 10, 10)]);
    /// ```
    pub fn horizontal_union(&self, other: &Area) -> Option<Strips> {
        // At least one empty column between them
        if separated(other.right(), self.x) || separated(self.right(), other.x) {
            trace!("horizontal union of {self} and {other}: column gap");
            return None;
        }

        // No row in common: only same-column stacks merge
        if other.bottom() < self.y || other.y > self.bottom() {
            if self.width == other.width && self.x == other.x {
                let height = self.height + other.height;
                // [other]
                // [self]
                if flush(other.bottom(), self.y) {
                    return Some(smallvec![Area::new(self.x, other.y, self.width, height)]);
                }
                // [self]
                // [other]
                if flush(self.bottom(), other.y) {
                    return Some(smallvec![Area::new(self.x, self.y, self.width, height)]);
                }
            }
            trace!("horizontal union of {self} and {other}: no shared row");
            return None;
        }

        let min_x = self.x.min(other.x);
        let max_x = self.right().max(other.right());
        let merged_width = max_x - min_x + 1;

        let (low, hi) = if self.y < other.y { (self, other) } else { (other, self) };

        let mut strips = Strips::new();

        if hi.y != low.y {
            strips.push(Area::new(low.x, low.y, low.width, hi.y - low.y));
        }

        let shared_rows = low.bottom().min(hi.bottom()) - low.y.max(hi.y) + 1;
        strips.push(Area::new(min_x, hi.y, merged_width, shared_rows));

        if low.bottom() != hi.bottom() {
            if hi.bottom() < low.bottom() {
                strips.push(Area::new(
                    low.x,
                    hi.bottom() + 1,
                    low.width,
                    low.bottom() - hi.bottom(),
                ));
            } else {
                strips.push(Area::new(
                    hi.x,
                    low.bottom() + 1,
                    hi.width,
                    hi.bottom() - low.bottom(),
                ));
            }
        }

        Some(strips)
    }

    /// Merges two areas into left-to-right strips
    ///
    /// Mirror of [`Area::horizontal_union`] with the axes swapped.
    pub fn vertical_union(&self, other: &Area) -> Option<Strips> {
        // At least one empty row between them
        if separated(other.bottom(), self.y) || separated(self.bottom(), other.y) {
            trace!("vertical union of {self} and {other}: row gap");
            return None;
        }

        // No column in common: only same-row neighbours merge
        if other.right() < self.x || other.x > self.right() {
            if self.height == other.height && self.y == other.y {
                let width = self.width + other.width;
                // [other][self]
                if flush(other.right(), self.x) {
                    return Some(smallvec![Area::new(other.x, self.y, width, self.height)]);
                }
                // [self][other]
                if flush(self.right(), other.x) {
                    return Some(smallvec![Area::new(self.x, self.y, width, self.height)]);
                }
            }
            trace!("vertical union of {self} and {other}: no shared column");
            return None;
        }

        let min_y = self.y.min(other.y);
        let max_y = self.bottom().max(other.bottom());
        let merged_height = max_y - min_y + 1;

        let (left, right) = if self.x < other.x { (self, other) } else { (other, self) };

        let mut strips = Strips::new();

        if right.x != left.x {
            strips.push(Area::new(left.x, left.y, right.x - left.x, left.height));
        }

        let shared_columns = left.right().min(right.right()) - left.x.max(right.x) + 1;
        strips.push(Area::new(right.x, min_y, shared_columns, merged_height));

        if left.right() != right.right() {
            if right.right() < left.right() {
                strips.push(Area::new(
                    right.right() + 1,
                    left.y,
                    left.right() - right.right(),
                    left.height,
                ));
            } else {
                strips.push(Area::new(
                    left.right() + 1,
                    right.y,
                    right.right() - left.right(),
                    right.height,
                ));
            }
        }

        Some(strips)
    }
}
