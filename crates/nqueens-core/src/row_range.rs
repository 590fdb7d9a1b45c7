//! Half-open row ranges and the symmetry row boundary.

use std::ops::Range;

/// Returns the number of first-column rows that must actually be searched.
///
/// A board and its mirror image across the horizontal axis have the same
/// number of solutions, so only the upper half of the first column (plus the
/// central row when `size` is odd) is explored and every solution is counted
/// twice.
///
/// # Examples
///
/// ```
/// use nqueens_core::row_boundary;
///
/// assert_eq!(row_boundary(1), 1);
/// assert_eq!(row_boundary(4), 2);
/// assert_eq!(row_boundary(5), 3);
/// ```
#[must_use]
pub const fn row_boundary(size: usize) -> usize {
    (size >> 1) + (size & 1)
}

/// A half-open range of rows `[start, end)` explored at one search level.
///
/// # Examples
///
/// ```
/// use nqueens_core::RowRange;
///
/// let range = RowRange::new(1, 4);
/// assert_eq!(range.len(), 3);
/// assert!(range.contains(3));
/// assert_eq!(range.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("[{start}, {end})")]
pub struct RowRange {
    start: usize,
    end: usize,
}

impl RowRange {
    /// Creates the range `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "row range start {start} is past its end {end}");
        Self { start, end }
    }

    /// Creates the range `[0, size)` covering every row of a board.
    #[must_use]
    pub const fn full(size: usize) -> Self {
        Self { start: 0, end: size }
    }

    /// Returns the first row of the range.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Returns one past the last row of the range.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns the number of rows in the range.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range contains no rows.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `row` lies inside the range.
    #[must_use]
    pub const fn contains(self, row: usize) -> bool {
        self.start <= row && row < self.end
    }

    /// Returns the rows of the range as a standard range.
    #[must_use]
    pub const fn rows(self) -> Range<usize> {
        self.start..self.end
    }
}

impl IntoIterator for RowRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_boundary_rounds_up() {
        let expected = [(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (8, 4), (13, 7)];
        for (size, boundary) in expected {
            assert_eq!(row_boundary(size), boundary, "size {size}");
        }
    }

    #[test]
    fn test_empty_range() {
        let range = RowRange::new(3, 3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(3));
        assert_eq!(range.into_iter().count(), 0);
    }

    #[test]
    fn test_full_range() {
        let range = RowRange::full(6);
        assert_eq!(range.start(), 0);
        assert_eq!(range.end(), 6);
        assert!(range.contains(0));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(RowRange::new(2, 5).to_string(), "[2, 5)");
    }

    #[test]
    #[should_panic(expected = "past its end")]
    fn test_reversed_range_panics() {
        let _ = RowRange::new(4, 2);
    }
}
