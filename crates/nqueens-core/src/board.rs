//! Incremental attack-state board for the N-Queens search.
//!
//! Queens are placed column by column. The board tracks, for the next column
//! to fill, which rows and which diagonals are still unattacked, so checking a
//! square and placing or removing a queen are all O(1).
//!
//! # Diagonal indexing
//!
//! For a square at column `c` and row `r` on a board of size `n`:
//!
//! - the rising diagonal has index `(n - 1) + c - r`,
//! - the falling diagonal has index `c + r`.
//!
//! Both indices lie in `0..2n - 1`.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::Board;
//!
//! let mut board = Board::new(4)?;
//! board.place(1);
//! board.place(3);
//! board.place(0);
//! board.place(2);
//! assert!(board.is_complete());
//! assert_eq!(board.placements(), &[1, 3, 0, 2]);
//!
//! // Backtrack in strict reverse order.
//! board.remove(2);
//! board.remove(0);
//! assert_eq!(board.column(), 2);
//! # Ok::<(), nqueens_core::BoardError>(())
//! ```

use crate::{BoardError, RowRange};

/// An N×N board with queens placed in its leftmost columns.
///
/// A board is owned by exactly one unit of search work at a time. Concurrent
/// strategies hand out [`duplicate`](Self::duplicate)s instead of sharing one
/// board, so the incremental state is never mutated from two places.
///
/// The board also carries the [`RowRange`] its owner should explore in the
/// next column, which makes a board on its own a complete unit of work.
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// `placements[c]` is the row of the queen in column `c`.
    placements: Vec<usize>,
    free_rows: Vec<bool>,
    free_diag_up: Vec<bool>,
    free_diag_down: Vec<bool>,
    placement_count: u64,
    row_range: RowRange,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// Every row and diagonal starts free, and the row range covers the whole
    /// first column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is 0, and
    /// [`BoardError::AllocationFailure`] if the tracking arrays cannot be
    /// allocated.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize { size });
        }
        let diagonals = size
            .checked_mul(2)
            .map(|len| len - 1)
            .ok_or(BoardError::AllocationFailure { size })?;

        let mut placements = Vec::new();
        placements
            .try_reserve_exact(size)
            .map_err(|_| BoardError::AllocationFailure { size })?;

        Ok(Self {
            size,
            placements,
            free_rows: try_filled(size, size)?,
            free_diag_up: try_filled(diagonals, size)?,
            free_diag_down: try_filled(diagonals, size)?,
            placement_count: 0,
            row_range: RowRange::full(size),
        })
    }

    /// Creates an empty board whose first column explores only `row_range`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::new`].
    ///
    /// # Panics
    ///
    /// Panics if `row_range` extends past the board.
    pub fn with_row_range(size: usize, row_range: RowRange) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        board.set_row_range(row_range);
        Ok(board)
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the index of the next column awaiting a queen.
    ///
    /// This is also the current search depth.
    #[must_use]
    pub fn column(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` once every column holds a queen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.size
    }

    /// Returns the rows of the placed queens, one per filled column.
    #[must_use]
    pub fn placements(&self) -> &[usize] {
        &self.placements
    }

    /// Returns the free flag of every row.
    #[must_use]
    pub fn free_rows(&self) -> &[bool] {
        &self.free_rows
    }

    /// Returns the free flag of every rising diagonal.
    #[must_use]
    pub fn free_diag_up(&self) -> &[bool] {
        &self.free_diag_up
    }

    /// Returns the free flag of every falling diagonal.
    #[must_use]
    pub fn free_diag_down(&self) -> &[bool] {
        &self.free_diag_down
    }

    /// Returns how many times a queen has been placed on this board.
    ///
    /// The counter only grows, also across [`remove`](Self::remove), and is
    /// copied by [`duplicate`](Self::duplicate). It is purely diagnostic.
    #[must_use]
    pub fn placement_count(&self) -> u64 {
        self.placement_count
    }

    /// Returns the rows the owner of this board should explore next.
    #[must_use]
    pub fn row_range(&self) -> RowRange {
        self.row_range
    }

    /// Sets the rows the owner of this board should explore next.
    ///
    /// # Panics
    ///
    /// Panics if `row_range` extends past the board.
    pub fn set_row_range(&mut self, row_range: RowRange) {
        assert!(
            row_range.end() <= self.size,
            "row range {row_range} exceeds board size {}",
            self.size
        );
        self.row_range = row_range;
    }

    /// Returns `true` if a queen can go on `row` in the next column.
    ///
    /// The row, its rising diagonal and its falling diagonal must all be free.
    /// Must not be called on a complete board.
    #[must_use]
    #[inline]
    pub fn is_free(&self, row: usize) -> bool {
        debug_assert!(!self.is_complete(), "no column left to test");
        let column = self.column();
        self.free_rows[row]
            && self.free_diag_up[self.up_index(column, row)]
            && self.free_diag_down[column + row]
    }

    /// Places a queen on `row` in the next column and advances the cursor.
    ///
    /// The square must be free (see [`is_free`](Self::is_free)).
    #[inline]
    pub fn place(&mut self, row: usize) {
        debug_assert!(self.is_free(row), "row {row} is attacked");
        let column = self.column();
        let up = self.up_index(column, row);
        self.free_rows[row] = false;
        self.free_diag_up[up] = false;
        self.free_diag_down[column + row] = false;
        self.placements.push(row);
        self.placement_count += 1;
    }

    /// Removes the queen on `row` from the most recently filled column.
    ///
    /// This is the exact inverse of [`place`](Self::place): calls must pair
    /// with placements in strict last-in, first-out order.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not the row of the most recently placed queen.
    #[inline]
    pub fn remove(&mut self, row: usize) {
        let placed = self.placements.pop();
        assert_eq!(placed, Some(row), "queens must be removed in LIFO order");
        let column = self.column();
        self.free_diag_down[column + row] = true;
        let up = self.up_index(column, row);
        self.free_diag_up[up] = true;
        self.free_rows[row] = true;
    }

    /// Returns an independent deep copy of this board.
    ///
    /// The copy has its own tracking arrays, so mutating it never affects the
    /// original. Allocation failure aborts the process.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Returns the row whose selection in the first column halves the next one.
    ///
    /// Must be evaluated before placing the queen of the current column. In the
    /// first column it is the central row `size / 2`; deeper down it is `size`,
    /// which no queen can occupy, so the rule never fires there.
    #[must_use]
    pub fn symmetry_middle(&self) -> usize {
        if self.column() == 0 {
            self.size >> 1
        } else {
            self.size
        }
    }

    /// Returns the rows to explore after a queen has just been placed.
    ///
    /// `middle` is the value [`symmetry_middle`](Self::symmetry_middle)
    /// returned before the placement. When the first queen sits on the central
    /// row of an odd board, only the upper half of the second column is
    /// explored, since the lower half mirrors it.
    #[must_use]
    pub fn descent_range(&self, middle: usize) -> RowRange {
        if self.placements.first() == Some(&middle) {
            RowRange::new(0, middle)
        } else {
            RowRange::full(self.size)
        }
    }

    fn up_index(&self, column: usize, row: usize) -> usize {
        self.size - 1 + column - row
    }

    pub(crate) fn reset_placement_count(&mut self) {
        self.placement_count = 0;
    }
}

impl Clone for Board {
    // Keep the full placement capacity so a duplicate never reallocates.
    fn clone(&self) -> Self {
        let mut placements = Vec::with_capacity(self.size);
        placements.extend_from_slice(&self.placements);
        Self {
            size: self.size,
            placements,
            free_rows: self.free_rows.clone(),
            free_diag_up: self.free_diag_up.clone(),
            free_diag_down: self.free_diag_down.clone(),
            placement_count: self.placement_count,
            row_range: self.row_range,
        }
    }
}

fn try_filled(len: usize, size: usize) -> Result<Vec<bool>, BoardError> {
    let mut flags = Vec::new();
    flags
        .try_reserve_exact(len)
        .map_err(|_| BoardError::AllocationFailure { size })?;
    flags.resize(len, true);
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn legal_rows(board: &Board) -> Vec<usize> {
        (0..board.size()).filter(|&row| board.is_free(row)).collect()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.column(), 0);
        assert!(board.placements().is_empty());
        assert_eq!(board.free_rows().len(), 5);
        assert_eq!(board.free_diag_up().len(), 9);
        assert_eq!(board.free_diag_down().len(), 9);
        assert!(board.free_rows().iter().all(|&free| free));
        assert!(board.free_diag_up().iter().all(|&free| free));
        assert!(board.free_diag_down().iter().all(|&free| free));
        assert_eq!(board.placement_count(), 0);
        assert_eq!(board.row_range(), RowRange::full(5));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_new_reports_allocation_failure() {
        assert_eq!(
            Board::new(usize::MAX),
            Err(BoardError::AllocationFailure { size: usize::MAX })
        );
    }

    #[test]
    fn test_single_square_board() {
        let mut board = Board::new(1).unwrap();
        assert!(board.is_free(0));
        board.place(0);
        assert!(board.is_complete());
    }

    #[test]
    fn test_place_marks_row_and_diagonals() {
        let mut board = Board::new(4).unwrap();
        board.place(1);

        assert_eq!(board.column(), 1);
        assert_eq!(board.placement_count(), 1);
        assert!(!board.free_rows()[1]);
        assert!(!board.free_diag_up()[2]); // (n - 1) + 0 - 1
        assert!(!board.free_diag_down()[1]);

        // Column 1: row 1 shares the row, rows 0 and 2 share a diagonal.
        assert_eq!(legal_rows(&board), vec![3]);
    }

    #[test]
    fn test_remove_restores_state() {
        let mut board = Board::new(6).unwrap();
        board.place(2);
        let before = board.clone();

        board.place(4);
        board.remove(4);

        assert_eq!(board.placements(), before.placements());
        assert_eq!(board.free_rows(), before.free_rows());
        assert_eq!(board.free_diag_up(), before.free_diag_up());
        assert_eq!(board.free_diag_down(), before.free_diag_down());
        assert_eq!(board.column(), before.column());
        assert_eq!(board.placement_count(), before.placement_count() + 1);
    }

    #[test]
    #[should_panic(expected = "LIFO")]
    fn test_remove_out_of_order_panics() {
        let mut board = Board::new(6).unwrap();
        board.place(0);
        board.place(2);
        board.remove(0);
    }

    #[test]
    #[should_panic(expected = "LIFO")]
    fn test_remove_from_empty_board_panics() {
        let mut board = Board::new(3).unwrap();
        board.remove(0);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut board = Board::new(8).unwrap();
        board.place(0);
        board.set_row_range(RowRange::new(2, 6));

        let mut copy = board.duplicate();
        assert_eq!(copy, board);

        copy.place(4);
        copy.set_row_range(RowRange::full(8));
        assert_eq!(board.placements(), &[0]);
        assert!(board.free_rows()[4]);
        assert_eq!(board.row_range(), RowRange::new(2, 6));
        assert_eq!(board.placement_count(), 1);
        assert_eq!(copy.placement_count(), 2);
    }

    #[test]
    fn test_symmetry_middle() {
        let mut board = Board::new(5).unwrap();
        assert_eq!(board.symmetry_middle(), 2);
        board.place(2);
        assert_eq!(board.symmetry_middle(), 5);
    }

    #[test]
    fn test_descent_range_halves_after_central_first_queen() {
        let mut board = Board::new(5).unwrap();
        let middle = board.symmetry_middle();
        board.place(2);
        assert_eq!(board.descent_range(middle), RowRange::new(0, 2));
        board.remove(2);

        board.place(1);
        assert_eq!(board.descent_range(middle), RowRange::full(5));
    }

    #[test]
    fn test_descent_range_never_halves_deeper_columns() {
        let mut board = Board::new(5).unwrap();
        board.place(2);
        let middle = board.symmetry_middle();
        board.place(0);
        assert_eq!(board.descent_range(middle), RowRange::full(5));
    }

    #[test]
    #[should_panic(expected = "exceeds board size")]
    fn test_row_range_past_board_panics() {
        let _ = Board::with_row_range(4, RowRange::new(0, 5));
    }

    proptest! {
        #[test]
        fn test_place_remove_is_noop(size in 1usize..12, picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12)) {
            let mut board = Board::new(size).unwrap();
            // Walk a random legal prefix.
            for pick in &picks {
                if board.is_complete() {
                    break;
                }
                let rows = legal_rows(&board);
                if rows.is_empty() {
                    break;
                }
                board.place(rows[pick.index(rows.len())]);
            }
            prop_assume!(!board.is_complete());

            let snapshot = board.clone();
            for row in legal_rows(&snapshot) {
                board.place(row);
                board.remove(row);
                prop_assert_eq!(board.placements(), snapshot.placements());
                prop_assert_eq!(board.free_rows(), snapshot.free_rows());
                prop_assert_eq!(board.free_diag_up(), snapshot.free_diag_up());
                prop_assert_eq!(board.free_diag_down(), snapshot.free_diag_down());
                prop_assert_eq!(board.column(), snapshot.column());
            }
        }

        #[test]
        fn test_duplicate_mutation_leaves_source_untouched(size in 2usize..12, first in any::<prop::sample::Index>()) {
            let mut board = Board::new(size).unwrap();
            board.place(first.index(size));
            let snapshot = board.clone();

            let mut copy = board.duplicate();
            let rows = legal_rows(&copy);
            if let Some(&row) = rows.first() {
                copy.place(row);
            }
            copy.remove(copy.placements()[copy.column() - 1]);
            prop_assert_eq!(&board, &snapshot);
        }
    }
}
