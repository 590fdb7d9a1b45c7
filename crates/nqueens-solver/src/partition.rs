//! Splitting the symmetry-reduced search into independent units of work.
//!
//! Two policies are provided:
//!
//! - [`static_ranges`] cuts the first column into contiguous row ranges, one
//!   per worker, each searched on a fresh board.
//! - [`for_each_branch`] walks the first columns of a board and emits one
//!   duplicated board per legal placement, so every task owns its state.

use nqueens_core::{Board, BoardError, RowRange, row_boundary};

/// Creates the board every strategy starts from.
///
/// Its first column explores `[0, row_boundary(size))`.
///
/// # Errors
///
/// Returns an error if the board cannot be created.
pub fn root_task(size: usize) -> Result<Board, BoardError> {
    Board::with_row_range(size, RowRange::new(0, row_boundary(size)))
}

/// Splits `[0, row_boundary)` into `workers` contiguous ranges.
///
/// Worker `i` receives `[i * row_boundary / workers, (i + 1) * row_boundary / workers)`.
/// Shares may differ by one row and some may be empty when there are more
/// workers than rows, but the ranges never overlap and leave no gap.
///
/// # Panics
///
/// Panics if `workers` is 0.
///
/// # Examples
///
/// ```
/// use nqueens_core::RowRange;
/// use nqueens_solver::partition::static_ranges;
///
/// assert_eq!(
///     static_ranges(5, 2),
///     vec![RowRange::new(0, 2), RowRange::new(2, 5)],
/// );
/// ```
#[must_use]
pub fn static_ranges(row_boundary: usize, workers: usize) -> Vec<RowRange> {
    assert!(workers > 0, "at least one worker is required");
    (0..workers)
        .map(|i| {
            RowRange::new(
                i * row_boundary / workers,
                (i + 1) * row_boundary / workers,
            )
        })
        .collect()
}

/// Emits one task per legal placement down to column `level`.
///
/// Starting from `board`'s current column and row range, every legal row is
/// placed. If the column just filled is at most `level` and the board is not
/// complete, generation continues one column deeper. Otherwise a duplicate of
/// the board, with its row range set by the symmetry rule, is passed to
/// `emit`. Level 0 therefore yields one task per legal first-column
/// placement, and every task holds `level + 1` queens unless the board filled
/// up first.
///
/// `board` is restored to its entry state before returning.
pub fn for_each_branch<F>(board: &mut Board, level: usize, emit: &mut F)
where
    F: FnMut(Board),
{
    let rows = board.row_range();
    let middle = board.symmetry_middle();
    for row in rows {
        if !board.is_free(row) {
            continue;
        }
        board.place(row);
        board.set_row_range(board.descent_range(middle));
        if board.column() <= level && !board.is_complete() {
            for_each_branch(board, level, emit);
        } else {
            emit(board.duplicate());
        }
        board.remove(row);
    }
    board.set_row_range(rows);
}

/// Collects the tasks [`for_each_branch`] emits.
///
/// # Examples
///
/// ```
/// use nqueens_solver::partition::{branch_tasks, root_task};
///
/// let mut root = root_task(8)?;
/// let tasks = branch_tasks(&mut root, 0);
/// assert_eq!(tasks.len(), 4);
/// assert!(tasks.iter().all(|task| task.column() == 1));
/// # Ok::<(), nqueens_core::BoardError>(())
/// ```
#[must_use]
pub fn branch_tasks(board: &mut Board, level: usize) -> Vec<Board> {
    let mut tasks = Vec::new();
    for_each_branch(board, level, &mut |task| tasks.push(task));
    tasks
}
