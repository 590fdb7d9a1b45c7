//! Sequential depth-first backtracking search.
//!
//! This is the leaf of every strategy: once a unit of work owns a board, it
//! explores the board's subtree here without creating tasks or taking locks.
//!
//! # Symmetry
//!
//! Before placing the queen of a column, the search reads the board's
//! [`symmetry_middle`](Board::symmetry_middle). After placing it, the next
//! column explores [`descent_range`](Board::descent_range), which is the upper
//! half of the rows only when the first queen sits on the central row. Together
//! with the first column being limited to
//! [`row_boundary`](nqueens_core::row_boundary) rows, every solution is reached
//! in exactly one of each mirrored pair and counted twice.

use nqueens_core::{Board, RowRange};

use crate::Tally;

/// Counts the completed boards reachable from `board` through `rows`.
///
/// Each completed board adds 2 for its mirror image. The board is restored
/// to its entry state before returning. `board` must not be complete.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, RowRange, row_boundary};
/// use nqueens_solver::search;
///
/// let mut board = Board::new(6)?;
/// let solutions = search::count_solutions(&mut board, RowRange::new(0, row_boundary(6)));
/// assert_eq!(solutions, 4);
/// assert_eq!(board.column(), 0);
/// # Ok::<(), nqueens_core::BoardError>(())
/// ```
pub fn count_solutions(board: &mut Board, rows: RowRange) -> u64 {
    let mut solutions = 0;
    for_each_solution(board, rows, &mut |_| solutions += 2);
    solutions
}

/// Runs one unit of work to completion and returns its tally.
///
/// The board's own [`row_range`](Board::row_range) is explored. A board that
/// is already complete (a task generated at the last column) counts as one
/// doubled solution.
pub fn count_task(board: &mut Board) -> Tally {
    let before = board.placement_count();
    let solutions = if board.is_complete() {
        2
    } else {
        let rows = board.row_range();
        count_solutions(board, rows)
    };
    Tally::new(solutions, board.placement_count() - before, 1)
}

/// Calls `visit` with the placements of every completed board reachable from
/// `board` through `rows`.
pub(crate) fn for_each_solution<F>(board: &mut Board, rows: RowRange, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    let middle = board.symmetry_middle();
    for row in rows {
        if !board.is_free(row) {
            continue;
        }
        board.place(row);
        if board.is_complete() {
            visit(board.placements());
        } else {
            let next = board.descent_range(middle);
            for_each_solution(board, next, visit);
        }
        board.remove(row);
    }
}

#[cfg(test)]
mod tests {
    use nqueens_core::row_boundary;

    use super::*;
    use crate::testing::{KNOWN_COUNTS, assert_non_attacking};

    fn root(size: usize) -> Board {
        Board::with_row_range(size, RowRange::new(0, row_boundary(size))).unwrap()
    }

    #[test]
    fn test_known_counts() {
        for (size, expected) in KNOWN_COUNTS {
            let tally = count_task(&mut root(size));
            let solutions = if size == 1 {
                tally.solutions / 2
            } else {
                tally.solutions
            };
            assert_eq!(solutions, expected, "size {size}");
        }
    }

    #[test]
    fn test_counts_are_even_beyond_one() {
        for size in 2..=10 {
            assert_eq!(count_task(&mut root(size)).solutions % 2, 0, "size {size}");
        }
    }

    #[test]
    fn test_single_queen_counts_twice_before_correction() {
        assert_eq!(count_task(&mut root(1)).solutions, 2);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = root(7);
        let before = board.clone();
        let _ = count_task(&mut board);
        assert_eq!(board.placements(), before.placements());
        assert_eq!(board.free_rows(), before.free_rows());
        assert_eq!(board.free_diag_up(), before.free_diag_up());
        assert_eq!(board.free_diag_down(), before.free_diag_down());
        assert!(board.placement_count() > before.placement_count());
    }

    #[test]
    fn test_four_queens_solution_is_valid() {
        let mut found = Vec::new();
        let mut board = root(4);
        let rows = board.row_range();
        for_each_solution(&mut board, rows, &mut |placements| {
            found.push(placements.to_vec());
        });

        // One representative per mirrored pair.
        assert_eq!(found, vec![vec![1, 3, 0, 2]]);
        for placements in &found {
            let mut sorted = placements.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
            assert_non_attacking(placements);
        }
    }

    #[test]
    fn test_every_visited_board_is_valid() {
        let mut board = root(8);
        let rows = board.row_range();
        let mut visited = 0;
        for_each_solution(&mut board, rows, &mut |placements| {
            assert_eq!(placements.len(), 8);
            assert_non_attacking(placements);
            visited += 1;
        });
        assert_eq!(visited, 46);
    }

    #[test]
    fn test_count_task_on_complete_board() {
        let mut board = Board::new(4).unwrap();
        for row in [2, 0, 3, 1] {
            board.place(row);
        }
        assert_eq!(count_task(&mut board), Tally::new(2, 0, 1));
    }

    #[test]
    fn test_empty_range_finds_nothing() {
        let mut board = Board::new(6).unwrap();
        assert_eq!(count_solutions(&mut board, RowRange::new(3, 3)), 0);
    }

    #[test]
    fn test_ranges_partition_the_count() {
        let size = 9;
        let boundary = row_boundary(size);
        let whole = count_task(&mut root(size)).solutions;
        let split: u64 = (0..boundary)
            .map(|row| {
                let mut board = Board::with_row_range(size, RowRange::new(row, row + 1)).unwrap();
                count_task(&mut board).solutions
            })
            .sum();
        assert_eq!(split, whole);
    }
}
