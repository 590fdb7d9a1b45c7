//! Flat, serializable view of a board.
//!
//! A [`BoardDescriptor`] is what crosses a process boundary when a unit of
//! work is handed to a remote worker. Its layout is independent of how
//! [`Board`] stores its state: a fixed list of plain fields, in this order:
//!
//! 1. `size`
//! 2. `start`, `end` (the row range to explore next)
//! 3. `placements` (one row per filled column)
//! 4. `column_freedom`, `diag_up_freedom`, `diag_down_freedom`
//!
//! Rebuilding a board from a descriptor replays the placements and checks
//! that every transported array agrees with them, so a corrupted payload is
//! rejected instead of silently searched.

use serde::{Deserialize, Serialize};

use crate::{Board, BoardError, DescriptorError, RowRange};

/// Serializable description of a board and the rows it should explore.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, BoardDescriptor, RowRange};
///
/// let mut board = Board::new(6)?;
/// board.place(1);
/// board.set_row_range(RowRange::new(2, 5));
///
/// let descriptor = BoardDescriptor::from(&board);
/// assert_eq!(descriptor.placements, vec![1]);
///
/// let rebuilt = Board::try_from(descriptor)?;
/// assert_eq!(rebuilt.placements(), board.placements());
/// assert_eq!(rebuilt.row_range(), board.row_range());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescriptor {
    /// Board dimension.
    pub size: usize,
    /// First row to explore in the next column.
    pub start: usize,
    /// One past the last row to explore in the next column.
    pub end: usize,
    /// Row of the queen in each filled column.
    pub placements: Vec<usize>,
    /// Free flag of every row.
    pub column_freedom: Vec<bool>,
    /// Free flag of every rising diagonal.
    pub diag_up_freedom: Vec<bool>,
    /// Free flag of every falling diagonal.
    pub diag_down_freedom: Vec<bool>,
}

impl From<&Board> for BoardDescriptor {
    fn from(board: &Board) -> Self {
        let range = board.row_range();
        Self {
            size: board.size(),
            start: range.start(),
            end: range.end(),
            placements: board.placements().to_vec(),
            column_freedom: board.free_rows().to_vec(),
            diag_up_freedom: board.free_diag_up().to_vec(),
            diag_down_freedom: board.free_diag_down().to_vec(),
        }
    }
}

impl TryFrom<BoardDescriptor> for Board {
    type Error = DescriptorError;

    /// Rebuilds a board by replaying the described placements.
    ///
    /// The diagnostic placement counter is not transported; the rebuilt board
    /// starts counting from zero.
    fn try_from(descriptor: BoardDescriptor) -> Result<Self, Self::Error> {
        let BoardDescriptor {
            size,
            start,
            end,
            placements,
            column_freedom,
            diag_up_freedom,
            diag_down_freedom,
        } = descriptor;

        if start > end || end > size {
            return Err(DescriptorError::InvalidRange { start, end, size });
        }
        if placements.len() > size {
            return Err(DescriptorError::TooManyPlacements {
                len: placements.len(),
                size,
            });
        }

        // Lengths are checked before anything is allocated for `size`.
        let diagonals = size
            .checked_mul(2)
            .ok_or(BoardError::AllocationFailure { size })?
            .saturating_sub(1);
        let arrays = [
            ("column_freedom", &column_freedom, size),
            ("diag_up_freedom", &diag_up_freedom, diagonals),
            ("diag_down_freedom", &diag_down_freedom, diagonals),
        ];
        for (array, flags, expected) in arrays {
            if flags.len() != expected {
                return Err(DescriptorError::InvalidFreedomLength {
                    array,
                    len: flags.len(),
                    expected,
                });
            }
        }

        let mut board = Board::new(size)?;

        for (column, &row) in placements.iter().enumerate() {
            if row >= size {
                return Err(DescriptorError::RowOutOfBounds { column, row, size });
            }
            if !board.is_free(row) {
                return Err(DescriptorError::Attacked { column, row });
            }
            board.place(row);
        }

        if board.free_rows() != column_freedom.as_slice() {
            return Err(DescriptorError::FreedomMismatch {
                array: "column_freedom",
            });
        }
        if board.free_diag_up() != diag_up_freedom.as_slice() {
            return Err(DescriptorError::FreedomMismatch {
                array: "diag_up_freedom",
            });
        }
        if board.free_diag_down() != diag_down_freedom.as_slice() {
            return Err(DescriptorError::FreedomMismatch {
                array: "diag_down_freedom",
            });
        }

        board.set_row_range(RowRange::new(start, end));
        board.reset_placement_count();
        Ok(board)
    }
}
