/// Errors that can occur while creating a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The requested board has no rows.
    #[display("board size must be at least 1, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// The board's tracking arrays could not be allocated.
    #[display("failed to allocate a board of size {size}")]
    AllocationFailure {
        /// The size whose arrays could not be allocated.
        size: usize,
    },
}

/// Errors that can occur when rebuilding a board from a
/// [`BoardDescriptor`](crate::BoardDescriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DescriptorError {
    /// The described board itself is invalid.
    #[display("invalid board: {_0}")]
    Board(#[error(source)] BoardError),
    /// The row range does not fit inside the board.
    #[display("row range [{start}, {end}) does not fit a board of size {size}")]
    InvalidRange {
        /// First row of the range.
        start: usize,
        /// One past the last row of the range.
        end: usize,
        /// Board size.
        size: usize,
    },
    /// More queens are placed than the board has columns.
    #[display("{len} placements on a board of size {size}")]
    TooManyPlacements {
        /// Number of placements in the descriptor.
        len: usize,
        /// Board size.
        size: usize,
    },
    /// A freedom array has the wrong length.
    #[display("{array} has length {len}, expected {expected}")]
    InvalidFreedomLength {
        /// Name of the offending array.
        array: &'static str,
        /// Actual length.
        len: usize,
        /// Expected length.
        expected: usize,
    },
    /// A placement names a row outside the board.
    #[display("queen in column {column} is on row {row}, outside a board of size {size}")]
    RowOutOfBounds {
        /// Column of the offending queen.
        column: usize,
        /// Row of the offending queen.
        row: usize,
        /// Board size.
        size: usize,
    },
    /// A placement is attacked by an earlier queen.
    #[display("queen in column {column} on row {row} is attacked")]
    Attacked {
        /// Column of the offending queen.
        column: usize,
        /// Row of the offending queen.
        row: usize,
    },
    /// A freedom array disagrees with the placements.
    #[display("{array} does not match the placed queens")]
    FreedomMismatch {
        /// Name of the offending array.
        array: &'static str,
    },
}

impl From<BoardError> for DescriptorError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
