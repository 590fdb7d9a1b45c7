//! Core data structures for N-Queens solution counting.
//!
//! This crate provides the board representation shared by every search
//! strategy, together with the pieces needed to hand a board across a
//! concurrency or process boundary.
//!
//! # Overview
//!
//! - [`board`]: [`Board`], the incremental attack-state encoding with LIFO
//!   [`place`](Board::place) / [`remove`](Board::remove) operations.
//! - [`row_range`]: [`RowRange`], the half-open slice of rows a search level
//!   explores, and [`row_boundary`], the symmetry-reduced first-column range.
//! - [`descriptor`]: [`BoardDescriptor`], a flat serializable view of a board
//!   used as the wire contract for remote workers.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{Board, RowRange};
//!
//! let mut board = Board::new(4)?;
//! assert!(board.is_free(1));
//!
//! board.place(1);
//! assert_eq!(board.placements(), &[1]);
//! assert!(!board.is_free(0)); // falling diagonal of (0, 1)
//! assert!(board.is_free(3));
//!
//! board.remove(1);
//! assert_eq!(board.column(), 0);
//! assert_eq!(board.row_range(), RowRange::full(4));
//! # Ok::<(), nqueens_core::BoardError>(())
//! ```

pub mod board;
pub mod descriptor;
mod error;
pub mod row_range;

pub use self::{
    board::Board,
    descriptor::BoardDescriptor,
    error::*,
    row_range::{RowRange, row_boundary},
};
