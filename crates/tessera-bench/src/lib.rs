//! Benchmark profiles and utilities for the tessera 2D array library.
//!
//! Provides pre-built grids for the bench targets:
//!
//! - [`counting_grid`]: a `Grid<u32>` whose cell `(x, y)` holds its
//!   linear offset `y * width + x`
//! - [`counting_board`]: the 64x64 [`FixedGrid`] equivalent

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera::{FixedGrid, Grid};

/// Side length of the fixed-size benchmark board.
pub const BOARD_DIM: usize = 64;

/// Build a grid whose cell `(x, y)` holds its linear offset.
pub fn counting_grid(width: usize, height: usize) -> Grid<u32> {
    Grid::from_fn(width, height, |x, y| (y * width + x) as u32)
}

/// Build the fixed-size counterpart of [`counting_grid`] at
/// [`BOARD_DIM`]² cells.
pub fn counting_board() -> FixedGrid<u32, BOARD_DIM, BOARD_DIM> {
    let mut board = FixedGrid::new();
    for (offset, cell) in board.iter_mut().enumerate() {
        *cell = offset as u32;
    }
    board
}
