//! Contiguous, row-major two-dimensional arrays.
//!
//! Two ownership variants share one access surface:
//!
//! - [`Grid`] — heap-allocated, dimensions chosen at runtime.
//! - [`FixedGrid`] — inline storage, dimensions fixed at compile time.
//!
//! Cell `(x, y)` of either variant lives at linear offset
//! `y * width + x` of a single contiguous buffer. Three cursor families
//! traverse that buffer:
//!
//! | Cursor | Step | Yields |
//! |--------|------|--------|
//! | [`Cells`] / [`CellsMut`] | 1 | every cell in row-major order, or one row |
//! | [`Rows`] / [`RowsMut`] | `width` | each row as one contiguous slice |
//! | [`Column`] / [`ColumnMut`] | `width` (via [`StrideKind`]) | one column, top to bottom |
//!
//! The column cursor is generic over its stride source: [`Grid`] hands it
//! a [`DynStride`] carrying the runtime width, while [`FixedGrid`] uses
//! [`ConstStride`], so the stride folds into constant offset arithmetic.
//!
//! Cells can be rebuilt in place through the `emplace` family, which
//! drops the resident element first exactly when the element type has
//! drop glue — selected per type at compile time.
//!
//! # Quick start
//!
//! ```
//! use tessera::{FixedGrid, Grid};
//!
//! // Runtime dimensions, heap buffer.
//! let mut heat: Grid<f32> = Grid::new(16, 8);
//! *heat.cell_mut(3, 4) = 1.5;
//! assert_eq!(heat[(3, 4)], 1.5);
//!
//! let column: Vec<f32> = heat.column_iter(3).copied().collect();
//! assert_eq!(column.len(), 8);
//! assert_eq!(column[4], 1.5);
//!
//! // Compile-time dimensions, inline buffer.
//! let mut board: FixedGrid<char, 3, 3> = FixedGrid::from_rows([[' '; 3]; 3]);
//! board.emplace(1, 1, 'x');
//! assert_eq!(board[(1, 1)], 'x');
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod emplace;
pub mod error;
pub mod fixed;
pub mod grid;
pub mod iter;
pub mod stride;

pub use error::GridError;
pub use fixed::{FixedColumn, FixedColumnMut, FixedGrid};
pub use grid::Grid;
pub use iter::{Cells, CellsMut, Column, ColumnMut, Rows, RowsMut};
pub use stride::{ConstStride, DynStride, StrideKind};
