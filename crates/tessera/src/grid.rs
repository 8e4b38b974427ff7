//! Heap-allocated 2D array with runtime dimensions.

use std::ops::{Index, IndexMut};

use crate::emplace;
use crate::error::GridError;
use crate::iter::{Cells, CellsMut, Column, ColumnMut, Rows, RowsMut};
use crate::stride::DynStride;

/// `width * height`, or [`GridError::SizeOverflow`].
fn checked_area(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::SizeOverflow { width, height })
}

/// A two-dimensional array over one contiguous, row-major heap buffer.
///
/// Cell `(x, y)` lives at linear offset `y * width + x`. Dimensions are
/// fixed at construction; the buffer holds exactly `width * height`
/// elements and never reallocates.
///
/// Moving a `Grid` transfers buffer ownership and leaves the source
/// statically unusable; [`Clone`] performs a deep, element-wise copy into
/// a fresh allocation. Either dimension may be zero, giving an empty grid
/// whose traversals all yield nothing.
///
/// # Examples
///
/// ```
/// use tessera::Grid;
///
/// let mut grid: Grid<i32> = Grid::new(3, 2);
/// grid[(0, 1)] = 4;
/// *grid.cell_mut(2, 0) = 3;
///
/// assert_eq!(grid.row(0), &[0, 0, 3]);
/// let column: Vec<i32> = grid.column_iter(0).copied().collect();
/// assert_eq!(column, vec![0, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Box<[T]>,
}

impl<T: Default> Grid<T> {
    /// Create a grid with every cell default-constructed.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. [`Grid::try_new`] is
    /// the non-panicking form.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Grid::new`].
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = checked_area(width, height)?;
        let cells = (0..len).map(|_| T::default()).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell clone-constructed from `value`.
    ///
    /// Unlike [`Grid::new`], this puts no `Default` bound on `T`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        let len = match checked_area(width, height) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        Self {
            width,
            height,
            cells: vec![value; len].into_boxed_slice(),
        }
    }

    /// Overwrite every cell with a clone of `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Create a grid by invoking `f` with each cell's `(x, y)`
    /// coordinates, in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = match checked_area(width, height) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        let cells = (0..len).map(|i| f(i % width, i / width)).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Adopt an existing row-major buffer as a `width * height` grid.
    ///
    /// Returns [`GridError::SizeMismatch`] unless
    /// `cells.len() == width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = checked_area(width, height)?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Shared reference to cell `(x, y)`; equivalent to `&grid[(x, y)]`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. [`Grid::get`] is the
    /// non-panicking form.
    pub fn cell(&self, x: usize, y: usize) -> &T {
        match self.get(x, y) {
            Some(cell) => cell,
            None => panic!(
                "cell ({x}, {y}) out of bounds for {} x {} grid",
                self.width, self.height
            ),
        }
    }

    /// Mutable reference to cell `(x, y)`; equivalent to
    /// `&mut grid[(x, y)]`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. [`Grid::get_mut`] is the
    /// non-panicking form.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.get_mut(x, y) {
            Some(cell) => cell,
            None => panic!("cell ({x}, {y}) out of bounds for {width} x {height} grid"),
        }
    }

    /// Shared reference to cell `(x, y)`, or `None` if out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Mutable reference to cell `(x, y)`, or `None` if out of range.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width && y < self.height {
            Some(&mut self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// The whole buffer as one row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// The whole buffer as one mutable row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume the grid, returning its buffer in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.cells.into_vec()
    }

    /// Cursor over every cell in row-major order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells::new(&self.cells)
    }

    /// Mutable cursor over every cell in row-major order.
    pub fn iter_mut(&mut self) -> CellsMut<'_, T> {
        CellsMut::new(&mut self.cells)
    }

    /// Row `y` as one contiguous slice of `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Row `y` as one contiguous mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        &mut self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Cursor over row `y` — the linear cursor over a contiguous run of
    /// `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_iter(&self, y: usize) -> Cells<'_, T> {
        Cells::new(self.row(y))
    }

    /// Mutable cursor over row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_iter_mut(&mut self, y: usize) -> CellsMut<'_, T> {
        CellsMut::new(self.row_mut(y))
    }

    /// Cursor over all rows, top to bottom, each as one contiguous slice.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(&self.cells, self.width)
    }

    /// Mutable cursor over all rows.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        RowsMut::new(&mut self.cells, self.width)
    }

    /// Cursor down column `x`, stepping by this grid's width.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column_iter(&self, x: usize) -> Column<'_, T, DynStride> {
        assert!(x < self.width, "column {x} out of bounds for width {}", self.width);
        Column::new(self.cells.get(x..).unwrap_or(&[]), DynStride(self.width))
    }

    /// Mutable cursor down column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    pub fn column_iter_mut(&mut self, x: usize) -> ColumnMut<'_, T, DynStride> {
        assert!(x < self.width, "column {x} out of bounds for width {}", self.width);
        let stride = DynStride(self.width);
        ColumnMut::new(self.cells.get_mut(x..).unwrap_or(&mut []), stride)
    }

    /// Reconstruct cell `(x, y)` in place with `value`, returning the
    /// cell.
    ///
    /// The resident element is dropped first when `T` has drop glue; for
    /// trivially droppable types the old bits are overwritten directly.
    /// The strategy is selected at compile time per element type.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn emplace(&mut self, x: usize, y: usize, value: T) -> &mut T {
        emplace::replace(self.cell_mut(x, y), value)
    }

    /// Like [`Grid::emplace`], with the value produced by `f`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn emplace_with(&mut self, x: usize, y: usize, f: impl FnOnce() -> T) -> &mut T {
        emplace::replace(self.cell_mut(x, y), f())
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// `grid[(x, y)]` — the operator spelling of [`Grid::cell`].
    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.cell(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    /// `grid[(x, y)] = value` — the operator spelling of
    /// [`Grid::cell_mut`].
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        self.cell_mut(x, y)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Cells<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = CellsMut<'a, T>;

    fn into_iter(self) -> CellsMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
