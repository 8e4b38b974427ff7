//! Cross-cutting traversal contract: the same row-major layout laws must
//! hold for both array variants and every cursor family.

use tessera::{Cells, Column, FixedGrid, Grid};

/// The worked 3x2 example:
///   1 2 3
///   4 5 6
fn populated() -> Grid<i32> {
    let mut grid: Grid<i32> = Grid::new(3, 2);
    grid[(0, 0)] = 1;
    grid[(1, 0)] = 2;
    grid[(2, 0)] = 3;
    grid[(0, 1)] = 4;
    grid[(1, 1)] = 5;
    grid[(2, 1)] = 6;
    grid
}

#[test]
fn dynamic_grid_worked_example() {
    let grid = populated();

    let row0: Vec<i32> = grid.row_iter(0).copied().collect();
    let row1: Vec<i32> = grid.row_iter(1).copied().collect();
    let col1: Vec<i32> = grid.column_iter(1).copied().collect();
    let all: Vec<i32> = grid.iter().copied().collect();

    assert_eq!(row0, vec![1, 2, 3]);
    assert_eq!(row1, vec![4, 5, 6]);
    assert_eq!(col1, vec![2, 5]);
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn fixed_grid_worked_example() {
    let mut grid: FixedGrid<i32, 2, 2> = FixedGrid::new();
    assert!(grid.iter().all(|&cell| cell == 0));

    grid.emplace(1, 1, 9);

    assert_eq!(grid[(1, 1)], 9);
    assert_eq!(grid[(0, 0)], 0);
    assert_eq!(grid[(1, 0)], 0);
    assert_eq!(grid[(0, 1)], 0);
}

#[test]
fn both_variants_agree_on_layout() {
    let fixed: FixedGrid<u16, 4, 3> = {
        let mut grid = FixedGrid::new();
        for (offset, cell) in grid.iter_mut().enumerate() {
            *cell = offset as u16;
        }
        grid
    };
    let dynamic = Grid::from_fn(4, 3, |x, y| (y * 4 + x) as u16);

    assert_eq!(fixed.as_slice(), dynamic.as_slice());
    for y in 0..3 {
        assert_eq!(fixed.row(y), dynamic.row(y));
    }
    for x in 0..4 {
        let fixed_col: Vec<u16> = fixed.column_iter(x).copied().collect();
        let dynamic_col: Vec<u16> = dynamic.column_iter(x).copied().collect();
        assert_eq!(fixed_col, dynamic_col);
    }
}

#[test]
fn row_iter_equals_linear_cursor_over_the_row_slice() {
    let grid = populated();
    for y in 0..grid.height() {
        let via_row_iter: Vec<i32> = grid.row_iter(y).copied().collect();
        assert_eq!(via_row_iter, grid.row(y));
        assert_eq!(grid.row_iter(y).len(), grid.width());
    }
}

#[test]
fn column_cursor_lengths_are_exact() {
    let grid = Grid::from_fn(5, 7, |x, y| (x, y));
    for x in 0..5 {
        let mut column = grid.column_iter(x);
        assert_eq!(column.len(), 7);
        column.next();
        column.next_back();
        assert_eq!(column.len(), 5);
    }
}

#[test]
fn mutable_cursors_downgrade_to_shared() {
    let mut grid = populated();

    let linear: Cells<'_, i32> = grid.iter_mut().into();
    assert_eq!(linear.as_slice(), &[1, 2, 3, 4, 5, 6]);

    let column: Column<'_, i32, _> = grid.column_iter_mut(0).into();
    let values: Vec<i32> = column.copied().collect();
    assert_eq!(values, vec![1, 4]);

    // The reverse direction (shared to mutable) has no conversion; see
    // the `iter` module docs.
}

#[test]
fn conversion_preserves_cursor_position() {
    let mut grid = populated();

    let mut cursor = grid.iter_mut();
    cursor.next();
    let downgraded: Cells<'_, i32> = cursor.into();

    assert_eq!(downgraded.len(), 5);
    assert_eq!(downgraded.as_slice(), &[2, 3, 4, 5, 6]);
}

#[test]
fn cursor_position_equality() {
    let grid = populated();

    let mut ahead = grid.iter();
    let mut behind = grid.iter();
    assert_eq!(ahead, behind);

    ahead.next();
    assert_ne!(ahead, behind);
    behind.next();
    assert_eq!(ahead, behind);
}

#[test]
fn empty_grids_traverse_as_nothing() {
    let none: Grid<String> = Grid::new(0, 0);
    assert_eq!(none.iter().count(), 0);
    assert_eq!(none.rows().count(), 0);

    let wide: Grid<String> = Grid::new(4, 0);
    assert_eq!(wide.column_iter(3).count(), 0);
    assert_eq!(wide.rows().count(), 0);
}
