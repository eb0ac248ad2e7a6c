//! A fixed-shape, row-major two dimensional view over a [`DynamicArray`].

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};
use std::slice::{Chunks, ChunksMut};

use super::DynamicArray;
use crate::collections::error::{CapacityOverflow, IndexOutOfBounds, RaggedRows};
use crate::util::result::ResultExtension;

/// A grid of `rows × cols` values stored contiguously, one row after another.
///
/// The shape is fixed at construction. Element `(r, c)` lives at index `r * cols + c` of the
/// underlying [`DynamicArray`].
///
/// # Examples
/// ```
/// # use collections_core::collections::contiguous::Array2D;
/// let mut grid = Array2D::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
/// assert_eq!(grid[(1, 0)], 4);
/// grid.set(0, 2, 30).unwrap();
/// assert_eq!(grid.row(0).unwrap(), &[1, 2, 30]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    pub(crate) data: DynamicArray<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T> Array2D<T> {
    /// Creates an Array2D from a sequence of rows, which must all have the same length.
    pub fn from_rows<R, I>(rows: R) -> Result<Array2D<T>, RaggedRows>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut data = DynamicArray::new();
        let mut row_count = 0;
        let mut cols = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = data.len();
            data.extend(values);
            let found = data.len() - before;

            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(RaggedRows { row, expected: cols, found });
            }
            row_count += 1;
        }

        Ok(Array2D { data, rows: row_count, cols })
    }

    /// Creates an Array2D of the given shape, where each value is produced by calling `f` with
    /// its row and column.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Array2D<T> {
        let len = rows.checked_mul(cols).ok_or(CapacityOverflow).throw();
        Array2D {
            data: DynamicArray::from_fn(len, |i| f(i / cols, i % cols)),
            rows,
            cols,
        }
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns, the length of every row.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the value at (`row`, `col`).
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T, IndexOutOfBounds> {
        let index = self.flat_index(row, col)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the value at (`row`, `col`).
    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexOutOfBounds> {
        let index = self.flat_index(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Replaces the value at (`row`, `col`), returning the old value.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let index = self.flat_index(row, col)?;
        self.data.set(index, value)
    }

    /// Returns the values of `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T], IndexOutOfBounds> {
        self.check_row(row)?;
        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns the values of `row` as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T], IndexOutOfBounds> {
        self.check_row(row)?;
        let cols = self.cols;
        Ok(&mut self.data[row * cols..(row + 1) * cols])
    }

    /// Returns an iterator over every row, top to bottom.
    pub fn iter_rows(&self) -> Chunks<'_, T> {
        // chunks panics on a size of 0, rows with no columns yield nothing either way.
        self.data.chunks(self.cols.max(1))
    }

    /// Returns an iterator over every row as a mutable slice.
    pub fn iter_rows_mut(&mut self) -> ChunksMut<'_, T> {
        let cols = self.cols.max(1);
        self.data.chunks_mut(cols)
    }

    /// Consumes the grid, returning the row-major values.
    pub fn into_inner(self) -> DynamicArray<T> {
        self.data
    }

    const fn check_row(&self, row: usize) -> Result<(), IndexOutOfBounds> {
        if row < self.rows {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index: row, len: self.rows })
        }
    }

    const fn flat_index(&self, row: usize, col: usize) -> Result<usize, IndexOutOfBounds> {
        if let Err(err) = self.check_row(row) {
            return Err(err);
        }
        if col >= self.cols {
            return Err(IndexOutOfBounds { index: col, len: self.cols });
        }
        Ok(row * self.cols + col)
    }
}

impl<T: Clone> Array2D<T> {
    /// Creates an Array2D of the given shape, with every value a clone of `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Array2D<T> {
        Array2D::from_fn(rows, cols, |_, _| value.clone())
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.try_get(row, col).throw()
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.try_get_mut(row, col).throw()
    }
}

impl<T: Debug> Debug for Array2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array2D")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Debug> Display for Array2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_indexing() {
        let grid = Array2D::from_fn(3, 4, |r, c| r * 10 + c);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid[(2, 3)], 23);
        assert_eq!(grid.row(1), Ok(&[10, 11, 12, 13][..]));
        assert_eq!(
            grid.try_get(3, 0),
            Err(IndexOutOfBounds { index: 3, len: 3 }),
            "Row indices past the last row should be rejected."
        );
        assert_eq!(
            grid.try_get(0, 4),
            Err(IndexOutOfBounds { index: 4, len: 4 }),
            "Column indices shouldn't spill into the next row."
        );
    }

    #[test]
    fn test_ragged_rows() {
        let result = Array2D::from_rows([vec![1, 2], vec![3], vec![4, 5]]);
        assert_eq!(result, Err(RaggedRows { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn test_mutation_and_display() {
        let mut grid = Array2D::filled(2, 2, 'a');
        grid[(0, 1)] = 'b';
        assert_eq!(grid.set(1, 0, 'c'), Ok('a'));
        for row in grid.iter_rows_mut() {
            row[0] = row[0].to_ascii_uppercase();
        }
        assert_eq!(grid.to_string(), "[['A', 'b'], ['C', 'a']]");
        assert_eq!(grid.iter_rows().count(), 2);
    }
}
