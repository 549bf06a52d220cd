pub mod slice;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;
use self::slice::{SliceGrid, SliceGridMut};

pub trait GridExt<T>: Sealed {
    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert_eq!(grid.rows_len(), 3);
    /// assert!(grid.rows().flatten().copied().eq(1..=12));
    /// ```
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert type into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements between each row.
    ///
    /// This allows for treating data which is laid out with a gap between
    /// rows, such as a byte buffer where each line is terminated by a
    /// newline, as a grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = b"ab\ncd\n";
    /// let grid = data.as_grid_with_stride(2, 1);
    ///
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.try_get(1, 0), Some(&b'c'));
    /// assert_eq!(grid.try_get(1, 2), None);
    /// ```
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T>;

    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_mut_with_stride].
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut values = [1, 2, 3, 4];
    /// let mut grid = values.as_grid_mut(2);
    ///
    /// if let Some(row) = grid.row_mut(1) {
    ///     row[0] = 9;
    /// }
    ///
    /// assert_eq!(values, [1, 2, 9, 4]);
    /// ```
    #[inline]
    fn as_grid_mut(&mut self, columns: usize) -> SliceGridMut<'_, T> {
        self.as_grid_mut_with_stride(columns, 0)
    }

    /// Convert type into a mutable grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements between each row.
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> SliceGridMut<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T> {
        SliceGrid::new(self, columns, stride)
    }

    #[inline]
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> SliceGridMut<'_, T> {
        SliceGridMut::new(self, columns, stride)
    }
}
