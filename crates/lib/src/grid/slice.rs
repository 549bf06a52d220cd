//! Grids over slices.

/// An immutable grid over a slice.
///
/// Constructed through [GridExt::as_grid][super::GridExt::as_grid] or
/// [GridExt::as_grid_with_stride][super::GridExt::as_grid_with_stride].
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    columns: usize,
    stride: usize,
}

impl<'a, T> SliceGrid<'a, T> {
    #[inline]
    pub(super) fn new(data: &'a [T], columns: usize, stride: usize) -> Self {
        Self {
            data,
            columns,
            stride: columns.saturating_add(stride),
        }
    }

    /// Get number of rows in the grid.
    ///
    /// A trailing partial row is not counted.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.data.len().checked_div(self.stride).unwrap_or_default()
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows_len() {
            return None;
        }

        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.columns)?;
        self.data.get(start..end)
    }

    /// Iterate over rows in the grid.
    #[inline]
    pub fn rows(&self) -> Rows<'a, T> {
        Rows { grid: *self, row: 0 }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(*grid.get(1, 1), 6);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> &'a T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(1, 1), Some(&6));
    /// assert_eq!(grid.try_get(2, 0), Some(&9));
    /// assert_eq!(grid.try_get(3, 0), None);
    /// ```
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&'a T> {
        self.row(row)?.get(column)
    }
}

impl<T> Clone for SliceGrid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceGrid<'_, T> {}

/// A mutable grid over a slice.
///
/// Constructed through [GridExt::as_grid_mut][super::GridExt::as_grid_mut] or
/// [GridExt::as_grid_mut_with_stride][super::GridExt::as_grid_mut_with_stride].
pub struct SliceGridMut<'a, T> {
    data: &'a mut [T],
    columns: usize,
    stride: usize,
}

impl<'a, T> SliceGridMut<'a, T> {
    #[inline]
    pub(super) fn new(data: &'a mut [T], columns: usize, stride: usize) -> Self {
        Self {
            data,
            columns,
            stride: columns.saturating_add(stride),
        }
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.data.len().checked_div(self.stride).unwrap_or_default()
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the specified row in the grid mutably.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows_len() {
            return None;
        }

        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.columns)?;
        self.data.get_mut(start..end)
    }

    /// Get the element at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows_len() {
            return None;
        }

        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.columns)?;
        self.data.get(start..end)?.get(column)
    }
}

/// An iterator over the rows of a [SliceGrid].
pub struct Rows<'a, T> {
    grid: SliceGrid<'a, T>,
    row: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.row(self.row)?;
        self.row = self.row.checked_add(1)?;
        Some(row)
    }
}
