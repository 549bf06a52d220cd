//! Schematic scanning.

#[cfg(test)]
mod tests;

use core::fmt;

use arrayvec::ArrayVec;
use bstr::BStr;
use thiserror::Error;

use crate::grid::slice::{Rows, SliceGrid, SliceGridMut};
use crate::grid::GridExt;
use crate::input::{IStr, IStrError, NL};

/// The marker for a gear candidate.
pub const GEAR: u8 = b'*';
/// The placeholder written over consumed digits.
pub const EMPTY: u8 = b'.';

/// Errors raised when building a schematic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchematicError {
    #[error("schematic is empty")]
    Empty,
    #[error("line {line} has {len} columns, expected {columns}")]
    Ragged {
        line: usize,
        len: usize,
        columns: usize,
    },
    #[error(transparent)]
    Input(#[from] IStrError),
}

/// A parsed engine schematic.
///
/// The schematic owns its cells, since numbers are blanked out of the grid as
/// they are consumed during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    cells: Vec<u8>,
    columns: usize,
}

impl Schematic {
    /// Parse a schematic out of the given input.
    ///
    /// Every line must have the same length and the schematic must hold at
    /// least one cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let input = IStr::new(b"467..114..\n...*......\n..35..633.\n", 0);
    /// let schematic = Schematic::from_input(input).unwrap();
    ///
    /// assert_eq!(schematic.rows_len(), 3);
    /// assert_eq!(schematic.columns_len(), 10);
    /// ```
    pub fn from_input(mut input: IStr) -> Result<Self, SchematicError> {
        let mut cells = Vec::with_capacity(input.len().saturating_add(1));
        let mut columns = 0;
        let mut rows = 0;

        while let Some(line) = input.try_line::<&[u8]>()? {
            if rows == 0 {
                columns = line.len();
            }

            if line.len() != columns {
                return Err(SchematicError::Ragged {
                    line: rows + 1,
                    len: line.len(),
                    columns,
                });
            }

            cells.extend_from_slice(line);
            cells.push(NL);
            rows += 1;
        }

        if rows == 0 || columns == 0 {
            return Err(SchematicError::Empty);
        }

        log::debug!("schematic with {rows} rows and {columns} columns");

        Ok(Self { cells, columns })
    }

    /// Get the number of rows in the schematic.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.grid().rows_len()
    }

    /// Get the number of columns in the schematic.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Iterate over the rows of the schematic.
    #[inline]
    pub fn rows(&self) -> Rows<'_, u8> {
        self.grid().rows()
    }

    /// Sum the ratios of all gears in the schematic.
    ///
    /// A gear is a `*` cell with exactly two adjacent numbers, where adjacent
    /// includes diagonals, and its ratio is the product of those numbers.
    /// Cells are scanned in row-major order and every number is blanked out
    /// of the grid as it is found, so a number shared between several `*`
    /// cells only ever counts towards the first one scanned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let input = IStr::new(b"467..114..\n...*......\n..35..633.\n", 0);
    /// let mut schematic = Schematic::from_input(input).unwrap();
    ///
    /// assert_eq!(schematic.sum_gear_ratios(), 16345);
    /// ```
    pub fn sum_gear_ratios(&mut self) -> u64 {
        let mut grid = self.grid_mut();
        let mut total = 0;

        for row in 0..grid.rows_len() {
            for column in 0..grid.columns_len() {
                total += gear_ratio(&mut grid, row, column);
            }
        }

        total
    }

    #[inline]
    fn grid(&self) -> SliceGrid<'_, u8> {
        self.cells.as_grid_with_stride(self.columns, 1)
    }

    #[inline]
    fn grid_mut(&mut self) -> SliceGridMut<'_, u8> {
        self.cells.as_grid_mut_with_stride(self.columns, 1)
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", BStr::new(row))?;
        }

        Ok(())
    }
}

/// Compute the ratio of the gear at the given position.
///
/// Returns `0` unless the cell holds a `*` with exactly two adjacent
/// numbers. Adjacent numbers are consumed out of the grid even when the cell
/// turns out not to be a gear. A number whose value is zero extracts to `0`
/// and cannot be told apart from an empty cell, so it never counts towards a
/// gear.
fn gear_ratio(grid: &mut SliceGridMut<'_, u8>, row: usize, column: usize) -> u64 {
    if grid.try_get(row, column).copied() != Some(GEAR) {
        return 0;
    }

    let rows = row.saturating_sub(1)..row.saturating_add(2).min(grid.rows_len());
    let columns = column.saturating_sub(1)..column.saturating_add(2).min(grid.columns_len());

    // Each row of the window holds at most two separate runs of digits.
    let mut numbers = ArrayVec::<u64, 6>::new();

    for r in rows {
        let Some(cells) = grid.row_mut(r) else {
            continue;
        };

        for c in columns.clone() {
            let value = extract_number(cells, c);

            if value != 0 {
                numbers.push(value);
            }
        }
    }

    match numbers.as_slice() {
        [a, b] => a * b,
        _ => 0,
    }
}

/// Extract the number covering the given column, blanking out its digits.
///
/// The run of digits is expanded both to the left and to the right of the
/// given position, so extraction yields the same value no matter which of
/// its digits it starts from. Returns `0` and leaves the row untouched if
/// the position does not hold a digit.
fn extract_number(cells: &mut [u8], column: usize) -> u64 {
    if !cells.get(column).map_or(false, u8::is_ascii_digit) {
        return 0;
    }

    let mut start = column;

    while start > 0 && cells.get(start - 1).map_or(false, u8::is_ascii_digit) {
        start -= 1;
    }

    let mut value = 0u64;
    let mut at = start;

    while let Some(cell) = cells.get_mut(at) {
        if !cell.is_ascii_digit() {
            break;
        }

        value = value * 10 + u64::from(*cell - b'0');
        *cell = EMPTY;
        at += 1;
    }

    value
}
