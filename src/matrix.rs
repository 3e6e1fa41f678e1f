use crate::day::GRID_DAYS;
use crate::window::HourWindow;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense 7 x H paint grid. Rows are Monday-first grid days, columns are the
/// hours of an `HourWindow`. The grid does not remember which window it was
/// built with; callers convert back with the same one.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct AvailabilityMatrix {
    cells: Vec<Vec<bool>>,
}

impl AvailabilityMatrix {
    /// An all-`false` grid with one column per hour of `window`
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::matrix::AvailabilityMatrix;
    /// use weekgrid_libs::window::HourWindow;
    ///
    /// let matrix = AvailabilityMatrix::empty(HourWindow::default());
    /// assert_eq!(matrix.columns(), 14);
    /// assert!(matrix.is_empty());
    /// ```
    pub fn empty(window: HourWindow) -> AvailabilityMatrix {
        AvailabilityMatrix::with_columns(window.columns())
    }

    pub fn with_columns(columns: usize) -> AvailabilityMatrix {
        AvailabilityMatrix {
            cells: vec![vec![false; columns]; GRID_DAYS],
        }
    }

    /// Builds a grid from raw rows, as received from a UI.
    /// Missing rows are added empty, rows past the seventh are dropped.
    /// Rows are not required to share a width.
    pub fn from_rows(mut rows: Vec<Vec<bool>>) -> AvailabilityMatrix {
        let columns = rows.first().map(Vec::len).unwrap_or_default();
        rows.truncate(GRID_DAYS);
        rows.resize(GRID_DAYS, vec![false; columns]);
        AvailabilityMatrix { cells: rows }
    }

    /// Width of the first row
    pub fn columns(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or_default()
    }

    pub fn row(&self, grid_day: usize) -> Option<&[bool]> {
        self.cells.get(grid_day).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.cells
    }

    pub fn get(&self, grid_day: usize, column: usize) -> Option<bool> {
        self.cells.get(grid_day)?.get(column).copied()
    }

    /// Sets one cell. Returns whether the cell changed; out-of-range
    /// coordinates are ignored.
    pub fn set(&mut self, grid_day: usize, column: usize, value: bool) -> bool {
        match self.cells.get_mut(grid_day).and_then(|row| row.get_mut(column)) {
            Some(cell) if *cell != value => {
                *cell = value;
                true
            }
            _ => false,
        }
    }

    /// Flips one cell and returns its new value
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::matrix::AvailabilityMatrix;
    /// use weekgrid_libs::window::HourWindow;
    ///
    /// let mut matrix = AvailabilityMatrix::empty(HourWindow::default());
    /// assert_eq!(matrix.toggle(2, 5), Some(true));
    /// assert_eq!(matrix.toggle(2, 5), Some(false));
    /// assert_eq!(matrix.toggle(7, 0), None);
    /// ```
    pub fn toggle(&mut self, grid_day: usize, column: usize) -> Option<bool> {
        let cell = self.cells.get_mut(grid_day)?.get_mut(column)?;
        *cell = !*cell;
        Some(*cell)
    }

    /// Sets every cell in the rectangle spanned by two `(grid_day, column)`
    /// corners, inclusive, as a drag gesture from `from` to `to` would.
    /// The corners may be given in any order and are clipped to the grid.
    /// Returns the number of cells changed.
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::matrix::AvailabilityMatrix;
    /// use weekgrid_libs::window::HourWindow;
    ///
    /// let mut matrix = AvailabilityMatrix::empty(HourWindow::default());
    ///
    /// // Tuesday through Thursday, 09:00 - 12:00
    /// assert_eq!(matrix.paint((3, 5), (1, 3), true), 9);
    /// assert_eq!(matrix.available_slots(), 9);
    ///
    /// // Painting over the same area again changes nothing
    /// assert_eq!(matrix.paint((1, 3), (3, 5), true), 0);
    /// ```
    pub fn paint(&mut self, from: (usize, usize), to: (usize, usize), value: bool) -> usize {
        let columns = self.columns();
        if columns == 0 {
            return 0;
        }

        let first_day = from.0.min(to.0);
        let last_day = from.0.max(to.0).min(GRID_DAYS - 1);
        let first_column = from.1.min(to.1);
        let last_column = from.1.max(to.1).min(columns - 1);

        if first_day > last_day || first_column > last_column {
            return 0;
        }

        let mut changed = 0;
        for row in self
            .cells
            .iter_mut()
            .skip(first_day)
            .take(last_day - first_day + 1)
        {
            let end = (last_column + 1).min(row.len());
            if first_column >= end {
                continue;
            }
            for cell in &mut row[first_column..end] {
                if *cell != value {
                    *cell = value;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Marks `[first_column, end_column)` of one row as available.
    /// Bounds are clipped to the row.
    pub(crate) fn fill(&mut self, grid_day: usize, first_column: usize, end_column: usize) {
        if let Some(row) = self.cells.get_mut(grid_day) {
            let end = end_column.min(row.len());
            if first_column < end {
                row[first_column..end].iter_mut().for_each(|cell| *cell = true);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|row| row.iter_mut().for_each(|cell| *cell = false));
    }

    /// Number of available cells
    pub fn available_slots(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| !cell)
    }
}

impl From<Vec<Vec<bool>>> for AvailabilityMatrix {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        AvailabilityMatrix::from_rows(rows)
    }
}

impl From<AvailabilityMatrix> for Vec<Vec<bool>> {
    fn from(matrix: AvailabilityMatrix) -> Self {
        matrix.cells
    }
}

impl fmt::Display for AvailabilityMatrix {
    /// One line per grid day, `#` for available and `.` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for AvailabilityMatrix {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let columns = u.int_in_range(1..=24)?;
        let mut matrix = AvailabilityMatrix::with_columns(columns);
        for row in matrix.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = u.arbitrary()?;
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes() {
        let mut matrix = AvailabilityMatrix::with_columns(4);
        assert!(matrix.set(0, 0, true));
        assert!(!matrix.set(0, 0, true));
        assert!(!matrix.set(0, 4, true));
        assert!(!matrix.set(9, 0, true));
        assert_eq!(matrix.get(0, 0), Some(true));
        assert_eq!(matrix.get(0, 4), None);
    }

    #[test]
    fn paint_is_direction_independent() {
        let mut forward = AvailabilityMatrix::with_columns(14);
        let mut backward = AvailabilityMatrix::with_columns(14);
        let mut crossed = AvailabilityMatrix::with_columns(14);

        forward.paint((1, 2), (4, 8), true);
        backward.paint((4, 8), (1, 2), true);
        crossed.paint((1, 8), (4, 2), true);

        assert_eq!(forward, backward);
        assert_eq!(forward, crossed);
        assert_eq!(forward.available_slots(), 4 * 7);
    }

    #[test]
    fn paint_clips_to_grid() {
        let mut matrix = AvailabilityMatrix::with_columns(3);
        assert_eq!(matrix.paint((5, 1), (100, 100), true), 2 * 2);
        assert_eq!(matrix.get(6, 2), Some(true));
        assert_eq!(matrix.get(4, 2), Some(false));

        assert_eq!(matrix.paint((5, 0), (6, 2), false), 4);
        assert!(matrix.is_empty());
    }

    #[test]
    fn from_rows_normalizes_row_count() {
        let matrix = AvailabilityMatrix::from_rows(vec![vec![true, false]]);
        assert_eq!(matrix.rows().count(), GRID_DAYS);
        assert_eq!(matrix.row(6), Some(&[false, false][..]));

        let matrix = AvailabilityMatrix::from_rows(vec![vec![true]; 9]);
        assert_eq!(matrix.rows().count(), GRID_DAYS);
    }

    #[test]
    fn renders_grid() {
        let mut matrix = AvailabilityMatrix::with_columns(3);
        matrix.fill(0, 1, 3);
        matrix.set(6, 0, true);
        assert_eq!(
            matrix.to_string(),
            ".##\n...\n...\n...\n...\n...\n#.."
        );

        matrix.clear();
        assert!(matrix.is_empty());
    }
}
