//! Conversion between range-based weekly availability and the hour grid.
//!
//! The conversion is lossy but stable: minutes are quantized to whole hours
//! and ranges that touch or overlap come back as one range. Nothing here
//! fails; unreadable ranges are skipped and everything else is clipped to
//! the window.

use crate::data::{DayAvailability, WeeklyAvailability, WeeklyAvailabilityUpdate};
use crate::day::{grid_day_to_storage_key, GRID_DAYS};
use crate::matrix::AvailabilityMatrix;
use crate::time::{ClockTime, TimeRange};
use crate::window::HourWindow;
use itertools::Itertools;
use log::{debug, trace};

/// Paints the ranges of `weekly` onto a fresh grid for `window`.
///
/// # Examples
/// ```
/// use weekgrid_libs::{codec::to_matrix, HourWindow, TimeRange, WeeklyAvailability};
///
/// // Monday is storage key 1, grid row 0
/// let weekly = WeeklyAvailability::new(
///     vec![(1, vec![TimeRange::new("09:00", "11:30")])].into_iter().collect(),
/// );
///
/// let matrix = to_matrix(&weekly, HourWindow::default());
/// let monday: Vec<usize> = matrix
///     .row(0)
///     .unwrap()
///     .iter()
///     .enumerate()
///     .filter_map(|(column, &cell)| if cell { Some(column) } else { None })
///     .collect();
///
/// assert_eq!(monday, vec![3, 4, 5]);
/// assert_eq!(matrix.available_slots(), 3);
/// ```
pub fn to_matrix(weekly: &WeeklyAvailability, window: HourWindow) -> AvailabilityMatrix {
    AvailabilityMatrix::from_days(&weekly.availability, window)
}

/// Reads each grid row back into ranges, one range per run of available
/// cells. A run that reaches the last column ends at the window's
/// `end_hour`. Days without any available cell are left out of the result.
///
/// The grid must have been built with the same `window`.
///
/// # Examples
/// ```
/// use weekgrid_libs::{codec::to_availability, AvailabilityMatrix, HourWindow, TimeRange};
///
/// let window = HourWindow::default();
/// let mut matrix = AvailabilityMatrix::empty(window);
///
/// // Sunday is grid row 6, storage key 0
/// matrix.paint((6, 0), (6, 13), true);
///
/// let availability = to_availability(&matrix, window);
/// assert_eq!(availability.len(), 1);
/// assert_eq!(availability[&0], vec![TimeRange::new("06:00", "20:00")]);
/// ```
pub fn to_availability(matrix: &AvailabilityMatrix, window: HourWindow) -> DayAvailability {
    (0..GRID_DAYS)
        .filter_map(|grid_day| {
            let storage_key = grid_day_to_storage_key(grid_day)?;
            let ranges = row_ranges(matrix.row(grid_day).unwrap_or_default(), window);
            if ranges.is_empty() {
                None
            } else {
                Some((storage_key, ranges))
            }
        })
        .collect()
}

/// The update to persist after an edit gesture. `availability` is only set
/// when the grid differs from what `weekly` already paints, so finishing a
/// gesture that changed nothing produces an empty update.
pub fn update_for(
    weekly: &WeeklyAvailability,
    matrix: &AvailabilityMatrix,
    window: HourWindow,
) -> WeeklyAvailabilityUpdate {
    if &to_matrix(weekly, window) == matrix {
        WeeklyAvailabilityUpdate::default()
    } else {
        WeeklyAvailabilityUpdate {
            availability: Some(to_availability(matrix, window)),
            ..Default::default()
        }
    }
}

fn row_ranges(row: &[bool], window: HourWindow) -> Vec<TimeRange> {
    let mut column = 0;
    let mut ranges = Vec::new();

    for (count, &available) in row.iter().take(window.columns()).dedup_with_count() {
        if available {
            let start = ClockTime::at_hour(window.hour_for(column));
            let end = ClockTime::at_hour(window.hour_for(column + count));
            trace!("run at columns {}..{} -> {}-{}", column, column + count, start, end);
            ranges.push(TimeRange::between(start, end));
        }
        column += count;
    }

    ranges
}

impl AvailabilityMatrix {
    /// Paints `availability` onto a fresh grid for `window`
    pub fn from_days(availability: &DayAvailability, window: HourWindow) -> AvailabilityMatrix {
        let mut matrix = AvailabilityMatrix::empty(window);

        for grid_day in 0..GRID_DAYS {
            let ranges = grid_day_to_storage_key(grid_day)
                .and_then(|key| availability.get(&key))
                .map(Vec::as_slice)
                .unwrap_or_default();

            for range in ranges {
                let (start, end) = match range.occupied_hours() {
                    Ok(hours) => hours,
                    Err(e) => {
                        debug!("skipping range {} on grid day {}: {}", range, grid_day, e);
                        continue;
                    }
                };

                let start = window.clip(start);
                let end = window.clip(end);
                if start >= end {
                    trace!("range {} falls outside {:?}", range, window);
                    continue;
                }

                let first_column = (start - window.start_hour()) as usize;
                let end_column = (end - window.start_hour()) as usize;
                trace!(
                    "painting {} on grid day {} columns {}..{}",
                    range,
                    grid_day,
                    first_column,
                    end_column
                );
                matrix.fill(grid_day, first_column, end_column);
            }
        }

        matrix
    }

    /// See [`to_availability`]
    pub fn to_availability(&self, window: HourWindow) -> DayAvailability {
        to_availability(self, window)
    }
}

impl WeeklyAvailability {
    /// A copy with `availability` read back from `matrix`; every other
    /// field is carried over unchanged.
    pub fn with_matrix(&self, matrix: &AvailabilityMatrix, window: HourWindow) -> Self {
        WeeklyAvailability {
            availability: to_availability(matrix, window),
            ..self.clone()
        }
    }
}
