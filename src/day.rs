//! Two day-of-week conventions meet in this crate:
//!
//! * storage keys, used by `DayAvailability`: `0 = Sunday .. 6 = Saturday`
//! * grid days, used by `AvailabilityMatrix` rows: `0 = Monday .. 6 = Sunday`
//!
//! Every translation between them goes through the two functions below.

/// Number of rows in a weekly grid.
pub const GRID_DAYS: usize = 7;

/// Translates a Monday-first grid row into its Sunday-first storage key.
///
/// # Examples
/// ```
/// use weekgrid_libs::day::grid_day_to_storage_key;
///
/// assert_eq!(grid_day_to_storage_key(0), Some(1)); // Monday
/// assert_eq!(grid_day_to_storage_key(5), Some(6)); // Saturday
/// assert_eq!(grid_day_to_storage_key(6), Some(0)); // Sunday
/// assert_eq!(grid_day_to_storage_key(7), None);
/// ```
pub fn grid_day_to_storage_key(grid_day: usize) -> Option<u8> {
    if grid_day < GRID_DAYS {
        Some(((grid_day + 1) % GRID_DAYS) as u8)
    } else {
        None
    }
}

/// Translates a Sunday-first storage key into its Monday-first grid row.
///
/// # Examples
/// ```
/// use weekgrid_libs::day::storage_key_to_grid_day;
///
/// assert_eq!(storage_key_to_grid_day(1), Some(0)); // Monday
/// assert_eq!(storage_key_to_grid_day(0), Some(6)); // Sunday
/// assert_eq!(storage_key_to_grid_day(9), None);
/// ```
pub fn storage_key_to_grid_day(storage_key: u8) -> Option<usize> {
    let key = storage_key as usize;
    if key < GRID_DAYS {
        Some((key + GRID_DAYS - 1) % GRID_DAYS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_self_inverse() {
        for grid_day in 0..GRID_DAYS {
            let key = grid_day_to_storage_key(grid_day).unwrap();
            assert_eq!(storage_key_to_grid_day(key), Some(grid_day));
        }

        for key in 0..GRID_DAYS as u8 {
            let grid_day = storage_key_to_grid_day(key).unwrap();
            assert_eq!(grid_day_to_storage_key(grid_day), Some(key));
        }
    }
}
