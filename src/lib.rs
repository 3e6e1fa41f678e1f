pub mod codec;
pub mod data;
pub mod day;
pub mod error;
pub mod matrix;
pub mod time;
#[cfg(feature = "wasm")]
pub mod wasm;
pub mod window;

pub use codec::{to_availability, to_matrix, update_for};
pub use data::{DayAvailability, PreferredTimes, WeeklyAvailability, WeeklyAvailabilityUpdate};
pub use day::{grid_day_to_storage_key, storage_key_to_grid_day, GRID_DAYS};
pub use error::{TimeParseError, WindowError};
pub use matrix::AvailabilityMatrix;
pub use time::{ClockTime, TimeRange};
pub use window::HourWindow;

#[cfg(test)]
mod tests {
    use crate::{
        to_availability, AvailabilityMatrix, ClockTime, DayAvailability, HourWindow, TimeRange,
        GRID_DAYS,
    };
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    fn hour_window() -> impl Strategy<Value = HourWindow> {
        (0u8..24)
            .prop_flat_map(|start| (Just(start), start + 1..=24))
            .prop_map(|(start, end)| HourWindow::new(start, end).unwrap())
    }

    /// Hour-aligned ranges inside `window` that neither overlap nor touch
    fn aligned_day(window: HourWindow) -> impl Strategy<Value = Vec<TimeRange>> {
        let boundaries = (window.columns() + 1).min(10);
        btree_set(window.start_hour()..=window.end_hour(), 0..=boundaries).prop_map(|hours| {
            let hours: Vec<u8> = hours.into_iter().collect();
            hours
                .chunks_exact(2)
                .map(|pair| {
                    TimeRange::between(ClockTime::at_hour(pair[0]), ClockTime::at_hour(pair[1]))
                })
                .collect()
        })
    }

    fn aligned_week() -> impl Strategy<Value = (HourWindow, DayAvailability)> {
        hour_window().prop_flat_map(|window| {
            (
                Just(window),
                vec(aligned_day(window), GRID_DAYS).prop_map(|days| {
                    days.into_iter()
                        .enumerate()
                        .filter(|(_, ranges)| !ranges.is_empty())
                        .map(|(key, ranges)| (key as u8, ranges))
                        .collect::<DayAvailability>()
                }),
            )
        })
    }

    fn matrix_for_window() -> impl Strategy<Value = (HourWindow, AvailabilityMatrix)> {
        hour_window().prop_flat_map(|window| {
            (
                Just(window),
                vec(vec(any::<bool>(), window.columns()), GRID_DAYS)
                    .prop_map(AvailabilityMatrix::from_rows),
            )
        })
    }

    fn clock_time() -> impl Strategy<Value = ClockTime> {
        (0u8..=24, 0u8..60).prop_map(|(hour, minute)| {
            ClockTime::new(hour, if hour == 24 { 0 } else { minute }).unwrap()
        })
    }

    proptest! {
        #[test]
        fn aligned_ranges_round_trip((window, availability) in aligned_week()) {
            let matrix = AvailabilityMatrix::from_days(&availability, window);
            prop_assert_eq!(to_availability(&matrix, window), availability);
        }

        #[test]
        fn grid_form_is_canonical((window, matrix) in matrix_for_window()) {
            let availability = to_availability(&matrix, window);
            prop_assert_eq!(AvailabilityMatrix::from_days(&availability, window), matrix);
        }

        #[test]
        fn ranges_only_paint_inside_window(
            window in hour_window(),
            key in 0u8..7,
            start in clock_time(),
            end in clock_time(),
        ) {
            let range = TimeRange::between(start, end);
            let availability: DayAvailability = vec![(key, vec![range])].into_iter().collect();
            let matrix = AvailabilityMatrix::from_days(&availability, window);

            let first = window.clip(start.hour());
            let last = window.clip(end.ceil_hour());
            let grid_day = crate::storage_key_to_grid_day(key).unwrap();

            for (day, row) in matrix.rows().enumerate() {
                prop_assert_eq!(row.len(), window.columns());
                for (column, &cell) in row.iter().enumerate() {
                    let hour = window.hour_for(column);
                    let expected = day == grid_day && hour >= first && hour < last;
                    prop_assert_eq!(cell, expected, "day {} hour {}", day, hour);
                }
            }
        }

        #[test]
        fn paint_ignores_drag_direction(
            columns in 1usize..24,
            from in (0usize..9, 0usize..30),
            to in (0usize..9, 0usize..30),
            value in any::<bool>(),
        ) {
            let mut forward = AvailabilityMatrix::with_columns(columns);
            let mut backward = AvailabilityMatrix::with_columns(columns);
            if !value {
                forward.paint((0, 0), (6, columns), true);
                backward.paint((0, 0), (6, columns), true);
            }

            prop_assert_eq!(
                forward.paint(from, to, value),
                backward.paint(to, from, value)
            );
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn touching_ranges_merge() {
        let window = HourWindow::default();
        let availability: DayAvailability = vec![(
            4,
            vec![
                TimeRange::new("09:00", "10:00"),
                TimeRange::new("10:00", "11:00"),
            ],
        )]
        .into_iter()
        .collect();

        let matrix = AvailabilityMatrix::from_days(&availability, window);
        assert_eq!(
            to_availability(&matrix, window),
            vec![(4, vec![TimeRange::new("09:00", "11:00")])]
                .into_iter()
                .collect::<DayAvailability>()
        );
    }

    #[test]
    fn whole_window_round_trips_to_outer_boundary() {
        let window = HourWindow::default();
        let availability: DayAvailability = vec![(1, vec![TimeRange::new("06:00", "20:00")])]
            .into_iter()
            .collect();

        let matrix = AvailabilityMatrix::from_days(&availability, window);
        assert_eq!(matrix.row(0).unwrap(), &[true; 14][..]);
        assert_eq!(to_availability(&matrix, window), availability);
    }
}
