#![no_main]
use libfuzzer_sys::fuzz_target;
use weekgrid_libs::{to_availability, AvailabilityMatrix, HourWindow, GRID_DAYS};

fuzz_target!(|data: (AvailabilityMatrix, u8, (usize, usize), (usize, usize), bool)| {
    let (mut matrix, start_hour, from, to, value) = data;

    let end_hour = start_hour as usize + matrix.columns();
    let window = match HourWindow::new(start_hour, end_hour.min(u8::MAX as usize) as u8) {
        Ok(window) if window.columns() == matrix.columns() => window,
        _ => return,
    };

    let before = matrix.available_slots();
    let changed = matrix.paint(from, to, value);
    let after = matrix.available_slots();
    if value {
        assert_eq!(after, before + changed);
    } else {
        assert_eq!(after + changed, before);
    }
    assert!(changed <= GRID_DAYS * matrix.columns());

    let availability = to_availability(&matrix, window);
    assert_eq!(
        AvailabilityMatrix::from_days(&availability, window),
        matrix,
        "Grid should survive a round trip"
    );
});
