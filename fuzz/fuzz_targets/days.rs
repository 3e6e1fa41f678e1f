#![no_main]
use libfuzzer_sys::fuzz_target;
use weekgrid_libs::{
    to_availability, AvailabilityMatrix, ClockTime, DayAvailability, HourWindow,
};

fuzz_target!(|data: (DayAvailability, u8, u8)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply();

    let (availability, start_hour, end_hour) = data;
    let window = match HourWindow::new(start_hour, end_hour) {
        Ok(window) => window,
        Err(_) => return,
    };

    let matrix = AvailabilityMatrix::from_days(&availability, window);
    assert!(
        matrix.rows().all(|row| row.len() == window.columns()),
        "Every row should span the window"
    );

    let read_back = to_availability(&matrix, window);
    for (key, ranges) in read_back.iter() {
        assert!(*key < 7, "Unknown day key {} emitted", key);
        assert!(!ranges.is_empty(), "Empty day {} emitted", key);
        for range in ranges {
            let start: ClockTime = range.start.parse().expect("emitted start should parse");
            let end: ClockTime = range.end.parse().expect("emitted end should parse");
            assert_eq!(start.minute(), 0);
            assert_eq!(end.minute(), 0);
            assert!(
                start.hour() >= window.start_hour() && end.hour() <= window.end_hour(),
                "Range {} escapes {:?}",
                range,
                window
            );
            assert!(start < end, "Range {} is empty", range);
        }
    }

    assert_eq!(
        AvailabilityMatrix::from_days(&read_back, window),
        matrix,
        "Painting the read back ranges should reproduce the grid"
    );
});
