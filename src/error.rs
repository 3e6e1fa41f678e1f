use thiserror::Error;

/// Failure to read an `HH:MM` clock string.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TimeParseError {
    #[error("Empty time string")]
    Empty,
    #[error("Expected HH:MM, no ':' separator found in {0:?}")]
    MissingSeparator(String),
    #[error("Invalid hour component in {0:?}")]
    InvalidHour(String),
    #[error("Invalid minute component in {0:?}")]
    InvalidMinute(String),
    #[error("Time {hour:02}:{minute:02} is outside of a single day")]
    OutOfRange { hour: u8, minute: u8 },
}

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum WindowError {
    #[error("Invalid hour window {start_hour}..{end_hour}. Expected start < end <= 24")]
    Invalid { start_hour: u8, end_hour: u8 },
}
