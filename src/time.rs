use crate::error::TimeParseError;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A wall-clock time within a single day, minute precision.
/// `24:00` is allowed as the end-of-day boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Constructs a new ClockTime
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::time::ClockTime;
    ///
    /// assert!(ClockTime::new(9, 30).is_ok());
    /// assert!(ClockTime::new(24, 0).is_ok());
    ///
    /// assert!(ClockTime::new(24, 1).is_err());
    /// assert!(ClockTime::new(7, 60).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> Result<ClockTime, TimeParseError> {
        if minute > 59 || hour > 24 || (hour == 24 && minute > 0) {
            Err(TimeParseError::OutOfRange { hour, minute })
        } else {
            Ok(ClockTime { hour, minute })
        }
    }

    /// Callers guarantee `hour <= 24`
    pub(crate) fn at_hour(hour: u8) -> ClockTime {
        debug_assert!(hour <= 24);
        ClockTime { hour, minute: 0 }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// The first whole hour at or after this time.
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::time::ClockTime;
    ///
    /// assert_eq!(ClockTime::new(17, 0).unwrap().ceil_hour(), 17);
    /// assert_eq!(ClockTime::new(17, 30).unwrap().ceil_hour(), 18);
    /// ```
    pub fn ceil_hour(self) -> u8 {
        if self.minute == 0 {
            self.hour
        } else {
            self.hour + 1
        }
    }
}

fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        part.parse().ok()
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Reads `H:MM` or `HH:MM`. A trailing `:SS` is accepted and ignored.
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::error::TimeParseError;
    /// use weekgrid_libs::time::ClockTime;
    ///
    /// let time: ClockTime = "09:30".parse().unwrap();
    /// assert_eq!((time.hour(), time.minute()), (9, 30));
    ///
    /// let time: ClockTime = "7:05:59".parse().unwrap();
    /// assert_eq!((time.hour(), time.minute()), (7, 5));
    ///
    /// assert_eq!(
    ///     "0930".parse::<ClockTime>(),
    ///     Err(TimeParseError::MissingSeparator("0930".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let mut parts = s.splitn(3, ':');
        let hour = parts.next().unwrap_or_default();
        let minute = parts
            .next()
            .ok_or_else(|| TimeParseError::MissingSeparator(s.to_string()))?;

        let hour = parse_component(hour).ok_or_else(|| TimeParseError::InvalidHour(s.to_string()))?;
        let minute =
            parse_component(minute).ok_or_else(|| TimeParseError::InvalidMinute(s.to_string()))?;

        ClockTime::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A `{ start, end }` pair of `HH:MM` strings, as stored and sent over the wire.
/// `start < end` within the same day; there is no overnight wraparound.
///
/// The strings are kept as received and only parsed when painted onto a grid,
/// so a malformed entry never prevents the rest of a week from loading.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// # Examples
    /// ```
    /// use weekgrid_libs::time::TimeRange;
    ///
    /// let range = TimeRange::new("09:00", "11:30");
    /// assert_eq!(range.start, "09:00");
    /// assert_eq!(range.end, "11:30");
    /// ```
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> TimeRange {
        TimeRange {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn between(start: ClockTime, end: ClockTime) -> TimeRange {
        TimeRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn start_time(&self) -> Result<ClockTime, TimeParseError> {
        self.start.parse()
    }

    pub fn end_time(&self) -> Result<ClockTime, TimeParseError> {
        self.end.parse()
    }

    /// Half-open `[start, end)` hours this range covers on an hour grid.
    /// The start is floored into its hour. An end with nonzero minutes
    /// extends into its containing hour, an exact-hour end does not.
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::time::TimeRange;
    ///
    /// assert_eq!(TimeRange::new("09:30", "17:00").occupied_hours(), Ok((9, 17)));
    /// assert_eq!(TimeRange::new("09:00", "17:30").occupied_hours(), Ok((9, 18)));
    /// assert!(TimeRange::new("nine", "17:30").occupied_hours().is_err());
    /// ```
    pub fn occupied_hours(&self) -> Result<(u8, u8), TimeParseError> {
        let start = self.start_time()?;
        let end = self.end_time()?;
        Ok((start.hour(), end.ceil_hour()))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for ClockTime {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let hour = u.int_in_range(0..=24)?;
        let minute = if hour == 24 { 0 } else { u.int_in_range(0..=59)? };
        Ok(ClockTime { hour, minute })
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for TimeRange {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Mostly well-formed clock strings, with the occasional free-form
        // string so malformed input is exercised too.
        if u.ratio(1, 16)? {
            return Ok(TimeRange::new(
                u.arbitrary::<String>()?,
                u.arbitrary::<String>()?,
            ));
        }
        Ok(TimeRange::between(
            u.arbitrary::<ClockTime>()?,
            u.arbitrary::<ClockTime>()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clock_strings() {
        let time: ClockTime = " 06:00 ".parse().unwrap();
        assert_eq!(time, ClockTime::new(6, 0).unwrap());

        assert_eq!("24:00".parse::<ClockTime>().map(|t| t.hour()), Ok(24));
        assert_eq!("".parse::<ClockTime>(), Err(TimeParseError::Empty));
        assert_eq!(
            "+9:00".parse::<ClockTime>(),
            Err(TimeParseError::InvalidHour("+9:00".to_string()))
        );
        assert_eq!(
            "09:".parse::<ClockTime>(),
            Err(TimeParseError::InvalidMinute("09:".to_string()))
        );
        assert_eq!(
            "25:00".parse::<ClockTime>(),
            Err(TimeParseError::OutOfRange {
                hour: 25,
                minute: 0
            })
        );
        assert_eq!(
            "24:30".parse::<ClockTime>(),
            Err(TimeParseError::OutOfRange {
                hour: 24,
                minute: 30
            })
        );
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(ClockTime::at_hour(6).to_string(), "06:00");
        assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(
            TimeRange::between(ClockTime::at_hour(9), ClockTime::at_hour(20)).to_string(),
            "09:00-20:00"
        );
    }

    #[test]
    fn orders_by_hour_then_minute() {
        let early = ClockTime::new(9, 59).unwrap();
        let late = ClockTime::new(10, 0).unwrap();
        assert!(early < late);
    }
}
