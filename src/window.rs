use crate::error::WindowError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_START_HOUR: u8 = 6;
pub const DEFAULT_END_HOUR: u8 = 20;

/// The contiguous clock hours shown on a grid, `[start_hour, end_hour)`.
/// Each hour in the window is one grid column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawHourWindow", rename_all = "camelCase")
)]
pub struct HourWindow {
    start_hour: u8,
    end_hour: u8,
}

impl Default for HourWindow {
    fn default() -> HourWindow {
        HourWindow {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl HourWindow {
    /// Constructs a new window over `[start_hour, end_hour)`
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::window::HourWindow;
    ///
    /// let window = HourWindow::new(6, 20).unwrap();
    /// assert_eq!(window, HourWindow::default());
    /// assert_eq!(window.columns(), 14);
    ///
    /// assert!(HourWindow::new(9, 9).is_err());
    /// assert!(HourWindow::new(0, 25).is_err());
    /// ```
    pub fn new(start_hour: u8, end_hour: u8) -> Result<HourWindow, WindowError> {
        if start_hour < end_hour && end_hour <= 24 {
            Ok(HourWindow {
                start_hour,
                end_hour,
            })
        } else {
            Err(WindowError::Invalid {
                start_hour,
                end_hour,
            })
        }
    }

    pub fn start_hour(self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(self) -> u8 {
        self.end_hour
    }

    /// Number of hourly columns in the grid
    pub fn columns(self) -> usize {
        (self.end_hour - self.start_hour) as usize
    }

    /// Pins `hour` into `[start_hour, end_hour]`. Note the closed upper
    /// bound: a clipped hour may equal `end_hour`, which is a boundary and
    /// not a column.
    pub fn clip(self, hour: u8) -> u8 {
        num::clamp(hour, self.start_hour, self.end_hour)
    }

    /// Column for an hour inside the window.
    ///
    /// # Examples
    /// ```
    /// use weekgrid_libs::window::HourWindow;
    ///
    /// let window = HourWindow::default();
    /// assert_eq!(window.column_for(6), Some(0));
    /// assert_eq!(window.column_for(19), Some(13));
    /// assert_eq!(window.column_for(20), None);
    /// assert_eq!(window.column_for(5), None);
    /// ```
    pub fn column_for(self, hour: u8) -> Option<usize> {
        if hour >= self.start_hour && hour < self.end_hour {
            Some((hour - self.start_hour) as usize)
        } else {
            None
        }
    }

    /// Clock hour at which `column` starts. `columns()` itself maps to
    /// `end_hour`, the window's outer boundary.
    pub fn hour_for(self, column: usize) -> u8 {
        let column = column.min(self.columns()) as u8;
        self.start_hour + column
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHourWindow {
    #[serde(default = "default_start_hour")]
    start_hour: u8,
    #[serde(default = "default_end_hour")]
    end_hour: u8,
}

#[cfg(feature = "serde")]
fn default_start_hour() -> u8 {
    DEFAULT_START_HOUR
}

#[cfg(feature = "serde")]
fn default_end_hour() -> u8 {
    DEFAULT_END_HOUR
}

#[cfg(feature = "serde")]
impl TryFrom<RawHourWindow> for HourWindow {
    type Error = WindowError;

    fn try_from(raw: RawHourWindow) -> Result<Self, Self::Error> {
        HourWindow::new(raw.start_hour, raw.end_hour)
    }
}
