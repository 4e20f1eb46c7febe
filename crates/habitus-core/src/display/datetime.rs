//! Date and time display utilities.
//!
//! Timestamps render in the system timezone; due dates are plain calendar
//! dates and render as they are stored.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp, Zoned};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A due date, with an "overdue" marker when it lies before `today` and the
/// item is still open.
///
/// ```rust
/// use habitus_core::display::DueDate;
/// use jiff::civil::date;
///
/// let today = date(2025, 3, 10);
/// let due = DueDate { date: date(2025, 3, 9), open: true, today };
/// assert_eq!(due.to_string(), "2025-03-09 (overdue)");
///
/// let done = DueDate { open: false, ..due };
/// assert_eq!(done.to_string(), "2025-03-09");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DueDate {
    pub date: Date,
    pub open: bool,
    pub today: Date,
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if self.open && self.date < self.today {
            write!(f, " (overdue)")?;
        }
        Ok(())
    }
}

/// Today's date in the system timezone.
pub fn today() -> Date {
    Zoned::now().date()
}
