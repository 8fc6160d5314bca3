//! Anchor-instant construction for the star-aligned Sun label.
//!
//! The popular "constellation behind the Sun" tables are keyed to the
//! calendar date, not the birth year: a February 14th birthday reads
//! the same row whether the year was 1960 or 2002. The anchor instant
//! reproduces that: birth month and day, the caller-supplied current
//! year, fixed 12:00 UT. A February 29 birthday in a non-leap current
//! year clamps to February 28, keeping the birth month.

use natal_time::{CivilInstant, days_in_month};

/// Fixed anchor hour, noon UT.
const ANCHOR_HOUR: u32 = 12;

/// Build the anchor instant for a birth instant and an injected
/// current year. Total for any in-range birth date; the current year
/// is the caller's to supply so the computation stays a pure function
/// of its arguments.
pub fn anchor_instant(birth: &CivilInstant, current_year: i32) -> CivilInstant {
    let day = birth.day.min(days_in_month(current_year, birth.month));
    CivilInstant::new(current_year, birth.month, day, ANCHOR_HOUR, 0, 0.0)
}
