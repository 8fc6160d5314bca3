//! Civil calendar instant.
//!
//! `CivilInstant` is the wall-clock form a birth record uses: bare
//! calendar components, no zone. The chart layer validates ranges; this
//! type only carries the components and converts them to a Julian Date
//! for the ephemeris, treating the components as UT.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::julian::calendar_to_jd;

/// Calendar instant with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Day of month plus time of day as a fraction.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second / 86_400.0
    }

    /// Julian Date of this instant, components read as UT.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }
}

impl Display for CivilInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Error from parsing a calendar instant string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseInstantError {
    /// The string does not match `YYYY-MM-DDTHH:MM[:SS]`.
    Malformed,
    /// A component was present but not numeric.
    BadComponent(&'static str),
}

impl Display for ParseInstantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "expected YYYY-MM-DDTHH:MM[:SS]"),
            Self::BadComponent(name) => write!(f, "invalid {name} component"),
        }
    }
}

impl Error for ParseInstantError {}

impl FromStr for CivilInstant {
    type Err = ParseInstantError;

    /// Parse `YYYY-MM-DDTHH:MM[:SS]`, with an optional trailing `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s.split_once('T').ok_or(ParseInstantError::Malformed)?;

        let mut date_parts = date.split('-');
        let year = next_component(&mut date_parts, "year")?;
        let month = next_component(&mut date_parts, "month")?;
        let day = next_component(&mut date_parts, "day")?;
        if date_parts.next().is_some() {
            return Err(ParseInstantError::Malformed);
        }

        let mut time_parts = time.split(':');
        let hour = next_component(&mut time_parts, "hour")?;
        let minute = next_component(&mut time_parts, "minute")?;
        let second = match time_parts.next() {
            Some(sec) => sec
                .parse::<f64>()
                .map_err(|_| ParseInstantError::BadComponent("second"))?,
            None => 0.0,
        };
        if time_parts.next().is_some() {
            return Err(ParseInstantError::Malformed);
        }

        Ok(Self {
            year,
            month: month as u32,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
        })
    }
}

fn next_component<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i32, ParseInstantError> {
    parts
        .next()
        .ok_or(ParseInstantError::Malformed)?
        .parse::<i32>()
        .map_err(|_| ParseInstantError::BadComponent(name))
}
