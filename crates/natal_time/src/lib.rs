//! Calendar instants, Julian Dates, and sidereal time.
//!
//! The chart pipeline measures time two ways: a civil calendar instant
//! as recorded on a birth certificate, and the Julian Date the
//! ephemeris series are evaluated against. This crate owns both plus
//! the Greenwich sidereal time polynomial that ties an instant to the
//! rotating sky.

pub mod civil;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilInstant, ParseInstantError};
pub use julian::{
    J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar, julian_centuries,
};
pub use sidereal::{gmst_deg, gmst_hours};
