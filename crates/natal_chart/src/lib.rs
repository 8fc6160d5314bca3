//! Birth-chart domain layer.
//!
//! Turns a birth instant and location into an immutable chart
//! snapshot: Sun, Moon, and Ascendant positions on the ecliptic, their
//! tropical sign slices, and the IAU constellations behind them, with
//! the Sun resolved both at the birth instant and at the popular
//! calendar-date anchor.
//!
//! The ephemeris is injected through [`natal_core::Ephemeris`]; this
//! crate contains no I/O, no clock reads, and no mutable state.

pub mod anchor;
pub mod ascendant;
pub mod chart;
pub mod error;
pub mod sign;

pub use anchor::anchor_instant;
pub use ascendant::{
    ascendant_longitude_deg, ecliptic_point_equatorial, local_sidereal_hours,
    midheaven_longitude_deg,
};
pub use chart::{
    BirthMoment, ChartSnapshot, ConstellationLabel, EclipticPosition, SunResolutions,
    compute_chart, sun_resolutions,
};
pub use error::ChartError;
pub use sign::{ALL_SIGNS, Dms, Sign, SignPosition, deg_to_dms, sign_from_longitude};

// Re-export the provider-facing types so chart consumers need only
// this crate plus an engine.
pub use natal_core::{Body, Constellation, Engine, Ephemeris};
pub use natal_time::CivilInstant;
