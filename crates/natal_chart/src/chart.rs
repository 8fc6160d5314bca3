//! Chart assembly: from a birth moment to an immutable snapshot.
//!
//! Everything here is a pure function of its arguments plus the
//! injected provider and current year. A snapshot is created fresh on
//! every call and never mutated; recomputation replaces it wholesale.

use natal_core::{Body, Constellation, Ephemeris, EquinoxFrame};
use natal_frames::normalize_deg;
use natal_time::{CivilInstant, days_in_month};

use crate::anchor::anchor_instant;
use crate::ascendant::{
    ascendant_longitude_deg, ecliptic_point_equatorial, local_sidereal_hours,
    midheaven_longitude_deg,
};
use crate::error::ChartError;
use crate::sign::{SignPosition, sign_from_longitude};

/// Immutable chart input: a civil birth instant and where on Earth it
/// was observed. The instant carries bare wall-clock components, the
/// way a birth record states them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub instant: CivilInstant,
    /// Geodetic latitude in degrees, north positive, strictly inside
    /// (-90, 90); the Ascendant is undefined at the poles.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl BirthMoment {
    pub fn new(instant: CivilInstant, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            instant,
            latitude_deg,
            longitude_deg,
        }
    }

    /// Validate coordinate ranges and calendar component ranges.
    ///
    /// Runs before any provider call; a failure names the offending
    /// field.
    pub fn validate(&self) -> Result<(), ChartError> {
        let invalid = |field, message| Err(ChartError::Validation { field, message });

        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() >= 90.0 {
            return invalid("latitude", "must lie strictly between -90 and 90 degrees");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return invalid("longitude", "must lie between -180 and 180 degrees");
        }

        let t = &self.instant;
        if !(1..=12).contains(&t.month) {
            return invalid("month", "must lie between 1 and 12");
        }
        if t.day < 1 || t.day > days_in_month(t.year, t.month) {
            return invalid("day", "does not exist in that month");
        }
        if t.hour >= 24 {
            return invalid("hour", "must be below 24");
        }
        if t.minute >= 60 {
            return invalid("minute", "must be below 60");
        }
        if !t.second.is_finite() || t.second < 0.0 || t.second >= 60.0 {
            return invalid("second", "must lie in [0, 60)");
        }
        Ok(())
    }
}

/// A normalized position on the ecliptic with its tropical sign slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Sign placement derived by floor division.
    pub sign: SignPosition,
}

impl EclipticPosition {
    fn from_longitude(longitude_deg: f64) -> Self {
        let sign = sign_from_longitude(longitude_deg);
        Self {
            longitude_deg: normalize_deg(longitude_deg),
            sign,
        }
    }
}

/// An IAU constellation resolution, with the equatorial coordinates it
/// was looked up at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationLabel {
    pub constellation: Constellation,
    /// Right ascension used for the lookup, hours [0, 24).
    pub ra_hours: f64,
    /// Declination used for the lookup, degrees.
    pub dec_deg: f64,
}

impl ConstellationLabel {
    pub const fn name(&self) -> &'static str {
        self.constellation.name()
    }

    pub const fn abbreviation(&self) -> &'static str {
        self.constellation.abbreviation()
    }
}

/// The Sun's position with both of its constellation resolutions.
///
/// The duality is a fixed business rule, not a general capability:
/// only the Sun carries a star-aligned (anchor-based) label, because
/// the published methodology it reproduces is defined only for the
/// Sun. Moon and Ascendant resolve at the birth instant alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunResolutions {
    pub position: EclipticPosition,
    /// Constellation behind the Sun at the literal birth instant.
    pub at_birth: ConstellationLabel,
    /// Constellation behind the Sun at the anchor instant (birth
    /// month/day, current year, noon UT).
    pub star_aligned: ConstellationLabel,
}

/// The aggregate, immutable result of one chart computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSnapshot {
    pub sun: SunResolutions,
    pub moon: EclipticPosition,
    pub moon_constellation: ConstellationLabel,
    pub ascendant: EclipticPosition,
    pub ascendant_constellation: ConstellationLabel,
    /// Midheaven longitude in degrees, for the wheel's vertical axis.
    pub midheaven_deg: f64,
}

/// Resolve a body's constellation at an instant, J2000 frame.
fn body_label<E: Ephemeris>(
    provider: &E,
    body: Body,
    jd: f64,
) -> Result<ConstellationLabel, ChartError> {
    let eq = provider.equatorial(body, jd, EquinoxFrame::J2000, true)?;
    let constellation = provider.constellation(eq.ra_hours, eq.dec_deg)?;
    Ok(ConstellationLabel {
        constellation,
        ra_hours: eq.ra_hours,
        dec_deg: eq.dec_deg,
    })
}

/// Apparent ecliptic longitude of a body at an instant.
fn body_longitude<E: Ephemeris>(provider: &E, body: Body, jd: f64) -> Result<f64, ChartError> {
    let vector = provider.geocentric_vector(body, jd)?;
    let ecliptic = provider.ecliptic_of_date(&vector, jd)?;
    Ok(ecliptic.lon_deg)
}

/// Narrow entry point: the Sun's position and both of its labels.
pub fn sun_resolutions<E: Ephemeris>(
    provider: &E,
    birth: &BirthMoment,
    current_year: i32,
) -> Result<SunResolutions, ChartError> {
    birth.validate()?;
    let jd = birth.instant.to_jd();

    let position = EclipticPosition::from_longitude(body_longitude(provider, Body::Sun, jd)?);
    let at_birth = body_label(provider, Body::Sun, jd)?;
    let anchor_jd = anchor_instant(&birth.instant, current_year).to_jd();
    let star_aligned = body_label(provider, Body::Sun, anchor_jd)?;

    Ok(SunResolutions {
        position,
        at_birth,
        star_aligned,
    })
}

/// Full entry point: compute a complete chart snapshot.
///
/// `current_year` feeds only the Sun's star-aligned label; it is an
/// explicit argument so identical inputs always produce identical
/// snapshots.
pub fn compute_chart<E: Ephemeris>(
    provider: &E,
    birth: &BirthMoment,
    current_year: i32,
) -> Result<ChartSnapshot, ChartError> {
    let sun = sun_resolutions(provider, birth, current_year)?;
    let jd = birth.instant.to_jd();

    let moon = EclipticPosition::from_longitude(body_longitude(provider, Body::Moon, jd)?);
    let moon_constellation = body_label(provider, Body::Moon, jd)?;

    let gast = provider.sidereal_time_hours(jd)?;
    let lst = local_sidereal_hours(gast, birth.longitude_deg);
    let asc_deg = ascendant_longitude_deg(lst, birth.latitude_deg);
    let ascendant = EclipticPosition::from_longitude(asc_deg);

    let (ra_hours, dec_deg) = ecliptic_point_equatorial(asc_deg);
    let ascendant_constellation = ConstellationLabel {
        constellation: provider.constellation(ra_hours, dec_deg)?,
        ra_hours,
        dec_deg,
    };

    Ok(ChartSnapshot {
        sun,
        moon,
        moon_constellation,
        ascendant,
        ascendant_constellation,
        midheaven_deg: midheaven_longitude_deg(lst),
    })
}
