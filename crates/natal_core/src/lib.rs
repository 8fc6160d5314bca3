//! Ephemeris provider contract and the analytic engine behind it.
//!
//! The chart layer talks to the sky through the [`Ephemeris`] trait:
//! geocentric vectors, ecliptic-of-date coordinates, equatorial
//! coordinates, apparent sidereal time, and IAU constellation lookup.
//! [`Engine`] implements the trait from the truncated lunisolar series,
//! so the whole pipeline runs with no kernel files and no I/O. Charts
//! remain pure functions of their inputs; swapping in a higher-precision
//! provider is a trait implementation away.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lunisolar::{AU_KM, moon_position, sun_position};
use natal_frames::{
    OBLIQUITY_J2000_RAD, cartesian_to_spherical, deg_to_hours, ecliptic_to_equatorial,
    ecliptic_to_equatorial_vec, equation_of_equinoxes_deg, equatorial_to_ecliptic_vec,
    general_precession_deg, mean_obliquity_deg, normalize_deg, normalize_hours, nutation_deg,
    spherical_to_cartesian, SphericalCoords,
};
use natal_time::{gmst_hours, julian_centuries};

pub mod constellation;

pub use constellation::{
    ALL_CONSTELLATIONS, Constellation, constellation_at_ecliptic, constellation_at_equatorial,
};

/// Bodies the chart pipeline resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Compact body code (used by the CLI and any FFI surface).
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
        }
    }

    /// Convert a compact body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Which equinox the equatorial output is referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquinoxFrame {
    /// True equator and equinox of the query instant.
    OfDate,
    /// Mean equator and equinox of J2000.0 (the frame the
    /// constellation boundaries are tabulated against).
    J2000,
}

/// Ecliptic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
}

/// Equatorial position; right ascension in hours by domain convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in hours, [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// A query argument was unusable (non-finite instant or coordinate).
    InvalidQuery(&'static str),
    /// The instant falls outside the validity window of the series.
    EpochOutOfRange { jd: f64 },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
        }
    }
}

impl Error for EngineError {}

/// The provider contract the chart layer computes against.
///
/// Implementations must be pure: identical arguments always produce
/// identical results. All failures surface as [`EngineError`]; the
/// chart layer propagates them without reinterpretation.
pub trait Ephemeris {
    /// Apparent geocentric Cartesian position in km, true equator and
    /// equinox of date, aberration-corrected.
    fn geocentric_vector(&self, body: Body, jd_ut: f64) -> Result<[f64; 3], EngineError>;

    /// Convert a geocentric vector (as produced by
    /// [`Ephemeris::geocentric_vector`] for the same instant) to true
    /// ecliptic-of-date coordinates.
    fn ecliptic_of_date(
        &self,
        vector: &[f64; 3],
        jd_ut: f64,
    ) -> Result<EclipticCoords, EngineError>;

    /// Equatorial coordinates of a body, of-date or J2000-referenced.
    fn equatorial(
        &self,
        body: Body,
        jd_ut: f64,
        frame: EquinoxFrame,
        aberration: bool,
    ) -> Result<EquatorialCoords, EngineError>;

    /// Greenwich apparent sidereal time in hours, [0, 24).
    fn sidereal_time_hours(&self, jd_ut: f64) -> Result<f64, EngineError>;

    /// IAU constellation behind an equatorial position (right ascension
    /// in hours, declination in degrees, J2000 frame).
    fn constellation(&self, ra_hours: f64, dec_deg: f64) -> Result<Constellation, EngineError>;
}

/// Validity window of the truncated series, Gregorian years 1000-3000.
const JD_MIN: f64 = 2_086_552.5;
const JD_MAX: f64 = 2_816_787.5;

/// Constant of annual aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Analytic ephemeris engine over the lunisolar series.
///
/// Stateless and trivially `Send + Sync`; construct once and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    fn check_epoch(jd_ut: f64) -> Result<(), EngineError> {
        if !jd_ut.is_finite() {
            return Err(EngineError::InvalidQuery("instant must be finite"));
        }
        if !(JD_MIN..=JD_MAX).contains(&jd_ut) {
            return Err(EngineError::EpochOutOfRange { jd: jd_ut });
        }
        Ok(())
    }

    /// True obliquity of date in radians.
    fn true_obliquity_rad(t: f64) -> f64 {
        let (_, deps) = nutation_deg(t);
        (mean_obliquity_deg(t) + deps).to_radians()
    }

    /// Geometric ecliptic position, mean equinox of date.
    fn geometric_of_date(body: Body, t: f64) -> (f64, f64, f64) {
        match body {
            Body::Sun => {
                let s = sun_position(t);
                (s.lon_deg, s.lat_deg, s.distance_km)
            }
            Body::Moon => {
                let m = moon_position(t);
                (m.lon_deg, m.lat_deg, m.distance_km)
            }
        }
    }

    /// Apparent ecliptic position, true equinox of date.
    ///
    /// Nutation in longitude shifts the zero point; annual aberration
    /// applies to the Sun (the Moon's aberration is under an arcsecond
    /// and the series absorbs it).
    fn apparent_of_date(body: Body, t: f64, aberration: bool) -> (f64, f64, f64) {
        let (mut lon, lat, r_km) = Self::geometric_of_date(body, t);
        let (dpsi, _) = nutation_deg(t);
        lon += dpsi;
        if aberration && body == Body::Sun {
            lon -= ABERRATION_ARCSEC / 3600.0 / (r_km / AU_KM);
        }
        (normalize_deg(lon), lat, r_km)
    }
}

impl Ephemeris for Engine {
    fn geocentric_vector(&self, body: Body, jd_ut: f64) -> Result<[f64; 3], EngineError> {
        Self::check_epoch(jd_ut)?;
        let t = julian_centuries(jd_ut);
        let (lon_deg, lat_deg, distance_km) = Self::apparent_of_date(body, t, true);
        let ecliptic = spherical_to_cartesian(&SphericalCoords {
            lon_deg,
            lat_deg,
            distance_km,
        });
        Ok(ecliptic_to_equatorial_vec(&ecliptic, Self::true_obliquity_rad(t)))
    }

    fn ecliptic_of_date(
        &self,
        vector: &[f64; 3],
        jd_ut: f64,
    ) -> Result<EclipticCoords, EngineError> {
        Self::check_epoch(jd_ut)?;
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidQuery("vector must be finite"));
        }
        let t = julian_centuries(jd_ut);
        let ecliptic = equatorial_to_ecliptic_vec(vector, Self::true_obliquity_rad(t));
        let s = cartesian_to_spherical(&ecliptic);
        Ok(EclipticCoords {
            lon_deg: s.lon_deg,
            lat_deg: s.lat_deg,
        })
    }

    fn equatorial(
        &self,
        body: Body,
        jd_ut: f64,
        frame: EquinoxFrame,
        aberration: bool,
    ) -> Result<EquatorialCoords, EngineError> {
        Self::check_epoch(jd_ut)?;
        let t = julian_centuries(jd_ut);

        let (lon_deg, lat_deg, eps_rad) = match frame {
            EquinoxFrame::OfDate => {
                let (lon, lat, _) = Self::apparent_of_date(body, t, aberration);
                (lon, lat, Self::true_obliquity_rad(t))
            }
            EquinoxFrame::J2000 => {
                // Mean equinox of date minus accumulated precession
                // approximates the J2000 longitude; the ecliptic pole
                // drift over the supported window stays under the band
                // classifier's resolution.
                let (mut lon, lat, r_km) = Self::geometric_of_date(body, t);
                lon -= general_precession_deg(t);
                if aberration && body == Body::Sun {
                    lon -= ABERRATION_ARCSEC / 3600.0 / (r_km / AU_KM);
                }
                (normalize_deg(lon), lat, OBLIQUITY_J2000_RAD)
            }
        };

        let (ra_rad, dec_rad) =
            ecliptic_to_equatorial(lon_deg.to_radians(), lat_deg.to_radians(), eps_rad);
        Ok(EquatorialCoords {
            ra_hours: normalize_hours(deg_to_hours(ra_rad.to_degrees())),
            dec_deg: dec_rad.to_degrees(),
        })
    }

    fn sidereal_time_hours(&self, jd_ut: f64) -> Result<f64, EngineError> {
        Self::check_epoch(jd_ut)?;
        let t = julian_centuries(jd_ut);
        let gast = gmst_hours(jd_ut) + equation_of_equinoxes_deg(t) / 15.0;
        Ok(normalize_hours(gast))
    }

    fn constellation(&self, ra_hours: f64, dec_deg: f64) -> Result<Constellation, EngineError> {
        if !ra_hours.is_finite() || !dec_deg.is_finite() {
            return Err(EngineError::InvalidQuery("coordinates must be finite"));
        }
        Ok(constellation_at_equatorial(ra_hours, dec_deg))
    }
}
