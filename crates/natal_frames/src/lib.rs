//! Frame and angle helpers for birth-chart computations.
//!
//! Provides degree/radian/hour conversions with wraparound handling,
//! the obliquity of the ecliptic, nutation and precession corrections,
//! and the ecliptic ↔ equatorial rotations used to place chart points
//! on the celestial sphere.

pub mod angle;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use angle::{deg_to_hours, hours_to_deg, normalize_deg, normalize_hours};
pub use nutation::{equation_of_equinoxes_deg, nutation_deg};
pub use obliquity::{COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL, mean_obliquity_deg};
pub use precession::{general_precession_deg, general_precession_arcsec};
pub use rotation::{
    ecliptic_to_equatorial, ecliptic_to_equatorial_vec, equatorial_to_ecliptic,
    equatorial_to_ecliptic_vec,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
