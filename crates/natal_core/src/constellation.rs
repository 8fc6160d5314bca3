//! IAU constellation lookup along the zodiac band.
//!
//! The IAU boundaries place thirteen constellations on the ecliptic;
//! this module classifies a sky position by the ecliptic longitude
//! span it falls in. The spans are the J2000 longitudes at which the
//! ecliptic crosses the official boundaries, to 0.01°, which is the
//! published "constellation behind the Sun" table this system is meant
//! to reproduce. Valid for positions within a few degrees of the
//! ecliptic, which covers every body resolved here (the Moon stays
//! within ±5.3°, Sun and Ascendant are on the ecliptic).

use natal_frames::{OBLIQUITY_J2000_RAD, equatorial_to_ecliptic, hours_to_deg, normalize_deg};

/// The thirteen IAU constellations the ecliptic passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constellation {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpius,
    Ophiuchus,
    Sagittarius,
    Capricornus,
    Aquarius,
    Pisces,
}

/// All thirteen in ecliptic-longitude order from the Aries boundary.
pub const ALL_CONSTELLATIONS: [Constellation; 13] = [
    Constellation::Aries,
    Constellation::Taurus,
    Constellation::Gemini,
    Constellation::Cancer,
    Constellation::Leo,
    Constellation::Virgo,
    Constellation::Libra,
    Constellation::Scorpius,
    Constellation::Ophiuchus,
    Constellation::Sagittarius,
    Constellation::Capricornus,
    Constellation::Aquarius,
    Constellation::Pisces,
];

impl Constellation {
    /// IAU name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpius => "Scorpius",
            Self::Ophiuchus => "Ophiuchus",
            Self::Sagittarius => "Sagittarius",
            Self::Capricornus => "Capricornus",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Standard three-letter IAU abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Aries => "Ari",
            Self::Taurus => "Tau",
            Self::Gemini => "Gem",
            Self::Cancer => "Cnc",
            Self::Leo => "Leo",
            Self::Virgo => "Vir",
            Self::Libra => "Lib",
            Self::Scorpius => "Sco",
            Self::Ophiuchus => "Oph",
            Self::Sagittarius => "Sgr",
            Self::Capricornus => "Cap",
            Self::Aquarius => "Aqr",
            Self::Pisces => "Psc",
        }
    }
}

/// Ecliptic longitude (J2000, degrees) where each constellation's span
/// begins; the span runs to the next entry. Pisces wraps through 0°.
#[rustfmt::skip]
static BAND_STARTS: [(f64, Constellation); 13] = [
    ( 29.09, Constellation::Aries),
    ( 53.47, Constellation::Taurus),
    ( 90.43, Constellation::Gemini),
    (118.26, Constellation::Cancer),
    (138.18, Constellation::Leo),
    (174.15, Constellation::Virgo),
    (217.80, Constellation::Libra),
    (241.14, Constellation::Scorpius),
    (247.73, Constellation::Ophiuchus),
    (266.60, Constellation::Sagittarius),
    (299.71, Constellation::Capricornus),
    (327.89, Constellation::Aquarius),
    (351.57, Constellation::Pisces),
];

/// Constellation behind an ecliptic longitude (degrees).
pub fn constellation_at_ecliptic(lon_deg: f64) -> Constellation {
    let lon = normalize_deg(lon_deg);
    let mut current = Constellation::Pisces; // span wrapping through 0°
    for &(start, constellation) in &BAND_STARTS {
        if lon >= start {
            current = constellation;
        }
    }
    current
}

/// Constellation behind an equatorial position (right ascension in
/// hours, declination in degrees, J2000 frame).
pub fn constellation_at_equatorial(ra_hours: f64, dec_deg: f64) -> Constellation {
    let ra_rad = hours_to_deg(ra_hours).to_radians();
    let dec_rad = dec_deg.to_radians();
    let (lon_rad, _) = equatorial_to_ecliptic(ra_rad, dec_rad, OBLIQUITY_J2000_RAD);
    constellation_at_ecliptic(lon_rad.to_degrees())
}
