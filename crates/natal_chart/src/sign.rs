//! Tropical zodiac sign and DMS computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees
//! each, anchored at the vernal equinox. Given a tropical longitude we
//! identify the sign slice and express the position as
//! degrees-minutes-seconds within it. Floor semantics put a boundary
//! value in the following sign: exactly 30.0° is Taurus, not Aries.

use natal_frames::normalize_deg;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Canonical English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based slice index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, may include a fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking the absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Full sign placement for a tropical longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    /// The tropical sign.
    pub sign: Sign,
    /// 0-based slice index (0 = Aries).
    pub slice_index: u8,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Classify a tropical ecliptic longitude into its sign slice.
///
/// `slice = floor(lon / 30) mod 12` after normalization to [0, 360).
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_deg(lon_deg);
    let slice = (lon / 30.0).floor() as u8;
    // Floating point edge: normalize_deg can only return < 360, but
    // keep the index honest anyway.
    let slice = slice.min(11);
    let degrees_in_sign = lon - (slice as f64) * 30.0;

    SignPosition {
        sign: ALL_SIGNS[slice as usize],
        slice_index: slice,
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
