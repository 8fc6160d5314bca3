//! Gregorian calendar ↔ Julian Date conversion.
//!
//! Proleptic Gregorian throughout: every civil date this system accepts
//! is well inside the Gregorian era, so the Julian-calendar branch of
//! the classic algorithm is not carried.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000 January 1.5 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// True for Gregorian leap years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, accounting for leap years.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 4.81 for the 4th
/// at 19:26:24).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_sputnik() {
        // Meeus example 7.a: 1957 October 4.81 = JD 2436116.31.
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn meeus_table_dates() {
        assert_eq!(calendar_to_jd(1987, 1, 27.0), 2_446_822.5);
        assert_eq!(calendar_to_jd(1988, 6, 19.5), 2_447_332.0);
        assert_eq!(calendar_to_jd(1600, 12, 31.0), 2_305_812.5);
    }

    #[test]
    fn roundtrip_through_calendar() {
        for &jd in &[2_451_545.0, 2_436_116.31, 2_446_822.5, 2_460_000.25] {
            let (y, m, d) = jd_to_calendar(jd);
            let back = calendar_to_jd(y, m, d);
            assert!((back - jd).abs() < 1e-8, "jd {jd} -> {y}-{m}-{d} -> {back}");
        }
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
        assert!((julian_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
