//! End-to-end chart scenarios against known sky configurations.

use natal_chart::{
    BirthMoment, ChartError, CivilInstant, Constellation, Engine, Sign, compute_chart,
    sun_resolutions,
};

const CURRENT_YEAR: i32 = 2026;

fn birth(
    y: i32,
    mo: u32,
    d: u32,
    h: u32,
    mi: u32,
    lat: f64,
    lon: f64,
) -> BirthMoment {
    BirthMoment::new(CivilInstant::new(y, mo, d, h, mi, 0.0), lat, lon)
}

#[test]
fn millennium_greenwich_equator() {
    // 2000-01-01 00:00, 0°N 0°E.
    let snapshot =
        compute_chart(&Engine::new(), &birth(2000, 1, 1, 0, 0, 0.0, 0.0), CURRENT_YEAR).unwrap();

    // Sun: tropical Capricorn, behind the stars of Sagittarius.
    assert_eq!(snapshot.sun.position.sign.sign, Sign::Capricorn);
    assert!((snapshot.sun.position.longitude_deg - 279.86).abs() < 0.05);
    assert_eq!(
        snapshot.sun.at_birth.constellation,
        Constellation::Sagittarius
    );

    // Anchor lands on Jan 1 of the current year: still Sagittarius.
    assert_eq!(
        snapshot.sun.star_aligned.constellation,
        Constellation::Sagittarius
    );

    // Ascendant: early Libra rising, in front of Virgo's stars.
    assert_eq!(snapshot.ascendant.sign.sign, Sign::Libra);
    assert!(
        (snapshot.ascendant.longitude_deg - 190.84).abs() < 0.3,
        "Asc = {}",
        snapshot.ascendant.longitude_deg
    );
    assert_eq!(
        snapshot.ascendant_constellation.constellation,
        Constellation::Virgo
    );

    // Midheaven roughly 90° behind the Ascendant.
    let diff = (snapshot.ascendant.longitude_deg - snapshot.midheaven_deg).rem_euclid(360.0);
    assert!((60.0..120.0).contains(&diff), "Asc-MC = {diff}");
}

#[test]
fn meeus_moon_epoch_leo_over_cancer() {
    // 1992-04-12 00:00: the Moon sits at tropical Leo 13°, in front of
    // the stars of Cancer. The one-slot offset between the two zodiacs
    // is the whole point of the star-aligned mode.
    let snapshot =
        compute_chart(&Engine::new(), &birth(1992, 4, 12, 0, 0, 0.0, 0.0), CURRENT_YEAR).unwrap();
    assert_eq!(snapshot.moon.sign.sign, Sign::Leo);
    assert!(
        (snapshot.moon.longitude_deg - 133.17).abs() < 0.01,
        "λ = {}",
        snapshot.moon.longitude_deg
    );
    assert_eq!(
        snapshot.moon_constellation.constellation,
        Constellation::Cancer
    );
}

#[test]
fn december_birthday_is_ophiuchus_star_aligned() {
    // Sun on Dec 10: tropical Sagittarius, but the IAU boundaries put
    // it in Ophiuchus (Nov 30 - Dec 18).
    let sun = sun_resolutions(
        &Engine::new(),
        &birth(1990, 12, 10, 12, 0, 48.85, 2.35),
        CURRENT_YEAR,
    )
    .unwrap();
    assert_eq!(sun.position.sign.sign, Sign::Sagittarius);
    assert_eq!(sun.at_birth.constellation, Constellation::Ophiuchus);
    assert_eq!(sun.star_aligned.constellation, Constellation::Ophiuchus);
}

#[test]
fn leap_day_birth_with_non_leap_current_year() {
    // Feb 29 birth, non-leap current year: the anchor clamps to
    // Feb 28 and the computation completes.
    let sun = sun_resolutions(
        &Engine::new(),
        &birth(2000, 2, 29, 6, 0, 52.52, 13.405),
        2025,
    )
    .unwrap();
    // Tropical Pisces over the stars of Aquarius.
    assert_eq!(sun.position.sign.sign, Sign::Pisces);
    assert_eq!(sun.at_birth.constellation, Constellation::Aquarius);
    assert_eq!(sun.star_aligned.constellation, Constellation::Aquarius);
}

#[test]
fn poles_rejected_before_provider() {
    for lat in [90.0, -90.0] {
        let err = compute_chart(
            &Engine::new(),
            &birth(2000, 1, 1, 0, 0, lat, 0.0),
            CURRENT_YEAR,
        )
        .unwrap_err();
        assert!(
            matches!(err, ChartError::Validation { field: "latitude", .. }),
            "lat {lat}: got {err:?}"
        );
    }
}

#[test]
fn snapshots_deterministic_for_identical_inputs() {
    let engine = Engine::new();
    let b = birth(1969, 7, 20, 20, 17, 28.45, -80.53);
    let a = compute_chart(&engine, &b, CURRENT_YEAR).unwrap();
    let c = compute_chart(&engine, &b, CURRENT_YEAR).unwrap();
    assert_eq!(a, c);
}

#[test]
fn boundary_longitude_classifies_upward() {
    // Floor-boundary convention: exactly 30.0° is Taurus.
    let p = natal_chart::sign_from_longitude(30.0);
    assert_eq!(p.sign, Sign::Taurus);
    assert_eq!(p.slice_index, 1);
}

#[test]
fn out_of_window_epoch_surfaces_as_provider_failure() {
    let err = compute_chart(
        &Engine::new(),
        &birth(500, 1, 1, 0, 0, 0.0, 0.0),
        CURRENT_YEAR,
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::Engine(_)), "got {err:?}");
}
