use clap::{Parser, Subcommand};
use natal_chart::{
    BirthMoment, ChartSnapshot, CivilInstant, ConstellationLabel, EclipticPosition, Engine,
    compute_chart, local_sidereal_hours, midheaven_longitude_deg, sign_from_longitude,
    sun_resolutions,
};
use natal_core::{Ephemeris, constellation_at_equatorial};
use natal_time::jd_to_calendar;

#[derive(Parser)]
#[command(name = "natal", about = "Birth chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: Sun, Moon, Ascendant with signs and constellations
    Chart {
        /// Birth instant (YYYY-MM-DDTHH:MM[:SS], wall clock)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Current year for the star-aligned Sun label (defaults to
        /// the system clock)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Sun only: tropical sign plus both constellation resolutions
    Sun {
        /// Birth instant (YYYY-MM-DDTHH:MM[:SS], wall clock)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Current year for the star-aligned label
        #[arg(long)]
        year: Option<i32>,
    },
    /// Ascendant and Midheaven for an instant and location
    Ascendant {
        /// Instant (YYYY-MM-DDTHH:MM[:SS], wall clock)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
    /// Tropical sign for an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// IAU constellation behind an equatorial position
    Constellation {
        /// Right ascension in hours
        ra: f64,
        /// Declination in degrees
        dec: f64,
    },
}

/// Calendar year right now, from the system clock. The only clock read
/// in the whole pipeline; everything below takes the year as data.
fn current_year() -> i32 {
    const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    let (year, _, _) = jd_to_calendar(UNIX_EPOCH_JD + secs / 86_400.0);
    year
}

fn parse_birth(date: &str, lat: f64, lon: f64) -> BirthMoment {
    let instant: CivilInstant = match date.parse() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Invalid date '{date}': {e}");
            std::process::exit(1);
        }
    };
    BirthMoment::new(instant, lat, lon)
}

fn print_position(label: &str, p: &EclipticPosition) {
    println!(
        "{label}: {} {} deg {} min {:.1} sec ({:.4} deg ecliptic)",
        p.sign.sign.name(),
        p.sign.dms.degrees,
        p.sign.dms.minutes,
        p.sign.dms.seconds,
        p.longitude_deg
    );
}

fn print_label(label: &str, c: &ConstellationLabel) {
    println!(
        "{label}: {} ({}) at RA {:.3} h, Dec {:+.2} deg",
        c.name(),
        c.abbreviation(),
        c.ra_hours,
        c.dec_deg
    );
}

fn print_chart(snapshot: &ChartSnapshot) {
    print_position("Sun", &snapshot.sun.position);
    print_label("  constellation at birth", &snapshot.sun.at_birth);
    print_label("  constellation star-aligned", &snapshot.sun.star_aligned);
    print_position("Moon", &snapshot.moon);
    print_label("  constellation at birth", &snapshot.moon_constellation);
    print_position("Ascendant", &snapshot.ascendant);
    print_label("  constellation at birth", &snapshot.ascendant_constellation);
    let mc = sign_from_longitude(snapshot.midheaven_deg);
    println!(
        "Midheaven: {} {:.4} deg ({:.4} deg ecliptic)",
        mc.sign.name(),
        mc.degrees_in_sign,
        snapshot.midheaven_deg
    );
}

fn main() {
    let cli = Cli::parse();
    let engine = Engine::new();

    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            year,
        } => {
            let birth = parse_birth(&date, lat, lon);
            let year = year.unwrap_or_else(current_year);
            match compute_chart(&engine, &birth, year) {
                Ok(snapshot) => print_chart(&snapshot),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sun {
            date,
            lat,
            lon,
            year,
        } => {
            let birth = parse_birth(&date, lat, lon);
            let year = year.unwrap_or_else(current_year);
            match sun_resolutions(&engine, &birth, year) {
                Ok(sun) => {
                    print_position("Sun", &sun.position);
                    print_label("  constellation at birth", &sun.at_birth);
                    print_label("  constellation star-aligned", &sun.star_aligned);
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Ascendant { date, lat, lon } => {
            let birth = parse_birth(&date, lat, lon);
            if let Err(e) = birth.validate() {
                eprintln!("{e}");
                std::process::exit(1);
            }
            let jd = birth.instant.to_jd();
            let gast = match engine.sidereal_time_hours(jd) {
                Ok(h) => h,
                Err(e) => {
                    eprintln!("provider error: {e}");
                    std::process::exit(1);
                }
            };
            let lst = local_sidereal_hours(gast, lon);
            let asc = natal_chart::ascendant_longitude_deg(lst, lat);
            let asc_sign = sign_from_longitude(asc);
            println!("LST: {lst:.4} h");
            println!(
                "Ascendant: {} {:.4} deg ({:.4} deg ecliptic)",
                asc_sign.sign.name(),
                asc_sign.degrees_in_sign,
                asc
            );
            let mc = midheaven_longitude_deg(lst);
            println!(
                "Midheaven: {} ({:.4} deg ecliptic)",
                sign_from_longitude(mc).sign.name(),
                mc
            );
        }

        Commands::Sign { lon } => {
            let p = sign_from_longitude(lon);
            println!(
                "{} (slice {}) - {} deg {} min {:.1} sec",
                p.sign.name(),
                p.slice_index,
                p.dms.degrees,
                p.dms.minutes,
                p.dms.seconds
            );
        }

        Commands::Constellation { ra, dec } => {
            let c = constellation_at_equatorial(ra, dec);
            println!("{} ({})", c.name(), c.abbreviation());
        }
    }
}
