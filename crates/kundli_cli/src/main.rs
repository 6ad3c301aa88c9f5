use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use kundli_rs::{
    Chart, ChartConfig, Division, Ephemeris, EphemerisConfig, GeoLocation, compute_chart,
    compute_dasha, compute_match, current_dasha,
};
use kundli_vedic_base::{
    Rashi, divisional_longitude, divisional_sign, nakshatra_from_longitude, rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic chart, dasha and Guna Milan CLI")]
struct Cli {
    /// JSON config file with `ephemeris` and `chart` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Orbital-element table overriding the built-in one
    #[arg(long, global = true)]
    elements: Option<PathBuf>,
    /// Local UTC offset in minutes for panchang output (default 330)
    #[arg(long, global = true, allow_negative_numbers = true)]
    utc_offset: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

/// Birth moment and place.
#[derive(Args, Clone)]
struct Birth {
    /// UTC datetime (RFC 3339, e.g. 1990-03-15T01:00:00Z)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart as JSON
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Ashtakoot Guna Milan between two births
    Match {
        /// Boy's UTC datetime
        #[arg(long)]
        boy_date: String,
        #[arg(long, allow_negative_numbers = true)]
        boy_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        boy_lon: f64,
        /// Girl's UTC datetime
        #[arg(long)]
        girl_date: String,
        #[arg(long, allow_negative_numbers = true)]
        girl_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        girl_lon: f64,
    },
    /// Vimshottari dasha timeline
    Dasha {
        #[command(flatten)]
        birth: Birth,
        /// Depth: 0 Mahadasha, 1 Antardasha, 2 Pratyantardasha
        #[arg(long, default_value = "1")]
        level: u8,
        /// Only print the periods active at this UTC datetime
        #[arg(long)]
        at: Option<String>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Divisional sign of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Division: D1, D9, D10, D16, D20, D24 or D60
        #[arg(long, default_value = "D9")]
        division: Division,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    ephemeris: EphemerisConfig,
    chart: ChartConfig,
}

#[derive(Serialize)]
struct VargaOutput {
    division: &'static str,
    sanskrit_name: &'static str,
    sign_index: u8,
    rashi: Rashi,
    longitude: f64,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_utc(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 datetime like 1990-03-15T01:00:00Z, got {s}: {e}"))
}

fn require_utc(s: &str) -> DateTime<Utc> {
    parse_utc(s).unwrap_or_else(|e| fail(e))
}

fn require_geo(lat: f64, lon: f64) -> GeoLocation {
    GeoLocation::new(lat, lon).unwrap_or_else(|e| fail(format!("Invalid location: {e}")))
}

fn load_config(path: Option<&Path>) -> FileConfig {
    let Some(path) = path else {
        return FileConfig::default();
    };
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read config {}: {e}", path.display())));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| fail(format!("Invalid config {}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

struct Context {
    ephemeris: Ephemeris,
    chart: ChartConfig,
}

impl Context {
    fn new(cli: &Cli) -> Self {
        let mut file = load_config(cli.config.as_deref());
        if let Some(path) = &cli.elements {
            file.ephemeris.elements_path = Some(path.clone());
        }
        if let Some(offset) = cli.utc_offset {
            file.chart.panchang.utc_offset_minutes = offset;
        }
        log::debug!("ephemeris {:?}, chart {:?}", file.ephemeris, file.chart);
        let ephemeris = Ephemeris::new(file.ephemeris)
            .unwrap_or_else(|e| fail(format!("Failed to set up ephemeris: {e}")));
        Self {
            ephemeris,
            chart: file.chart,
        }
    }

    fn chart(&self, date: &str, lat: f64, lon: f64) -> Chart {
        let instant = require_utc(date);
        let geo = require_geo(lat, lon);
        compute_chart(&self.ephemeris, instant, &geo, &self.chart)
            .unwrap_or_else(|e| fail(format!("Chart computation failed: {e}")))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Rashi { lon } => print_json(&rashi_from_longitude(*lon)),

        Commands::Nakshatra { lon } => print_json(&nakshatra_from_longitude(*lon)),

        Commands::Varga { lon, division } => {
            let sign = divisional_sign(*lon, *division);
            print_json(&VargaOutput {
                division: division.name(),
                sanskrit_name: division.sanskrit_name(),
                sign_index: sign,
                rashi: Rashi::from_number(sign),
                longitude: divisional_longitude(*lon, *division),
            });
        }

        Commands::Chart { birth } => {
            let ctx = Context::new(&cli);
            print_json(&ctx.chart(&birth.date, birth.lat, birth.lon));
        }

        Commands::Match {
            boy_date,
            boy_lat,
            boy_lon,
            girl_date,
            girl_lat,
            girl_lon,
        } => {
            let ctx = Context::new(&cli);
            let boy = ctx.chart(boy_date, *boy_lat, *boy_lon);
            let girl = ctx.chart(girl_date, *girl_lat, *girl_lon);
            print_json(&compute_match(&boy, &girl));
        }

        Commands::Dasha { birth, level, at } => {
            let ctx = Context::new(&cli);
            let chart = ctx.chart(&birth.date, birth.lat, birth.lon);
            let timeline = compute_dasha(&chart, *level);
            match at {
                Some(at) => print_json(&current_dasha(&timeline, require_utc(at))),
                None => print_json(&timeline),
            }
        }
    }
}
