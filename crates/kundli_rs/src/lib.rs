//! Vedic birth charts on top of the kundli ephemeris.
//!
//! The entry points take an explicit provider handle; nothing here holds
//! global state.
//!
//! ```rust,ignore
//! use kundli_rs::*;
//!
//! let eph = Ephemeris::new(EphemerisConfig::default())?;
//! let geo = GeoLocation::new(28.6139, 77.2090)?;
//! let chart = compute_chart(&eph, instant, &geo, &ChartConfig::default())?;
//! let dasha = compute_dasha(&chart, 1);
//! let now = current_dasha(&dasha, Utc::now());
//! ```

pub mod chart;
pub mod config;
pub mod dasha;
pub mod matching;

pub use chart::{Chart, PlanetPosition, compute_chart};
pub use config::ChartConfig;
pub use dasha::{compute_dasha, current_dasha};
pub use matching::{compute_match, moon_placement};

// Re-export the types callers need so they can depend on this crate alone.
pub use kundli_ephemeris::{
    BodyPosition, ComputationError, Ephemeris, EphemerisConfig, EphemerisProvider, RawPositions,
};
pub use kundli_vedic_base::{
    AshtakootFactor, AshtakootResult, Body, DashaLevel, DashaPeriod, DashaTimeline, Division,
    DivisionalSigns, DoshaKind, DoshaResult, GeoLocation, Graha, Koota, MatchVerdict, Nakshatra,
    Panchang, PanchangConfig, Rashi, SadeSatiPhase, YogaKind, YogaResult,
};
