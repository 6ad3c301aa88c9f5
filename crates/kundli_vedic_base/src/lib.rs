//! Pure Vedic chart mathematics.
//!
//! This crate provides:
//! - Rashi, nakshatra and graha primitives with 1-based index helpers
//! - Divisional (varga) chart mapping for D1, D9, D10, D16, D20, D24 and D60
//! - Panchang elements and approximate sunrise/sunset
//! - Dosha and yoga rule engines over sign/house placements
//! - Vimshottari dasha trees
//! - Ashtakoot Guna Milan scoring
//!
//! Nothing here touches an ephemeris; every function is a pure mapping from
//! longitudes, instants and locations.

pub mod amsha;
pub mod dasha;
pub mod dignity;
pub mod dosha;
pub mod error;
pub mod geo;
pub mod graha;
pub mod milan;
pub mod nakshatra;
pub mod panchang;
pub mod placement;
pub mod rashi;
pub mod riseset;
pub mod util;
pub mod yoga;

pub use amsha::{ALL_DIVISIONS, Division, DivisionalSigns, divisional_longitude, divisional_sign};
pub use dasha::{
    DashaLevel, DashaPeriod, DashaTimeline, current_periods, vimshottari_from_nakshatra,
    vimshottari_timeline,
};
pub use dignity::{exaltation_rashi, is_own_or_exalted, own_signs};
pub use dosha::{DoshaKind, DoshaResult, SadeSatiPhase, detect_doshas};
pub use error::VedicError;
pub use geo::GeoLocation;
pub use graha::{ALL_BODIES, ALL_GRAHAS, Body, Graha, rashi_lord};
pub use milan::{AshtakootFactor, AshtakootResult, Koota, MatchVerdict, MoonPlacement, ashtakoot};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use panchang::{Panchang, PanchangConfig, Paksha, compute_panchang};
pub use placement::{Placement, Placements};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, rashi_from_longitude};
pub use riseset::{ClockTime, PolarCondition, SolarDay, sunrise_sunset};
pub use util::{
    house_index, nakshatra_index, normalize_360, sign_index, signs_ahead, wrap_house_index,
    wrap_nakshatra_index, wrap_sign_index,
};
pub use yoga::{YogaKind, YogaResult, detect_yogas, evaluate_yogas};
