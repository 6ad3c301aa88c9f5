//! Sidereal ephemeris provider for chart construction.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] trait the chart builder calls through
//! - [`Ephemeris`], an analytic provider that lazily loads an orbital-element
//!   table (built in, or a JSON file named in [`EphemerisConfig`])
//! - Julian dates, sidereal time, Lahiri ayanamsha and mean obliquity
//! - Keplerian planets, the Meeus lunar series and the mean lunar node
//! - Lagna and equal house cusps
//!
//! Longitudes leave the provider sidereal (Lahiri) in degrees [0, 360).

pub mod ayanamsha;
pub mod config;
pub mod elements;
pub mod error;
pub mod julian;
pub mod lagna;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod provider;
pub mod sidereal;

pub use ayanamsha::{lahiri_deg, mean_obliquity_deg};
pub use config::EphemerisConfig;
pub use elements::{ElementTable, Orbit};
pub use error::ComputationError;
pub use julian::{J2000_JD, centuries_since_j2000, jd_from_utc};
pub use lagna::{ascendant_deg, equal_house_cusps};
pub use provider::{BodyPosition, Ephemeris, EphemerisProvider, RawPositions};
