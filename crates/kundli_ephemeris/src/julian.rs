//! Julian Date conversions for UTC instants.
//!
//! The provider works directly on UTC Julian Dates. The difference between
//! UTC and the dynamical time scale (under two minutes across the supported
//! span of modern dates) is below the resolution the chart needs.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of a UTC instant, millisecond precision.
pub fn jd_from_utc(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
