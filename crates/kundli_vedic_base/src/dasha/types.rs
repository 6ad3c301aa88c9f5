//! Core types for dasha calculations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Year length used to turn fractional months into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (Pratyantardasha).
pub const MAX_DASHA_LEVEL: u8 = 2;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Create from raw u8 value, clamping anything deeper to Pratyantardasha.
    pub fn from_u8_clamped(v: u8) -> Self {
        match v {
            0 => Self::Mahadasha,
            1 => Self::Antardasha,
            _ => Self::Pratyantardasha,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period and its sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    pub level: DashaLevel,
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
    /// Length in Vimshottari years.
    pub duration_years: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// True when `at` falls in `[start, end)`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// Calendar length of the period in days.
    pub fn duration_days(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 86_400_000.0
    }
}

/// Full Vimshottari timeline from birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub birth: DateTime<Utc>,
    /// Moon's nakshatra at birth.
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra index.
    pub nakshatra_index: u8,
    /// Share of the birth nakshatra the Moon had traversed, in [0, 1).
    pub percent_elapsed: f64,
    /// Share of the first Mahadasha still to run at birth.
    pub percent_left: f64,
    /// Deepest level generated.
    pub max_level: DashaLevel,
    pub mahadashas: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// End of the last Mahadasha.
    pub fn end(&self) -> DateTime<Utc> {
        self.mahadashas.last().map_or(self.birth, |p| p.end)
    }
}
