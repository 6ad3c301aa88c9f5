//! Panchang: tithi, paksha, yoga, karana and vara for one instant.
//!
//! Tithi and karana come from the Moon-Sun elongation, yoga from the sum
//! of the two longitudes. Vara is the weekday of the local civil date at
//! the configured UTC offset.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::geo::GeoLocation;
use crate::riseset::{ClockTime, PolarCondition, sunrise_sunset};
use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Elongation covered by one karana (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Longitude sum covered by one yoga.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Indian Standard Time, the default civil offset.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

/// Tithi names. The first fourteen repeat in both pakshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const PAKSHA_TITHIS: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    /// Tithi for a 1-based index in 1..=30; out-of-range indices wrap.
    pub fn from_index(index: u8) -> Self {
        match (index as usize + 29) % 30 + 1 {
            15 => Self::Purnima,
            30 => Self::Amavasya,
            i if i < 15 => PAKSHA_TITHIS[i - 1],
            i => PAKSHA_TITHIS[i - 16],
        }
    }
}

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

/// The 11 karanas: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Karana for a 1-based sequence index in 1..=60 within the synodic month.
    ///
    /// Index 1 is Kimstughna, 2..=57 cycle the movable karanas, and the
    /// last three are Shakuni, Chatushpada and Naga.
    pub fn from_index(index: u8) -> Self {
        match (index as usize + 59) % 60 + 1 {
            1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60 => Self::Naga,
            i => MOVABLE_KARANAS[(i - 2) % 7],
        }
    }
}

/// Weekday, 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

/// Configuration for panchang computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    /// Fixed offset of local civil time from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl PanchangConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-14 * 60..=14 * 60).contains(&self.utc_offset_minutes) {
            return Err(VedicError::InvalidInput(
                "utc_offset_minutes must be within +/-14 hours",
            ));
        }
        Ok(())
    }

    /// Local civil date of a UTC instant.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        (instant + Duration::minutes(self.utc_offset_minutes as i64)).date_naive()
    }
}

/// Panchang snapshot for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panchang {
    /// 1-based tithi index (1..=30).
    pub tithi_index: u8,
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-based yoga index (1..=27).
    pub yoga_index: u8,
    pub yoga: Yoga,
    /// 1-based karana index (1..=60).
    pub karana_index: u8,
    pub karana: Karana,
    /// Weekday, 0 = Sunday.
    pub vara_index: u8,
    pub vara: Vaar,
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<PolarCondition>,
}

fn elongation(sun_lon: f64, moon_lon: f64) -> f64 {
    normalize_360(moon_lon - sun_lon)
}

/// 1-based tithi index from Sun and Moon sidereal longitudes.
pub fn tithi_index(sun_lon: f64, moon_lon: f64) -> u8 {
    ((elongation(sun_lon, moon_lon) / TITHI_SEGMENT_DEG).floor() as u8 + 1).min(30)
}

pub fn paksha_of(tithi_index: u8) -> Paksha {
    if tithi_index <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// 1-based yoga index from Sun and Moon sidereal longitudes.
pub fn yoga_index(sun_lon: f64, moon_lon: f64) -> u8 {
    let sum = normalize_360(moon_lon + sun_lon);
    ((sum * 27.0 / 360.0).floor() as u8 + 1).min(27)
}

/// 1-based karana index from Sun and Moon sidereal longitudes.
pub fn karana_index(sun_lon: f64, moon_lon: f64) -> u8 {
    ((elongation(sun_lon, moon_lon) / KARANA_SEGMENT_DEG).floor() as u8 + 1).min(60)
}

/// Weekday of a civil date, 0 = Sunday.
pub fn vara_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Compute the panchang for an instant and location.
pub fn compute_panchang(
    sun_lon: f64,
    moon_lon: f64,
    instant: DateTime<Utc>,
    geo: &GeoLocation,
    config: &PanchangConfig,
) -> Panchang {
    let tithi_index = tithi_index(sun_lon, moon_lon);
    let yoga_index = yoga_index(sun_lon, moon_lon);
    let karana_index = karana_index(sun_lon, moon_lon);
    let local_date = config.local_date(instant);
    let vara_index = vara_index(local_date);
    let day = sunrise_sunset(local_date.ordinal(), geo, config.utc_offset_minutes);

    Panchang {
        tithi_index,
        tithi: Tithi::from_index(tithi_index),
        paksha: paksha_of(tithi_index),
        yoga_index,
        yoga: ALL_YOGAS[yoga_index as usize - 1],
        karana_index,
        karana: Karana::from_index(karana_index),
        vara_index,
        vara: ALL_VAARS[vara_index as usize],
        sunrise: day.sunrise,
        sunset: day.sunset,
        polar: day.polar,
    }
}
