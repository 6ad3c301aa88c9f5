//! Approximate sunrise/sunset in local civil time.
//!
//! Uses the cosine-law declination approximation and the geometric
//! hour angle of the Sun's centre. Accuracy is a few minutes at mid
//! latitudes, which is what a panchang snapshot needs.

use std::fmt::{Display, Formatter};

use log::warn;
use serde::{Serialize, Serializer};

use crate::geo::GeoLocation;

/// Maximum solar declination (obliquity) used by the approximation.
const MAX_DECLINATION_DEG: f64 = 23.44;

/// Day of year of the March equinox in the approximation.
const EQUINOX_DAY: f64 = 81.0;

/// A wall-clock time of day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Build from fractional hours; any value is wrapped into [0, 24).
    pub fn from_hours(hours: f64) -> Self {
        let total = (hours.rem_euclid(24.0) * 60.0).round() as u32 % 1440;
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }

    /// Minutes after local midnight.
    pub fn minutes_of_day(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Why the hour-angle equation had no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolarCondition {
    /// Sun stays above the horizon; reported day spans 24 h.
    MidnightSun,
    /// Sun stays below the horizon; reported day has zero length.
    PolarNight,
}

/// Sunrise and sunset for one local date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarDay {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    /// Set when the latitude forced the hour angle to be clamped.
    pub polar: Option<PolarCondition>,
}

/// Approximate solar declination in degrees for a 1-based day of year.
pub fn solar_declination_deg(day_of_year: u32) -> f64 {
    MAX_DECLINATION_DEG * (360.0 / 365.0 * (day_of_year as f64 - EQUINOX_DAY)).to_radians().sin()
}

/// Sunrise and sunset in local civil time at a fixed UTC offset.
pub fn sunrise_sunset(day_of_year: u32, geo: &GeoLocation, utc_offset_minutes: i32) -> SolarDay {
    let dec = solar_declination_deg(day_of_year).to_radians();
    let cos_h = -geo.latitude_rad().tan() * dec.tan();

    let polar = if cos_h < -1.0 {
        Some(PolarCondition::MidnightSun)
    } else if cos_h > 1.0 {
        Some(PolarCondition::PolarNight)
    } else {
        None
    };
    if let Some(condition) = polar {
        warn!(
            "hour angle clamped at latitude {:.3} on day {day_of_year}: {condition:?}",
            geo.latitude_deg()
        );
    }

    let half_day_hours = cos_h.clamp(-1.0, 1.0).acos().to_degrees() / 15.0;
    let noon_utc = 12.0 - geo.longitude_deg() / 15.0;
    let offset_hours = utc_offset_minutes as f64 / 60.0;

    SolarDay {
        sunrise: ClockTime::from_hours(noon_utc - half_day_hours + offset_hours),
        sunset: ClockTime::from_hours(noon_utc + half_day_hours + offset_hours),
        polar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IST: i32 = 330;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090).unwrap()
    }

    #[test]
    fn clock_time_wraps_and_formats() {
        assert_eq!(ClockTime::from_hours(-0.5).to_string(), "23:30");
        assert_eq!(ClockTime::from_hours(24.25).to_string(), "00:15");
        assert_eq!(ClockTime::from_hours(5.0 + 59.999 / 60.0).to_string(), "06:00");
        assert_eq!(ClockTime::from_hours(23.9999).to_string(), "00:00");
    }

    #[test]
    fn declination_extremes() {
        assert!(solar_declination_deg(81).abs() < 1e-9);
        assert!((solar_declination_deg(172) - 23.44).abs() < 0.05);
        assert!((solar_declination_deg(355) + 23.44).abs() < 0.1);
    }

    #[test]
    fn delhi_summer_solstice() {
        let day = sunrise_sunset(172, &delhi(), IST);
        assert!(day.polar.is_none());
        // observed ~05:23 / ~19:22 IST; geometric centre is a few minutes later/earlier
        assert_eq!(day.sunrise.hour, 5);
        assert!((20..=35).contains(&day.sunrise.minute), "{}", day.sunrise);
        assert_eq!(day.sunset.hour, 19);
    }

    #[test]
    fn equinox_day_is_twelve_hours() {
        let day = sunrise_sunset(81, &delhi(), IST);
        let len = day.sunset.minutes_of_day() - day.sunrise.minutes_of_day();
        assert!((718..=722).contains(&len), "{len}");
    }

    #[test]
    fn equator_ignores_season() {
        let geo = GeoLocation::new(0.0, 0.0).unwrap();
        let day = sunrise_sunset(172, &geo, 0);
        assert_eq!(day.sunrise.to_string(), "06:00");
        assert_eq!(day.sunset.to_string(), "18:00");
    }

    #[test]
    fn arctic_summer_is_midnight_sun() {
        let geo = GeoLocation::new(78.22, 15.65).unwrap();
        let day = sunrise_sunset(172, &geo, 60);
        assert_eq!(day.polar, Some(PolarCondition::MidnightSun));
        let night = sunrise_sunset(355, &geo, 60);
        assert_eq!(night.polar, Some(PolarCondition::PolarNight));
        assert_eq!(night.sunrise, night.sunset);
    }

    #[test]
    fn clock_time_serializes_as_string() {
        let json = serde_json::to_string(&ClockTime::from_hours(6.5)).unwrap();
        assert_eq!(json, "\"06:30\"");
    }
}
