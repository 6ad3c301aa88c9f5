//! Nakshatra (lunar mansion) computation.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.

use serde::Serialize;

use crate::util::{nakshatra_index, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Nakshatra for a 1-based number; out-of-range numbers wrap.
    pub fn from_number(number: u8) -> Self {
        ALL_NAKSHATRAS[(number as usize + 26) % 27]
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based index (1 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Share of the nakshatra already traversed, in [0, 1).
    pub fraction_elapsed: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let index = nakshatra_index(lon);
    let scaled = lon * 27.0 / 360.0;
    let fraction_elapsed = (scaled - (index - 1) as f64).clamp(0.0, 1.0 - f64::EPSILON);
    let pada = ((fraction_elapsed * 4.0).floor() as u8).min(3) + 1;

    NakshatraInfo {
        nakshatra: Nakshatra::from_number(index),
        nakshatra_index: index,
        pada,
        degrees_in_nakshatra: fraction_elapsed * NAKSHATRA_SPAN,
        fraction_elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_number(n.number()), *n);
        }
    }

    #[test]
    fn names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn nakshatra_at_0() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 1);
        assert_eq!(info.pada, 1);
        assert!(info.fraction_elapsed.abs() < 1e-12);
    }

    #[test]
    fn forty_degrees_is_rohini() {
        let info = nakshatra_from_longitude(40.0);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.nakshatra_index, 4);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn padas_advance_every_quarter() {
        let base = 3.0 * NAKSHATRA_SPAN;
        for p in 0..4 {
            let info = nakshatra_from_longitude(base + (p as f64 + 0.5) * PADA_SPAN);
            assert_eq!(info.pada, p + 1, "pada {p}");
        }
    }

    #[test]
    fn midpoint_is_half_elapsed() {
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN / 2.0);
        assert!((info.fraction_elapsed - 0.5).abs() < 1e-12);
    }

    #[test]
    fn last_and_wrap() {
        assert_eq!(nakshatra_from_longitude(359.99).nakshatra, Nakshatra::Revati);
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }
}
