//! Amsha (divisional chart / varga chart) calculations.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. The target for part 0 depends on the
//! division and on the element (or parity) of the natal rashi; later parts
//! count forward one sign at a time.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::VedicError;
use crate::rashi::{Rashi, RashiElement};
use crate::util::{SIGN_SPAN, normalize_360, sign_index};

/// The supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Division {
    D1,
    D9,
    D10,
    D16,
    D20,
    D24,
    D60,
}

/// All supported divisions in order.
pub const ALL_DIVISIONS: [Division; 7] = [
    Division::D1,
    Division::D9,
    Division::D10,
    Division::D16,
    Division::D20,
    Division::D24,
    Division::D60,
];

impl Division {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D60 => 60,
        }
    }

    /// Display name, e.g. `D9`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D16 => "D16",
            Self::D20 => "D20",
            Self::D24 => "D24",
            Self::D60 => "D60",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// 0-based index into ALL_DIVISIONS.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Option<Division> {
        ALL_DIVISIONS.iter().copied().find(|d| d.divisions() == code)
    }
}

impl Display for Division {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Division {
    type Err = VedicError;

    /// Accepts `D9`, `d9` or `9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('D')
            .or_else(|| s.strip_prefix('d'))
            .unwrap_or(s);
        digits
            .parse::<u16>()
            .ok()
            .and_then(Division::from_code)
            .ok_or(VedicError::InvalidInput("unsupported division"))
    }
}

/// 0-based rashi that part 0 of the division maps to.
fn start_rashi(division: Division, natal: Rashi) -> u8 {
    let natal_idx = natal.index();
    match division {
        Division::D1 => natal_idx,
        Division::D9 | Division::D60 => match natal.element() {
            RashiElement::Fire => 0,  // Mesha
            RashiElement::Earth => 9, // Makara
            RashiElement::Air => 6,   // Tula
            RashiElement::Water => 3, // Karka
        },
        Division::D10 => {
            if natal.is_odd() {
                natal_idx
            } else {
                (natal_idx + 8) % 12
            }
        }
        Division::D16 => match natal.element() {
            RashiElement::Fire => 0,  // Mesha
            RashiElement::Earth => 4, // Simha
            RashiElement::Air => 8,   // Dhanu
            RashiElement::Water => 0, // Mesha
        },
        Division::D20 => match natal.element() {
            RashiElement::Fire => 0,  // Mesha
            RashiElement::Earth => 8, // Dhanu
            RashiElement::Air => 4,   // Simha
            RashiElement::Water => 0, // Mesha
        },
        Division::D24 => {
            if natal.is_odd() {
                4 // Simha
            } else {
                3 // Karka
            }
        }
    }
}

/// Natal rashi and 0-based part index of a longitude.
fn natal_and_part(lon: f64, division: Division) -> (Rashi, u16, f64) {
    let lon = normalize_360(lon);
    let natal = Rashi::from_number(sign_index(lon));
    let pos_in_rashi = (lon - natal.index() as f64 * SIGN_SPAN).clamp(0.0, SIGN_SPAN);
    let n = division.divisions();
    let part = ((pos_in_rashi * n as f64 / SIGN_SPAN).floor() as u16).min(n - 1);
    (natal, part, pos_in_rashi)
}

/// 1-based sign index of a sidereal longitude in the given divisional chart.
pub fn divisional_sign(sidereal_lon: f64, division: Division) -> u8 {
    let (natal, part, _) = natal_and_part(sidereal_lon, division);
    let start = start_rashi(division, natal) as u16;
    ((start + part) % 12) as u8 + 1
}

/// Sidereal longitude of the point inside its divisional chart, in [0, 360).
///
/// The position inside the part is stretched back to a full 30 degrees.
pub fn divisional_longitude(sidereal_lon: f64, division: Division) -> f64 {
    let (_, part, pos_in_rashi) = natal_and_part(sidereal_lon, division);
    let deg_per_part = SIGN_SPAN / division.divisions() as f64;
    let scaled = (pos_in_rashi - part as f64 * deg_per_part) / deg_per_part * SIGN_SPAN;
    let target = divisional_sign(sidereal_lon, division) - 1;
    normalize_360(target as f64 * SIGN_SPAN + scaled)
}

/// Sign of one longitude in every supported division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionalSigns {
    signs: [u8; 7],
}

impl DivisionalSigns {
    pub fn from_longitude(sidereal_lon: f64) -> Self {
        let mut signs = [1u8; 7];
        for d in ALL_DIVISIONS {
            signs[d.index()] = divisional_sign(sidereal_lon, d);
        }
        Self { signs }
    }

    /// 1-based sign index in `division`.
    pub fn get(&self, division: Division) -> u8 {
        self.signs[division.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Division, u8)> + '_ {
        ALL_DIVISIONS.iter().map(|d| (*d, self.get(*d)))
    }
}

impl Serialize for DivisionalSigns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_DIVISIONS.len()))?;
        for (d, sign) in self.iter() {
            map.serialize_entry(d.name(), &sign)?;
        }
        map.end()
    }
}
