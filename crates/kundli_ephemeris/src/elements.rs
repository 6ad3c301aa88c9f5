//! Orbital-element table backing the planetary theory.
//!
//! A table is a JSON document holding a validity span in UTC Julian Dates
//! and, for each orbit, six Keplerian elements as `[value_at_j2000,
//! rate_per_century]` pairs: semi-major axis `a` (au), eccentricity `e`,
//! inclination `i`, mean longitude `l`, longitude of perihelion `peri` and
//! longitude of the ascending node `node` (all angles in degrees, J2000
//! ecliptic and equinox). The built-in table is compiled into the crate.

use std::path::Path;

use serde::Deserialize;

use crate::error::ComputationError;

const BUILTIN_TABLE: &str = include_str!("../data/elements.json");

/// Heliocentric orbits present in an element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Every orbit a table must carry, in storage order.
pub const ALL_ORBITS: [Orbit; 9] = [
    Orbit::Mercury,
    Orbit::Venus,
    Orbit::EarthMoonBarycenter,
    Orbit::Mars,
    Orbit::Jupiter,
    Orbit::Saturn,
    Orbit::Uranus,
    Orbit::Neptune,
    Orbit::Pluto,
];

impl Orbit {
    /// Key used in the JSON table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::EarthMoonBarycenter => "EarthMoonBarycenter",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Elements of one orbit with their secular rates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OrbitalElements {
    pub a: [f64; 2],
    pub e: [f64; 2],
    pub i: [f64; 2],
    pub l: [f64; 2],
    pub peri: [f64; 2],
    pub node: [f64; 2],
}

/// Elements evaluated at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub perihelion_deg: f64,
    pub node_deg: f64,
}

impl OrbitalElements {
    /// Evaluate the linear element model at `t` centuries since J2000.0.
    pub fn at(&self, t: f64) -> MeanElements {
        let eval = |pair: [f64; 2]| pair[0] + pair[1] * t;
        MeanElements {
            semi_major_axis_au: eval(self.a),
            eccentricity: eval(self.e),
            inclination_deg: eval(self.i),
            mean_longitude_deg: eval(self.l),
            perihelion_deg: eval(self.peri),
            node_deg: eval(self.node),
        }
    }

    fn values(&self) -> [f64; 12] {
        [
            self.a[0], self.a[1], self.e[0], self.e[1], self.i[0], self.i[1], self.l[0], self.l[1],
            self.peri[0], self.peri[1], self.node[0], self.node[1],
        ]
    }
}

#[derive(Deserialize)]
struct RawEntry {
    name: String,
    #[serde(flatten)]
    elements: OrbitalElements,
}

#[derive(Deserialize)]
struct RawTable {
    valid_from_jd: f64,
    valid_to_jd: f64,
    bodies: Vec<RawEntry>,
}

/// Validated element table.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    valid_from_jd: f64,
    valid_to_jd: f64,
    orbits: [OrbitalElements; 9],
}

impl ElementTable {
    /// The table compiled into the crate, valid 1800-01-01 to 2050-01-01 UTC.
    ///
    /// Its linear rates are a fit over that window only; longer spans need a
    /// table with the extra correction terms, loaded via [`ElementTable::load`].
    pub fn builtin() -> Result<Self, ComputationError> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Read and validate a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ComputationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ComputationError::EphemerisUnavailable(format!("{}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse and validate a table from JSON text.
    pub fn parse(content: &str) -> Result<Self, ComputationError> {
        let raw: RawTable = serde_json::from_str(content)
            .map_err(|e| ComputationError::EphemerisUnavailable(format!("element table: {e}")))?;

        if !raw.valid_from_jd.is_finite()
            || !raw.valid_to_jd.is_finite()
            || raw.valid_from_jd >= raw.valid_to_jd
        {
            return Err(ComputationError::EphemerisUnavailable(
                "element table has an empty or non-finite validity span".to_string(),
            ));
        }

        let mut orbits = [None; 9];
        for entry in &raw.bodies {
            let Some(orbit) = ALL_ORBITS.iter().find(|o| o.name() == entry.name) else {
                log::debug!("ignoring unknown orbit {:?} in element table", entry.name);
                continue;
            };
            if entry.elements.values().iter().any(|v| !v.is_finite()) {
                return Err(ComputationError::EphemerisUnavailable(format!(
                    "non-finite element for {}",
                    orbit.name()
                )));
            }
            let e0 = entry.elements.e[0];
            if entry.elements.a[0] <= 0.0 || !(0.0..1.0).contains(&e0) {
                return Err(ComputationError::EphemerisUnavailable(format!(
                    "orbit {} is not elliptic",
                    orbit.name()
                )));
            }
            orbits[orbit.index()] = Some(entry.elements);
        }

        let mut resolved = [ZERO_ELEMENTS; 9];
        for orbit in ALL_ORBITS {
            resolved[orbit.index()] = orbits[orbit.index()].ok_or_else(|| {
                ComputationError::EphemerisUnavailable(format!(
                    "element table is missing {}",
                    orbit.name()
                ))
            })?;
        }

        Ok(Self {
            valid_from_jd: raw.valid_from_jd,
            valid_to_jd: raw.valid_to_jd,
            orbits: resolved,
        })
    }

    pub fn valid_from_jd(&self) -> f64 {
        self.valid_from_jd
    }

    pub fn valid_to_jd(&self) -> f64 {
        self.valid_to_jd
    }

    /// Whether `jd` lies inside the validity span (inclusive).
    pub fn covers(&self, jd: f64) -> bool {
        jd >= self.valid_from_jd && jd <= self.valid_to_jd
    }

    pub fn get(&self, orbit: Orbit) -> &OrbitalElements {
        &self.orbits[orbit.index()]
    }
}

const ZERO_ELEMENTS: OrbitalElements = OrbitalElements {
    a: [0.0; 2],
    e: [0.0; 2],
    i: [0.0; 2],
    l: [0.0; 2],
    peri: [0.0; 2],
    node: [0.0; 2],
};
