//! The ephemeris provider seam and its analytic implementation.

use std::fmt::{Debug, Formatter};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use kundli_vedic_base::{ALL_BODIES, Body, GeoLocation, normalize_360};

use crate::ayanamsha::{general_precession_deg, lahiri_deg, mean_obliquity_deg};
use crate::config::EphemerisConfig;
use crate::elements::ElementTable;
use crate::error::ComputationError;
use crate::julian::{centuries_since_j2000, jd_from_utc};
use crate::lagna::{ascendant_deg, equal_house_cusps};
use crate::moon::moon_longitude_deg;
use crate::nodes::{ketu_from_rahu, mean_rahu_deg};
use crate::planets::{Planet, geocentric_longitude_j2000};

/// Half-width of the central difference used for daily speed, in days.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Sidereal position of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Sidereal ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Degrees per day; negative when retrograde.
    pub speed: f64,
}

/// Everything the chart builder needs from an ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPositions {
    pub jd_utc: f64,
    /// Ayanamsha subtracted from tropical longitudes, degrees.
    pub ayanamsha: f64,
    /// Sidereal ascendant in [0, 360).
    pub ascendant: f64,
    /// Sidereal equal-house cusps, cusp 1 at the ascendant.
    pub house_cusps: [f64; 12],
    pub bodies: Vec<BodyPosition>,
}

impl RawPositions {
    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.bodies.iter().find(|p| p.body == body)
    }
}

/// Source of sidereal positions.
///
/// Implementations must be shareable across threads; the chart builder
/// takes `&dyn EphemerisProvider` so hosts can substitute their own.
pub trait EphemerisProvider: Send + Sync {
    fn positions(
        &self,
        instant: DateTime<Utc>,
        geo: &GeoLocation,
    ) -> Result<RawPositions, ComputationError>;
}

/// Analytic ephemeris backed by an orbital-element table.
///
/// The table is loaded on first use. Concurrent first callers block until
/// the single load finishes; afterwards the handle is read-only. A failed
/// load is remembered and reported on every call.
///
/// `Ephemeris` is [`Send`] + [`Sync`] and is meant to be built once by the
/// host and shared by reference or through `Arc<Ephemeris>`:
///
/// ```rust,ignore
/// let eph = Arc::new(Ephemeris::new(EphemerisConfig::default())?);
/// let handle = std::thread::spawn({
///     let eph = Arc::clone(&eph);
///     move || eph.positions(instant, &geo)
/// });
/// ```
pub struct Ephemeris {
    config: EphemerisConfig,
    table: OnceLock<Result<ElementTable, ComputationError>>,
}

impl Debug for Ephemeris {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ephemeris")
            .field("config", &self.config)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl Ephemeris {
    /// Create a handle. Validates the config; loading is deferred to first use.
    pub fn new(config: EphemerisConfig) -> Result<Self, ComputationError> {
        config.validate()?;
        Ok(Self {
            config,
            table: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Whether the one-time load has already run.
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// The loaded element table, loading it if needed.
    pub fn table(&self) -> Result<&ElementTable, ComputationError> {
        self.table
            .get_or_init(|| self.load())
            .as_ref()
            .map_err(Clone::clone)
    }

    fn load(&self) -> Result<ElementTable, ComputationError> {
        let (table, source) = match &self.config.elements_path {
            Some(path) => (ElementTable::load(path), path.display().to_string()),
            None => (ElementTable::builtin(), "built-in table".to_string()),
        };
        match &table {
            Ok(t) => info!(
                "loaded orbital elements from {source}, valid JD {}..{}",
                t.valid_from_jd(),
                t.valid_to_jd()
            ),
            Err(e) => log::error!("failed to load orbital elements from {source}: {e}"),
        }
        table
    }

    /// Sidereal longitude of one body at a UTC Julian Date.
    pub fn sidereal_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, ComputationError> {
        let table = self.covering_table(jd_utc)?;
        Ok(sidereal_longitude(table, body, jd_utc))
    }

    fn covering_table(&self, jd_utc: f64) -> Result<&ElementTable, ComputationError> {
        let table = self.table()?;
        if !jd_utc.is_finite() || !table.covers(jd_utc) {
            return Err(ComputationError::DateOutOfRange { jd_utc });
        }
        Ok(table)
    }
}

impl EphemerisProvider for Ephemeris {
    fn positions(
        &self,
        instant: DateTime<Utc>,
        geo: &GeoLocation,
    ) -> Result<RawPositions, ComputationError> {
        let jd = jd_from_utc(instant);
        let table = self.covering_table(jd)?;
        let t = centuries_since_j2000(jd);
        let ayanamsha = lahiri_deg(t);

        let bodies = ALL_BODIES
            .iter()
            .map(|&body| BodyPosition {
                body,
                longitude: sidereal_longitude(table, body, jd),
                speed: daily_speed(table, body, jd),
            })
            .collect();

        let ascendant = normalize_360(ascendant_deg(jd, geo, mean_obliquity_deg(t)) - ayanamsha);

        Ok(RawPositions {
            jd_utc: jd,
            ayanamsha,
            ascendant,
            house_cusps: equal_house_cusps(ascendant),
            bodies,
        })
    }
}

/// Tropical longitude referred to the mean equinox of date.
fn tropical_longitude(table: &ElementTable, body: Body, t: f64) -> f64 {
    let planet = |p: Planet| geocentric_longitude_j2000(table, p, t) + general_precession_deg(t);
    match body {
        Body::Sun => planet(Planet::Sun),
        Body::Moon => moon_longitude_deg(t),
        Body::Mercury => planet(Planet::Mercury),
        Body::Venus => planet(Planet::Venus),
        Body::Mars => planet(Planet::Mars),
        Body::Jupiter => planet(Planet::Jupiter),
        Body::Saturn => planet(Planet::Saturn),
        Body::Uranus => planet(Planet::Uranus),
        Body::Neptune => planet(Planet::Neptune),
        Body::Pluto => planet(Planet::Pluto),
        Body::Rahu => mean_rahu_deg(t),
        Body::Ketu => ketu_from_rahu(mean_rahu_deg(t)),
    }
}

fn sidereal_longitude(table: &ElementTable, body: Body, jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    normalize_360(tropical_longitude(table, body, t) - lahiri_deg(t))
}

/// Central-difference daily motion, unwrapped across 0°/360°.
fn daily_speed(table: &ElementTable, body: Body, jd: f64) -> f64 {
    let before = sidereal_longitude(table, body, jd - SPEED_HALF_STEP_DAYS);
    let after = sidereal_longitude(table, body, jd + SPEED_HALF_STEP_DAYS);
    let delta = (after - before + 540.0).rem_euclid(360.0) - 180.0;
    delta / (2.0 * SPEED_HALF_STEP_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Ephemeris>();
        }
    };

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090).unwrap()
    }

    #[test]
    fn loads_lazily_once() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        assert!(!eph.is_loaded());
        let a = eph.table().unwrap() as *const ElementTable;
        assert!(eph.is_loaded());
        let b = eph.table().unwrap() as *const ElementTable;
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_elements_path() {
        assert!(matches!(
            Ephemeris::new(EphemerisConfig::with_elements_path(PathBuf::new())),
            Err(ComputationError::InvalidInput(_))
        ));
    }

    #[test]
    fn unreadable_table_is_unavailable_on_every_call() {
        let eph = Ephemeris::new(EphemerisConfig::with_elements_path(PathBuf::from(
            "/nonexistent/elements.json",
        )))
        .unwrap();
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        for _ in 0..2 {
            assert!(matches!(
                eph.positions(instant, &delhi()),
                Err(ComputationError::EphemerisUnavailable(_))
            ));
        }
    }

    #[test]
    fn outside_span_is_out_of_range() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        for year in [1700, 2100] {
            let instant = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
            assert!(matches!(
                eph.positions(instant, &delhi()),
                Err(ComputationError::DateOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn all_bodies_reported() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let raw = eph.positions(instant, &delhi()).unwrap();
        assert_eq!(raw.bodies.len(), 12);
        for p in &raw.bodies {
            assert!((0.0..360.0).contains(&p.longitude), "{p:?}");
        }
        let sun = raw.get(Body::Sun).unwrap();
        // tropical ~280.38 minus Lahiri 23.853
        assert!((sun.longitude - 256.53).abs() < 0.1, "Sun = {}", sun.longitude);
        assert!((sun.speed - 1.019).abs() < 0.01, "Sun speed = {}", sun.speed);
    }

    #[test]
    fn ketu_opposes_rahu_and_nodes_retrograde() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 6, 0, 0).unwrap();
        let raw = eph.positions(instant, &delhi()).unwrap();
        let rahu = raw.get(Body::Rahu).unwrap();
        let ketu = raw.get(Body::Ketu).unwrap();
        assert!((normalize_360(ketu.longitude - rahu.longitude) - 180.0).abs() < 1e-9);
        assert!(rahu.speed < 0.0 && ketu.speed < 0.0);
    }

    #[test]
    fn cusps_start_at_ascendant() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        let instant = Utc.with_ymd_and_hms(1990, 3, 15, 6, 30, 0).unwrap();
        let raw = eph.positions(instant, &delhi()).unwrap();
        assert_eq!(raw.house_cusps[0], raw.ascendant);
        assert!((normalize_360(raw.house_cusps[3] - raw.ascendant) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn speed_unwraps_across_aries_point() {
        let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
        let table = eph.table().unwrap();
        // Moon speed stays positive whatever its longitude
        for k in 0..40 {
            let jd = 2_451_545.0 + k as f64 * 0.7;
            let speed = daily_speed(table, Body::Moon, jd);
            assert!((11.0..16.0).contains(&speed), "speed = {speed} at {jd}");
        }
    }
}
