//! Birth chart assembly.
//!
//! A [`Chart`] is built once from a single provider call and never changes
//! afterwards. Everything in it is derived from the sidereal longitudes and
//! the ascendant the provider returns.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use kundli_ephemeris::{BodyPosition, ComputationError, EphemerisProvider, RawPositions};
use kundli_vedic_base::{
    ALL_BODIES, Body, DivisionalSigns, DoshaResult, GeoLocation, Nakshatra, Panchang, Placement,
    Placements, Rashi, YogaResult, compute_panchang, detect_doshas, detect_yogas,
    nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

use crate::config::ChartConfig;

/// One body as placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub planet: Body,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// Degrees per day.
    pub daily_speed: f64,
    pub retrograde: bool,
    pub rashi: Rashi,
    /// 1-based sign index.
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra index.
    pub nakshatra_index: u8,
    pub pada: u8,
    /// 1-based whole-sign house from the ascendant.
    pub house_index: u8,
    pub divisional_signs: DivisionalSigns,
}

impl PlanetPosition {
    fn from_placement(placement: &Placement, speed: f64) -> Self {
        let rashi = rashi_from_longitude(placement.longitude);
        let nakshatra = nakshatra_from_longitude(placement.longitude);
        Self {
            planet: placement.body,
            longitude: placement.longitude,
            daily_speed: speed,
            retrograde: speed < 0.0,
            rashi: rashi.rashi,
            sign_index: placement.sign_index,
            degree_in_sign: rashi.degrees_in_rashi,
            nakshatra: nakshatra.nakshatra,
            nakshatra_index: nakshatra.nakshatra_index,
            pada: nakshatra.pada,
            house_index: placement.house_index,
            divisional_signs: DivisionalSigns::from_longitude(placement.longitude),
        }
    }
}

/// Immutable natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub instant: DateTime<Utc>,
    pub geo: GeoLocation,
    /// Lahiri ayanamsha used, degrees.
    pub ayanamsha: f64,
    /// Sidereal ascendant in [0, 360).
    pub ascendant_longitude: f64,
    pub ascendant_sign_index: u8,
    /// One entry per body, in [`ALL_BODIES`] order.
    pub planets: [PlanetPosition; 12],
    pub house_cusps: [f64; 12],
    pub panchang: Panchang,
    /// Manglik, Kaal Sarp, Pitra and Sade Sati, always in that order.
    pub doshas: Vec<DoshaResult>,
    /// Active yogas only.
    pub yogas: Vec<YogaResult>,
}

impl Chart {
    pub fn planet(&self, body: Body) -> &PlanetPosition {
        &self.planets[body.index()]
    }

    /// Sign and house view of the chart used by the rule engines.
    pub fn placements(&self) -> Placements {
        Placements::new(
            self.ascendant_longitude,
            std::array::from_fn(|i| self.planets[i].longitude),
        )
    }
}

const fn missing_body(body: Body) -> &'static str {
    match body {
        Body::Sun => "Sun missing from ephemeris output",
        Body::Moon => "Moon missing from ephemeris output",
        Body::Mercury => "Mercury missing from ephemeris output",
        Body::Venus => "Venus missing from ephemeris output",
        Body::Mars => "Mars missing from ephemeris output",
        Body::Jupiter => "Jupiter missing from ephemeris output",
        Body::Saturn => "Saturn missing from ephemeris output",
        Body::Uranus => "Uranus missing from ephemeris output",
        Body::Neptune => "Neptune missing from ephemeris output",
        Body::Pluto => "Pluto missing from ephemeris output",
        Body::Rahu => "Rahu missing from ephemeris output",
        Body::Ketu => "Ketu missing from ephemeris output",
    }
}

/// Pick every required body out of the provider answer, in [`ALL_BODIES`] order.
fn required_positions(raw: &RawPositions) -> Result<[BodyPosition; 12], ComputationError> {
    let mut out = [BodyPosition {
        body: Body::Sun,
        longitude: 0.0,
        speed: 0.0,
    }; 12];
    for body in ALL_BODIES {
        let pos = raw
            .get(body)
            .ok_or(ComputationError::IncompleteChart(missing_body(body)))?;
        if !pos.longitude.is_finite() || !pos.speed.is_finite() {
            return Err(ComputationError::InvalidInput(
                "ephemeris returned a non-finite position",
            ));
        }
        out[body.index()] = *pos;
    }
    Ok(out)
}

/// Build a chart for `instant` at `geo`.
///
/// Calls the provider once. Fails as a whole if any body is missing.
pub fn compute_chart(
    provider: &dyn EphemerisProvider,
    instant: DateTime<Utc>,
    geo: &GeoLocation,
    config: &ChartConfig,
) -> Result<Chart, ComputationError> {
    config.validate()?;
    let raw = provider.positions(instant, geo)?;
    if !raw.ascendant.is_finite() {
        return Err(ComputationError::InvalidInput(
            "ephemeris returned a non-finite ascendant",
        ));
    }
    let positions = required_positions(&raw)?;

    let placements = Placements::new(raw.ascendant, positions.map(|p| p.longitude));
    let planets = std::array::from_fn(|i| {
        PlanetPosition::from_placement(placements.get(ALL_BODIES[i]), positions[i].speed)
    });

    let sun = placements.get(Body::Sun).longitude;
    let moon = placements.get(Body::Moon).longitude;
    let panchang = compute_panchang(sun, moon, instant, geo, &config.panchang);
    let doshas = detect_doshas(&placements);
    let yogas = detect_yogas(&placements);

    debug!(
        "chart at {instant} ({:.4}, {:.4}): lagna sign {}, {} doshas present, {} yogas",
        geo.latitude_deg(),
        geo.longitude_deg(),
        placements.ascendant_sign_index(),
        doshas.iter().filter(|d| d.present).count(),
        yogas.len()
    );

    Ok(Chart {
        instant,
        geo: *geo,
        ayanamsha: raw.ayanamsha,
        ascendant_longitude: normalize_360(raw.ascendant),
        ascendant_sign_index: placements.ascendant_sign_index(),
        planets,
        house_cusps: raw.house_cusps.map(normalize_360),
        panchang,
        doshas,
        yogas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Fixed(RawPositions);

    impl EphemerisProvider for Fixed {
        fn positions(
            &self,
            _instant: DateTime<Utc>,
            _geo: &GeoLocation,
        ) -> Result<RawPositions, ComputationError> {
            Ok(self.0.clone())
        }
    }

    fn raw(longitudes: [f64; 12], ascendant: f64) -> RawPositions {
        RawPositions {
            jd_utc: 2_451_545.0,
            ayanamsha: 23.853,
            ascendant,
            house_cusps: kundli_ephemeris::equal_house_cusps(ascendant),
            bodies: ALL_BODIES
                .iter()
                .zip(longitudes)
                .map(|(&body, longitude)| BodyPosition {
                    body,
                    longitude,
                    speed: if body.is_node() { -0.05 } else { 1.0 },
                })
                .collect(),
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, 6, 0, 0).unwrap()
    }

    fn geo() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090).unwrap()
    }

    const LONS: [f64; 12] = [
        66.0, 40.0, 80.0, 50.0, 10.0, 100.0, 320.0, 20.0, 330.0, 270.0, 190.0, 10.0,
    ];

    fn fixed_chart() -> Chart {
        let provider = Fixed(raw(LONS, 15.0));
        compute_chart(&provider, instant(), &geo(), &ChartConfig::default()).unwrap()
    }

    #[test]
    fn planet_fields_follow_longitude() {
        let chart = fixed_chart();
        let moon = chart.planet(Body::Moon);
        assert_eq!(moon.sign_index, 2);
        assert_eq!(moon.rashi, Rashi::Vrishabha);
        assert!((moon.degree_in_sign - 10.0).abs() < 1e-10);
        assert_eq!(moon.nakshatra_index, 4);
        assert_eq!(moon.house_index, 2);
        assert!(!moon.retrograde);
        assert!(chart.planet(Body::Rahu).retrograde);
        assert_eq!(chart.ascendant_sign_index, 1);
    }

    #[test]
    fn planets_in_body_order() {
        let chart = fixed_chart();
        for (i, p) in chart.planets.iter().enumerate() {
            assert_eq!(p.planet, ALL_BODIES[i]);
            assert_eq!(p.longitude, LONS[i]);
        }
        assert_eq!(chart.placements(), Placements::new(15.0, LONS));
    }

    #[test]
    fn doshas_always_four() {
        let chart = fixed_chart();
        assert_eq!(chart.doshas.len(), 4);
        assert!(chart.yogas.iter().all(|y| y.active));
    }

    #[test]
    fn missing_moon_fails_whole_chart() {
        let mut r = raw(LONS, 15.0);
        r.bodies.retain(|p| p.body != Body::Moon);
        let err = compute_chart(&Fixed(r), instant(), &geo(), &ChartConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ComputationError::IncompleteChart("Moon missing from ephemeris output")
        );
    }

    #[test]
    fn non_finite_longitude_rejected() {
        let mut lons = LONS;
        lons[3] = f64::NAN;
        let provider = Fixed(raw(lons, 15.0));
        let err = compute_chart(&provider, instant(), &geo(), &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, ComputationError::InvalidInput(_)));
    }

    #[test]
    fn bad_config_rejected_before_provider_call() {
        let mut config = ChartConfig::default();
        config.panchang.utc_offset_minutes = 24 * 60;
        assert!(matches!(
            compute_chart(&Fixed(raw(LONS, 15.0)), instant(), &geo(), &config),
            Err(ComputationError::InvalidInput(_))
        ));
    }
}
