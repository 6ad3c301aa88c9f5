//! Geocentric planetary longitudes from Keplerian mean elements.
//!
//! Each orbit is propagated with linear secular rates, solved through
//! Kepler's equation and rotated into J2000 ecliptic coordinates. The
//! geocentric vector is the planet's heliocentric vector minus that of the
//! Earth-Moon barycentre; the Sun is the negated barycentre vector.
//! Light-time and aberration are ignored.

use crate::elements::{ElementTable, MeanElements, Orbit};

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 30;

/// Bodies with a Keplerian theory, as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    fn orbit(self) -> Option<Orbit> {
        match self {
            Self::Sun => None,
            Self::Mercury => Some(Orbit::Mercury),
            Self::Venus => Some(Orbit::Venus),
            Self::Mars => Some(Orbit::Mars),
            Self::Jupiter => Some(Orbit::Jupiter),
            Self::Saturn => Some(Orbit::Saturn),
            Self::Uranus => Some(Orbit::Uranus),
            Self::Neptune => Some(Orbit::Neptune),
            Self::Pluto => Some(Orbit::Pluto),
        }
    }
}

/// Solve `E - e sin E = M` by Newton iteration. Angles in radians.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);
    let mut ecc_anomaly = if eccentricity < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - m)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric J2000 ecliptic rectangular coordinates in au.
pub fn heliocentric_position(el: &MeanElements) -> [f64; 3] {
    let e = el.eccentricity;
    let a = el.semi_major_axis_au;
    let arg_peri = (el.perihelion_deg - el.node_deg).to_radians();
    let mean_anomaly = (el.mean_longitude_deg - el.perihelion_deg).to_radians();
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = el.node_deg.to_radians().sin_cos();
    let (si, ci) = el.inclination_deg.to_radians().sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

fn orbit_position(table: &ElementTable, orbit: Orbit, t: f64) -> [f64; 3] {
    heliocentric_position(&table.get(orbit).at(t))
}

/// Geocentric ecliptic longitude, J2000 equinox, degrees in [0, 360).
pub fn geocentric_longitude_j2000(table: &ElementTable, planet: Planet, t: f64) -> f64 {
    let earth = orbit_position(table, Orbit::EarthMoonBarycenter, t);
    let geo = match planet.orbit() {
        None => [-earth[0], -earth[1], -earth[2]],
        Some(orbit) => {
            let p = orbit_position(table, orbit, t);
            [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
        }
    };
    geo[1].atan2(geo[0]).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ayanamsha::general_precession_deg;
    use crate::julian::centuries_since_j2000;

    fn table() -> ElementTable {
        ElementTable::builtin().unwrap()
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((solve_kepler(1.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        let e = 0.2;
        let m: f64 = 2.5;
        let ea = solve_kepler(m, e);
        assert!((ea - e * ea.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn sun_at_j2000() {
        // mean longitude 280.46 deg minus an equation of centre near -0.08 deg
        let lon = geocentric_longitude_j2000(&table(), Planet::Sun, 0.0);
        assert!((lon - 280.38).abs() < 0.05, "Sun = {lon}");
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992-12-20 0h TD: geometric longitude of date 313.08 deg
        let t = centuries_since_j2000(2_448_976.5);
        let lon =
            geocentric_longitude_j2000(&table(), Planet::Venus, t) + general_precession_deg(t);
        assert!((lon - 313.08).abs() < 0.2, "Venus = {lon}");
    }

    #[test]
    fn earth_distance_about_one_au() {
        let el = table().get(Orbit::EarthMoonBarycenter).at(0.0);
        let p = heliocentric_position(&el);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }
}
