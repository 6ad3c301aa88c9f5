//! Sign and house occupancy of every chart body.
//!
//! The dosha and yoga rules only need where each body sits; this is the
//! minimal view of a chart they evaluate against.

use serde::Serialize;

use crate::graha::{ALL_BODIES, Body};
use crate::rashi::Rashi;
use crate::util::{house_index, normalize_360, sign_index};

/// Where one body sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub body: Body,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// 1-based sign index.
    pub sign_index: u8,
    /// 1-based whole-sign house counted from the ascendant.
    pub house_index: u8,
}

impl Placement {
    pub fn new(body: Body, longitude: f64, ascendant_sign_index: u8) -> Self {
        let longitude = normalize_360(longitude);
        let sign = sign_index(longitude);
        Self {
            body,
            longitude,
            sign_index: sign,
            house_index: house_index(sign, ascendant_sign_index),
        }
    }

    pub fn rashi(&self) -> Rashi {
        Rashi::from_number(self.sign_index)
    }
}

/// Placements of all twelve bodies, indexed by [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct Placements {
    ascendant_sign_index: u8,
    bodies: [Placement; 12],
}

impl Placements {
    /// Build from the ascendant and one longitude per body in [`ALL_BODIES`] order.
    pub fn new(ascendant_longitude: f64, longitudes: [f64; 12]) -> Self {
        let asc = sign_index(ascendant_longitude);
        Self {
            ascendant_sign_index: asc,
            bodies: std::array::from_fn(|i| Placement::new(ALL_BODIES[i], longitudes[i], asc)),
        }
    }

    pub fn ascendant_sign_index(&self) -> u8 {
        self.ascendant_sign_index
    }

    pub fn get(&self, body: Body) -> &Placement {
        &self.bodies[body.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn houses_follow_ascendant() {
        let mut lons = [0.0; 12];
        lons[Body::Mars.index()] = 215.0;
        lons[Body::Moon.index()] = 40.0;
        let p = Placements::new(95.0, lons);
        assert_eq!(p.ascendant_sign_index(), 4);
        assert_eq!(p.get(Body::Mars).sign_index, 8);
        assert_eq!(p.get(Body::Mars).house_index, 5);
        assert_eq!(p.get(Body::Moon).house_index, 11);
        assert_eq!(p.get(Body::Sun).house_index, 10);
    }

    #[test]
    fn longitudes_are_normalized() {
        let mut lons = [0.0; 12];
        lons[Body::Rahu.index()] = -10.0;
        let p = Placements::new(0.0, lons);
        assert!((p.get(Body::Rahu).longitude - 350.0).abs() < 1e-12);
        assert_eq!(p.get(Body::Rahu).rashi(), Rashi::Meena);
    }

    #[test]
    fn iterates_in_body_order() {
        let p = Placements::new(0.0, [0.0; 12]);
        let order: Vec<Body> = p.iter().map(|x| x.body).collect();
        assert_eq!(order, ALL_BODIES.to_vec());
    }
}
