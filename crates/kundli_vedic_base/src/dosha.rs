//! Dosha (affliction) predicates over a chart's placements.
//!
//! Every dosha is always evaluated and reported, present or not.

use serde::Serialize;

use crate::graha::Body;
use crate::placement::Placements;
use crate::util::signs_ahead;

/// Houses from the ascendant that make Mars Manglik.
pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DoshaKind {
    Manglik,
    KaalSarp,
    Pitra,
    SadeSati,
}

impl DoshaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manglik => "Manglik",
            Self::KaalSarp => "Kaal Sarp",
            Self::Pitra => "Pitra",
            Self::SadeSati => "Sade Sati",
        }
    }
}

/// Phase of Sade Sati by Saturn's distance from the Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th sign from the Moon.
    Rising,
    /// Saturn over the Moon sign.
    Peak,
    /// Saturn in the 2nd sign from the Moon.
    Setting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaResult {
    pub kind: DoshaKind,
    pub present: bool,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<SadeSatiPhase>,
}

impl DoshaResult {
    fn new(kind: DoshaKind, present: bool, explanation: String) -> Self {
        Self {
            kind,
            present,
            explanation,
            phase: None,
        }
    }
}

/// Mars in house 1, 2, 4, 7, 8 or 12.
pub fn manglik(p: &Placements) -> DoshaResult {
    let house = p.get(Body::Mars).house_index;
    let present = MANGLIK_HOUSES.contains(&house);
    let explanation = if present {
        format!("Mars occupies house {house}")
    } else {
        format!("Mars occupies house {house}, outside houses 1, 2, 4, 7, 8 and 12")
    };
    DoshaResult::new(DoshaKind::Manglik, present, explanation)
}

/// Every non-node body lies in the half circle running forward from Rahu.
pub fn kaal_sarp(p: &Placements) -> DoshaResult {
    let rahu = p.get(Body::Rahu).longitude;
    let outside: Vec<&str> = p
        .iter()
        .filter(|x| !x.body.is_node())
        .filter(|x| (x.longitude - rahu + 360.0) % 360.0 >= 180.0)
        .map(|x| x.body.name())
        .collect();
    let present = outside.is_empty();
    let explanation = if present {
        "all planets lie on the arc from Rahu to Ketu".to_string()
    } else {
        format!("outside the Rahu-Ketu arc: {}", outside.join(", "))
    };
    DoshaResult::new(DoshaKind::KaalSarp, present, explanation)
}

/// Sun conjoined a node by house, or Sun or a node in the 9th house.
pub fn pitra(p: &Placements) -> DoshaResult {
    let sun = p.get(Body::Sun).house_index;
    let rahu = p.get(Body::Rahu).house_index;
    let ketu = p.get(Body::Ketu).house_index;

    let mut reasons = Vec::new();
    if sun == rahu {
        reasons.push(format!("Sun with Rahu in house {sun}"));
    }
    if sun == ketu {
        reasons.push(format!("Sun with Ketu in house {sun}"));
    }
    for (name, house) in [("Sun", sun), ("Rahu", rahu), ("Ketu", ketu)] {
        if house == 9 {
            reasons.push(format!("{name} in the 9th house"));
        }
    }

    let present = !reasons.is_empty();
    let explanation = if present {
        reasons.join("; ")
    } else {
        "Sun is apart from the nodes and none of them occupies the 9th house".to_string()
    };
    DoshaResult::new(DoshaKind::Pitra, present, explanation)
}

/// Saturn in the sign before, on, or after the Moon sign.
pub fn sade_sati(p: &Placements) -> DoshaResult {
    let moon = p.get(Body::Moon).sign_index;
    let saturn = p.get(Body::Saturn).sign_index;
    let phase = match signs_ahead(moon, saturn) {
        11 => Some(SadeSatiPhase::Rising),
        0 => Some(SadeSatiPhase::Peak),
        1 => Some(SadeSatiPhase::Setting),
        _ => None,
    };
    let explanation = match phase {
        Some(phase) => format!("Saturn in sign {saturn}, Moon in sign {moon}: {phase:?} phase"),
        None => format!("Saturn in sign {saturn} is not adjacent to Moon sign {moon}"),
    };
    DoshaResult {
        kind: DoshaKind::SadeSati,
        present: phase.is_some(),
        explanation,
        phase,
    }
}

/// Evaluate all doshas in fixed order.
pub fn detect_doshas(p: &Placements) -> Vec<DoshaResult> {
    vec![manglik(p), kaal_sarp(p), pitra(p), sade_sati(p)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_BODIES;

    fn chart(asc: f64, set: &[(Body, f64)]) -> Placements {
        let mut lons = [0.0; 12];
        for (i, b) in ALL_BODIES.iter().enumerate() {
            // spread the rest over the Rahu-Ketu arc by default
            lons[i] = 10.0 + 12.0 * i as f64;
            if *b == Body::Rahu {
                lons[i] = 0.0;
            }
            if *b == Body::Ketu {
                lons[i] = 180.0;
            }
        }
        for (b, lon) in set {
            lons[b.index()] = *lon;
        }
        Placements::new(asc, lons)
    }

    #[test]
    fn manglik_in_eighth() {
        let p = chart(0.0, &[(Body::Mars, 215.0)]);
        assert_eq!(p.get(Body::Mars).house_index, 8);
        assert!(manglik(&p).present);
    }

    #[test]
    fn not_manglik_in_fifth() {
        let p = chart(0.0, &[(Body::Mars, 125.0)]);
        assert_eq!(p.get(Body::Mars).house_index, 5);
        assert!(!manglik(&p).present);
    }

    #[test]
    fn kaal_sarp_when_all_on_one_side() {
        let p = chart(0.0, &[]);
        assert!(kaal_sarp(&p).present);
    }

    #[test]
    fn kaal_sarp_broken_by_one_planet() {
        let p = chart(0.0, &[(Body::Pluto, 270.0)]);
        let r = kaal_sarp(&p);
        assert!(!r.present);
        assert!(r.explanation.contains("Pluto"));
    }

    #[test]
    fn kaal_sarp_is_one_directional() {
        // everything on the Ketu-to-Rahu side does not count
        let set: Vec<(Body, f64)> = ALL_BODIES
            .iter()
            .filter(|b| !b.is_node())
            .map(|b| (*b, 200.0 + b.index() as f64))
            .collect();
        let p = chart(0.0, &set);
        assert!(!kaal_sarp(&p).present);
    }

    #[test]
    fn pitra_sun_with_rahu() {
        let p = chart(0.0, &[(Body::Sun, 5.0), (Body::Rahu, 20.0), (Body::Ketu, 200.0)]);
        assert!(pitra(&p).present);
    }

    #[test]
    fn pitra_node_in_ninth() {
        let p = chart(0.0, &[(Body::Sun, 45.0), (Body::Rahu, 245.0), (Body::Ketu, 65.0)]);
        let r = pitra(&p);
        assert!(r.present);
        assert!(r.explanation.contains("Rahu in the 9th"));
    }

    #[test]
    fn pitra_absent() {
        let p = chart(0.0, &[(Body::Sun, 45.0), (Body::Rahu, 95.0), (Body::Ketu, 275.0)]);
        assert!(!pitra(&p).present);
    }

    #[test]
    fn sade_sati_phases() {
        let cases = [
            (15.0, Some(SadeSatiPhase::Peak)),
            (45.0, Some(SadeSatiPhase::Setting)),
            (345.0, Some(SadeSatiPhase::Rising)),
            (105.0, None),
        ];
        for (saturn, phase) in cases {
            let p = chart(0.0, &[(Body::Moon, 10.0), (Body::Saturn, saturn)]);
            let r = sade_sati(&p);
            assert_eq!(r.phase, phase, "saturn at {saturn}");
            assert_eq!(r.present, phase.is_some());
        }
    }

    #[test]
    fn all_four_always_reported() {
        let kinds: Vec<DoshaKind> = detect_doshas(&chart(0.0, &[]))
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![DoshaKind::Manglik, DoshaKind::KaalSarp, DoshaKind::Pitra, DoshaKind::SadeSati]
        );
    }
}
