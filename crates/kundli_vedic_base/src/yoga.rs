//! Classical planetary yogas over a chart's placements.
//!
//! Each rule is independent. [`evaluate_yogas`] reports every rule with its
//! outcome; [`detect_yogas`] keeps only the ones that hold.

use serde::Serialize;

use crate::dignity::is_own_or_exalted;
use crate::graha::Body;
use crate::placement::Placements;
use crate::util::signs_ahead;

/// Kendra (angular) houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaKind {
    Gajakesari,
    Budhaditya,
    ChandraMangala,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Shasha,
}

/// Panch Mahapurusha yogas and the body each one is formed by.
pub const MAHAPURUSHA: [(YogaKind, Body); 5] = [
    (YogaKind::Ruchaka, Body::Mars),
    (YogaKind::Bhadra, Body::Mercury),
    (YogaKind::Hamsa, Body::Jupiter),
    (YogaKind::Malavya, Body::Venus),
    (YogaKind::Shasha, Body::Saturn),
];

impl YogaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gajakesari => "Gajakesari",
            Self::Budhaditya => "Budhaditya",
            Self::ChandraMangala => "Chandra-Mangala",
            Self::Ruchaka => "Ruchaka",
            Self::Bhadra => "Bhadra",
            Self::Hamsa => "Hamsa",
            Self::Malavya => "Malavya",
            Self::Shasha => "Shasha",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaResult {
    pub kind: YogaKind,
    pub name: &'static str,
    pub description: String,
    pub active: bool,
}

impl YogaResult {
    fn new(kind: YogaKind, active: bool, description: String) -> Self {
        Self {
            kind,
            name: kind.name(),
            description,
            active,
        }
    }
}

/// Jupiter in a kendra from the Moon sign.
pub fn gajakesari(p: &Placements) -> YogaResult {
    let moon = p.get(Body::Moon).sign_index;
    let jupiter = p.get(Body::Jupiter).sign_index;
    let distance = signs_ahead(moon, jupiter);
    YogaResult::new(
        YogaKind::Gajakesari,
        distance % 3 == 0,
        format!("Jupiter is {} signs from the Moon", distance + 1),
    )
}

/// Sun and Mercury in the same sign.
pub fn budhaditya(p: &Placements) -> YogaResult {
    let sun = p.get(Body::Sun).sign_index;
    let mercury = p.get(Body::Mercury).sign_index;
    YogaResult::new(
        YogaKind::Budhaditya,
        sun == mercury,
        format!("Sun in sign {sun}, Mercury in sign {mercury}"),
    )
}

/// Moon and Mars in the same sign.
pub fn chandra_mangala(p: &Placements) -> YogaResult {
    let moon = p.get(Body::Moon).sign_index;
    let mars = p.get(Body::Mars).sign_index;
    YogaResult::new(
        YogaKind::ChandraMangala,
        moon == mars,
        format!("Moon in sign {moon}, Mars in sign {mars}"),
    )
}

/// A Mahapurusha yoga: its planet in a kendra and in an own or exaltation sign.
pub fn mahapurusha(p: &Placements, kind: YogaKind, body: Body) -> YogaResult {
    let placement = p.get(body);
    let dignified = body
        .graha()
        .is_some_and(|g| is_own_or_exalted(g, placement.rashi()));
    let in_kendra = KENDRA_HOUSES.contains(&placement.house_index);
    YogaResult::new(
        kind,
        dignified && in_kendra,
        format!(
            "{} in {} (house {})",
            body.name(),
            placement.rashi().western_name(),
            placement.house_index
        ),
    )
}

/// Evaluate every yoga rule.
pub fn evaluate_yogas(p: &Placements) -> Vec<YogaResult> {
    let mut out = vec![gajakesari(p), budhaditya(p), chandra_mangala(p)];
    out.extend(
        MAHAPURUSHA
            .iter()
            .map(|(kind, body)| mahapurusha(p, *kind, *body)),
    );
    out
}

/// Only the yogas that hold.
pub fn detect_yogas(p: &Placements) -> Vec<YogaResult> {
    evaluate_yogas(p).into_iter().filter(|y| y.active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(asc: f64, set: &[(Body, f64)]) -> Placements {
        let mut lons = [100.0; 12];
        for (b, lon) in set {
            lons[b.index()] = *lon;
        }
        Placements::new(asc, lons)
    }

    #[test]
    fn gajakesari_kendras_from_moon() {
        let cases = [
            (10.0, true),
            (100.0, true),
            (190.0, true),
            (280.0, true),
            (40.0, false),
            (130.0, false),
        ];
        for (jup, expect) in cases {
            let p = place(0.0, &[(Body::Moon, 5.0), (Body::Jupiter, jup)]);
            assert_eq!(gajakesari(&p).active, expect, "jupiter at {jup}");
        }
    }

    #[test]
    fn budhaditya_same_sign() {
        let p = place(0.0, &[(Body::Sun, 61.0), (Body::Mercury, 89.0)]);
        assert!(budhaditya(&p).active);
        let p = place(0.0, &[(Body::Sun, 61.0), (Body::Mercury, 91.0)]);
        assert!(!budhaditya(&p).active);
    }

    #[test]
    fn ruchaka_mars_in_aries_lagna() {
        let p = place(0.0, &[(Body::Mars, 15.0)]);
        let r = mahapurusha(&p, YogaKind::Ruchaka, Body::Mars);
        assert!(r.active, "{}", r.description);
    }

    #[test]
    fn hamsa_needs_kendra() {
        // Jupiter exalted in Cancer: 4th from an Aries lagna, 2nd from a Gemini lagna
        let p = place(0.0, &[(Body::Jupiter, 95.0)]);
        assert!(mahapurusha(&p, YogaKind::Hamsa, Body::Jupiter).active);
        let p = place(65.0, &[(Body::Jupiter, 95.0)]);
        assert!(!mahapurusha(&p, YogaKind::Hamsa, Body::Jupiter).active);
    }

    #[test]
    fn shasha_needs_dignity() {
        // Saturn in the 7th but in Scorpio
        let p = place(30.0, &[(Body::Saturn, 215.0)]);
        assert_eq!(p.get(Body::Saturn).house_index, 7);
        assert!(!mahapurusha(&p, YogaKind::Shasha, Body::Saturn).active);
    }

    #[test]
    fn evaluate_reports_every_rule() {
        let p = place(0.0, &[]);
        assert_eq!(evaluate_yogas(&p).len(), 8);
    }

    #[test]
    fn detect_keeps_only_active() {
        // all bodies at 100 deg: Moon, Jupiter, Sun, Mercury, Mars share Cancer
        let p = place(0.0, &[]);
        let names: Vec<&str> = detect_yogas(&p).iter().map(|y| y.name).collect();
        assert!(names.contains(&"Gajakesari"));
        assert!(names.contains(&"Budhaditya"));
        assert!(names.contains(&"Chandra-Mangala"));
        assert!(names.contains(&"Hamsa"));
        assert!(!names.contains(&"Ruchaka"));
    }
}
