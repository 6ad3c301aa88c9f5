//! Ashtakoot Guna Milan: eight-factor compatibility of two Moon placements.
//!
//! The score is not symmetric. The first placement is always the boy's,
//! the second the girl's, and Varna, Tara, Yoni, Maitri, Gana and Bhakoot
//! all read the pair in that direction.

pub mod tables;

use log::debug;
use serde::Serialize;

use crate::graha::rashi_lord;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::Rashi;
use crate::util::sign_index;

pub use tables::{
    Gana, MAITRI_MATRIX, Nadi, Varna, YONI_MATRIX, Yoni, gana_of, maitri_points, nadi_of,
    varna_of, yoni_of,
};

/// Best possible total.
pub const MAX_TOTAL_SCORE: f64 = 36.0;

/// Tara distances (mod 9) that are auspicious.
const GOOD_TARAS: [u8; 6] = [0, 1, 2, 4, 6, 8];

/// Bhakoot sign distances (1-based) that score full points.
const GOOD_BHAKOOTS: [u8; 6] = [1, 3, 4, 7, 10, 11];

/// Moon sign and nakshatra of one partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonPlacement {
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
}

impl MoonPlacement {
    pub fn new(rashi: Rashi, nakshatra: Nakshatra) -> Self {
        Self { rashi, nakshatra }
    }

    /// From the Moon's sidereal longitude.
    pub fn from_longitude(moon_sidereal_lon: f64) -> Self {
        Self {
            rashi: Rashi::from_number(sign_index(moon_sidereal_lon)),
            nakshatra: nakshatra_from_longitude(moon_sidereal_lon).nakshatra,
        }
    }
}

/// The eight kootas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    Maitri,
    Gana,
    Bhakoot,
    Nadi,
}

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::Maitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    pub const fn max_score(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::Maitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }
}

/// Score of one koota.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootFactor {
    pub koota: Koota,
    pub name: &'static str,
    pub boy_value: String,
    pub girl_value: String,
    pub score: f64,
    pub max_score: f64,
}

impl AshtakootFactor {
    fn new(koota: Koota, boy_value: String, girl_value: String, score: f64) -> Self {
        let max_score = koota.max_score();
        Self {
            koota,
            name: koota.name(),
            boy_value,
            girl_value,
            score: score.clamp(0.0, max_score),
            max_score,
        }
    }
}

/// Overall reading of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchVerdict {
    Incompatible,
    Average,
    Good,
    Excellent,
}

impl MatchVerdict {
    /// Below 18 is incompatible, 18-24 average, 25-32 good, above 32 excellent.
    pub fn from_score(total: f64) -> Self {
        if total < 18.0 {
            Self::Incompatible
        } else if total < 25.0 {
            Self::Average
        } else if total <= 32.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootResult {
    pub factors: [AshtakootFactor; 8],
    pub total_score: f64,
    pub max_score: f64,
    pub verdict: MatchVerdict,
}

impl AshtakootResult {
    pub fn factor(&self, koota: Koota) -> &AshtakootFactor {
        &self.factors[koota as usize]
    }
}

pub fn varna(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let (b, g) = (varna_of(boy.rashi), varna_of(girl.rashi));
    let score = if b.tier() >= g.tier() { 1.0 } else { 0.0 };
    AshtakootFactor::new(Koota::Varna, format!("{b:?}"), format!("{g:?}"), score)
}

/// Same sign scores full; any other pair gets the neutral single point.
pub fn vashya(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let score = if boy.rashi == girl.rashi { 2.0 } else { 1.0 };
    AshtakootFactor::new(
        Koota::Vashya,
        boy.rashi.name().to_string(),
        girl.rashi.name().to_string(),
        score,
    )
}

pub fn tara(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let diff = (girl.nakshatra.number() as i32 - boy.nakshatra.number() as i32 + 27) % 9;
    let score = if GOOD_TARAS.contains(&(diff as u8)) { 3.0 } else { 1.5 };
    AshtakootFactor::new(
        Koota::Tara,
        boy.nakshatra.name().to_string(),
        girl.nakshatra.name().to_string(),
        score,
    )
}

pub fn yoni(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let (b, g) = (yoni_of(boy.nakshatra), yoni_of(girl.nakshatra));
    let score = YONI_MATRIX[b as usize][g as usize] as f64;
    AshtakootFactor::new(Koota::Yoni, format!("{b:?}"), format!("{g:?}"), score)
}

pub fn maitri(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let (b, g) = (rashi_lord(boy.rashi), rashi_lord(girl.rashi));
    AshtakootFactor::new(
        Koota::Maitri,
        b.english_name().to_string(),
        g.english_name().to_string(),
        maitri_points(b, g),
    )
}

pub fn gana(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let (b, g) = (gana_of(boy.nakshatra), gana_of(girl.nakshatra));
    let score = match (b, g) {
        _ if b == g => 6.0,
        (Gana::Deva, Gana::Manushya) => 6.0,
        (Gana::Manushya, Gana::Deva) => 5.0,
        (Gana::Deva, Gana::Rakshasa) | (Gana::Rakshasa, Gana::Deva) => 1.0,
        _ => 0.0,
    };
    AshtakootFactor::new(Koota::Gana, format!("{b:?}"), format!("{g:?}"), score)
}

pub fn bhakoot(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let diff = (girl.rashi.number() as i32 - boy.rashi.number() as i32 + 12) % 12 + 1;
    let score = if GOOD_BHAKOOTS.contains(&(diff as u8)) { 7.0 } else { 0.0 };
    AshtakootFactor::new(
        Koota::Bhakoot,
        boy.rashi.name().to_string(),
        girl.rashi.name().to_string(),
        score,
    )
}

pub fn nadi(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootFactor {
    let (b, g) = (nadi_of(boy.nakshatra), nadi_of(girl.nakshatra));
    let score = if b != g { 8.0 } else { 0.0 };
    AshtakootFactor::new(Koota::Nadi, format!("{b:?}"), format!("{g:?}"), score)
}

/// Score all eight kootas for a boy and a girl.
pub fn ashtakoot(boy: &MoonPlacement, girl: &MoonPlacement) -> AshtakootResult {
    let factors = [
        varna(boy, girl),
        vashya(boy, girl),
        tara(boy, girl),
        yoni(boy, girl),
        maitri(boy, girl),
        gana(boy, girl),
        bhakoot(boy, girl),
        nadi(boy, girl),
    ];
    let total_score: f64 = factors.iter().map(|f| f.score).sum();
    debug!(
        "ashtakoot {}/{} x {}/{}: {total_score}",
        boy.rashi.name(),
        boy.nakshatra.name(),
        girl.rashi.name(),
        girl.nakshatra.name()
    );
    AshtakootResult {
        factors,
        total_score,
        max_score: MAX_TOTAL_SCORE,
        verdict: MatchVerdict::from_score(total_score),
    }
}
