//! Static Ashtakoot lookup tables.
//!
//! Every table is indexed by a closed enum, so a lookup can never miss.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// Varna (spiritual class) of a Moon sign, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Varna {
    /// Rank in the hierarchy, Brahmin = 4 down to Shudra = 1.
    pub const fn tier(self) -> u8 {
        match self {
            Self::Brahmin => 4,
            Self::Kshatriya => 3,
            Self::Vaishya => 2,
            Self::Shudra => 1,
        }
    }
}

/// Water signs are Brahmin, fire Kshatriya, earth Vaishya, air Shudra.
pub const fn varna_of(rashi: Rashi) -> Varna {
    match rashi.number() {
        4 | 8 | 12 => Varna::Brahmin,
        1 | 5 | 9 => Varna::Kshatriya,
        2 | 6 | 10 => Varna::Vaishya,
        _ => Varna::Shudra,
    }
}

/// Yoni (animal symbol) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Shatabhisha => Yoni::Horse,
        Bharani | Revati => Yoni::Elephant,
        Krittika | Pushya => Yoni::Sheep,
        Rohini | Mrigashira => Yoni::Serpent,
        Ardra | Mula => Yoni::Dog,
        Punarvasu | Ashlesha => Yoni::Cat,
        Magha | PurvaPhalguni => Yoni::Rat,
        UttaraPhalguni | UttaraBhadrapada => Yoni::Cow,
        Hasta | Swati => Yoni::Buffalo,
        Chitra | Vishakha => Yoni::Tiger,
        Anuradha | Jyeshtha => Yoni::Deer,
        PurvaAshadha | Shravana => Yoni::Monkey,
        UttaraAshadha => Yoni::Mongoose,
        Dhanishtha | PurvaBhadrapada => Yoni::Lion,
    }
}

/// Yoni compatibility, read `[boy][girl]` in [`Yoni`] declaration order.
#[rustfmt::skip]
pub const YONI_MATRIX: [[u8; 14]; 14] = [
    // Ho El Sh Se Do Ca Ra Co Bu Ti De Mo Mg Li
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1], // Horse
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0], // Elephant
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1], // Sheep
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2], // Serpent
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1], // Dog
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1], // Cat
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2], // Rat
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1], // Cow
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1], // Buffalo
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1], // Tiger
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1], // Deer
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2], // Monkey
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2], // Mongoose
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4], // Lion
];

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
        | Revati => Gana::Deva,
        Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
        | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
        Krittika | Ashlesha | Magha | Chitra | Vishakha | Jyeshtha | Mula | Dhanishtha
        | Shatabhisha => Gana::Rakshasa,
    }
}

/// Nadi (constitution) class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Ardra | Punarvasu | UttaraPhalguni | Hasta | Jyeshtha | Mula | Shatabhisha
        | PurvaBhadrapada => Nadi::Adi,
        Bharani | Mrigashira | Pushya | PurvaPhalguni | Chitra | Anuradha | PurvaAshadha
        | Dhanishtha | UttaraBhadrapada => Nadi::Madhya,
        Krittika | Rohini | Ashlesha | Magha | Swati | Vishakha | UttaraAshadha | Shravana
        | Revati => Nadi::Antya,
    }
}

/// Graha Maitri points, read `[boy lord][girl lord]` in sapta graha order
/// (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn).
#[rustfmt::skip]
pub const MAITRI_MATRIX: [[f64; 7]; 7] = [
    [5.0, 5.0, 5.0, 4.0, 5.0, 0.0, 0.0], // Sun
    [5.0, 5.0, 4.0, 1.0, 4.0, 0.5, 0.5], // Moon
    [5.0, 4.0, 5.0, 0.5, 5.0, 3.0, 0.5], // Mars
    [4.0, 1.0, 0.5, 5.0, 0.5, 5.0, 4.0], // Mercury
    [5.0, 4.0, 5.0, 0.5, 5.0, 0.5, 3.0], // Jupiter
    [0.0, 0.5, 3.0, 5.0, 0.5, 5.0, 5.0], // Venus
    [0.0, 0.5, 0.5, 4.0, 3.0, 5.0, 5.0], // Saturn
];

/// Maitri points between two sign lords. Nodes never rule a sign and score 0.
pub fn maitri_points(boy_lord: Graha, girl_lord: Graha) -> f64 {
    match (boy_lord, girl_lord) {
        (Graha::Rahu | Graha::Ketu, _) | (_, Graha::Rahu | Graha::Ketu) => 0.0,
        (a, b) => MAITRI_MATRIX[a.index() as usize][b.index() as usize],
    }
}
