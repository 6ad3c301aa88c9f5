//! Own and exaltation signs of the sapta grahas.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Exaltation sign. Returns None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Returns an empty slice for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// True when the graha occupies an own sign or its exaltation sign.
pub fn is_own_or_exalted(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi) || exaltation_rashi(graha) == Some(rashi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{SAPTA_GRAHAS, rashi_lord};

    #[test]
    fn own_signs_agree_with_lordship() {
        for g in SAPTA_GRAHAS {
            for r in own_signs(g) {
                assert_eq!(rashi_lord(*r), g);
            }
        }
    }

    #[test]
    fn mars_dignity() {
        assert!(is_own_or_exalted(Graha::Mangal, Rashi::Mesha));
        assert!(is_own_or_exalted(Graha::Mangal, Rashi::Vrischika));
        assert!(is_own_or_exalted(Graha::Mangal, Rashi::Makara));
        assert!(!is_own_or_exalted(Graha::Mangal, Rashi::Karka));
    }

    #[test]
    fn nodes_never_dignified() {
        assert!(own_signs(Graha::Rahu).is_empty());
        assert_eq!(exaltation_rashi(Graha::Ketu), None);
    }
}
