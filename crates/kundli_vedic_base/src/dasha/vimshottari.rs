//! Vimshottari sequence, birth balance and timeline generation.

use chrono::{DateTime, Utc};
use log::debug;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::util::wrap_nakshatra_index;

use super::calendar::add_years;
use super::subperiod::expand;
use super::types::{DashaLevel, DashaPeriod, DashaTimeline};

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha lengths in years, aligned with [`VIMSHOTTARI_LORDS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the Vimshottari sequence.
pub(crate) fn lord_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Mahadasha length of a graha in years.
pub fn lord_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[lord_position(graha)]
}

/// Ruling graha of a 1-based nakshatra index.
pub fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    let idx = wrap_nakshatra_index(nakshatra_index as i32);
    VIMSHOTTARI_LORDS[(idx as usize - 1) % 9]
}

/// Where the cycle stands at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 1-based nakshatra index of the Moon.
    pub nakshatra_index: u8,
    pub lord: Graha,
    /// Share of the nakshatra already traversed, in [0, 1).
    pub fraction_elapsed: f64,
    /// Years of the first Mahadasha still to run.
    pub balance_years: f64,
}

/// Birth balance from the Moon's nakshatra and its elapsed fraction.
pub fn balance_from_nakshatra(nakshatra_index: u8, fraction_elapsed: f64) -> BirthBalance {
    let nakshatra_index = wrap_nakshatra_index(nakshatra_index as i32);
    let fraction_elapsed = if fraction_elapsed.is_finite() {
        fraction_elapsed.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    };
    let lord = nakshatra_lord(nakshatra_index);
    BirthBalance {
        nakshatra_index,
        lord,
        fraction_elapsed,
        balance_years: lord_years(lord) * (1.0 - fraction_elapsed),
    }
}

/// Birth balance from the Moon's sidereal longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    balance_from_nakshatra(info.nakshatra_index, info.fraction_elapsed)
}

/// Vimshottari timeline from the Moon's nakshatra position.
///
/// The first Mahadasha runs only for the birth balance; the remaining eight
/// run their full length. Levels deeper than Pratyantardasha are clamped.
pub fn vimshottari_from_nakshatra(
    nakshatra_index: u8,
    fraction_elapsed: f64,
    birth: DateTime<Utc>,
    max_level: u8,
) -> DashaTimeline {
    let balance = balance_from_nakshatra(nakshatra_index, fraction_elapsed);
    let max_level = DashaLevel::from_u8_clamped(max_level);
    let first = lord_position(balance.lord);

    let mut offset = 0.0;
    let mut mahadashas = Vec::with_capacity(VIMSHOTTARI_LORDS.len());
    for i in 0..VIMSHOTTARI_LORDS.len() {
        let lord = VIMSHOTTARI_LORDS[(first + i) % VIMSHOTTARI_LORDS.len()];
        let years = if i == 0 {
            balance.balance_years
        } else {
            lord_years(lord)
        };
        let start_offset = offset;
        let start = add_years(birth, start_offset);
        offset += years;
        let mut period = DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start,
            end: add_years(birth, offset),
            duration_years: years,
            children: Vec::new(),
        };
        expand(&mut period, max_level, birth, start_offset);
        mahadashas.push(period);
    }

    debug!(
        "vimshottari: nakshatra {} lord {} balance {:.4}y levels {}",
        balance.nakshatra_index,
        balance.lord.english_name(),
        balance.balance_years,
        max_level.name()
    );

    DashaTimeline {
        birth,
        nakshatra: Nakshatra::from_number(balance.nakshatra_index),
        nakshatra_index: balance.nakshatra_index,
        percent_elapsed: balance.fraction_elapsed,
        percent_left: 1.0 - balance.fraction_elapsed,
        max_level,
        mahadashas,
    }
}

/// Vimshottari timeline from the Moon's sidereal longitude at birth.
pub fn vimshottari_timeline(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> DashaTimeline {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    vimshottari_from_nakshatra(info.nakshatra_index, info.fraction_elapsed, birth, max_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 3, 15, 6, 30, 0).unwrap()
    }

    #[test]
    fn years_sum_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn lords_cycle_every_nine_nakshatras() {
        assert_eq!(nakshatra_lord(1), Graha::Ketu);
        assert_eq!(nakshatra_lord(4), Graha::Chandra);
        assert_eq!(nakshatra_lord(10), Graha::Ketu);
        assert_eq!(nakshatra_lord(27), Graha::Buddh);
    }

    #[test]
    fn ashwini_half_elapsed() {
        let b = birth_balance(NAKSHATRA_SPAN / 2.0);
        assert_eq!(b.lord, Graha::Ketu);
        assert!((b.balance_years - 3.5).abs() < 1e-9);
    }

    #[test]
    fn first_mahadasha_is_balance() {
        let tl = vimshottari_timeline(birth(), NAKSHATRA_SPAN / 2.0, 1);
        assert_eq!(tl.mahadashas.len(), 9);
        let first = &tl.mahadashas[0];
        assert_eq!(first.lord, Graha::Ketu);
        assert!((first.duration_years - 3.5).abs() < 1e-9);
        assert_eq!(first.start, birth());
        assert!((tl.percent_left - 0.5).abs() < 1e-9);
        let sum: f64 = first.children.iter().map(|c| c.duration_years).sum();
        assert!((sum - 3.5).abs() < 1e-9);
    }

    #[test]
    fn later_mahadashas_run_full_length() {
        let tl = vimshottari_from_nakshatra(4, 0.25, birth(), 0);
        let lords: Vec<Graha> = tl.mahadashas.iter().map(|p| p.lord).collect();
        assert_eq!(lords[0], Graha::Chandra);
        assert_eq!(lords[1], Graha::Mangal);
        assert_eq!(lords[8], Graha::Surya);
        assert!((tl.mahadashas[0].duration_years - 7.5).abs() < 1e-12);
        assert!((tl.mahadashas[1].duration_years - 7.0).abs() < 1e-12);
        assert!(tl.mahadashas.iter().all(|p| p.children.is_empty()));
    }

    #[test]
    fn mahadashas_are_contiguous() {
        let tl = vimshottari_timeline(birth(), 123.4, 2);
        for pair in tl.mahadashas.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: f64 = tl.mahadashas.iter().map(|p| p.duration_years).sum();
        let expected = 120.0 - lord_years(tl.mahadashas[0].lord) * tl.percent_elapsed;
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn deterministic() {
        let a = vimshottari_timeline(birth(), 200.0, 2);
        let b = vimshottari_timeline(birth(), 200.0, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn max_level_clamped() {
        let tl = vimshottari_timeline(birth(), 10.0, 7);
        assert_eq!(tl.max_level, DashaLevel::Pratyantardasha);
        let grandchild = &tl.mahadashas[0].children[0].children[0];
        assert!(grandchild.children.is_empty());
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        let tl = vimshottari_from_nakshatra(1, 1.5, birth(), 0);
        assert!(tl.mahadashas[0].duration_years >= 0.0);
        assert!(tl.percent_elapsed < 1.0);
    }
}
