//! Shared utility functions for vedic calculations.
//!
//! Signs, nakshatras and houses are exposed as 1-based indices. The
//! `wrap_*` helpers fold any integer back into range so that arithmetic on
//! indices can never escape it.

/// Span of one rashi in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-20 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Fold an integer into the 1-based sign range 1..=12.
pub fn wrap_sign_index(index: i32) -> u8 {
    (index - 1).rem_euclid(12) as u8 + 1
}

/// Fold an integer into the 1-based nakshatra range 1..=27.
pub fn wrap_nakshatra_index(index: i32) -> u8 {
    (index - 1).rem_euclid(27) as u8 + 1
}

/// Fold an integer into the 1-based house range 1..=12.
pub fn wrap_house_index(index: i32) -> u8 {
    (index - 1).rem_euclid(12) as u8 + 1
}

/// 1-based sign index (1 = Aries) of a sidereal longitude.
pub fn sign_index(lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);
    wrap_sign_index((lon / SIGN_SPAN).floor() as i32 + 1)
}

/// 1-based nakshatra index (1 = Ashwini) of a sidereal longitude.
pub fn nakshatra_index(lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);
    wrap_nakshatra_index((lon * 27.0 / 360.0).floor() as i32 + 1)
}

/// Whole-sign house of `sign` counted from the ascendant sign (both 1-based).
pub fn house_index(sign: u8, ascendant_sign: u8) -> u8 {
    wrap_house_index(sign as i32 - ascendant_sign as i32 + 1)
}

/// Forward cyclic distance in signs from `from` to `to`, in 0..=11.
pub fn signs_ahead(from: u8, to: u8) -> u8 {
    (to as i32 - from as i32).rem_euclid(12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn wrap_helpers_stay_in_range() {
        for i in -40..40 {
            assert!((1..=12).contains(&wrap_sign_index(i)));
            assert!((1..=27).contains(&wrap_nakshatra_index(i)));
            assert!((1..=12).contains(&wrap_house_index(i)));
        }
        assert_eq!(wrap_sign_index(13), 1);
        assert_eq!(wrap_sign_index(0), 12);
        assert_eq!(wrap_nakshatra_index(28), 1);
    }

    #[test]
    fn sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 1);
        assert_eq!(sign_index(29.999), 1);
        assert_eq!(sign_index(30.0), 2);
        assert_eq!(sign_index(40.0), 2);
        assert_eq!(sign_index(359.999), 12);
        assert_eq!(sign_index(360.0), 1);
        assert_eq!(sign_index(-15.0), 12);
    }

    #[test]
    fn nakshatra_index_boundaries() {
        assert_eq!(nakshatra_index(0.0), 1);
        assert_eq!(nakshatra_index(40.0), 4);
        assert_eq!(nakshatra_index(359.999), 27);
    }

    #[test]
    fn house_counts_from_ascendant() {
        assert_eq!(house_index(1, 1), 1);
        assert_eq!(house_index(8, 1), 8);
        assert_eq!(house_index(1, 12), 2);
        assert_eq!(house_index(11, 12), 12);
    }

    #[test]
    fn signs_ahead_is_cyclic() {
        assert_eq!(signs_ahead(1, 1), 0);
        assert_eq!(signs_ahead(12, 1), 1);
        assert_eq!(signs_ahead(1, 12), 11);
    }
}
