//! Lagna (ascendant) and equal house cusps.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon:
//! `Asc = atan2(cos θ, -(sin θ cos ε + tan φ sin ε))` with θ the local
//! sidereal time, ε the obliquity and φ the geographic latitude
//! (Meeus, Chapter 14). The result is tropical, equinox of date.

use kundli_vedic_base::GeoLocation;

use crate::sidereal::local_sidereal_time_rad;

/// Ascendant from local sidereal time, latitude and obliquity (radians in,
/// degrees out, [0, 360)).
pub fn ascendant_from_lst_deg(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin()),
    );
    asc.to_degrees().rem_euclid(360.0)
}

/// Tropical ascendant at a UTC Julian Date and location, degrees.
pub fn ascendant_deg(jd_utc: f64, geo: &GeoLocation, obliquity_deg: f64) -> f64 {
    let lst = local_sidereal_time_rad(jd_utc, geo.longitude_rad());
    ascendant_from_lst_deg(lst, geo.latitude_rad(), obliquity_deg.to_radians())
}

/// Twelve equal 30° house cusps starting at the ascendant.
pub fn equal_house_cusps(ascendant_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| (ascendant_deg + 30.0 * i as f64).rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.409_092_8; // 23.4393 deg

    #[test]
    fn equinox_on_meridian_raises_cancer_point() {
        let asc = ascendant_from_lst_deg(0.0, 0.0, EPS);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn solstice_on_meridian_raises_libra_point() {
        let asc = ascendant_from_lst_deg(std::f64::consts::FRAC_PI_2, 0.0, EPS);
        assert!((asc - 180.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_advances_with_lst() {
        let lat = 28.6_f64.to_radians();
        let a = ascendant_from_lst_deg(1.0, lat, EPS);
        let b = ascendant_from_lst_deg(1.1, lat, EPS);
        assert!((b - a).rem_euclid(360.0) < 30.0);
        assert!((b - a).rem_euclid(360.0) > 0.0);
    }

    #[test]
    fn cusps_are_equal_and_wrap() {
        let cusps = equal_house_cusps(350.0);
        assert_eq!(cusps[0], 350.0);
        assert_eq!(cusps[1], 20.0);
        assert_eq!(cusps[11], 320.0);
    }
}
