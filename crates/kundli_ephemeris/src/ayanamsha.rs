//! Lahiri ayanamsha and mean obliquity of the ecliptic.
//!
//! The ayanamsha is anchored at its J2000.0 value and carried to other
//! epochs by the IAU 2006 general precession in longitude (Capitaine,
//! Wallace & Chapront 2003, Table 1).

/// Lahiri ayanamsha at J2000.0, degrees (23°51′10.8″).
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// `t` is Julian centuries since J2000.0.
pub fn general_precession_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 - t * 0.0000000383))))
}

/// General precession in longitude, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}

/// Lahiri ayanamsha in degrees at `t` centuries since J2000.0.
pub fn lahiri_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_deg(t)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_2 * t
}
