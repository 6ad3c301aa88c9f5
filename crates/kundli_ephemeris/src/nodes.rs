//! Mean lunar nodes.
//!
//! Rahu is the Moon's mean ascending node (Meeus, Chapter 47); Ketu is
//! always the point opposite.

/// Longitude of the mean ascending node, mean equinox of date, degrees in [0, 360).
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0 - t4 / 60_616_000.0)
        .rem_euclid(360.0)
}

/// Ketu from Rahu.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    (rahu_deg + 180.0).rem_euclid(360.0)
}
