//! Ashtakoot Guna Milan between two charts.

use kundli_vedic_base::{AshtakootResult, Body, MoonPlacement, ashtakoot};

use crate::chart::Chart;

/// Moon placement that feeds the compatibility factors.
pub fn moon_placement(chart: &Chart) -> MoonPlacement {
    let moon = chart.planet(Body::Moon);
    MoonPlacement::new(moon.rashi, moon.nakshatra)
}

/// Score `boy` against `girl`. The factors are not symmetric.
pub fn compute_match(boy: &Chart, girl: &Chart) -> AshtakootResult {
    ashtakoot(&moon_placement(boy), &moon_placement(girl))
}
