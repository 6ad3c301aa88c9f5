//! Vimshottari dasha for a built chart.

use chrono::{DateTime, Utc};
use log::debug;

use kundli_vedic_base::{Body, DashaPeriod, DashaTimeline, current_periods, vimshottari_timeline};

use crate::chart::Chart;

/// Vimshottari timeline seeded by the chart's Moon.
///
/// `max_level` 0 yields Mahadashas only, 1 adds Antardashas and 2 adds
/// Pratyantardashas; larger values are clamped to 2.
pub fn compute_dasha(chart: &Chart, max_level: u8) -> DashaTimeline {
    let moon = chart.planet(Body::Moon).longitude;
    let timeline = vimshottari_timeline(chart.instant, moon, max_level);
    debug!(
        "dasha from {}: {} nakshatra, {:.2}% of first period left",
        chart.instant,
        timeline.nakshatra.name(),
        timeline.percent_left * 100.0
    );
    timeline
}

/// Chain of periods active at `at`, outermost first. Empty outside the timeline.
pub fn current_dasha(timeline: &DashaTimeline, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
    current_periods(timeline, at)
}
