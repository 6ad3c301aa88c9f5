//! Read-only queries against a generated dasha tree.

use chrono::{DateTime, Utc};

use super::types::{DashaPeriod, DashaTimeline};

/// The period in `periods` that contains `at`.
pub fn find_active_period(periods: &[DashaPeriod], at: DateTime<Utc>) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(at))
}

/// Active chain at `at`, from Mahadasha down to the deepest generated level.
///
/// Empty when `at` is before birth or after the cycle ends.
pub fn current_periods(timeline: &DashaTimeline, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
    let mut chain = Vec::new();
    let mut level = timeline.mahadashas.as_slice();
    while let Some(active) = find_active_period(level, at) {
        chain.push(active);
        level = active.children.as_slice();
    }
    chain
}
