//! Proportional sub-period generation.
//!
//! A node of `Y` years is split into nine children starting at the node's
//! own lord: child years = `Y * lord_years / 120`, so the children always
//! sum to the node.
//!
//! Every boundary is placed at the birth anchor plus the absolute number of
//! years elapsed since birth, so all levels share one monotonic time axis.

use chrono::{DateTime, Utc};

use crate::graha::Graha;

use super::calendar::add_years;
use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS, lord_position, lord_years};

/// Snap the last child's end to the parent's end to absorb calendar drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end: DateTime<Utc>) {
    if let Some(last) = children.last_mut() {
        last.end = parent_end;
    }
}

/// Nine children of a period, without grandchildren.
///
/// `parent_offset_years` is the parent's start measured from `anchor`.
pub fn proportional_children(
    parent: &DashaPeriod,
    child_level: DashaLevel,
    anchor: DateTime<Utc>,
    parent_offset_years: f64,
) -> Vec<DashaPeriod> {
    let first = lord_position(parent.lord);
    let sequence: Vec<(Graha, f64)> = (0..VIMSHOTTARI_LORDS.len())
        .map(|i| {
            let lord = VIMSHOTTARI_LORDS[(first + i) % VIMSHOTTARI_LORDS.len()];
            (lord, parent.duration_years * lord_years(lord) / VIMSHOTTARI_TOTAL_YEARS)
        })
        .collect();

    let mut children = Vec::with_capacity(sequence.len());
    let mut offset = parent_offset_years;
    for (lord, years) in sequence {
        let start = add_years(anchor, offset);
        offset += years;
        children.push(DashaPeriod {
            lord,
            level: child_level,
            start,
            end: add_years(anchor, offset),
            duration_years: years,
            children: Vec::new(),
        });
    }

    snap_last_child_end(&mut children, parent.end);
    children
}

/// Fill `period` with descendants down to `max_level`.
///
/// `offset_years` is the period's start measured from `anchor`.
pub fn expand(
    period: &mut DashaPeriod,
    max_level: DashaLevel,
    anchor: DateTime<Utc>,
    offset_years: f64,
) {
    if period.level >= max_level {
        return;
    }
    let Some(child_level) = period.level.child_level() else {
        return;
    };
    period.children = proportional_children(period, child_level, anchor, offset_years);
    let mut child_offset = offset_years;
    for child in &mut period.children {
        expand(child, max_level, anchor, child_offset);
        child_offset += child.duration_years;
    }
}
