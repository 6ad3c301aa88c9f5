//! Calendar arithmetic for dasha boundaries.
//!
//! A span of Vimshottari years is applied as whole calendar months plus a
//! fraction of the following calendar month, interpolated between its two
//! real month boundaries. The mapping is monotonic in the offset, so later
//! offsets never land on earlier instants even when a month-end anchor
//! clamps into a short month. Boundaries are always computed from a fixed
//! anchor and a cumulative offset, never by stepping a cursor.

use chrono::{DateTime, Months, Utc};

/// Offsets this close to a whole month are treated as whole.
const MONTH_EPSILON: f64 = 1e-9;

fn add_months(start: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    u32::try_from(months)
        .ok()
        .and_then(|m| start.checked_add_months(Months::new(m)))
}

/// `start` moved forward by `years` Vimshottari years.
///
/// Saturates at the end of chrono's representable range.
pub fn add_years(start: DateTime<Utc>, years: f64) -> DateTime<Utc> {
    let months = years.max(0.0) * 12.0;
    let nearest = months.round();
    let months = if (months - nearest).abs() < MONTH_EPSILON {
        nearest
    } else {
        months
    };
    let whole = months.floor();
    let fraction = months - whole;

    let Some(lower) = add_months(start, whole as i64) else {
        return DateTime::<Utc>::MAX_UTC;
    };
    if fraction == 0.0 {
        return lower;
    }
    let Some(upper) = add_months(start, whole as i64 + 1) else {
        return DateTime::<Utc>::MAX_UTC;
    };
    let span_ms = (upper - lower).num_milliseconds() as f64;
    lower
        .checked_add_signed(chrono::Duration::milliseconds((fraction * span_ms).round() as i64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
