//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle is seeded by the Moon's nakshatra at
//! birth. Periods form a tree: Mahadasha, Antardasha and optionally
//! Pratyantardasha, where every node's children exactly fill the node.
//! All boundaries are derived from the birth instant, so identical inputs
//! give identical trees.

pub mod calendar;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use calendar::add_years;
pub use query::{current_periods, find_active_period};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTimeline, MAX_DASHA_LEVEL};
pub use vimshottari::{
    BirthBalance, VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    balance_from_nakshatra, birth_balance, lord_years, nakshatra_lord, vimshottari_from_nakshatra,
    vimshottari_timeline,
};
