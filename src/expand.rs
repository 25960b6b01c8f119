//! Cycle expansion: turning a 56-day repeating pattern plus a calendar
//! anchor into date-indexed schedule entries.
//!
//! This module is the only place cycle arithmetic lives. Every consumer —
//! statistics, scoring, both matchers — goes through [`expand`] or
//! [`day_at`], so all of them agree on day alignment by construction.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::pattern::{CyclePattern, DaySlot, CYCLE_DAYS};
use crate::core::roster::RosterAnchor;
use crate::core::shift_code::ShiftCode;

/// One calendar day of an expanded roster timeline.
///
/// Derived, never stored. The borrow ties it to the pattern it came from.
#[derive(Debug, Clone, Copy)]
pub struct ExpandedDay<'a> {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// 1-based index into the cycle, always in `1..=56`
    pub day_index_in_cycle: u32,
    pub slot: &'a DaySlot,
}

impl<'a> ExpandedDay<'a> {
    #[must_use]
    pub fn is_work(&self) -> bool {
        self.slot.is_work()
    }

    #[must_use]
    pub fn shift(&self) -> Option<&'a ShiftCode> {
        self.slot.shift()
    }
}

/// Where a calendar date falls relative to a roster's schedule window.
///
/// Dates outside the window are neither work days nor off days; callers
/// must treat them distinctly from "off" in every derived statistic.
#[derive(Debug, Clone, Copy)]
pub enum DayAt<'a> {
    /// Date precedes the anchor's start date
    BeforeWindow,
    /// Date is at or past the end of the expanded window
    AfterWindow,
    /// Date is inside the window
    Scheduled(ExpandedDay<'a>),
}

impl<'a> DayAt<'a> {
    #[must_use]
    pub fn in_window(&self) -> bool {
        matches!(self, Self::Scheduled(_))
    }

    /// True only for an in-window off day.
    #[must_use]
    pub fn is_off(&self) -> bool {
        matches!(self, Self::Scheduled(day) if !day.is_work())
    }

    /// True only for an in-window work day.
    #[must_use]
    pub fn is_work(&self) -> bool {
        matches!(self, Self::Scheduled(day) if day.is_work())
    }

    #[must_use]
    pub fn shift(&self) -> Option<&'a ShiftCode> {
        match self {
            Self::Scheduled(day) => day.shift(),
            _ => None,
        }
    }
}

/// Expand a pattern over its full schedule window.
///
/// Produces exactly `56 * num_cycles` entries starting at the anchor's
/// start date. Deterministic and restartable: the iterator borrows the
/// pattern and computes each day on demand.
pub fn expand<'a>(
    pattern: &'a CyclePattern,
    anchor: &RosterAnchor,
) -> impl Iterator<Item = ExpandedDay<'a>> {
    let start = anchor.start_date;
    (0..anchor.window_days()).map(move |offset| {
        let date = start + chrono::Duration::days(offset);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day_index = (offset % CYCLE_DAYS as i64) as u32 + 1;
        ExpandedDay {
            date,
            weekday: date.weekday(),
            day_index_in_cycle: day_index,
            slot: pattern.slot(day_index),
        }
    })
}

/// Point query for a single calendar date.
#[must_use]
pub fn day_at<'a>(pattern: &'a CyclePattern, anchor: &RosterAnchor, date: NaiveDate) -> DayAt<'a> {
    let days_since_start = date.signed_duration_since(anchor.start_date).num_days();
    if days_since_start < 0 {
        return DayAt::BeforeWindow;
    }
    if days_since_start >= anchor.window_days() {
        return DayAt::AfterWindow;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day_index = (days_since_start % CYCLE_DAYS as i64) as u32 + 1;
    DayAt::Scheduled(ExpandedDay {
        date,
        weekday: date.weekday(),
        day_index_in_cycle: day_index,
        slot: pattern.slot(day_index),
    })
}
