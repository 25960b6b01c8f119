//! Weekend classification over an expanded timeline.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::expand::ExpandedDay;

/// How a roster treats the weekends in its schedule window.
///
/// A weekend pair is a Saturday plus the Sunday that follows it. Pairs with
/// only one day inside the window (at either edge of the schedule) still
/// count, classified from whatever is observable; the missing day is treated
/// as not worked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendSummary {
    /// Weekend pairs with at least one day in the window
    pub total_weekends: u32,

    /// Both Saturday and Sunday worked
    pub full_weekends_worked: u32,

    /// Saturday worked, Sunday off (or outside the window)
    pub saturdays_only_worked: u32,

    /// Sunday worked, Saturday off (or outside the window)
    pub sundays_only_worked: u32,

    /// Neither day worked
    pub weekends_off: u32,

    /// Individual Saturday counts for coverage scoring
    pub total_saturdays: u32,
    pub saturdays_worked: u32,

    /// Individual Sunday counts for coverage scoring
    pub total_sundays: u32,
    pub sundays_worked: u32,
}

/// Classify every weekend pair touched by the expanded timeline.
pub fn classify_weekends<'a>(days: impl Iterator<Item = ExpandedDay<'a>>) -> WeekendSummary {
    // One pass to record the work state of each in-window Sat/Sun
    let mut worked: HashMap<NaiveDate, bool> = HashMap::new();
    let mut summary = WeekendSummary::default();

    for day in days {
        match day.weekday {
            Weekday::Sat => {
                summary.total_saturdays += 1;
                if day.is_work() {
                    summary.saturdays_worked += 1;
                }
                worked.insert(day.date, day.is_work());
            }
            Weekday::Sun => {
                summary.total_sundays += 1;
                if day.is_work() {
                    summary.sundays_worked += 1;
                }
                worked.insert(day.date, day.is_work());
            }
            _ => {}
        }
    }

    // Pair each observed Saturday with its following Sunday, then pick up
    // orphan Sundays whose Saturday fell before the window
    for (&date, &sat_worked) in &worked {
        if date.weekday() != Weekday::Sat {
            continue;
        }
        let sun_worked = worked.get(&(date + Duration::days(1))).copied();
        tally_pair(&mut summary, sat_worked, sun_worked.unwrap_or(false));
    }

    for (&date, &sun_worked) in &worked {
        if date.weekday() == Weekday::Sun && !worked.contains_key(&(date - Duration::days(1))) {
            tally_pair(&mut summary, false, sun_worked);
        }
    }

    summary
}

fn tally_pair(summary: &mut WeekendSummary, sat_worked: bool, sun_worked: bool) {
    summary.total_weekends += 1;
    match (sat_worked, sun_worked) {
        (true, true) => summary.full_weekends_worked += 1,
        (true, false) => summary.saturdays_only_worked += 1,
        (false, true) => summary.sundays_only_worked += 1,
        (false, false) => summary.weekends_off += 1,
    }
}
