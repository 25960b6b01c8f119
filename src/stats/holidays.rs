//! Holiday collision detection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::expand::ExpandedDay;

/// A holiday supplied by the calling application for the schedule period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// A work day that falls on a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCollision {
    pub date: NaiveDate,
    pub name: String,
    /// Shift code worked on that holiday
    pub code: String,
}

/// Scan an expanded timeline for work days that land on holidays.
///
/// Holidays outside the schedule window are ignored; so are holidays that
/// fall on off days.
pub fn find_collisions<'a>(
    days: impl Iterator<Item = ExpandedDay<'a>>,
    holidays: &[Holiday],
) -> Vec<HolidayCollision> {
    let by_date: HashMap<NaiveDate, &str> = holidays
        .iter()
        .map(|h| (h.date, h.name.as_str()))
        .collect();

    let mut collisions = Vec::new();
    for day in days {
        let Some(&name) = by_date.get(&day.date) else {
            continue;
        };
        if let Some(shift) = day.shift() {
            collisions.push(HolidayCollision {
                date: day.date,
                name: name.to_string(),
                code: shift.code.clone(),
            });
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::{CyclePattern, DaySlot, CYCLE_DAYS};
    use crate::core::roster::RosterAnchor;
    use crate::core::shift_code::ShiftCodeTable;
    use crate::expand::expand;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_collision_on_worked_holiday_only() {
        let table = ShiftCodeTable::new();
        // Work day 1, off day 2, rest off
        let mut slots = vec![DaySlot::Off; CYCLE_DAYS];
        slots[0] = DaySlot::Work(table.resolve("0700D"));
        let pattern = CyclePattern::new(slots).unwrap();
        let anchor = RosterAnchor::new(ymd(2024, 12, 25), 1);

        let holidays = vec![
            Holiday {
                date: ymd(2024, 12, 25),
                name: "Christmas Day".into(),
            },
            Holiday {
                date: ymd(2024, 12, 26),
                name: "Boxing Day".into(),
            },
            Holiday {
                date: ymd(2023, 12, 25),
                name: "Outside window".into(),
            },
        ];

        let collisions = find_collisions(expand(&pattern, &anchor), &holidays);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].name, "Christmas Day");
        assert_eq!(collisions[0].code, "0700D");
    }
}
