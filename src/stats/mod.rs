//! Statistics derived from an expanded roster timeline: weekend coverage,
//! consecutive-work block counts, shift-category tallies, and holiday
//! collisions. Everything here consumes the cycle expander's output; no
//! module in this tree does its own calendar arithmetic.

pub mod blocks;
pub mod holidays;
pub mod weekends;

use serde::{Deserialize, Serialize};

use crate::core::roster::{Roster, RosterAnchor};
use crate::core::types::ShiftCategory;
use crate::expand::expand;

pub use blocks::BlockCounts;
pub use holidays::{Holiday, HolidayCollision};
pub use weekends::WeekendSummary;

/// Work days tallied per shift category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub days: u32,
    pub mid_days: u32,
    pub afternoons: u32,
    pub late_days: u32,
    pub midnights: u32,
    pub unknown: u32,
}

impl CategoryCounts {
    /// Work days in any of the given categories; an empty selection matches
    /// every category.
    #[must_use]
    pub fn in_categories(&self, categories: &[ShiftCategory]) -> u32 {
        if categories.is_empty() {
            return self.total();
        }
        categories.iter().map(|c| self.count(*c)).sum()
    }

    #[must_use]
    pub fn count(&self, category: ShiftCategory) -> u32 {
        match category {
            ShiftCategory::Days => self.days,
            ShiftCategory::MidDays => self.mid_days,
            ShiftCategory::Afternoons => self.afternoons,
            ShiftCategory::LateDays => self.late_days,
            ShiftCategory::Midnights => self.midnights,
            ShiftCategory::Unknown => self.unknown,
            ShiftCategory::Off => 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.days + self.mid_days + self.afternoons + self.late_days + self.midnights + self.unknown
    }
}

/// Full statistical summary of one roster over its schedule window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStats {
    pub weekends: WeekendSummary,
    pub blocks: BlockCounts,
    pub categories: CategoryCounts,
    pub holiday_collisions: Vec<HolidayCollision>,
}

impl RosterStats {
    /// Derive all statistics for a roster under the given anchor.
    #[must_use]
    pub fn derive(roster: &Roster, anchor: &RosterAnchor, holidays: &[Holiday]) -> Self {
        let weekends = weekends::classify_weekends(expand(&roster.pattern, anchor));
        let blocks = blocks::count_blocks(expand(&roster.pattern, anchor).map(|d| d.is_work()));
        let holiday_collisions = holidays::find_collisions(expand(&roster.pattern, anchor), holidays);

        let mut categories = CategoryCounts::default();
        for day in expand(&roster.pattern, anchor) {
            if let Some(shift) = day.shift() {
                match shift.category {
                    ShiftCategory::Days => categories.days += 1,
                    ShiftCategory::MidDays => categories.mid_days += 1,
                    ShiftCategory::Afternoons => categories.afternoons += 1,
                    ShiftCategory::LateDays => categories.late_days += 1,
                    ShiftCategory::Midnights => categories.midnights += 1,
                    ShiftCategory::Unknown => categories.unknown += 1,
                    ShiftCategory::Off => {}
                }
            }
        }

        Self {
            weekends,
            blocks,
            categories,
            holiday_collisions,
        }
    }
}
