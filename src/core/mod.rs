//! Core data model: shift codes, cycle patterns, rosters, and the anchor
//! that ties cycle-relative day indexes to calendar dates.

pub mod pattern;
pub mod roster;
pub mod shift_code;
pub mod types;
