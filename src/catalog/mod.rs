//! Roster-set loading and indexing.

pub mod store;

pub use store::{LoadReport, RosterCatalog, RosterData, RosterRecord};
