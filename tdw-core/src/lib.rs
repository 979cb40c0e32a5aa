//! Core types for Thema der Woche.
//!
//! This crate turns a setup snapshot and a theme catalog into a weekly schedule
//! and serializes it as an iCalendar document:
//! - `theme` and `setup` hold the read-only inputs
//! - `schedule` resolves weeks and days
//! - `ics` encodes (and reads back) the calendar file
//! - `provider` supplies the clock and UID token used while encoding

pub mod error;
pub mod ics;
pub mod mode;
pub mod pick;
pub mod provider;
pub mod schedule;
pub mod setup;
pub mod theme;

pub use error::{TdwError, TdwResult};
pub use mode::AppMode;
pub use schedule::{DayEvent, WeekPlan, plan_weeks, resolve};
pub use setup::SetupRecord;
pub use theme::{Catalog, ThemeCatalogEntry};
