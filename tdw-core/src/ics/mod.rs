//! ICS file generation and parsing.
//!
//! This module writes all-day schedules as RFC 5545 text and reads them back.

mod escape;
mod generate;
mod parse;

pub use escape::escape_text;
pub use generate::{IcsEncoder, encode};
pub use parse::{ParsedEvent, read_events};

/// File name offered for the exported calendar.
pub const ICS_FILENAME: &str = "thema-der-woche.ics";
