//! ICS read-back using the icalendar crate's parser.

use chrono::NaiveDate;
use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{TdwError, TdwResult};

/// An all-day VEVENT as read back from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub uid: String,
    pub start: NaiveDate,
    /// Exclusive end date.
    pub end: NaiveDate,
    pub summary: String,
    pub description: String,
}

/// Parse every VEVENT of an ICS document, in document order.
pub fn read_events(content: &str) -> TdwResult<Vec<ParsedEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| TdwError::IcsParse(e.to_string()))?;

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_event)
        .collect()
}

fn parse_event(vevent: &Component<'_>) -> TdwResult<ParsedEvent> {
    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .ok_or_else(|| TdwError::IcsParse("VEVENT without UID".into()))?;

    let start = date_prop(vevent, "DTSTART", &uid)?;
    let end = date_prop(vevent, "DTEND", &uid)?;

    // The parser has already unescaped TEXT values
    let text = |name: &str| {
        vevent
            .find_prop(name)
            .map(|p| p.val.to_string())
            .unwrap_or_default()
    };

    Ok(ParsedEvent {
        summary: text("SUMMARY"),
        description: text("DESCRIPTION"),
        uid,
        start,
        end,
    })
}

fn date_prop(vevent: &Component<'_>, name: &str, uid: &str) -> TdwResult<NaiveDate> {
    let prop = vevent
        .find_prop(name)
        .ok_or_else(|| TdwError::IcsParse(format!("{uid}: missing {name}")))?;

    match DatePerhapsTime::try_from(prop) {
        Ok(DatePerhapsTime::Date(date)) => Ok(date),
        Ok(DatePerhapsTime::DateTime(_)) => Err(TdwError::IcsParse(format!(
            "{uid}: {name} is not an all-day date"
        ))),
        Err(_) => Err(TdwError::IcsParse(format!("{uid}: invalid {name}"))),
    }
}
