//! ICS file generation.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::escape::escape_text;
use crate::provider::{Clock, RandomUidSource, SystemClock, UidSource};
use crate::schedule::DayEvent;

const PRODID: &str = "-//as-courage//Thema der Woche//DE";
const UID_DOMAIN: &str = "as-courage";
const UID_PREFIX: &str = "tdw";

/// Encode day entries with the system clock and a random UID token.
pub fn encode(events: &[DayEvent]) -> String {
    IcsEncoder::new(SystemClock, RandomUidSource).encode(events)
}

/// Writes day entries as all-day, transparent VEVENTs.
///
/// Each call to [`IcsEncoder::encode`] reads the clock and the UID token once,
/// so all events of one document share a `DTSTAMP` and a UID base.
pub struct IcsEncoder<C, U> {
    clock: C,
    uids: U,
}

impl<C: Clock, U: UidSource> IcsEncoder<C, U> {
    pub fn new(clock: C, uids: U) -> Self {
        IcsEncoder { clock, uids }
    }

    pub fn encode(&self, events: &[DayEvent]) -> String {
        let stamp = self.clock.now().format("%Y%m%dT%H%M%SZ").to_string();
        let uid_base = format!("{UID_PREFIX}-{stamp}-{}", self.uids.token());

        let mut out = IcsWriter::default();
        out.line("BEGIN:VCALENDAR");
        out.line("VERSION:2.0");
        out.line(format!("PRODID:{PRODID}"));
        out.line("CALSCALE:GREGORIAN");
        out.line("METHOD:PUBLISH");

        for (index, event) in events.iter().enumerate() {
            out.line("BEGIN:VEVENT");
            out.line(format!("UID:{uid_base}-{index}@{UID_DOMAIN}"));
            out.line(format!("DTSTAMP:{stamp}"));
            out.line(format!("DTSTART;VALUE=DATE:{}", ics_date(event.date)));
            out.line(format!(
                "DTEND;VALUE=DATE:{}",
                ics_date(event.date + Duration::days(1))
            ));
            out.line("TRANSP:TRANSPARENT");
            out.line(format!("SUMMARY:{}", escape_text(&event.summary)));
            out.line(format!("DESCRIPTION:{}", escape_text(&event.description)));
            out.line("END:VEVENT");
        }

        out.line("END:VCALENDAR");

        debug!(events = events.len(), "encoded calendar");
        out.finish()
    }
}

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Accumulates CRLF-terminated content lines.
#[derive(Default)]
struct IcsWriter {
    buf: String,
}

impl IcsWriter {
    fn line(&mut self, line: impl AsRef<str>) {
        self.buf.push_str(line.as_ref());
        self.buf.push_str("\r\n");
    }

    fn finish(self) -> String {
        self.buf
    }
}
