//! Schedule resolution: weeks to themes, days to questions.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::setup::{SetupRecord, format_de};
use crate::theme::{Catalog, QUESTIONS_PER_WEEK, ThemeCatalogEntry};

/// Days in a scheduled week (Monday..Sunday).
pub const DAYS_PER_WEEK: usize = 7;

pub const WEEKEND_SUMMARY: &str = "Schönes Wochenende";
pub const WEEKEND_DESCRIPTION: &str = "Schönes Wochenende!";

/// Summary text used when a weekday has no question.
pub const MISSING_QUESTION_SUMMARY: &str = "Tagesimpuls";

/// One resolved all-day entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvent {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub summary: String,
    pub description: String,
}

/// One scheduled week and the theme assigned to it.
#[derive(Debug, Clone, Copy)]
pub struct WeekPlan<'a> {
    pub index: usize,
    pub monday: NaiveDate,
    pub theme: &'a ThemeCatalogEntry,
}

impl WeekPlan<'_> {
    /// Date of the day at `offset` (0 = Monday).
    pub fn day(&self, offset: usize) -> NaiveDate {
        self.monday + Duration::days(offset as i64)
    }

    pub fn friday(&self) -> NaiveDate {
        self.day(QUESTIONS_PER_WEEK - 1)
    }

    /// `dd.mm.yyyy – dd.mm.yyyy`, Monday to Friday.
    pub fn range_label(&self) -> String {
        format!("{} – {}", format_de(self.monday), format_de(self.friday()))
    }

    /// Seven entries for this week, Monday first.
    pub fn days(&self) -> Vec<DayEvent> {
        let title = self.theme.display_title();
        (0..DAYS_PER_WEEK)
            .map(|offset| {
                let date = self.day(offset);
                if offset < QUESTIONS_PER_WEEK {
                    weekday_event(date, &title, self.theme, offset)
                } else {
                    weekend_event(date)
                }
            })
            .collect()
    }
}

fn weekday_event(date: NaiveDate, title: &str, theme: &ThemeCatalogEntry, offset: usize) -> DayEvent {
    let question = theme.question(offset);
    let shown = if question.is_empty() {
        MISSING_QUESTION_SUMMARY
    } else {
        question
    };

    DayEvent {
        date,
        is_weekend: false,
        summary: format!("{title}: {shown}"),
        description: format!(
            "Thema: {title}\nZitat: {quote}\nTagesfrage: {question}",
            quote = theme.quote
        ),
    }
}

fn weekend_event(date: NaiveDate) -> DayEvent {
    DayEvent {
        date,
        is_weekend: true,
        summary: WEEKEND_SUMMARY.to_string(),
        description: WEEKEND_DESCRIPTION.to_string(),
    }
}

/// Resolve the setup to scheduled weeks.
///
/// Empty when the start date is not a valid Monday, when no weeks are
/// requested, or when none of the theme ids are in the catalog. Otherwise the
/// shorter of `weeks_count` and the resolvable themes wins.
pub fn plan_weeks<'a>(setup: &SetupRecord, catalog: &'a Catalog) -> Vec<WeekPlan<'a>> {
    let Some(start) = setup.start_date() else {
        debug!(start = %setup.start_monday, "no valid start Monday, nothing to schedule");
        return Vec::new();
    };

    let themes = catalog.resolve_ids(&setup.theme_ids);
    let dropped = setup.theme_ids.len() - themes.len();
    if dropped > 0 {
        debug!(dropped, "ignoring unknown theme ids");
    }

    let weeks = (setup.weeks_count as usize).min(themes.len());
    debug!(weeks, requested = setup.weeks_count, "resolved schedule");

    themes
        .into_iter()
        .take(weeks)
        .enumerate()
        .map(|(index, theme)| WeekPlan {
            index,
            monday: start + Duration::weeks(index as i64),
            theme,
        })
        .collect()
}

/// Resolve the setup to chronologically ordered day entries, week by week.
pub fn resolve(setup: &SetupRecord, catalog: &Catalog) -> Vec<DayEvent> {
    plan_weeks(setup, catalog)
        .iter()
        .flat_map(WeekPlan::days)
        .collect()
}
