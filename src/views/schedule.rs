//! Schedule view model
//!
//! Tab filtering over the calendar and the quick-calendar month grid.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::{days_in_month, CalendarConfig};
use crate::data::{CalendarEvent, EventKind};

/// Filter tab above the timeline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum ScheduleTab {
    #[default]
    All,
    Exams,
    Events,
    Notices,
}

impl ScheduleTab {
    pub fn all() -> &'static [ScheduleTab] {
        &[
            ScheduleTab::All,
            ScheduleTab::Exams,
            ScheduleTab::Events,
            ScheduleTab::Notices,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleTab::All => "All",
            ScheduleTab::Exams => "Exams",
            ScheduleTab::Events => "Events",
            ScheduleTab::Notices => "Notices",
        }
    }

    /// Event kind this tab selects; `None` selects everything
    ///
    /// A tab matches the kind named by its label minus the trailing plural.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            ScheduleTab::All => None,
            _ => {
                let label = self.label();
                EventKind::from_name(&label[..label.len() - 1])
            }
        }
    }

    /// Events shown under this tab, in their original order
    pub fn filter<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        match self.kind() {
            None => events.iter().collect(),
            Some(kind) => events.iter().filter(|e| e.kind == kind).collect(),
        }
    }

    /// Message shown when the filter leaves nothing
    pub fn empty_message(&self) -> String {
        format!(
            "No {} scheduled right now. Enjoy the break!",
            self.label().to_lowercase()
        )
    }
}

/// Timeline dot classes for an event kind
pub fn timeline_dot_class(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Exam => "bg-red-500 border-red-700",
        EventKind::Event => "bg-blue-500 border-blue-700",
        EventKind::Notice => "bg-amber-500 border-amber-700",
    }
}

/// Day headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub critical: bool,
}

/// Month grid for the quick calendar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarMonth {
    pub title: String,
    /// Empty cells before the 1st in a Sunday-first grid
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Grid for the configured month, `None` if the month is invalid
    pub fn build(config: &CalendarConfig) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(config.year, config.month, 1)?;
        let count = days_in_month(config.year, config.month);

        let days = (1..=count)
            .map(|day| CalendarDay {
                day,
                critical: config.critical_days.contains(&day),
            })
            .collect();

        Some(Self {
            title: first.format("%B %Y").to_string(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        })
    }

    pub fn critical_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().filter(|d| d.critical).map(|d| d.day)
    }
}
