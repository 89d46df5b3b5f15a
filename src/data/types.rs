//! Student record types
//!
//! - `StudentProfile`: identity and headline metrics
//! - `AcademicRecord`: one completed or current semester
//! - `Subject`: a current-semester course
//! - `CalendarEvent`: an exam, campus event or notice

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by calendar events
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Headline information about the student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub name: String,
    pub branch: String,
    pub college: String,
    pub email: String,
    pub roll_no: String,
    pub current_sem: u32,
    /// Cumulative grade point average on a 0-10 scale
    pub cgpa: f64,
    pub credits_earned: u32,
    pub credits_total: u32,
    /// Overall attendance on a 0-100 scale
    pub attendance_percentage: f64,
    pub pending_exams: u32,
}

impl StudentProfile {
    /// Credit completion as a percentage, or `None` when no credits are defined
    pub fn credit_completion(&self) -> Option<f64> {
        if self.credits_total == 0 {
            return None;
        }
        Some(self.credits_earned as f64 / self.credits_total as f64 * 100.0)
    }

    /// First character of the name, used for avatars
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Standing attached to a semester or subject
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    Excellent,
    Outstanding,
    Good,
    #[serde(rename = "Needs Focus")]
    NeedsFocus,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Excellent => "Excellent",
            RecordStatus::Outstanding => "Outstanding",
            RecordStatus::Good => "Good",
            RecordStatus::NeedsFocus => "Needs Focus",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result for one semester
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcademicRecord {
    pub sem: u32,
    pub cgpa: f64,
    pub status: RecordStatus,
}

impl AcademicRecord {
    /// Axis label, e.g. "Sem 3"
    pub fn label(&self) -> String {
        format!("Sem {}", self.sem)
    }
}

/// A course in the current semester
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    pub name: String,
    /// Unique course code
    pub code: String,
    pub faculty: String,
    /// Attendance on a 0-100 scale
    pub attendance: f64,
    /// Internal assessment marks out of [`Subject::MAX_INTERNAL_MARKS`]
    pub internal_marks: u32,
    pub status: RecordStatus,
}

impl Subject {
    pub const MAX_INTERNAL_MARKS: u32 = 50;
}

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    Exam,
    Event,
    Notice,
}

impl EventKind {
    pub fn all() -> &'static [EventKind] {
        &[EventKind::Exam, EventKind::Event, EventKind::Notice]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Exam => "Exam",
            EventKind::Event => "Event",
            EventKind::Notice => "Notice",
        }
    }

    /// Parse from the singular display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry on the academic calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub title: String,
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// Free-form display time, e.g. "10:00 AM"
    pub time: String,
    pub detail: String,
    /// Presentation classes attached to the entry
    pub color_tag: String,
}

impl CalendarEvent {
    /// Parsed date, `None` if the stored string is malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, EVENT_DATE_FORMAT).ok()
    }

    /// Short date such as "11/20/2025"; falls back to the raw string
    pub fn short_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    /// Long date such as "Thu Nov 20 2025"; falls back to the raw string
    pub fn long_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%a %b %d %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}
