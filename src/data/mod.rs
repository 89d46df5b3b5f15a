//! Student Record
//!
//! The read-only record every view renders from. It is constructed once at
//! startup and passed into the view layer, so tests can substitute fixtures.
//!
//! The default record is embedded at build time from `data/student.toml`.
//!
//! # Example
//!
//! ```rust
//! use campus::data::StudentRecord;
//!
//! let record = StudentRecord::load_default().unwrap();
//! assert_eq!(record.profile.current_sem, 7);
//! assert!(record.subject("IT701").is_some());
//! ```

mod error;
mod types;

pub use error::{DataError, DataResult};
pub use types::{
    AcademicRecord, CalendarEvent, EventKind, RecordStatus, StudentProfile, Subject,
    EVENT_DATE_FORMAT,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Embedded default record
const DEFAULT_RECORD: &str = include_str!("../../data/student.toml");

/// One student's complete academic record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub profile: StudentProfile,
    /// Semester history in chronological order
    #[serde(default)]
    pub academics: Vec<AcademicRecord>,
    /// Current-semester subjects in display order
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Calendar entries in display order
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl StudentRecord {
    /// Parse and validate the embedded record
    pub fn load_default() -> DataResult<Self> {
        Self::from_toml_str(DEFAULT_RECORD)
    }

    /// Parse and validate a record from TOML
    pub fn from_toml_str(content: &str) -> DataResult<Self> {
        let record: StudentRecord = toml::from_str(content)?;
        record.validate()?;
        Ok(record)
    }

    /// Read, parse and validate a record file
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let record = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded record for {} from {:?} ({} subjects, {} events)",
            record.profile.name,
            path,
            record.subjects.len(),
            record.events.len()
        );
        Ok(record)
    }

    /// Check structural invariants
    ///
    /// Out-of-range metrics are logged but not rejected.
    pub fn validate(&self) -> DataResult<()> {
        if self.profile.credits_total == 0 {
            return Err(DataError::InvalidCredits(
                "credits_total must be greater than zero".to_string(),
            ));
        }
        if self.profile.credits_earned > self.profile.credits_total {
            tracing::warn!(
                "credits_earned ({}) exceeds credits_total ({})",
                self.profile.credits_earned,
                self.profile.credits_total
            );
        }

        let mut codes = HashSet::new();
        for subject in &self.subjects {
            if !codes.insert(subject.code.as_str()) {
                return Err(DataError::DuplicateSubject(subject.code.clone()));
            }
            if !(0.0..=100.0).contains(&subject.attendance) {
                tracing::warn!(
                    "Subject {} attendance {} is outside 0-100",
                    subject.code,
                    subject.attendance
                );
            }
            if subject.internal_marks > Subject::MAX_INTERNAL_MARKS {
                tracing::warn!(
                    "Subject {} internal marks {} exceed {}",
                    subject.code,
                    subject.internal_marks,
                    Subject::MAX_INTERNAL_MARKS
                );
            }
        }

        for pair in self.academics.windows(2) {
            if pair[1].sem <= pair[0].sem {
                return Err(DataError::SemesterOrder {
                    previous: pair[0].sem,
                    current: pair[1].sem,
                });
            }
        }

        for event in &self.events {
            if event.parsed_date().is_none() {
                return Err(DataError::InvalidDate {
                    title: event.title.clone(),
                    date: event.date.clone(),
                });
            }
        }

        if !(0.0..=10.0).contains(&self.profile.cgpa) {
            tracing::warn!("CGPA {} is outside 0-10", self.profile.cgpa);
        }
        if !(0.0..=100.0).contains(&self.profile.attendance_percentage) {
            tracing::warn!(
                "Attendance {} is outside 0-100",
                self.profile.attendance_percentage
            );
        }

        Ok(())
    }

    /// Look up a subject by course code
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }

    /// Events of one kind, in record order
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Most recent semester entry
    pub fn latest_semester(&self) -> Option<&AcademicRecord> {
        self.academics.last()
    }
}
