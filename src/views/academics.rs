//! Academics view model

use serde::Serialize;

use crate::chart::{cgpa_trend_chart, ChartSpec};
use crate::config::Config;
use crate::data::{RecordStatus, StudentRecord, Subject};
use crate::tier::{status_badge_class, Tier};

/// Which subject row is expanded
///
/// At most one row is open: opening a row closes the previous one, and
/// toggling the open row closes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Option<String>,
}

impl ExpansionState {
    pub fn toggle(&mut self, code: &str) {
        if self.is_expanded(code) {
            self.expanded = None;
        } else {
            self.expanded = Some(code.to_string());
        }
    }

    pub fn is_expanded(&self, code: &str) -> bool {
        self.expanded.as_deref() == Some(code)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

/// One accordion row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubjectRow {
    pub name: String,
    pub code: String,
    pub faculty: String,
    pub status: RecordStatus,
    pub badge_class: &'static str,
    pub attendance: String,
    pub attendance_tier: Tier,
    pub internal_marks: String,
}

impl SubjectRow {
    fn from_subject(subject: &Subject, config: &Config) -> Self {
        Self {
            name: subject.name.clone(),
            code: subject.code.clone(),
            faculty: subject.faculty.clone(),
            status: subject.status,
            badge_class: status_badge_class(subject.status),
            attendance: format!("{}%", subject.attendance),
            attendance_tier: config.thresholds.classify(subject.attendance),
            internal_marks: format!(
                "{} / {}",
                subject.internal_marks,
                Subject::MAX_INTERNAL_MARKS
            ),
        }
    }
}

/// Everything the academics page renders
#[derive(Debug, Clone, Serialize)]
pub struct AcademicsView {
    pub title: String,
    pub trend_chart: ChartSpec,
    pub subjects: Vec<SubjectRow>,
}

impl AcademicsView {
    pub fn build(record: &StudentRecord, config: &Config) -> Self {
        Self {
            title: format!("Academic Progress (Sem {})", record.profile.current_sem),
            trend_chart: cgpa_trend_chart(&record.academics),
            subjects: record
                .subjects
                .iter()
                .map(|s| SubjectRow::from_subject(s, config))
                .collect(),
        }
    }
}
