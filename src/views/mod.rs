//! View Models
//!
//! What each page renders, computed from the injected record and config. The
//! frontend turns these into markup; the CLI prints them.

pub mod academics;
pub mod dashboard;
pub mod profile;
pub mod schedule;

pub use academics::{AcademicsView, ExpansionState, SubjectRow};
pub use dashboard::{DashboardView, ProgressRing, SummaryCard};
pub use profile::{ProfileDetail, ProfileView};
pub use schedule::{timeline_dot_class, CalendarDay, CalendarMonth, ScheduleTab, WEEKDAY_HEADERS};
