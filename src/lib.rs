//! # Campus
//!
//! Core library for a single-student academic dashboard. Everything here is
//! platform independent: the WASM frontend in `campus-ui` binds these types to
//! the DOM, and the `campus-cli` binary uses them natively.
//!
//! ## Modules
//!
//! - [`data`]: the student record (profile, semesters, subjects, events)
//! - [`tier`]: threshold-based display tiers for metrics
//! - [`router`]: route resolution and fragment-synchronised navigation
//! - [`chart`]: chart specs, the chart resource scope, bounded retry
//! - [`views`]: derived view models for each page
//! - [`icon`]: icon identifiers shared by navigation and cards
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use campus::router::{MemoryLocation, Route, Router};
//! use campus::views::DashboardView;
//! use campus::{Config, StudentRecord};
//!
//! let record = StudentRecord::load_default().unwrap();
//! let config = Config::default();
//!
//! let mut router = Router::new(MemoryLocation::default());
//! router.navigate("academics");
//! assert_eq!(router.current_route(), Route::Academics);
//!
//! let dashboard = DashboardView::build(&record, &config);
//! assert_eq!(dashboard.cards.len(), 4);
//! ```

pub mod chart;
pub mod config;
pub mod data;
pub mod icon;
pub mod router;
pub mod tier;
pub mod views;

pub use chart::{
    ChartBackend, ChartError, ChartKind, ChartResult, ChartScope, ChartSpec, Dataset, RetryPolicy,
};

pub use config::{Config, ConfigError};

pub use data::{
    AcademicRecord, CalendarEvent, DataError, DataResult, EventKind, RecordStatus, StudentProfile,
    StudentRecord, Subject,
};

pub use icon::Icon;

pub use router::{Location, MemoryLocation, NavItem, Route, Router};

pub use tier::{tier, Thresholds, Tier};
