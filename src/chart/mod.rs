//! Chart Lifecycle
//!
//! Binds declarative chart specs to an external plotting library through a
//! narrow create/destroy seam:
//!
//! - **spec**: [`ChartSpec`], serializable to the Chart.js config shape
//! - **presets**: the attendance and CGPA trend charts
//! - **scope**: [`ChartScope`], at most one live instance per mount point
//! - **retry**: bounded, cancellable polling while the library loads
//! - **binding**: [`ChartBinding`], scope + polling for a mounted view
//! - **testing**: recording backend and manual scheduler
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use campus::chart::testing::{ManualScheduler, RecordingBackend};
//! use campus::chart::{attendance_chart, ChartBinding, ChartScope, RetryPolicy};
//!
//! let backend = RecordingBackend::loading(&["attendance-chart"]);
//! let scheduler = Rc::new(ManualScheduler::default());
//! let mut binding = ChartBinding::new(
//!     ChartScope::new(backend.clone(), "attendance-chart"),
//!     scheduler.clone(),
//!     RetryPolicy::default(),
//! );
//!
//! binding.update(attendance_chart(92.8, 75.0));
//! backend.set_available(true);
//! scheduler.run_all();
//! assert_eq!(backend.live(), 1);
//!
//! binding.teardown();
//! assert_eq!(backend.live(), 0);
//! ```

mod binding;
mod error;
mod presets;
mod retry;
mod scope;
mod spec;
pub mod testing;

pub use binding::ChartBinding;
pub use error::{ChartError, ChartResult};
pub use presets::{attendance_chart, cgpa_trend_chart, ATTENDANCE_CHART_ID, CGPA_CHART_ID};
pub use retry::{poll, CancelToken, PollOutcome, Retry, RetryPolicy, Scheduler, Step};
pub use scope::{ChartBackend, ChartScope};
pub use spec::{
    Axis, ChartData, ChartKind, ChartOptions, ChartSpec, Colors, Dataset, Grid, Legend, Plugins,
    Scales, Ticks, Title,
};
