//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod nav;
pub mod progress_ring;
pub mod summary_card;

pub use chart::{ChartCanvas, GlooScheduler, JsChartBackend};
pub use nav::{MobileHeader, MobileNav, Sidebar};
pub use progress_ring::ProgressRing;
pub use summary_card::SummaryCard;
