//! Pages
//!
//! One component per route.

pub mod academics;
pub mod dashboard;
pub mod profile;
pub mod schedule;

pub use academics::Academics;
pub use dashboard::Dashboard;
pub use profile::Profile;
pub use schedule::Schedule;
