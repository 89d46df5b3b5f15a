//! State Management
//!
//! The loaded record and config, and fragment-backed navigation.

pub mod global;
pub mod navigation;

pub use global::{provide_app_state, AppState};
pub use navigation::{provide_navigation, Navigation, WindowLocation};
