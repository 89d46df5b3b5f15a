//! Global Application State
//!
//! The student record and config are loaded once at startup and shared
//! read-only with every page through context.

use std::rc::Rc;

use campus::{Config, DataError, StudentRecord};
use leptos::*;

/// Read-only data every page renders from
#[derive(Clone)]
pub struct AppState {
    pub record: Rc<StudentRecord>,
    pub config: Rc<Config>,
}

impl AppState {
    /// Load the embedded record with default config
    pub fn load() -> Result<Self, DataError> {
        let record = StudentRecord::load_default()?;
        tracing::info!(
            "Loaded record for {} ({} subjects, {} events)",
            record.profile.name,
            record.subjects.len(),
            record.events.len()
        );
        Ok(Self {
            record: Rc::new(record),
            config: Rc::new(Config::default()),
        })
    }
}

/// Load the state and provide it to the component tree
///
/// Returns the load error so the shell can show it instead of the pages.
pub fn provide_app_state() -> Result<(), String> {
    match AppState::load() {
        Ok(state) => {
            provide_context(state);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to load student record: {}", e);
            Err(e.to_string())
        }
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}
