//! Application state for the workday calendar API.

use std::sync::Arc;

use crate::calendar::Locale;
use crate::config::{ConfigLoader, HolidayTable};

/// Shared application state.
///
/// Holds the holiday dataset, loaded once before the router is built.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given dataset.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        self.config.holidays()
    }

    /// Returns the locale for weekday names.
    pub fn locale(&self) -> Locale {
        self.config.metadata().locale
    }
}
