//! Holiday dataset loading for the workday calendar.
//!
//! This module loads the public holiday dataset once at startup and exposes
//! it as an immutable, date-indexed [`HolidayTable`].
//!
//! # Example
//!
//! ```no_run
//! use workday_calendar::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/de").unwrap();
//! println!("Loaded dataset: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidayTable};
